//! Display formatting for report numbers.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Group an integer with US thousands separators (`4750000` -> `4,750,000`).
pub fn thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Width style for a 0–100 progress bar.
pub fn percent_width(score: u8) -> String {
    format!("width: {}%", score.min(100))
}
