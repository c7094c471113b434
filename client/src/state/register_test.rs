use super::*;

fn filled() -> RegisterState {
    let mut form = RegisterState::default();
    form.set(RegisterField::FirstName, "Ada");
    form.set(RegisterField::LastName, "Lovelace");
    form.set(RegisterField::CompanyName, "Engines Ltd");
    form.set(RegisterField::BrandName, "Analytical");
    form.set(RegisterField::Email, "ada@engines.io");
    form.set(RegisterField::Mobile, "5551234567");
    form.set(RegisterField::Password, "secret");
    form.set(RegisterField::ConfirmPassword, "secret");
    form
}

// =============================================================
// RegisterState
// =============================================================

#[test]
fn default_form_is_empty_and_invalid() {
    let form = RegisterState::default();
    assert!(!form.all_fields_filled());
    assert!(!form.is_form_valid());
    assert_eq!(form.field_error(RegisterField::FirstName), Some(FieldError::Required));
}

#[test]
fn filled_form_is_valid() {
    let form = filled();
    assert!(form.is_form_valid());
    assert_eq!(form.mobile, "(555) 123-4567");
    for field in RegisterField::ALL {
        assert_eq!(form.field_error(field), None, "{field:?}");
    }
}

#[test]
fn mobile_is_formatted_progressively() {
    let mut form = RegisterState::default();
    for digit in "1234567890".chars() {
        let typed = format!("{}{digit}", form.mobile);
        form.set(RegisterField::Mobile, &typed);
    }
    assert_eq!(form.mobile, "(123) 456-7890");
}

#[test]
fn each_rule_blocks_validity() {
    let mut form = filled();
    form.set(RegisterField::Email, "ada@engines");
    assert!(!form.is_form_valid());
    assert_eq!(form.field_error(RegisterField::Email), Some(FieldError::InvalidEmail));

    let mut form = filled();
    form.set(RegisterField::Mobile, "555123");
    assert!(!form.is_form_valid());
    assert_eq!(form.field_error(RegisterField::Mobile), Some(FieldError::InvalidMobile));

    let mut form = filled();
    form.set(RegisterField::ConfirmPassword, "Secret");
    assert!(!form.is_form_valid());
    assert_eq!(form.field_error(RegisterField::ConfirmPassword), Some(FieldError::PasswordMismatch));

    let mut form = filled();
    form.set(RegisterField::BrandName, "");
    assert!(!form.is_form_valid());
}

#[test]
fn reset_clears_form() {
    let mut form = filled();
    form.reset();
    assert_eq!(form, RegisterState::default());
}

#[test]
fn field_metadata() {
    assert_eq!(RegisterField::Mobile.input_type(), "tel");
    assert_eq!(RegisterField::ConfirmPassword.id(), "confirmPassword");
    assert_eq!(RegisterField::Email.label(), "Email Address");
}

// =============================================================
// RegisterFlow
// =============================================================

#[test]
fn errors_hidden_until_touched() {
    let mut flow = RegisterFlow::default();
    flow.form.set(RegisterField::Email, "nope");
    assert_eq!(flow.visible_error(RegisterField::Email), None);

    flow.touch(RegisterField::Email);
    assert_eq!(flow.visible_error(RegisterField::Email), Some(FieldError::InvalidEmail));
}

#[test]
fn empty_touched_field_shows_nothing() {
    let mut flow = RegisterFlow::default();
    flow.touch(RegisterField::Mobile);
    assert_eq!(flow.visible_error(RegisterField::Mobile), None);
}

#[test]
fn invalid_submit_touches_everything_and_stays_editing() {
    let mut flow = RegisterFlow::default();
    flow.form.set(RegisterField::Email, "bad");
    assert_eq!(flow.submit(), Err(RegisterError::Invalid));
    assert_eq!(flow.phase, SubmitPhase::Editing);
    assert_eq!(flow.touched.len(), RegisterField::ALL.len());
    assert_eq!(flow.visible_error(RegisterField::Email), Some(FieldError::InvalidEmail));
}

#[test]
fn valid_submit_runs_phases() {
    let mut flow = RegisterFlow { form: filled(), ..RegisterFlow::default() };
    assert_eq!(flow.submit(), Ok(()));
    assert_eq!(flow.phase, SubmitPhase::Submitting);
    assert_eq!(flow.submit(), Err(RegisterError::AlreadySubmitted));

    flow.show_success();
    assert_eq!(flow.phase, SubmitPhase::Success);
}

#[test]
fn show_success_ignored_while_editing() {
    let mut flow = RegisterFlow::default();
    flow.show_success();
    assert_eq!(flow.phase, SubmitPhase::Editing);
}

#[test]
fn flow_reset_restores_default() {
    let mut flow = RegisterFlow { form: filled(), ..RegisterFlow::default() };
    flow.submit().unwrap();
    flow.reset();
    assert_eq!(flow, RegisterFlow::default());
}
