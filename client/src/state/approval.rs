//! Approval wizard: section-by-section review of onboarding data.
//!
//! DESIGN
//! ======
//! Every reviewable leaf is a `ReviewField` that carries its value together
//! with its confirmation and edit-mode flags, so inserting or removing a list
//! entry can never misalign a value from its confirmation. Fields are
//! addressed with the typed `FieldKey` union; the owning section follows from
//! the variant.
//!
//! Two behaviors are kept as-is pending a product decision: editing a
//! confirmed value leaves it confirmed, and an empty social list satisfies
//! its section guard.

#[cfg(test)]
#[path = "approval_test.rs"]
mod approval_test;

use std::fmt;

/// Logo rotation applied per navigation step (forward positive).
pub const ROTATION_STEP_DEG: i32 = 90;
/// Delay between final submit and leaving the flow.
pub const SUBMIT_REDIRECT_MS: u64 = 3000;

// =============================================================================
// SECTIONS
// =============================================================================

/// One step of the approval flow. Declaration order is visit order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WizardSection {
    Basics,
    Financials,
    Competitors,
    History,
    SocialMedia,
}

impl WizardSection {
    pub const ORDER: [Self; 5] = [Self::Basics, Self::Financials, Self::Competitors, Self::History, Self::SocialMedia];

    /// Zero-based position in `ORDER`.
    pub fn position(self) -> usize {
        match self {
            Self::Basics => 0,
            Self::Financials => 1,
            Self::Competitors => 2,
            Self::History => 3,
            Self::SocialMedia => 4,
        }
    }

    pub fn next(self) -> Option<Self> {
        Self::ORDER.get(self.position() + 1).copied()
    }

    pub fn prev(self) -> Option<Self> {
        self.position().checked_sub(1).map(|i| Self::ORDER[i])
    }

    pub fn is_first(self) -> bool {
        self.prev().is_none()
    }

    pub fn is_last(self) -> bool {
        self.next().is_none()
    }

    /// Whether the section holds a variable-length list of entries.
    pub fn is_list(self) -> bool {
        matches!(self, Self::Competitors | Self::SocialMedia)
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Basics => "Basics",
            Self::Financials => "Financials",
            Self::Competitors => "Competitors",
            Self::History => "History",
            Self::SocialMedia => "Social Media",
        }
    }
}

impl fmt::Display for WizardSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

// =============================================================================
// FIELDS
// =============================================================================

/// A reviewable value with its confirmation checkbox and edit-mode flag.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReviewField {
    pub value: String,
    pub confirmed: bool,
    pub editing: bool,
}

impl ReviewField {
    /// Unconfirmed field holding `value`.
    pub fn seeded(value: &str) -> Self {
        Self { value: value.to_owned(), confirmed: false, editing: false }
    }
}

/// A record with a fixed set of reviewable fields.
pub trait Reviewable {
    type Field: Copy + 'static;

    /// Every field, in display order.
    const FIELDS: &'static [Self::Field];

    fn field(&self, field: Self::Field) -> &ReviewField;
    fn field_mut(&mut self, field: Self::Field) -> &mut ReviewField;

    /// True iff every field is confirmed.
    fn is_confirmed(&self) -> bool {
        Self::FIELDS.iter().all(|&f| self.field(f).confirmed)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BasicsField {
    FirstName,
    LastName,
    Title,
    CompanyName,
    BrandName,
    Email,
    Phone,
}

impl BasicsField {
    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Title => "Title",
            Self::CompanyName => "Company Name",
            Self::BrandName => "Brand Name",
            Self::Email => "Email",
            Self::Phone => "Phone",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Basics {
    pub first_name: ReviewField,
    pub last_name: ReviewField,
    pub title: ReviewField,
    pub company_name: ReviewField,
    pub brand_name: ReviewField,
    pub email: ReviewField,
    pub phone: ReviewField,
}

impl Reviewable for Basics {
    type Field = BasicsField;
    const FIELDS: &'static [BasicsField] = &[
        BasicsField::FirstName,
        BasicsField::LastName,
        BasicsField::Title,
        BasicsField::CompanyName,
        BasicsField::BrandName,
        BasicsField::Email,
        BasicsField::Phone,
    ];

    fn field(&self, field: BasicsField) -> &ReviewField {
        match field {
            BasicsField::FirstName => &self.first_name,
            BasicsField::LastName => &self.last_name,
            BasicsField::Title => &self.title,
            BasicsField::CompanyName => &self.company_name,
            BasicsField::BrandName => &self.brand_name,
            BasicsField::Email => &self.email,
            BasicsField::Phone => &self.phone,
        }
    }

    fn field_mut(&mut self, field: BasicsField) -> &mut ReviewField {
        match field {
            BasicsField::FirstName => &mut self.first_name,
            BasicsField::LastName => &mut self.last_name,
            BasicsField::Title => &mut self.title,
            BasicsField::CompanyName => &mut self.company_name,
            BasicsField::BrandName => &mut self.brand_name,
            BasicsField::Email => &mut self.email,
            BasicsField::Phone => &mut self.phone,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FinancialsField {
    CompanyRevenues,
    BrandRevenues,
}

impl FinancialsField {
    pub fn label(self) -> &'static str {
        match self {
            Self::CompanyRevenues => "Company Revenues",
            Self::BrandRevenues => "Brand Revenues",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Financials {
    pub company_revenues: ReviewField,
    pub brand_revenues: ReviewField,
}

impl Reviewable for Financials {
    type Field = FinancialsField;
    const FIELDS: &'static [FinancialsField] = &[FinancialsField::CompanyRevenues, FinancialsField::BrandRevenues];

    fn field(&self, field: FinancialsField) -> &ReviewField {
        match field {
            FinancialsField::CompanyRevenues => &self.company_revenues,
            FinancialsField::BrandRevenues => &self.brand_revenues,
        }
    }

    fn field_mut(&mut self, field: FinancialsField) -> &mut ReviewField {
        match field {
            FinancialsField::CompanyRevenues => &mut self.company_revenues,
            FinancialsField::BrandRevenues => &mut self.brand_revenues,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CompetitorField {
    Company,
    Brand,
}

impl CompetitorField {
    pub fn label(self) -> &'static str {
        match self {
            Self::Company => "Company",
            Self::Brand => "Brand",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Competitor {
    pub company: ReviewField,
    pub brand: ReviewField,
}

impl Reviewable for Competitor {
    type Field = CompetitorField;
    const FIELDS: &'static [CompetitorField] = &[CompetitorField::Company, CompetitorField::Brand];

    fn field(&self, field: CompetitorField) -> &ReviewField {
        match field {
            CompetitorField::Company => &self.company,
            CompetitorField::Brand => &self.brand,
        }
    }

    fn field_mut(&mut self, field: CompetitorField) -> &mut ReviewField {
        match field {
            CompetitorField::Company => &mut self.company,
            CompetitorField::Brand => &mut self.brand,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HistoryField {
    BrandFoundingDate,
    HistoricalTidbits,
}

impl HistoryField {
    pub fn label(self) -> &'static str {
        match self {
            Self::BrandFoundingDate => "Brand Founding Date",
            Self::HistoricalTidbits => "Historical Tidbits",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct History {
    pub brand_founding_date: ReviewField,
    pub historical_tidbits: ReviewField,
}

impl Reviewable for History {
    type Field = HistoryField;
    const FIELDS: &'static [HistoryField] = &[HistoryField::BrandFoundingDate, HistoryField::HistoricalTidbits];

    fn field(&self, field: HistoryField) -> &ReviewField {
        match field {
            HistoryField::BrandFoundingDate => &self.brand_founding_date,
            HistoryField::HistoricalTidbits => &self.historical_tidbits,
        }
    }

    fn field_mut(&mut self, field: HistoryField) -> &mut ReviewField {
        match field {
            HistoryField::BrandFoundingDate => &mut self.brand_founding_date,
            HistoryField::HistoricalTidbits => &mut self.historical_tidbits,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SocialField {
    Platform,
    Link,
}

impl SocialField {
    pub fn label(self) -> &'static str {
        match self {
            Self::Platform => "Platform",
            Self::Link => "Link",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SocialProfile {
    pub platform: ReviewField,
    pub link: ReviewField,
}

impl Reviewable for SocialProfile {
    type Field = SocialField;
    const FIELDS: &'static [SocialField] = &[SocialField::Platform, SocialField::Link];

    fn field(&self, field: SocialField) -> &ReviewField {
        match field {
            SocialField::Platform => &self.platform,
            SocialField::Link => &self.link,
        }
    }

    fn field_mut(&mut self, field: SocialField) -> &mut ReviewField {
        match field {
            SocialField::Platform => &mut self.platform,
            SocialField::Link => &mut self.link,
        }
    }
}

/// Address of one reviewable field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldKey {
    Basics(BasicsField),
    Financials(FinancialsField),
    Competitor { index: usize, field: CompetitorField },
    History(HistoryField),
    Social { index: usize, field: SocialField },
}

impl FieldKey {
    pub fn section(self) -> WizardSection {
        match self {
            Self::Basics(_) => WizardSection::Basics,
            Self::Financials(_) => WizardSection::Financials,
            Self::Competitor { .. } => WizardSection::Competitors,
            Self::History(_) => WizardSection::History,
            Self::Social { .. } => WizardSection::SocialMedia,
        }
    }

    /// Keys of one list entry, in display order. Empty for fixed sections.
    pub fn entry_keys(section: WizardSection, index: usize) -> Vec<Self> {
        match section {
            WizardSection::Competitors => {
                Competitor::FIELDS.iter().map(|&field| Self::Competitor { index, field }).collect()
            }
            WizardSection::SocialMedia => SocialProfile::FIELDS.iter().map(|&field| Self::Social { index, field }).collect(),
            WizardSection::Basics | WizardSection::Financials | WizardSection::History => Vec::new(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Basics(f) => f.label(),
            Self::Financials(f) => f.label(),
            Self::Competitor { field, .. } => field.label(),
            Self::History(f) => f.label(),
            Self::Social { field, .. } => field.label(),
        }
    }
}

// =============================================================================
// ERRORS
// =============================================================================

/// A rejected wizard action. The UI disables controls instead of showing these.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum WizardError {
    #[error("review has already started")]
    NotAtIntro,
    #[error("no section is active")]
    NotInSection,
    #[error("{0} has unconfirmed fields")]
    SectionUnconfirmed(WizardSection),
    #[error("already at the first section")]
    AtFirstSection,
    #[error("{0} is not a list section")]
    NotAList(WizardSection),
    #[error("{0} does not accept new entries")]
    NotExtendable(WizardSection),
    #[error("{section} entry {index} is out of range (len {len})")]
    IndexOutOfRange { section: WizardSection, index: usize, len: usize },
    #[error("no removal is awaiting confirmation")]
    NoPendingRemoval,
}

// =============================================================================
// APPROVAL DATA
// =============================================================================

/// All data under review, one strongly typed record per section.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApprovalData {
    pub basics: Basics,
    pub financials: Financials,
    pub competitors: Vec<Competitor>,
    pub history: History,
    pub social_media: Vec<SocialProfile>,
}

fn competitor(company: &str, brand: &str) -> Competitor {
    Competitor { company: ReviewField::seeded(company), brand: ReviewField::seeded(brand) }
}

fn social(platform: &str, link: &str) -> SocialProfile {
    SocialProfile { platform: ReviewField::seeded(platform), link: ReviewField::seeded(link) }
}

impl ApprovalData {
    /// Sample data shown when the wizard mounts. Nothing starts confirmed.
    pub fn seeded() -> Self {
        Self {
            basics: Basics {
                first_name: ReviewField::seeded("John"),
                last_name: ReviewField::seeded("Doe"),
                title: ReviewField::seeded("CEO"),
                company_name: ReviewField::seeded("ACME Inc."),
                brand_name: ReviewField::seeded("ACME Brand"),
                email: ReviewField::seeded("john.doe@example.com"),
                phone: ReviewField::seeded("(123) 456-7890"),
            },
            financials: Financials {
                company_revenues: ReviewField::seeded("$1M"),
                brand_revenues: ReviewField::seeded("$500K"),
            },
            competitors: vec![
                competitor("Competitor One Inc.", "Competitor Brand One"),
                competitor("Competitor Two Inc.", "Competitor Brand Two"),
                competitor("Competitor Three Inc.", "Competitor Brand Three"),
            ],
            history: History {
                brand_founding_date: ReviewField::seeded("January 1, 2000"),
                historical_tidbits: ReviewField::seeded(
                    "Brand X was the only brand in the category until 2021 when several competitors entered.",
                ),
            },
            social_media: vec![
                social("Facebook", "https://facebook.com/acme"),
                social("Twitter", "https://twitter.com/acme"),
                social("Instagram", "https://instagram.com/acme"),
            ],
        }
    }

    /// Guard for leaving `section`: every confirmation leaf is set.
    ///
    /// List sections require every field of every entry; an empty list passes.
    pub fn is_section_confirmed(&self, section: WizardSection) -> bool {
        match section {
            WizardSection::Basics => self.basics.is_confirmed(),
            WizardSection::Financials => self.financials.is_confirmed(),
            WizardSection::Competitors => self.competitors.iter().all(Reviewable::is_confirmed),
            WizardSection::History => self.history.is_confirmed(),
            WizardSection::SocialMedia => self.social_media.iter().all(Reviewable::is_confirmed),
        }
    }

    /// Entry count of a list section, `None` for fixed sections.
    pub fn list_len(&self, section: WizardSection) -> Option<usize> {
        match section {
            WizardSection::Competitors => Some(self.competitors.len()),
            WizardSection::SocialMedia => Some(self.social_media.len()),
            WizardSection::Basics | WizardSection::Financials | WizardSection::History => None,
        }
    }

    /// Every field key of `section`, in display order.
    pub fn section_keys(&self, section: WizardSection) -> Vec<FieldKey> {
        match section {
            WizardSection::Basics => Basics::FIELDS.iter().map(|&f| FieldKey::Basics(f)).collect(),
            WizardSection::Financials => Financials::FIELDS.iter().map(|&f| FieldKey::Financials(f)).collect(),
            WizardSection::History => History::FIELDS.iter().map(|&f| FieldKey::History(f)).collect(),
            WizardSection::Competitors | WizardSection::SocialMedia => {
                let len = self.list_len(section).unwrap_or(0);
                (0..len).flat_map(|index| FieldKey::entry_keys(section, index)).collect()
            }
        }
    }

    pub fn field(&self, key: FieldKey) -> Result<&ReviewField, WizardError> {
        match key {
            FieldKey::Basics(f) => Ok(self.basics.field(f)),
            FieldKey::Financials(f) => Ok(self.financials.field(f)),
            FieldKey::Competitor { index, field } => {
                entry(&self.competitors, WizardSection::Competitors, index).map(|c| c.field(field))
            }
            FieldKey::History(f) => Ok(self.history.field(f)),
            FieldKey::Social { index, field } => {
                entry(&self.social_media, WizardSection::SocialMedia, index).map(|s| s.field(field))
            }
        }
    }

    fn field_mut(&mut self, key: FieldKey) -> Result<&mut ReviewField, WizardError> {
        match key {
            FieldKey::Basics(f) => Ok(self.basics.field_mut(f)),
            FieldKey::Financials(f) => Ok(self.financials.field_mut(f)),
            FieldKey::Competitor { index, field } => {
                entry_mut(&mut self.competitors, WizardSection::Competitors, index).map(|c| c.field_mut(field))
            }
            FieldKey::History(f) => Ok(self.history.field_mut(f)),
            FieldKey::Social { index, field } => {
                entry_mut(&mut self.social_media, WizardSection::SocialMedia, index).map(|s| s.field_mut(field))
            }
        }
    }
}

fn entry<T>(items: &[T], section: WizardSection, index: usize) -> Result<&T, WizardError> {
    let len = items.len();
    items.get(index).ok_or(WizardError::IndexOutOfRange { section, index, len })
}

fn entry_mut<T>(items: &mut [T], section: WizardSection, index: usize) -> Result<&mut T, WizardError> {
    let len = items.len();
    items.get_mut(index).ok_or(WizardError::IndexOutOfRange { section, index, len })
}

// =============================================================================
// WIZARD CONTROLLER
// =============================================================================

/// Where the user is in the approval flow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WizardStep {
    /// Welcome screen shown once before the first section.
    #[default]
    Intro,
    Section(WizardSection),
    /// Terminal state after the last section is submitted.
    Submitted,
}

/// A list entry awaiting delete confirmation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingRemoval {
    pub section: WizardSection,
    pub index: usize,
}

/// State machine driving the approval page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApprovalWizard {
    pub step: WizardStep,
    pub data: ApprovalData,
    pub pending_removal: Option<PendingRemoval>,
    /// Cosmetic logo rotation; moves by `ROTATION_STEP_DEG` per navigation.
    pub rotation_deg: i32,
}

impl Default for ApprovalWizard {
    fn default() -> Self {
        Self::new(ApprovalData::seeded())
    }
}

impl ApprovalWizard {
    pub fn new(data: ApprovalData) -> Self {
        Self { step: WizardStep::Intro, data, pending_removal: None, rotation_deg: 0 }
    }

    pub fn current_section(&self) -> Option<WizardSection> {
        match self.step {
            WizardStep::Section(section) => Some(section),
            WizardStep::Intro | WizardStep::Submitted => None,
        }
    }

    pub fn is_section_confirmed(&self, section: WizardSection) -> bool {
        self.data.is_section_confirmed(section)
    }

    /// Leave the intro screen for the first section.
    pub fn proceed(&mut self) -> Result<WizardStep, WizardError> {
        if self.step != WizardStep::Intro {
            return Err(WizardError::NotAtIntro);
        }
        self.step = WizardStep::Section(WizardSection::ORDER[0]);
        self.rotation_deg += ROTATION_STEP_DEG;
        Ok(self.step)
    }

    /// Whether "Next"/"Submit" is enabled.
    pub fn can_advance(&self) -> bool {
        self.current_section().is_some_and(|s| self.is_section_confirmed(s))
    }

    /// Move to the next section, or submit from the last one.
    pub fn advance(&mut self) -> Result<WizardStep, WizardError> {
        let section = self.current_section().ok_or(WizardError::NotInSection)?;
        if !self.is_section_confirmed(section) {
            return Err(WizardError::SectionUnconfirmed(section));
        }
        self.step = section.next().map_or(WizardStep::Submitted, WizardStep::Section);
        self.rotation_deg += ROTATION_STEP_DEG;
        Ok(self.step)
    }

    /// Whether "Back" is shown.
    pub fn can_go_back(&self) -> bool {
        self.current_section().is_some_and(|s| !s.is_first())
    }

    /// Return to the previous section. Never touches confirmation state.
    pub fn back(&mut self) -> Result<WizardStep, WizardError> {
        let section = self.current_section().ok_or(WizardError::NotInSection)?;
        let prev = section.prev().ok_or(WizardError::AtFirstSection)?;
        self.step = WizardStep::Section(prev);
        self.rotation_deg -= ROTATION_STEP_DEG;
        Ok(self.step)
    }

    /// Overwrite a value. Confirmation is left as it was.
    pub fn set_field_value(&mut self, key: FieldKey, value: impl Into<String>) -> Result<(), WizardError> {
        self.data.field_mut(key)?.value = value.into();
        Ok(())
    }

    /// Overwrite a confirmation checkbox. The value is left as it was.
    pub fn set_field_confirmed(&mut self, key: FieldKey, confirmed: bool) -> Result<(), WizardError> {
        self.data.field_mut(key)?.confirmed = confirmed;
        Ok(())
    }

    pub fn set_field_editing(&mut self, key: FieldKey, editing: bool) -> Result<(), WizardError> {
        self.data.field_mut(key)?.editing = editing;
        Ok(())
    }

    /// Flip edit mode for one field and return the new flag.
    pub fn toggle_field_editing(&mut self, key: FieldKey) -> Result<bool, WizardError> {
        let field = self.data.field_mut(key)?;
        field.editing = !field.editing;
        Ok(field.editing)
    }

    /// Append an empty, unconfirmed entry. Only social media is extendable.
    pub fn add_list_item(&mut self, section: WizardSection) -> Result<usize, WizardError> {
        match section {
            WizardSection::SocialMedia => {
                self.data.social_media.push(SocialProfile::default());
                Ok(self.data.social_media.len() - 1)
            }
            other => Err(WizardError::NotExtendable(other)),
        }
    }

    /// Append a social entry pre-filled from the add dialog, still unconfirmed.
    pub fn add_social_profile(&mut self, platform: &str, link: &str) -> usize {
        self.data.social_media.push(social(platform, link));
        self.data.social_media.len() - 1
    }

    /// First half of a removal: remember which entry the dialog is about.
    pub fn request_removal(&mut self, section: WizardSection, index: usize) -> Result<(), WizardError> {
        let len = self.data.list_len(section).ok_or(WizardError::NotAList(section))?;
        if index >= len {
            return Err(WizardError::IndexOutOfRange { section, index, len });
        }
        self.pending_removal = Some(PendingRemoval { section, index });
        Ok(())
    }

    pub fn cancel_removal(&mut self) {
        self.pending_removal = None;
    }

    /// Second half of a removal: drop the pending entry, value and flags together.
    pub fn confirm_removal(&mut self) -> Result<PendingRemoval, WizardError> {
        let pending = self.pending_removal.take().ok_or(WizardError::NoPendingRemoval)?;
        self.remove_list_item(pending.section, pending.index)?;
        Ok(pending)
    }

    /// Remove one list entry immediately. The UI goes through
    /// `request_removal` / `confirm_removal` instead.
    pub fn remove_list_item(&mut self, section: WizardSection, index: usize) -> Result<(), WizardError> {
        match section {
            WizardSection::Competitors => {
                entry(&self.data.competitors, section, index)?;
                self.data.competitors.remove(index);
            }
            WizardSection::SocialMedia => {
                entry(&self.data.social_media, section, index)?;
                self.data.social_media.remove(index);
            }
            other => return Err(WizardError::NotAList(other)),
        }
        Ok(())
    }

    /// Name shown in the delete dialog for the pending entry.
    pub fn pending_removal_label(&self) -> Option<String> {
        let PendingRemoval { section, index } = self.pending_removal?;
        let label = match section {
            WizardSection::Competitors => self.data.competitors.get(index).map(|c| c.company.value.clone()),
            WizardSection::SocialMedia => self.data.social_media.get(index).map(|s| s.platform.value.clone()),
            WizardSection::Basics | WizardSection::Financials | WizardSection::History => None,
        }?;
        Some(if label.trim().is_empty() { "this entry".to_owned() } else { label })
    }
}
