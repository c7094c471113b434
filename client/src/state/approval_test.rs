use super::*;

fn confirm_section(wizard: &mut ApprovalWizard, section: WizardSection) {
    for key in wizard.data.section_keys(section) {
        wizard.set_field_confirmed(key, true).unwrap();
    }
}

fn at_section(section: WizardSection) -> ApprovalWizard {
    let mut wizard = ApprovalWizard::default();
    wizard.step = WizardStep::Section(section);
    wizard
}

const FIRST_NAME: FieldKey = FieldKey::Basics(BasicsField::FirstName);

// =============================================================
// WizardSection
// =============================================================

#[test]
fn section_order_is_fixed() {
    assert_eq!(WizardSection::Basics.next(), Some(WizardSection::Financials));
    assert_eq!(WizardSection::History.next(), Some(WizardSection::SocialMedia));
    assert_eq!(WizardSection::SocialMedia.next(), None);
    assert_eq!(WizardSection::Basics.prev(), None);
    assert_eq!(WizardSection::Competitors.prev(), Some(WizardSection::Financials));
}

#[test]
fn section_position_matches_order() {
    for (i, section) in WizardSection::ORDER.iter().enumerate() {
        assert_eq!(section.position(), i);
    }
}

#[test]
fn section_list_kinds() {
    assert!(WizardSection::Competitors.is_list());
    assert!(WizardSection::SocialMedia.is_list());
    assert!(!WizardSection::Basics.is_list());
    assert_eq!(WizardSection::SocialMedia.to_string(), "Social Media");
}

// =============================================================
// Seed data
// =============================================================

#[test]
fn seed_starts_unconfirmed() {
    let data = ApprovalData::seeded();
    for section in WizardSection::ORDER {
        for key in data.section_keys(section) {
            let field = data.field(key).unwrap();
            assert!(!field.confirmed, "{key:?}");
            assert!(!field.editing, "{key:?}");
        }
    }
}

#[test]
fn seed_values() {
    let data = ApprovalData::seeded();
    assert_eq!(data.basics.first_name.value, "John");
    assert_eq!(data.basics.phone.value, "(123) 456-7890");
    assert_eq!(data.financials.brand_revenues.value, "$500K");
    assert_eq!(data.competitors.len(), 3);
    assert_eq!(data.competitors[2].brand.value, "Competitor Brand Three");
    assert_eq!(data.social_media.len(), 3);
    assert_eq!(data.social_media[1].platform.value, "Twitter");
    assert_eq!(data.social_media[1].link.value, "https://twitter.com/acme");
}

#[test]
fn section_keys_cover_every_list_entry() {
    let data = ApprovalData::seeded();
    assert_eq!(data.section_keys(WizardSection::Basics).len(), 7);
    assert_eq!(data.section_keys(WizardSection::Competitors).len(), 6);
    assert_eq!(
        data.section_keys(WizardSection::SocialMedia)[3],
        FieldKey::Social { index: 1, field: SocialField::Link }
    );
}

// =============================================================
// Section guard
// =============================================================

#[test]
fn section_confirmed_only_when_every_leaf_true() {
    let mut wizard = ApprovalWizard::default();
    assert!(!wizard.is_section_confirmed(WizardSection::Financials));

    wizard.set_field_confirmed(FieldKey::Financials(FinancialsField::CompanyRevenues), true).unwrap();
    assert!(!wizard.is_section_confirmed(WizardSection::Financials));

    wizard.set_field_confirmed(FieldKey::Financials(FinancialsField::BrandRevenues), true).unwrap();
    assert!(wizard.is_section_confirmed(WizardSection::Financials));
}

#[test]
fn list_section_needs_every_field_of_every_entry() {
    let mut wizard = ApprovalWizard::default();
    confirm_section(&mut wizard, WizardSection::Competitors);
    assert!(wizard.is_section_confirmed(WizardSection::Competitors));

    wizard
        .set_field_confirmed(FieldKey::Competitor { index: 1, field: CompetitorField::Brand }, false)
        .unwrap();
    assert!(!wizard.is_section_confirmed(WizardSection::Competitors));
}

#[test]
fn empty_social_list_is_confirmed() {
    let mut data = ApprovalData::seeded();
    data.social_media.clear();
    assert!(data.is_section_confirmed(WizardSection::SocialMedia));
}

// =============================================================
// Field operations
// =============================================================

#[test]
fn editing_value_keeps_confirmation() {
    let mut wizard = ApprovalWizard::default();
    wizard.set_field_confirmed(FIRST_NAME, true).unwrap();
    wizard.set_field_value(FIRST_NAME, "Jane").unwrap();

    let field = wizard.data.field(FIRST_NAME).unwrap();
    assert_eq!(field.value, "Jane");
    assert!(field.confirmed);
}

#[test]
fn confirming_keeps_value() {
    let mut wizard = ApprovalWizard::default();
    wizard.set_field_confirmed(FIRST_NAME, true).unwrap();
    wizard.set_field_confirmed(FIRST_NAME, false).unwrap();
    assert_eq!(wizard.data.field(FIRST_NAME).unwrap().value, "John");
}

#[test]
fn toggle_editing_is_independent() {
    let mut wizard = ApprovalWizard::default();
    assert_eq!(wizard.toggle_field_editing(FIRST_NAME), Ok(true));
    let field = wizard.data.field(FIRST_NAME).unwrap();
    assert!(field.editing);
    assert!(!field.confirmed);
    assert_eq!(field.value, "John");

    assert_eq!(wizard.toggle_field_editing(FIRST_NAME), Ok(false));
    wizard.set_field_editing(FIRST_NAME, true).unwrap();
    assert!(wizard.data.field(FIRST_NAME).unwrap().editing);
}

#[test]
fn out_of_range_key_is_rejected() {
    let mut wizard = ApprovalWizard::default();
    let key = FieldKey::Social { index: 9, field: SocialField::Link };
    assert_eq!(
        wizard.set_field_value(key, "x"),
        Err(WizardError::IndexOutOfRange { section: WizardSection::SocialMedia, index: 9, len: 3 })
    );
}

#[test]
fn entry_keys_address_one_entry() {
    assert_eq!(
        FieldKey::entry_keys(WizardSection::Competitors, 2),
        vec![
            FieldKey::Competitor { index: 2, field: CompetitorField::Company },
            FieldKey::Competitor { index: 2, field: CompetitorField::Brand },
        ]
    );
    assert!(FieldKey::entry_keys(WizardSection::History, 0).is_empty());
}

#[test]
fn field_key_knows_section_and_label() {
    let key = FieldKey::Competitor { index: 0, field: CompetitorField::Company };
    assert_eq!(key.section(), WizardSection::Competitors);
    assert_eq!(key.label(), "Company");
    assert_eq!(FieldKey::History(HistoryField::BrandFoundingDate).label(), "Brand Founding Date");
}

// =============================================================
// Navigation
// =============================================================

#[test]
fn intro_proceeds_to_basics() {
    let mut wizard = ApprovalWizard::default();
    assert_eq!(wizard.step, WizardStep::Intro);
    assert_eq!(wizard.proceed(), Ok(WizardStep::Section(WizardSection::Basics)));
    assert_eq!(wizard.rotation_deg, ROTATION_STEP_DEG);
    assert_eq!(wizard.proceed(), Err(WizardError::NotAtIntro));
}

#[test]
fn advance_blocked_until_confirmed() {
    let mut wizard = at_section(WizardSection::Basics);
    assert!(!wizard.can_advance());
    assert_eq!(wizard.advance(), Err(WizardError::SectionUnconfirmed(WizardSection::Basics)));
    assert_eq!(wizard.step, WizardStep::Section(WizardSection::Basics));
    assert_eq!(wizard.rotation_deg, 0);
}

#[test]
fn confirm_basics_advance_then_back_keeps_confirmations() {
    let mut wizard = ApprovalWizard::default();
    wizard.proceed().unwrap();
    confirm_section(&mut wizard, WizardSection::Basics);

    assert!(wizard.can_advance());
    assert_eq!(wizard.advance(), Ok(WizardStep::Section(WizardSection::Financials)));
    assert_eq!(wizard.rotation_deg, 2 * ROTATION_STEP_DEG);

    assert!(wizard.can_go_back());
    assert_eq!(wizard.back(), Ok(WizardStep::Section(WizardSection::Basics)));
    assert_eq!(wizard.rotation_deg, ROTATION_STEP_DEG);
    assert!(wizard.is_section_confirmed(WizardSection::Basics));
}

#[test]
fn back_allowed_with_unconfirmed_fields() {
    let mut wizard = at_section(WizardSection::History);
    assert!(wizard.can_go_back());
    assert_eq!(wizard.back(), Ok(WizardStep::Section(WizardSection::Competitors)));
}

#[test]
fn back_rejected_at_first_section() {
    let mut wizard = at_section(WizardSection::Basics);
    assert!(!wizard.can_go_back());
    assert_eq!(wizard.back(), Err(WizardError::AtFirstSection));
}

#[test]
fn navigation_outside_sections_is_rejected() {
    let mut wizard = ApprovalWizard::default();
    assert!(!wizard.can_advance());
    assert!(!wizard.can_go_back());
    assert_eq!(wizard.advance(), Err(WizardError::NotInSection));
    assert_eq!(wizard.back(), Err(WizardError::NotInSection));
}

#[test]
fn last_section_submits() {
    let mut wizard = at_section(WizardSection::SocialMedia);
    confirm_section(&mut wizard, WizardSection::SocialMedia);
    assert_eq!(wizard.advance(), Ok(WizardStep::Submitted));
    assert_eq!(wizard.current_section(), None);
}

#[test]
fn full_walk_reaches_submitted() {
    let mut wizard = ApprovalWizard::default();
    wizard.proceed().unwrap();
    for section in WizardSection::ORDER {
        confirm_section(&mut wizard, section);
        wizard.advance().unwrap();
    }
    assert_eq!(wizard.step, WizardStep::Submitted);
    assert_eq!(wizard.rotation_deg, 6 * ROTATION_STEP_DEG);
}

// =============================================================
// List operations
// =============================================================

#[test]
fn add_appends_empty_unconfirmed_entry() {
    let mut wizard = ApprovalWizard::default();
    confirm_section(&mut wizard, WizardSection::SocialMedia);

    assert_eq!(wizard.add_list_item(WizardSection::SocialMedia), Ok(3));
    assert_eq!(wizard.data.social_media[3], SocialProfile::default());
    assert!(!wizard.is_section_confirmed(WizardSection::SocialMedia));
}

#[test]
fn add_rejected_outside_social() {
    let mut wizard = ApprovalWizard::default();
    assert_eq!(
        wizard.add_list_item(WizardSection::Competitors),
        Err(WizardError::NotExtendable(WizardSection::Competitors))
    );
    assert_eq!(wizard.data.competitors.len(), 3);
}

#[test]
fn add_social_profile_prefills_values() {
    let mut wizard = ApprovalWizard::default();
    let index = wizard.add_social_profile("LinkedIn", "https://www.linkedin.com/in/acme");
    let entry = &wizard.data.social_media[index];
    assert_eq!(entry.platform.value, "LinkedIn");
    assert_eq!(entry.link.value, "https://www.linkedin.com/in/acme");
    assert!(!entry.platform.confirmed && !entry.link.confirmed);
}

#[test]
fn remove_deletes_exactly_one_entry_in_order() {
    let mut wizard = ApprovalWizard::default();
    wizard.set_field_confirmed(FieldKey::Social { index: 2, field: SocialField::Link }, true).unwrap();

    wizard.request_removal(WizardSection::SocialMedia, 1).unwrap();
    assert_eq!(wizard.pending_removal_label().as_deref(), Some("Twitter"));
    assert_eq!(
        wizard.confirm_removal(),
        Ok(PendingRemoval { section: WizardSection::SocialMedia, index: 1 })
    );

    let platforms: Vec<&str> = wizard.data.social_media.iter().map(|s| s.platform.value.as_str()).collect();
    assert_eq!(platforms, vec!["Facebook", "Instagram"]);
    assert!(wizard.data.social_media[1].link.confirmed);
    assert_eq!(wizard.pending_removal, None);
}

#[test]
fn cancel_removal_keeps_list() {
    let mut wizard = ApprovalWizard::default();
    wizard.request_removal(WizardSection::SocialMedia, 0).unwrap();
    wizard.cancel_removal();
    assert_eq!(wizard.confirm_removal(), Err(WizardError::NoPendingRemoval));
    assert_eq!(wizard.data.social_media.len(), 3);
}

#[test]
fn request_removal_validates_target() {
    let mut wizard = ApprovalWizard::default();
    assert_eq!(
        wizard.request_removal(WizardSection::Basics, 0),
        Err(WizardError::NotAList(WizardSection::Basics))
    );
    assert_eq!(
        wizard.request_removal(WizardSection::Competitors, 3),
        Err(WizardError::IndexOutOfRange { section: WizardSection::Competitors, index: 3, len: 3 })
    );
    assert_eq!(wizard.pending_removal, None);
}

#[test]
fn removing_last_social_entry_leaves_section_passable() {
    let mut wizard = at_section(WizardSection::SocialMedia);
    for _ in 0..3 {
        wizard.request_removal(WizardSection::SocialMedia, 0).unwrap();
        wizard.confirm_removal().unwrap();
    }
    assert!(wizard.data.social_media.is_empty());
    assert!(wizard.can_advance());
}

#[test]
fn blank_entry_label_falls_back() {
    let mut wizard = ApprovalWizard::default();
    let index = wizard.add_list_item(WizardSection::SocialMedia).unwrap();
    wizard.request_removal(WizardSection::SocialMedia, index).unwrap();
    assert_eq!(wizard.pending_removal_label().as_deref(), Some("this entry"));
}

#[test]
fn direct_removal_checks_section_and_index() {
    let mut wizard = ApprovalWizard::default();
    wizard.remove_list_item(WizardSection::Competitors, 0).unwrap();
    assert_eq!(wizard.data.competitors.len(), 2);
    assert_eq!(wizard.data.competitors[0].company.value, "Competitor Two Inc.");
    assert_eq!(
        wizard.remove_list_item(WizardSection::SocialMedia, 9),
        Err(WizardError::IndexOutOfRange { section: WizardSection::SocialMedia, index: 9, len: 3 })
    );
    assert_eq!(
        wizard.remove_list_item(WizardSection::History, 0),
        Err(WizardError::NotAList(WizardSection::History))
    );
}
