//! Registration form state and submit lifecycle.
//!
//! DESIGN
//! ======
//! `RegisterState` is the raw form; `RegisterFlow` adds blur tracking and
//! the submit phase. Validation is recomputed from the raw strings on every
//! read so there is no cached verdict to fall out of sync.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use std::collections::BTreeSet;

use crate::util::phone::format_phone_input;
use crate::util::validation::{FieldError, is_valid_email, is_valid_mobile, passwords_match};

/// Delay between a valid submit and the success message.
pub const SUBMIT_ANIMATION_MS: u64 = 600;
/// Delay between the success message and the approval route.
pub const SUCCESS_REDIRECT_MS: u64 = 5000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RegisterField {
    FirstName,
    LastName,
    CompanyName,
    BrandName,
    Email,
    Mobile,
    Password,
    ConfirmPassword,
}

impl RegisterField {
    pub const ALL: [Self; 8] = [
        Self::FirstName,
        Self::LastName,
        Self::CompanyName,
        Self::BrandName,
        Self::Email,
        Self::Mobile,
        Self::Password,
        Self::ConfirmPassword,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::CompanyName => "Company Name",
            Self::BrandName => "Brand Name",
            Self::Email => "Email Address",
            Self::Mobile => "Mobile Number",
            Self::Password => "Password",
            Self::ConfirmPassword => "Confirm Password",
        }
    }

    /// HTML input type for the field.
    pub fn input_type(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Mobile => "tel",
            Self::Password | Self::ConfirmPassword => "password",
            Self::FirstName | Self::LastName | Self::CompanyName | Self::BrandName => "text",
        }
    }

    /// DOM id, also used to pair the floating label.
    pub fn id(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::CompanyName => "companyName",
            Self::BrandName => "brandName",
            Self::Email => "email",
            Self::Mobile => "mobile",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
        }
    }
}

/// Raw registration input, all fields start empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterState {
    pub first_name: String,
    pub last_name: String,
    pub company_name: String,
    pub brand_name: String,
    pub email: String,
    pub mobile: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterState {
    pub fn get(&self, field: RegisterField) -> &str {
        match field {
            RegisterField::FirstName => &self.first_name,
            RegisterField::LastName => &self.last_name,
            RegisterField::CompanyName => &self.company_name,
            RegisterField::BrandName => &self.brand_name,
            RegisterField::Email => &self.email,
            RegisterField::Mobile => &self.mobile,
            RegisterField::Password => &self.password,
            RegisterField::ConfirmPassword => &self.confirm_password,
        }
    }

    /// Store `value`. Mobile input is reformatted as the user types.
    pub fn set(&mut self, field: RegisterField, value: &str) {
        let slot = match field {
            RegisterField::FirstName => &mut self.first_name,
            RegisterField::LastName => &mut self.last_name,
            RegisterField::CompanyName => &mut self.company_name,
            RegisterField::BrandName => &mut self.brand_name,
            RegisterField::Email => &mut self.email,
            RegisterField::Mobile => {
                self.mobile = format_phone_input(value);
                return;
            }
            RegisterField::Password => &mut self.password,
            RegisterField::ConfirmPassword => &mut self.confirm_password,
        };
        value.clone_into(slot);
    }

    pub fn all_fields_filled(&self) -> bool {
        RegisterField::ALL.iter().all(|&f| !self.get(f).is_empty())
    }

    /// First rule `field` currently breaks, if any.
    pub fn field_error(&self, field: RegisterField) -> Option<FieldError> {
        let value = self.get(field);
        if value.is_empty() {
            return Some(FieldError::Required);
        }
        match field {
            RegisterField::Email if !is_valid_email(value) => Some(FieldError::InvalidEmail),
            RegisterField::Mobile if !is_valid_mobile(value) => Some(FieldError::InvalidMobile),
            RegisterField::ConfirmPassword if !passwords_match(&self.password, value) => {
                Some(FieldError::PasswordMismatch)
            }
            _ => None,
        }
    }

    /// Gate for the Register button.
    pub fn is_form_valid(&self) -> bool {
        self.all_fields_filled()
            && is_valid_email(&self.email)
            && is_valid_mobile(&self.mobile)
            && passwords_match(&self.password, &self.confirm_password)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Editing,
    /// Logo spin-out animation is running.
    Submitting,
    /// Success message shown, redirect pending.
    Success,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegisterError {
    #[error("Please fill in all fields correctly.")]
    Invalid,
    #[error("registration already submitted")]
    AlreadySubmitted,
}

/// Form plus blur tracking and submit phase.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterFlow {
    pub form: RegisterState,
    pub touched: BTreeSet<RegisterField>,
    pub phase: SubmitPhase,
}

impl RegisterFlow {
    pub fn touch(&mut self, field: RegisterField) {
        self.touched.insert(field);
    }

    pub fn touch_all(&mut self) {
        self.touched.extend(RegisterField::ALL);
    }

    pub fn is_touched(&self, field: RegisterField) -> bool {
        self.touched.contains(&field)
    }

    /// Inline error to render under `field`: touched, non-empty, and invalid.
    pub fn visible_error(&self, field: RegisterField) -> Option<FieldError> {
        if !self.is_touched(field) {
            return None;
        }
        self.form.field_error(field).filter(|e| *e != FieldError::Required)
    }

    /// Validate and enter `Submitting`. Every field is marked touched either way.
    pub fn submit(&mut self) -> Result<(), RegisterError> {
        if self.phase != SubmitPhase::Editing {
            return Err(RegisterError::AlreadySubmitted);
        }
        self.touch_all();
        if !self.form.is_form_valid() {
            return Err(RegisterError::Invalid);
        }
        self.phase = SubmitPhase::Submitting;
        Ok(())
    }

    /// Called when the submit animation finishes.
    pub fn show_success(&mut self) {
        if self.phase == SubmitPhase::Submitting {
            self.phase = SubmitPhase::Success;
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
