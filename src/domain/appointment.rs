use crate::domain::doctor::Doctor;
use crate::error::{HospitalError, Result};
use chrono::NaiveDate;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Phone,
    Date,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Name,
        FormField::Email,
        FormField::Phone,
        FormField::Date,
        FormField::Message,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Full name",
            FormField::Email => "Email",
            FormField::Phone => "Phone",
            FormField::Date => "Date (YYYY-MM-DD)",
            FormField::Message => "Message (optional)",
        }
    }

    fn key(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Phone => "phone",
            FormField::Date => "date",
            FormField::Message => "message",
        }
    }
}

/// Immutable snapshot of the form's text fields. Every edit returns a new
/// snapshot; the view renders whichever one the form currently holds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: String,
    pub message: String,
}

impl FormFields {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::Date => &self.date,
            FormField::Message => &self.message,
        }
    }

    pub fn with(&self, field: FormField, value: String) -> Self {
        let mut next = self.clone();
        match field {
            FormField::Name => next.name = value,
            FormField::Email => next.email = value,
            FormField::Phone => next.phone = value,
            FormField::Date => next.date = value,
            FormField::Message => next.message = value,
        }
        next
    }

    pub fn with_char(&self, field: FormField, c: char) -> Self {
        let mut value = self.get(field).to_string();
        value.push(c);
        self.with(field, value)
    }

    pub fn without_last_char(&self, field: FormField) -> Self {
        let mut value = self.get(field).to_string();
        value.pop();
        self.with(field, value)
    }

    pub fn is_empty(&self) -> bool {
        FormField::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    /// Field-level checks only: required fields present, email shaped like
    /// `local@domain`, date a real calendar date.
    pub fn validate(&self) -> Result<()> {
        let mut invalid = Vec::new();

        if self.name.trim().is_empty() {
            invalid.push(FormField::Name.key());
        }
        if !is_email_shaped(self.email.trim()) {
            invalid.push(FormField::Email.key());
        }
        if self.phone.trim().is_empty() {
            invalid.push(FormField::Phone.key());
        }
        if NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").is_err() {
            invalid.push(FormField::Date.key());
        }

        if invalid.is_empty() {
            Ok(())
        } else {
            Err(HospitalError::InvalidForm(invalid))
        }
    }
}

fn is_email_shaped(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !value.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppointmentRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: String,
    pub message: String,
    pub doctor: Doctor,
}

impl AppointmentRequest {
    pub fn from_fields(fields: FormFields, doctor: Doctor) -> Self {
        Self {
            name: fields.name,
            email: fields.email,
            phone: fields.phone,
            date: fields.date,
            message: fields.message,
            doctor,
        }
    }
}
