use crate::domain::{AppointmentRequest, Doctor, FormField, FormFields};
use crate::error::{HospitalError, Result};
use crate::sources::{DoctorDirectory, ViewContext};
use std::sync::Arc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormFocus {
    DoctorSelect,
    Field(FormField),
    Submit,
}

impl FormFocus {
    const ORDER: [FormFocus; 7] = [
        FormFocus::DoctorSelect,
        FormFocus::Field(FormField::Name),
        FormFocus::Field(FormField::Email),
        FormFocus::Field(FormField::Phone),
        FormFocus::Field(FormField::Date),
        FormFocus::Field(FormField::Message),
        FormFocus::Submit,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }
}

pub struct AppointmentForm {
    directory: Arc<DoctorDirectory>,
    fields: FormFields,
    attached: Option<Doctor>,
    focus: FormFocus,
}

impl AppointmentForm {
    pub fn new(ctx: &ViewContext) -> Result<Self> {
        Ok(Self {
            directory: ctx.directory("AppointmentForm")?,
            fields: FormFields::default(),
            attached: None,
            focus: FormFocus::DoctorSelect,
        })
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn focus(&self) -> FormFocus {
        self.focus
    }

    pub fn attached(&self) -> Option<&Doctor> {
        self.attached.as_ref()
    }

    pub fn doctors(&self) -> &[Doctor] {
        self.directory.doctors()
    }

    pub fn attach(&mut self, doctor: Doctor) {
        self.attached = Some(doctor);
    }

    pub fn clear_doctor(&mut self) {
        self.attached = None;
    }

    /// Selector change: re-derive the attached doctor from the directory by
    /// name. The empty placeholder (or an unknown name) clears it.
    pub fn select_doctor_by_name(&mut self, name: &str) {
        self.attached = self.directory.find_by_name(name).cloned();
    }

    /// Step through the selector options: placeholder, then every doctor.
    pub fn cycle_doctor(&mut self, forward: bool) {
        let options = self.directory.len() + 1;
        let current = self
            .attached
            .as_ref()
            .and_then(|a| self.directory.doctors().iter().position(|d| d.name == a.name))
            .map(|i| i + 1)
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % options
        } else {
            (current + options - 1) % options
        };

        let name = match next {
            0 => String::new(),
            i => self.directory.doctors()[i - 1].name.clone(),
        };
        self.select_doctor_by_name(&name);
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn input_char(&mut self, c: char) {
        if let FormFocus::Field(field) = self.focus {
            self.fields = self.fields.with_char(field, c);
        }
    }

    pub fn backspace(&mut self) {
        if let FormFocus::Field(field) = self.focus {
            self.fields = self.fields.without_last_char(field);
        }
    }

    pub fn set_field(&mut self, field: FormField, value: &str) {
        self.fields = self.fields.with(field, value.to_string());
    }

    pub fn submit_disabled(&self) -> bool {
        self.attached.is_none()
    }

    /// Package the current fields with the attached doctor, then reset the
    /// fields and return focus to the doctor selector. Nothing changes when
    /// the submission is rejected.
    pub fn submit(&mut self) -> Result<AppointmentRequest> {
        let doctor = self.attached.clone().ok_or(HospitalError::NoDoctorSelected)?;
        self.fields.validate()?;

        let fields = std::mem::take(&mut self.fields);
        self.focus = FormFocus::DoctorSelect;
        Ok(AppointmentRequest::from_fields(fields, doctor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::SeedDoctorSource;

    fn form() -> AppointmentForm {
        let directory = DoctorDirectory::mount(&SeedDoctorSource).unwrap();
        AppointmentForm::new(&ViewContext::with_directory(directory)).unwrap()
    }

    fn fill(form: &mut AppointmentForm) {
        form.set_field(FormField::Name, "Ana");
        form.set_field(FormField::Email, "a@b.com");
        form.set_field(FormField::Phone, "123");
        form.set_field(FormField::Date, "2024-01-01");
    }

    #[test]
    fn selecting_by_name_and_submitting_builds_the_request() {
        let mut form = form();
        form.select_doctor_by_name("Dr. Luis Mendoza");
        fill(&mut form);
        form.focus_prev();

        let request = form.submit().unwrap();
        assert_eq!(request.name, "Ana");
        assert_eq!(request.email, "a@b.com");
        assert_eq!(request.phone, "123");
        assert_eq!(request.date, "2024-01-01");
        assert_eq!(request.message, "");
        assert_eq!(request.doctor.name, "Dr. Luis Mendoza");
        assert_eq!(request.doctor.specialty, "Neurology");

        assert!(form.fields().is_empty());
        assert_eq!(form.focus(), FormFocus::DoctorSelect);
    }

    #[test]
    fn submit_disabled_iff_no_doctor() {
        let mut form = form();
        assert!(form.submit_disabled());
        fill(&mut form);
        assert!(form.submit_disabled());
        assert_eq!(form.submit(), Err(HospitalError::NoDoctorSelected));
        assert_eq!(form.fields().name, "Ana");

        form.select_doctor_by_name("Dr. Juan Pérez");
        assert!(!form.submit_disabled());
        form.set_field(FormField::Name, "");
        assert!(!form.submit_disabled());

        form.select_doctor_by_name("");
        assert!(form.submit_disabled());
        assert!(form.attached().is_none());
    }

    #[test]
    fn invalid_submission_keeps_fields() {
        let mut form = form();
        form.select_doctor_by_name("Dr. Juan Pérez");
        fill(&mut form);
        form.set_field(FormField::Email, "nope");

        assert_eq!(form.submit(), Err(HospitalError::InvalidForm(vec!["email"])));
        assert_eq!(form.fields().email, "nope");
        assert_eq!(form.fields().name, "Ana");
    }

    #[test]
    fn typing_only_edits_the_focused_field() {
        let mut form = form();
        form.input_char('x');
        assert!(form.fields().is_empty());

        form.focus_next();
        form.focus_next();
        for c in "a@b".chars() {
            form.input_char(c);
        }
        form.backspace();
        assert_eq!(form.fields().email, "a@");
        assert_eq!(form.fields().name, "");
    }

    #[test]
    fn cycling_the_selector_wraps_through_the_placeholder() {
        let mut form = form();
        form.cycle_doctor(false);
        assert_eq!(form.attached().map(|d| d.id), Some(4));
        form.cycle_doctor(true);
        assert!(form.attached().is_none());
        form.cycle_doctor(true);
        assert_eq!(form.attached().map(|d| d.id), Some(1));
    }

    #[test]
    fn focus_wraps_both_ways() {
        assert_eq!(FormFocus::Submit.next(), FormFocus::DoctorSelect);
        assert_eq!(FormFocus::DoctorSelect.prev(), FormFocus::Submit);
    }
}
