pub mod appointment;
pub mod doctor;
pub mod patient;
pub mod service;

pub use appointment::{AppointmentRequest, FormField, FormFields};
pub use doctor::{DaySchedule, Doctor, Weekday};
pub use patient::{PanelStats, Patient, PatientPanel, PatientStatus, StatusChange, StatusFilter};
pub use service::Service;
