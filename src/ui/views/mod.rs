pub mod appointment_form;
pub mod doctor_list;
pub mod service_list;

pub use appointment_form::{AppointmentForm, FormFocus};
pub use doctor_list::{DoctorCard, DoctorList};
pub use service_list::ServiceListState;
