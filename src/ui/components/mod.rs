pub mod contact;
pub mod home;
pub mod medical_team;
pub mod nav;
pub mod patient_panel;

pub use contact::render_contact;
pub use home::render_home;
pub use medical_team::render_medical_team;
pub use nav::{render_footer, render_header};
pub use patient_panel::render_patient_panel;
