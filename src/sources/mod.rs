pub mod directory;
pub mod patient_feed;
pub mod seed;
pub mod services;

pub use directory::{DoctorDirectory, DoctorSource, SeedDoctorSource, ViewContext};
pub use patient_feed::{spawn_status_feed, FeedHandle, RandomStatusFeed, StatusFeed};
pub use seed::{seed_doctors, seed_patients, seed_services};
pub use services::{spawn_service_fetch, SeedServiceSource, ServiceSource};
