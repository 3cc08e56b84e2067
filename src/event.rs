use crate::domain::{Service, StatusChange};
use crate::error::HospitalError;
use crossterm::event::KeyEvent;
use tokio::sync::mpsc::UnboundedSender;

/// Identifies one mount of the patient panel. Updates carrying an older id
/// arrived after their panel was torn down and are dropped.
pub type MountId = u64;

/// Everything the UI task reacts to, in arrival order.
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize,
    ServicesLoaded(Result<Vec<Service>, HospitalError>),
    PatientUpdates {
        mount: MountId,
        changes: Vec<StatusChange>,
    },
}

pub type EventSender = UnboundedSender<AppEvent>;

