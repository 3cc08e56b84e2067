use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HospitalError {
    /// A directory consumer was wired without a mounted provider above it.
    #[error("{consumer} must be used within a DirectoryProvider")]
    DirectoryUnavailable { consumer: &'static str },

    #[error("duplicate {kind} id {id}")]
    DuplicateId { kind: &'static str, id: u32 },

    #[error("service fetch failed: {0}")]
    ServiceFetch(String),

    #[error("no doctor selected")]
    NoDoctorSelected,

    #[error("invalid fields: {}", .0.join(", "))]
    InvalidForm(Vec<&'static str>),
}

pub type Result<T> = std::result::Result<T, HospitalError>;
