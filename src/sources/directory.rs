use crate::domain::Doctor;
use crate::error::{HospitalError, Result};
use crate::sources::seed::seed_doctors;
use log::{debug, info};
use std::collections::HashSet;
use std::sync::Arc;

/// Where the directory gets its doctors from when it is mounted.
pub trait DoctorSource {
    fn load(&self) -> Vec<Doctor>;
}

pub struct SeedDoctorSource;

impl DoctorSource for SeedDoctorSource {
    fn load(&self) -> Vec<Doctor> {
        seed_doctors()
    }
}

/// Read-only, ordered doctor collection. Built once, never refetched.
#[derive(Debug)]
pub struct DoctorDirectory {
    doctors: Vec<Doctor>,
}

impl DoctorDirectory {
    pub fn from_doctors(doctors: Vec<Doctor>) -> Result<Self> {
        let mut seen = HashSet::new();
        for doctor in &doctors {
            if !seen.insert(doctor.id) {
                return Err(HospitalError::DuplicateId {
                    kind: "doctor",
                    id: doctor.id,
                });
            }
        }
        Ok(Self { doctors })
    }

    pub fn mount(source: &dyn DoctorSource) -> Result<Arc<Self>> {
        let directory = Self::from_doctors(source.load())?;
        info!("Doctor directory mounted with {} doctors", directory.len());
        Ok(Arc::new(directory))
    }

    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn len(&self) -> usize {
        self.doctors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.doctors.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&Doctor> {
        self.doctors.iter().find(|d| d.id == id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Doctor> {
        self.doctors.iter().find(|d| d.name == name)
    }
}

/// Dependencies handed down to views. Directory consumers must be built from
/// a context that carries a mounted directory.
#[derive(Clone, Default)]
pub struct ViewContext {
    directory: Option<Arc<DoctorDirectory>>,
}

impl ViewContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_directory(directory: Arc<DoctorDirectory>) -> Self {
        Self {
            directory: Some(directory),
        }
    }

    pub fn directory(&self, consumer: &'static str) -> Result<Arc<DoctorDirectory>> {
        match &self.directory {
            Some(directory) => Ok(Arc::clone(directory)),
            None => {
                debug!("{} constructed without a directory", consumer);
                Err(HospitalError::DirectoryUnavailable { consumer })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_directory_keeps_order_and_finds_by_name() {
        let directory = DoctorDirectory::mount(&SeedDoctorSource).unwrap();
        let ids: Vec<u32> = directory.doctors().iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert_eq!(directory.find_by_name("Dr. Luis Mendoza").map(|d| d.id), Some(4));
        assert!(directory.find_by_name("Dr. Nobody").is_none());
        assert_eq!(directory.get(2).map(|d| d.specialty.as_str()), Some("Pediatrics"));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut doctors = seed_doctors();
        doctors[1].id = 1;
        let err = DoctorDirectory::from_doctors(doctors).unwrap_err();
        assert_eq!(err, HospitalError::DuplicateId { kind: "doctor", id: 1 });
    }

    #[test]
    fn empty_context_is_a_configuration_error() {
        let err = ViewContext::new().directory("DoctorList").unwrap_err();
        assert_eq!(err.to_string(), "DoctorList must be used within a DirectoryProvider");
    }
}
