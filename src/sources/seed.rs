use crate::domain::{DaySchedule, Doctor, Patient, PatientStatus, Service, Weekday};
use std::collections::BTreeMap;

fn week(hours: [&str; 5]) -> BTreeMap<Weekday, DaySchedule> {
    Weekday::ALL
        .iter()
        .zip(hours)
        .map(|(day, h)| (*day, DaySchedule::new(h, true)))
        .collect()
}

fn doctor(id: u32, name: &str, specialty: &str, experience: u32, image: &str, hours: [&str; 5]) -> Doctor {
    Doctor {
        id,
        name: name.to_string(),
        specialty: specialty.to_string(),
        experience,
        image: image.to_string(),
        schedule: week(hours),
    }
}

pub fn seed_doctors() -> Vec<Doctor> {
    vec![
        doctor(1, "Dr. Juan Pérez", "General Surgery", 7, "medico1.jpg",
            ["09:00-17:00", "09:00-17:00", "09:00-13:00", "14:00-17:00", "09:00-17:00"]),
        doctor(2, "Dra. María González", "Pediatrics", 10, "medico3.jpg",
            ["08:00-16:00", "08:00-16:00", "14:00-20:00", "08:00-16:00", "08:00-13:00"]),
        doctor(3, "Dr. Luis Sánchez", "Cardiology", 15, "medico2.jpg",
            ["10:00-18:00", "10:00-18:00", "10:00-18:00", "10:00-18:00", "10:00-15:00"]),
        doctor(4, "Dr. Luis Mendoza", "Neurology", 8, "medico4.jpg",
            ["08:00-14:00", "14:00-20:00", "08:00-14:00", "14:00-20:00", "08:00-14:00"]),
    ]
}

pub fn seed_services() -> Vec<Service> {
    [
        "General Medicine",
        "Cardiology",
        "Pediatrics",
        "Gynecology",
        "Neurology",
        "Radiology",
        "General Surgery",
        "Oncology",
    ]
    .iter()
    .enumerate()
    .map(|(i, name)| Service::new(i as u32 + 1, name))
    .collect()
}

pub fn seed_patients() -> Vec<Patient> {
    vec![
        Patient::new(1, "Ana García", 45, PatientStatus::InConsultation),
        Patient::new(2, "Carlos López", 32, PatientStatus::Waiting),
        Patient::new(3, "María Rodríguez", 28, PatientStatus::Attended),
        Patient::new(4, "Juan Pérez", 56, PatientStatus::Waiting),
    ]
}
