#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PatientStatus {
    Waiting,
    InConsultation,
    Attended,
}

impl PatientStatus {
    pub const ALL: [PatientStatus; 3] = [
        PatientStatus::Waiting,
        PatientStatus::InConsultation,
        PatientStatus::Attended,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PatientStatus::Waiting => "Waiting",
            PatientStatus::InConsultation => "In consultation",
            PatientStatus::Attended => "Attended",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Patient {
    pub id: u32,
    pub name: String,
    pub age: u32,
    pub status: PatientStatus,
}

impl Patient {
    pub fn new(id: u32, name: &str, age: u32, status: PatientStatus) -> Self {
        Self {
            id,
            name: name.to_string(),
            age,
            status,
        }
    }
}

/// A single status reassignment produced by a status feed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusChange {
    pub patient_id: u32,
    pub status: PatientStatus,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(PatientStatus),
}

impl StatusFilter {
    pub fn matches(self, status: PatientStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => wanted == status,
        }
    }

    /// All -> Waiting -> In consultation -> Attended -> All
    pub fn next(self) -> Self {
        match self {
            StatusFilter::All => StatusFilter::Only(PatientStatus::Waiting),
            StatusFilter::Only(PatientStatus::Waiting) => {
                StatusFilter::Only(PatientStatus::InConsultation)
            }
            StatusFilter::Only(PatientStatus::InConsultation) => {
                StatusFilter::Only(PatientStatus::Attended)
            }
            StatusFilter::Only(PatientStatus::Attended) => StatusFilter::All,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StatusFilter::All => "All statuses",
            StatusFilter::Only(status) => status.label(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PanelStats {
    pub total: usize,
    pub waiting: usize,
    pub in_consultation: usize,
    pub attended: usize,
}

/// Patient list plus status filter. Filtering and counting are derived on
/// demand so they always reflect the current records.
#[derive(Clone, Debug)]
pub struct PatientPanel {
    patients: Vec<Patient>,
    filter: StatusFilter,
}

impl PatientPanel {
    pub fn new(patients: Vec<Patient>) -> Self {
        Self {
            patients,
            filter: StatusFilter::All,
        }
    }

    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    pub fn patient_ids(&self) -> Vec<u32> {
        self.patients.iter().map(|p| p.id).collect()
    }

    pub fn filter(&self) -> StatusFilter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: StatusFilter) {
        self.filter = filter;
    }

    /// Apply status changes in order. Unknown patient ids are ignored, the
    /// set of patients never grows or shrinks.
    pub fn apply(&mut self, changes: &[StatusChange]) -> usize {
        let mut applied = 0;
        for change in changes {
            if let Some(patient) = self.patients.iter_mut().find(|p| p.id == change.patient_id) {
                patient.status = change.status;
                applied += 1;
            }
        }
        applied
    }

    pub fn filtered(&self) -> Vec<&Patient> {
        self.patients
            .iter()
            .filter(|p| self.filter.matches(p.status))
            .collect()
    }

    pub fn stats(&self) -> PanelStats {
        let count = |status: PatientStatus| self.patients.iter().filter(|p| p.status == status).count();
        PanelStats {
            total: self.patients.len(),
            waiting: count(PatientStatus::Waiting),
            in_consultation: count(PatientStatus::InConsultation),
            attended: count(PatientStatus::Attended),
        }
    }
}
