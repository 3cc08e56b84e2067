use crate::domain::Doctor;
use crate::error::Result;
use crate::sources::ViewContext;

/// One card per doctor. Whether the details popup is open is the card's own
/// business and never touches its siblings.
#[derive(Clone, Debug)]
pub struct DoctorCard {
    doctor: Doctor,
    details_open: bool,
}

impl DoctorCard {
    pub fn new(doctor: Doctor) -> Self {
        Self {
            doctor,
            details_open: false,
        }
    }

    pub fn doctor(&self) -> &Doctor {
        &self.doctor
    }

    pub fn details_open(&self) -> bool {
        self.details_open
    }

    pub fn open_details(&mut self) {
        self.details_open = true;
    }

    pub fn close_details(&mut self) {
        self.details_open = false;
    }
}

#[derive(Clone, Debug)]
pub struct DoctorList {
    cards: Vec<DoctorCard>,
    cursor: usize,
}

impl DoctorList {
    pub fn new(ctx: &ViewContext) -> Result<Self> {
        let directory = ctx.directory("DoctorList")?;
        let cards = directory
            .doctors()
            .iter()
            .cloned()
            .map(DoctorCard::new)
            .collect();
        Ok(Self { cards, cursor: 0 })
    }

    pub fn cards(&self) -> &[DoctorCard] {
        &self.cards
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.cards.len() {
            self.cursor += 1;
        }
    }

    pub fn highlighted(&self) -> Option<&DoctorCard> {
        self.cards.get(self.cursor)
    }

    pub fn toggle_details(&mut self) {
        if let Some(card) = self.cards.get_mut(self.cursor) {
            if card.details_open {
                card.close_details();
            } else {
                card.open_details();
            }
        }
    }

    /// Closes the highlighted card's popup. Returns false if it was not open.
    pub fn close_details(&mut self) -> bool {
        match self.cards.get_mut(self.cursor) {
            Some(card) if card.details_open => {
                card.close_details();
                true
            }
            _ => false,
        }
    }

    /// The doctor to hand upward when the highlighted card is selected.
    pub fn selected_doctor(&self) -> Option<Doctor> {
        self.highlighted().map(|card| card.doctor.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HospitalError;
    use crate::sources::{DoctorDirectory, SeedDoctorSource};

    fn list() -> DoctorList {
        let directory = DoctorDirectory::mount(&SeedDoctorSource).unwrap();
        DoctorList::new(&ViewContext::with_directory(directory)).unwrap()
    }

    #[test]
    fn one_card_per_doctor_in_directory_order() {
        let list = list();
        let names: Vec<&str> = list.cards().iter().map(|c| c.doctor().name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Dr. Juan Pérez", "Dra. María González", "Dr. Luis Sánchez", "Dr. Luis Mendoza"]
        );
    }

    #[test]
    fn details_state_is_local_to_each_card() {
        let mut list = list();
        list.move_down();
        list.toggle_details();

        let open: Vec<bool> = list.cards().iter().map(|c| c.details_open()).collect();
        assert_eq!(open, vec![false, true, false, false]);

        assert!(list.close_details());
        assert!(!list.close_details());
        assert_eq!(list.selected_doctor().map(|d| d.id), Some(2));
    }

    #[test]
    fn cursor_stays_in_bounds() {
        let mut list = list();
        list.move_up();
        assert_eq!(list.cursor(), 0);
        for _ in 0..10 {
            list.move_down();
        }
        assert_eq!(list.cursor(), 3);
    }

    #[test]
    fn requires_a_directory() {
        assert!(matches!(
            DoctorList::new(&ViewContext::new()),
            Err(HospitalError::DirectoryUnavailable { consumer: "DoctorList" })
        ));
    }
}
