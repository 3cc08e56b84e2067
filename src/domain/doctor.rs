use std::collections::BTreeMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    pub const ALL: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DaySchedule {
    pub hours: String, // "09:00-17:00"
    pub available: bool,
}

impl DaySchedule {
    pub fn new(hours: &str, available: bool) -> Self {
        Self {
            hours: hours.to_string(),
            available,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Doctor {
    pub id: u32,
    pub name: String,
    pub specialty: String,
    pub experience: u32, // years
    pub image: String,
    pub schedule: BTreeMap<Weekday, DaySchedule>,
}

impl Doctor {
    /// One-line label used by the form's doctor selector.
    pub fn label(&self) -> String {
        format!("{} - {}", self.name, self.specialty)
    }

    /// Schedule entries in weekday order, one per weekday even when the
    /// doctor has no entry for it.
    pub fn weekly_hours(&self) -> Vec<(Weekday, Option<&DaySchedule>)> {
        Weekday::ALL
            .iter()
            .map(|day| (*day, self.schedule.get(day)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekly_hours_lists_every_weekday_in_order() {
        let mut schedule = BTreeMap::new();
        schedule.insert(Weekday::Friday, DaySchedule::new("08:00-13:00", true));
        schedule.insert(Weekday::Monday, DaySchedule::new("08:00-16:00", false));

        let doctor = Doctor {
            id: 9,
            name: "Dr. Test".to_string(),
            specialty: "Radiology".to_string(),
            experience: 3,
            image: "test.jpg".to_string(),
            schedule,
        };

        let hours = doctor.weekly_hours();
        let days: Vec<Weekday> = hours.iter().map(|(d, _)| *d).collect();
        assert_eq!(days, Weekday::ALL.to_vec());
        assert_eq!(hours[0].1.map(|s| s.available), Some(false));
        assert!(hours[2].1.is_none());
        assert_eq!(doctor.label(), "Dr. Test - Radiology");
    }
}
