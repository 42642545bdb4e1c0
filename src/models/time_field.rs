use clap::ValueEnum;
use serde::Serialize;

/// The four scalar time fields of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
pub enum TimeField {
    #[value(name = "in", alias = "office-in")]
    OfficeIn,
    #[value(name = "out", alias = "office-out")]
    OfficeOut,
    #[value(name = "lunch-start")]
    LunchStart,
    #[value(name = "lunch-end")]
    LunchEnd,
}

impl TimeField {
    pub const ALL: [TimeField; 4] = [
        TimeField::OfficeIn,
        TimeField::OfficeOut,
        TimeField::LunchStart,
        TimeField::LunchEnd,
    ];

    /// Field name as persisted (`officeIn`, ...).
    pub fn key(&self) -> &'static str {
        match self {
            TimeField::OfficeIn => "officeIn",
            TimeField::OfficeOut => "officeOut",
            TimeField::LunchStart => "lunchStart",
            TimeField::LunchEnd => "lunchEnd",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeField::OfficeIn => "Office In",
            TimeField::OfficeOut => "Office Out",
            TimeField::LunchStart => "Lunch Start",
            TimeField::LunchEnd => "Lunch End",
        }
    }
}
