use chrono::{Datelike, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

pub mod compatibility;
pub mod numerology;
pub mod report;
pub mod zodiac;

pub use compatibility::{
    compatibility_label, CompatibilityLabel, CompatibilityModel, CompatibilityResult,
    MatchInsights, MatchScore, ScoreBucket, ScoreDistribution, ScoreWeights,
};
pub use numerology::{
    birthday_number, life_path_description, life_path_number, life_path_title, life_path_traits,
    lo_shu_grid, personal_year_number, reduce_digits, LoShuCell, LoShuGrid,
};
pub use report::{RelationshipMode, ReportData};
pub use zodiac::{
    ChineseAnimal, ChineseElement, ChineseZodiac, WesternElement, WesternSign, WesternZodiac,
};

// ---------------------------
// ## Error Handling
// ---------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum SynastryError {
    InvalidBirthDate { year: i32, month: u32, day: u32 },
}

impl fmt::Display for SynastryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SynastryError::InvalidBirthDate { year, month, day } => {
                write!(f, "Invalid birth date: {:04}-{:02}-{:02}", year, month, day)
            }
        }
    }
}

impl Error for SynastryError {}

// ---------------------------
// ## Birth Data
// ---------------------------

/// Raw birth data supplied by the caller. Time and place are carried for
/// callers that collect them but play no part in any calculation here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthRecord {
    pub date: NaiveDate,
    pub time: Option<NaiveTime>,
    pub place: Option<String>,
}

impl BirthRecord {
    /// Validates the calendar date. This is the only fallible entry point in
    /// the crate; everything downstream is total over valid dates.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, SynastryError> {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(SynastryError::InvalidBirthDate { year, month, day })?;
        Ok(BirthRecord {
            date,
            time: None,
            place: None,
        })
    }

    pub fn from_date(date: NaiveDate) -> Self {
        BirthRecord {
            date,
            time: None,
            place: None,
        }
    }

    pub fn with_time(mut self, time: NaiveTime) -> Self {
        self.time = Some(time);
        self
    }

    pub fn with_place(mut self, place: impl Into<String>) -> Self {
        self.place = Some(place.into());
        self
    }
}

// ---------------------------
// ## Numerology Profile
// ---------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumerologyProfile {
    pub life_path: u8,
    pub birthday_number: u8,
    pub personal_year: u8,
}

impl NumerologyProfile {
    /// The personal year shifts with the calendar, so the reference year is
    /// an explicit parameter rather than a hidden clock read.
    pub fn calculate(date: NaiveDate, reference_year: i32) -> Self {
        NumerologyProfile {
            life_path: numerology::life_path_number(date),
            birthday_number: numerology::birthday_number(date.day()),
            personal_year: numerology::personal_year_number(
                date.month(),
                date.day(),
                reference_year,
            ),
        }
    }
}

// ---------------------------
// ## Cosmic Profile
// ---------------------------

/// The fully resolved attribute bundle for one person. Everything in here is
/// recomputed from the birth date on demand; nothing is authoritative state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CosmicProfile {
    pub name: String,
    pub birth_date: NaiveDate,
    pub numerology: NumerologyProfile,
    pub western: WesternZodiac,
    pub chinese: ChineseZodiac,
}

impl CosmicProfile {
    pub fn new(name: impl Into<String>, birth: &BirthRecord, reference_year: i32) -> Self {
        let date = birth.date;
        CosmicProfile {
            name: name.into(),
            birth_date: date,
            numerology: NumerologyProfile::calculate(date, reference_year),
            western: WesternZodiac::from_date(date),
            chinese: ChineseZodiac::from_year(date.year()),
        }
    }

    pub fn lo_shu_grid(&self) -> LoShuGrid {
        numerology::lo_shu_grid(
            self.birth_date.month(),
            self.birth_date.day(),
            self.birth_date.year(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_birth_date_rejected() {
        assert!(BirthRecord::new(1990, 2, 30).is_err());
        assert!(BirthRecord::new(1990, 13, 1).is_err());
        assert!(BirthRecord::new(1990, 0, 10).is_err());

        let err = BirthRecord::new(2001, 2, 29).unwrap_err();
        assert_eq!(
            err,
            SynastryError::InvalidBirthDate {
                year: 2001,
                month: 2,
                day: 29
            }
        );
        assert!(err.to_string().contains("2001-02-29"));
    }

    #[test]
    fn test_valid_birth_date_accepted() {
        let birth = BirthRecord::new(2000, 2, 29).unwrap();
        assert_eq!(birth.date, NaiveDate::from_ymd_opt(2000, 2, 29).unwrap());
        assert!(birth.time.is_none());
        assert!(birth.place.is_none());
    }

    #[test]
    fn test_profile_assembly() {
        let birth = BirthRecord::new(1990, 7, 15).unwrap();
        let profile = CosmicProfile::new("Asha", &birth, 2026);

        assert_eq!(profile.numerology.life_path, 5);
        assert_eq!(profile.numerology.birthday_number, 6);
        assert_eq!(profile.western.sign, WesternSign::Cancer);
        assert_eq!(profile.chinese.animal, ChineseAnimal::Horse);
    }

    #[test]
    fn test_profile_is_deterministic() {
        let birth = BirthRecord::new(1988, 2, 16).unwrap();
        let a = CosmicProfile::new("Ravi", &birth, 2026);
        let b = CosmicProfile::new("Ravi", &birth, 2026);
        assert_eq!(a, b);
    }

    #[test]
    fn test_time_and_place_do_not_affect_attributes() {
        let birth = BirthRecord::new(1991, 6, 18).unwrap();
        let with_extras = birth
            .clone()
            .with_time(NaiveTime::from_hms_opt(7, 10, 0).unwrap())
            .with_place("Calicut");

        let plain = CosmicProfile::new("Aghil", &birth, 2026);
        let extra = CosmicProfile::new("Aghil", &with_extras, 2026);
        assert_eq!(plain, extra);
    }
}
