//! Author model

use chrono::NaiveDate;
use sqlx::FromRow;

/// Full author model from database.
///
/// Author identifiers are opaque strings; books reference them by value.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Author {
    pub id: String,
    pub first_name: String,
    pub family_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub date_of_death: Option<NaiveDate>,
}

impl Author {
    /// Display name, "family, first" when both parts are known.
    pub fn name(&self) -> String {
        match (self.family_name.is_empty(), self.first_name.is_empty()) {
            (false, false) => format!("{}, {}", self.family_name, self.first_name),
            (false, true) => self.family_name.clone(),
            (true, false) => self.first_name.clone(),
            (true, true) => String::new(),
        }
    }

    pub fn url(&self) -> String {
        format!("/catalog/author/{}", self.id)
    }

    /// "1920-01-02 - 1992-04-06", with blanks for unknown dates
    pub fn lifespan(&self) -> String {
        let fmt = |d: Option<NaiveDate>| d.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default();
        format!("{} - {}", fmt(self.date_of_birth), fmt(self.date_of_death))
    }
}
