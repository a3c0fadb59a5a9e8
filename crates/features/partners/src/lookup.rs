//! Substring lookup over partner records.
//!
//! Terms are OR-combined: a record matches when any non-empty term is a
//! substring of the corresponding field. Names and emails compare
//! case-insensitively, phones compare on digits only, so `555-1234`
//! finds `(555) 1234`.

use rhub_domain::partner::{LookupQuery, PartnerRecord};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedQuery {
    name: String,
    phone: String,
    email: String,
}

impl NormalizedQuery {
    #[must_use]
    pub fn new(name: Option<&str>, phone: Option<&str>, email: Option<&str>) -> Self {
        Self {
            name: name.map(|n| n.trim().to_lowercase()).unwrap_or_default(),
            phone: phone.map(digits_only).unwrap_or_default(),
            email: email.map(|e| e.trim().to_lowercase()).unwrap_or_default(),
        }
    }

    /// No usable term: blank text and phones without digits do not count.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.phone.is_empty() && self.email.is_empty()
    }

    #[must_use]
    pub fn matches(&self, name: &str, phone: &str, email: &str) -> bool {
        (!self.name.is_empty() && name.to_lowercase().contains(&self.name))
            || (!self.phone.is_empty() && digits_only(phone).contains(&self.phone))
            || (!self.email.is_empty() && email.to_lowercase().contains(&self.email))
    }

    #[must_use]
    pub fn matches_record(&self, record: &PartnerRecord) -> bool {
        self.matches(&record.name, &record.phone, &record.email)
    }
}

impl From<&LookupQuery> for NormalizedQuery {
    fn from(query: &LookupQuery) -> Self {
        Self::new(query.name.as_deref(), query.phone.as_deref(), query.email.as_deref())
    }
}

/// Keeps ASCII digits only.
#[must_use]
pub fn digits_only(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}
