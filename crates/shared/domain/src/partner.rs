//! Partner submission records and the inputs that produce or query them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A submission accepted by the code registry. Never mutated once created.
///
/// Serialized with camelCase keys; an absent partner reference is written as
/// an empty string so the document stays readable by the landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerRecord {
    pub code: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub deposit_at: String,
    pub depositor_name: String,
    #[serde(default, with = "empty_as_none")]
    pub partner_ref: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Raw submission fields as entered by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Submission {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub deposit_at: String,
    pub depositor_name: String,
    pub partner_ref: String,
}

impl Submission {
    /// Trims every field and upper-cases the partner reference.
    #[must_use]
    pub fn normalized(&self) -> Self {
        Self {
            name: self.name.trim().to_owned(),
            phone: self.phone.trim().to_owned(),
            email: self.email.trim().to_owned(),
            deposit_at: self.deposit_at.trim().to_owned(),
            depositor_name: self.depositor_name.trim().to_owned(),
            partner_ref: self.partner_ref.trim().to_uppercase(),
        }
    }

    /// Wire names of required fields that are blank.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("phone", &self.phone),
            ("email", &self.email),
            ("depositAt", &self.deposit_at),
            ("depositorName", &self.depositor_name),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }

    /// Partner reference, if one was given.
    #[must_use]
    pub fn partner_ref(&self) -> Option<String> {
        let value = self.partner_ref.trim();
        (!value.is_empty()).then(|| value.to_uppercase())
    }
}

/// Lookup input; any subset of fields may be given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupQuery {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

mod empty_as_none {
    use serde::{Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<S: Serializer>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(value.as_deref().unwrap_or_default())
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(value.filter(|v| !v.trim().is_empty()))
    }
}
