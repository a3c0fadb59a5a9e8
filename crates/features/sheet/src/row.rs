//! Row schema of the sheet: `timestamp, name, phone, email, depositAt,
//! depositorName, partnerRef, code`.

use crate::error::SheetError;
use rhub_domain::constants::SHEET_HEADER;
use serde::{Deserialize, Serialize};
use serde_json::Value;

const TIMESTAMP: usize = 0;
const NAME: usize = 1;
const PHONE: usize = 2;
const EMAIL: usize = 3;
const DEPOSIT_AT: usize = 4;
const DEPOSITOR_NAME: usize = 5;
const PARTNER_REF: usize = 6;
const CODE: usize = 7;

/// One stored row. Missing trailing cells read as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SheetRow(Vec<String>);

impl SheetRow {
    #[must_use]
    pub fn header() -> Self {
        Self(SHEET_HEADER.iter().map(|&label| label.to_owned()).collect())
    }

    #[must_use]
    pub fn cell(&self, index: usize) -> &str {
        self.0.get(index).map_or("", String::as_str)
    }

    #[must_use]
    pub fn timestamp(&self) -> &str {
        self.cell(TIMESTAMP)
    }

    #[must_use]
    pub fn cells(&self) -> &[String] {
        &self.0
    }
}

impl From<Vec<String>> for SheetRow {
    fn from(cells: Vec<String>) -> Self {
        Self(cells)
    }
}

/// A data row as returned by search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct SheetRecord {
    pub timestamp: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub deposit_at: String,
    pub depositor_name: String,
    pub partner_ref: String,
    pub code: String,
}

impl From<&SheetRow> for SheetRecord {
    fn from(row: &SheetRow) -> Self {
        Self {
            timestamp: row.cell(TIMESTAMP).to_owned(),
            name: row.cell(NAME).to_owned(),
            phone: row.cell(PHONE).to_owned(),
            email: row.cell(EMAIL).to_owned(),
            deposit_at: row.cell(DEPOSIT_AT).to_owned(),
            depositor_name: row.cell(DEPOSITOR_NAME).to_owned(),
            partner_ref: row.cell(PARTNER_REF).to_owned(),
            code: row.cell(CODE).to_owned(),
        }
    }
}

/// Fields posted by the mirror. Absent or falsy values become empty cells
/// and unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct SheetPayload {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub deposit_at: String,
    pub depositor_name: String,
    pub partner_ref: String,
    pub code: String,
}

impl SheetPayload {
    /// Parses a request body as JSON whatever its declared content type.
    ///
    /// # Errors
    /// [`SheetError::Payload`] when the body is not a JSON object.
    pub fn from_json(body: &str) -> Result<Self, SheetError> {
        let value: Value = serde_json::from_str(body).map_err(|err| SheetError::Payload {
            message: err.to_string().into(),
            context: None,
        })?;
        let Value::Object(map) = value else {
            return Err(SheetError::Payload {
                message: "expected a JSON object".into(),
                context: None,
            });
        };

        let field = |key: &str| map.get(key).map(cell_text).unwrap_or_default();
        Ok(Self {
            name: field("name"),
            phone: field("phone"),
            email: field("email"),
            deposit_at: field("depositAt"),
            depositor_name: field("depositorName"),
            partner_ref: field("partnerRef"),
            code: field("code"),
        })
    }

    pub(crate) fn into_row(self, timestamp: String) -> SheetRow {
        SheetRow(vec![
            timestamp,
            self.name,
            self.phone,
            self.email,
            self.deposit_at,
            self.depositor_name,
            self.partner_ref,
            self.code,
        ])
    }
}

/// Text of a JSON value; `null`, `false`, `0` and `""` read as empty.
fn cell_text(value: &Value) -> String {
    match value {
        Value::Null | Value::Bool(false) => String::new(),
        Value::String(text) => text.clone(),
        Value::Number(n) if n.as_f64() == Some(0.0) => String::new(),
        other => other.to_string(),
    }
}
