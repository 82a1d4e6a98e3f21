//! Serializable snapshot of the valuation form.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::FORM_DRAFT_VERSION;
use crate::errors::{Result, ValidationError};
use crate::valuation::{ValuationRequest, ValuationResult};

/// Form state persisted across reloads.
///
/// The `version` field is checked before anything else is decoded, so a
/// draft written by an incompatible build is rejected instead of half-read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FormDraft {
    pub version: u32,
    pub request: ValuationRequest,
    #[serde(default)]
    pub result: Option<ValuationResult>,
    /// History entry the form was re-activated from, if any.
    #[serde(default)]
    pub restored_from: Option<String>,
    pub saved_at: DateTime<Utc>,
}

#[derive(Deserialize)]
struct DraftHeader {
    version: u32,
}

impl FormDraft {
    pub fn new(
        request: ValuationRequest,
        result: Option<ValuationResult>,
        restored_from: Option<String>,
    ) -> Self {
        Self {
            version: FORM_DRAFT_VERSION,
            request,
            result,
            restored_from,
            saved_at: Utc::now(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let header: DraftHeader = serde_json::from_str(json)?;
        if header.version != FORM_DRAFT_VERSION {
            return Err(ValidationError::UnsupportedDraftVersion {
                found: header.version,
                expected: FORM_DRAFT_VERSION,
            }
            .into());
        }
        Ok(serde_json::from_str(json)?)
    }
}
