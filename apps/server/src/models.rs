use landval_core::{ValuationRequest, ValuationResult};
use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct VillagesQuery {
    pub district: Option<String>,
    pub circle: Option<String>,
    pub mouza: Option<String>,
    pub lot: Option<String>,
}

/// Body of `POST /history`: a computation produced elsewhere, recorded as-is.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RecordHistoryRequest {
    pub request: ValuationRequest,
    pub result: ValuationResult,
}
