use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::area_converter::normalize;
use crate::errors::Result;
use crate::utils::decimal_utils::parse_non_negative_or_zero;

/// Plot area as entered on the form, in bigha/katha/lessa.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AreaDetails {
    #[serde(default)]
    pub bigha: Decimal,
    #[serde(default)]
    pub katha: Decimal,
    #[serde(default)]
    pub lessa: Decimal,
}

impl AreaDetails {
    pub fn new(bigha: Decimal, katha: Decimal, lessa: Decimal) -> Self {
        Self {
            bigha: bigha.max(Decimal::ZERO),
            katha: katha.max(Decimal::ZERO),
            lessa: lessa.max(Decimal::ZERO),
        }
    }

    /// Builds area details from raw form text. Unparsable or negative values count as zero.
    pub fn from_text(bigha: Option<&str>, katha: Option<&str>, lessa: Option<&str>) -> Self {
        Self {
            bigha: parse_non_negative_or_zero(bigha),
            katha: parse_non_negative_or_zero(katha),
            lessa: parse_non_negative_or_zero(lessa),
        }
    }

    /// A single lessa, used for per-unit previews.
    pub fn one_lessa() -> Self {
        Self::new(Decimal::ZERO, Decimal::ZERO, Decimal::ONE)
    }

    pub fn total_lessa(&self) -> Result<Decimal> {
        normalize(self.bigha, self.katha, self.lessa)
    }
}
