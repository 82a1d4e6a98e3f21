use rust_decimal::Decimal;

use crate::constants::{LESSA_PER_BIGHA, LESSA_PER_KATHA};
use crate::errors::Result;
use crate::utils::decimal_utils::{checked_mul, checked_sum};

/// Converts bigha/katha/lessa into total lessa.
///
/// 1 Bigha = 5 Katha = 100 Lessa and 1 Katha = 20 Lessa. Negative components
/// are clamped to zero so a bad form field never reduces the area. An area
/// too large to represent fails with `CalculatorError::Overflow`.
pub fn normalize(bigha: Decimal, katha: Decimal, lessa: Decimal) -> Result<Decimal> {
    let bigha = bigha.max(Decimal::ZERO);
    let katha = katha.max(Decimal::ZERO);
    let lessa = lessa.max(Decimal::ZERO);

    checked_sum(
        [
            checked_mul(bigha, Decimal::from(LESSA_PER_BIGHA), "total lessa")?,
            checked_mul(katha, Decimal::from(LESSA_PER_KATHA), "total lessa")?,
            lessa,
        ],
        "total lessa",
    )
}
