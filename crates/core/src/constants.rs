use std::time::Duration;

/// Lessa per bigha
pub const LESSA_PER_BIGHA: u32 = 100;

/// Lessa per katha
pub const LESSA_PER_KATHA: u32 = 20;

/// Decimal precision for derived factors (AUTO_AVERAGE)
pub const DECIMAL_PRECISION: u32 = 6;

/// Market-rate surcharge for rural plots, in percent
pub const RURAL_AREA_RATE_PERCENT: u32 = 2;

/// Market-rate surcharge for urban plots, in percent
pub const URBAN_AREA_RATE_PERCENT: u32 = 1;

/// Number of computations retained in the history ring
pub const HISTORY_CAPACITY: usize = 10;

/// Upper bound for a single master-data lookup
pub const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

/// Quiet period before an auto-triggered per-unit preview runs
pub const DEFAULT_PREVIEW_DEBOUNCE: Duration = Duration::from_millis(300);

/// Current serialization version of the form draft
pub const FORM_DRAFT_VERSION: u32 = 1;
