pub mod decimal_utils;
pub mod lookup_utils;
