//! Area module - traditional land units and their normalization to lessa.

mod area_converter;
mod area_model;

pub use area_converter::normalize;
pub use area_model::AreaDetails;
