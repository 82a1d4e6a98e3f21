//! Administrative master data models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct District {
    pub code: String,
    pub name: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Circle {
    pub code: String,
    pub name: String,
    pub district_code: String,
    pub is_active: bool,
}

/// Revenue unit below a circle. The finest level carrying a base price.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Mouza {
    pub code: String,
    pub name: String,
    pub district_code: String,
    pub circle_code: String,
    pub base_price_mouza: Option<Decimal>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Lot {
    pub code: String,
    pub name: String,
    pub district_code: String,
    pub circle_code: String,
    /// Percentage added on top of the mouza base price.
    pub base_price_increase_lot: Option<Decimal>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Village {
    pub code: String,
    pub name: String,
    pub district_code: String,
    pub circle_code: String,
    pub mouza_code: String,
    pub lot_code: Option<String>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LandCategory {
    pub id: String,
    pub name: String,
    /// Percentage applied to the mouza base when a plot is (or will be) in this category.
    pub base_price_mouza_increase: Decimal,
    pub is_active: bool,
}

/// A selectable entry in one hierarchy dropdown.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HierarchyOption {
    pub code: String,
    pub name: String,
}

macro_rules! impl_option_from {
    ($($unit:ty),*) => {
        $(
            impl From<&$unit> for HierarchyOption {
                fn from(unit: &$unit) -> Self {
                    HierarchyOption {
                        code: unit.code.clone(),
                        name: unit.name.clone(),
                    }
                }
            }
        )*
    };
}

impl_option_from!(District, Circle, Mouza, Lot, Village);

/// Levels of the administrative hierarchy, top-down.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HierarchyLevel {
    District,
    Circle,
    Mouza,
    Lot,
    Village,
}

impl HierarchyLevel {
    pub const ALL: [HierarchyLevel; 5] = [
        HierarchyLevel::District,
        HierarchyLevel::Circle,
        HierarchyLevel::Mouza,
        HierarchyLevel::Lot,
        HierarchyLevel::Village,
    ];

    /// Levels whose option lists are fetched using this level's selection.
    pub fn children(self) -> &'static [HierarchyLevel] {
        match self {
            HierarchyLevel::District => &[HierarchyLevel::Circle],
            HierarchyLevel::Circle => &[HierarchyLevel::Mouza, HierarchyLevel::Lot],
            HierarchyLevel::Mouza | HierarchyLevel::Lot => &[HierarchyLevel::Village],
            HierarchyLevel::Village => &[],
        }
    }

    /// Every level reachable from this one through `children`, top-down, without duplicates.
    pub fn descendants(self) -> Vec<HierarchyLevel> {
        let mut found = Vec::new();
        let mut frontier = self.children().to_vec();
        while let Some(level) = frontier.pop() {
            if !found.contains(&level) {
                found.push(level);
                frontier.extend_from_slice(level.children());
            }
        }
        found.sort();
        found
    }

    /// Request field name, used when reporting a missing selection.
    pub fn field_name(self) -> &'static str {
        match self {
            HierarchyLevel::District => "districtCode",
            HierarchyLevel::Circle => "circleCode",
            HierarchyLevel::Mouza => "mouzaCode",
            HierarchyLevel::Lot => "lotCode",
            HierarchyLevel::Village => "villageCode",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HierarchyLevel::District => "district",
            HierarchyLevel::Circle => "circle",
            HierarchyLevel::Mouza => "mouza",
            HierarchyLevel::Lot => "lot",
            HierarchyLevel::Village => "village",
        }
    }
}

/// The codes currently selected at each level.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SelectedCodes {
    pub district_code: Option<String>,
    pub circle_code: Option<String>,
    pub mouza_code: Option<String>,
    pub lot_code: Option<String>,
    pub village_code: Option<String>,
}

impl SelectedCodes {
    pub fn get(&self, level: HierarchyLevel) -> Option<&str> {
        match level {
            HierarchyLevel::District => self.district_code.as_deref(),
            HierarchyLevel::Circle => self.circle_code.as_deref(),
            HierarchyLevel::Mouza => self.mouza_code.as_deref(),
            HierarchyLevel::Lot => self.lot_code.as_deref(),
            HierarchyLevel::Village => self.village_code.as_deref(),
        }
    }

    pub(crate) fn slot_mut(&mut self, level: HierarchyLevel) -> &mut Option<String> {
        match level {
            HierarchyLevel::District => &mut self.district_code,
            HierarchyLevel::Circle => &mut self.circle_code,
            HierarchyLevel::Mouza => &mut self.mouza_code,
            HierarchyLevel::Lot => &mut self.lot_code,
            HierarchyLevel::Village => &mut self.village_code,
        }
    }
}
