//! Cascading selection state for the district → circle → mouza/lot → village form.
//!
//! Each level owns a tagged [`LevelState`] for its option list plus the code
//! currently selected. Selecting (or clearing) a level invalidates every
//! descendant in the dependency graph described by [`HierarchyLevel::children`].
//!
//! Option loads are sequenced per level. [`HierarchySelection::begin_load`]
//! hands out a [`LookupTicket`]; a completion is applied only if its ticket
//! is still the latest one issued for that level, so responses that arrive
//! out of order cannot overwrite newer ones.

use std::collections::BTreeMap;

use log::debug;
use serde::{Deserialize, Serialize};

use super::hierarchy_model::{HierarchyLevel, HierarchyOption, SelectedCodes};
use crate::errors::{ResolutionError, Result, ValidationError};

/// Option-list state of one hierarchy level.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(tag = "status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LevelState {
    /// Parent not selected yet, nothing to show.
    #[default]
    Idle,
    Loading {
        sequence: u64,
    },
    Ready {
        options: Vec<HierarchyOption>,
    },
    /// The last lookup failed. Recoverable by retrying the load.
    Failed {
        cause: String,
    },
}

impl LevelState {
    pub fn options(&self) -> &[HierarchyOption] {
        match self {
            LevelState::Ready { options } => options,
            _ => &[],
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
struct LevelSlot {
    state: LevelState,
    latest_sequence: u64,
}

/// Proof that a load for `level` was started at `sequence`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTicket {
    pub level: HierarchyLevel,
    pub sequence: u64,
    /// Parent selections the lookup must be issued with.
    pub parents: SelectedCodes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LoadOutcome {
    Applied,
    /// A newer load (or an ancestor change) superseded this response.
    Stale,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct HierarchySelection {
    slots: BTreeMap<HierarchyLevel, LevelSlot>,
    codes: SelectedCodes,
}

impl HierarchySelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a selection from stored codes, e.g. when re-activating a history entry.
    ///
    /// Option lists start idle; callers refresh them as needed.
    pub fn from_codes(codes: SelectedCodes) -> Self {
        Self {
            slots: BTreeMap::new(),
            codes,
        }
    }

    pub fn codes(&self) -> &SelectedCodes {
        &self.codes
    }

    pub fn selected(&self, level: HierarchyLevel) -> Option<&str> {
        self.codes.get(level)
    }

    pub fn state(&self, level: HierarchyLevel) -> LevelState {
        self.slots
            .get(&level)
            .map(|slot| slot.state.clone())
            .unwrap_or_default()
    }

    /// True when district, circle, mouza and lot are all chosen.
    pub fn is_complete(&self) -> bool {
        [
            HierarchyLevel::District,
            HierarchyLevel::Circle,
            HierarchyLevel::Mouza,
            HierarchyLevel::Lot,
        ]
        .iter()
        .all(|level| self.codes.get(*level).is_some())
    }

    /// Selects `code` at `level` and clears all descendants.
    ///
    /// Every parent of `level` must already be selected, and when the level's
    /// options are loaded the code must be one of them.
    /// Returns the child levels whose options should now be loaded.
    pub fn select(&mut self, level: HierarchyLevel, code: &str) -> Result<Vec<HierarchyLevel>> {
        if !self.parents_selected(level) {
            return Err(ValidationError::InvalidInput(format!(
                "cannot select {} '{}' before its parent levels",
                level.as_str(),
                code
            ))
            .into());
        }

        if let LevelState::Ready { options } = self.state(level) {
            if !options.iter().any(|o| o.code == code) {
                return Err(ValidationError::InvalidInput(format!(
                    "'{}' is not a valid {} selection",
                    code,
                    level.as_str()
                ))
                .into());
            }
        }

        if self.codes.get(level) == Some(code) {
            return Ok(Vec::new());
        }

        *self.codes.slot_mut(level) = Some(code.to_string());
        self.invalidate_descendants(level);

        Ok(level
            .children()
            .iter()
            .copied()
            .filter(|child| self.parents_selected(*child))
            .collect())
    }

    /// Clears the selection at `level` and everything below it.
    pub fn clear(&mut self, level: HierarchyLevel) {
        *self.codes.slot_mut(level) = None;
        self.invalidate_descendants(level);
    }

    /// Whether every parent required to load `level`'s options is selected.
    pub fn parents_selected(&self, level: HierarchyLevel) -> bool {
        match level {
            HierarchyLevel::District => true,
            HierarchyLevel::Circle => self.codes.district_code.is_some(),
            HierarchyLevel::Mouza | HierarchyLevel::Lot => {
                self.codes.district_code.is_some() && self.codes.circle_code.is_some()
            }
            HierarchyLevel::Village => {
                self.codes.district_code.is_some()
                    && self.codes.circle_code.is_some()
                    && self.codes.mouza_code.is_some()
            }
        }
    }

    /// Starts an option load for `level` and supersedes any load still in flight.
    pub fn begin_load(&mut self, level: HierarchyLevel) -> LookupTicket {
        let slot = self.slots.entry(level).or_default();
        slot.latest_sequence += 1;
        slot.state = LevelState::Loading {
            sequence: slot.latest_sequence,
        };

        LookupTicket {
            level,
            sequence: slot.latest_sequence,
            parents: self.parent_codes(level),
        }
    }

    /// Applies the response of a load if `ticket` is still current.
    pub fn complete_load(
        &mut self,
        ticket: &LookupTicket,
        response: std::result::Result<Vec<HierarchyOption>, ResolutionError>,
    ) -> LoadOutcome {
        let slot = self.slots.entry(ticket.level).or_default();
        if slot.latest_sequence != ticket.sequence {
            debug!(
                "Discarding stale {} options (ticket {}, latest {})",
                ticket.level.as_str(),
                ticket.sequence,
                slot.latest_sequence
            );
            return LoadOutcome::Stale;
        }

        slot.state = match response {
            Ok(options) => LevelState::Ready { options },
            Err(e) => LevelState::Failed {
                cause: e.to_string(),
            },
        };
        LoadOutcome::Applied
    }

    fn parent_codes(&self, level: HierarchyLevel) -> SelectedCodes {
        let mut parents = SelectedCodes::default();
        for ancestor in HierarchyLevel::ALL {
            if ancestor.descendants().contains(&level) {
                *parents.slot_mut(ancestor) = self.codes.get(ancestor).map(str::to_string);
            }
        }
        parents
    }

    fn invalidate_descendants(&mut self, level: HierarchyLevel) {
        for descendant in level.descendants() {
            *self.codes.slot_mut(descendant) = None;
            let slot = self.slots.entry(descendant).or_default();
            // Bumping the sequence turns any in-flight load into a stale one.
            slot.latest_sequence += 1;
            slot.state = LevelState::Idle;
        }
    }
}
