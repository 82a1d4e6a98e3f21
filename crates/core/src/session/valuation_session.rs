use log::debug;

use super::session_model::FormDraft;
use crate::errors::Result;
use crate::hierarchy::{HierarchyLevel, HierarchySelection};
use crate::history::RestoredCalculation;
use crate::valuation::{ValuationRequest, ValuationResult};

/// Current state of one valuation form.
///
/// The hierarchy codes of `request` always mirror `selection`. Any input
/// change drops the last result, so a shown result never belongs to other
/// inputs than the ones on the form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValuationSession {
    selection: HierarchySelection,
    request: ValuationRequest,
    last_result: Option<ValuationResult>,
    restored_from: Option<String>,
}

impl ValuationSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> &HierarchySelection {
        &self.selection
    }

    /// Mutable access for option loads. Codes chosen through it are synced
    /// on the next [`ValuationSession::select_level`] or input update.
    pub fn selection_mut(&mut self) -> &mut HierarchySelection {
        &mut self.selection
    }

    pub fn request(&self) -> &ValuationRequest {
        &self.request
    }

    pub fn last_result(&self) -> Option<&ValuationResult> {
        self.last_result.as_ref()
    }

    pub fn restored_from(&self) -> Option<&str> {
        self.restored_from.as_deref()
    }

    /// Selects a hierarchy code, clearing descendants on the form as well.
    ///
    /// Returns the levels whose options now need loading.
    pub fn select_level(&mut self, level: HierarchyLevel, code: &str) -> Result<Vec<HierarchyLevel>> {
        let to_load = self.selection.select(level, code)?;
        self.sync_codes();
        Ok(to_load)
    }

    pub fn clear_level(&mut self, level: HierarchyLevel) {
        self.selection.clear(level);
        self.sync_codes();
    }

    /// Edits the non-hierarchy fields of the request.
    ///
    /// Hierarchy codes are owned by the selection and are restored after `edit`.
    pub fn update_inputs<F>(&mut self, edit: F)
    where
        F: FnOnce(&mut ValuationRequest),
    {
        edit(&mut self.request);
        self.sync_codes();
    }

    pub fn set_result(&mut self, result: ValuationResult) {
        self.last_result = Some(result);
    }

    /// True once district, circle, mouza, lot and the land-use category are chosen.
    pub fn is_ready_for_preview(&self) -> bool {
        self.selection.is_complete() && self.request.validate().is_ok()
    }

    /// Re-activates a history entry as the form state. Nothing is recomputed.
    pub fn restore_history(&mut self, restored: RestoredCalculation) {
        debug!("Restoring form state from history entry {}", restored.entry_id);
        self.selection = HierarchySelection::from_codes(restored.request.codes());
        self.request = restored.request;
        self.last_result = Some(restored.result);
        self.restored_from = Some(restored.entry_id);
    }

    pub fn to_draft(&self) -> FormDraft {
        FormDraft::new(
            self.request.clone(),
            self.last_result.clone(),
            self.restored_from.clone(),
        )
    }

    /// Rebuilds a session from a draft. Option lists start idle.
    pub fn from_draft(draft: FormDraft) -> Self {
        Self {
            selection: HierarchySelection::from_codes(draft.request.codes()),
            request: draft.request,
            last_result: draft.result,
            restored_from: draft.restored_from,
        }
    }

    /// Parses and restores a draft in one step.
    pub fn from_draft_json(json: &str) -> Result<Self> {
        Ok(Self::from_draft(FormDraft::from_json(json)?))
    }

    fn sync_codes(&mut self) {
        let codes = self.selection.codes().clone();
        self.request.apply_codes(&codes);
        self.last_result = None;
        self.restored_from = None;
    }
}
