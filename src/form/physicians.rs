//! Physician roster filtering.
//!
//! Two passes: the roster fetched per account is first narrowed to the target
//! facility, then (at render time) to the facilities the viewer may see.
//! A physician with no `facilities` list is facility-agnostic and survives
//! both passes unconditionally.

use crate::form::types::{SelectItem, ViewerContext};
use crate::models::Physician;

/// Keep physicians who practice at `facility_id`.
pub fn roster_for_facility(roster: Vec<Physician>, facility_id: &str) -> Vec<Physician> {
    roster
        .into_iter()
        .filter(|phys| match &phys.facilities {
            None => true,
            Some(facilities) => facilities.iter().any(|f| f == facility_id),
        })
        .collect()
}

/// Keep physicians sharing at least one facility with the viewer.
/// An empty viewer facility set disables the filter.
pub fn visible_to_viewer(roster: &[Physician], viewer: &ViewerContext) -> Vec<Physician> {
    if viewer.facilities.is_empty() {
        return roster.to_vec();
    }

    roster
        .iter()
        .filter(|phys| match &phys.facilities {
            None => true,
            Some(facilities) => facilities
                .iter()
                .any(|f| viewer.facilities.iter().any(|v| v == f)),
        })
        .cloned()
        .collect()
}

/// Project physicians into select-list entries ("First Last" / user ID).
pub fn physician_select_items(roster: &[Physician]) -> Vec<SelectItem> {
    roster
        .iter()
        .map(|phys| SelectItem {
            display_name: phys.display_name(),
            data: phys.user_id.clone(),
            key: phys.user_id.clone(),
        })
        .collect()
}
