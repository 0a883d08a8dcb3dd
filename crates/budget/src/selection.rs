//! Selection state: the agencies the visitor has chosen to fund.
//!
//! Entries are snapshots of catalogue records and are always kept in
//! catalogue order, so rebuilding the selection from the same set of
//! checked names always produces the same value.

use std::fmt;

use bevy::prelude::*;

use crate::catalogue::{AgencyRecord, Catalogue};

/// Raised when a toggle names an agency the catalogue does not contain.
///
/// The controller only offers catalogue-backed checkboxes, so this is a
/// defect rather than a user-facing condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidAgency {
    pub name: String,
}

impl fmt::Display for InvalidAgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown agency: {}", self.name)
    }
}

impl std::error::Error for InvalidAgency {}

#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    entries: Vec<AgencyRecord>,
}

impl SelectionState {
    /// Rebuild a selection from the names of the currently checked inputs.
    ///
    /// Order of `checked` does not matter; duplicates are ignored.
    pub fn from_checked<'a>(
        catalogue: &Catalogue,
        checked: impl IntoIterator<Item = &'a str>,
    ) -> Result<Self, InvalidAgency> {
        let mut selection = Self::default();
        for name in checked {
            selection.toggle(catalogue, name, true)?;
        }
        Ok(selection)
    }

    /// Check (`true`) or uncheck (`false`) an agency.
    ///
    /// Checking an already-selected agency or unchecking an unselected one
    /// leaves the state unchanged.
    pub fn toggle(
        &mut self,
        catalogue: &Catalogue,
        name: &str,
        checked: bool,
    ) -> Result<(), InvalidAgency> {
        let Some(rank) = catalogue.position(name) else {
            return Err(InvalidAgency {
                name: name.to_string(),
            });
        };
        let existing = self.entries.iter().position(|e| e.name == name);

        match (checked, existing) {
            (true, None) => {
                let record = catalogue.as_slice()[rank].clone();
                let insert_at = self
                    .entries
                    .iter()
                    .position(|e| catalogue.position(&e.name).is_some_and(|r| r > rank))
                    .unwrap_or(self.entries.len());
                self.entries.insert(insert_at, record);
            }
            (false, Some(idx)) => {
                self.entries.remove(idx);
            }
            _ => {}
        }
        Ok(())
    }

    /// Selected agencies in catalogue order.
    pub fn current_selection(&self) -> &[AgencyRecord] {
        &self.entries
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.name == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of selected budgets, in millions.
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|e| e.annual_budget).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_catalogue() -> Catalogue {
        Catalogue::new(vec![
            AgencyRecord::new("A", 1000.0),
            AgencyRecord::new("B", 10.0),
            AgencyRecord::new("C", 500.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_toggle_on_then_off_restores_prior_state() {
        let catalogue = small_catalogue();
        let mut selection = SelectionState::default();
        selection.toggle(&catalogue, "B", true).unwrap();
        let before = selection.clone();

        selection.toggle(&catalogue, "A", true).unwrap();
        assert!(selection.contains("A"));
        selection.toggle(&catalogue, "A", false).unwrap();

        assert_eq!(selection, before);
        assert!(!selection.contains("A"));
    }

    #[test]
    fn test_unknown_agency_is_invalid() {
        let catalogue = small_catalogue();
        let mut selection = SelectionState::default();
        let err = selection.toggle(&catalogue, "Z", true).unwrap_err();
        assert_eq!(err.name, "Z");
        assert!(selection.is_empty());
        // Unchecking an unknown name is just as invalid.
        assert!(selection.toggle(&catalogue, "Z", false).is_err());
    }

    #[test]
    fn test_selection_follows_catalogue_order() {
        let catalogue = small_catalogue();
        let mut selection = SelectionState::default();
        selection.toggle(&catalogue, "B", true).unwrap();
        selection.toggle(&catalogue, "A", true).unwrap();
        selection.toggle(&catalogue, "C", true).unwrap();
        let names: Vec<&str> = selection.names().collect();
        assert_eq!(names, vec!["A", "C", "B"]);
    }

    #[test]
    fn test_double_check_is_noop() {
        let catalogue = small_catalogue();
        let mut selection = SelectionState::default();
        selection.toggle(&catalogue, "C", true).unwrap();
        selection.toggle(&catalogue, "C", true).unwrap();
        assert_eq!(selection.len(), 1);
        selection.toggle(&catalogue, "A", false).unwrap();
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn test_total_is_sum_of_values() {
        let catalogue = small_catalogue();
        let selection = SelectionState::from_checked(&catalogue, ["A", "B"]).unwrap();
        let sum: f64 = selection
            .current_selection()
            .iter()
            .map(|e| e.annual_budget)
            .sum();
        assert!((selection.total() - sum).abs() < f64::EPSILON);
        assert!((selection.total() - 1010.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_total_for_every_subset() {
        let catalogue = small_catalogue();
        let names = ["A", "B", "C"];
        for mask in 0u8..8 {
            let chosen: Vec<&str> = names
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, n)| *n)
                .collect();
            let selection = SelectionState::from_checked(&catalogue, chosen.iter().copied()).unwrap();
            let expected: f64 = chosen
                .iter()
                .map(|n| catalogue.get(n).unwrap().annual_budget)
                .sum();
            assert!((selection.total() - expected).abs() < 1e-9, "mask {mask}");
        }
    }

    #[test]
    fn test_rebuild_is_idempotent() {
        let catalogue = Catalogue::builtin();
        let checked = ["NASA", "Medicare", "Dept of Energy"];
        let first = SelectionState::from_checked(&catalogue, checked).unwrap();
        let second = SelectionState::from_checked(&catalogue, checked).unwrap();
        assert_eq!(first, second);

        let reversed = SelectionState::from_checked(&catalogue, checked.iter().rev().copied()).unwrap();
        assert_eq!(first, reversed);
    }

    #[test]
    fn test_values_are_catalogue_snapshots() {
        let catalogue = Catalogue::builtin();
        let selection = SelectionState::from_checked(&catalogue, ["Medicaid"]).unwrap();
        assert_eq!(
            selection.current_selection()[0],
            *catalogue.get("Medicaid").unwrap()
        );
    }

    #[test]
    fn test_empty_selection_total_is_zero() {
        let selection = SelectionState::default();
        assert!(selection.is_empty());
        assert!(selection.total().abs() < f64::EPSILON);
    }
}
