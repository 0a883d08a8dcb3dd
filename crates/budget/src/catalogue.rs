//! Agency catalogue: the fixed table of agencies and their annual budgets.
//!
//! Budgets are expressed in millions of dollars. The catalogue is sorted
//! once, descending by budget, when it is built and never re-sorted.
//! Agencies with equal budgets keep the order they were supplied in.

use std::collections::HashSet;
use std::fmt;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// A single agency entry. `annual_budget` is in millions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgencyRecord {
    pub name: String,
    pub annual_budget: f64,
}

impl AgencyRecord {
    pub fn new(name: impl Into<String>, annual_budget: f64) -> Self {
        Self {
            name: name.into(),
            annual_budget,
        }
    }
}

/// Compiled-in agency table (millions of dollars, FY estimates).
pub const BUILTIN_AGENCIES: &[(&str, f64)] = &[
    ("Medicare", 848_200.0),
    ("Medicaid", 592_000.0),
    ("Social Security", 400_000.0),
    ("Dept of Agriculture", 213_000.0),
    ("Dept of Commerce", 11_400.0),
    ("Dept of Education", 82_400.0),
    ("Dept of Energy", 31_700.0),
    ("Dept of Justice", 37_800.0),
    ("Dept of Labor", 13_900.0),
    ("Dept of State", 53_000.0),
    ("Dept of Air Force", 217_000.0),
    ("Dept of Army", 185_000.0),
    ("Dept of Navy", 257_600.0),
    ("Dept of Interior", 75_510.0),
    ("Dept of Transportation", 109_300.0),
    ("Dept of Veteran Affairs", 369_300.0),
    ("Dept of Health and Human Services", 130_700.0),
    ("Dept of Homeland Security", 165_730.0),
    ("Dept of Housing and Urban Development", 73_000.0),
    ("Dept of Treasury", 14_000.0),
    ("Consumer Financial Protection Bureau", 310.9),
    ("Court Services and Offender Supervision (DC)", 125.9),
    ("Environmental Protection Agency", 2_200.0),
    ("Equal Employment Opportunity Commission", 248.7),
    ("Federal Communications Commission", 257.3),
    ("Federal Deposit Insurance Corporation", 1_000.0),
    ("Federal Trade Commission", 210.6),
    ("General Services Administration", 1_700.0),
    ("Government Printing Office", 177.3),
    ("NASA", 2_700.0),
    ("National Archives and Records Administration", 252.6),
    ("National Credit Union Administration", 0.0),
    ("National Labor Relations Board", 172.2),
    ("National Science Foundation", 263.9),
    ("Nuclear Regulatory Commission", 406.6),
    ("Office of Personnel Management", 338.9),
    ("Securities and Exchange Commission", 1_000.0),
    ("Small Business Administration", 726.1),
    ("Smithsonian Institution", 371.4),
    ("Social Security Administration", 5_800.0),
    ("US Agency for Global Media", 176.2),
    ("US Agency for International Development", 694.6),
];

/// Errors raised while building a catalogue from a supplied table.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogueError {
    /// Two records share the same name.
    DuplicateAgency(String),
    /// A budget was negative, NaN or infinite.
    InvalidBudget { name: String, value: f64 },
    /// An agency name was empty or whitespace.
    EmptyName,
}

impl fmt::Display for CatalogueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogueError::DuplicateAgency(name) => write!(f, "Duplicate agency: {name}"),
            CatalogueError::InvalidBudget { name, value } => {
                write!(f, "Invalid budget for {name}: {value}")
            }
            CatalogueError::EmptyName => write!(f, "Agency name must not be empty"),
        }
    }
}

impl std::error::Error for CatalogueError {}

/// Ordered, immutable agency table, sorted descending by budget.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct Catalogue {
    agencies: Vec<AgencyRecord>,
}

impl Default for Catalogue {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalogue {
    /// Build a catalogue, validating names and budgets and sorting by budget.
    pub fn new(records: impl IntoIterator<Item = AgencyRecord>) -> Result<Self, CatalogueError> {
        let mut agencies: Vec<AgencyRecord> = records.into_iter().collect();
        let mut seen = HashSet::with_capacity(agencies.len());
        for record in &agencies {
            if record.name.trim().is_empty() {
                return Err(CatalogueError::EmptyName);
            }
            if !record.annual_budget.is_finite() || record.annual_budget < 0.0 {
                return Err(CatalogueError::InvalidBudget {
                    name: record.name.clone(),
                    value: record.annual_budget,
                });
            }
            if !seen.insert(record.name.as_str()) {
                return Err(CatalogueError::DuplicateAgency(record.name.clone()));
            }
        }

        // Stable: equal budgets keep their input order.
        agencies.sort_by(|a, b| b.annual_budget.total_cmp(&a.annual_budget));
        Ok(Self { agencies })
    }

    /// The compiled-in table.
    pub fn builtin() -> Self {
        let mut agencies: Vec<AgencyRecord> = BUILTIN_AGENCIES
            .iter()
            .map(|&(name, budget)| AgencyRecord::new(name, budget))
            .collect();
        agencies.sort_by(|a, b| b.annual_budget.total_cmp(&a.annual_budget));
        Self { agencies }
    }

    pub fn iter(&self) -> impl Iterator<Item = &AgencyRecord> {
        self.agencies.iter()
    }

    pub fn as_slice(&self) -> &[AgencyRecord] {
        &self.agencies
    }

    pub fn len(&self) -> usize {
        self.agencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agencies.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&AgencyRecord> {
        self.agencies.iter().find(|a| a.name == name)
    }

    /// Position of `name` in display order.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.agencies.iter().position(|a| a.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Sum of all budgets, in millions.
    pub fn total_budget(&self) -> f64 {
        self.agencies.iter().map(|a| a.annual_budget).sum()
    }
}
