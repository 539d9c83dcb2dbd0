//! Sidebar filter state.
//!
//! The selection is captured and displayed but never applied to the report:
//! none of the report records carry a region or call-type dimension.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("unknown region: {0}")]
    UnknownRegion(String),
    #[error("unknown call type: {0}")]
    UnknownCallType(String),
}

// ---------------------------------------------------------------------------
// Region
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    #[default]
    Global,
    NorthAmerica,
    Europe,
    Apac,
}

impl Region {
    pub const ALL: [Region; 4] = [
        Region::Global,
        Region::NorthAmerica,
        Region::Europe,
        Region::Apac,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Region::Global => "Global (All)",
            Region::NorthAmerica => "North America",
            Region::Europe => "Europe",
            Region::Apac => "APAC",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Region::Global => "global",
            Region::NorthAmerica => "north_america",
            Region::Europe => "europe",
            Region::Apac => "apac",
        }
    }

    /// Next region in selector order, wrapping around.
    pub fn next(&self) -> Region {
        let idx = Region::ALL.iter().position(|r| r == self).unwrap_or(0);
        Region::ALL[(idx + 1) % Region::ALL.len()]
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Region {
    type Err = FilterError;

    /// Accepts either the display label or the snake_case key, any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Region::ALL
            .into_iter()
            .find(|r| r.key() == wanted || r.label().to_lowercase() == wanted)
            .ok_or_else(|| FilterError::UnknownRegion(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// CallType
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallType {
    Sales,
    InternalTraining,
}

impl CallType {
    pub const ALL: [CallType; 2] = [CallType::Sales, CallType::InternalTraining];

    pub fn label(&self) -> &'static str {
        match self {
            CallType::Sales => "Sales",
            CallType::InternalTraining => "Internal/Training",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            CallType::Sales => "sales",
            CallType::InternalTraining => "internal_training",
        }
    }
}

impl fmt::Display for CallType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CallType {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        CallType::ALL
            .into_iter()
            .find(|c| c.key() == wanted || c.label().to_lowercase() == wanted)
            .ok_or_else(|| FilterError::UnknownCallType(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// FilterSelection
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    pub region: Region,
    pub call_types: BTreeSet<CallType>,
}

impl FilterSelection {
    pub fn new(region: Region, call_types: impl IntoIterator<Item = CallType>) -> Self {
        Self {
            region,
            call_types: call_types.into_iter().collect(),
        }
    }

    pub fn cycle_region(&mut self) {
        self.region = self.region.next();
    }

    /// Flip membership of `call_type`. Returns whether it is now selected.
    pub fn toggle_call_type(&mut self, call_type: CallType) -> bool {
        if self.call_types.remove(&call_type) {
            false
        } else {
            self.call_types.insert(call_type);
            true
        }
    }

    pub fn is_selected(&self, call_type: CallType) -> bool {
        self.call_types.contains(&call_type)
    }
}

impl Default for FilterSelection {
    fn default() -> Self {
        Self::new(Region::Global, CallType::ALL)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
