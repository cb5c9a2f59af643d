//! Categorical filters over carrier and route.

use serde::{Deserialize, Serialize};

use crate::cache::Dataset;
use crate::config::ALL;
use crate::error::{ServerError, ServerResult};
use crate::models::CleanedShipmentRecord;

/// One filter: unconstrained, or pinned to a single value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Selection {
    #[default]
    All,
    Only(String),
}

impl Selection {
    /// Read a request parameter. Absent, blank and `"All"` are unconstrained.
    pub fn from_param(param: Option<&str>) -> Self {
        match param.map(str::trim) {
            None | Some("") => Selection::All,
            Some(v) if v == ALL => Selection::All,
            Some(v) => Selection::Only(v.to_string()),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }

    pub fn pinned(&self) -> Option<&str> {
        match self {
            Selection::All => None,
            Selection::Only(v) => Some(v),
        }
    }

    pub fn matches(&self, value: &str) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(v) => v == value,
        }
    }

    fn check(&self, filter: &'static str, domain: &[String]) -> ServerResult<()> {
        match self.pinned() {
            Some(v) if !domain.iter().any(|d| d == v) => Err(ServerError::UnknownSelection {
                filter,
                value: v.to_string(),
            }),
            _ => Ok(()),
        }
    }
}

impl From<String> for Selection {
    fn from(s: String) -> Self {
        Selection::from_param(Some(&s))
    }
}

impl From<Selection> for String {
    fn from(s: Selection) -> Self {
        match s {
            Selection::All => ALL.to_string(),
            Selection::Only(v) => v,
        }
    }
}

/// Both filters together. Records must satisfy both (AND).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub carrier: Selection,
    pub route: Selection,
}

impl FilterState {
    pub fn new(carrier: Selection, route: Selection) -> Self {
        Self { carrier, route }
    }

    pub fn matches(&self, record: &CleanedShipmentRecord) -> bool {
        self.carrier.matches(&record.carrier_name) && self.route.matches(&record.route)
    }

    /// The working subset, in dataset order.
    pub fn apply<'a>(&self, records: &'a [CleanedShipmentRecord]) -> Vec<&'a CleanedShipmentRecord> {
        records.iter().filter(|r| self.matches(r)).collect()
    }

    /// Reject pinned values that never occur in the dataset.
    pub fn validate(&self, dataset: &Dataset) -> ServerResult<()> {
        self.carrier.check("carrier", dataset.carriers())?;
        self.route.check("route", dataset.routes())
    }
}

/// Selector choices: `"All"` followed by the observed values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub carriers: Vec<String>,
    pub routes: Vec<String>,
}

impl FilterOptions {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let with_all = |values: &[String]| {
            std::iter::once(ALL.to_string())
                .chain(values.iter().cloned())
                .collect()
        };
        Self {
            carriers: with_all(dataset.carriers()),
            routes: with_all(dataset.routes()),
        }
    }
}
