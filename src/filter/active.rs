use super::CategoryGroup;
use crate::incident::Incident;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Unknown category filter: {0} (expected all, water, power or gas)")]
pub struct UnknownFilter(pub String);

/// The category filter currently selected on the map screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    #[default]
    All,
    Water,
    Power,
    Gas,
}

impl CategoryFilter {
    /// Whether a record with this category stays visible
    pub fn matches(&self, category: &str) -> bool {
        let group = CategoryGroup::classify(category);
        match self {
            Self::All => true,
            Self::Water => group == CategoryGroup::Water,
            Self::Power => group == CategoryGroup::Power,
            Self::Gas => group == CategoryGroup::Gas,
        }
    }

    /// Visible incidents, in input order
    pub fn apply<'a>(&self, incidents: &'a [Incident]) -> Vec<&'a Incident> {
        incidents
            .iter()
            .filter(|incident| self.matches(&incident.category))
            .collect()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Water => "water",
            Self::Power => "power",
            Self::Gas => "gas",
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = UnknownFilter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "water" => Ok(Self::Water),
            "power" => Ok(Self::Power),
            "gas" => Ok(Self::Gas),
            _ => Err(UnknownFilter(s.to_string())),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
