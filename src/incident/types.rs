use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Urgency assigned to a report by the triage step
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

/// A citizen incident report as delivered by the data source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Incident {
    /// Unique report identifier (e.g., "D1")
    pub id: String,
    /// Short description shown in the detail popup
    pub title: String,
    /// Free-text category as typed by the reporter
    pub category: String,
    pub priority: Priority,
    pub reported_at: DateTime<Utc>,
}

impl Incident {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        category: impl Into<String>,
        priority: Priority,
        reported_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            category: category.into(),
            priority,
            reported_at,
        }
    }
}

/// An incident placed on the map surface
///
/// `top` and `left` are percentages of the container size.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IncidentPoint {
    pub id: String,
    pub category: String,
    pub priority: Priority,
    pub top: f64,
    pub left: f64,
}

impl IncidentPoint {
    pub fn from_incident(incident: &Incident, top: f64, left: f64) -> Self {
        Self {
            id: incident.id.clone(),
            category: incident.category.clone(),
            priority: incident.priority,
            top,
            left,
        }
    }
}
