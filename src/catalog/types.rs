use serde::{Deserialize, Serialize};

/// A past role listed on an expert profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub id: String,
    pub title: String,
    pub company: String,
    /// Free text, e.g. "2018 - Present".
    pub duration: String,
}

/// Weekly availability for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityBlock {
    /// Day name, e.g. "Monday".
    pub day: String,
    /// Human-readable ranges, e.g. "09:00 - 12:00".
    pub slots: Vec<String>,
}

/// Profile of a person available for calls. Read-only to the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expert {
    pub id: u32,
    pub name: String,
    pub title: String,
    pub company: String,
    pub network: String,
    pub country: String,
    pub perspective: String,
    /// Free-text availability summary.
    pub availability: String,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub availability_blocks: Vec<AvailabilityBlock>,
}

/// A client engagement with its expert roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub name: String,
    pub client: String,
    pub description: String,
    #[serde(default)]
    pub experts: Vec<Expert>,
}

/// All projects known to the application.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub projects: Vec<Project>,
}
