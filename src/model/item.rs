use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::NexusError;

/// One level of the impact/effort axes.
///
/// The backend stores both axes as free-form strings; `parse` accepts only
/// the two-element domain and returns `None` for anything else, so callers
/// decide what to do with out-of-domain values instead of coercing them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    High,
    Low,
}

impl Level {
    /// Parses a wire-level axis value, case-insensitively.
    pub fn parse(s: &str) -> Option<Level> {
        match s.trim().to_lowercase().as_str() {
            "high" => Some(Level::High),
            "low" => Some(Level::Low),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::High => "high",
            Level::Low => "low",
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An objective record as stored by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Objective {
    pub id: String,
    #[serde(default)]
    pub user_id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_priority")]
    pub priority: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub progress: u8,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub impact: String,
    #[serde(default)]
    pub effort: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// A project record as stored by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    #[serde(default)]
    pub user_id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub phase: Option<String>,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default = "default_members")]
    pub members: u32,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub progress: u8,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub impact: String,
    #[serde(default)]
    pub effort: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

fn default_priority() -> String {
    "Medium".to_string()
}

fn default_status() -> String {
    "Not Started".to_string()
}

fn default_members() -> u32 {
    1
}

/// Payload for inserting or updating an objective.
///
/// Ids are assigned by the persistence layer and never sent; `user_id` is
/// stamped from the authenticated session right before the write.
#[derive(Debug, Clone, Serialize)]
pub struct ObjectiveDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub priority: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    pub progress: u8,
    pub status: String,
    pub impact: String,
    pub effort: String,
    pub tags: Vec<String>,
}

impl ObjectiveDraft {
    /// Validates the draft before it is sent to the backend.
    pub fn validate(&self) -> Result<(), NexusError> {
        if self.title.trim().is_empty() {
            return Err(NexusError::Invalid("objective title must not be empty".into()));
        }
        if self.progress > 100 {
            return Err(NexusError::Invalid(format!(
                "progress must be between 0 and 100, got {}",
                self.progress
            )));
        }
        Ok(())
    }
}

impl From<&Objective> for ObjectiveDraft {
    /// Re-submittable draft from a stored record, used by the edit flow.
    fn from(o: &Objective) -> Self {
        Self {
            user_id: None,
            title: o.title.clone(),
            description: o.description.clone(),
            priority: o.priority.clone(),
            category: o.category.clone(),
            due_date: o.due_date,
            progress: o.progress,
            status: o.status.clone(),
            impact: o.impact.clone(),
            effort: o.effort.clone(),
            tags: o.tags.clone(),
        }
    }
}

/// Payload for inserting or updating a project.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    pub members: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub progress: u8,
    pub status: String,
    pub impact: String,
    pub effort: String,
}

impl ProjectDraft {
    pub fn validate(&self) -> Result<(), NexusError> {
        if self.title.trim().is_empty() {
            return Err(NexusError::Invalid("project title must not be empty".into()));
        }
        if self.progress > 100 {
            return Err(NexusError::Invalid(format!(
                "progress must be between 0 and 100, got {}",
                self.progress
            )));
        }
        if self.members == 0 {
            return Err(NexusError::Invalid("a project needs at least one member".into()));
        }
        Ok(())
    }
}

impl From<&Project> for ProjectDraft {
    fn from(p: &Project) -> Self {
        Self {
            user_id: None,
            title: p.title.clone(),
            description: p.description.clone(),
            phase: p.phase.clone(),
            team: p.team.clone(),
            members: p.members,
            start_date: p.start_date,
            end_date: p.end_date,
            progress: p.progress,
            status: p.status.clone(),
            impact: p.impact.clone(),
            effort: p.effort.clone(),
        }
    }
}

/// Accessors the prioritization matrix needs from a work item.
///
/// Both record kinds implement this so the classifier stays agnostic of
/// which list it is partitioning.
pub trait MatrixItem {
    fn id(&self) -> &str;
    fn title(&self) -> &str;
    fn impact(&self) -> &str;
    fn effort(&self) -> &str;
    /// Short descriptive badges rendered under the title.
    fn badges(&self) -> Vec<String>;
}

impl MatrixItem for Objective {
    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn impact(&self) -> &str {
        &self.impact
    }

    fn effort(&self) -> &str {
        &self.effort
    }

    fn badges(&self) -> Vec<String> {
        let mut badges = vec![self.priority.clone()];
        if let Some(category) = &self.category {
            badges.push(category.clone());
        }
        badges
    }
}

impl MatrixItem for Project {
    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn impact(&self) -> &str {
        &self.impact
    }

    fn effort(&self) -> &str {
        &self.effort
    }

    fn badges(&self) -> Vec<String> {
        let mut badges = Vec::new();
        if let Some(phase) = &self.phase {
            badges.push(phase.clone());
        }
        if let Some(team) = &self.team {
            badges.push(team.clone());
        }
        badges
    }
}
