//! Prompt templates for the research assistant.
//!
//! Each [`RequestType`] variant maps to one fixed natural-language prompt;
//! dispatch is on the enum, never on raw strings. The wording is part of
//! the assistant's observable behavior and is kept stable.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The five kinds of help the assistant can provide for an objective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestType {
    Suggestions,
    Research,
    Feasibility,
    Timeline,
    Resources,
}

impl RequestType {
    /// Heading shown above the assistant's answer.
    pub fn label(&self) -> &'static str {
        match self {
            RequestType::Suggestions => "Actionable Suggestions",
            RequestType::Research => "Research Insights",
            RequestType::Feasibility => "Feasibility Analysis",
            RequestType::Timeline => "Timeline Estimation",
            RequestType::Resources => "Resource Requirements",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RequestType::Suggestions => "suggestions",
            RequestType::Research => "research",
            RequestType::Feasibility => "feasibility",
            RequestType::Timeline => "timeline",
            RequestType::Resources => "resources",
        }
    }
}

impl fmt::Display for RequestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// System message sent with every assistant request.
pub const SYSTEM_PROMPT: &str =
    "You are a helpful assistant that provides research and suggestions for objectives and projects.";

/// Builds the user prompt for one request type.
pub fn build_prompt(kind: RequestType, title: &str, description: Option<&str>) -> String {
    let description = description
        .filter(|d| !d.trim().is_empty())
        .map(|d| format!(" with description: \"{d}\""))
        .unwrap_or_default();

    match kind {
        RequestType::Suggestions => format!(
            "Based on this objective: \"{title}\"{description}, provide 3 specific, actionable \
             suggestions for making progress on this objective. Format each suggestion as a \
             brief bullet point with a concrete action."
        ),
        RequestType::Research => format!(
            "Research relevant information for this objective: \"{title}\"{description}. \
             Provide 3-5 key facts or insights that would be helpful for achieving this \
             objective. Format as brief, informative bullet points."
        ),
        RequestType::Feasibility => format!(
            "Analyze the feasibility of this research project: \"{title}\"{description}. \
             Consider time, resources, and potential impact. Provide an assessment on a scale \
             of 1-10, followed by 2-3 bullet points explaining your reasoning."
        ),
        RequestType::Timeline => format!(
            "Create a suggested timeline for the research project: \"{title}\"{description}. \
             Break down the project into 3-4 phases with approximate time estimates for each \
             phase."
        ),
        RequestType::Resources => format!(
            "Recommend resources needed for this research project: \"{title}\"{description}. \
             List 3-4 key resources (human expertise, tools, technologies, datasets) that \
             would be essential for success."
        ),
    }
}
