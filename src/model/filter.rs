//! List filtering for the objectives and projects views.
//!
//! Mirrors the tab-and-search behavior of the tracker's list screens:
//! a free-text search over title, description and tags combined with a
//! status tab (objectives) or phase tab (projects). All filters are
//! single-pass and stable: matching items keep their input order.

use super::item::{Objective, Project};

/// Status tabs available on the objectives list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    InProgress,
    NotStarted,
    Completed,
}

impl StatusFilter {
    /// Whether a record's free-form status string falls under this tab.
    pub fn matches(&self, status: &str) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::InProgress => status.eq_ignore_ascii_case("In Progress"),
            StatusFilter::NotStarted => status.eq_ignore_ascii_case("Not Started"),
            StatusFilter::Completed => status.eq_ignore_ascii_case("Completed"),
        }
    }
}

/// Phase tabs available on the projects list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PhaseFilter {
    #[default]
    All,
    Discovery,
    Planning,
    Implementation,
    Maintenance,
}

impl PhaseFilter {
    pub fn matches(&self, phase: Option<&str>) -> bool {
        let name = match self {
            PhaseFilter::All => return true,
            PhaseFilter::Discovery => "Discovery",
            PhaseFilter::Planning => "Planning",
            PhaseFilter::Implementation => "Implementation",
            PhaseFilter::Maintenance => "Maintenance",
        };
        phase.is_some_and(|p| p.eq_ignore_ascii_case(name))
    }
}

/// Case-insensitive substring search over title, description and tags.
fn objective_matches_query(objective: &Objective, query: &str) -> bool {
    let query = query.to_lowercase();
    if query.is_empty() {
        return true;
    }
    objective.title.to_lowercase().contains(&query)
        || objective
            .description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(&query))
        || objective
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(&query))
}

/// Case-insensitive substring search over title, description and team.
fn project_matches_query(project: &Project, query: &str) -> bool {
    let query = query.to_lowercase();
    if query.is_empty() {
        return true;
    }
    project.title.to_lowercase().contains(&query)
        || project
            .description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(&query))
        || project
            .team
            .as_deref()
            .is_some_and(|t| t.to_lowercase().contains(&query))
}

/// Applies search and status filters in place, preserving input order.
pub fn filter_objectives(items: &mut Vec<Objective>, query: Option<&str>, status: StatusFilter) {
    items.retain(|o| {
        query.map_or(true, |q| objective_matches_query(o, q)) && status.matches(&o.status)
    });
}

/// Applies search and phase filters in place, preserving input order.
pub fn filter_projects(items: &mut Vec<Project>, query: Option<&str>, phase: PhaseFilter) {
    items.retain(|p| {
        query.map_or(true, |q| project_matches_query(p, q)) && phase.matches(p.phase.as_deref())
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn objective(title: &str, description: &str, status: &str, tags: &[&str]) -> Objective {
        serde_json::from_value(serde_json::json!({
            "id": title,
            "title": title,
            "description": description,
            "status": status,
            "tags": tags,
        }))
        .unwrap()
    }

    fn project(title: &str, phase: Option<&str>, team: &str) -> Project {
        serde_json::from_value(serde_json::json!({
            "id": title,
            "title": title,
            "phase": phase,
            "team": team,
        }))
        .unwrap()
    }

    // --- StatusFilter tests ---

    #[test]
    fn status_all_matches_anything() {
        assert!(StatusFilter::All.matches("In Progress"));
        assert!(StatusFilter::All.matches("On Hold"));
        assert!(StatusFilter::All.matches(""));
    }

    #[test]
    fn status_tabs_match_case_insensitively() {
        assert!(StatusFilter::InProgress.matches("in progress"));
        assert!(StatusFilter::NotStarted.matches("Not Started"));
        assert!(StatusFilter::Completed.matches("COMPLETED"));
        assert!(!StatusFilter::Completed.matches("In Progress"));
    }

    #[test]
    fn phase_tabs_match_and_reject_missing_phase() {
        assert!(PhaseFilter::Discovery.matches(Some("Discovery")));
        assert!(PhaseFilter::All.matches(None));
        assert!(!PhaseFilter::Planning.matches(None));
        assert!(!PhaseFilter::Planning.matches(Some("Maintenance")));
    }

    // --- search tests ---

    #[test]
    fn search_matches_title_description_or_tags() {
        let o = objective(
            "Increase Customer Retention",
            "Boost retention through onboarding",
            "In Progress",
            &["retention", "growth"],
        );
        assert!(objective_matches_query(&o, "customer"));
        assert!(objective_matches_query(&o, "ONBOARDING"));
        assert!(objective_matches_query(&o, "growth"));
        assert!(!objective_matches_query(&o, "billing"));
    }

    #[test]
    fn empty_query_matches_everything() {
        let o = objective("Anything", "", "Not Started", &[]);
        assert!(objective_matches_query(&o, ""));
    }

    #[test]
    fn project_search_covers_team() {
        let p = project("Feature Development", Some("Implementation"), "Engineering");
        assert!(project_matches_query(&p, "engineering"));
        assert!(project_matches_query(&p, "feature"));
        assert!(!project_matches_query(&p, "marketing"));
    }

    // --- combined filter tests ---

    #[test]
    fn filter_objectives_combines_search_and_status() {
        let mut items = vec![
            objective("Launch v1", "ship it", "In Progress", &["launch"]),
            objective("Launch v2", "later", "Not Started", &["launch"]),
            objective("Billing rework", "internal", "In Progress", &[]),
        ];
        filter_objectives(&mut items, Some("launch"), StatusFilter::InProgress);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Launch v1");
    }

    #[test]
    fn filter_preserves_input_order() {
        let mut items = vec![
            objective("A first", "", "Completed", &[]),
            objective("B second", "", "Completed", &[]),
            objective("C third", "", "In Progress", &[]),
            objective("D fourth", "", "Completed", &[]),
        ];
        filter_objectives(&mut items, None, StatusFilter::Completed);
        let titles: Vec<&str> = items.iter().map(|o| o.title.as_str()).collect();
        assert_eq!(titles, vec!["A first", "B second", "D fourth"]);
    }

    #[test]
    fn filter_projects_by_phase() {
        let mut items = vec![
            project("User Research", Some("Discovery"), "UX"),
            project("Feature Development", Some("Implementation"), "Engineering"),
            project("Bug Fixes", Some("Maintenance"), "Engineering"),
        ];
        filter_projects(&mut items, None, PhaseFilter::Maintenance);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Bug Fixes");
    }

    #[test]
    fn filter_with_no_constraints_keeps_everything() {
        let mut items = vec![
            project("One", None, ""),
            project("Two", Some("Planning"), ""),
        ];
        filter_projects(&mut items, None, PhaseFilter::All);
        assert_eq!(items.len(), 2);
    }
}
