//! Dashboard summary computation.
//!
//! Pure aggregation over the two fetched lists; `today` comes from the
//! caller so the numbers are reproducible in tests.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::model::{Objective, Project};

/// The headline numbers shown at the top of the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSummary {
    pub objective_count: usize,
    /// Objectives currently "In Progress".
    pub active_objectives: usize,
    pub completed_objectives: usize,
    /// Share of objectives that are completed or at least half done.
    pub on_track_pct: u32,
    pub project_count: usize,
    /// Projects currently "In Progress".
    pub active_projects: usize,
    /// Distinct phases across all projects.
    pub phase_count: usize,
    /// Earliest objective due date on or after `today`, with the number of
    /// days until it.
    pub next_due: Option<(NaiveDate, i64)>,
}

impl DashboardSummary {
    pub fn compute(objectives: &[Objective], projects: &[Project], today: NaiveDate) -> Self {
        let active_objectives = objectives
            .iter()
            .filter(|o| o.status.eq_ignore_ascii_case("In Progress"))
            .count();
        let completed_objectives = objectives
            .iter()
            .filter(|o| o.status.eq_ignore_ascii_case("Completed"))
            .count();
        let on_track = objectives
            .iter()
            .filter(|o| o.status.eq_ignore_ascii_case("Completed") || o.progress >= 50)
            .count();
        let on_track_pct = if objectives.is_empty() {
            0
        } else {
            (on_track * 100 / objectives.len()) as u32
        };

        let active_projects = projects
            .iter()
            .filter(|p| p.status.eq_ignore_ascii_case("In Progress"))
            .count();
        let phases: HashSet<String> = projects
            .iter()
            .filter_map(|p| p.phase.as_deref())
            .map(|phase| phase.to_lowercase())
            .collect();

        let next_due = objectives
            .iter()
            .filter_map(|o| o.due_date)
            .filter(|due| *due >= today)
            .min()
            .map(|due| (due, (due - today).num_days()));

        Self {
            objective_count: objectives.len(),
            active_objectives,
            completed_objectives,
            on_track_pct,
            project_count: projects.len(),
            active_projects,
            phase_count: phases.len(),
            next_due,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn objective(status: &str, progress: u8, due: Option<&str>) -> Objective {
        serde_json::from_value(serde_json::json!({
            "id": "o",
            "title": "T",
            "status": status,
            "progress": progress,
            "due_date": due,
        }))
        .unwrap()
    }

    fn project(status: &str, phase: Option<&str>) -> Project {
        serde_json::from_value(serde_json::json!({
            "id": "p",
            "title": "T",
            "status": status,
            "phase": phase,
        }))
        .unwrap()
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn counts_active_and_completed_objectives() {
        let objectives = vec![
            objective("In Progress", 65, None),
            objective("In Progress", 30, None),
            objective("Completed", 100, None),
            objective("Not Started", 0, None),
        ];
        let summary = DashboardSummary::compute(&objectives, &[], date("2025-04-01"));
        assert_eq!(summary.objective_count, 4);
        assert_eq!(summary.active_objectives, 2);
        assert_eq!(summary.completed_objectives, 1);
    }

    #[test]
    fn on_track_counts_completed_and_half_done() {
        let objectives = vec![
            objective("In Progress", 65, None),
            objective("Completed", 100, None),
            objective("In Progress", 30, None),
            objective("Not Started", 0, None),
            objective("In Progress", 50, None),
        ];
        let summary = DashboardSummary::compute(&objectives, &[], date("2025-04-01"));
        assert_eq!(summary.on_track_pct, 60);
    }

    #[test]
    fn empty_lists_produce_zeroes() {
        let summary = DashboardSummary::compute(&[], &[], date("2025-04-01"));
        assert_eq!(summary.objective_count, 0);
        assert_eq!(summary.on_track_pct, 0);
        assert_eq!(summary.phase_count, 0);
        assert!(summary.next_due.is_none());
    }

    #[test]
    fn next_due_skips_past_dates() {
        let objectives = vec![
            objective("Completed", 100, Some("2025-03-10")),
            objective("In Progress", 65, Some("2025-04-15")),
            objective("Not Started", 0, Some("2025-06-30")),
        ];
        let summary = DashboardSummary::compute(&objectives, &[], date("2025-04-01"));
        assert_eq!(summary.next_due, Some((date("2025-04-15"), 14)));
    }

    #[test]
    fn next_due_today_is_zero_days_away() {
        let objectives = vec![objective("In Progress", 10, Some("2025-04-01"))];
        let summary = DashboardSummary::compute(&objectives, &[], date("2025-04-01"));
        assert_eq!(summary.next_due, Some((date("2025-04-01"), 0)));
    }

    #[test]
    fn phase_count_is_distinct_and_case_insensitive() {
        let projects = vec![
            project("In Progress", Some("Discovery")),
            project("In Progress", Some("discovery")),
            project("Not Started", Some("Planning")),
            project("Not Started", None),
        ];
        let summary = DashboardSummary::compute(&[], &projects, date("2025-04-01"));
        assert_eq!(summary.project_count, 4);
        assert_eq!(summary.active_projects, 2);
        assert_eq!(summary.phase_count, 2);
    }
}
