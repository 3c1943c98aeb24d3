mod filter;
mod item;

pub use filter::{PhaseFilter, StatusFilter, filter_objectives, filter_projects};
pub use item::{Level, MatrixItem, Objective, ObjectiveDraft, Project, ProjectDraft};
