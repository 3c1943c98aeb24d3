//! Application flows over the record store.
//!
//! [`Tracker`] ties the model to the persistence collaborator: filtered
//! reads for the list screens, lookups by id, and the auth-gated save flow
//! used by the create/edit forms. Writes resolve the session user first and
//! abort before any mutation when no one is signed in.

use log::debug;

use crate::error::NexusError;
use crate::model::{
    Objective, ObjectiveDraft, PhaseFilter, Project, ProjectDraft, StatusFilter,
    filter_objectives, filter_projects,
};
use crate::store::{RecordStore, SessionUser};

pub struct Tracker<S> {
    store: S,
    list_limit: u32,
}

impl<S: RecordStore> Tracker<S> {
    pub fn new(store: S, list_limit: u32) -> Self {
        Self { store, list_limit }
    }

    /// Objectives list with search and status tab applied.
    pub async fn objectives(
        &self,
        query: Option<&str>,
        status: StatusFilter,
    ) -> Result<Vec<Objective>, NexusError> {
        let mut items = self.store.list_objectives(self.list_limit).await?;
        filter_objectives(&mut items, query, status);
        Ok(items)
    }

    pub async fn objective(&self, id: &str) -> Result<Objective, NexusError> {
        Ok(self.store.get_objective(id).await?)
    }

    /// Saves an objective: validate, resolve the session user, stamp
    /// `user_id`, then insert (no id) or update (with id).
    pub async fn save_objective(
        &self,
        id: Option<&str>,
        mut draft: ObjectiveDraft,
    ) -> Result<Objective, NexusError> {
        draft.validate()?;
        let user = self.session_user().await?;
        draft.user_id = Some(user.id);

        let saved = match id {
            Some(id) => self.store.update_objective(id, &draft).await?,
            None => self.store.insert_objective(&draft).await?,
        };
        debug!("saved objective {}", saved.id);
        Ok(saved)
    }

    /// Projects list with search and phase tab applied.
    pub async fn projects(
        &self,
        query: Option<&str>,
        phase: PhaseFilter,
    ) -> Result<Vec<Project>, NexusError> {
        let mut items = self.store.list_projects(self.list_limit).await?;
        filter_projects(&mut items, query, phase);
        Ok(items)
    }

    pub async fn project(&self, id: &str) -> Result<Project, NexusError> {
        Ok(self.store.get_project(id).await?)
    }

    pub async fn save_project(
        &self,
        id: Option<&str>,
        mut draft: ProjectDraft,
    ) -> Result<Project, NexusError> {
        draft.validate()?;
        let user = self.session_user().await?;
        draft.user_id = Some(user.id);

        let saved = match id {
            Some(id) => self.store.update_project(id, &draft).await?,
            None => self.store.insert_project(&draft).await?,
        };
        debug!("saved project {}", saved.id);
        Ok(saved)
    }

    /// Session lookup shared by the write flows.
    async fn session_user(&self) -> Result<SessionUser, NexusError> {
        let user = self.store.current_user().await?;
        debug!(
            "authenticated as {}",
            user.email.as_deref().unwrap_or(&user.id)
        );
        Ok(user)
    }

    /// Both dashboard lists. The fetches are independent request/response
    /// calls; a failure in either aborts the overview as a whole.
    pub async fn overview(&self) -> Result<(Vec<Objective>, Vec<Project>), NexusError> {
        let objectives = self.store.list_objectives(self.list_limit).await?;
        let projects = self.store.list_projects(self.list_limit).await?;
        Ok((objectives, projects))
    }
}
