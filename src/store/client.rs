//! HTTP client for the managed persistence backend.
//!
//! The backend exposes a record-oriented REST API (one route per record
//! kind) plus a session endpoint used to resolve the authenticated user.
//! Every operation is a single request/response round trip with no retry;
//! failures map onto [`StoreError`] and are handled at the call site.

use std::time::Duration;

use log::debug;
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::error::StoreError;
use crate::model::{Objective, ObjectiveDraft, Project, ProjectDraft};

/// The authenticated user behind the current session.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Operations the tracker needs from the persistence collaborator.
///
/// Implemented by [`RestStore`] against the real backend and by mocks in
/// tests.
pub trait RecordStore {
    async fn current_user(&self) -> Result<SessionUser, StoreError>;

    async fn list_objectives(&self, limit: u32) -> Result<Vec<Objective>, StoreError>;
    async fn get_objective(&self, id: &str) -> Result<Objective, StoreError>;
    async fn insert_objective(&self, draft: &ObjectiveDraft) -> Result<Objective, StoreError>;
    async fn update_objective(
        &self,
        id: &str,
        draft: &ObjectiveDraft,
    ) -> Result<Objective, StoreError>;

    async fn list_projects(&self, limit: u32) -> Result<Vec<Project>, StoreError>;
    async fn get_project(&self, id: &str) -> Result<Project, StoreError>;
    async fn insert_project(&self, draft: &ProjectDraft) -> Result<Project, StoreError>;
    async fn update_project(
        &self,
        id: &str,
        draft: &ProjectDraft,
    ) -> Result<Project, StoreError>;
}

/// REST client for the managed backend.
pub struct RestStore {
    client: Client,
    base_url: String,
    api_key: String,
    access_token: Option<String>,
}

impl RestStore {
    /// Create a store client. An empty access token means no session is
    /// active; reads still work with the public API key, writes will be
    /// rejected before any request is made.
    pub fn new(base_url: String, api_key: String, access_token: Option<String>) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .build()
            .expect("failed to build HTTP client");
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            access_token: access_token.filter(|t| !t.is_empty()),
        }
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{table}", self.base_url)
    }

    fn bearer(&self) -> &str {
        self.access_token.as_deref().unwrap_or(&self.api_key)
    }

    /// Triage the status line before touching the body.
    async fn read_rows<T: DeserializeOwned>(response: Response) -> Result<Vec<T>, StoreError> {
        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(StoreError::ApiError {
                status: status.as_u16(),
                message,
            });
        }
        response.json::<Vec<T>>().await.map_err(StoreError::from)
    }

    async fn select_all<T: DeserializeOwned>(
        &self,
        table: &str,
        limit: u32,
    ) -> Result<Vec<T>, StoreError> {
        debug!("select {table} order=created_at.desc limit={limit}");
        let response = self
            .client
            .get(self.table_url(table))
            .header("apikey", &self.api_key)
            .bearer_auth(self.bearer())
            .query(&[
                ("select", "*".to_string()),
                ("order", "created_at.desc".to_string()),
                ("limit", limit.to_string()),
            ])
            .send()
            .await?;
        Self::read_rows(response).await
    }

    async fn select_by_id<T: DeserializeOwned>(
        &self,
        table: &str,
        id: &str,
    ) -> Result<T, StoreError> {
        debug!("select {table} id={id}");
        let response = self
            .client
            .get(self.table_url(table))
            .header("apikey", &self.api_key)
            .bearer_auth(self.bearer())
            .query(&[
                ("select", "*".to_string()),
                ("id", format!("eq.{id}")),
                ("limit", "1".to_string()),
            ])
            .send()
            .await?;
        let rows: Vec<T> = Self::read_rows(response).await?;
        rows.into_iter()
            .next()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    async fn insert_row<D: serde::Serialize, T: DeserializeOwned>(
        &self,
        table: &str,
        draft: &D,
    ) -> Result<T, StoreError> {
        debug!("insert into {table}");
        let response = self
            .client
            .post(self.table_url(table))
            .header("apikey", &self.api_key)
            .header("Prefer", "return=representation")
            .bearer_auth(self.bearer())
            .json(&[draft])
            .send()
            .await?;
        let rows: Vec<T> = Self::read_rows(response).await?;
        rows.into_iter()
            .next()
            .ok_or_else(|| StoreError::Payload("insert returned no representation".to_string()))
    }

    async fn update_row<D: serde::Serialize, T: DeserializeOwned>(
        &self,
        table: &str,
        id: &str,
        draft: &D,
    ) -> Result<T, StoreError> {
        debug!("update {table} id={id}");
        let response = self
            .client
            .patch(self.table_url(table))
            .header("apikey", &self.api_key)
            .header("Prefer", "return=representation")
            .bearer_auth(self.bearer())
            .query(&[("id", format!("eq.{id}"))])
            .json(draft)
            .send()
            .await?;
        let rows: Vec<T> = Self::read_rows(response).await?;
        rows.into_iter()
            .next()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }
}

impl RecordStore for RestStore {
    /// Resolve the user behind the configured session token.
    ///
    /// No token, or a token the backend rejects, means there is no session.
    async fn current_user(&self) -> Result<SessionUser, StoreError> {
        let token = self.access_token.as_deref().ok_or(StoreError::MissingSession)?;
        let response = self
            .client
            .get(format!("{}/auth/v1/user", self.base_url))
            .header("apikey", &self.api_key)
            .bearer_auth(token)
            .send()
            .await?;
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(StoreError::MissingSession);
        }
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(StoreError::ApiError {
                status: status.as_u16(),
                message,
            });
        }
        response.json::<SessionUser>().await.map_err(StoreError::from)
    }

    async fn list_objectives(&self, limit: u32) -> Result<Vec<Objective>, StoreError> {
        self.select_all("objectives", limit).await
    }

    async fn get_objective(&self, id: &str) -> Result<Objective, StoreError> {
        self.select_by_id("objectives", id).await
    }

    async fn insert_objective(&self, draft: &ObjectiveDraft) -> Result<Objective, StoreError> {
        self.insert_row("objectives", draft).await
    }

    async fn update_objective(
        &self,
        id: &str,
        draft: &ObjectiveDraft,
    ) -> Result<Objective, StoreError> {
        self.update_row("objectives", id, draft).await
    }

    async fn list_projects(&self, limit: u32) -> Result<Vec<Project>, StoreError> {
        self.select_all("projects", limit).await
    }

    async fn get_project(&self, id: &str) -> Result<Project, StoreError> {
        self.select_by_id("projects", id).await
    }

    async fn insert_project(&self, draft: &ProjectDraft) -> Result<Project, StoreError> {
        self.insert_row("projects", draft).await
    }

    async fn update_project(
        &self,
        id: &str,
        draft: &ProjectDraft,
    ) -> Result<Project, StoreError> {
        self.update_row("projects", id, draft).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn store_for(server: &MockServer) -> RestStore {
        RestStore::new(server.uri(), "anon-key".into(), Some("user-token".into()))
    }

    fn objective_row(id: &str, title: &str) -> serde_json::Value {
        json!({
            "id": id,
            "user_id": "user-1",
            "title": title,
            "priority": "Medium",
            "status": "Not Started",
            "impact": "high",
            "effort": "low",
            "tags": [],
        })
    }

    #[tokio::test]
    async fn list_objectives_orders_and_limits() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/v1/objectives"))
            .and(query_param("order", "created_at.desc"))
            .and(query_param("limit", "3"))
            .and(header("apikey", "anon-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                objective_row("obj-1", "First"),
                objective_row("obj-2", "Second"),
            ])))
            .mount(&server)
            .await;

        let rows = store_for(&server).list_objectives(3).await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].title, "First");
        assert_eq!(rows[1].title, "Second");
    }

    #[tokio::test]
    async fn get_objective_by_id() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/v1/objectives"))
            .and(query_param("id", "eq.obj-7"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([objective_row("obj-7", "Found")])),
            )
            .mount(&server)
            .await;

        let row = store_for(&server).get_objective("obj-7").await.unwrap();
        assert_eq!(row.id, "obj-7");
        assert_eq!(row.title, "Found");
    }

    #[tokio::test]
    async fn get_objective_missing_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/v1/objectives"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let err = store_for(&server).get_objective("ghost").await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(id) if id == "ghost"));
    }

    #[tokio::test]
    async fn backend_failure_surfaces_status_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/v1/projects"))
            .respond_with(ResponseTemplate::new(500).set_body_string("database on fire"))
            .mount(&server)
            .await;

        let err = store_for(&server).list_projects(10).await.unwrap_err();
        match err {
            StoreError::ApiError { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "database on fire");
            }
            other => panic!("expected ApiError, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn insert_objective_reads_back_representation() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/rest/v1/objectives"))
            .and(header("Prefer", "return=representation"))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(json!([objective_row("obj-new", "Created")])),
            )
            .mount(&server)
            .await;

        let row: Objective = serde_json::from_value(objective_row("x", "Created")).unwrap();
        let draft = ObjectiveDraft::from(&row);
        let created = store_for(&server).insert_objective(&draft).await.unwrap();
        assert_eq!(created.id, "obj-new");
    }

    #[tokio::test]
    async fn update_objective_patches_by_id() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/rest/v1/objectives"))
            .and(query_param("id", "eq.obj-7"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([objective_row("obj-7", "Renamed")])),
            )
            .mount(&server)
            .await;

        let row: Objective = serde_json::from_value(objective_row("obj-7", "Renamed")).unwrap();
        let draft = ObjectiveDraft::from(&row);
        let updated = store_for(&server)
            .update_objective("obj-7", &draft)
            .await
            .unwrap();
        assert_eq!(updated.title, "Renamed");
    }

    #[tokio::test]
    async fn current_user_resolves_session() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/auth/v1/user"))
            .and(header("Authorization", "Bearer user-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "user-1",
                "email": "ana@example.com",
            })))
            .mount(&server)
            .await;

        let user = store_for(&server).current_user().await.unwrap();
        assert_eq!(user.id, "user-1");
        assert_eq!(user.email.as_deref(), Some("ana@example.com"));
    }

    #[tokio::test]
    async fn current_user_without_token_is_missing_session() {
        let store = RestStore::new("http://localhost:9".into(), "anon".into(), None);
        let err = store.current_user().await.unwrap_err();
        assert!(matches!(err, StoreError::MissingSession));
    }

    #[tokio::test]
    async fn empty_token_counts_as_signed_out() {
        let store = RestStore::new("http://localhost:9".into(), "anon".into(), Some(String::new()));
        let err = store.current_user().await.unwrap_err();
        assert!(matches!(err, StoreError::MissingSession));
    }

    #[tokio::test]
    async fn rejected_token_is_missing_session() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/auth/v1/user"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "message": "JWT expired",
            })))
            .mount(&server)
            .await;

        let err = store_for(&server).current_user().await.unwrap_err();
        assert!(matches!(err, StoreError::MissingSession));
    }
}
