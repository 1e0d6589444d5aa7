use crate::models::UserProfile;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when interacting with Appwrite
#[derive(Debug, Error)]
pub enum AppwriteError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: invalid API key or token")]
    Unauthorized,

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Collection IDs in Appwrite
#[derive(Debug, Clone)]
pub struct AppwriteCollections {
    pub user_profiles: String,
}

/// Read-only Appwrite client for user profiles
///
/// Supplies the subject profile and the candidate pool for matching. It never
/// writes to the database.
pub struct AppwriteClient {
    base_url: String,
    api_key: String,
    project_id: String,
    database_id: String,
    client: Client,
    collections: AppwriteCollections,
}

impl AppwriteClient {
    /// Create a new Appwrite client
    pub fn new(
        base_url: String,
        api_key: String,
        project_id: String,
        database_id: String,
        collections: AppwriteCollections,
    ) -> Result<Self, AppwriteError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            base_url,
            api_key,
            project_id,
            database_id,
            client,
            collections,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn documents_url(&self) -> String {
        format!(
            "{}/databases/{}/collections/{}/documents",
            self.base_url.trim_end_matches('/'),
            self.database_id,
            self.collections.user_profiles
        )
    }

    /// Run a document list query and return the raw documents
    async fn list_documents(&self, queries: &[String]) -> Result<Vec<Value>, AppwriteError> {
        let mut request = self
            .client
            .get(self.documents_url())
            .header("X-Appwrite-Key", &self.api_key)
            .header("X-Appwrite-Project", &self.project_id);

        for query in queries {
            request = request.query(&[("queries[]", query.as_str())]);
        }

        let response = request.send().await?;

        match response.status() {
            status if status.is_success() => {}
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                return Err(AppwriteError::Unauthorized);
            }
            status => {
                let body = response.text().await.unwrap_or_else(|_| "Unable to read body".to_string());
                tracing::error!("Appwrite query failed: {} - {}", status, body);
                return Err(AppwriteError::ApiError(format!("Failed to list documents: {}", status)));
            }
        }

        let mut json: Value = response.json().await?;

        match json.get_mut("documents").map(Value::take) {
            Some(Value::Array(documents)) => Ok(documents),
            _ => Err(AppwriteError::InvalidResponse("Missing documents array".into())),
        }
    }

    /// Get a single profile by user ID
    pub async fn get_profile(&self, user_id: &str) -> Result<UserProfile, AppwriteError> {
        tracing::debug!("Fetching profile for user: {}", user_id);

        let queries = vec![
            equal_query("userId", user_id),
            limit_query(1),
        ];
        let documents = self.list_documents(&queries).await?;

        let doc = documents
            .into_iter()
            .next()
            .ok_or_else(|| AppwriteError::NotFound(format!("Profile not found for user {}", user_id)))?;

        parse_profile(doc)
            .map_err(|e| AppwriteError::InvalidResponse(format!("Failed to parse profile: {}", e)))
    }

    /// Fetch up to `limit` candidate profiles, excluding `exclude_id`
    ///
    /// Documents that do not parse into a profile are dropped.
    pub async fn list_candidates(
        &self,
        exclude_id: &str,
        limit: usize,
    ) -> Result<Vec<UserProfile>, AppwriteError> {
        let queries = vec![
            not_equal_query("userId", exclude_id),
            limit_query(limit),
        ];
        let documents = self.list_documents(&queries).await?;
        let fetched = documents.len();

        let profiles: Vec<UserProfile> = documents
            .into_iter()
            .filter_map(|doc| match parse_profile(doc) {
                Ok(profile) => Some(profile),
                Err(e) => {
                    tracing::debug!("Dropping unparseable profile document: {}", e);
                    None
                }
            })
            .collect();

        tracing::debug!("Queried {} candidates ({} documents)", profiles.len(), fetched);

        Ok(profiles)
    }
}

fn equal_query(attribute: &str, value: &str) -> String {
    serde_json::json!({ "method": "equal", "attribute": attribute, "values": [value] }).to_string()
}

fn not_equal_query(attribute: &str, value: &str) -> String {
    serde_json::json!({ "method": "notEqual", "attribute": attribute, "values": [value] }).to_string()
}

fn limit_query(limit: usize) -> String {
    serde_json::json!({ "method": "limit", "values": [limit] }).to_string()
}

/// Convert an Appwrite document into a profile
///
/// Documents carry their own `$id`; it stands in for the user id when the
/// document has no `userId` attribute.
fn parse_profile(mut doc: Value) -> Result<UserProfile, serde_json::Error> {
    let document_id = doc
        .get("$id")
        .and_then(Value::as_str)
        .map(str::to_string);

    if let Some(data) = doc.get_mut("data").map(Value::take) {
        doc = data;
    }

    let mut profile: UserProfile = serde_json::from_value(doc)?;
    if profile.id.is_empty() {
        if let Some(id) = document_id {
            profile.id = id;
        }
    }

    Ok(profile)
}
