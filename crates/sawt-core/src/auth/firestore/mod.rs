//! Firestore REST profile store.

mod value;

use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::{Map, Value};

use super::{AuthError, AuthResult, AuthSession, FirebaseConfig, ProfileStore};
use crate::models::UserProfile;
use crate::util::compact_text;

const FIRESTORE_URL: &str = "https://firestore.googleapis.com/v1";
const CREATED_AT_FIELD: &str = "createdAt";
const CUSTOM_ID_FIELD: &str = "customId";

#[derive(Clone)]
pub struct FirestoreProfileStore {
    base_url: String,
    project_id: String,
    collection: String,
    client: Client,
}

impl FirestoreProfileStore {
    pub fn new(config: &FirebaseConfig, collection: impl Into<String>) -> AuthResult<Self> {
        let project_id = config.project_id.trim().to_string();
        if project_id.is_empty() {
            return Err(AuthError::InvalidConfiguration(
                "Firebase project id must not be empty",
            ));
        }
        let collection = collection.into().trim().trim_matches('/').to_string();
        if collection.is_empty() {
            return Err(AuthError::InvalidConfiguration(
                "Profile collection must not be empty",
            ));
        }

        let base_url = config.firestore_emulator_host.as_ref().map_or_else(
            || FIRESTORE_URL.to_string(),
            |host| format!("http://{host}/v1"),
        );

        Ok(Self {
            base_url,
            project_id,
            collection,
            client: Client::builder().build()?,
        })
    }

    fn database_path(&self) -> String {
        format!("projects/{}/databases/(default)/documents", self.project_id)
    }

    fn document_name(&self, user_id: &str) -> String {
        format!("{}/{}/{}", self.database_path(), self.collection, user_id)
    }

    /// The uid segment is percent-encoded; the resource name inside request
    /// bodies stays raw.
    fn document_url(&self, user_id: &str) -> String {
        format!(
            "{}/{}/{}/{}",
            self.base_url,
            self.database_path(),
            self.collection,
            urlencoding::encode(user_id)
        )
    }

    fn commit_body(&self, user_id: &str, profile: &UserProfile) -> AuthResult<Value> {
        let mut document = serde_json::to_value(profile)?;
        if let Value::Object(object) = &mut document {
            object.remove(CREATED_AT_FIELD);
        }
        let fields = value::encode_fields(&document)?;

        Ok(serde_json::json!({
            "writes": [{
                "update": {
                    "name": self.document_name(user_id),
                    "fields": fields,
                },
                "updateTransforms": [{
                    "fieldPath": CREATED_AT_FIELD,
                    "setToServerValue": "REQUEST_TIME",
                }],
            }],
        }))
    }

    fn custom_id_query(&self, custom_id: u32) -> Value {
        serde_json::json!({
            "structuredQuery": {
                "from": [{ "collectionId": self.collection }],
                "where": {
                    "fieldFilter": {
                        "field": { "fieldPath": CUSTOM_ID_FIELD },
                        "op": "EQUAL",
                        "value": value::encode_value(&Value::from(custom_id)),
                    }
                },
                "limit": 1,
            }
        })
    }
}

impl ProfileStore for FirestoreProfileStore {
    async fn read_profile(&self, session: &AuthSession) -> AuthResult<Option<UserProfile>> {
        let response = self
            .client
            .get(self.document_url(&session.user.id))
            .bearer_auth(&session.id_token)
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(store_error("read", status, &body));
        }

        let document = response.json::<FirestoreDocument>().await?;
        document.into_profile().map(Some)
    }

    async fn write_profile(&self, session: &AuthSession, profile: &UserProfile) -> AuthResult<()> {
        let body = self.commit_body(&session.user.id, profile)?;
        let response = self
            .client
            .post(format!("{}/{}:commit", self.base_url, self.database_path()))
            .bearer_auth(&session.id_token)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(store_error("write", status, &body));
        }
        Ok(())
    }

    async fn custom_id_in_use(&self, session: &AuthSession, custom_id: u32) -> AuthResult<bool> {
        let response = self
            .client
            .post(format!("{}/{}:runQuery", self.base_url, self.database_path()))
            .bearer_auth(&session.id_token)
            .json(&self.custom_id_query(custom_id))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(store_error("query", status, &body));
        }

        let rows = response.json::<Vec<RunQueryRow>>().await?;
        Ok(rows.iter().any(|row| row.document.is_some()))
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FirestoreDocument {
    #[serde(default)]
    fields: Map<String, Value>,
    create_time: Option<String>,
}

impl FirestoreDocument {
    fn into_profile(self) -> AuthResult<UserProfile> {
        let decoded = value::decode_fields(&self.fields)?;
        let mut profile: UserProfile = serde_json::from_value(decoded)?;
        if profile.created_at.is_none() {
            profile.created_at = self
                .create_time
                .as_deref()
                .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
                .map(|time| time.with_timezone(&Utc));
        }
        Ok(profile)
    }
}

#[derive(Debug, Deserialize)]
struct RunQueryRow {
    document: Option<Value>,
}

fn store_error(operation: &str, status: StatusCode, body: &str) -> AuthError {
    let body = compact_text(body);
    if body.is_empty() {
        AuthError::Store(format!("profile {operation} failed: HTTP {}", status.as_u16()))
    } else {
        AuthError::Store(format!(
            "profile {operation} failed: {body} ({})",
            status.as_u16()
        ))
    }
}
