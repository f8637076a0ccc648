//! User Directory
//!
//! Ingress for identity-provider "user created" webhooks. Payloads are parsed
//! into user records and upserted by id into a JSON file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

const FALLBACK_EMAIL: &str = "test@test.com";
const FALLBACK_LAST_NAME: &str = " ";

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("Payload is missing required field: {0}")]
    MissingField(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type DirectoryResult<T> = Result<T, DirectoryError>;

#[derive(Debug, Deserialize)]
struct WebhookEvent {
    data: UserCreated,
}

#[derive(Debug, Deserialize)]
struct UserCreated {
    id: Option<String>,
    #[serde(default)]
    email_addresses: Vec<EmailAddress>,
    first_name: Option<String>,
    last_name: Option<String>,
    image_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct EmailAddress {
    email_address: Option<String>,
}

/// A stored user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: String,
    pub email_address: String,
    pub first_name: Option<String>,
    pub last_name: String,
    pub image_url: Option<String>,
}

impl UserRecord {
    /// Build a record from a raw webhook body
    pub fn from_payload(payload: &str) -> DirectoryResult<Self> {
        let event: WebhookEvent = serde_json::from_str(payload)?;
        let data = event.data;

        let id = data
            .id
            .filter(|id| !id.is_empty())
            .ok_or(DirectoryError::MissingField("data.id"))?;

        let email_address = data
            .email_addresses
            .into_iter()
            .next()
            .and_then(|e| e.email_address)
            .unwrap_or_else(|| FALLBACK_EMAIL.to_string());

        Ok(Self {
            id,
            email_address,
            first_name: data.first_name,
            last_name: data.last_name.unwrap_or_else(|| FALLBACK_LAST_NAME.to_string()),
            image_url: data.image_url,
        })
    }
}

/// JSON-file backed set of users, keyed by id
#[derive(Debug)]
pub struct UserDirectory {
    path: PathBuf,
    users: Vec<UserRecord>,
}

impl UserDirectory {
    /// Open the directory file; a missing file is an empty directory
    pub fn open(path: &Path) -> DirectoryResult<Self> {
        let users = if path.exists() {
            let data = std::fs::read_to_string(path)?;
            serde_json::from_str(&data)?
        } else {
            Vec::new()
        };

        Ok(Self {
            path: path.to_path_buf(),
            users,
        })
    }

    pub fn users(&self) -> &[UserRecord] {
        &self.users
    }

    pub fn get(&self, id: &str) -> Option<&UserRecord> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Insert or replace by id
    pub fn upsert(&mut self, record: UserRecord) {
        match self.users.iter_mut().find(|u| u.id == record.id) {
            Some(existing) => *existing = record,
            None => self.users.push(record),
        }
    }

    pub fn save(&self) -> DirectoryResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_string_pretty(&self.users)?;
        std::fs::write(&self.path, data)?;
        Ok(())
    }
}

/// Parse a webhook payload and persist the user
pub fn ingest(path: &Path, payload: &str) -> DirectoryResult<UserRecord> {
    let record = UserRecord::from_payload(payload)?;
    tracing::info!(id = %record.id, "webhook received");

    let mut directory = UserDirectory::open(path)?;
    let created = directory.get(&record.id).is_none();
    directory.upsert(record.clone());
    directory.save()?;

    tracing::info!(id = %record.id, created, total = directory.users().len(), "stored user");
    Ok(record)
}
