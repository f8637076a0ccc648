//! Mail Module
//!
//! Email records, folders, and the in-memory mailbox that owns them.

pub mod mailbox;
pub mod seed;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Mail errors
#[derive(Debug, Error)]
pub enum MailError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid mailbox file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate email id: {0}")]
    DuplicateId(String),
}

pub type MailResult<T> = Result<T, MailError>;

/// Folder enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Folder {
    #[default]
    Inbox,
    Drafts,
    Sent,
    Archive,
    Trash,
}

impl Folder {
    /// Sidebar order
    pub const ALL: [Folder; 5] = [
        Folder::Inbox,
        Folder::Drafts,
        Folder::Sent,
        Folder::Archive,
        Folder::Trash,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Inbox => "inbox",
            Self::Drafts => "drafts",
            Self::Sent => "sent",
            Self::Archive => "archive",
            Self::Trash => "trash",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Inbox => "Inbox",
            Self::Drafts => "Drafts",
            Self::Sent => "Sent",
            Self::Archive => "Archive",
            Self::Trash => "Trash",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Inbox => "󰇰",
            Self::Drafts => "󰏫",
            Self::Sent => "󰑚",
            Self::Archive => "󰀼",
            Self::Trash => "󰩺",
        }
    }
}

/// Message sender
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sender {
    pub name: String,
    pub email: String,
}

/// A single email
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Email {
    pub id: String,
    pub from: Sender,
    pub subject: String,
    pub preview: String,
    pub body: String,
    pub timestamp: DateTime<Local>,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub is_starred: bool,
    #[serde(default)]
    pub has_attachments: bool,
    pub folder: Folder,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub thread_count: Option<u32>,
}

/// A message leaving the compose surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Change requested against the mailbox
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    MarkRead { id: String },
    SetStarred { id: String, starred: bool },
    Move { ids: Vec<String>, folder: Folder },
}

pub use mailbox::{Mailbox, OrderedView};
