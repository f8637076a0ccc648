//! Mailbox
//!
//! Authoritative email collection and folder views over it.

use std::collections::HashSet;
use std::path::Path;

use chrono::Local;

use super::{Draft, Email, Folder, MailError, MailResult, Mutation, Sender};

const PREVIEW_LEN: usize = 100;

/// Owns every email for the session
#[derive(Debug, Clone, Default)]
pub struct Mailbox {
    emails: Vec<Email>,
}

impl Mailbox {
    pub fn new(emails: Vec<Email>) -> MailResult<Self> {
        let mut seen = HashSet::new();
        for email in &emails {
            if !seen.insert(email.id.as_str()) {
                return Err(MailError::DuplicateId(email.id.clone()));
            }
        }
        Ok(Self { emails })
    }

    /// Load a JSON array of emails
    pub fn load(path: &Path) -> MailResult<Self> {
        let data = std::fs::read_to_string(path)?;
        let emails: Vec<Email> = serde_json::from_str(&data)?;
        Self::new(emails)
    }

    pub fn len(&self) -> usize {
        self.emails.len()
    }

    #[cfg(test)]
    pub fn get(&self, id: &str) -> Option<&Email> {
        self.emails.iter().find(|e| e.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut Email> {
        self.emails.iter_mut().find(|e| e.id == id)
    }

    /// Emails of one folder in collection order
    pub fn view(&self, folder: Folder) -> OrderedView<'_> {
        OrderedView::from_entries(self.emails.iter().filter(|e| e.folder == folder).collect())
    }

    /// Count shown next to a folder in the sidebar
    pub fn badge_count(&self, folder: Folder) -> usize {
        match folder {
            Folder::Inbox => self.unread_count(Folder::Inbox),
            Folder::Drafts => self.emails.iter().filter(|e| e.folder == Folder::Drafts).count(),
            _ => 0,
        }
    }

    pub fn unread_count(&self, folder: Folder) -> usize {
        self.emails
            .iter()
            .filter(|e| e.folder == folder && !e.is_read)
            .count()
    }

    /// Apply a mutation, returning how many emails changed
    pub fn apply(&mut self, mutation: &Mutation) -> usize {
        match mutation {
            Mutation::MarkRead { id } => match self.get_mut(id) {
                Some(email) if !email.is_read => {
                    email.is_read = true;
                    1
                }
                Some(_) => 0,
                None => missing(id),
            },
            Mutation::SetStarred { id, starred } => match self.get_mut(id) {
                Some(email) if email.is_starred != *starred => {
                    email.is_starred = *starred;
                    1
                }
                Some(_) => 0,
                None => missing(id),
            },
            Mutation::Move { ids, folder } => {
                let mut moved = 0;
                for id in ids {
                    match self.get_mut(id) {
                        Some(email) => {
                            email.folder = *folder;
                            moved += 1;
                        }
                        None => {
                            missing(id);
                        }
                    }
                }
                tracing::info!(moved, folder = folder.as_str(), "moved emails");
                moved
            }
        }
    }

    /// Store an outgoing message in the Sent folder
    pub fn record_sent(&mut self, draft: &Draft, from: &Sender) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        let preview: String = draft.body.chars().take(PREVIEW_LEN).collect();

        self.emails.push(Email {
            id: id.clone(),
            from: from.clone(),
            subject: draft.subject.clone(),
            preview,
            body: draft.body.clone(),
            timestamp: Local::now(),
            is_read: true,
            is_starred: false,
            has_attachments: false,
            folder: Folder::Sent,
            labels: Vec::new(),
            thread_count: None,
        });

        tracing::info!(%id, to = %draft.to, "recorded sent email");
        id
    }
}

fn missing(id: &str) -> usize {
    tracing::warn!(%id, "mutation references unknown email");
    0
}

/// Folder-filtered, order-stable view of the mailbox
#[derive(Debug, Clone)]
pub struct OrderedView<'a> {
    entries: Vec<&'a Email>,
}

impl<'a> OrderedView<'a> {
    pub fn from_entries(entries: Vec<&'a Email>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'a Email> {
        self.entries.get(index).copied()
    }

    #[cfg(test)]
    pub fn first(&self) -> Option<&'a Email> {
        self.entries.first().copied()
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    pub fn find(&self, id: &str) -> Option<&'a Email> {
        self.entries.iter().copied().find(|e| e.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Email> + '_ {
        self.entries.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mail::seed;

    fn mailbox() -> Mailbox {
        Mailbox::new(seed::sample_emails()).unwrap()
    }

    #[test]
    fn test_view_filters_by_folder_in_order() {
        let mut mb = Mailbox::new(vec![
            seed::email("a", Folder::Inbox),
            seed::email("b", Folder::Archive),
            seed::email("c", Folder::Inbox),
        ])
        .unwrap();

        let ids: Vec<&str> = mb.view(Folder::Inbox).iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);

        mb.apply(&Mutation::Move { ids: vec!["b".into()], folder: Folder::Inbox });
        let ids: Vec<&str> = mb.view(Folder::Inbox).iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = Mailbox::new(vec![seed::email("a", Folder::Inbox), seed::email("a", Folder::Sent)]);
        assert!(matches!(result, Err(MailError::DuplicateId(id)) if id == "a"));
    }

    #[test]
    fn test_mark_read_is_idempotent() {
        let mut mb = mailbox();
        let id = mb.view(Folder::Inbox).iter().find(|e| !e.is_read).unwrap().id.clone();

        assert_eq!(mb.apply(&Mutation::MarkRead { id: id.clone() }), 1);
        assert_eq!(mb.apply(&Mutation::MarkRead { id: id.clone() }), 0);
        assert!(mb.get(&id).unwrap().is_read);
    }

    #[test]
    fn test_set_starred() {
        let mut mb = Mailbox::new(vec![seed::email("a", Folder::Inbox)]).unwrap();
        assert_eq!(mb.apply(&Mutation::SetStarred { id: "a".into(), starred: true }), 1);
        assert!(mb.get("a").unwrap().is_starred);
        assert_eq!(mb.apply(&Mutation::SetStarred { id: "a".into(), starred: false }), 1);
        assert!(!mb.get("a").unwrap().is_starred);
    }

    #[test]
    fn test_move_skips_unknown_ids() {
        let mut mb = Mailbox::new(vec![seed::email("a", Folder::Inbox)]).unwrap();
        let moved = mb.apply(&Mutation::Move {
            ids: vec!["a".into(), "zzz".into()],
            folder: Folder::Trash,
        });
        assert_eq!(moved, 1);
        assert_eq!(mb.get("a").unwrap().folder, Folder::Trash);
    }

    #[test]
    fn test_badge_counts() {
        let mut unread = seed::email("a", Folder::Inbox);
        unread.is_read = false;
        let mut read = seed::email("b", Folder::Inbox);
        read.is_read = true;
        let draft = seed::email("c", Folder::Drafts);
        let mb = Mailbox::new(vec![unread, read, draft]).unwrap();

        assert_eq!(mb.badge_count(Folder::Inbox), 1);
        assert_eq!(mb.badge_count(Folder::Drafts), 1);
        assert_eq!(mb.badge_count(Folder::Trash), 0);
    }

    #[test]
    fn test_record_sent() {
        let mut mb = Mailbox::default();
        let draft = Draft {
            to: "ada@example.com".into(),
            subject: "Hello".into(),
            body: "Hi there".into(),
        };
        let id = mb.record_sent(&draft, &seed::account());

        let sent = mb.view(Folder::Sent);
        assert_eq!(sent.len(), 1);
        assert_eq!(sent.first().unwrap().id, id);
        assert!(sent.first().unwrap().is_read);
        assert_eq!(sent.first().unwrap().preview, "Hi there");
    }

    #[test]
    fn test_load_fixture() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mail.json");
        let emails = vec![seed::email("x", Folder::Archive)];
        std::fs::write(&path, serde_json::to_string(&emails).unwrap()).unwrap();

        let mb = Mailbox::load(&path).unwrap();
        assert_eq!(mb.len(), 1);
        assert_eq!(mb.view(Folder::Archive).first().unwrap().id, "x");
    }

    #[test]
    fn test_load_invalid_fixture() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mail.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(Mailbox::load(&path), Err(MailError::Json(_))));
    }
}
