//! Sample mail used when no mailbox fixture is configured.

use chrono::{Duration, Local};

use super::{Email, Folder, Sender};

const ACCOUNT_NAME: &str = "You";
const ACCOUNT_EMAIL: &str = "user@insert.app";

/// The local account, used as the sender of outgoing mail
pub fn account() -> Sender {
    Sender {
        name: ACCOUNT_NAME.to_string(),
        email: ACCOUNT_EMAIL.to_string(),
    }
}

struct Seed {
    name: &'static str,
    email: &'static str,
    subject: &'static str,
    body: &'static str,
    minutes_ago: i64,
    read: bool,
    starred: bool,
    attachments: bool,
    folder: Folder,
    labels: &'static [&'static str],
    thread: Option<u32>,
}

const SEEDS: &[Seed] = &[
    Seed {
        name: "GitHub",
        email: "notifications@github.com",
        subject: "[repo/project] New pull request #142: Feature/vim-navigation",
        body: "A new pull request was opened by @developer.\n\nChanges:\n- j/k navigation\n- g/G jump commands\n- command palette\n\nFiles changed:\n- src/input/keymap.rs\n- src/controller/mod.rs",
        minutes_ago: 15,
        read: false,
        starred: true,
        attachments: false,
        folder: Folder::Inbox,
        labels: &["work", "development"],
        thread: Some(3),
    },
    Seed {
        name: "Linear",
        email: "notifications@linear.app",
        subject: "Issue ENG-1337 assigned to you: Implement command palette search",
        body: "ENG-1337 was assigned to you.\n\nPriority: High\nStatus: In Progress\n\nThe command palette needs fuzzy search across emails, contacts and folders.",
        minutes_ago: 45,
        read: false,
        starred: false,
        attachments: true,
        folder: Folder::Inbox,
        labels: &["work", "urgent"],
        thread: None,
    },
    Seed {
        name: "Sarah Chen",
        email: "sarah.chen@company.com",
        subject: "Re: Q4 Engineering Roadmap Review",
        body: "Thanks for the detailed breakdown. I agree with moving the search work up.\n\nCan we meet next Tuesday to go over resourcing?\n\nSarah",
        minutes_ago: 2 * 60,
        read: true,
        starred: true,
        attachments: false,
        folder: Folder::Inbox,
        labels: &["work"],
        thread: Some(7),
    },
    Seed {
        name: "Stripe",
        email: "billing@stripe.com",
        subject: "Your monthly invoice for December",
        body: "Your invoice is ready.\n\nAmount due: $49.00\nDue date: January 1\n\nThe PDF is attached to this message.",
        minutes_ago: 24 * 60,
        read: true,
        starred: false,
        attachments: true,
        folder: Folder::Inbox,
        labels: &["billing", "receipts"],
        thread: None,
    },
    Seed {
        name: "Marcus Rodriguez",
        email: "marcus@startup.io",
        subject: "Collaborative Filtering Algorithm - Code Review Needed",
        body: "Hey,\n\nI pushed the first pass of the recommendation engine. Could you review the similarity scoring before Friday?\n\nMarcus",
        minutes_ago: 2 * 24 * 60,
        read: false,
        starred: false,
        attachments: false,
        folder: Folder::Inbox,
        labels: &["work", "code-review"],
        thread: None,
    },
    Seed {
        name: "Figma",
        email: "updates@figma.com",
        subject: "You were mentioned in \"Email Client - Terminal UI\"",
        body: "@you what do you think about the status bar colors for VISUAL mode?",
        minutes_ago: 3 * 24 * 60,
        read: true,
        starred: false,
        attachments: false,
        folder: Folder::Inbox,
        labels: &["design"],
        thread: None,
    },
    Seed {
        name: "Vercel",
        email: "deploy@vercel.com",
        subject: "Deployment successful: email-client-vim (Production)",
        body: "Your deployment is live.\n\nBuild time: 42s\nRegion: iad1",
        minutes_ago: 4 * 24 * 60,
        read: true,
        starred: true,
        attachments: false,
        folder: Folder::Inbox,
        labels: &["deployment"],
        thread: None,
    },
    Seed {
        name: "Hacker News Digest",
        email: "digest@hackernews.com",
        subject: "Top 10 stories this week",
        body: "1. Show HN: A modal email client for the terminal\n2. The case for keyboard-first interfaces\n3. ...",
        minutes_ago: 5 * 24 * 60,
        read: true,
        starred: false,
        attachments: false,
        folder: Folder::Inbox,
        labels: &["newsletter"],
        thread: None,
    },
    Seed {
        name: "You",
        email: "user@insert.app",
        subject: "Notes for the planning meeting",
        body: "- revisit folder badges\n- decide on AI panel defaults",
        minutes_ago: 6 * 24 * 60,
        read: true,
        starred: false,
        attachments: false,
        folder: Folder::Drafts,
        labels: &[],
        thread: None,
    },
];

/// Sample mailbox contents, timestamped relative to now
pub fn sample_emails() -> Vec<Email> {
    let now = Local::now();
    SEEDS
        .iter()
        .enumerate()
        .map(|(i, s)| Email {
            id: (i + 1).to_string(),
            from: Sender {
                name: s.name.to_string(),
                email: s.email.to_string(),
            },
            subject: s.subject.to_string(),
            preview: preview_of(s.body),
            body: s.body.to_string(),
            timestamp: now - Duration::minutes(s.minutes_ago),
            is_read: s.read,
            is_starred: s.starred,
            has_attachments: s.attachments,
            folder: s.folder,
            labels: s.labels.iter().map(|l| l.to_string()).collect(),
            thread_count: s.thread,
        })
        .collect()
}

fn preview_of(body: &str) -> String {
    body.lines()
        .filter(|l| !l.trim().is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .chars()
        .take(100)
        .collect()
}

/// Minimal email for tests
#[cfg(test)]
pub fn email(id: &str, folder: Folder) -> Email {
    Email {
        id: id.to_string(),
        from: Sender {
            name: format!("Sender {}", id),
            email: format!("{}@example.com", id),
        },
        subject: format!("Subject {}", id),
        preview: String::new(),
        body: String::new(),
        timestamp: Local::now(),
        is_read: false,
        is_starred: false,
        has_attachments: false,
        folder,
        labels: Vec::new(),
        thread_count: None,
    }
}
