//! AI Module
//!
//! Stubbed assistant: canned text per feature after a fixed delay. Requests
//! run on worker threads; only the most recently issued one is applied.

pub mod requests;

pub use requests::{AiRequests, AiStatus};

/// Assistant features
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AiFeature {
    Summarize,
    SuggestReply,
    Categorize,
}

impl AiFeature {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Summarize => "summarize",
            Self::SuggestReply => "suggest-reply",
            Self::Categorize => "categorize",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Summarize => "Summary",
            Self::SuggestReply => "Suggested Reply",
            Self::Categorize => "Suggested Categories",
        }
    }
}

/// Canned response for a feature, mentioning the email subject
pub fn mock_response(feature: AiFeature, subject: &str) -> String {
    match feature {
        AiFeature::Summarize => format!(
            "This email discusses {}. The sender is asking for feedback and proposes \
             a meeting next week to go over the implementation details. Key points \
             include timeline adjustments and resource allocation.",
            subject.to_lowercase()
        ),
        AiFeature::SuggestReply => format!(
            "Thank you for reaching out regarding {}. I've reviewed the details and \
             agree with the proposed approach. I'm available next week, Tuesday or \
             Wednesday afternoon works best. Let me know what time suits you.\n\nBest regards",
            subject
        ),
        AiFeature::Categorize => [
            "• Work - Project Management",
            "• Action Required - Response Needed",
            "• Priority - Medium",
            "• Follow-up - Meeting Scheduling",
        ]
        .join("\n"),
    }
}
