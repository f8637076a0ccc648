//! AI request tracking with last-request-wins semantics.

use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;

use super::{mock_response, AiFeature};

/// A finished request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AiResponse {
    pub generation: u64,
    pub feature: AiFeature,
    pub email_id: String,
    pub text: String,
}

/// What the assistant panel shows
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AiStatus {
    #[default]
    Idle,
    Loading { feature: AiFeature, email_id: String },
    Ready(AiResponse),
}

/// Issues requests on worker threads and applies only the latest result
#[derive(Debug)]
pub struct AiRequests {
    generation: u64,
    delay: Duration,
    tx: Sender<AiResponse>,
    rx: Receiver<AiResponse>,
    status: AiStatus,
}

impl AiRequests {
    pub fn new(delay: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            generation: 0,
            delay,
            tx,
            rx,
            status: AiStatus::Idle,
        }
    }

    pub fn status(&self) -> &AiStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, AiStatus::Loading { .. })
    }

    /// Start a request; any pending one becomes stale
    pub fn request(&mut self, feature: AiFeature, email_id: &str, subject: &str) -> u64 {
        self.request_with_delay(feature, email_id, subject, self.delay)
    }

    fn request_with_delay(&mut self, feature: AiFeature, email_id: &str, subject: &str, delay: Duration) -> u64 {
        self.generation += 1;
        let generation = self.generation;
        self.status = AiStatus::Loading {
            feature,
            email_id: email_id.to_string(),
        };

        let tx = self.tx.clone();
        let email_id = email_id.to_string();
        let subject = subject.to_string();
        std::thread::spawn(move || {
            std::thread::sleep(delay);
            let text = mock_response(feature, &subject);
            // receiver gone means the app has exited
            let _ = tx.send(AiResponse { generation, feature, email_id, text });
        });

        tracing::debug!(generation, feature = feature.as_str(), "ai request issued");
        generation
    }

    /// Drain finished requests; returns true if the status changed
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        while let Ok(response) = self.rx.try_recv() {
            changed |= self.accept(response);
        }
        changed
    }

    /// Apply a response if it belongs to the latest request
    pub fn accept(&mut self, response: AiResponse) -> bool {
        if response.generation != self.generation {
            tracing::debug!(
                generation = response.generation,
                latest = self.generation,
                feature = response.feature.as_str(),
                "discarding stale ai response"
            );
            return false;
        }
        self.status = AiStatus::Ready(response);
        true
    }

    /// Forget the current result; in-flight requests become stale
    pub fn reset(&mut self) {
        self.generation += 1;
        self.status = AiStatus::Idle;
    }
}
