//! Email dispatch abstraction.
//!
//! The Resend client is wrapped behind a trait so issuance logic can be
//! exercised in tests without network access.

use std::sync::{Arc, Mutex};

use anyhow::Result;
use async_trait::async_trait;
use resend::ResendService;

#[async_trait]
pub trait BaseMailer: Send + Sync {
    /// Send one HTML email. Returns the provider message id when available.
    async fn send_email(&self, to: &str, subject: &str, html: &str) -> Result<String>;
}

/// Wrapper around ResendService that implements the BaseMailer trait
pub struct ResendAdapter(pub Arc<ResendService>);

impl ResendAdapter {
    pub fn new(service: Arc<ResendService>) -> Self {
        Self(service)
    }
}

#[async_trait]
impl BaseMailer for ResendAdapter {
    async fn send_email(&self, to: &str, subject: &str, html: &str) -> Result<String> {
        let response = self
            .0
            .send_email(to, subject, html)
            .await
            .map_err(|e| anyhow::anyhow!("{}", e))?;
        Ok(response.id)
    }
}

// =============================================================================
// Mock Mailer
// =============================================================================

/// One captured send_email call.
#[derive(Debug, Clone)]
pub struct SentEmail {
    pub to: String,
    pub subject: String,
    pub html: String,
}

/// Mock mailer that records sends and can be told to fail.
#[derive(Clone, Default)]
pub struct MockMailer {
    sent: Arc<Mutex<Vec<SentEmail>>>,
    failing: Arc<Mutex<bool>>,
}

impl MockMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent send fail.
    pub fn fail_sends(&self) {
        *self.failing.lock().unwrap() = true;
    }

    /// Captured sends, in order.
    pub fn sent(&self) -> Vec<SentEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl BaseMailer for MockMailer {
    async fn send_email(&self, to: &str, subject: &str, html: &str) -> Result<String> {
        if *self.failing.lock().unwrap() {
            anyhow::bail!("mock mailer configured to fail");
        }
        let mut sent = self.sent.lock().unwrap();
        sent.push(SentEmail {
            to: to.to_string(),
            subject: subject.to_string(),
            html: html.to_string(),
        });
        Ok(format!("mock-{}", sent.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_mailer_records_sends() {
        let mailer = MockMailer::new();
        mailer
            .send_email("a@example.com", "Hello", "<p>hi</p>")
            .await
            .unwrap();

        let sent = mailer.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, "a@example.com");
        assert_eq!(sent[0].subject, "Hello");
    }

    #[tokio::test]
    async fn mock_mailer_can_fail() {
        let mailer = MockMailer::new();
        mailer.fail_sends();
        assert!(mailer.send_email("a@example.com", "s", "b").await.is_err());
        assert!(mailer.sent().is_empty());
    }
}
