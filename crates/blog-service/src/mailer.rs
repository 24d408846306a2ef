//! Development mail sink
//!
//! Writes delivered codes to the log instead of talking to an SMTP relay.

use async_trait::async_trait;
use blog_core::traits::{Mailer, RepoResult};
use tracing::info;
use uuid::Uuid;

#[derive(Debug, Clone, Default)]
pub struct LogMailer;

impl LogMailer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Mailer for LogMailer {
    async fn send_confirmation_code(&self, email: &str, code: Uuid) -> RepoResult<()> {
        info!(
            to = %email,
            link = %format!("/confirm-email?code={code}"),
            "Registration confirmation mail"
        );
        Ok(())
    }

    async fn send_recovery_code(&self, email: &str, code: Uuid) -> RepoResult<()> {
        info!(
            to = %email,
            link = %format!("/password-recovery?recoveryCode={code}"),
            "Password recovery mail"
        );
        Ok(())
    }
}
