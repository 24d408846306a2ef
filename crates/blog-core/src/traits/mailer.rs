//! Outbound mail port

use async_trait::async_trait;
use uuid::Uuid;

use super::repositories::RepoResult;

/// Delivers account codes to a user's mailbox
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Send the registration confirmation code
    async fn send_confirmation_code(&self, email: &str, code: Uuid) -> RepoResult<()>;

    /// Send the password recovery code
    async fn send_recovery_code(&self, email: &str, code: Uuid) -> RepoResult<()>;
}
