//! User and session model -> entity mappers

use blog_core::entities::{EmailConfirmation, PasswordRecovery, Session, User};
use blog_core::value_objects::Snowflake;

use crate::models::{SessionModel, UserModel};

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        let password_recovery = match (model.recovery_code, model.recovery_expires_at) {
            (Some(code), Some(expires_at)) => Some(PasswordRecovery { code, expires_at }),
            _ => None,
        };

        User {
            id: Snowflake::new(model.id),
            login: model.login,
            email: model.email,
            password_hash: model.password_hash,
            email_confirmation: EmailConfirmation {
                code: model.confirmation_code,
                expires_at: model.confirmation_expires_at,
                is_confirmed: model.is_confirmed,
            },
            password_recovery,
            created_at: model.created_at,
        }
    }
}

impl From<SessionModel> for Session {
    fn from(model: SessionModel) -> Self {
        Session {
            device_id: model.device_id,
            token_key: model.token_key,
            user_id: Snowflake::new(model.user_id),
            ip: model.ip,
            user_agent: model.user_agent,
            issued_at: model.issued_at,
            expires_at: model.expires_at,
        }
    }
}
