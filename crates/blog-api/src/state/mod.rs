//! Shared handler state
//!
//! Repositories, mailer and token service live in the service context;
//! handlers build a service per request from it.

use std::fmt;
use std::sync::Arc;

use blog_common::{AdminConfig, AppConfig, JwtService};
use blog_service::ServiceContext;

struct Shared {
    services: ServiceContext,
    config: AppConfig,
}

/// Cheaply cloneable handle passed to every handler
#[derive(Clone)]
pub struct AppState {
    shared: Arc<Shared>,
}

impl AppState {
    pub fn new(services: ServiceContext, config: AppConfig) -> Self {
        Self {
            shared: Arc::new(Shared { services, config }),
        }
    }

    pub fn services(&self) -> &ServiceContext {
        &self.shared.services
    }

    pub fn config(&self) -> &AppConfig {
        &self.shared.config
    }

    /// Signs and verifies access and refresh tokens
    pub fn jwt_service(&self) -> &JwtService {
        self.shared.services.jwt_service()
    }

    /// Credentials accepted by the admin extractor
    pub fn admin(&self) -> &AdminConfig {
        &self.shared.config.admin
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("env", &self.shared.config.app.env)
            .finish_non_exhaustive()
    }
}
