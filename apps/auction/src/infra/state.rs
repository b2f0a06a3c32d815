use crate::config::db::DbProfile;
use crate::config::roles::RoleTable;
use crate::error::AppError;
use crate::infra::db::{bootstrap_db, bootstrap_url};
use crate::state::app_state::AppState;

enum DbChoice {
    None,
    Profile(DbProfile),
    Url(String),
}

/// Builder for creating AppState instances (used in both tests and hosts)
pub struct StateBuilder {
    roles: Option<RoleTable>,
    db: DbChoice,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            roles: None,
            db: DbChoice::None,
        }
    }

    pub fn with_db(mut self, profile: DbProfile) -> Self {
        self.db = DbChoice::Profile(profile);
        self
    }

    pub fn with_db_url(mut self, url: impl Into<String>) -> Self {
        self.db = DbChoice::Url(url.into());
        self
    }

    pub fn with_roles(mut self, roles: RoleTable) -> Self {
        self.roles = Some(roles);
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        // Role membership defaults to the environment.
        let roles = self.roles.unwrap_or_else(RoleTable::from_env);
        match self.db {
            // single entrypoint: connect + migrate
            DbChoice::Profile(profile) => Ok(AppState::with_db(bootstrap_db(profile).await?, roles)),
            DbChoice::Url(url) => Ok(AppState::with_db(bootstrap_url(&url).await?, roles)),
            DbChoice::None => Ok(AppState::without_db(roles)),
        }
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
