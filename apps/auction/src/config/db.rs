use std::env;

use crate::error::AppError;

pub const PROD_URL_VAR: &str = "AUCTION_DATABASE_URL";
pub const TEST_URL_VAR: &str = "AUCTION_TEST_DATABASE_URL";
pub const DEFAULT_TEST_URL: &str = "sqlite::memory:";

/// Database profile enum for different environments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbProfile {
    /// Production database profile
    Prod,
    /// Test database profile - enforces safety rules
    Test,
}

impl DbProfile {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "prod" => Some(Self::Prod),
            "test" => Some(Self::Test),
            _ => None,
        }
    }
}

/// Resolves the database URL for `profile` from the environment.
pub fn db_url(profile: DbProfile) -> Result<String, AppError> {
    db_url_from(profile, |key| env::var(key).ok())
}

pub fn db_url_from(
    profile: DbProfile,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<String, AppError> {
    match profile {
        DbProfile::Prod => lookup(PROD_URL_VAR)
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| {
                AppError::config(format!(
                    "Required environment variable '{PROD_URL_VAR}' is not set"
                ))
            }),
        DbProfile::Test => {
            let url = lookup(TEST_URL_VAR)
                .filter(|url| !url.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_TEST_URL.to_string());
            // Enforce safety: a shared test DB must end with "_test"
            if !is_sqlite(&url) && !database_name(&url).ends_with("_test") {
                return Err(AppError::config(format!(
                    "Test profile requires database name to end with '_test', but got: '{}'",
                    database_name(&url)
                )));
            }
            Ok(url)
        }
    }
}

pub fn is_sqlite(url: &str) -> bool {
    url.starts_with("sqlite:")
}

pub fn is_sqlite_memory(url: &str) -> bool {
    is_sqlite(url) && url.contains(":memory:")
}

fn database_name(url: &str) -> &str {
    let path = url.rsplit('/').next().unwrap_or_default();
    path.split('?').next().unwrap_or_default()
}
