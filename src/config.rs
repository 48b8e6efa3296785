use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Connection settings for the environment a wizard run targets.
///
/// The library never reads the process environment itself; the binary that
/// owns the process decides where these values come from. The bundled CLI
/// reads `PARAMFLOW_BASE_URL`, `PARAMFLOW_USER_MAIL` and `PARAMFLOW_PASSWORD`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub base_url: String,
    pub user_mail: String,
    pub password: String,
}

impl SessionConfig {
    pub fn new(base_url: &str, user_mail: &str, password: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            user_mail: user_mail.to_string(),
            password: password.to_string(),
        }
    }

    /// Checks that every setting is present and carries actual content.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check("base_url", &self.base_url)?;
        check("user_mail", &self.user_mail)?;
        check("password", &self.password)?;
        Ok(())
    }
}

fn check(name: &'static str, value: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Missing(name));
    }
    if value.trim().is_empty() {
        return Err(ConfigError::Blank(name));
    }
    Ok(())
}
