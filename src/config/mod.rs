use crate::common::DefaultBody;
use crate::error::{ErrorHandlerError, Result};
use serde::Deserialize;
use std::env;

/// Environment variable naming the handler in logs
pub const NAME_VAR: &str = "ERROR_HANDLER_NAME";

/// Environment variable selecting the default body shape
pub const DEFAULT_BODY_VAR: &str = "ERROR_HANDLER_DEFAULT_BODY";

/// Environment variable toggling request header capture
pub const CAPTURE_HEADERS_VAR: &str = "ERROR_HANDLER_CAPTURE_HEADERS";

/// Error handler configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ErrorHandlerConfig {
    /// Name reported in logs
    pub name: String,

    /// Shape used when no override handles an error
    pub default_body: DefaultBody,

    /// Copy request headers for handlers to read.
    ///
    /// Headers are copied before the route runs, on every request, so
    /// turning this off saves an allocation when no override needs them.
    pub capture_headers: bool,
}

impl Default for ErrorHandlerConfig {
    fn default() -> Self {
        Self {
            name: "meshestra-error-handler".to_string(),
            default_body: DefaultBody::default(),
            capture_headers: true,
        }
    }
}

impl ErrorHandlerConfig {
    /// Load from the process environment, keeping defaults for unset keys
    pub fn from_env() -> Result<Self> {
        Self::from_vars(env::vars())
    }

    /// Load from key/value pairs
    pub fn from_vars<I, K, V>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut config = Self::default();

        for (key, value) in vars {
            let value = value.as_ref().trim();
            match key.as_ref() {
                NAME_VAR => {
                    if value.is_empty() {
                        return Err(ErrorHandlerError::invalid_config(format!(
                            "{} must not be empty",
                            NAME_VAR
                        )));
                    }
                    config.name = value.to_string();
                }
                DEFAULT_BODY_VAR => {
                    config.default_body = value.parse().map_err(|_| {
                        ErrorHandlerError::invalid_config(format!(
                            "{} must be `name-message` or `detailed`, got `{}`",
                            DEFAULT_BODY_VAR, value
                        ))
                    })?;
                }
                CAPTURE_HEADERS_VAR => {
                    config.capture_headers = value.parse().map_err(|_| {
                        ErrorHandlerError::invalid_config(format!(
                            "{} must be `true` or `false`, got `{}`",
                            CAPTURE_HEADERS_VAR, value
                        ))
                    })?;
                }
                _ => {}
            }
        }

        Ok(config)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_default_body(mut self, default_body: DefaultBody) -> Self {
        self.default_body = default_body;
        self
    }

    pub fn with_capture_headers(mut self, capture_headers: bool) -> Self {
        self.capture_headers = capture_headers;
        self
    }
}
