//! Runtime configuration
//!
//! All configuration is read once from the process environment at startup:
//! the listen port, the frontend origin allowed by CORS, and the environment
//! mode controlling how much error detail responses expose.

use axum::http::HeaderValue;
use std::env;
use std::sync::OnceLock;

/// Port the server binds when `PORT` is unset or unparsable
pub const DEFAULT_PORT: u16 = 5000;

static ACTIVE_ENVIRONMENT: OnceLock<Environment> = OnceLock::new();

/// Deployment mode, selected via the `APP_ENV` variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Error responses include the raw error object
    Development,
    /// Error responses suppress internal detail
    Production,
}

impl Environment {
    /// Parses an `APP_ENV` value. Anything other than `production`
    /// (case-insensitive) means development.
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("production") {
            Self::Production
        } else {
            Self::Development
        }
    }

    /// Records this mode as the process-wide active one. Set once at
    /// startup; later calls are ignored.
    pub fn set_active(self) {
        let _ = ACTIVE_ENVIRONMENT.set(self);
    }

    /// The mode recorded by [`Environment::set_active`], or development
    /// when none was recorded.
    pub fn active() -> Self {
        ACTIVE_ENVIRONMENT.get().copied().unwrap_or(Self::Development)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::Development
    }
}

/// Runtime configuration for the backend server
#[derive(Debug, Clone)]
pub struct Config {
    /// TCP port to listen on
    pub port: u16,

    /// Origin allowed by CORS; `None` means allow any origin
    pub frontend_origin: Option<HeaderValue>,

    /// Active deployment mode
    pub environment: Environment,
}

impl Config {
    /// Builds a configuration from `PORT`, `FRONTEND_URL` and `APP_ENV`.
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let frontend_origin = env::var("FRONTEND_URL")
            .ok()
            .and_then(|value| parse_origin(&value));

        let environment = env::var("APP_ENV")
            .map(|value| Environment::parse(&value))
            .unwrap_or_default();

        Self {
            port,
            frontend_origin,
            environment,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            frontend_origin: None,
            environment: Environment::default(),
        }
    }
}

/// Turns a `FRONTEND_URL` value into a CORS origin. `*` keeps the
/// allow-all default, and values that are not valid header text are
/// dropped with a warning rather than failing startup.
fn parse_origin(value: &str) -> Option<HeaderValue> {
    if value == "*" {
        return None;
    }

    match value.parse() {
        Ok(origin) => Some(origin),
        Err(_) => {
            tracing::warn!("Ignoring invalid FRONTEND_URL: {:?}", value);
            None
        }
    }
}
