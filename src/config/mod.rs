use crate::error::{RestError, Result};
use crate::exception::{ExceptionFilter, JsonExceptionFilter, PlainExceptionFilter};
use dashmap::DashMap;
use std::env;
use std::str::FromStr;
use std::sync::Arc;

pub const BODY_LIMIT_KEY: &str = "RESTFUL_BODY_LIMIT";
pub const EXPOSE_ERRORS_KEY: &str = "RESTFUL_EXPOSE_ERRORS";
pub const CATCH_PANICS_KEY: &str = "RESTFUL_CATCH_PANICS";

const DEFAULT_BODY_LIMIT: usize = 2 * 1024 * 1024;

/// Configuration service
#[derive(Clone, Default)]
pub struct ConfigService {
    config: Arc<DashMap<String, String>>,
}

impl ConfigService {
    /// Creates a service seeded from the process environment.
    pub fn new() -> Self {
        let service = Self::default();
        for (key, value) in env::vars() {
            service.set(&key, &value);
        }
        service
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.config.get(key).map(|v| v.clone())
    }

    pub fn get_or(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.to_string())
    }

    pub fn set(&self, key: &str, value: &str) {
        self.config.insert(key.to_string(), value.to_string());
    }

    /// Parses the value stored under `key`. Absent keys are `Ok(None)`.
    pub fn parse<T: FromStr>(&self, key: &str) -> Result<Option<T>> {
        let Some(value) = self.get(key) else {
            return Ok(None);
        };
        let parsed = value.trim().parse();
        match parsed {
            Ok(parsed) => Ok(Some(parsed)),
            Err(_) => Err(RestError::InvalidConfig {
                key: key.to_string(),
                value,
            }),
        }
    }
}

/// Router settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestConfig {
    /// Largest request body accepted, in bytes.
    pub body_limit: usize,
    /// Answer failures with a JSON diagnostic body instead of a bare status.
    pub expose_errors: bool,
    /// Turn controller panics into server errors.
    pub catch_panics: bool,
}

impl Default for RestConfig {
    fn default() -> Self {
        Self {
            body_limit: DEFAULT_BODY_LIMIT,
            expose_errors: true,
            catch_panics: true,
        }
    }
}

impl RestConfig {
    /// Reads settings from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_service(&ConfigService::new())
    }

    pub fn from_service(config: &ConfigService) -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            body_limit: config
                .parse(BODY_LIMIT_KEY)?
                .unwrap_or(defaults.body_limit),
            expose_errors: config
                .parse(EXPOSE_ERRORS_KEY)?
                .unwrap_or(defaults.expose_errors),
            catch_panics: config
                .parse(CATCH_PANICS_KEY)?
                .unwrap_or(defaults.catch_panics),
        })
    }

    /// The filter matching `expose_errors`.
    pub fn exception_filter(&self) -> Arc<dyn ExceptionFilter> {
        if self.expose_errors {
            Arc::new(JsonExceptionFilter)
        } else {
            Arc::new(PlainExceptionFilter)
        }
    }
}
