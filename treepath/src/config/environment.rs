//! Environment variable handling for layout overrides.
//!
//! This module provides support for `TREEPATH_*` environment variables that
//! override values read from layout files.

use std::env;

use crate::config::schema::LayoutConfig;
use crate::error::{Error, Result};
use crate::path::RelativePathMode;

/// Overrides the layout's default relative path mode.
pub const MODE_ENV: &str = "TREEPATH_MODE";

/// Names the layout file, bypassing discovery. Read by the CLI.
pub const LAYOUT_ENV: &str = "TREEPATH_LAYOUT";

/// Handles environment variable overrides for layout files.
///
/// # Examples
///
/// ```no_run
/// use treepath::config::{EnvironmentConfig, LayoutConfig, NodeSpec};
///
/// let mut config = LayoutConfig { mode: None, root: NodeSpec::file("out.txt") };
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to a layout.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if `TREEPATH_MODE` is neither `fs` nor
    /// `url`.
    pub fn apply_overrides(config: &mut LayoutConfig) -> Result<()> {
        if let Ok(value) = env::var(MODE_ENV) {
            config.mode = Some(Self::parse_mode(MODE_ENV, &value)?);
        }
        Ok(())
    }

    fn parse_mode(field: &str, value: &str) -> Result<RelativePathMode> {
        value.parse().map_err(|_| Error::Validation {
            field: field.into(),
            message: format!("expected \"fs\" or \"url\", got {value:?}"),
        })
    }
}
