//! Gate configuration.
//!
//! Options are loaded from environment variables with defaults suitable for
//! hosts without persistent storage, and can be overridden per call.

use serde::{Deserialize, Serialize};

use crate::error::{GateError, GateResult};
use crate::query::LIST_SEPARATOR;

/// Configuration for a [`Gates`](crate::Gates) instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatesConfig {
    /// Persist roles and permissions to the attached store.
    pub persistent: bool,

    /// Role that satisfies every role and permission check.
    #[serde(alias = "superRole", skip_serializing_if = "Option::is_none")]
    pub super_role: Option<String>,
}

/// Per-call overrides merged on top of a [`GatesConfig`].
///
/// Unset fields keep the base configuration's value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatesOptions {
    /// Override for [`GatesConfig::persistent`].
    pub persistent: Option<bool>,

    /// Override for [`GatesConfig::super_role`].
    #[serde(alias = "superRole")]
    pub super_role: Option<String>,
}

impl GatesConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `GATES_PERSISTENT`: Enable persistence (default: false; any value
    ///   other than `false` or `0` enables it)
    /// - `GATES_SUPER_ROLE`: Super role name (default: none; empty means none)
    pub fn from_env() -> Self {
        let default = Self::default();

        Self {
            persistent: std::env::var("GATES_PERSISTENT")
                .map(|s| s != "false" && s != "0")
                .unwrap_or(default.persistent),
            super_role: std::env::var("GATES_SUPER_ROLE")
                .ok()
                .filter(|s| !s.is_empty())
                .or(default.super_role),
        }
    }

    /// Builder-style setter for the super role.
    pub fn with_super_role(mut self, role: impl Into<String>) -> Self {
        self.super_role = Some(role.into());
        self
    }

    /// Builder-style setter for persistence.
    pub fn with_persistent(mut self, persistent: bool) -> Self {
        self.persistent = persistent;
        self
    }

    /// Merge per-call options over this configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use gates_rbac::{GatesConfig, GatesOptions};
    ///
    /// let base = GatesConfig::default().with_super_role("admin");
    /// let merged = base.merge(&GatesOptions {
    ///     persistent: Some(true),
    ///     super_role: None,
    /// });
    /// assert!(merged.persistent);
    /// assert_eq!(merged.super_role.as_deref(), Some("admin"));
    /// ```
    pub fn merge(&self, options: &GatesOptions) -> Self {
        Self {
            persistent: options.persistent.unwrap_or(self.persistent),
            super_role: options
                .super_role
                .clone()
                .or_else(|| self.super_role.clone()),
        }
    }

    /// Validate the configuration.
    ///
    /// A super role must be non-blank and must not contain the list
    /// separator, since it could never be named in a compound query.
    pub fn validate(&self) -> GateResult<()> {
        if let Some(ref role) = self.super_role {
            if role.trim().is_empty() {
                return Err(GateError::Configuration(
                    "super role must not be blank".to_string(),
                ));
            }
            if role.contains(LIST_SEPARATOR) {
                return Err(GateError::Configuration(format!(
                    "super role '{}' must not contain '{}'",
                    role, LIST_SEPARATOR
                )));
            }
        }
        Ok(())
    }
}
