//! # Gates
//!
//! Owns the [`AuthState`] for a session and keeps it in sync with an
//! optional [`KeyValueStore`].

use crate::config::GatesConfig;
use crate::error::GateResult;
use crate::query::Query;
use crate::state::AuthState;
use crate::store::{decode_list, encode_list, KeyValueStore, PERMISSIONS_KEY, ROLES_KEY};

/// Session-scoped role and permission gate.
///
/// State is replaced only through [`set_roles`](Gates::set_roles) and
/// [`set_permissions`](Gates::set_permissions). When persistence is enabled
/// and a store is attached, every replacement is written through, and a new
/// instance built on the same store starts with the persisted lists.
///
/// # Example
///
/// ```
/// use gates_rbac::{Gates, GatesConfig, Query};
///
/// let mut gates = Gates::new(GatesConfig::default().with_super_role("admin"));
/// gates.set_roles(["editor"]);
/// gates.set_permissions(["posts.*"]);
///
/// assert!(gates.has_role("editor"));
/// assert!(gates.has_permission("posts.delete"));
/// assert!(!gates.has_permission("users.delete"));
/// ```
#[derive(Debug)]
pub struct Gates {
    config: GatesConfig,
    state: AuthState,
    store: Option<Box<dyn KeyValueStore>>,
}

impl Gates {
    /// Create a gate with empty state and no store.
    ///
    /// Persistence stays inactive even if the configuration asks for it,
    /// since there is nowhere to write. A super role that fails
    /// [`GatesConfig::validate`] is logged and dropped.
    pub fn new(config: GatesConfig) -> Self {
        let config = checked(config);
        let state = AuthState::new(config.super_role.clone(), false);
        Self {
            config,
            state,
            store: None,
        }
    }

    /// Create a gate backed by `store`.
    ///
    /// If the configuration enables persistence, roles and permissions are
    /// loaded from the store. Unreadable or malformed entries are logged and
    /// treated as empty.
    pub fn with_store(config: GatesConfig, store: Box<dyn KeyValueStore>) -> Self {
        let config = checked(config);
        let mut state = AuthState::new(config.super_role.clone(), config.persistent);

        if config.persistent {
            state.replace_roles(load_list(store.as_ref(), ROLES_KEY));
            state.replace_permissions(load_list(store.as_ref(), PERMISSIONS_KEY));

            tracing::debug!(
                roles = state.roles().len(),
                permissions = state.permissions().len(),
                "Rehydrated gate state from store"
            );
        }

        Self {
            config,
            state,
            store: Some(store),
        }
    }

    /// Replace the role list.
    pub fn set_roles<I, S>(&mut self, roles: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let roles: Vec<String> = roles.into_iter().map(Into::into).collect();
        self.persist(ROLES_KEY, &roles);

        tracing::debug!(count = roles.len(), "Roles replaced");
        self.state.replace_roles(roles);
    }

    /// Replace the permission list.
    pub fn set_permissions<I, S>(&mut self, permissions: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let permissions: Vec<String> = permissions.into_iter().map(Into::into).collect();
        self.persist(PERMISSIONS_KEY, &permissions);

        tracing::debug!(count = permissions.len(), "Permissions replaced");
        self.state.replace_permissions(permissions);
    }

    /// Roles in the order they were set.
    pub fn roles(&self) -> &[String] {
        self.state.roles()
    }

    /// Permissions in the order they were set.
    pub fn permissions(&self) -> &[String] {
        self.state.permissions()
    }

    /// Borrow the current state.
    pub fn state(&self) -> &AuthState {
        &self.state
    }

    /// Owned copy of the current state.
    ///
    /// Useful for hosts that evaluate checks away from the gate, such as
    /// behind a lock that should not be held during rendering.
    pub fn snapshot(&self) -> AuthState {
        self.state.clone()
    }

    /// The configuration this gate was built with.
    pub fn config(&self) -> &GatesConfig {
        &self.config
    }

    /// Whether updates are written to the store.
    pub fn is_persistent(&self) -> bool {
        self.state.persistence_enabled()
    }

    /// Write both lists to the store, reporting failures.
    ///
    /// Setters already write through and only log failures; this lets a
    /// host confirm the store is in sync, e.g. before the session ends.
    /// Does nothing when persistence is inactive.
    pub fn flush(&mut self) -> GateResult<()> {
        if !self.state.persistence_enabled() {
            return Ok(());
        }
        if let Some(store) = self.store.as_mut() {
            store.set(ROLES_KEY, &encode_list(self.state.roles()))?;
            store.set(PERMISSIONS_KEY, &encode_list(self.state.permissions()))?;
        }
        Ok(())
    }

    /// End the session and hand back the store, if any.
    pub fn into_store(self) -> Option<Box<dyn KeyValueStore>> {
        self.store
    }

    fn persist(&mut self, key: &str, values: &[String]) {
        if !self.state.persistence_enabled() {
            return;
        }
        let Some(store) = self.store.as_mut() else {
            return;
        };

        if let Err(e) = store.set(key, &encode_list(values)) {
            tracing::warn!(key, error = %e, "Failed to persist gate state");
        }
    }
}

impl Query for Gates {
    fn auth_state(&self) -> &AuthState {
        &self.state
    }
}

fn checked(mut config: GatesConfig) -> GatesConfig {
    if let Err(e) = config.validate() {
        tracing::warn!(error = %e, "Ignoring invalid super role");
        config.super_role = None;
    }
    config
}

fn load_list(store: &dyn KeyValueStore, key: &str) -> Vec<String> {
    let raw = match store.get(key) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!(key, error = %e, "Failed to read persisted list, starting empty");
            return Vec::new();
        }
    };

    decode_list(key, raw.as_deref()).unwrap_or_else(|e| {
        tracing::warn!(key, error = %e, "Discarding malformed persisted list");
        Vec::new()
    })
}
