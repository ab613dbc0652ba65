//! # Gates RBAC
//!
//! Role and permission checks for gating what a user can see in a view
//! layer. This is a UI convenience, not a security boundary.
//!
//! ## Overview
//!
//! The gates-rbac crate handles:
//! - **State**: The roles and permissions held by the current session
//! - **Queries**: Role and permission predicates with any/all/unless forms
//! - **Wildcards**: Permission patterns such as `posts.*`
//! - **Persistence**: Optional write-through to a key-value store
//!
//! ## Architecture
//!
//! ```text
//! GatesConfig ──► Gates ──owns──► AuthState ◄── Query (predicates)
//!                   │
//!                   └──writes/reads──► KeyValueStore ("roles", "permissions")
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use gates_rbac::{Gates, GatesConfig, Query};
//!
//! let mut gates = Gates::new(GatesConfig::default().with_super_role("admin"));
//! gates.set_roles(["editor"]);
//! gates.set_permissions(["posts.*", "users.read"]);
//!
//! assert!(gates.has_any_role("admin|editor"));
//! assert!(gates.has_all_permissions("posts.create|users.read"));
//! assert!(gates.unless_permission("users.delete"));
//! ```
//!
//! ## Super Role
//!
//! When a super role is configured and the user holds it, every `has*`
//! check passes and every `unless*` check fails.

pub mod config;
pub mod error;
pub mod gates;
pub mod query;
pub mod state;
pub mod store;
pub mod wildcard;

// Re-export main types for convenience
pub use config::{GatesConfig, GatesOptions};
pub use error::{GateError, GateResult};
pub use gates::Gates;
pub use query::{Query, LIST_SEPARATOR};
pub use state::AuthState;
pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError, StoreResult};
