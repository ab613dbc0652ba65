//! # Gates Directives
//!
//! Declarative role and permission bindings for view layers, evaluated once
//! when an element mounts.
//!
//! ## Overview
//!
//! The gates-directives crate handles:
//! - **Bindings**: `role`, `permission`, `can` and `role-or-permission`
//! - **Conditions**: Mapping a binding's kind and argument to a query
//! - **Decisions**: Keep, remove, or alter the element
//!
//! The host applies the [`MountDecision`]; nothing here touches a view tree.
//!
//! ## Usage
//!
//! ```rust
//! use gates_directives::{Binding, BindingKind, Dispatcher};
//! use gates_rbac::{Gates, GatesConfig};
//!
//! let mut gates = Gates::new(GatesConfig::default());
//! gates.set_permissions(["posts.*"]);
//!
//! let dispatcher = Dispatcher::new(&gates);
//!
//! // <button v-can:any="'posts.edit|users.edit'">
//! let edit = Binding::new(BindingKind::Can)
//!     .with_argument("any")
//!     .with_value("posts.edit|users.edit");
//! assert!(dispatcher.mount(&edit).unwrap().is_unchanged());
//!
//! // <button v-can.disabled="'users.delete'">
//! let delete = Binding::new(BindingKind::Can)
//!     .with_value("users.delete")
//!     .with_modifier("disabled", true);
//! let decision = dispatcher.mount(&delete).unwrap();
//! assert!(decision.keep);
//! assert!(decision.attribute_overrides.contains_key("disabled"));
//! ```

pub mod binding;
pub mod condition;
pub mod decision;
pub mod dispatcher;

// Re-export main types for convenience
pub use binding::{Binding, BindingKind};
pub use condition::{condition_name, Condition};
pub use decision::MountDecision;
pub use dispatcher::Dispatcher;
