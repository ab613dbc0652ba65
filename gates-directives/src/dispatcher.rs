//! # Dispatcher
//!
//! Evaluates bindings against a [`Query`] implementor and decides how each
//! element is mounted.
//!
//! ```text
//! Binding ──► Condition::resolve ──► Condition::evaluate(query) ──► MountDecision
//!    │
//!    └── no value: logged, element left as is
//! ```

use gates_rbac::{GateError, GateResult, Query};

use crate::binding::Binding;
use crate::condition::Condition;
use crate::decision::MountDecision;

/// Binding evaluator over a borrowed query surface.
///
/// # Example
///
/// ```
/// use gates_directives::{Binding, BindingKind, Dispatcher};
/// use gates_rbac::{Gates, GatesConfig};
///
/// let mut gates = Gates::new(GatesConfig::default());
/// gates.set_roles(["editor"]);
///
/// let dispatcher = Dispatcher::new(&gates);
/// let decision = dispatcher
///     .mount(&Binding::new(BindingKind::Role).with_value("admin"))
///     .unwrap();
/// assert!(decision.is_removal());
/// ```
#[derive(Debug)]
pub struct Dispatcher<'a, Q: Query + ?Sized> {
    query: &'a Q,
}

impl<'a, Q: Query + ?Sized> Dispatcher<'a, Q> {
    /// Create a dispatcher reading from `query`.
    pub fn new(query: &'a Q) -> Self {
        Self { query }
    }

    /// Evaluate a binding's condition.
    ///
    /// # Errors
    ///
    /// - [`GateError::MissingValue`] if the binding has no value
    /// - [`GateError::Configuration`] if the argument does not name a query
    pub fn check(&self, binding: &Binding) -> GateResult<bool> {
        let value = binding.value().ok_or_else(|| GateError::MissingValue {
            binding: binding.kind.to_string(),
        })?;
        let condition = Condition::resolve(binding.kind, binding.argument.as_deref())?;

        Ok(condition.evaluate(self.query, value))
    }

    /// Decide how the element carrying `binding` is mounted.
    ///
    /// A missing value is logged and leaves the element unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::Configuration`] if the argument does not name a
    /// query. This points at a typo in the view and is not recovered.
    pub fn mount(&self, binding: &Binding) -> GateResult<MountDecision> {
        match self.check(binding) {
            Ok(is_valid) => {
                let decision = MountDecision::from_check(is_valid, &binding.modifiers);
                tracing::debug!(
                    binding = %binding.kind,
                    argument = binding.argument.as_deref().unwrap_or("has"),
                    keep = decision.keep,
                    overrides = decision.attribute_overrides.len(),
                    "Binding evaluated"
                );
                Ok(decision)
            }
            Err(e @ GateError::MissingValue { .. }) => {
                tracing::error!(
                    binding = %binding.kind,
                    error = %e,
                    "You must specify a value in the binding"
                );
                Ok(MountDecision::unchanged())
            }
            Err(e) => {
                tracing::error!(binding = %binding.kind, error = %e, "Binding cannot be evaluated");
                Err(e)
            }
        }
    }
}
