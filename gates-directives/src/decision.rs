//! Mount decisions.
//!
//! The outcome of evaluating a binding, applied by the host view layer.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// What the view layer should do with an element.
///
/// | `keep` | `attribute_overrides` | Effect                          |
/// |--------|-----------------------|---------------------------------|
/// | true   | empty                 | leave the element as is         |
/// | false  | empty                 | detach the element              |
/// | true   | non-empty             | keep it, apply the overrides    |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MountDecision {
    /// Whether the element stays in the view tree.
    pub keep: bool,

    /// Attribute or property overrides to apply to the kept element.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attribute_overrides: BTreeMap<String, serde_json::Value>,
}

impl MountDecision {
    /// Leave the element untouched.
    pub fn unchanged() -> Self {
        Self {
            keep: true,
            attribute_overrides: BTreeMap::new(),
        }
    }

    /// Detach the element.
    pub fn remove() -> Self {
        Self {
            keep: false,
            attribute_overrides: BTreeMap::new(),
        }
    }

    /// Decide from a check result.
    ///
    /// A failed check removes the element, unless modifiers are given, in
    /// which case the element is kept and the modifiers are applied to it.
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use gates_directives::MountDecision;
    ///
    /// let mut modifiers = BTreeMap::new();
    /// modifiers.insert("disabled".to_string(), serde_json::Value::Bool(true));
    ///
    /// let decision = MountDecision::from_check(false, &modifiers);
    /// assert!(decision.keep);
    /// assert_eq!(decision.attribute_overrides, modifiers);
    /// ```
    pub fn from_check(is_valid: bool, modifiers: &BTreeMap<String, serde_json::Value>) -> Self {
        if is_valid {
            Self::unchanged()
        } else if modifiers.is_empty() {
            Self::remove()
        } else {
            Self {
                keep: true,
                attribute_overrides: modifiers.clone(),
            }
        }
    }

    /// Check if the element is left exactly as it was.
    pub fn is_unchanged(&self) -> bool {
        self.keep && self.attribute_overrides.is_empty()
    }

    /// Check if the element is detached.
    pub fn is_removal(&self) -> bool {
        !self.keep
    }
}
