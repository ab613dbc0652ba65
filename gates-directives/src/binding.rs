//! # Bindings
//!
//! A binding ties a view element to a role or permission condition. The
//! host view layer builds one per element when it mounts.
//!
//! ```text
//! kind                  argument                  value
//! role                  (none) | has | unless     "editor"
//! permission | can      any | all                 "posts.create|posts.edit"
//! role-or-permission    (ignored)                 "editor|posts.edit"
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use gates_rbac::GateError;
use serde::{Deserialize, Serialize};

/// The registered binding names.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum BindingKind {
    /// Checks roles
    Role,
    /// Checks permissions
    Permission,
    /// Alias for [`BindingKind::Permission`]
    Can,
    /// Passes if the role or the permission is held
    RoleOrPermission,
}

impl BindingKind {
    /// Every binding kind, in registration order.
    pub const ALL: [BindingKind; 4] = [
        BindingKind::Role,
        BindingKind::Permission,
        BindingKind::Can,
        BindingKind::RoleOrPermission,
    ];

    /// Get the view-layer name of the binding.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Role => "role",
            Self::Permission => "permission",
            Self::Can => "can",
            Self::RoleOrPermission => "role-or-permission",
        }
    }

    /// Parse a binding from its view-layer name.
    ///
    /// # Examples
    ///
    /// ```
    /// use gates_directives::BindingKind;
    ///
    /// assert_eq!(BindingKind::parse("can"), Some(BindingKind::Can));
    /// assert_eq!(BindingKind::parse("roles"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == s)
    }
}

impl fmt::Display for BindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BindingKind {
    type Err = GateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| GateError::UnknownBinding(s.to_string()))
    }
}

/// A declarative condition attached to a view element.
///
/// # Example
///
/// ```
/// use gates_directives::{Binding, BindingKind};
///
/// let binding = Binding::new(BindingKind::Can)
///     .with_argument("any")
///     .with_value("posts.edit|posts.delete")
///     .with_modifier("disabled", true);
///
/// assert_eq!(binding.argument.as_deref(), Some("any"));
/// assert!(binding.modifiers.contains_key("disabled"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Binding {
    /// Which binding this is.
    pub kind: BindingKind,

    /// Optional argument: `has`, `unless`, `any` or `all`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub argument: Option<String>,

    /// A single name, or a `|`-separated list for compound forms.
    #[serde(default)]
    pub value: Option<String>,

    /// Attribute overrides applied instead of removal when the check fails.
    #[serde(default)]
    pub modifiers: BTreeMap<String, serde_json::Value>,
}

impl Binding {
    /// Create a binding with no argument, value, or modifiers.
    pub fn new(kind: BindingKind) -> Self {
        Self {
            kind,
            argument: None,
            value: None,
            modifiers: BTreeMap::new(),
        }
    }

    /// Set the argument.
    pub fn with_argument(mut self, argument: impl Into<String>) -> Self {
        self.argument = Some(argument.into());
        self
    }

    /// Set the value.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Add an attribute override.
    pub fn with_modifier(
        mut self,
        attribute: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.modifiers.insert(attribute.into(), value.into());
        self
    }

    /// The value, if present and non-empty.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref().filter(|v| !v.is_empty())
    }
}
