//! # Conditions
//!
//! Resolves a binding's kind and argument to the query it runs.
//!
//! The query name follows a fixed convention:
//!
//! ```text
//! prefix  = "has"                      (no argument, or "has")
//!         | "unless"                   (argument "unless")
//!         | "has" + Title(argument)    (anything else, e.g. "any" -> "hasAny")
//! suffix  = "permission" for "can", otherwise the kind
//! suffix += "s" when prefix is "hasAll"
//! name    = prefix + Title(suffix)
//! ```
//!
//! Only the names in the lookup table below are valid. Anything else the
//! convention produces is a configuration error in the consuming view.

use gates_rbac::query::split_values;
use gates_rbac::{GateError, GateResult, Query};

use crate::binding::BindingKind;

/// What a condition checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Subject {
    Role,
    Permission,
}

/// How a condition combines its values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Modifier {
    Has,
    Unless,
    Any,
    All,
}

impl Modifier {
    fn from_prefix(prefix: &str) -> Option<Self> {
        match prefix {
            "has" => Some(Self::Has),
            "unless" => Some(Self::Unless),
            "hasAny" => Some(Self::Any),
            "hasAll" => Some(Self::All),
            _ => None,
        }
    }
}

/// A resolved query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    HasRole,
    UnlessRole,
    HasAnyRole,
    HasAllRoles,
    HasPermission,
    UnlessPermission,
    HasAnyPermission,
    HasAllPermissions,
    /// `role|permission`, passes if either is held
    RoleOrPermission,
}

const CONDITIONS: [(Subject, Modifier, Condition); 8] = [
    (Subject::Role, Modifier::Has, Condition::HasRole),
    (Subject::Role, Modifier::Unless, Condition::UnlessRole),
    (Subject::Role, Modifier::Any, Condition::HasAnyRole),
    (Subject::Role, Modifier::All, Condition::HasAllRoles),
    (Subject::Permission, Modifier::Has, Condition::HasPermission),
    (Subject::Permission, Modifier::Unless, Condition::UnlessPermission),
    (Subject::Permission, Modifier::Any, Condition::HasAnyPermission),
    (Subject::Permission, Modifier::All, Condition::HasAllPermissions),
];

impl Condition {
    /// Resolve the condition for a binding.
    ///
    /// `role-or-permission` ignores its argument.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::Configuration`] naming the query the convention
    /// produced when it is not a known query.
    ///
    /// # Examples
    ///
    /// ```
    /// use gates_directives::{BindingKind, Condition};
    ///
    /// let condition = Condition::resolve(BindingKind::Can, Some("unless")).unwrap();
    /// assert_eq!(condition, Condition::UnlessPermission);
    ///
    /// assert!(Condition::resolve(BindingKind::Role, Some("some")).is_err());
    /// ```
    pub fn resolve(kind: BindingKind, argument: Option<&str>) -> GateResult<Self> {
        let subject = match kind {
            BindingKind::Role => Subject::Role,
            BindingKind::Permission | BindingKind::Can => Subject::Permission,
            BindingKind::RoleOrPermission => return Ok(Self::RoleOrPermission),
        };

        Modifier::from_prefix(&prefix(argument))
            .and_then(|modifier| {
                CONDITIONS
                    .iter()
                    .find(|(s, m, _)| *s == subject && *m == modifier)
                    .map(|(_, _, condition)| *condition)
            })
            .ok_or_else(|| {
                GateError::Configuration(format!(
                    "binding '{}' resolves to unknown condition '{}'",
                    kind,
                    condition_name(kind, argument)
                ))
            })
    }

    /// Get the query name, e.g. `hasAnyRole`.
    pub fn method_name(&self) -> &'static str {
        match self {
            Self::HasRole => "hasRole",
            Self::UnlessRole => "unlessRole",
            Self::HasAnyRole => "hasAnyRole",
            Self::HasAllRoles => "hasAllRoles",
            Self::HasPermission => "hasPermission",
            Self::UnlessPermission => "unlessPermission",
            Self::HasAnyPermission => "hasAnyPermission",
            Self::HasAllPermissions => "hasAllPermissions",
            Self::RoleOrPermission => "hasRoleOrPermission",
        }
    }

    /// Run the condition against `query` with the binding's value.
    pub fn evaluate<Q: Query + ?Sized>(&self, query: &Q, value: &str) -> bool {
        match self {
            Self::HasRole => query.has_role(value),
            Self::UnlessRole => query.unless_role(value),
            Self::HasAnyRole => query.has_any_role(value),
            Self::HasAllRoles => query.has_all_roles(value),
            Self::HasPermission => query.has_permission(value),
            Self::UnlessPermission => query.unless_permission(value),
            Self::HasAnyPermission => query.has_any_permission(value),
            Self::HasAllPermissions => query.has_all_permissions(value),
            Self::RoleOrPermission => {
                // Extra entries after the permission are ignored.
                let mut parts = split_values(value);
                let role = parts.next().unwrap_or_default();
                let permission = parts.next().unwrap_or_default();
                query.has_role_or_permission(role, permission)
            }
        }
    }
}

/// Build the query name a binding asks for, whether or not it exists.
///
/// # Examples
///
/// ```
/// use gates_directives::{condition_name, BindingKind};
///
/// assert_eq!(condition_name(BindingKind::Role, Some("any")), "hasAnyRole");
/// assert_eq!(condition_name(BindingKind::Permission, Some("all")), "hasAllPermissions");
/// assert_eq!(condition_name(BindingKind::Role, Some("some")), "hasSomeRole");
/// ```
pub fn condition_name(kind: BindingKind, argument: Option<&str>) -> String {
    let mut suffix = match kind {
        BindingKind::Can => "permission",
        BindingKind::RoleOrPermission => {
            return Condition::RoleOrPermission.method_name().to_string();
        }
        other => other.as_str(),
    }
    .to_string();

    let prefix = prefix(argument);
    if prefix == "hasAll" {
        suffix.push('s');
    }

    format!("{}{}", prefix, title_case(&suffix))
}

fn prefix(argument: Option<&str>) -> String {
    match argument {
        None | Some("has") => "has".to_string(),
        Some("unless") => "unless".to_string(),
        Some(other) => format!("has{}", title_case(other)),
    }
}

fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
