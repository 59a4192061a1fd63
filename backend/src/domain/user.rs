//! Roster user data model.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Validation errors returned by the fallible constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    /// Name was empty or contained only whitespace.
    #[error("user name must not be empty")]
    EmptyName,
    /// Name carried leading or trailing whitespace.
    #[error("user name must not have surrounding whitespace")]
    UntrimmedName,
}

/// Closed enumeration of user groupings.
///
/// Serialised with the variant name verbatim (`"Gemini"`, `"Caprica"`), so
/// the wire format stays stable if variants are ever reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Group {
    /// Gemini contingent; the only group visible through the v1 routes.
    Gemini,
    /// Caprica contingent.
    Caprica,
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gemini => f.write_str("Gemini"),
            Self::Caprica => f.write_str("Caprica"),
        }
    }
}

/// User name with case-insensitive lookup identity.
///
/// ## Invariants
/// - Non-empty once trimmed of whitespace.
/// - Stored verbatim; case is preserved for display and serialisation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserName(String);

impl UserName {
    /// Validate and construct a [`UserName`] from owned input.
    pub fn new(name: impl Into<String>) -> Result<Self, UserValidationError> {
        Self::from_owned(name.into())
    }

    fn from_owned(name: String) -> Result<Self, UserValidationError> {
        if name.trim().is_empty() {
            return Err(UserValidationError::EmptyName);
        }
        if name.trim() != name {
            return Err(UserValidationError::UntrimmedName);
        }
        Ok(Self(name))
    }

    /// Case-insensitive equality against arbitrary input.
    ///
    /// Uses locale-invariant Unicode lowercase normalisation so the result
    /// does not depend on the process locale.
    #[must_use]
    pub fn matches(&self, candidate: &str) -> bool {
        self.0.to_lowercase() == candidate.to_lowercase()
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<UserName> for String {
    fn from(value: UserName) -> Self {
        value.0
    }
}

impl TryFrom<String> for UserName {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Roster user.
///
/// Immutable value object; the roster never creates, mutates, or destroys
/// users after process start.
///
/// ## Invariants
/// - `name` must be non-empty once trimmed of whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct User {
    #[schema(value_type = String, example = "Ben")]
    name: UserName,
    #[schema(example = "Gemini")]
    group: Group,
}

impl User {
    /// Build a new [`User`] from validated components.
    #[must_use]
    pub const fn new(name: UserName, group: Group) -> Self {
        Self { name, group }
    }

    /// Build a new [`User`] from a string name, panicking if validation fails.
    ///
    /// Prefer [`User::new`] when components are already validated; this is
    /// intended for seed data built from literals.
    #[must_use]
    pub fn from_name(name: impl Into<String>, group: Group) -> Self {
        match Self::try_from_name(name, group) {
            Ok(value) => value,
            Err(err) => panic!("user name literals must satisfy validation: {err}"),
        }
    }

    /// Fallible constructor enforcing the name invariant.
    pub fn try_from_name(
        name: impl Into<String>,
        group: Group,
    ) -> Result<Self, UserValidationError> {
        Ok(Self::new(UserName::new(name)?, group))
    }

    /// User name; lookup identity is case-insensitive.
    #[must_use]
    pub const fn name(&self) -> &UserName {
        &self.name
    }

    /// Group the user belongs to.
    #[must_use]
    pub const fn group(&self) -> Group {
        self.group
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", UserValidationError::EmptyName)]
    #[case("   ", UserValidationError::EmptyName)]
    #[case(" Ben", UserValidationError::UntrimmedName)]
    #[case("Ben ", UserValidationError::UntrimmedName)]
    fn user_name_rejects_invalid_input(#[case] input: &str, #[case] expected: UserValidationError) {
        assert_eq!(UserName::new(input), Err(expected));
    }

    #[rstest]
    #[case("Ben", "ben")]
    #[case("Ben", "BEN")]
    #[case("Ben", "bEn")]
    fn user_name_matches_ignores_case(#[case] stored: &str, #[case] candidate: &str) {
        let name = UserName::new(stored).expect("valid name");
        assert!(name.matches(candidate));
    }

    #[test]
    fn user_name_matches_rejects_different_name() {
        let name = UserName::new("Ben").expect("valid name");
        assert!(!name.matches("Rey"));
    }

    #[test]
    fn user_serialises_with_verbatim_group_variant() {
        let user = User::from_name("Ben", Group::Gemini);
        let value = serde_json::to_value(&user).expect("serialise user");
        assert_eq!(
            value,
            serde_json::json!({ "name": "Ben", "group": "Gemini" })
        );
    }

    #[test]
    fn user_round_trips_through_json() {
        let user = User::from_name("Caz", Group::Caprica);
        let json = serde_json::to_string(&user).expect("serialise user");
        let parsed: User = serde_json::from_str(&json).expect("deserialise user");
        assert_eq!(parsed, user);
    }

    #[test]
    fn user_deserialisation_rejects_empty_name() {
        let result = serde_json::from_str::<User>(r#"{"name":"","group":"Gemini"}"#);
        assert!(result.is_err());
    }
}
