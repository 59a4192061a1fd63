//! Immutable user store seeded at process start.

use crate::domain::user::{Group, User};

/// The authoritative in-memory list of users for the process lifetime.
///
/// Populated exactly once at construction and read-only thereafter, so it
/// can be shared across request handlers without synchronisation.
///
/// ## Invariants
/// - Insertion order is preserved and observable through [`Roster::all`].
/// - No mutation API exists; the set of users never changes.
#[derive(Debug, Clone)]
pub struct Roster {
    users: Vec<User>,
}

impl Roster {
    /// Construct the roster from the fixed seed list.
    #[must_use]
    pub fn seed() -> Self {
        Self {
            users: vec![
                User::from_name("Jim", Group::Caprica),
                User::from_name("Sam", Group::Caprica),
                User::from_name("Ben", Group::Gemini),
                User::from_name("Mel", Group::Caprica),
                User::from_name("Rey", Group::Gemini),
                User::from_name("Caz", Group::Gemini),
            ],
        }
    }

    /// Construct a roster from an explicit user list.
    ///
    /// Test seams use this to exercise tie-break behaviour the production
    /// seed cannot reach (duplicate names).
    #[must_use]
    pub fn from_users(users: Vec<User>) -> Self {
        Self { users }
    }

    /// Full ordered sequence of users, insertion order preserved.
    #[must_use]
    pub fn all(&self) -> &[User] {
        self.users.as_slice()
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::seed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_contains_six_users_in_insertion_order() {
        let roster = Roster::seed();
        let names: Vec<&str> = roster.all().iter().map(|u| u.name().as_ref()).collect();
        assert_eq!(names, ["Jim", "Sam", "Ben", "Mel", "Rey", "Caz"]);
    }

    #[test]
    fn seed_group_assignments_match_the_fixture() {
        let roster = Roster::seed();
        let groups: Vec<Group> = roster.all().iter().map(User::group).collect();
        assert_eq!(
            groups,
            [
                Group::Caprica,
                Group::Caprica,
                Group::Gemini,
                Group::Caprica,
                Group::Gemini,
                Group::Gemini,
            ]
        );
    }
}
