// Known storefront accounts
//
// The demo storefront ships a fixed set of accounts, each wired to a
// different behavior. All of them share one password.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Password accepted for every known user.
pub const VALID_PASSWORD: &str = "secret_sauce";

/// One of the predefined login identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnownUser {
    /// Logs in normally
    Standard,
    /// Rejected at login with a locked-out message
    LockedOut,
    /// Logs in, but the inventory renders with broken images and actions
    Problem,
    /// Logs in after an artificial delay
    PerformanceGlitch,
}

impl KnownUser {
    /// Every known user, in the order the login page lists them.
    pub const ALL: [KnownUser; 4] = [
        KnownUser::Standard,
        KnownUser::LockedOut,
        KnownUser::Problem,
        KnownUser::PerformanceGlitch,
    ];

    /// Login identifier typed into the username field
    pub fn username(&self) -> &'static str {
        match self {
            KnownUser::Standard => "standard_user",
            KnownUser::LockedOut => "locked_out_user",
            KnownUser::Problem => "problem_user",
            KnownUser::PerformanceGlitch => "performance_glitch_user",
        }
    }

    /// Whether a login with the valid password reaches the inventory page.
    pub fn can_log_in(&self) -> bool {
        !matches!(self, KnownUser::LockedOut)
    }

    pub fn usernames() -> Vec<&'static str> {
        Self::ALL.iter().map(KnownUser::username).collect()
    }
}

impl fmt::Display for KnownUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.username())
    }
}

impl FromStr for KnownUser {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|user| user.username() == s)
            .ok_or_else(|| Error::UnknownUser {
                user: s.to_string(),
                known: Self::usernames(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_every_known_user() {
        for user in KnownUser::ALL {
            assert_eq!(user.username().parse::<KnownUser>().unwrap(), user);
        }
    }

    #[test]
    fn test_parse_unknown_user_fails() {
        let err = "visual_user".parse::<KnownUser>().unwrap_err();
        match err {
            Error::UnknownUser { user, known } => {
                assert_eq!(user, "visual_user");
                assert_eq!(known.len(), 4);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_only_locked_out_user_is_rejected() {
        let rejected: Vec<_> = KnownUser::ALL
            .into_iter()
            .filter(|user| !user.can_log_in())
            .collect();
        assert_eq!(rejected, vec![KnownUser::LockedOut]);
    }

    #[test]
    fn test_display_matches_username() {
        assert_eq!(KnownUser::PerformanceGlitch.to_string(), "performance_glitch_user");
    }
}
