//! Login and admin gate.
//!
//! The admin passcode is a fixed shared secret compared in plain text. It
//! keeps students out of the admin screens by convention and is not a
//! security boundary: anyone with the binary or the store can bypass it.

use crate::state::AppState;
use vocab_core::{KeyValueStore, USERNAME_KEY};

use super::CommandError;

/// Shared admin passcode.
pub const ADMIN_PASSCODE: &str = "vocabadmin";

pub fn verify_admin(passcode: &str) -> bool {
    passcode == ADMIN_PASSCODE
}

pub fn require_admin(passcode: &str) -> Result<(), CommandError> {
    if verify_admin(passcode) {
        Ok(())
    } else {
        tracing::warn!("rejected admin passcode");
        Err(CommandError::new("incorrect admin passcode"))
    }
}

/// Remember `username` as the active user.
pub fn login(state: &AppState, username: &str) -> Result<String, CommandError> {
    let username = username.trim();
    if username.is_empty() {
        return Err(CommandError::new("please enter a username"));
    }
    state.store.set(USERNAME_KEY, username)?;
    tracing::info!(user = username, "logged in");
    Ok(username.to_string())
}

/// The last username entered, if any.
pub fn last_username(state: &AppState) -> Option<String> {
    match state.store.get(USERNAME_KEY) {
        Ok(name) => name.filter(|n| !n.trim().is_empty()),
        Err(e) => {
            tracing::warn!(error = %e, "failed to read username");
            None
        }
    }
}

/// Log in with `explicit` if given, otherwise reuse the remembered user.
pub fn resolve_username(state: &AppState, explicit: Option<&str>) -> Result<String, CommandError> {
    match explicit {
        Some(name) => login(state, name),
        None => last_username(state)
            .ok_or_else(|| CommandError::new("no user logged in, pass --user NAME")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::test_state;

    #[test]
    fn admin_gate_is_plain_comparison() {
        assert!(verify_admin(ADMIN_PASSCODE));
        assert!(!verify_admin("guess"));
        assert!(require_admin("").is_err());
    }

    #[test]
    fn login_trims_and_remembers() {
        let state = test_state();
        assert_eq!(login(&state, "  ada ").unwrap(), "ada");
        assert_eq!(last_username(&state).as_deref(), Some("ada"));
    }

    #[test]
    fn login_rejects_blank_names() {
        let state = test_state();
        assert!(login(&state, "   ").is_err());
        assert!(last_username(&state).is_none());
    }

    #[test]
    fn resolve_prefers_explicit_then_remembered() {
        let state = test_state();
        assert!(resolve_username(&state, None).is_err());
        assert_eq!(resolve_username(&state, Some("ada")).unwrap(), "ada");
        assert_eq!(resolve_username(&state, None).unwrap(), "ada");
    }
}
