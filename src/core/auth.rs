//! # Simulated Accounts
//!
//! Credential checks and registration against the local account store. The
//! "server" is the JSON file in [`crate::core::store`]; the latency the user
//! sees is simulated by the spawning side (see `tui::run`'s spawn helpers).
//!
//! Username availability uses an explicit request-generation counter: every
//! edit bumps the generation, each spawned check carries the generation it was
//! issued for, and only a result matching the current generation may update
//! the visible status (last write wins, stale checks are discarded).

use crate::core::store::{AccountRecord, User};

/// Visible state of the debounced username-availability check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UsernameStatus {
    #[default]
    Idle,
    Checking,
    Available,
    Taken,
}

/// Details collected by the sign-up form, handed to the registration task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignUpDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub id_number: String,
    pub address: String,
    pub username: String,
    pub password: String,
    pub confirm_password: String,
    pub agree_terms: bool,
}

/// Find the account matching `identifier` (username or email, case
/// insensitive) with the given password.
pub fn check_credentials(
    accounts: &[AccountRecord],
    identifier: &str,
    password: &str,
) -> Option<User> {
    let needle = identifier.trim().to_lowercase();
    accounts
        .iter()
        .find(|a| {
            (a.username.to_lowercase() == needle || a.email.to_lowercase() == needle)
                && a.password == password
        })
        .map(|a| a.profile.clone())
}

/// Case-insensitive username lookup.
pub fn is_username_taken(accounts: &[AccountRecord], username: &str) -> bool {
    let needle = username.to_lowercase();
    accounts.iter().any(|a| a.username.to_lowercase() == needle)
}

/// Case-insensitive email lookup (the duplicate check repeated at submit
/// time, after the debounced username check already passed).
pub fn is_email_registered(accounts: &[AccountRecord], email: &str) -> bool {
    let needle = email.to_lowercase();
    accounts.iter().any(|a| a.email.to_lowercase() == needle)
}

/// Build the account record and profile for a validated sign-up draft.
pub fn new_account(draft: &SignUpDraft) -> AccountRecord {
    let profile = User {
        first_name: draft.first_name.clone(),
        last_name: draft.last_name.clone(),
        username: draft.username.clone(),
        email: Some(draft.email.clone()),
    };
    AccountRecord {
        username: draft.username.clone(),
        email: draft.email.clone(),
        password: draft.password.clone(),
        profile,
    }
}

/// Sign-up form validation: field name → message, in form order.
/// The username-taken rule consults the availability status the form already
/// holds, mirroring the submit-time check.
pub fn validate_sign_up(draft: &SignUpDraft, username_taken: bool) -> Vec<(&'static str, String)> {
    let mut errors: Vec<(&'static str, String)> = Vec::new();
    let required = |value: &str| value.trim().is_empty();

    if required(&draft.first_name) {
        errors.push(("first_name", "Required".to_string()));
    }
    if required(&draft.last_name) {
        errors.push(("last_name", "Required".to_string()));
    }
    if required(&draft.email) {
        errors.push(("email", "Required".to_string()));
    }
    if required(&draft.phone) {
        errors.push(("phone", "Required".to_string()));
    }
    if required(&draft.id_number) {
        errors.push(("id_number", "Required".to_string()));
    }
    if required(&draft.address) {
        errors.push(("address", "Required".to_string()));
    }
    if required(&draft.username) {
        errors.push(("username", "Required".to_string()));
    } else if username_taken {
        errors.push(("username", "Username is already taken".to_string()));
    }
    if draft.password.is_empty() {
        errors.push(("password", "Required".to_string()));
    }
    if draft.password != draft.confirm_password {
        errors.push(("confirm_password", "Passwords do not match".to_string()));
    }
    if !draft.agree_terms {
        errors.push(("agree_terms", "You must agree to the terms".to_string()));
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accounts() -> Vec<AccountRecord> {
        vec![AccountRecord {
            username: "Kasun".to_string(),
            email: "kasun@example.com".to_string(),
            password: "secret".to_string(),
            profile: User {
                first_name: "Kasun".to_string(),
                last_name: "Perera".to_string(),
                username: "Kasun".to_string(),
                email: Some("kasun@example.com".to_string()),
            },
        }]
    }

    #[test]
    fn test_check_credentials_by_username_or_email() {
        let db = accounts();
        assert!(check_credentials(&db, "kasun", "secret").is_some());
        assert!(check_credentials(&db, "KASUN@example.com", "secret").is_some());
        assert!(check_credentials(&db, " kasun ", "secret").is_some());
        assert!(check_credentials(&db, "kasun", "wrong").is_none());
        assert!(check_credentials(&db, "nobody", "secret").is_none());
    }

    #[test]
    fn test_username_taken_is_case_insensitive() {
        let db = accounts();
        assert!(is_username_taken(&db, "kasun"));
        assert!(is_username_taken(&db, "KASUN"));
        assert!(!is_username_taken(&db, "amara"));
    }

    #[test]
    fn test_email_registered() {
        let db = accounts();
        assert!(is_email_registered(&db, "Kasun@Example.com"));
        assert!(!is_email_registered(&db, "other@example.com"));
    }

    fn valid_draft() -> SignUpDraft {
        SignUpDraft {
            first_name: "Amara".to_string(),
            last_name: "Silva".to_string(),
            email: "amara@example.com".to_string(),
            phone: "0771234567".to_string(),
            id_number: "981234567V".to_string(),
            address: "12 Galle Rd, Colombo".to_string(),
            username: "amara".to_string(),
            password: "pw".to_string(),
            confirm_password: "pw".to_string(),
            agree_terms: true,
        }
    }

    #[test]
    fn test_validate_sign_up_accepts_complete_draft() {
        assert!(validate_sign_up(&valid_draft(), false).is_empty());
    }

    #[test]
    fn test_validate_sign_up_flags_taken_username() {
        let errors = validate_sign_up(&valid_draft(), true);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].0, "username");
        assert_eq!(errors[0].1, "Username is already taken");
    }

    #[test]
    fn test_validate_sign_up_password_mismatch() {
        let mut draft = valid_draft();
        draft.confirm_password = "other".to_string();
        let errors = validate_sign_up(&draft, false);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].0, "confirm_password");
    }

    #[test]
    fn test_new_account_embeds_profile() {
        let record = new_account(&valid_draft());
        assert_eq!(record.username, "amara");
        assert_eq!(record.profile.email.as_deref(), Some("amara@example.com"));
    }
}
