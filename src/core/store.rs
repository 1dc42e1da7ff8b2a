//! # Local Store
//!
//! Save/load the signed-in session and the registered-account list under
//! `~/.vlrent/`. This replicates the original page's key-value contract:
//! one record for the current user (`session.json`) and one list of account
//! records (`accounts.json`, each carrying credentials plus an embedded
//! profile).
//!
//! Malformed data is treated as absent, never fatal: a corrupt session file is
//! deleted and the user is simply signed out; a corrupt account list reads as
//! empty. All writes use atomic rename (write `.tmp`, then `rename()`).

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Signed-in user profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// One registered account: credentials plus the embedded profile.
///
/// The password is stored in plain text because that is the storage contract
/// being replicated; this store only ever simulates authentication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRecord {
    pub username: String,
    pub email: String,
    pub password: String,
    pub profile: User,
}

/// Returns `~/.vlrent/`, creating it if needed.
pub fn data_dir() -> io::Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no home directory"))?;
    let dir = home.join(".vlrent");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

fn session_path() -> io::Result<PathBuf> {
    Ok(data_dir()?.join("session.json"))
}

fn accounts_path() -> io::Result<PathBuf> {
    Ok(data_dir()?.join("accounts.json"))
}

/// Atomically write `data` as JSON to `path` (via `.tmp` + rename).
fn atomic_write_json<T: Serialize>(path: &Path, data: &T) -> io::Result<()> {
    let tmp_path = path.with_extension("tmp");
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(&tmp_path, json)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}

/// Load the current session, if one exists and parses.
/// A corrupt session file is cleared rather than surfaced.
pub fn load_session() -> Option<User> {
    let path = session_path().ok()?;
    if !path.exists() {
        return None;
    }
    let json = fs::read_to_string(&path).ok()?;
    match serde_json::from_str(&json) {
        Ok(user) => Some(user),
        Err(e) => {
            warn!("Corrupt session file, clearing: {}", e);
            let _ = fs::remove_file(&path);
            None
        }
    }
}

pub fn save_session(user: &User) -> io::Result<()> {
    let path = session_path()?;
    atomic_write_json(&path, user)?;
    debug!("Session saved for {}", user.username);
    Ok(())
}

pub fn clear_session() -> io::Result<()> {
    let path = session_path()?;
    if path.exists() {
        fs::remove_file(path)?;
    }
    Ok(())
}

/// Load all registered accounts. Missing or malformed file reads as empty.
pub fn load_accounts() -> Vec<AccountRecord> {
    let path = match accounts_path() {
        Ok(p) => p,
        Err(e) => {
            warn!("Cannot resolve accounts path: {}", e);
            return Vec::new();
        }
    };
    if !path.exists() {
        return Vec::new();
    }
    let json = match fs::read_to_string(&path) {
        Ok(s) => s,
        Err(e) => {
            warn!("Failed to read accounts file: {}", e);
            return Vec::new();
        }
    };
    match serde_json::from_str(&json) {
        Ok(accounts) => accounts,
        Err(e) => {
            warn!("Corrupt accounts file, treating as empty: {}", e);
            Vec::new()
        }
    }
}

pub fn save_accounts(accounts: &[AccountRecord]) -> io::Result<()> {
    let path = accounts_path()?;
    atomic_write_json(&path, &accounts)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user() -> User {
        User {
            first_name: "Kasun".to_string(),
            last_name: "Perera".to_string(),
            username: "kasun".to_string(),
            email: Some("kasun@example.com".to_string()),
        }
    }

    #[test]
    fn test_user_json_round_trip() {
        let user = test_user();
        let json = serde_json::to_string(&user).unwrap();
        let back: User = serde_json::from_str(&json).unwrap();
        assert_eq!(back, user);
    }

    #[test]
    fn test_user_email_is_optional() {
        let json = r#"{"first_name":"A","last_name":"B","username":"ab"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert!(user.email.is_none());

        // And omitted on output when absent
        let out = serde_json::to_string(&user).unwrap();
        assert!(!out.contains("email"));
    }

    #[test]
    fn test_account_record_embeds_profile() {
        let record = AccountRecord {
            username: "kasun".to_string(),
            email: "kasun@example.com".to_string(),
            password: "hunter2".to_string(),
            profile: test_user(),
        };
        let json = serde_json::to_string(&record).unwrap();
        let back: AccountRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back.profile.first_name, "Kasun");
        assert_eq!(back.password, "hunter2");
    }

    #[test]
    fn test_malformed_accounts_json_reads_as_empty() {
        let parsed: Result<Vec<AccountRecord>, _> = serde_json::from_str("{not json");
        assert!(parsed.is_err()); // load_accounts maps this case to vec![]
    }
}
