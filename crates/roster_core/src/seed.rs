//! Seed rosters injected at store construction: the built-in demo trio and
//! an optional JSON seed file supplied on the command line.

use std::{fs, path::Path};

use shared::domain::MemberDraft;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file: {0}")]
    Io(#[from] std::io::Error),
    #[error("seed file is not a valid member list: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The roster the app starts with when no seed flags are given.
pub fn demo_roster() -> Vec<MemberDraft> {
    [
        ("Amy", "amy@email.com", "UI-UX Designer"),
        ("Bob", "bob@email.com", "Marketer"),
        ("Chris", "chris@email.com", "Front-End Developer"),
    ]
    .into_iter()
    .map(|(name, email, role)| MemberDraft {
        name: name.to_string(),
        email: email.to_string(),
        role: role.to_string(),
    })
    .collect()
}

/// Loads a JSON array of `{name, email, role}` records, in file order.
///
/// Read once at startup; the roster itself is never written back anywhere.
pub fn load_seed_file(path: &Path) -> Result<Vec<MemberDraft>, SeedError> {
    let raw = fs::read_to_string(path)?;
    let drafts: Vec<MemberDraft> = serde_json::from_str(&raw)?;
    info!(
        path = %path.display(),
        count = drafts.len(),
        "loaded roster seed file"
    );
    Ok(drafts)
}

#[cfg(test)]
#[path = "tests/seed_tests.rs"]
mod tests;
