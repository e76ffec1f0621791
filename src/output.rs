//! Output boundary: persist confirmed winners to disk.
//!
//! The pipeline's result is written as a JSON array of
//! `{"winner_name": ..., "context_clue": ...}` objects to
//! `<output_dir>/past_winners_<sanitized award name>.json`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::types::winner::WinnerCandidate;

/// Reduce an award name to a filename-safe token.
///
/// Keeps alphanumerics, spaces, and underscores; trims trailing whitespace;
/// then turns spaces into underscores.
pub fn sanitize_award_name(award_name: &str) -> String {
    let kept: String = award_name
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == ' ' || *c == '_')
        .collect();
    kept.trim_end().replace(' ', "_")
}

/// Write winners to `<output_dir>/past_winners_<award>.json`, creating the
/// directory if needed. Returns the path written.
pub fn write_winners(
    output_dir: &Path,
    award_name: &str,
    winners: &[WinnerCandidate],
) -> io::Result<PathBuf> {
    fs::create_dir_all(output_dir)?;

    let filename = format!("past_winners_{}.json", sanitize_award_name(award_name));
    let path = output_dir.join(filename);

    let json = serde_json::to_string_pretty(winners)?;
    fs::write(&path, json)?;

    info!(path = %path.display(), winners = winners.len(), "Wrote winners file");

    Ok(path)
}
