use std::env;
use std::fs::File;
use std::path::Path;

use crate::error::JournalError;

// Largest export accepted: 512MB. Everything is held in memory at once.
pub const MAX_EXPORT_SIZE_BYTES: u64 = 512 * 1024 * 1024;

/// Validates that an open export file is within [`MAX_EXPORT_SIZE_BYTES`]
///
/// Takes the open handle rather than the path so the size checked is the size
/// of the file actually read.
///
/// # Errors
///
/// Returns an error if:
/// - The file metadata cannot be read
/// - The file is larger than the limit
pub fn validate_file_size(file: &File, path: &Path) -> Result<(), JournalError> {
    validate_file_size_with_limit(file, path, MAX_EXPORT_SIZE_BYTES)
}

pub(crate) fn validate_file_size_with_limit(
    file: &File,
    path: &Path,
    max: u64,
) -> Result<(), JournalError> {
    let metadata =
        file.metadata().map_err(|source| JournalError::Read { path: path.to_path_buf(), source })?;

    let size = metadata.len();
    if size > max {
        return Err(JournalError::InputTooLarge { path: path.to_path_buf(), size, max });
    }

    Ok(())
}

/// Formats a path with ~ substitution for the home directory
///
/// # Examples
///
/// ```no_run
/// use std::path::PathBuf;
/// use facebook_to_journal::format_path_with_tilde;
///
/// let path = PathBuf::from("/Users/alice/journal.tsv");
/// // Returns "~/journal.tsv" if HOME=/Users/alice
/// let formatted = format_path_with_tilde(&path);
/// ```
pub fn format_path_with_tilde(path: &Path) -> String {
    format_path_with_tilde_internal(path, None)
}

/// Internal helper for path formatting with optional home override (for testing)
///
/// Home is matched by whole path components, so `/home/al` is not a prefix of
/// `/home/alice`.
pub(crate) fn format_path_with_tilde_internal(
    path: &Path,
    home_override: Option<&str>,
) -> String {
    let home_from_env = env::var("HOME").ok();
    let home = home_override.or(home_from_env.as_deref());

    if let Some(home) = home
        && !home.is_empty()
        && let Ok(rest) = path.strip_prefix(home)
    {
        if rest.as_os_str().is_empty() {
            return "~".to_string();
        }
        return Path::new("~").join(rest).to_string_lossy().into_owned();
    }

    path.to_string_lossy().into_owned()
}
