use std::io::Write;
use std::path::PathBuf;
use std::process::Command;

use tracing::debug;

use super::EntrySink;
use crate::error::ImportError;
use crate::models::NormalizedEntry;

pub const DEFAULT_DAYONE_BIN: &str = "dayone2";
const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Imports entries into a Day One journal through the `dayone2` CLI.
///
/// The binary is run directly, not through a shell, so entry text needs no
/// quoting.
#[derive(Debug, Clone)]
pub struct DayOneImporter {
    binary: PathBuf,
    journal: String,
}

impl DayOneImporter {
    pub fn new(binary: impl Into<PathBuf>, journal: impl Into<String>) -> Self {
        Self { binary: binary.into(), journal: journal.into() }
    }

    pub fn journal(&self) -> &str {
        &self.journal
    }

    /// Arguments for one `dayone2` invocation.
    ///
    /// - with a photo: `-j <journal> -d <date> -p <photo> -- new <text>`
    /// - without: `-j <journal> -d <date> new <text>`
    ///
    /// `--` ends the photo list, which would otherwise swallow `new`.
    pub fn command_args(&self, entry: &NormalizedEntry) -> Vec<String> {
        let mut args = vec![
            "-j".to_string(),
            self.journal.clone(),
            "-d".to_string(),
            entry.date.format(DATE_FORMAT).to_string(),
        ];
        if !entry.photo.is_empty() {
            args.extend(["-p".to_string(), entry.photo.clone(), "--".to_string()]);
        }
        args.extend(["new".to_string(), entry.text.clone()]);
        args
    }
}

impl EntrySink for DayOneImporter {
    fn import(&mut self, entry: &NormalizedEntry) -> Result<(), ImportError> {
        let args = self.command_args(entry);
        debug!(binary = %self.binary.display(), journal = %self.journal, "running journal import");

        let output = Command::new(&self.binary)
            .args(&args)
            .output()
            .map_err(|source| ImportError::Spawn {
                binary: self.binary.display().to_string(),
                source,
            })?;

        if !output.status.success() {
            return Err(ImportError::Failed {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(())
    }
}

/// Writes the `dayone2` command line for each entry instead of running it.
pub struct DryRunImporter<W: Write> {
    importer: DayOneImporter,
    out: W,
}

impl<W: Write> DryRunImporter<W> {
    pub fn new(importer: DayOneImporter, out: W) -> Self {
        Self { importer, out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> EntrySink for DryRunImporter<W> {
    fn import(&mut self, entry: &NormalizedEntry) -> Result<(), ImportError> {
        let args = self.importer.command_args(entry);
        writeln!(self.out, "{} {:?}", self.importer.binary.display(), args)?;
        Ok(())
    }
}
