use std::path::PathBuf;

use crate::import::{DEFAULT_DAYONE_BIN, DayOneImporter};
use crate::models::Frequency;

pub const DEFAULT_INFILE: &str = "posts/your_posts_1.json";
pub const DEFAULT_OUTFILE: &str = "facebook_to_journal.tsv";

/// Settings for one conversion run, built once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub infile: PathBuf,
    pub outfile: PathBuf,
    /// Day One journal to import into. `None` disables import.
    pub journal: Option<String>,
    pub freq: Frequency,
    pub dayone_bin: PathBuf,
    /// Print import commands instead of running them.
    pub dry_run: bool,
}

impl Config {
    /// The importer for the configured journal, if import is enabled.
    pub fn importer(&self) -> Option<DayOneImporter> {
        self.journal.as_ref().map(|journal| DayOneImporter::new(&self.dayone_bin, journal))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            infile: PathBuf::from(DEFAULT_INFILE),
            outfile: PathBuf::from(DEFAULT_OUTFILE),
            journal: None,
            freq: Frequency::default(),
            dayone_bin: PathBuf::from(DEFAULT_DAYONE_BIN),
            dry_run: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.infile, PathBuf::from("posts/your_posts_1.json"));
        assert_eq!(config.outfile, PathBuf::from("facebook_to_journal.tsv"));
        assert_eq!(config.freq.num_seconds(), 3600);
        assert!(config.journal.is_none());
        assert!(config.importer().is_none());
    }

    #[test]
    fn test_importer_enabled_by_journal() {
        let config = Config { journal: Some("Facebook".to_string()), ..Config::default() };
        assert_eq!(config.importer().unwrap().journal(), "Facebook");
    }
}
