use anyhow::{Result, anyhow};
use clap::Parser;
use log::{debug, info};
use std::path::PathBuf;

use revdeps_core::absolutize;

#[derive(Debug, Clone, Parser)]
#[command(name = "revdeps")]
#[command(about = "Prints the reverse dependency graph of TypeScript file imports")]
pub struct Config {
    /// Paths of files to resolve
    #[arg(value_name = "FILENAMES", required = true)]
    pub files: Vec<PathBuf>,

    #[clap(skip)]
    initialized: bool,
}

impl Config {
    pub fn new(files: Vec<PathBuf>) -> Self {
        Self { files, initialized: false }
    }

    /// Initialize the config by turning every file argument into an absolute path
    pub fn initialize(&mut self) -> Result<()> {
        if self.initialized {
            return Ok(());
        }
        debug!("Absolutizing {} file arguments", self.files.len());
        self.files = self.files.iter().map(|f| absolutize(f)).collect::<Result<Vec<_>>>()?;
        info!("Resolving from {} entry files", self.files.len());
        self.initialized = true;
        Ok(())
    }

    /// Get the absolute entry files, returning an error if not initialized
    pub fn entries(&self) -> Result<&[PathBuf]> {
        if self.initialized {
            Ok(&self.files)
        } else {
            Err(anyhow!("Config not initialized - call initialize() first"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_parse_files() {
        let cfg = Config::try_parse_from(["revdeps", "a.ts", "src/b.ts"]).unwrap();
        assert_eq!(cfg.files, vec![PathBuf::from("a.ts"), PathBuf::from("src/b.ts")]);
    }

    #[test]
    fn test_parse_requires_a_file() {
        assert!(Config::try_parse_from(["revdeps"]).is_err());
    }

    #[test]
    fn test_parse_rejects_unknown_flags() {
        assert!(Config::try_parse_from(["revdeps", "--threshold", "3", "a.ts"]).is_err());
    }

    #[test]
    fn test_entries_before_initialize() {
        let cfg = Config::new(vec![PathBuf::from("a.ts")]);
        assert!(cfg.entries().is_err());
    }

    #[test]
    fn test_initialize_absolutizes() {
        let cwd = env::current_dir().unwrap();
        let mut cfg = Config::new(vec![PathBuf::from("./src/../a.ts"), PathBuf::from("/abs/b.ts")]);
        cfg.initialize().unwrap();
        assert_eq!(cfg.entries().unwrap(), &[cwd.join("a.ts"), PathBuf::from("/abs/b.ts")]);

        // A second call leaves the paths alone
        cfg.initialize().unwrap();
        assert_eq!(cfg.entries().unwrap().len(), 2);
    }
}
