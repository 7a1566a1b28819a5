//! Command line configuration.

use anyhow::{Result, bail};
use clap::Parser;
use std::path::PathBuf;

/// Command line configuration for mdrelink.
#[derive(Debug, Clone, Parser)]
#[command(name = "mdrelink", version, about, long_about = None)]
pub struct Config {
    /// Content root directory containing the markdown tree
    #[arg(default_value = "website/content")]
    pub root: PathBuf,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the content root does not exist or is not a
    /// directory.
    pub fn validate(&self) -> Result<()> {
        if !self.root.is_dir() {
            bail!("Content directory not found: {}", self.root.display());
        }

        Ok(())
    }

    /// Returns the content root as an absolute path for display.
    ///
    /// Falls back to the configured path when canonicalization fails.
    pub fn display_root(&self) -> PathBuf {
        self.root.canonicalize().unwrap_or_else(|_| self.root.clone())
    }
}
