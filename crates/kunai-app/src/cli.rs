use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "kunai")]
#[command(about = "Writes JSON card documents as RFC 6350 vCards")]
#[command(version)]
pub struct Cli {
    /// Card document to read (stdin if omitted or `-`)
    pub file: Option<PathBuf>,
}

impl Cli {
    /// Returns the input path, or `None` when reading from stdin.
    #[must_use]
    pub fn input(&self) -> Option<&Path> {
        self.file.as_deref().filter(|path| *path != Path::new("-"))
    }
}
