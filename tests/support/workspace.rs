//! Scratch directories holding a products file.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

pub struct Workspace {
    dir: TempDir,
    pub products_file: PathBuf,
}

impl Workspace {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let products_file = dir.path().join("products.json");
        Self {
            dir: dir,
            products_file,
        }
    }

    pub fn with_contents(contents: &str) -> Self {
        let workspace = Self::new();
        fs::write(&workspace.products_file, contents).expect("write products file");
        workspace
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    pub fn contents(&self) -> Option<String> {
        fs::read_to_string(&self.products_file).ok()
    }
}
