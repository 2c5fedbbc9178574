use crate::errors::Result;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// Lists the Go files that make up one package directory.
///
/// Only the directory itself is read. Test files and the names the Go tool
/// ignores (leading `.` or `_`) are skipped. Results are sorted so detection
/// is deterministic.
pub struct SourceWalker {
    root: PathBuf,
}

impl SourceWalker {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn walk(&self) -> Result<Vec<PathBuf>> {
        if !self.root.is_dir() {
            log::warn!("Package directory {} does not exist", self.root.display());
            return Ok(Vec::new());
        }

        let walker = WalkBuilder::new(&self.root)
            .max_depth(Some(1))
            .standard_filters(false)
            .build();

        let mut files = Vec::new();
        for entry in walker {
            let entry = entry?;
            let path = entry.path();
            if path.is_file() && Self::should_process(path) {
                files.push(path.to_path_buf());
            }
        }

        files.sort();
        Ok(files)
    }

    fn should_process(path: &Path) -> bool {
        let Some(name) = path.file_name().map(|n| n.to_string_lossy()) else {
            return false;
        };

        name.ends_with(".go")
            && !name.ends_with("_test.go")
            && !name.starts_with('.')
            && !name.starts_with('_')
    }
}

pub fn find_source_files(root: &Path) -> Result<Vec<PathBuf>> {
    SourceWalker::new(root.to_path_buf()).walk()
}
