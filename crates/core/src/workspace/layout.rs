use std::path::{Path, PathBuf};

/// Logical layout of a workspace on disk.
///
/// Derived from a root path; performs no IO.
#[derive(Debug, Clone)]
pub struct WorkspaceLayout {
    pub root: PathBuf,
    /// Directory for internal metadata (.rigsmith).
    pub meta_dir: PathBuf,
    pub config_path: PathBuf,
    /// Directory for saved build files (builds).
    pub builds_dir: PathBuf,
    /// Directory for generated JSON reports (reports).
    pub reports_dir: PathBuf,
}

impl WorkspaceLayout {
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref().to_path_buf();
        let meta_dir = root.join(".rigsmith");
        let config_path = meta_dir.join("config.json");
        let builds_dir = root.join("builds");
        let reports_dir = root.join("reports");
        Self { root, meta_dir, config_path, builds_dir, reports_dir }
    }

    /// Resolve a path stored in the config: absolute paths pass through,
    /// relative ones are joined to the root.
    pub fn resolve(&self, stored: &str) -> PathBuf {
        let path = Path::new(stored);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    /// Express `path` relative to the root when it lives underneath it.
    pub fn relative_string(&self, path: &Path) -> String {
        match path.strip_prefix(&self.root) {
            Ok(rel) => rel.to_string_lossy().to_string(),
            Err(_) => path.to_string_lossy().to_string(),
        }
    }

    pub fn report_path(&self, stem: &str) -> PathBuf {
        self.reports_dir.join(format!("{stem}.json"))
    }
}
