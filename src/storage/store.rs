use crate::constants::REQUEST_FILE_EXTENSION;
use crate::models::Request;
use anyhow::{Context, Result};
use std::fs;
use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

/// Saved requests on disk, one `<name>.json` file per request
#[derive(Clone, Debug)]
pub struct Storage {
    dir: PathBuf,
}

impl Storage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Storage { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing a request name
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", name, REQUEST_FILE_EXTENSION))
    }

    /// Ensure the requests directory exists
    fn ensure_dir(&self) -> Result<()> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir)
                .with_context(|| format!("Failed to create {}", self.dir.display()))?;
        }
        Ok(())
    }

    /// Write a request to `<name>.json`, replacing any previous file, and
    /// return the refreshed list of saved requests.
    pub fn save(&self, request: &Request) -> Result<Vec<Request>> {
        validate_name(&request.name)?;

        self.ensure_dir()?;
        let path = self.path_for(&request.name);
        let mut content =
            serde_json::to_string_pretty(request).context("Failed to serialize request")?;
        content.push('\n');
        fs::write(&path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::info!(path = %path.display(), "Saved request");

        self.load_all()
    }

    /// Load every saved request, sorted by file name.
    ///
    /// A missing directory yields an empty list. Files that cannot be read or
    /// parsed are skipped so one bad file never hides the rest.
    pub fn load_all(&self) -> Result<Vec<Request>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(&self.dir)
            .with_context(|| format!("Failed to read {}", self.dir.display()))?;

        let mut paths: Vec<PathBuf> = entries
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| p.is_file())
            .filter(|p| p.extension().is_some_and(|ext| ext == REQUEST_FILE_EXTENSION))
            .collect();
        paths.sort();

        let mut requests = Vec::with_capacity(paths.len());
        for path in paths {
            let parsed = fs::read_to_string(&path)
                .map_err(anyhow::Error::from)
                .and_then(|content| Ok(serde_json::from_str::<Request>(&content)?));
            match parsed {
                Ok(request) => requests.push(request),
                Err(e) => tracing::debug!(path = %path.display(), error = %e, "Skipping unreadable request file"),
            }
        }

        Ok(requests)
    }
}

/// A request name must be a single plain file name so its file lands
/// directly inside the requests directory.
fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        anyhow::bail!("Cannot save a request without a name");
    }
    let components: Vec<Component> = Path::new(name).components().collect();
    match components.as_slice() {
        [Component::Normal(part)] if *part == OsStr::new(name) => Ok(()),
        _ => anyhow::bail!("Invalid request name '{}': must be a plain file name", name),
    }
}
