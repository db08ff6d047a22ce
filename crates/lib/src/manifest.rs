//! The `component.json` manifest format.
//!
//! A manifest describes one package: its display name, its named
//! dependencies, and the files it ships grouped by kind.
//!
//! # Manifest Format
//!
//! ```json
//! {
//!   "name": "tip",
//!   "repo": "component/tip",
//!   "dependencies": {
//!     "component/emitter": "*",
//!     "component/jquery": "*"
//!   },
//!   "scripts": ["index.js", "template.js"],
//!   "styles": ["tip.css"]
//! }
//! ```
//!
//! Every key is optional; an empty object is a valid manifest that sizes to
//! zero bytes. Only the keys of `dependencies` matter, the version specs are
//! never interpreted.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Display name used when a manifest declares neither `repo` nor `name`.
pub const UNNAMED_PACKAGE: &str = "local";

/// The file groups a manifest can list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileGroup {
  Scripts,
  Styles,
  Templates,
  Images,
  Fonts,
  Files,
}

/// A parsed `component.json`.
///
/// Uses [`BTreeMap`] for `dependencies` so iteration order is deterministic
/// across runs.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Manifest {
  /// Package name.
  pub name: Option<String>,

  /// Repository alias (`owner/repo`), preferred over `name` for display.
  pub repo: Option<String>,

  /// Declared dependencies, keyed by name.
  pub dependencies: BTreeMap<String, String>,

  pub scripts: Vec<String>,
  pub styles: Vec<String>,
  pub templates: Vec<String>,
  pub images: Vec<String>,
  pub fonts: Vec<String>,
  pub files: Vec<String>,
}

/// Errors that can occur when loading a manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
  /// The manifest file does not exist.
  #[error("manifest not found: {path}")]
  NotFound { path: PathBuf },

  /// Failed to read the manifest file.
  #[error("failed to read manifest {path}: {source}")]
  Read {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  /// The manifest is not valid JSON.
  #[error("failed to parse manifest {path}: {source}")]
  Parse {
    path: PathBuf,
    #[source]
    source: serde_json::Error,
  },
}

impl Manifest {
  /// Load a manifest from the given path.
  ///
  /// Absence, unreadability and malformed JSON are distinct errors so
  /// callers can treat a missing file differently from a broken one.
  pub fn load(path: &Path) -> Result<Self, ManifestError> {
    let content = match fs::read_to_string(path) {
      Ok(content) => content,
      Err(e) if e.kind() == io::ErrorKind::NotFound => {
        return Err(ManifestError::NotFound {
          path: path.to_path_buf(),
        });
      }
      Err(e) => {
        return Err(ManifestError::Read {
          path: path.to_path_buf(),
          source: e,
        });
      }
    };

    serde_json::from_str(&content).map_err(|e| ManifestError::Parse {
      path: path.to_path_buf(),
      source: e,
    })
  }

  /// Display name for this package: `repo`, else `name`, else `"local"`.
  ///
  /// The same chain is used everywhere a package is keyed or printed.
  pub fn display_name(&self) -> &str {
    self
      .repo
      .as_deref()
      .or(self.name.as_deref())
      .unwrap_or(UNNAMED_PACKAGE)
  }

  /// The file list for one group.
  pub fn group(&self, group: FileGroup) -> &[String] {
    match group {
      FileGroup::Scripts => &self.scripts,
      FileGroup::Styles => &self.styles,
      FileGroup::Templates => &self.templates,
      FileGroup::Images => &self.images,
      FileGroup::Fonts => &self.fonts,
      FileGroup::Files => &self.files,
    }
  }
}
