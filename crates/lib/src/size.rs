//! File-group selection and byte counting.
//!
//! Which groups count toward a package's size depends on the active
//! [`SizeMode`]:
//!
//! - default: scripts and templates
//! - styles: styles only
//! - `include_static` adds images, fonts and files to either of the above
//!
//! Listed files are resolved against the manifest's containing directory
//! and summed with `fs::metadata`. A missing referenced file is a hard
//! error: a manifest pointing at files that do not exist is misconfigured.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::manifest::{FileGroup, Manifest, ManifestError};

/// Which file groups to count.
///
/// Threaded explicitly into every sizing call; there is no ambient mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SizeMode {
  /// Count styles instead of scripts and templates.
  pub styles: bool,
  /// Also count static files (images, fonts, files).
  pub include_static: bool,
}

impl SizeMode {
  /// The file groups selected by this mode.
  pub fn groups(self) -> Vec<FileGroup> {
    let mut groups = if self.styles {
      vec![FileGroup::Styles]
    } else {
      vec![FileGroup::Scripts, FileGroup::Templates]
    };

    if self.include_static {
      groups.extend([FileGroup::Images, FileGroup::Fonts, FileGroup::Files]);
    }

    groups
  }
}

/// Errors that can occur while sizing a package.
#[derive(Debug, Error)]
pub enum SizeError {
  /// The package manifest could not be loaded.
  #[error(transparent)]
  Manifest(#[from] ManifestError),

  /// A file listed in the manifest could not be stat'd.
  #[error("failed to stat {path}: {source}")]
  Stat {
    path: PathBuf,
    #[source]
    source: io::Error,
  },
}

/// Paths of the manifest's local files under the selected groups, resolved
/// against `dir` (the manifest's containing directory).
pub fn local_files(manifest: &Manifest, dir: &Path, mode: SizeMode) -> Vec<PathBuf> {
  mode
    .groups()
    .into_iter()
    .flat_map(|group| manifest.group(group))
    .map(|file| dir.join(file))
    .collect()
}

/// Total size in bytes of the local files of the manifest at `manifest_path`.
///
/// # Errors
///
/// Returns [`SizeError`] if the manifest cannot be loaded (including a
/// dependency manifest missing from disk) or a listed file cannot be
/// stat'd.
pub fn package_size(manifest_path: &Path, mode: SizeMode) -> Result<u64, SizeError> {
  let manifest = Manifest::load(manifest_path)?;
  let dir = manifest_path.parent().unwrap_or(Path::new("."));

  let mut bytes = 0;
  for file in local_files(&manifest, dir, mode) {
    let meta = fs::metadata(&file).map_err(|e| SizeError::Stat {
      path: file.clone(),
      source: e,
    })?;
    bytes += meta.len();
  }

  debug!(path = %manifest_path.display(), bytes, "sized package");
  Ok(bytes)
}
