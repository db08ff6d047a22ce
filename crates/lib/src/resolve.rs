//! Transitive dependency resolution.
//!
//! Dependencies are discovered on disk by convention: a dependency declared
//! as `"owner/repo"` keeps its manifest at
//! `components/owner-repo/component.json` under the base directory.
//!
//! # Resolution Algorithm
//!
//! Depth-first pre-order walk over each manifest's `dependencies` map:
//! - record the dependency name and its conventional manifest path
//! - recurse into that manifest's own dependencies
//!
//! Each dependency name is visited at most once, so cyclic graphs
//! terminate. A dependency whose manifest is absent on disk is still
//! recorded but contributes no further entries; the size pass reports the
//! missing manifest as a hard error.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::manifest::{Manifest, ManifestError};

/// File name of every package manifest.
pub const MANIFEST_FILENAME: &str = "component.json";

/// Directory holding installed dependencies, relative to the base directory.
pub const COMPONENTS_DIR: &str = "components";

/// One discovered dependency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDependency {
  /// The name it was declared under (`owner/repo`).
  pub name: String,
  /// Conventional path to its manifest.
  pub manifest_path: PathBuf,
}

/// Conventional manifest path for a dependency name.
///
/// `"owner/repo"` maps to `<base>/components/owner-repo/component.json`.
pub fn manifest_path_for(base: &Path, name: &str) -> PathBuf {
  let slug = name.replace('/', "-");
  base.join(COMPONENTS_DIR).join(slug).join(MANIFEST_FILENAME)
}

/// Resolve every transitive dependency of the manifest at `manifest_path`.
///
/// Returns one entry per dependency name in encounter order, not including
/// the root itself. A given name always maps to the same conventional path,
/// so resolving the same tree twice yields the same result.
///
/// # Errors
///
/// Returns [`ManifestError`] if a dependency manifest exists but cannot be
/// read or parsed. An absent dependency manifest is not an error here.
pub fn resolve_dependencies(
  manifest_path: &Path,
  base: &Path,
) -> Result<Vec<ResolvedDependency>, ManifestError> {
  let mut resolved = Vec::new();
  let mut visited = BTreeSet::new();
  walk(manifest_path, base, &mut resolved, &mut visited)?;
  Ok(resolved)
}

fn walk(
  manifest_path: &Path,
  base: &Path,
  resolved: &mut Vec<ResolvedDependency>,
  visited: &mut BTreeSet<String>,
) -> Result<(), ManifestError> {
  let manifest = match Manifest::load(manifest_path) {
    Ok(manifest) => manifest,
    Err(ManifestError::NotFound { .. }) => return Ok(()),
    Err(e) => return Err(e),
  };

  for name in manifest.dependencies.keys() {
    if !visited.insert(name.clone()) {
      continue;
    }

    let dep_path = manifest_path_for(base, name);
    debug!(name, path = %dep_path.display(), "resolved dependency");
    resolved.push(ResolvedDependency {
      name: name.clone(),
      manifest_path: dep_path.clone(),
    });
    walk(&dep_path, base, resolved, visited)?;
  }

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::fs;
  use tempfile::TempDir;

  /// Write a manifest under `rel_dir` (relative to `base`).
  fn write_manifest(base: &Path, rel_dir: &str, json: &str) -> PathBuf {
    let dir = base.join(rel_dir);
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(MANIFEST_FILENAME);
    fs::write(&path, json).unwrap();
    path
  }

  mod paths {
    use super::*;

    #[test]
    fn slug_replaces_slash_with_dash() {
      let path = manifest_path_for(Path::new("/base"), "x/y");

      assert_eq!(
        path,
        Path::new("/base").join("components").join("x-y").join("component.json")
      );
    }

    #[test]
    fn plain_name_is_kept() {
      let path = manifest_path_for(Path::new("/base"), "emitter");

      assert_eq!(
        path,
        Path::new("/base").join("components").join("emitter").join("component.json")
      );
    }
  }

  mod resolution {
    use super::*;

    #[test]
    fn no_dependencies_resolves_empty() {
      let temp = TempDir::new().unwrap();
      let root = write_manifest(temp.path(), ".", r#"{ "name": "app" }"#);

      let resolved = resolve_dependencies(&root, temp.path()).unwrap();

      assert!(resolved.is_empty());
    }

    #[test]
    fn missing_dependency_tree_resolves_to_single_entry() {
      let temp = TempDir::new().unwrap();
      let root = write_manifest(
        temp.path(),
        ".",
        r#"{ "name": "app", "dependencies": { "x/y": "*" } }"#,
      );

      let resolved = resolve_dependencies(&root, temp.path()).unwrap();

      assert_eq!(
        resolved,
        vec![ResolvedDependency {
          name: "x/y".to_string(),
          manifest_path: manifest_path_for(temp.path(), "x/y"),
        }]
      );
    }

    #[test]
    fn transitive_dependencies_are_discovered() {
      let temp = TempDir::new().unwrap();
      let root = write_manifest(
        temp.path(),
        ".",
        r#"{ "name": "app", "dependencies": { "a/b": "*" } }"#,
      );
      write_manifest(
        temp.path(),
        "components/a-b",
        r#"{ "repo": "a/b", "dependencies": { "c/d": "*" } }"#,
      );
      write_manifest(temp.path(), "components/c-d", r#"{ "repo": "c/d" }"#);

      let resolved = resolve_dependencies(&root, temp.path()).unwrap();

      let names: Vec<_> = resolved.iter().map(|dep| dep.name.as_str()).collect();
      assert_eq!(names, vec!["a/b", "c/d"]);
    }

    #[test]
    fn resolution_is_idempotent() {
      let temp = TempDir::new().unwrap();
      let root = write_manifest(
        temp.path(),
        ".",
        r#"{ "name": "app", "dependencies": { "a/b": "*", "c/d": "*" } }"#,
      );
      write_manifest(temp.path(), "components/a-b", r#"{ "repo": "a/b" }"#);

      let first = resolve_dependencies(&root, temp.path()).unwrap();
      let second = resolve_dependencies(&root, temp.path()).unwrap();

      assert_eq!(first, second);
    }

    #[test]
    fn cyclic_graph_terminates() {
      let temp = TempDir::new().unwrap();
      let root = write_manifest(
        temp.path(),
        ".",
        r#"{ "name": "app", "dependencies": { "a/b": "*" } }"#,
      );
      write_manifest(
        temp.path(),
        "components/a-b",
        r#"{ "repo": "a/b", "dependencies": { "c/d": "*" } }"#,
      );
      write_manifest(
        temp.path(),
        "components/c-d",
        r#"{ "repo": "c/d", "dependencies": { "a/b": "*" } }"#,
      );

      let resolved = resolve_dependencies(&root, temp.path()).unwrap();

      let names: Vec<_> = resolved.iter().map(|dep| dep.name.as_str()).collect();
      assert_eq!(names, vec!["a/b", "c/d"]);
    }

    #[test]
    fn malformed_dependency_manifest_is_an_error() {
      let temp = TempDir::new().unwrap();
      let root = write_manifest(
        temp.path(),
        ".",
        r#"{ "name": "app", "dependencies": { "a/b": "*" } }"#,
      );
      write_manifest(temp.path(), "components/a-b", "{{{");

      let result = resolve_dependencies(&root, temp.path());

      assert!(matches!(result, Err(ManifestError::Parse { .. })));
    }
  }
}
