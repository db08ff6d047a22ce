//! Per-package size aggregation and ordering.
//!
//! Builds the root-first list of package sizes and sorts it largest-first
//! while keeping encounter order between equal sizes.

use std::path::Path;

use tracing::info;

use crate::manifest::Manifest;
use crate::resolve::resolve_dependencies;
use crate::size::{SizeError, SizeMode, package_size};

/// One package and its total size in bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageSize {
  pub name: String,
  pub bytes: u64,
}

/// Size of the root package at `manifest_path` and of every transitive
/// dependency, in resolver encounter order with the root first.
///
/// The root is keyed by its display name, dependencies by the name they
/// were declared under. A repeated name keeps its first position and takes
/// the last computed size, matching map-overwrite semantics.
pub fn package_sizes(
  manifest_path: &Path,
  base: &Path,
  mode: SizeMode,
) -> Result<Vec<PackageSize>, SizeError> {
  let root = Manifest::load(manifest_path)?;

  let mut entries = Vec::new();
  upsert(
    &mut entries,
    root.display_name().to_string(),
    package_size(manifest_path, mode)?,
  );

  let dependencies = resolve_dependencies(manifest_path, base)?;
  info!(count = dependencies.len(), "resolved dependencies");

  for dep in dependencies {
    let bytes = package_size(&dep.manifest_path, mode)?;
    upsert(&mut entries, dep.name, bytes);
  }

  Ok(entries)
}

/// Sort entries by descending size.
///
/// The sort is stable: equal sizes keep their encounter order.
pub fn sorted_by_size(mut entries: Vec<PackageSize>) -> Vec<PackageSize> {
  entries.sort_by(|a, b| b.bytes.cmp(&a.bytes));
  entries
}

fn upsert(entries: &mut Vec<PackageSize>, name: String, bytes: u64) {
  match entries.iter_mut().find(|entry| entry.name == name) {
    Some(entry) => entry.bytes = bytes,
    None => entries.push(PackageSize { name, bytes }),
  }
}
