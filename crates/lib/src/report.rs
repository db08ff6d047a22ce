//! Kilobyte formatting and table layout.
//!
//! Sizes render as kilobytes rounded to two decimals: whole values drop the
//! decimals entirely, everything else shows exactly two. Rows are aligned
//! into two columns sized to the longest name and the longest size string.

use crate::stats::PackageSize;

/// Format a byte count as a kilobyte string.
///
/// The value is `round(bytes / 1024 * 100) / 100`; whole kilobytes render
/// without decimals, fractional ones with exactly two.
pub fn kb(bytes: u64) -> String {
  let num = (bytes as f64 / 1024.0 * 100.0).round() / 100.0;
  if num.fract() == 0.0 {
    format!("{} kb", num as u64)
  } else {
    format!("{:.2} kb", num)
  }
}

/// Render the size table.
///
/// The root row comes first, separated from the remaining entries by a
/// blank line; the rest keep the order given. Names are left-aligned and
/// padded to the longest name plus two, sizes right-aligned to the longest
/// size string plus one. The returned string starts with a blank line and
/// has no trailing newline, so printing it with `println!` yields the final
/// blank line.
pub fn render_table(root_name: &str, entries: &[PackageSize]) -> String {
  let rows: Vec<(&str, String)> = entries
    .iter()
    .map(|entry| (entry.name.as_str(), kb(entry.bytes)))
    .collect();

  let name_width = rows.iter().map(|(name, _)| name.len()).max().unwrap_or(0) + 2;
  let size_width = rows.iter().map(|(_, size)| size.len()).max().unwrap_or(0) + 1;

  let line = |name: &str, size: &str| format!("{:<name_width$}{:>size_width$}", name, size);

  let root = rows.iter().position(|(name, _)| *name == root_name);

  let mut lines = vec![String::new()];
  if let Some(i) = root {
    lines.push(line(rows[i].0, &rows[i].1));
  }
  lines.push(String::new());
  for (i, (name, size)) in rows.iter().enumerate() {
    if Some(i) != root {
      lines.push(line(name, size));
    }
  }
  lines.push(String::new());

  lines.join("\n")
}
