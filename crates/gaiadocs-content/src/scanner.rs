//! Document discovery by filesystem walking.
//!
//! Enumerates every addressable document under the content root as a list of
//! slug segments. `index.mdx` files collapse to their directory's own path,
//! so the root `index.mdx` yields the empty segment list. Directory entries
//! are sorted by file name before processing, keeping the output stable
//! across platforms whose native enumeration order differs.

use std::fs;
use std::path::Path;

use crate::error::ContentError;

/// Scan the content root and return every document slug.
///
/// Hidden files and directories (leading `.`) are skipped; only `.mdx` files
/// qualify. Output order is a depth-first walk with lexicographically sorted
/// entries at each level.
///
/// # Errors
///
/// Returns [`ContentError::RootNotFound`] if `root` is missing or not a
/// directory, and [`ContentError::Io`] if a directory cannot be read
/// mid-walk. There is no empty-result fallback for a missing root.
pub fn scan(root: &Path) -> Result<Vec<Vec<String>>, ContentError> {
    if !root.is_dir() {
        return Err(ContentError::RootNotFound(root.to_path_buf()));
    }

    let mut slugs = Vec::new();
    scan_directory(root, &mut Vec::new(), &mut slugs)?;
    Ok(slugs)
}

fn scan_directory(
    dir: &Path,
    base: &mut Vec<String>,
    slugs: &mut Vec<Vec<String>>,
) -> Result<(), ContentError> {
    for entry in sorted_entries(dir)? {
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            continue;
        }

        if entry.file_type().is_ok_and(|t| t.is_dir()) {
            base.push(name);
            scan_directory(&entry.path(), base, slugs)?;
            base.pop();
        } else if let Some(stem) = name.strip_suffix(".mdx") {
            if stem == "index" {
                // index.mdx maps to the directory's own path
                slugs.push(base.clone());
            } else {
                let mut slug = base.clone();
                slug.push(stem.to_owned());
                slugs.push(slug);
            }
        }
    }
    Ok(())
}

/// Read a directory and return its entries sorted by file name.
fn sorted_entries(dir: &Path) -> Result<Vec<fs::DirEntry>, ContentError> {
    let entries = fs::read_dir(dir).map_err(|e| ContentError::io(dir, e))?;
    let mut entries: Vec<_> = entries
        .collect::<Result<_, _>>()
        .map_err(|e| ContentError::io(dir, e))?;
    entries.sort_by_key(fs::DirEntry::file_name);
    Ok(entries)
}
