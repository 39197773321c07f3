//! Discovery of the image files to show.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Extensions accepted when expanding a directory argument (lowercase,
/// without dot).
const IMAGE_EXTS: &[&str] = &["jpg", "png", "gif"];

/// Return `true` if `path` has an accepted image extension.
#[must_use]
pub fn is_supported_image(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()).is_some_and(|ext| {
        let ext = ext.to_ascii_lowercase();
        IMAGE_EXTS.iter().any(|e| *e == ext)
    })
}

/// Expand `paths` into the flat, case-insensitively sorted list of images to
/// show.
///
/// A regular file is included as-is, whatever its suffix. A directory
/// contributes its directly contained image files; subdirectories are not
/// entered. A path that matches nothing contributes nothing.
#[must_use]
pub fn collect_images(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut out = Vec::new();
    for root in paths {
        if root.is_file() {
            out.push(root.clone());
            continue;
        }
        for entry in WalkDir::new(root)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .flatten()
        {
            if entry.file_type().is_file() && is_supported_image(entry.path()) {
                out.push(entry.path().to_path_buf());
            }
        }
    }
    out.sort_by_cached_key(|p| p.to_string_lossy().to_lowercase());
    out
}
