//! Discovery of .desktop files in the XDG data directories.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use desktop_entry::Entry;
use log::warn;

/// `applications` directories in XDG precedence order (data home first,
/// then each entry of XDG_DATA_DIRS).
pub fn application_directories() -> Vec<PathBuf> {
    let home = std::env::var("HOME").unwrap_or_default();
    let xdg_data_home =
        std::env::var("XDG_DATA_HOME").unwrap_or_else(|_| format!("{}/.local/share", home));
    let xdg_data_dirs = std::env::var("XDG_DATA_DIRS")
        .unwrap_or_else(|_| "/usr/local/share:/usr/share".to_string());

    let mut dirs = Vec::new();
    dirs.push(PathBuf::from(&xdg_data_home).join("applications"));

    for data_dir in xdg_data_dirs.split(':') {
        if !data_dir.is_empty() {
            dirs.push(PathBuf::from(data_dir).join("applications"));
        }
    }

    dirs
}

/// Parse every .desktop file at the top level of one directory. The app
/// id is the file name without the .desktop suffix. A file that fails to
/// open or parse is logged and skipped; it never aborts the listing.
pub fn scan_directory(dir: &Path) -> Vec<Entry> {
    let mut entries = Vec::new();

    let walker = walkdir::WalkDir::new(dir)
        .follow_links(true)
        .min_depth(1)
        .max_depth(1);
    for found in walker.into_iter().filter_map(|e| e.ok()) {
        let path = found.path();
        if path.extension().and_then(|e| e.to_str()) != Some("desktop") {
            continue;
        }

        let Some(app_id) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };

        let file = match File::open(path) {
            Ok(file) => file,
            Err(err) => {
                warn!("failed to open {}: {err}", path.display());
                continue;
            }
        };

        let mut entry = Entry::new(app_id, path.to_string_lossy());
        if let Err(err) = entry.decode(BufReader::new(file)) {
            warn!("file {}: {err}", path.display());
            continue;
        }

        entries.push(entry);
    }

    entries
}

/// Scan every XDG application directory that exists.
pub fn scan_all() -> Vec<Entry> {
    let mut entries = Vec::new();

    for dir in application_directories() {
        if dir.is_dir() {
            entries.extend(scan_directory(&dir));
        }
    }

    entries
}
