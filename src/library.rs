//! # Library Scanner
//!
//! Builds the album index from a music folder tree. An *album folder* is any
//! directory that directly contains at least one file; its name is the album
//! and its parent directory's name is the artist:
//!
//! ```text
//! Music/
//! ├── Miles Davis/
//! │   ├── Kind of Blue/        -> ("Miles Davis", "Kind of Blue")
//! │   │   └── 01 So What.flac
//! │   └── Bootlegs/            (no files, skipped but still walked)
//! │       └── 1969/            -> ("Bootlegs", "1969")
//! │           └── a.flac
//! ```
//!
//! Nothing is read from the audio files themselves. The artist is purely a
//! grouping key taken from the folder layout.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One playable album folder.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AlbumEntry {
    pub artist: String,
    pub album: String,
    /// Location of the album folder; identifies the entry.
    pub path: PathBuf,
}

impl AlbumEntry {
    /// Derive an entry from an album folder path.
    pub fn from_dir(path: &Path) -> Self {
        Self {
            artist: path
                .parent()
                .map(dir_name)
                .unwrap_or_default(),
            album: dir_name(path),
            path: path.to_path_buf(),
        }
    }

    /// Menu text, `Artist - Album`.
    pub fn label(&self) -> String {
        format!("{} - {}", self.artist, self.album)
    }
}

fn dir_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Scan `root` for album folders.
///
/// Walks the entire tree (no depth limit) in file-name order, so two scans of
/// the same tree return the same sequence. Symbolic links are not followed,
/// so each album folder is listed once. A missing or unreadable root
/// degrades to an empty index; the caller reports that as an empty library.
pub fn scan_library(root: &Path) -> Vec<AlbumEntry> {
    if !root.is_dir() {
        warn!("Music directory `{}` does not exist or is not a directory", root.display());
        return Vec::new();
    }

    let mut albums = Vec::new();
    let walker = WalkDir::new(root).sort_by_file_name().into_iter();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry: {e}");
                continue;
            }
        };

        if entry.file_type().is_dir() && contains_files(entry.path()) {
            let album = AlbumEntry::from_dir(entry.path());
            debug!("Found album `{}` at {}", album.label(), album.path.display());
            albums.push(album);
        }
    }

    info!("Scanned {} album folders under {}", albums.len(), root.display());
    albums
}

/// Whether `dir` has at least one direct child that is not a directory.
fn contains_files(dir: &Path) -> bool {
    match dir.read_dir() {
        Ok(entries) => entries
            .filter_map(Result::ok)
            .any(|entry| !entry.path().is_dir()),
        Err(e) => {
            warn!("Cannot read {}: {e}", dir.display());
            false
        }
    }
}

/// Group albums under their artist, artists in sorted order and each
/// artist's albums in scan order.
pub fn group_by_artist(albums: &[AlbumEntry]) -> BTreeMap<&str, Vec<&AlbumEntry>> {
    let mut grouped: BTreeMap<&str, Vec<&AlbumEntry>> = BTreeMap::new();
    for album in albums {
        grouped.entry(album.artist.as_str()).or_default().push(album);
    }
    grouped
}
