//! Fair random album selection.
//!
//! Each round picks up to `count` albums, never two by the same artist. Artists
//! already offered are remembered in [`UsedArtists`] so later rounds favour
//! artists not yet seen; when too few unseen artists remain the set is
//! cleared and a new *cycle* starts with every artist available again.
//!
//! The random source is a parameter so callers (and tests) choose between
//! entropy and a seeded generator.

use crate::library::{group_by_artist, AlbumEntry};
use log::{debug, info};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;
use std::path::PathBuf;

/// Albums shown per round unless configured otherwise.
pub const DEFAULT_PER_ROUND: usize = 5;

/// A numbered menu line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub number: u32,
    pub label: String,
    pub path: PathBuf,
}

/// Artists offered during the current cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsedArtists(HashSet<String>);

impl UsedArtists {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, artist: &str) -> bool {
        self.0.contains(artist)
    }

    pub fn insert(&mut self, artist: impl Into<String>) -> bool {
        self.0.insert(artist.into())
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// Result of one selection round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundOutcome {
    pub selections: Vec<Selection>,
    /// The used set was cleared before picking because too few unused
    /// artists were left.
    pub cycle_reset: bool,
}

/// Run one selection round.
///
/// Picks `min(count, available artists)` distinct artists uniformly at random,
/// one uniformly random album each, numbered from `start_num`. Chosen artists
/// are added to `used`. If fewer than `count` unused artists remain, `used` is
/// cleared first and `cycle_reset` is set on the outcome.
///
/// A library with fewer artists than `count` yields a short round, never an
/// error.
///
/// # Examples
///
/// ```
/// use albumroll::library::AlbumEntry;
/// use albumroll::selector::{pick_round, UsedArtists};
/// use rand::{rngs::StdRng, SeedableRng};
/// use std::path::Path;
///
/// let albums = vec![
///     AlbumEntry::from_dir(Path::new("/music/A/One")),
///     AlbumEntry::from_dir(Path::new("/music/B/Two")),
/// ];
/// let mut used = UsedArtists::new();
/// let mut rng = StdRng::seed_from_u64(7);
///
/// let round = pick_round(&albums, &mut used, 5, 1, &mut rng);
/// assert_eq!(round.selections.len(), 2);
/// assert_eq!(round.selections[1].number, 2);
/// ```
pub fn pick_round<R: Rng + ?Sized>(
    albums: &[AlbumEntry],
    used: &mut UsedArtists,
    count: usize,
    start_num: u32,
    rng: &mut R,
) -> RoundOutcome {
    if count == 0 {
        return RoundOutcome {
            selections: Vec::new(),
            cycle_reset: false,
        };
    }

    let by_artist = group_by_artist(albums);

    let mut available: Vec<&str> = by_artist
        .keys()
        .copied()
        .filter(|artist| !used.contains(artist))
        .collect();

    let cycle_reset = available.len() < count;
    if cycle_reset {
        info!(
            "Only {} unused artists left for {count} picks, starting a new cycle",
            available.len()
        );
        used.clear();
        available = by_artist.keys().copied().collect();
    }

    let amount = count.min(available.len());
    let (chosen, _) = available.partial_shuffle(rng, amount);

    let mut selections = Vec::with_capacity(amount);
    let mut number = start_num;
    for artist in chosen.iter() {
        let Some(album) = by_artist[artist].choose(rng) else {
            continue;
        };
        used.insert(*artist);
        debug!("#{number}: {}", album.label());
        selections.push(Selection {
            number,
            label: album.label(),
            path: album.path.clone(),
        });
        number += 1;
    }

    RoundOutcome {
        selections,
        cycle_reset,
    }
}
