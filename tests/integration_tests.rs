//! # Integration Tests for Albumroll
//!
//! End-to-end checks from a user's point of view: scanning a real directory
//! tree, running whole sessions against it, and driving the compiled binary
//! with piped standard input.

use albumroll::console::Console;
use albumroll::error::RollError;
use albumroll::library::{scan_library, AlbumEntry};
use albumroll::player::Launcher;
use albumroll::selector::Selection;
use albumroll::session::{Session, SessionEnd};
use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::collections::HashSet;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Test helper to create a music tree with one album per artist
fn create_music_tree(artists: &[&str]) -> Result<TempDir> {
    let temp_dir = TempDir::new()?;
    for artist in artists {
        let album = temp_dir.path().join(artist).join(format!("{artist} Greatest Hits"));
        fs::create_dir_all(&album)?;
        fs::write(album.join("01 Intro.flac"), b"")?;
    }
    Ok(temp_dir)
}

#[derive(Default)]
struct RecordingLauncher {
    launched: RefCell<Vec<PathBuf>>,
}

impl Launcher for &RecordingLauncher {
    fn launch(&self, album: &Path) -> Result<(), RollError> {
        self.launched.borrow_mut().push(album.to_path_buf());
        Ok(())
    }
}

fn run_session(
    albums: &[AlbumEntry],
    root: &Path,
    launcher: &RecordingLauncher,
    input: &str,
    seed: u64,
) -> Result<(SessionEnd, Vec<Selection>, String)> {
    let mut session = Session::new(albums, root, 5, StdRng::seed_from_u64(seed), launcher)?;
    let mut console = Console::new(Vec::new(), false);
    let end = session.run(Cursor::new(input.to_string()), &mut console)?;
    let output = String::from_utf8(console.into_inner())?;
    Ok((end, session.selections().to_vec(), output))
}

#[cfg(test)]
mod session_tests {
    use super::*;

    #[test]
    fn test_scan_then_pick_plays_scanned_folder() -> Result<()> {
        let tree = create_music_tree(&["A", "B", "C", "D", "E", "F"])?;
        let albums = scan_library(tree.path());
        assert_eq!(albums.len(), 6);

        let launcher = RecordingLauncher::default();
        let (end, selections, _) = run_session(&albums, tree.path(), &launcher, "2\n", 1)?;

        assert!(matches!(end, SessionEnd::Launched(_)));
        let launched = launcher.launched.borrow();
        assert_eq!(launched.len(), 1);
        assert_eq!(launched[0], selections[1].path);
        assert!(launched[0].join("01 Intro.flac").is_file());
        Ok(())
    }

    #[test]
    fn test_six_artists_reroll_resets_cycle() -> Result<()> {
        let tree = create_music_tree(&["A", "B", "C", "D", "E", "F"])?;
        let albums = scan_library(tree.path());
        let launcher = RecordingLauncher::default();

        let (_, selections, output) = run_session(&albums, tree.path(), &launcher, "0\n", 7)?;

        let first: HashSet<&str> = selections[..5].iter().map(|s| s.label.as_str()).collect();
        assert_eq!(first.len(), 5);
        assert_eq!(selections.len(), 10);
        assert_eq!(selections[5].number, 6);
        assert!(output.contains("starting over"));
        Ok(())
    }

    #[test]
    fn test_three_artists_never_more_than_three() -> Result<()> {
        let tree = create_music_tree(&["A", "B", "C"])?;
        let albums = scan_library(tree.path());
        let launcher = RecordingLauncher::default();

        let (_, selections, _) = run_session(&albums, tree.path(), &launcher, "x\n", 3)?;

        assert_eq!(selections.len(), 3);
        Ok(())
    }

    #[test]
    fn test_unknown_number_terminates_without_launch() -> Result<()> {
        let tree = create_music_tree(&["A", "B", "C", "D", "E"])?;
        let albums = scan_library(tree.path());
        let launcher = RecordingLauncher::default();

        let (end, _, _) = run_session(&albums, tree.path(), &launcher, "7\n1\n", 5)?;

        assert!(matches!(end, SessionEnd::Unrecognized(_)));
        assert!(launcher.launched.borrow().is_empty());
        Ok(())
    }

    #[test]
    fn test_empty_tree_is_empty_library() -> Result<()> {
        let temp = TempDir::new()?;
        fs::create_dir_all(temp.path().join("Artist/Album"))?;
        let albums = scan_library(temp.path());
        let launcher = RecordingLauncher::default();

        let result = Session::new(&albums, temp.path(), 5, StdRng::seed_from_u64(0), &launcher);

        assert!(matches!(result, Err(RollError::EmptyLibrary { .. })));
        Ok(())
    }
}

#[cfg(test)]
mod cli_tests {
    use super::*;
    use std::io::Write;

    /// Run the binary with an isolated config file and `input` on stdin.
    fn run_albumroll(music_dir: &Path, player: &Path, args: &[&str], input: &str) -> Result<Output> {
        let config_dir = TempDir::new()?;
        let config_file = config_dir.path().join("config.json");
        fs::write(&config_file, "{}")?;

        let mut child = Command::new(env!("CARGO_BIN_EXE_albumroll"))
            .args(args)
            .arg("--no-color")
            .env("ALBUMROLL_CONFIG", &config_file)
            .env("ALBUMROLL_MUSIC_DIR", music_dir)
            .env("ALBUMROLL_PLAYER", player)
            .env_remove("ALBUMROLL_PER_ROUND")
            .env_remove("ALBUMROLL_SEED")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(input.as_bytes())?;
        }
        Ok(child.wait_with_output()?)
    }

    #[test]
    fn test_cli_help_displays_correctly() -> Result<()> {
        let output = Command::new(env!("CARGO_BIN_EXE_albumroll"))
            .arg("--help")
            .output()?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(output.status.success());
        assert!(stdout.contains("albumroll"));
        assert!(stdout.contains("--music-dir"));
        assert!(stdout.contains("--per-round"));
        assert!(stdout.contains("list"));
        Ok(())
    }

    #[test]
    fn test_empty_library_exits_without_prompt() -> Result<()> {
        let temp = TempDir::new()?;

        let output = run_albumroll(temp.path(), &temp.path().join("player"), &[], "")?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(output.status.success());
        assert!(stdout.contains("No albums found"));
        assert!(!stdout.contains("Enter the number"));
        Ok(())
    }

    #[test]
    fn test_invalid_input_reports_and_exits() -> Result<()> {
        let tree = create_music_tree(&["A", "B"])?;

        let output = run_albumroll(tree.path(), &tree.path().join("player"), &[], "nope\n")?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(output.status.success());
        assert!(stdout.contains("Invalid input `nope`"));
        Ok(())
    }

    #[test]
    fn test_missing_player_is_reported() -> Result<()> {
        let tree = create_music_tree(&["A", "B"])?;
        let player = tree.path().join("no-such-player");

        let output = run_albumroll(tree.path(), &player, &[], "1\n")?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(output.status.success());
        assert!(stdout.contains("Player not found"));
        Ok(())
    }

    #[test]
    fn test_list_groups_by_artist() -> Result<()> {
        let tree = create_music_tree(&["Beta", "Alpha"])?;

        let output = run_albumroll(tree.path(), &tree.path().join("player"), &["list"], "")?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let alpha = stdout.find("Alpha Greatest Hits").unwrap();
        let beta = stdout.find("Beta Greatest Hits").unwrap();
        assert!(alpha < beta);
        assert!(stdout.contains("2 albums by 2 artists"));
        Ok(())
    }

    #[test]
    fn test_seed_repeats_suggestions() -> Result<()> {
        let tree = create_music_tree(&["A", "B", "C", "D", "E", "F", "G", "H"])?;
        let player = tree.path().join("player");

        let first = run_albumroll(tree.path(), &player, &["--seed", "99"], "")?;
        let second = run_albumroll(tree.path(), &player, &["--seed", "99"], "")?;

        assert_eq!(first.stdout, second.stdout);
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_pick_runs_player_four_times() -> Result<()> {
        use std::os::unix::fs::PermissionsExt;

        let tree = create_music_tree(&["A", "B", "C"])?;
        let tools = TempDir::new()?;
        let log = tools.path().join("calls.log");
        let player = tools.path().join("player.sh");
        fs::write(
            &player,
            format!("#!/bin/sh\necho \"$*\" >> '{}'\n", log.display()),
        )?;
        fs::set_permissions(&player, fs::Permissions::from_mode(0o755))?;

        let output = run_albumroll(tree.path(), &player, &[], "1\n")?;
        assert!(output.status.success());

        let calls = fs::read_to_string(&log)?;
        let calls: Vec<&str> = calls.lines().collect();
        assert_eq!(calls.len(), 4);
        assert_eq!(calls[0], "/stop");
        assert_eq!(calls[1], "/command:Default");
        assert!(calls[2].starts_with("/add "));
        assert!(calls[2].ends_with("Greatest Hits"));
        assert_eq!(calls[3], "/play");
        Ok(())
    }
}
