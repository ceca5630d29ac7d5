use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const TRACK_PATHS: [&str; 5] = [
    "assets/music/lofi_beats.wav",
    "assets/music/nature_sounds.wav",
    "assets/music/classical.wav",
    "assets/music/white_noise.wav",
    "assets/music/cafe_ambience.wav",
];

fn silent_tracks() -> Command {
    Command::cargo_bin("silent-tracks").unwrap()
}

fn check_tracks() -> Command {
    Command::cargo_bin("check-tracks").unwrap()
}

#[test]
fn default_run_creates_five_silent_files() {
    let temp_dir = TempDir::new().unwrap();

    let output = silent_tracks()
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();

    assert_eq!(stdout.matches("✅ Created:").count(), 5);
    let last_created = stdout.rfind("✅ Created:").unwrap();
    let guidance = stdout.find("Next steps").unwrap();
    assert!(guidance > last_created);
    assert!(stdout.contains("https://freemusicarchive.org/"));

    for path in TRACK_PATHS {
        let full = temp_dir.path().join(path);
        let reader = hound::WavReader::open(&full).unwrap();
        let spec = reader.spec();
        assert_eq!(spec.channels, 1);
        assert_eq!(spec.sample_rate, 44100);
        assert_eq!(spec.bits_per_sample, 16);
        assert_eq!(reader.duration(), 44100);
        assert_eq!(fs::metadata(&full).unwrap().len(), 44 + 88200);
    }

    let music_dir = temp_dir.path().join("assets/music");
    assert_eq!(fs::read_dir(music_dir).unwrap().count(), 5);
}

#[test]
fn rerun_is_byte_identical() {
    let temp_dir = TempDir::new().unwrap();

    silent_tracks().arg("--root").arg(temp_dir.path()).assert().success();
    let first = fs::read(temp_dir.path().join(TRACK_PATHS[0])).unwrap();
    silent_tracks().arg("--root").arg(temp_dir.path()).assert().success();
    let second = fs::read(temp_dir.path().join(TRACK_PATHS[0])).unwrap();

    assert_eq!(first, second);
}

#[test]
fn custom_duration() {
    let temp_dir = TempDir::new().unwrap();

    silent_tracks()
        .args(["--duration", "0.5"])
        .arg("--root")
        .arg(temp_dir.path())
        .assert()
        .success();

    let reader = hound::WavReader::open(temp_dir.path().join(TRACK_PATHS[4])).unwrap();
    assert_eq!(reader.duration(), 22050);
}

#[test]
fn blocked_directory_fails_fast() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("assets"), b"in the way").unwrap();

    silent_tracks()
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Created").not())
        .stdout(predicate::str::contains("Next steps").not())
        .stderr(predicate::str::contains("Error:"));

    assert!(temp_dir.path().join("assets").is_file());
}

#[test]
fn failed_first_track_stops_the_rest() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir_all(temp_dir.path().join(TRACK_PATHS[0])).unwrap();

    silent_tracks()
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Created").not())
        .stdout(predicate::str::contains("Next steps").not())
        .stderr(predicate::str::contains("lofi_beats.wav"));

    for path in &TRACK_PATHS[1..] {
        assert!(!temp_dir.path().join(path).exists(), "{} was written", path);
    }
}

#[test]
fn non_positive_duration_is_rejected() {
    let temp_dir = TempDir::new().unwrap();

    silent_tracks()
        .current_dir(temp_dir.path())
        .args(["--duration", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Duration"));

    assert!(!temp_dir.path().join("assets").exists());
}

#[test]
fn check_tracks_reports_missing_then_valid() {
    let temp_dir = TempDir::new().unwrap();

    check_tracks()
        .arg("--root")
        .arg(temp_dir.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("Lo-fi Beats"))
        .stdout(predicate::str::contains("missing"));

    silent_tracks().current_dir(temp_dir.path()).assert().success();

    check_tracks()
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("All 5 placeholder tracks are valid."));
}
