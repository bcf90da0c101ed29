//! The file-backed leaderboard against a real temp file.

use std::fs;
use std::path::PathBuf;

use delve::leaderboard::{FileLeaderboard, Leaderboard, ScoreRecord};

fn temp_board(tag: &str) -> (FileLeaderboard, PathBuf) {
    let path = std::env::temp_dir().join(format!("delve_lb_{tag}_{}.txt", std::process::id()));
    let _ = fs::remove_file(&path);
    (FileLeaderboard::new(&path), path)
}

#[test]
fn test_missing_file_is_empty() {
    let (board, _) = temp_board("missing");
    assert!(board.read_all().unwrap().is_empty());
}

#[test]
fn test_append_then_standings() {
    let (mut board, path) = temp_board("append");
    board.append(&ScoreRecord::new("Ada", 250)).unwrap();
    board.append(&ScoreRecord::new("Sir Reginald, the Bold", 900)).unwrap();
    board.append(&ScoreRecord::new("Bob", 250)).unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "Ada,250\nSir Reginald, the Bold,900\nBob,250\n"
    );
    assert_eq!(
        board.standings().unwrap(),
        vec![
            ScoreRecord::new("Sir Reginald, the Bold", 900),
            ScoreRecord::new("Ada", 250),
            ScoreRecord::new("Bob", 250),
        ]
    );
    fs::remove_file(&path).unwrap();
}

#[test]
fn test_multiline_name_is_one_record() {
    let (mut board, path) = temp_board("multiline");
    board.append(&ScoreRecord::new("Ada\nMallory,9999", 5)).unwrap();
    board.append(&ScoreRecord::new("Bob", 7)).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap().lines().count(), 2);
    assert_eq!(
        board.standings().unwrap(),
        vec![ScoreRecord::new("Bob", 7), ScoreRecord::new("Ada Mallory,9999", 5)]
    );
    fs::remove_file(&path).unwrap();
}

#[test]
fn test_bad_lines_are_skipped() {
    let (board, path) = temp_board("bad");
    fs::write(&path, "Ada,250\nnot a record\nBob,lots\n\nCid,10\n").unwrap();
    assert_eq!(
        board.read_all().unwrap(),
        vec![ScoreRecord::new("Ada", 250), ScoreRecord::new("Cid", 10)]
    );
    fs::remove_file(&path).unwrap();
}

#[test]
fn test_reset_truncates() {
    let (mut board, path) = temp_board("reset");
    board.append(&ScoreRecord::new("Ada", 250)).unwrap();
    board.reset().unwrap();
    assert!(board.read_all().unwrap().is_empty());
    board.append(&ScoreRecord::new("Bob", 5)).unwrap();
    assert_eq!(board.read_all().unwrap(), vec![ScoreRecord::new("Bob", 5)]);
    fs::remove_file(&path).unwrap();
}
