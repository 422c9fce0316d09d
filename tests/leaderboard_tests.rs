//! Leaderboard file round trips

use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use tetris_classic::leaderboard::{Leaderboard, LeaderboardEntry};

fn temp_path(tag: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!(
        "tetris_classic_{}_{}_{}.csv",
        tag,
        std::process::id(),
        nanos
    ))
}

#[test]
fn file_written_by_one_store_reads_back_in_another() {
    let path = temp_path("roundtrip");
    let writer = Leaderboard::new(&path, 10);

    assert!(writer.submit(LeaderboardEntry {
        name: "ada".into(),
        score: 800,
        lines: 4,
        level: 0,
        timestamp: 100,
    }));
    assert!(writer.submit_result("grace", 1500, 12, 1));

    let reader = Leaderboard::new(&path, 10);
    let top = reader.load_top(10);
    assert_eq!(top.len(), 2);
    assert_eq!(top[0].name, "grace");
    assert_eq!((top[0].score, top[0].lines, top[0].level), (1500, 12, 1));
    assert_eq!(top[1].name, "ada");
    assert_eq!(top[1].timestamp, 100);

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.ends_with("ada,800,4,0,100\n"));

    let _ = fs::remove_file(&path);
}

#[test]
fn hand_edited_file_is_ranked_on_load() {
    let path = temp_path("ranked");
    fs::write(
        &path,
        "low,10,0,0,1\nhigh,900,9,0,5\n\nmid,500,5,0,3\ntie,500,5,0,2\ngarbage\n",
    )
    .unwrap();

    let board = Leaderboard::new(&path, 10);
    let names: Vec<String> = board.load_top(3).into_iter().map(|e| e.name).collect();
    assert_eq!(names, vec!["high", "tie", "mid"]);

    // A submit rewrites the file without the garbage line.
    assert!(board.submit_result("new", 1, 0, 0));
    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text.lines().count(), 5);
    assert!(!text.contains("garbage"));

    let _ = fs::remove_file(&path);
}

#[test]
fn keep_limit_applies_on_submit() {
    let path = temp_path("keep");
    let board = Leaderboard::new(&path, 2);

    for (i, score) in [300, 100, 200].into_iter().enumerate() {
        assert!(board.submit(LeaderboardEntry {
            name: format!("p{}", i),
            score,
            lines: 0,
            level: 0,
            timestamp: i as u64 + 1,
        }));
    }

    let scores: Vec<u32> = board.load_top(10).iter().map(|e| e.score).collect();
    assert_eq!(scores, vec![300, 200]);

    assert!(board.clear());
    assert!(board.load_top(10).is_empty());

    let _ = fs::remove_file(&path);
}
