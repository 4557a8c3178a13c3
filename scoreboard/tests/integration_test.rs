use chrono::NaiveDate;
use scoreboard::*;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, d).expect("valid date")
}

#[test]
fn test_high_score_enters_full_board() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut store = ScoreStore::new(FileStore::new(dir.path()));

    // 480, 490, ..., 570
    for i in 0..10 {
        assert!(store.submit(&format!("p{i}"), 480 + i * 10, day(1)));
    }
    let before = store.load();
    assert_eq!(before.len(), MAX_ENTRIES);
    assert_eq!(before.last().map(|e| e.score), Some(480));

    assert!(store.qualifies(500));
    assert!(store.submit("new", 500, day(2)));

    let after = store.load();
    assert_eq!(after.len(), MAX_ENTRIES);
    assert!(after.iter().any(|e| e.name == "NEW" && e.score == 500));
    assert!(after.iter().all(|e| e.score != 480), "minimum dropped");
    assert!(after.windows(2).all(|w| w[0].score >= w[1].score));
}

#[test]
fn test_file_store_survives_reopen() {
    let dir = tempfile::tempdir().expect("tempdir");
    {
        let mut store = ScoreStore::new(FileStore::new(dir.path()));
        assert!(store.submit("ace", 11, day(3)));
    }

    let path = dir.path().join(format!("{LEADERBOARD_KEY}.json"));
    assert!(path.exists());

    let reopened = ScoreStore::new(FileStore::new(dir.path()));
    let list = reopened.load();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].name, "ACE");
    assert_eq!(list[0].date, day(3));
}

#[test]
fn test_file_store_creates_missing_directory() {
    let dir = tempfile::tempdir().expect("tempdir");
    let nested = dir.path().join("scores").join("local");
    let mut store = ScoreStore::new(FileStore::new(&nested));

    assert!(store.load().is_empty());
    assert!(store.submit("", 3, day(4)));
    assert_eq!(store.load()[0].name, "PLAYER");
}

#[test]
fn test_corrupt_file_loads_empty_then_recovers() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join("pong_leaderboard.json"), "[{\"name\":").expect("write");

    let mut store = ScoreStore::new(FileStore::new(dir.path()));
    assert!(store.load().is_empty());

    assert!(store.submit("ace", 2, day(5)));
    assert_eq!(store.load().len(), 1);
}

#[test]
fn test_backup_to_memory_and_restore_to_files() {
    let mut local = ScoreStore::new(MemoryStore::new());
    for (name, score) in [("ann", 4), ("bo", 9), ("cy", 6)] {
        local.submit(name, score, day(6));
    }

    let mut remote = MemoryStore::new();
    local.backup_to(&mut remote);

    let dir = tempfile::tempdir().expect("tempdir");
    let mut restored = ScoreStore::new(FileStore::new(dir.path()));
    restored.restore_from(&remote);

    let rows = ranked(&restored.load());
    let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["BO", "CY", "ANN"]);
    assert_eq!(rows[0].rank, 1);
}

#[test]
fn test_file_save_leaves_no_temp_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut store = ScoreStore::new(FileStore::new(dir.path()));
    assert!(store.submit("ace", 4, day(7)));
    assert!(store.submit("bo", 6, day(7)));

    let names: Vec<String> = std::fs::read_dir(dir.path())
        .expect("read dir")
        .map(|e| e.expect("dir entry").file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["pong_leaderboard.json".to_string()]);
    assert_eq!(store.load().len(), 2);
}

#[test]
fn test_interrupted_write_keeps_previous_board() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut store = ScoreStore::new(FileStore::new(dir.path()));
    assert!(store.submit("ace", 9, day(8)));

    // A write cut short only ever touches the temp file
    std::fs::write(dir.path().join("pong_leaderboard.json.tmp"), "[{\"name\":\"BO")
        .expect("write");

    let reopened = ScoreStore::new(FileStore::new(dir.path()));
    let list = reopened.load();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].name, "ACE");
}

#[test]
fn test_save_after_interrupted_write_replaces_temp() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join("pong_leaderboard.json.tmp"), "garbage").expect("write");

    let mut store = ScoreStore::new(FileStore::new(dir.path()));
    assert!(store.submit("cy", 3, day(9)));

    assert!(!dir.path().join("pong_leaderboard.json.tmp").exists());
    assert_eq!(store.load()[0].name, "CY");
}
