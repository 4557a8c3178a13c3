use std::cell::RefCell;
use std::rc::Rc;

use arcade::*;
use chrono::NaiveDate;
use game_core::{Config, GameEvent, GameRng, Match, MatchPhase, Side};
use scoreboard::{FileStore, KeyValueStore, MemoryStore, ScoreStore, StoreError, LEADERBOARD_KEY};

struct RecordingNotifier {
    seen: Rc<RefCell<Vec<GameEvent>>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, event: GameEvent) {
        self.seen.borrow_mut().push(event);
    }
}

struct FixedClock(NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

struct ReadOnlyStore;

impl KeyValueStore for ReadOnlyStore {
    fn load(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Ok(None)
    }

    fn save(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only").into())
    }
}

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 7, 14).expect("valid date")
}

/// Opponent game that ends on the first point
fn short_game(seed: u64) -> Match {
    let config = Config {
        win_score: 1,
        ..Config::vs_opponent()
    };
    Match::new(config, GameRng::new(seed))
}

fn session_with<S: KeyValueStore>(
    game: Match,
    store: S,
) -> (Session<S>, Rc<RefCell<Vec<GameEvent>>>) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let session = Session::new(
        game,
        ScoreStore::new(store),
        Box::new(RecordingNotifier { seen: seen.clone() }),
        Box::new(FixedClock(day())),
        "tester",
    );
    (session, seen)
}

fn play_out<S: KeyValueStore>(session: &mut Session<S>) -> Vec<GameEvent> {
    let mut all = Vec::new();
    let mut ticks = 0;
    while session.game().phase() == MatchPhase::Running && ticks < 100_000 {
        all.extend(session.tick());
        ticks += 1;
    }
    all
}

#[test]
fn test_every_cue_reaches_notifier_in_order() {
    let (mut session, seen) = session_with(short_game(3), MemoryStore::new());
    assert!(session.start());

    let returned = play_out(&mut session);

    assert_eq!(*seen.borrow(), returned);
    assert!(matches!(returned.last(), Some(GameEvent::MatchEnded(_))));
    let points = returned
        .iter()
        .filter(|e| matches!(e, GameEvent::PointScored(_)))
        .count();
    assert_eq!(points, 1);
}

#[test]
fn test_finished_opponent_game_is_saved() {
    let (mut session, _seen) = session_with(short_game(5), MemoryStore::new());
    session.start();
    play_out(&mut session);

    let human = session.game().score().get(Side::Bottom);
    assert_eq!(session.last_submission(), Some(Submission::Saved(human)));

    let board = session.scores().load();
    assert_eq!(board.len(), 1);
    assert_eq!(board[0].name, "TESTER");
    assert_eq!(board[0].score, human);
    assert_eq!(board[0].date, day());
    assert_eq!(session.leaderboard()[0].rank, 1);
}

#[test]
fn test_two_player_game_is_not_ranked() {
    let config = Config {
        win_score: 1,
        ..Config::new()
    };
    let (mut session, _seen) = session_with(Match::new(config, GameRng::new(5)), MemoryStore::new());
    session.start();
    play_out(&mut session);

    assert_eq!(session.game().phase(), MatchPhase::Ended);
    assert_eq!(session.last_submission(), Some(Submission::NotRanked));
    assert!(session.scores().load().is_empty());
}

#[test]
fn test_low_score_stays_off_full_board() {
    let mut seeded = ScoreStore::new(MemoryStore::new());
    for i in 0..10 {
        seeded.submit("pro", 50 + i, day());
    }
    let (mut session, _seen) = session_with(short_game(9), seeded.into_backend());
    session.start();
    play_out(&mut session);

    let human = session.game().score().get(Side::Bottom);
    assert_eq!(session.last_submission(), Some(Submission::BelowBoard(human)));
    assert!(session.scores().load().iter().all(|e| e.name == "PRO"));
}

#[test]
fn test_failed_save_is_reported_not_fatal() {
    let (mut session, _seen) = session_with(short_game(2), ReadOnlyStore);
    session.start();
    play_out(&mut session);

    let human = session.game().score().get(Side::Bottom);
    assert_eq!(session.last_submission(), Some(Submission::SaveFailed(human)));
    assert!(session.start(), "next game still starts");
    assert_eq!(session.last_submission(), None);
}

#[test]
fn test_paused_session_is_silent() {
    let (mut session, seen) = session_with(short_game(1), MemoryStore::new());
    session.start();
    session.game_mut().pause();

    for _ in 0..50 {
        assert!(session.tick().is_empty());
    }
    assert!(seen.borrow().is_empty());
    assert_eq!(session.snapshot().phase, MatchPhase::Paused);
}

#[test]
fn test_autopilots_play_full_match_to_file_store() {
    let dir = tempfile::tempdir().expect("tempdir");
    let game = Match::new(Config::vs_opponent(), GameRng::new(42));
    let (mut session, _seen) = session_with(game, FileStore::new(dir.path()));
    let pilot = Autopilot::new(Side::Bottom, 0.15);

    for _ in 0..2 {
        session.start();
        let mut ticks = 0;
        while session.game().phase() == MatchPhase::Running && ticks < 500_000 {
            pilot.steer(session.game_mut());
            session.tick();
            ticks += 1;
        }
        if session.game().phase() != MatchPhase::Ended {
            // Endless rally; the board is still valid
            session.game_mut().exit_match();
        }
    }

    let board = session.leaderboard();
    assert!(board.len() <= 2);
    assert!(board.windows(2).all(|w| w[0].score >= w[1].score));
}

#[test]
fn test_saved_score_reaches_backup() {
    let (session, _seen) = session_with(short_game(5), MemoryStore::new());
    let mut session = session.with_backup(Box::new(MemoryStore::new()));
    session.start();
    play_out(&mut session);

    let human = session.game().score().get(Side::Bottom);
    assert_eq!(session.last_submission(), Some(Submission::Saved(human)));

    let raw = session
        .backup()
        .expect("backup attached")
        .load(LEADERBOARD_KEY)
        .expect("memory load")
        .expect("board backed up");
    let mut backend = MemoryStore::new();
    backend.save(LEADERBOARD_KEY, &raw).expect("memory save");
    let mirror = ScoreStore::new(backend);
    assert_eq!(mirror.load(), session.scores().load());
    assert_eq!(mirror.load()[0].name, "TESTER");
}

#[test]
fn test_attaching_backup_restores_board() {
    let mut remote = ScoreStore::new(MemoryStore::new());
    remote.submit("cloud", 7, day());

    let (session, _seen) = session_with(short_game(5), MemoryStore::new());
    let session = session.with_backup(Box::new(remote.into_backend()));

    let board = session.scores().load();
    assert_eq!(board.len(), 1);
    assert_eq!(board[0].name, "CLOUD");
}

#[test]
fn test_unsaved_game_is_not_backed_up() {
    let (session, _seen) = session_with(short_game(2), ReadOnlyStore);
    let mut session = session.with_backup(Box::new(MemoryStore::new()));
    session.start();
    play_out(&mut session);

    assert!(matches!(session.last_submission(), Some(Submission::SaveFailed(_))));
    let backed_up = session
        .backup()
        .expect("backup attached")
        .load(LEADERBOARD_KEY)
        .expect("memory load");
    assert_eq!(backed_up, None);
}
