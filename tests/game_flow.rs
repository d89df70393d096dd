// End-to-end learning loop through a SQLite file: play games, reopen the database,
// rehydrate and check that the learned counts steer the next game.

use forca_solver::core::{Letter, SecretWord};
use forca_solver::game::{GameSession, LearningBridge, play_turn};
use forca_solver::model::LearnedModel;
use forca_solver::persistence::{FrequencyStore, SqliteStore, StoreType};
use forca_solver::solver::{HeuristicStrategy, Solver};
use tempfile::tempdir;

fn play_to_completion(
    solver: &Solver<HeuristicStrategy>,
    model: &mut LearnedModel,
    word: &str,
) -> GameSession {
    let mut session = GameSession::started(SecretWord::new(word).unwrap());
    while play_turn(solver, &mut session, &mut model.table).is_some() {}
    session
}

fn letter(ch: char) -> Letter {
    Letter::new(ch).unwrap()
}

#[test]
fn learning_survives_restart() {
    let dir = tempdir().unwrap();
    let db = dir.path().join("state").join("learned.db");
    let solver = Solver::new(HeuristicStrategy::default());

    // First run: two games
    let expected = {
        let mut bridge = LearningBridge::new(StoreType::Sqlite(SqliteStore::open(&db).unwrap()));
        let mut model = bridge.rehydrate();
        assert_eq!(model, LearnedModel::default());

        for word in ["banana", "café"] {
            let session = play_to_completion(&solver, &mut model, word);
            assert!(session.is_complete());
            assert!(bridge.complete_game(&mut model, word).is_saved());
        }

        // 'a' at position 1: revealed once in banana, once in café, plus both completions
        assert_eq!(model.table.get(1, letter('a')), 4);
        model
    };

    // Second run: everything comes back from disk
    let bridge = LearningBridge::new(StoreType::Sqlite(SqliteStore::open(&db).unwrap()));
    let restored = bridge.rehydrate();
    assert_eq!(restored, expected);
    assert_eq!(
        restored.history.iter().collect::<Vec<_>>(),
        vec!["banana", "café"]
    );
    assert_eq!(bridge.store().records().unwrap().len(), 2);
}

#[test]
fn learned_counts_steer_the_first_guess() {
    let solver = Solver::new(HeuristicStrategy::default());
    let mut bridge = LearningBridge::new(SqliteStore::open_in_memory().unwrap());
    let mut model = LearnedModel::default();

    let fresh = GameSession::started(SecretWord::new("rir").unwrap());
    assert_eq!(solver.peek_guess(&fresh, &model.table), Some(letter('a')));

    for _ in 0..5 {
        play_to_completion(&solver, &mut model, "rir");
        bridge.complete_game(&mut model, "rir");
    }

    let next = GameSession::started(SecretWord::new("rua").unwrap());
    assert_eq!(solver.peek_guess(&next, &model.table), Some(letter('r')));
}

#[test]
fn ephemeral_store_forgets_on_restart() {
    use forca_solver::persistence::MemoryStore;

    let solver = Solver::new(HeuristicStrategy::default());
    {
        let mut bridge = LearningBridge::new(StoreType::Memory(MemoryStore::new()));
        let mut model = bridge.rehydrate();
        play_to_completion(&solver, &mut model, "sol");
        assert!(bridge.complete_game(&mut model, "sol").is_saved());
    }

    let bridge = LearningBridge::new(StoreType::Memory(MemoryStore::new()));
    assert_eq!(bridge.rehydrate(), LearnedModel::default());
}
