use toruslife::{cell, Dims, Engine, EngineError, Grid, TickOutcome};

fn r_pentomino(capacity: usize) -> Engine {
    let mut engine = Engine::with_history(Dims::new(32, 32).unwrap(), capacity).unwrap();
    assert_eq!(engine.load_named("r-pentomino"), Ok(true));
    engine
}

#[test]
fn undo_then_redo_round_trips() {
    let mut engine = r_pentomino(100);
    let mut states: Vec<Grid> = vec![engine.grid().clone()];
    for _ in 0..30 {
        engine.tick();
        states.push(engine.grid().clone());
    }
    let computed = engine.stats();

    for expected in states.iter().rev().skip(1) {
        engine.untick().unwrap();
        assert_eq!(engine.grid(), expected);
    }
    assert_eq!(engine.cursor(), -30);
    assert_eq!(engine.generation(), 0);
    assert!(!engine.can_untick());

    for expected in states.iter().skip(1) {
        assert_eq!(engine.tick(), TickOutcome::Replayed);
        assert_eq!(engine.grid(), expected);
    }
    assert_eq!(engine.cursor(), 0);
    assert_eq!(engine.generation(), 30);
    assert_eq!(engine.stats().computed_ticks, computed.computed_ticks);
    assert_eq!(engine.stats().cells_evaluated, computed.cells_evaluated);
    assert_eq!(engine.stats().replayed_ticks, 30);

    // past the known future the engine computes again, from the right place
    let next = engine.grid().evolve_exhaustive();
    assert!(matches!(engine.tick(), TickOutcome::Advanced(_)));
    assert_eq!(engine.grid(), &next);
}

#[test]
fn partial_rewind_then_continue() {
    let mut engine = r_pentomino(100);
    for _ in 0..10 {
        engine.tick();
    }
    let tenth = engine.grid().clone();
    for _ in 0..4 {
        engine.untick().unwrap();
    }
    for _ in 0..2 {
        engine.tick();
    }
    assert_eq!(engine.cursor(), -2);
    for _ in 0..2 {
        engine.tick();
    }
    assert_eq!(engine.grid(), &tenth);
    assert_eq!(engine.history_len(), 10);
}

#[test]
fn history_is_bounded() {
    let mut engine = r_pentomino(5);
    for _ in 0..12 {
        engine.tick();
    }
    assert_eq!(engine.history_len(), 5);
    for _ in 0..5 {
        assert!(engine.can_untick());
        engine.untick().unwrap();
    }
    assert!(!engine.can_untick());
    let before = engine.grid().clone();
    assert_eq!(engine.untick(), Err(EngineError::NothingToUntick));
    assert_eq!(engine.grid(), &before);
    assert_eq!(engine.cursor(), -5);
}

#[test]
fn default_capacity_is_one_hundred() {
    let mut engine = Engine::new(16, 16).unwrap();
    engine.toggle_cell(3, 3).unwrap();
    for _ in 0..150 {
        engine.tick();
    }
    assert_eq!(engine.history_len(), 100);
    assert_eq!(engine.history_capacity(), 100);
}

#[test]
fn zero_capacity_is_rejected() {
    assert_eq!(
        Engine::with_history(Dims::new(4, 4).unwrap(), 0).unwrap_err(),
        EngineError::ZeroCapacity
    );
}

#[test]
fn toggling_in_the_past_leaves_history_to_the_caller() {
    let mut engine = r_pentomino(100);
    for _ in 0..6 {
        engine.tick();
    }
    engine.untick().unwrap();
    engine.untick().unwrap();
    engine.toggle_cell(0, 0).unwrap();
    assert_eq!(engine.cursor(), -2);
    assert_eq!(engine.history_len(), 6);

    // replaying overwrites the edit with the recorded generation
    assert_eq!(engine.tick(), TickOutcome::Replayed);
    assert!(!engine.grid().get(cell!(0, 0)));
    assert_eq!(engine.cursor(), -1);
}

#[test]
fn discarding_the_future_forks_history() {
    let mut engine = r_pentomino(100);
    for _ in 0..6 {
        engine.tick();
    }
    engine.untick().unwrap();
    engine.untick().unwrap();
    let fork = engine.grid().clone();
    assert_eq!(engine.discard_future(), 2);
    engine.toggle_cell(0, 0).unwrap();
    assert_eq!(engine.cursor(), 0);
    assert_eq!(engine.history_len(), 4);

    let mut expected = fork;
    expected.set(cell!(0, 0), true);
    let expected = expected.evolve_exhaustive();
    assert!(matches!(engine.tick(), TickOutcome::Advanced(_)));
    assert_eq!(engine.grid(), &expected);
}

#[test]
fn loading_clears_history() {
    let mut engine = r_pentomino(100);
    for _ in 0..3 {
        engine.tick();
    }
    engine.untick().unwrap();
    engine.load_named("glider").unwrap();
    assert_eq!(engine.cursor(), 0);
    assert_eq!(engine.history_len(), 0);
    assert!(!engine.can_untick());
}
