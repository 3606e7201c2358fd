use proptest::prelude::*;
use toruslife::{cell, Engine, TickOutcome};

#[derive(Debug, Clone)]
enum Op {
    Toggle(u32, u32),
    Tick,
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        1 => (0u32..64, 0u32..64).prop_map(|(row, col)| Op::Toggle(row, col)),
        3 => Just(Op::Tick),
    ]
}

proptest! {
    #[test]
    fn incremental_matches_exhaustive(
        rows in 1u32..14,
        cols in 1u32..14,
        seed in prop::collection::vec((0u32..64, 0u32..64), 0..60),
        ops in prop::collection::vec(arb_op(), 0..40),
    ) {
        let mut engine = Engine::new(rows, cols).unwrap();
        engine
            .load_preset(seed.iter().map(|&(row, col)| cell!(row % rows, col % cols)))
            .unwrap();

        for op in ops {
            match op {
                Op::Toggle(row, col) => {
                    engine.toggle_cell(row % rows, col % cols).unwrap();
                }
                Op::Tick => {
                    let expected = engine.grid().evolve_exhaustive();
                    let outcome = engine.tick();
                    prop_assert!(matches!(outcome, TickOutcome::Advanced(_)));
                    prop_assert_eq!(engine.grid(), &expected);
                }
            }
        }
    }

    #[test]
    fn rewind_restores_every_generation(
        seed in prop::collection::vec((0u32..10, 0u32..10), 0..40),
        ticks in 0usize..25,
        capacity in 1usize..30,
    ) {
        let mut engine =
            Engine::with_history(toruslife::Dims::new(10, 10).unwrap(), capacity).unwrap();
        engine
            .load_preset(seed.iter().map(|&(row, col)| cell!(row, col)))
            .unwrap();
        let mut states = vec![engine.grid().clone()];
        for _ in 0..ticks {
            engine.tick();
            states.push(engine.grid().clone());
        }

        let reachable = ticks.min(capacity);
        for back in 1..=reachable {
            prop_assert!(engine.untick().is_ok());
            prop_assert_eq!(engine.grid(), &states[ticks - back]);
        }
        prop_assert!(!engine.can_untick());
        for forward in (ticks - reachable + 1)..=ticks {
            prop_assert_eq!(engine.tick(), TickOutcome::Replayed);
            prop_assert_eq!(engine.grid(), &states[forward]);
        }
        prop_assert_eq!(engine.cursor(), 0);
    }
}
