//! Board builder integration tests: inventory limits, orientation rules,
//! undo and finishing into a game.

use marble_drop::builder::{BoardBuilder, Placement};
use marble_drop::core::{
    Board, BuildError, Color, Extension, GameRng, GateDepth, GateId, GateType, LayerId,
    MarbleDepth, MarbleId, Orientation, RulesConfig,
};

fn l(raw: u8) -> LayerId {
    LayerId::new(raw).unwrap()
}

fn g(raw: u8) -> GateId {
    GateId::new(raw).unwrap()
}

fn m(raw: u8) -> MarbleId {
    MarbleId::new(raw).unwrap()
}

/// One color's full stock in placement order.
const STOCK_ORDER: [GateType; 6] = [
    GateType::Furthest,
    GateType::Mid,
    GateType::Near,
    GateType::Near,
    GateType::Solid,
    GateType::Solid,
];

/// Orientation used for every layer in these tests.
fn orientation_of(layer: LayerId) -> Orientation {
    if layer.raw() % 2 == 0 {
        Orientation::Vertical
    } else {
        Orientation::Horizontal
    }
}

/// Place all twelve gates: silver on layers 0-1, gold on layers 2-3.
fn place_all_gates(builder: &mut BoardBuilder) {
    let positions: Vec<_> = Board::gate_positions().collect();
    for (i, &(layer, gate)) in positions.iter().enumerate() {
        let owner = if i < 6 { Color::Silver } else { Color::Gold };
        builder
            .place_gate(
                layer,
                gate,
                orientation_of(layer),
                Extension::TopLeft,
                STOCK_ORDER[i % 6],
                owner,
            )
            .unwrap();
    }
}

// =============================================================================
// Inventory
// =============================================================================

/// After a color places its six gates, every further placement by it fails.
#[test]
fn test_exhausted_color_rejects_all_types() {
    let mut builder = BoardBuilder::new();
    let positions: Vec<_> = Board::gate_positions().take(6).collect();
    for (&(layer, gate), gate_type) in positions.iter().zip(STOCK_ORDER) {
        builder
            .place_gate(layer, gate, orientation_of(layer), Extension::TopLeft, gate_type, Color::Silver)
            .unwrap();
    }

    assert!(builder.available_types(Color::Silver).is_empty());
    for gate_type in GateType::ALL {
        assert_eq!(
            builder.place_gate(l(2), g(0), Orientation::Vertical, Extension::TopLeft, gate_type, Color::Silver),
            Err(BuildError::InventoryExhausted {
                color: Color::Silver,
                gate_type,
            })
        );
    }

    // Gold is unaffected
    assert_eq!(builder.available_types(Color::Gold), GateType::ALL.to_vec());
    assert!(builder
        .place_gate(l(2), g(0), Orientation::Vertical, Extension::TopLeft, GateType::Near, Color::Gold)
        .is_ok());
}

/// A failed placement leaves the builder untouched.
#[test]
fn test_rejected_placement_changes_nothing() {
    let mut builder = BoardBuilder::new();
    builder
        .place_gate(l(0), g(0), Orientation::Vertical, Extension::TopLeft, GateType::Mid, Color::Gold)
        .unwrap();
    let placements = builder.placements().to_vec();
    let inventory = builder.inventory().clone();

    let result = builder.place_gate(l(0), g(1), Orientation::Vertical, Extension::TopLeft, GateType::Mid, Color::Gold);

    assert!(matches!(result, Err(BuildError::InventoryExhausted { .. })));
    assert_eq!(builder.placements(), placements.as_slice());
    assert_eq!(builder.inventory(), &inventory);
    assert!(builder.gate(l(0), g(1)).is_none());
}

// =============================================================================
// Positions and Orientation
// =============================================================================

/// The first gate on a layer fixes its orientation.
#[test]
fn test_orientation_fixed_by_first_gate() {
    let mut builder = BoardBuilder::new();
    builder
        .place_gate(l(1), g(2), Orientation::Horizontal, Extension::BottomRight, GateType::Near, Color::Silver)
        .unwrap();

    let result = builder.place_gate(l(1), g(0), Orientation::Vertical, Extension::TopLeft, GateType::Near, Color::Gold);

    assert_eq!(
        result,
        Err(BuildError::OrientationMismatch {
            layer: l(1),
            fixed: Orientation::Horizontal,
            requested: Orientation::Vertical,
        })
    );
    // Other layers are free
    assert!(builder
        .place_gate(l(2), g(0), Orientation::Vertical, Extension::TopLeft, GateType::Near, Color::Gold)
        .is_ok());
}

/// A gate position can hold only one gate.
#[test]
fn test_gate_position_taken() {
    let mut builder = BoardBuilder::new();
    builder
        .place_gate(l(0), g(1), Orientation::Vertical, Extension::TopLeft, GateType::Solid, Color::Silver)
        .unwrap();

    assert_eq!(
        builder.place_gate(l(0), g(1), Orientation::Vertical, Extension::TopLeft, GateType::Solid, Color::Gold),
        Err(BuildError::GateAlreadyPlaced {
            layer: l(0),
            gate: g(1),
        })
    );
    assert_eq!(builder.remaining(Color::Gold, GateType::Solid), 2);
}

// =============================================================================
// Marbles
// =============================================================================

/// Marbles wait for all gates, then each takes a color once.
#[test]
fn test_marble_placement_order() {
    let mut builder = BoardBuilder::new();

    assert_eq!(
        builder.place_marble(m(0), Color::Gold),
        Err(BuildError::GatesIncomplete { remaining: 12 })
    );

    place_all_gates(&mut builder);
    assert_eq!(builder.remaining_gates(), 0);

    builder.place_marble(m(4), Color::Gold).unwrap();
    assert_eq!(builder.marble(m(4)), Some(Color::Gold));
    assert_eq!(
        builder.place_marble(m(4), Color::Silver),
        Err(BuildError::MarbleAlreadyPlaced(m(4)))
    );
    assert_eq!(builder.remaining_marbles(), 8);
}

// =============================================================================
// Undo
// =============================================================================

/// Undo walks back through marbles and gates, restoring stock.
#[test]
fn test_undo_restores_everything() {
    let mut builder = BoardBuilder::new();
    place_all_gates(&mut builder);
    builder.place_marble(m(0), Color::Silver).unwrap();

    assert_eq!(
        builder.undo(),
        Some(Placement::Marble {
            marble: m(0),
            color: Color::Silver,
        })
    );
    assert_eq!(builder.marble(m(0)), None);

    while builder.undo().is_some() {}

    assert_eq!(builder.remaining_gates(), 12);
    assert_eq!(builder.inventory(), BoardBuilder::new().inventory());
    for layer in LayerId::all() {
        assert_eq!(builder.orientation(layer), None);
    }
    assert_eq!(builder.undo(), None);
}

/// A layer keeps its orientation while any gate remains on it.
#[test]
fn test_undo_keeps_orientation_with_gates_left() {
    let mut builder = BoardBuilder::new();
    builder
        .place_gate(l(3), g(0), Orientation::Horizontal, Extension::TopLeft, GateType::Near, Color::Silver)
        .unwrap();
    builder
        .place_gate(l(3), g(1), Orientation::Horizontal, Extension::TopLeft, GateType::Near, Color::Silver)
        .unwrap();

    let undone = builder.undo().unwrap();
    assert_eq!(undone.color(), Color::Silver);
    assert_eq!(builder.orientation(l(3)), Some(Orientation::Horizontal));

    builder.undo();
    assert_eq!(builder.orientation(l(3)), None);
}

// =============================================================================
// Finishing
// =============================================================================

/// An incomplete builder cannot produce a board.
#[test]
fn test_snapshot_requires_completion() {
    let mut builder = BoardBuilder::new();
    assert_eq!(builder.snapshot(), Err(BuildError::GatesIncomplete { remaining: 12 }));

    place_all_gates(&mut builder);
    assert_eq!(builder.snapshot(), Err(BuildError::MarblesIncomplete { remaining: 9 }));
    assert!(builder.finish(RulesConfig::default()).is_err());
}

/// A finished board starts closed with every marble on top.
#[test]
fn test_snapshot_of_complete_builder() {
    let mut builder = BoardBuilder::new();
    place_all_gates(&mut builder);
    for marble in MarbleId::all() {
        let color = if marble.raw() % 2 == 0 { Color::Silver } else { Color::Gold };
        builder.place_marble(marble, color).unwrap();
    }
    assert!(builder.is_complete());

    let board = builder.snapshot().unwrap();

    for (layer, gate) in Board::gate_positions() {
        let info = board.gate(layer, gate);
        assert_eq!(info.depth, GateDepth::ZERO);
        assert_eq!(Some(info), builder.gate(layer, gate));
        assert_eq!(board.layer(layer).orientation, orientation_of(layer));
    }
    for marble in MarbleId::all() {
        assert_eq!(board.marble(marble).depth, MarbleDepth::TOP);
    }
    assert_eq!(board.marbles_in_play(Color::Silver), 5);
    assert_eq!(board.marbles_in_play(Color::Gold), 4);
}

/// Finishing settles the board and hands the turn to the builder's color at play.
#[test]
fn test_finish_starts_game() {
    let mut builder = BoardBuilder::new();
    place_all_gates(&mut builder);
    for marble in MarbleId::all() {
        builder.place_marble(marble, Color::Gold).unwrap();
    }

    let game = builder.finish(RulesConfig::default()).unwrap();

    // 21 placements starting with silver leave gold at play
    assert_eq!(game.color_at_play(), Color::Gold);
    assert!(game.history().is_empty());
    // Layer 0 gate 0 is a closed furthest gate on a vertical track: marble 6 falls
    assert_eq!(game.marble(m(6)).depth.raw(), 1);
}

// =============================================================================
// Build Turns
// =============================================================================

/// Each placement passes the turn, and `play_*` places for the color at play.
#[test]
fn test_placements_alternate() {
    let mut builder = BoardBuilder::new();
    assert_eq!(builder.color_at_play(), Color::Silver);

    builder
        .play_gate(l(0), g(0), Orientation::Vertical, Extension::TopLeft, GateType::Near)
        .unwrap();
    assert_eq!(builder.gate(l(0), g(0)).unwrap().owner, Color::Silver);
    assert_eq!(builder.color_at_play(), Color::Gold);

    builder
        .play_gate(l(0), g(1), Orientation::Vertical, Extension::TopLeft, GateType::Near)
        .unwrap();
    assert_eq!(builder.gate(l(0), g(1)).unwrap().owner, Color::Gold);
    assert_eq!(builder.color_at_play(), Color::Silver);
    assert_eq!(builder.remaining(Color::Silver, GateType::Near), 1);
    assert_eq!(builder.remaining(Color::Gold, GateType::Near), 1);
}

/// A rejected placement keeps the turn.
#[test]
fn test_rejected_placement_keeps_turn() {
    let mut builder = BoardBuilder::new();
    builder
        .play_gate(l(0), g(0), Orientation::Vertical, Extension::TopLeft, GateType::Mid)
        .unwrap();

    let result = builder.play_gate(l(0), g(1), Orientation::Horizontal, Extension::TopLeft, GateType::Mid);

    assert!(matches!(result, Err(BuildError::OrientationMismatch { .. })));
    assert_eq!(builder.color_at_play(), Color::Gold);
}

/// Undo gives the turn back to whoever made the placement.
#[test]
fn test_undo_restores_turn() {
    let mut builder = BoardBuilder::new();
    builder
        .play_gate(l(2), g(2), Orientation::Horizontal, Extension::BottomRight, GateType::Solid)
        .unwrap();
    builder
        .play_gate(l(2), g(0), Orientation::Horizontal, Extension::TopLeft, GateType::Furthest)
        .unwrap();
    assert_eq!(builder.color_at_play(), Color::Silver);

    let undone = builder.undo().unwrap();
    assert_eq!(undone.color(), Color::Gold);
    assert_eq!(builder.color_at_play(), Color::Gold);

    builder.undo();
    assert_eq!(builder.color_at_play(), Color::Silver);

    assert_eq!(builder.undo(), None);
    assert_eq!(builder.color_at_play(), Color::Silver);
}

/// A full turn-by-turn build gives each color six gates and gold the first move.
#[test]
fn test_turn_based_build_starts_gold() {
    let mut builder = BoardBuilder::new();
    for (i, (layer, gate)) in Board::gate_positions().enumerate() {
        builder
            .play_gate(layer, gate, orientation_of(layer), Extension::TopLeft, STOCK_ORDER[i / 2])
            .unwrap();
    }
    assert_eq!(builder.inventory().total(Color::Silver), 0);
    assert_eq!(builder.inventory().total(Color::Gold), 0);

    for marble in MarbleId::all() {
        builder.play_marble(marble).unwrap();
    }

    // Marbles alternate too, silver first after twelve gate turns
    assert_eq!(builder.marble(m(0)), Some(Color::Silver));
    assert_eq!(builder.marble(m(1)), Some(Color::Gold));
    assert_eq!(builder.placements().len(), 21);
    assert_eq!(builder.color_at_play(), Color::Gold);

    let game = builder.finish(RulesConfig::default()).unwrap();
    assert_eq!(game.color_at_play(), Color::Gold);
}

// =============================================================================
// Random Boards
// =============================================================================

/// The same seed always gives the same board.
#[test]
fn test_random_is_deterministic() {
    let a = BoardBuilder::random(99).unwrap();
    let b = BoardBuilder::random(99).unwrap();

    assert!(a.is_complete());
    assert_eq!(a.snapshot().unwrap(), b.snapshot().unwrap());
    assert_eq!(a.placements(), b.placements());
}

/// Random filling respects both inventories.
#[test]
fn test_random_uses_whole_stock() {
    let builder = BoardBuilder::random(5).unwrap();

    assert_eq!(builder.inventory().total(Color::Silver), 0);
    assert_eq!(builder.inventory().total(Color::Gold), 0);
    assert_eq!(builder.placements().len(), 21);
    assert_eq!(builder.color_at_play(), Color::Gold);
}

/// Random filling completes a partially built board without touching it.
#[test]
fn test_fill_random_keeps_existing_placements() {
    let mut builder = BoardBuilder::new();
    builder
        .place_gate(l(0), g(0), Orientation::Horizontal, Extension::BottomRight, GateType::Furthest, Color::Gold)
        .unwrap();

    builder.fill_random(&mut GameRng::new(11)).unwrap();

    assert!(builder.is_complete());
    assert_eq!(builder.orientation(l(0)), Some(Orientation::Horizontal));
    assert_eq!(builder.gate(l(0), g(0)).unwrap().gate_type, GateType::Furthest);
    assert_eq!(builder.remaining(Color::Gold, GateType::Furthest), 0);
}
