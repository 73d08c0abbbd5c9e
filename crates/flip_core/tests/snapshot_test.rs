//! Tests for engine snapshots handed to renderers.

use flip_core::{Engine, EngineState, GridSize, Layout, Position};

fn engine() -> Engine {
    let grid = GridSize::new(2).unwrap();
    Engine::from_layout(Layout::from_faces(grid, [1, 2, 2, 1]).unwrap())
}

#[test]
fn test_hidden_faces_are_never_serialized() {
    let mut engine = engine();
    engine.select_tile(Position::new(0, 1));

    let json = serde_json::to_value(engine.state()).expect("Snapshot serializes");
    let tiles = json["tiles"].as_array().expect("Tiles array");

    assert_eq!(tiles.len(), 4);
    assert_eq!(tiles[1]["face"], 2);
    for index in [0, 2, 3] {
        assert!(tiles[index].get("face").is_none(), "tile {index} leaked its face");
    }
}

#[test]
fn test_snapshot_round_trips() {
    let mut engine = engine();
    engine.select_tile(Position::new(0, 0));
    engine.select_tile(Position::new(1, 1));

    let state = engine.state();
    let json = serde_json::to_string(&state).expect("Snapshot serializes");
    let decoded: EngineState = serde_json::from_str(&json).expect("Snapshot deserializes");
    assert_eq!(decoded, state);
}

#[test]
fn test_rows_follow_grid() {
    let engine = Engine::seeded(4, 5).unwrap();
    let state = engine.state();

    let rows: Vec<_> = state.rows().collect();
    assert_eq!(rows.len(), 4);
    for (row, tiles) in rows.iter().enumerate() {
        assert_eq!(tiles.len(), 4);
        assert!(tiles.iter().all(|tile| tile.position.row == row));
    }
}

#[test]
fn test_statistics() {
    let mut engine = engine();
    engine.select_tile(Position::new(0, 0));
    engine.select_tile(Position::new(1, 1));

    let state = engine.state();
    assert_eq!(state.pairs_found, 1);
    assert_eq!(state.total_pairs, 2);
    assert_eq!(state.tries_used(), 1);
}

#[test]
fn test_tries_used_never_underflows() {
    let mut json = serde_json::to_value(engine().state()).expect("Snapshot serializes");
    json["tries_remaining"] = serde_json::json!(10);

    let state: EngineState = serde_json::from_value(json).expect("Snapshot deserializes");
    assert_eq!(state.tries_used(), 0);
}
