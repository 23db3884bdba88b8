//! Siege mechanics through pure gameplay: tower formation on full
//! encirclement (with its same-scan follow-up build), one level of growth
//! per scan, and the end-of-turn scan running for the incoming player.

use rise_engine::{Color, GameConfig, GameEngine, GridLocation, Layout};

fn engine(layout: &str) -> GameEngine {
    let mut engine = GameEngine::new(GameConfig::default());
    engine.setup(&Layout::parse(layout));
    engine
}

/// Board coordinate of layout cell `(x, y)` for 5x5 layouts (offset 28).
fn loc(x: i32, y: i32) -> GridLocation {
    GridLocation::new(28 + x, 28 + y)
}

/// Six red workers ringing a claimed tile at layout (2,2), with a blue
/// worker in the corner so red's scans cannot end the game.
const RED_RING: &str = "\
.....
.RR..
.ROR.
.RR..
....B";

#[test]
fn test_surrounded_tile_forms_and_builds_in_one_scan() {
    let mut e = engine(RED_RING);
    let center = loc(2, 2);

    assert!(!e.board().has_tower(center));

    // Any completed action triggers the scan; claim a blank off the ring.
    // Formation produces a height-0 tower and the follow-up check in the
    // same visit builds it straight to height 1.
    assert!(e.apply_action(loc(0, 1), Color::Red).is_accepted());

    assert!(e.board().has_tower(center));
    assert_eq!(e.board().piece_color(center), Some(Color::Red));
    assert_eq!(e.board().tower_height(center), 1);
    assert_eq!(e.tower_count(Color::Red), 1);
}

#[test]
fn test_tower_grows_one_level_per_scan() {
    let mut e = engine(RED_RING);
    let center = loc(2, 2);

    assert!(e.apply_action(loc(0, 1), Color::Red).is_accepted());
    assert_eq!(e.board().tower_height(center), 1);

    // Second completed action: the standing tower gains exactly one level.
    assert!(e.apply_action(loc(0, 3), Color::Red).is_accepted());
    assert_eq!(e.board().tower_height(center), 2);
    assert_eq!(e.tower_count(Color::Red), 2);

    // Red's turn is over; the end-of-turn scan ran for blue and left the
    // red tower alone.
    assert_eq!(e.current_player(), Color::Blue);
    assert_eq!(e.board().tower_height(center), 2);
}

#[test]
fn test_end_turn_scan_acts_for_incoming_player() {
    // Blue ring around a claimed tile; red workers far away give red two
    // filler actions.
    let mut e = engine("\
....R
.BB..
.BOB.
.BB..
R....");
    let center = loc(2, 2);

    // Red's own scans do nothing for the blue ring.
    assert!(e.apply_action(GridLocation::new(33, 28), Color::Red).is_accepted());
    assert!(!e.board().has_tower(center));

    // Red's second action ends the turn; the end-of-turn scan runs with
    // blue as the acting color and forms (then builds) blue's tower.
    assert!(e.apply_action(GridLocation::new(34, 28), Color::Red).is_accepted());
    assert_eq!(e.current_player(), Color::Blue);
    assert!(e.board().has_tower(center));
    assert_eq!(e.board().piece_color(center), Some(Color::Blue));
    assert_eq!(e.board().tower_height(center), 1);
    assert_eq!(e.tower_count(Color::Blue), 1);
}
