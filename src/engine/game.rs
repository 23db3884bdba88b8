//! The rules engine: turn/action state machine, siege scan, undo, victory.
//!
//! ## State machine
//!
//! Each turn the acting player submits coordinates through `apply_action`,
//! the single mutator. Dispatch depends on the action state:
//!
//! - `Idle`: claim a blank cell, place a worker, demolish an own tower, or
//!   select a worker.
//! - `WorkerSelected`: unselect, begin a sacrifice by selecting a second
//!   worker, step to an adjacent claimed tile, or jump a colinear enemy
//!   worker.
//! - `Sacrificing`: spend the selected pair to place a worker anywhere or
//!   remove an enemy worker, or cancel back to a single selection.
//!
//! Selections and the sacrifice pair are held as coordinates into board
//! storage, never as references; the board stays single-owner.
//!
//! ## Completion
//!
//! Every state-consuming action runs the siege scan (tower formation,
//! growth, and demolition by encirclement), then decrements the move
//! budget. An exhausted budget ends the turn, which re-runs the scan for
//! the incoming player and clears the undo stack; undo is intra-turn only.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::layout::{Layout, BLUE_WORKER, CLAIMED_TILE, RED_WORKER};
use super::outcome::{ActionOutcome, GameStatus, GameUpdate, Rejection, VictoryKind};
use crate::board::Board;
use crate::core::{Color, GameConfig, GridLocation, PerPlayer, DIRECTION_COUNT};

/// Where the turn state machine is between actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
enum ActionState {
    Idle,
    WorkerSelected { at: GridLocation },
    Sacrificing { pair: [GridLocation; 2] },
}

/// One undo-stack entry. Board clones are O(1) structural shares.
#[derive(Clone)]
struct Snapshot {
    board: Board,
    action_state: ActionState,
}

/// The game engine. Constructed once, re-initialized per game via `setup`.
pub struct GameEngine {
    config: GameConfig,
    board: Board,
    current_player: Color,
    moves_remaining: u32,
    action_state: ActionState,
    available_workers: PerPlayer<u32>,
    available_tiles: u32,
    tower_counts: PerPlayer<u32>,
    undo_stack: Vec<Snapshot>,
    status: GameStatus,
}

impl GameEngine {
    /// Create an engine with an empty board. Call `setup` to start a game.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self {
            board: Board::new(config.board_size),
            current_player: Color::Red,
            moves_remaining: config.moves_per_turn,
            action_state: ActionState::Idle,
            available_workers: PerPlayer::with_value(config.worker_count),
            available_tiles: config.tile_count,
            tower_counts: PerPlayer::with_value(0),
            undo_stack: Vec::new(),
            status: GameStatus::Playing,
            config,
        }
    }

    /// (Re)initialize to a fresh game from a starting layout.
    ///
    /// The layout is centered on the board with both offsets rounded down
    /// to even, so layout rows keep their hex parity. Each placed cell
    /// consumes from the supplies: a worker cell costs one tile and one
    /// worker of its color, a bare tile cell costs one tile.
    pub fn setup(&mut self, layout: &Layout) {
        self.board.reset();
        self.current_player = Color::Red;
        self.moves_remaining = self.config.moves_per_turn;
        self.action_state = ActionState::Idle;
        self.available_workers = PerPlayer::with_value(self.config.worker_count);
        self.available_tiles = self.config.tile_count;
        self.tower_counts = PerPlayer::with_value(0);
        self.undo_stack.clear();
        self.status = GameStatus::Playing;

        self.build_layout(layout);
        debug!(
            width = layout.width(),
            height = layout.height(),
            "game set up"
        );
    }

    fn build_layout(&mut self, layout: &Layout) {
        let mut offset_x = (self.config.board_size / 2).saturating_sub(layout.width() / 2);
        let mut offset_y = (self.config.board_size / 2).saturating_sub(layout.height() / 2);
        if offset_x % 2 == 1 {
            offset_x -= 1;
        }
        if offset_y % 2 == 1 {
            offset_y -= 1;
        }

        for y in 0..layout.height() {
            for x in 0..layout.width() {
                let at = GridLocation::new((offset_x + x) as i32, (offset_y + y) as i32);
                match layout.cell(x, y) {
                    RED_WORKER => self.place_starting_worker(at, Color::Red),
                    BLUE_WORKER => self.place_starting_worker(at, Color::Blue),
                    CLAIMED_TILE => {
                        if let Some(tile) = self.board.tile_mut(at) {
                            tile.set_claimed_tile();
                            self.available_tiles = self.available_tiles.saturating_sub(1);
                        }
                    }
                    _ => {}
                }
            }
        }
    }

    fn place_starting_worker(&mut self, at: GridLocation, color: Color) {
        if let Some(tile) = self.board.tile_mut(at) {
            tile.set_worker(color);
            self.available_tiles = self.available_tiles.saturating_sub(1);
            self.available_workers[color] = self.available_workers[color].saturating_sub(1);
        }
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The board, for per-frame state reads.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn current_player(&self) -> Color {
        self.current_player
    }

    #[must_use]
    pub fn moves_remaining(&self) -> u32 {
        self.moves_remaining
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn available_tiles(&self) -> u32 {
        self.available_tiles
    }

    #[must_use]
    pub fn available_workers(&self, color: Color) -> u32 {
        self.available_workers[color]
    }

    #[must_use]
    pub fn tower_count(&self, color: Color) -> u32 {
        self.tower_counts[color]
    }

    #[must_use]
    pub fn is_selected_worker(&self, at: GridLocation) -> bool {
        self.board.is_selected_worker(at)
    }

    // === Actions ===

    /// Apply one player action at a coordinate.
    ///
    /// A snapshot is pushed before validation, so rejected actions can be
    /// undone to an identical board (see the undo contract). Once the game
    /// is done every call is rejected without side effects.
    pub fn apply_action(&mut self, at: GridLocation, player: Color) -> ActionOutcome {
        if self.status.is_done() {
            return Rejection::GameOver.into();
        }

        self.undo_stack.push(self.snapshot());

        if player != self.current_player {
            return Rejection::WrongTurn.into();
        }
        if !self.board.in_range(at) {
            return Rejection::InvalidLocation.into();
        }

        match self.action_state {
            ActionState::Idle => self.action_from_idle(at, player),
            ActionState::WorkerSelected { at: selected } => {
                self.action_with_selection(at, selected, player)
            }
            ActionState::Sacrificing { pair } => self.action_while_sacrificing(at, pair, player),
        }
    }

    /// Undo the most recent action this turn. Returns false on an empty
    /// stack. The stack is cleared whenever a turn ends.
    pub fn undo_last_action(&mut self) -> bool {
        match self.undo_stack.pop() {
            Some(snapshot) => {
                self.board = snapshot.board;
                self.action_state = snapshot.action_state;
                debug!("action undone");
                true
            }
            None => {
                debug!("nothing to undo");
                false
            }
        }
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board.clone(),
            action_state: self.action_state,
        }
    }

    // === Idle: claim, place, demolish, select ===

    fn action_from_idle(&mut self, at: GridLocation, player: Color) -> ActionOutcome {
        let Some(tile) = self.board.tile_at(at).copied() else {
            return Rejection::InvalidLocation.into();
        };

        if tile.is_blank() && self.available_tiles > 0 {
            return if self.board.has_neighbor_tile(at) {
                if let Some(t) = self.board.tile_mut(at) {
                    t.set_claimed_tile();
                }
                self.available_tiles -= 1;
                self.move_made(player);
                GameUpdate::TileAdded { at }.into()
            } else {
                Rejection::CannotAddTileHere.into()
            };
        }

        if tile.is_claimed_tile() && self.available_workers[player] > 0 {
            return if self.board.has_neighbor_worker(at, player) {
                if let Some(t) = self.board.tile_mut(at) {
                    t.set_worker(player);
                }
                self.available_workers[player] -= 1;
                self.move_made(player);
                GameUpdate::WorkerAdded { at, color: player }.into()
            } else {
                Rejection::CannotAddWorkerHere.into()
            };
        }

        if tile.is_tower_of(player) {
            let demolished = match self.board.tile_mut(at) {
                Some(t) => t.demolish_tower(),
                None => false,
            };
            return if demolished {
                self.tower_counts[player] = self.tower_counts[player].saturating_sub(1);
                self.move_made(player);
                if self.board.has_tower(at) {
                    GameUpdate::TowerReduced {
                        at,
                        height: self.board.tower_height(at),
                    }
                    .into()
                } else {
                    GameUpdate::TowerDemolished { at }.into()
                }
            } else {
                Rejection::CannotDemolishTower.into()
            };
        }

        if tile.is_worker_of(player) {
            if let Some(t) = self.board.tile_mut(at) {
                t.select();
            }
            self.action_state = ActionState::WorkerSelected { at };
            return GameUpdate::WorkerSelected { at }.into();
        }

        Rejection::InvalidMoveNothing.into()
    }

    // === WorkerSelected: unselect, sacrifice, move, jump ===

    fn action_with_selection(
        &mut self,
        at: GridLocation,
        selected: GridLocation,
        player: Color,
    ) -> ActionOutcome {
        if at == selected {
            self.unselect(selected);
            self.action_state = ActionState::Idle;
            return GameUpdate::WorkerUnselected { at }.into();
        }

        let Some(tile) = self.board.tile_at(at).copied() else {
            return Rejection::InvalidLocation.into();
        };

        if tile.is_worker_of(player) {
            if let Some(t) = self.board.tile_mut(at) {
                t.select();
            }
            self.action_state = ActionState::Sacrificing {
                pair: [selected, at],
            };
            return GameUpdate::WorkerSelected { at }.into();
        }

        if tile.is_claimed_tile() && at.is_adjacent_to(selected) {
            if let Some(t) = self.board.tile_mut(at) {
                t.set_worker(player);
            }
            self.clear_to_claimed(selected);
            self.move_made(player);
            return GameUpdate::WorkerMoved {
                from: selected,
                to: at,
            }
            .into();
        }

        if tile.is_claimed_tile() {
            // Jump: origin, enemy worker, and destination colinear along one
            // hex direction, with the enemy strictly between. Directions are
            // tried in a fixed order; the first match wins.
            for direction in 0..DIRECTION_COUNT {
                let over = at.neighbor(direction);
                if self.board.is_worker_of(over, player.opponent())
                    && over.neighbor(direction) == selected
                {
                    if let Some(t) = self.board.tile_mut(at) {
                        t.set_worker(player);
                    }
                    self.clear_to_claimed(over);
                    self.available_workers[player.opponent()] += 1;
                    self.clear_to_claimed(selected);
                    self.move_made(player);
                    return GameUpdate::WorkerJump {
                        from: selected,
                        to: at,
                        captured: over,
                    }
                    .into();
                }
            }
        }

        Rejection::InvalidMoveSelected.into()
    }

    // === Sacrificing: place anywhere, remove enemy, cancel ===

    fn action_while_sacrificing(
        &mut self,
        at: GridLocation,
        pair: [GridLocation; 2],
        player: Color,
    ) -> ActionOutcome {
        let Some(tile) = self.board.tile_at(at).copied() else {
            return Rejection::InvalidLocation.into();
        };

        // A sacrifice needs more than two workers already committed, or it
        // would be suicide by elimination.
        let committed = self
            .config
            .worker_count
            .saturating_sub(self.available_workers[player]);
        let permitted = committed > 2;

        if tile.is_claimed_tile() && permitted {
            self.consume_sacrifice_pair(pair, player);
            if let Some(t) = self.board.tile_mut(at) {
                t.set_worker(player);
            }
            self.available_workers[player] -= 1;
            self.move_made(player);
            return GameUpdate::SacrificeAdd { at, pair }.into();
        }

        if tile.is_worker_of(player.opponent()) && permitted {
            self.consume_sacrifice_pair(pair, player);
            self.clear_to_claimed(at);
            self.available_workers[player.opponent()] += 1;
            self.move_made(player);
            return GameUpdate::SacrificeRemove { at, pair }.into();
        }

        if at == pair[0] || at == pair[1] {
            self.unselect(at);
            let other = if at == pair[0] { pair[1] } else { pair[0] };
            self.action_state = ActionState::WorkerSelected { at: other };
            return GameUpdate::WorkerUnselected { at }.into();
        }

        Rejection::InvalidMoveSacrifice.into()
    }

    /// Both sacrificed workers return to claimed tiles and to the pool.
    fn consume_sacrifice_pair(&mut self, pair: [GridLocation; 2], player: Color) {
        for at in pair {
            self.clear_to_claimed(at);
        }
        self.available_workers[player] += 2;
    }

    fn clear_to_claimed(&mut self, at: GridLocation) {
        if let Some(t) = self.board.tile_mut(at) {
            t.set_claimed_tile();
            t.unselect();
        }
    }

    fn unselect(&mut self, at: GridLocation) {
        if let Some(t) = self.board.tile_mut(at) {
            t.unselect();
        }
    }

    // === Completion, end of turn, victory ===

    /// Runs after every state-consuming action.
    fn move_made(&mut self, player: Color) {
        self.run_siege_scan(player);
        self.action_state = ActionState::Idle;
        self.moves_remaining = self.moves_remaining.saturating_sub(1);
        if self.moves_remaining == 0 {
            self.end_turn();
        } else {
            self.check_victory();
        }
    }

    /// One full-board pass for the acting color. Every branch requires the
    /// cell to be fully surrounded by the actor's workers:
    ///
    /// - enemy towers lose a level (removing a height-0 tower entirely);
    /// - claimed tiles become towers of the actor at height 0, and are
    ///   *not* marked processed, so the growth check below re-fires on
    ///   them in the same visit;
    /// - towers of the actor gain exactly one level per scan. A tower
    ///   formed in this visit therefore leaves the scan at height 1.
    fn run_siege_scan(&mut self, actor: Color) {
        let size = self.board.size() as i32;
        let opponent = actor.opponent();
        let mut processed: FxHashSet<GridLocation> = FxHashSet::default();

        for y in 0..size {
            for x in 0..size {
                let at = GridLocation::new(x, y);
                if processed.contains(&at) {
                    continue;
                }
                if !self.board.is_surrounded_by(at, actor) {
                    continue;
                }

                let besieged = self
                    .board
                    .tile_at(at)
                    .is_some_and(|t| t.is_tower_of(opponent));
                if besieged {
                    if let Some(t) = self.board.tile_mut(at) {
                        t.demolish_tower();
                    }
                    self.tower_counts[opponent] = self.tower_counts[opponent].saturating_sub(1);
                    processed.insert(at);
                    continue;
                }

                if self.board.tile_at(at).is_some_and(|t| t.is_claimed_tile()) {
                    if let Some(t) = self.board.tile_mut(at) {
                        t.set_tower(actor, 0);
                    }
                }

                // Re-read: a tower formed just above grows here too.
                if self.board.tile_at(at).is_some_and(|t| t.is_tower_of(actor)) {
                    if let Some(t) = self.board.tile_mut(at) {
                        t.build_tower();
                    }
                    self.tower_counts[actor] += 1;
                    processed.insert(at);
                }
            }
        }
    }

    fn end_turn(&mut self) {
        self.current_player = self.current_player.opponent();
        self.moves_remaining = self.config.moves_per_turn;
        self.undo_stack.clear();
        debug!(player = %self.current_player, "turn started");

        self.run_siege_scan(self.current_player);
        self.check_victory();
    }

    /// Elimination: a player whose available pool is back to the full
    /// worker count has nothing in play and loses.
    fn check_victory(&mut self) {
        if self.status.is_done() {
            return;
        }
        let me = self.current_player;
        if self.available_workers[me.opponent()] == self.config.worker_count {
            self.game_won(me);
        } else if self.available_workers[me] == self.config.worker_count {
            self.game_won(me.opponent());
        }
    }

    fn game_won(&mut self, winner: Color) {
        debug!(winner = %winner, "game won by elimination");
        self.status = GameStatus::Done {
            winner,
            victory: VictoryKind::Elimination,
        };
        // The result is final; `setup` is the only way back to play.
        self.undo_stack.clear();
    }
}
