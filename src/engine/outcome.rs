//! Action outcomes: what an action did, or why it was refused.
//!
//! Every call to `GameEngine::apply_action` returns an `ActionOutcome`.
//! Accepted outcomes carry the coordinates they affected so a caller can
//! drive animation without re-deriving them from board diffs. Rejections
//! are a closed set of typed reasons; an illegal move is a regular value,
//! never a panic.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use crate::core::{Color, GridLocation};

/// A successfully applied action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameUpdate {
    /// A blank cell was claimed from the shared tile supply.
    TileAdded { at: GridLocation },
    /// A worker entered play from the owner's pool.
    WorkerAdded { at: GridLocation, color: Color },
    /// A worker was selected (or a sacrifice pair begun).
    WorkerSelected { at: GridLocation },
    /// A selection or pending sacrifice was cancelled.
    WorkerUnselected { at: GridLocation },
    /// The selected worker stepped to an adjacent claimed tile.
    WorkerMoved { from: GridLocation, to: GridLocation },
    /// The selected worker jumped a colinear enemy worker, capturing it.
    WorkerJump {
        from: GridLocation,
        to: GridLocation,
        captured: GridLocation,
    },
    /// A tower lost one level and still stands at the given height.
    TowerReduced { at: GridLocation, height: u32 },
    /// A height-0 tower was demolished down to a claimed tile.
    TowerDemolished { at: GridLocation },
    /// Two workers were sacrificed to place a new one anywhere.
    SacrificeAdd {
        at: GridLocation,
        pair: [GridLocation; 2],
    },
    /// Two workers were sacrificed to remove an enemy worker.
    SacrificeRemove {
        at: GridLocation,
        pair: [GridLocation; 2],
    },
}

impl GameUpdate {
    /// Every coordinate this update touched, destination first.
    #[must_use]
    pub fn locations(&self) -> SmallVec<[GridLocation; 3]> {
        match *self {
            GameUpdate::TileAdded { at }
            | GameUpdate::WorkerAdded { at, .. }
            | GameUpdate::WorkerSelected { at }
            | GameUpdate::WorkerUnselected { at }
            | GameUpdate::TowerReduced { at, .. }
            | GameUpdate::TowerDemolished { at } => SmallVec::from_slice(&[at]),
            GameUpdate::WorkerMoved { from, to } => SmallVec::from_slice(&[to, from]),
            GameUpdate::WorkerJump { from, to, captured } => {
                SmallVec::from_slice(&[to, from, captured])
            }
            GameUpdate::SacrificeAdd { at, pair } | GameUpdate::SacrificeRemove { at, pair } => {
                SmallVec::from_slice(&[at, pair[0], pair[1]])
            }
        }
    }
}

/// Why an action was refused. A closed set; nothing here is fatal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum Rejection {
    #[error("not your turn")]
    WrongTurn,
    #[error("invalid location")]
    InvalidLocation,
    #[error("cannot add a tile here")]
    CannotAddTileHere,
    #[error("cannot add a worker here")]
    CannotAddWorkerHere,
    #[error("cannot demolish this tower")]
    CannotDemolishTower,
    #[error("invalid move")]
    InvalidMoveNothing,
    #[error("invalid move with a worker selected")]
    InvalidMoveSelected,
    #[error("invalid move while sacrificing")]
    InvalidMoveSacrifice,
    #[error("the game is over")]
    GameOver,
}

/// Result of one `apply_action` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionOutcome {
    Accepted(GameUpdate),
    Rejected(Rejection),
}

impl ActionOutcome {
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, ActionOutcome::Accepted(_))
    }

    #[must_use]
    pub fn is_rejected(&self) -> bool {
        matches!(self, ActionOutcome::Rejected(_))
    }

    /// The update, if the action was accepted.
    #[must_use]
    pub fn update(&self) -> Option<&GameUpdate> {
        match self {
            ActionOutcome::Accepted(update) => Some(update),
            ActionOutcome::Rejected(_) => None,
        }
    }

    /// The rejection reason, if the action was refused.
    #[must_use]
    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            ActionOutcome::Accepted(_) => None,
            ActionOutcome::Rejected(reason) => Some(*reason),
        }
    }
}

impl From<GameUpdate> for ActionOutcome {
    fn from(update: GameUpdate) -> Self {
        ActionOutcome::Accepted(update)
    }
}

impl From<Rejection> for ActionOutcome {
    fn from(reason: Rejection) -> Self {
        ActionOutcome::Rejected(reason)
    }
}

/// How a finished game was won.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VictoryKind {
    /// The loser has no workers left in play.
    Elimination,
}

/// Whether the game is still running.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Playing,
    Done { winner: Color, victory: VictoryKind },
}

impl GameStatus {
    #[must_use]
    pub fn is_done(&self) -> bool {
        matches!(self, GameStatus::Done { .. })
    }

    /// The winner, once the game is done.
    #[must_use]
    pub fn winner(&self) -> Option<Color> {
        match self {
            GameStatus::Playing => None,
            GameStatus::Done { winner, .. } => Some(*winner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locations_destination_first() {
        let update = GameUpdate::WorkerJump {
            from: GridLocation::new(1, 1),
            to: GridLocation::new(3, 1),
            captured: GridLocation::new(2, 1),
        };
        let locs = update.locations();
        assert_eq!(locs[0], GridLocation::new(3, 1));
        assert_eq!(locs.len(), 3);
    }

    #[test]
    fn test_sacrifice_locations_include_pair() {
        let update = GameUpdate::SacrificeAdd {
            at: GridLocation::new(5, 5),
            pair: [GridLocation::new(1, 1), GridLocation::new(2, 2)],
        };
        assert_eq!(update.locations().len(), 3);
    }

    #[test]
    fn test_outcome_accessors() {
        let accepted: ActionOutcome = GameUpdate::TileAdded {
            at: GridLocation::new(0, 0),
        }
        .into();
        assert!(accepted.is_accepted());
        assert!(accepted.update().is_some());
        assert_eq!(accepted.rejection(), None);

        let rejected: ActionOutcome = Rejection::WrongTurn.into();
        assert!(rejected.is_rejected());
        assert_eq!(rejected.rejection(), Some(Rejection::WrongTurn));
        assert!(rejected.update().is_none());
    }

    #[test]
    fn test_rejection_messages() {
        assert_eq!(Rejection::WrongTurn.to_string(), "not your turn");
        assert_eq!(Rejection::GameOver.to_string(), "the game is over");
    }

    #[test]
    fn test_status_winner() {
        assert_eq!(GameStatus::Playing.winner(), None);
        let done = GameStatus::Done {
            winner: Color::Red,
            victory: VictoryKind::Elimination,
        };
        assert!(done.is_done());
        assert_eq!(done.winner(), Some(Color::Red));
    }

    #[test]
    fn test_outcome_serialization() {
        let outcome: ActionOutcome = GameUpdate::WorkerMoved {
            from: GridLocation::new(1, 2),
            to: GridLocation::new(2, 2),
        }
        .into();
        let json = serde_json::to_string(&outcome).unwrap();
        let back: ActionOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(outcome, back);
    }
}
