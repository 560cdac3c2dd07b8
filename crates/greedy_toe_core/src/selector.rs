//! Greedy heuristic opponent.
//!
//! The selector is deliberately shallow: it takes a win if one is on the
//! board, blocks the other player's win, and otherwise picks a square from
//! a randomly ordered set of positional groups. It does not search.

use crate::rules::has_won;
use crate::types::{Board, Player, Position, Square};
use derive_more::{Display, Error};
use rand::Rng;
use rand::seq::SliceRandom;
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// The selector was asked to move on a full board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("No move available: the board is full")]
pub struct NoMoveAvailable;

/// Positional preference groups used once no tactical move exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriorityGroup {
    /// Squares 0, 2, 6, 8.
    Corners,
    /// Square 4.
    Center,
    /// Squares 1, 3, 5, 7.
    Edges,
}

impl PriorityGroup {
    /// The groups in their unshuffled order.
    pub const ALL: [PriorityGroup; 3] = [
        PriorityGroup::Corners,
        PriorityGroup::Center,
        PriorityGroup::Edges,
    ];

    /// Squares in this group, ascending.
    pub fn positions(self) -> &'static [Position] {
        match self {
            PriorityGroup::Corners => &[
                Position::TopLeft,
                Position::TopRight,
                Position::BottomLeft,
                Position::BottomRight,
            ],
            PriorityGroup::Center => &[Position::Center],
            PriorityGroup::Edges => &[
                Position::TopCenter,
                Position::MiddleLeft,
                Position::MiddleRight,
                Position::BottomCenter,
            ],
        }
    }
}

/// Which rule produced a selected move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// Completes a line for the mover.
    WinNow,
    /// Occupies the square that would complete the other player's line.
    Block,
    /// First free square from the shuffled positional groups.
    Positional(PriorityGroup),
}

/// Picks the next move for `mover` on `board`.
///
/// The board is copied before any hypothetical placement, so the
/// caller's snapshot is never touched. Randomness is only drawn when
/// neither a winning nor a blocking move exists.
///
/// # Errors
///
/// Returns [`NoMoveAvailable`] if every square is occupied.
#[instrument(skip(board, rng))]
pub fn select_move<R: Rng + ?Sized>(
    board: &Board,
    mover: Player,
    rng: &mut R,
) -> Result<Position, NoMoveAvailable> {
    select_move_with_tier(board, mover, rng).map(|(pos, _)| pos)
}

/// Like [`select_move`], but also reports which rule chose the move.
pub fn select_move_with_tier<R: Rng + ?Sized>(
    board: &Board,
    mover: Player,
    rng: &mut R,
) -> Result<(Position, Tier), NoMoveAvailable> {
    let mut scratch = *board;

    if let Some(pos) = completing_square(&mut scratch, mover) {
        debug!(position = %pos, "Taking winning square");
        return Ok((pos, Tier::WinNow));
    }

    if let Some(pos) = completing_square(&mut scratch, mover.opponent()) {
        debug!(position = %pos, "Blocking opponent line");
        return Ok((pos, Tier::Block));
    }

    let mut groups = PriorityGroup::ALL;
    groups.shuffle(rng);
    debug!(?groups, "Scanning positional groups");

    groups
        .into_iter()
        .flat_map(|group| group.positions().iter().map(move |pos| (*pos, group)))
        .find(|(pos, _)| board.is_empty(*pos))
        .map(|(pos, group)| (pos, Tier::Positional(group)))
        .ok_or(NoMoveAvailable)
}

/// First empty square, in ascending order, that completes a line for `player`.
///
/// Each hypothetical placement on `scratch` is undone before the next one.
fn completing_square(scratch: &mut Board, player: Player) -> Option<Position> {
    for pos in Position::iter() {
        if !scratch.is_empty(pos) {
            continue;
        }
        scratch.set(pos, Square::Occupied(player));
        let wins = has_won(scratch, player);
        scratch.set(pos, Square::Empty);
        if wins {
            return Some(pos);
        }
    }
    None
}

/// An automated player: a mark plus the randomness source it draws from.
#[derive(Debug, Clone)]
pub struct HeuristicOpponent<R> {
    mark: Player,
    rng: R,
}

impl<R: Rng> HeuristicOpponent<R> {
    /// Creates an opponent playing `mark`.
    pub fn new(mark: Player, rng: R) -> Self {
        Self { mark, rng }
    }

    /// The mark this opponent places.
    pub fn mark(&self) -> Player {
        self.mark
    }

    /// Chooses a move on `board`.
    pub fn choose(&mut self, board: &Board) -> Result<Position, NoMoveAvailable> {
        select_move(board, self.mark, &mut self.rng)
    }

    /// Fair coin flip between X and O.
    pub fn flip_starting_player(&mut self) -> Player {
        if self.rng.random_bool(0.5) {
            Player::X
        } else {
            Player::O
        }
    }
}
