//! Selection and targeting state machine
//!
//! A single event drives the machine: "tile activated", carrying the tile or
//! nothing when the activation happened outside the board.
//!
//! | state    | activate(none) | activate(tile)                               |
//! |----------|----------------|----------------------------------------------|
//! | Idle     | no-op          | Selected(tile)                               |
//! | Selected | Idle           | Targeted(tile), or no-op on the selection    |
//! | Targeted | Idle           | Targeted(tile), or no-op on selection/target |
//!
//! Dropping only the target (Targeted back to Selected) is a separate
//! operation, `clear_target`.
//!
//! The state enum makes the pairing rules structural: a target only exists
//! alongside a selection, adjacency exists exactly when something is selected,
//! and the sight line exists exactly when there is a target.
//!
//! Every transition returns the style updates the renderer needs: each tile
//! whose displayed style differs between the old and the new state, with its
//! new style. Tiles that lose their highlight revert to their overlay style.

use std::fmt;

use tracing::{debug, warn};

use crate::algorithm::adjacency::neighbors_of;
use crate::algorithm::line_of_sight::{LineOfSight, resolve};
use crate::io::error::{BoardError, Result, out_of_range};
use crate::io::style::{Highlight, Style, StyleUpdate};
use crate::spatial::coordinate::GridCoordinate;
use crate::spatial::registry::{Board, TileId};
use crate::spatial::tileset::TileSet;

/// Coarse state of the machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionPhase {
    /// Nothing selected
    Idle,
    /// One tile selected, its neighbors highlighted
    Selected,
    /// Selection plus target, sight line resolved
    Targeted,
}

impl fmt::Display for SelectionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Selected => "selected",
            Self::Targeted => "targeted",
        };
        f.write_str(name)
    }
}

/// Full selection state
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SelectionState {
    /// Nothing selected
    #[default]
    Idle,
    /// One tile selected
    Selected {
        /// The selected tile
        selected: TileId,
        /// Neighbors of the selected tile
        adjacent: TileSet,
    },
    /// A selected tile aiming at a target
    Targeted {
        /// The selected tile
        selected: TileId,
        /// Neighbors of the selected tile
        adjacent: TileSet,
        /// The target tile
        target: TileId,
        /// Sight line from selection to target and the tiles it crosses
        line_of_sight: LineOfSight,
    },
}

impl SelectionState {
    /// Coarse state
    pub const fn phase(&self) -> SelectionPhase {
        match self {
            Self::Idle => SelectionPhase::Idle,
            Self::Selected { .. } => SelectionPhase::Selected,
            Self::Targeted { .. } => SelectionPhase::Targeted,
        }
    }

    /// Selected tile, if any
    pub const fn selected(&self) -> Option<TileId> {
        match self {
            Self::Idle => None,
            Self::Selected { selected, .. } | Self::Targeted { selected, .. } => Some(*selected),
        }
    }

    /// Target tile, if any
    pub const fn target(&self) -> Option<TileId> {
        match self {
            Self::Targeted { target, .. } => Some(*target),
            _ => None,
        }
    }

    /// Neighbors of the selected tile, present iff something is selected
    pub const fn adjacent(&self) -> Option<&TileSet> {
        match self {
            Self::Idle => None,
            Self::Selected { adjacent, .. } | Self::Targeted { adjacent, .. } => Some(adjacent),
        }
    }

    /// Sight line, present iff there is a target
    pub const fn line_of_sight(&self) -> Option<&LineOfSight> {
        match self {
            Self::Targeted { line_of_sight, .. } => Some(line_of_sight),
            _ => None,
        }
    }

    /// Tiles obstructing the sight line, present iff there is a target
    pub const fn colliding(&self) -> Option<&TileSet> {
        match self {
            Self::Targeted { line_of_sight, .. } => Some(&line_of_sight.colliding),
            _ => None,
        }
    }

    /// Highest-precedence highlight of a tile in this state
    pub fn highlight_of(&self, id: TileId) -> Option<Highlight> {
        if self.selected() == Some(id) {
            Some(Highlight::Selected)
        } else if self.target() == Some(id) {
            Some(Highlight::Target)
        } else if self.adjacent().is_some_and(|set| set.contains(id)) {
            Some(Highlight::Adjacent)
        } else if self.colliding().is_some_and(|set| set.contains(id)) {
            Some(Highlight::Colliding)
        } else {
            None
        }
    }

    /// Every tile carrying some highlight
    fn highlighted(&self, tile_count: usize) -> TileSet {
        let mut set = TileSet::from_ids(tile_count, self.selected().into_iter().chain(self.target()));
        if let Some(adjacent) = self.adjacent() {
            set.union_with(adjacent);
        }
        if let Some(colliding) = self.colliding() {
            set.union_with(colliding);
        }
        set
    }

    /// Check the pairing rules against a board
    ///
    /// # Errors
    ///
    /// Returns `InvariantViolation` if a held tile is not on the board, if the
    /// target equals the selection, if the adjacency set is stale, or if the
    /// colliding set contains the selection or the target.
    pub fn check(&self, board: &Board) -> Result<()> {
        let violation = |reason: String| Err(BoardError::InvariantViolation { reason });

        for id in self.selected().into_iter().chain(self.target()) {
            if board.tile(id).is_none() {
                return violation(format!("{id:?} is not on the board"));
            }
        }

        if let Some(selected) = self.selected()
            && self.adjacent() != Some(&neighbors_of(board, selected))
        {
            return violation(format!("adjacency of {selected:?} is stale"));
        }

        if let (Some(selected), Some(target)) = (self.selected(), self.target()) {
            if selected == target {
                return violation(format!("{selected:?} targets itself"));
            }
            if self
                .colliding()
                .is_some_and(|set| set.contains(selected) || set.contains(target))
            {
                return violation("sight line endpoints listed as obstructions".to_string());
            }
        }

        Ok(())
    }
}

/// Drives `SelectionState` from activation events
#[derive(Debug, Clone, Default)]
pub struct SelectionMachine {
    state: SelectionState,
}

impl SelectionMachine {
    /// Machine in the idle state
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state
    pub const fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Process an activation given as a grid coordinate
    ///
    /// `None` means the activation happened outside every tile.
    ///
    /// # Errors
    ///
    /// Returns `CoordinateOutOfRange` if `activated` names no tile of `board`;
    /// the state is left unchanged. Returns `InvariantViolation` if the
    /// machine's state does not belong to `board`.
    pub fn activate(
        &mut self,
        board: &Board,
        activated: Option<GridCoordinate>,
    ) -> Result<Vec<StyleUpdate>> {
        let tile = match activated {
            Some(coordinate) => match board.id_at(coordinate) {
                Some(id) => Some(id),
                None => {
                    warn!(
                        row = coordinate.row,
                        column = coordinate.column,
                        "activation outside the board ignored"
                    );
                    return Err(out_of_range(coordinate, "activation"));
                }
            },
            None => None,
        };
        self.activate_tile(board, tile)
    }

    /// Process an activation given as a tile id
    ///
    /// # Errors
    ///
    /// Returns `InvariantViolation` if `activated` or the current state refer
    /// to tiles that are not on `board`.
    pub fn activate_tile(
        &mut self,
        board: &Board,
        activated: Option<TileId>,
    ) -> Result<Vec<StyleUpdate>> {
        if let Some(id) = activated
            && board.tile(id).is_none()
        {
            return Err(BoardError::InvariantViolation {
                reason: format!("activated {id:?} is not on the board"),
            });
        }

        match self.transition(board, activated)? {
            Some(next) => self.commit(board, next),
            None => Ok(Vec::new()),
        }
    }

    /// Enter `next`, returning the style changes it causes
    fn commit(&mut self, board: &Board, next: SelectionState) -> Result<Vec<StyleUpdate>> {
        if cfg!(debug_assertions) {
            next.check(board)?;
        }

        let updates = style_changes(board, &self.state, &next);
        debug!(
            from = %self.state.phase(),
            to = %next.phase(),
            updates = updates.len(),
            "selection transition"
        );
        self.state = next;

        Ok(updates)
    }

    /// Drop the target but keep the selection and its adjacency
    ///
    /// No-op unless the machine is targeting.
    ///
    /// # Errors
    ///
    /// Returns `InvariantViolation` if the state does not belong to `board`.
    pub fn clear_target(&mut self, board: &Board) -> Result<Vec<StyleUpdate>> {
        let SelectionState::Targeted {
            selected, adjacent, ..
        } = &self.state
        else {
            return Ok(Vec::new());
        };

        let next = SelectionState::Selected {
            selected: *selected,
            adjacent: adjacent.clone(),
        };
        self.commit(board, next)
    }

    /// Drop any selection, returning the updates that clear its highlights
    pub fn reset(&mut self, board: &Board) -> Vec<StyleUpdate> {
        let updates = style_changes(board, &self.state, &SelectionState::Idle);
        self.state = SelectionState::Idle;
        updates
    }

    /// Forget the selection without computing updates (the board was replaced)
    pub fn clear(&mut self) {
        self.state = SelectionState::Idle;
    }

    /// Style a tile is currently displayed with
    pub fn display_style(&self, board: &Board, id: TileId) -> Option<Style> {
        board
            .tile(id)
            .map(|tile| displayed(tile.style(), self.state.highlight_of(id)))
    }

    /// Updates painting every tile of the board in its current style
    pub fn full_paint(&self, board: &Board) -> Vec<StyleUpdate> {
        board
            .tiles()
            .iter()
            .map(|tile| StyleUpdate {
                coordinate: tile.coordinate(),
                style: displayed(tile.style(), self.state.highlight_of(tile.id())),
            })
            .collect()
    }

    /// Next state for an activation, or `None` when the event is a no-op
    fn transition(
        &self,
        board: &Board,
        activated: Option<TileId>,
    ) -> Result<Option<SelectionState>> {
        let next = match (&self.state, activated) {
            (SelectionState::Idle, None) => None,
            (SelectionState::Idle, Some(tile)) => Some(SelectionState::Selected {
                selected: tile,
                adjacent: neighbors_of(board, tile),
            }),
            (SelectionState::Selected { .. } | SelectionState::Targeted { .. }, None) => {
                Some(SelectionState::Idle)
            }
            (SelectionState::Selected { selected, .. }, Some(tile)) if tile == *selected => None,
            (SelectionState::Selected { selected, .. }, Some(tile)) => {
                Some(targeted(board, *selected, tile)?)
            }
            (SelectionState::Targeted { selected, target, .. }, Some(tile))
                if tile == *target || tile == *selected =>
            {
                None
            }
            (SelectionState::Targeted { selected, .. }, Some(tile)) => {
                Some(targeted(board, *selected, tile)?)
            }
        };
        Ok(next)
    }
}

fn targeted(board: &Board, selected: TileId, target: TileId) -> Result<SelectionState> {
    Ok(SelectionState::Targeted {
        selected,
        adjacent: neighbors_of(board, selected),
        target,
        line_of_sight: resolve(board, selected, target)?,
    })
}

fn displayed(base: Style, highlight: Option<Highlight>) -> Style {
    highlight.map_or(base, |highlight| base.patched(&highlight.patch()))
}

/// Tiles whose displayed style differs between two states, with their new style
fn style_changes(
    board: &Board,
    before: &SelectionState,
    after: &SelectionState,
) -> Vec<StyleUpdate> {
    let mut touched = before.highlighted(board.len());
    touched.union_with(&after.highlighted(board.len()));

    touched
        .iter()
        .filter_map(|id| board.tile(id))
        .filter_map(|tile| {
            let old = displayed(tile.style(), before.highlight_of(tile.id()));
            let new = displayed(tile.style(), after.highlight_of(tile.id()));
            (old != new).then_some(StyleUpdate {
                coordinate: tile.coordinate(),
                style: new,
            })
        })
        .collect()
}
