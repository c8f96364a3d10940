//! Tests for the selection state machine and its style updates

#[cfg(test)]
mod tests {
    use gameboards::algorithm::selection::{SelectionMachine, SelectionPhase, SelectionState};
    use gameboards::io::configuration::BoardConfig;
    use gameboards::io::error::BoardError;
    use gameboards::io::style::{Highlight, Style, StyleUpdate};
    use gameboards::spatial::coordinate::GridCoordinate;
    use gameboards::spatial::geometry::Topology;
    use gameboards::spatial::registry::{Board, TileId};
    use gameboards::spatial::tileset::TileSet;

    fn board() -> Board {
        let Ok(board) = Board::build(&BoardConfig::new(5, 6, Topology::Rectangle)) else {
            unreachable!("valid configuration")
        };
        board
    }

    fn at(row: i32, column: i32) -> Option<GridCoordinate> {
        Some(GridCoordinate::new(row, column))
    }

    fn step(
        machine: &mut SelectionMachine,
        board: &Board,
        activated: Option<GridCoordinate>,
    ) -> Vec<StyleUpdate> {
        let Ok(updates) = machine.activate(board, activated) else {
            unreachable!("activation on the board")
        };
        updates
    }

    fn updated(updates: &[StyleUpdate]) -> Vec<GridCoordinate> {
        let mut coordinates: Vec<_> = updates.iter().map(|update| update.coordinate).collect();
        coordinates.sort_unstable();
        coordinates
    }

    fn highlighted(highlight: Highlight) -> Style {
        Style::BASE.patched(&highlight.patch())
    }

    #[test]
    fn test_select_highlights_tile_and_neighbors() {
        let board = board();
        let mut machine = SelectionMachine::new();

        let updates = step(&mut machine, &board, at(2, 3));

        assert_eq!(machine.state().phase(), SelectionPhase::Selected);
        assert_eq!(machine.state().selected(), board.id_at(GridCoordinate::new(2, 3)));
        assert_eq!(machine.state().target(), None);
        assert_eq!(machine.state().adjacent().map(TileSet::len), Some(4));
        assert_eq!(
            updated(&updates),
            vec![
                GridCoordinate::new(1, 3),
                GridCoordinate::new(2, 2),
                GridCoordinate::new(2, 3),
                GridCoordinate::new(2, 4),
                GridCoordinate::new(3, 3),
            ]
        );
        for update in &updates {
            let expected = if update.coordinate == GridCoordinate::new(2, 3) {
                highlighted(Highlight::Selected)
            } else {
                highlighted(Highlight::Adjacent)
            };
            assert_eq!(update.style, expected);
        }
    }

    // Tests targeting emits only tiles whose displayed style changes
    // Verified by emitting every highlighted tile on each transition
    #[test]
    fn test_target_updates_only_changed_tiles() {
        let board = board();
        let mut machine = SelectionMachine::new();
        let _ = step(&mut machine, &board, at(2, 3));

        // (2, 2) is both adjacent and obstructing; adjacency wins so it is not repainted
        let updates = step(&mut machine, &board, at(2, 0));

        assert_eq!(machine.state().phase(), SelectionPhase::Targeted);
        assert_eq!(
            updates,
            vec![
                StyleUpdate {
                    coordinate: GridCoordinate::new(2, 0),
                    style: highlighted(Highlight::Target),
                },
                StyleUpdate {
                    coordinate: GridCoordinate::new(2, 1),
                    style: highlighted(Highlight::Colliding),
                },
            ]
        );
        assert_eq!(
            machine.state().colliding().map(TileSet::to_vec),
            Some(vec![TileId::new(13), TileId::new(14)])
        );
    }

    #[test]
    fn test_retarget_replaces_sight_line() {
        let board = board();
        let mut machine = SelectionMachine::new();
        let _ = step(&mut machine, &board, at(2, 3));
        let _ = step(&mut machine, &board, at(2, 0));

        let updates = step(&mut machine, &board, at(0, 3));

        assert_eq!(machine.state().target(), board.id_at(GridCoordinate::new(0, 3)));
        assert_eq!(
            updated(&updates),
            vec![
                GridCoordinate::new(0, 3),
                GridCoordinate::new(2, 0),
                GridCoordinate::new(2, 1),
            ]
        );
        assert!(
            updates
                .iter()
                .filter(|update| update.coordinate != GridCoordinate::new(0, 3))
                .all(|update| update.style == Style::BASE)
        );
    }

    #[test]
    fn test_reactivating_selection_or_target_is_noop() {
        let board = board();
        let mut machine = SelectionMachine::new();
        let _ = step(&mut machine, &board, at(1, 1));

        assert!(step(&mut machine, &board, at(1, 1)).is_empty());
        assert_eq!(machine.state().phase(), SelectionPhase::Selected);

        let _ = step(&mut machine, &board, at(3, 4));
        let before = machine.state().clone();

        assert!(step(&mut machine, &board, at(3, 4)).is_empty());
        assert!(step(&mut machine, &board, at(1, 1)).is_empty());
        assert_eq!(machine.state(), &before);
    }

    // Tests activating outside the board returns to idle from any phase
    #[test]
    fn test_activate_none_clears() {
        let board = board();
        let mut machine = SelectionMachine::new();

        assert!(step(&mut machine, &board, None).is_empty());
        assert_eq!(machine.state(), &SelectionState::Idle);

        let selected = step(&mut machine, &board, at(0, 0));
        let cleared = step(&mut machine, &board, None);
        assert_eq!(updated(&cleared), updated(&selected));
        assert!(cleared.iter().all(|update| update.style == Style::BASE));

        let _ = step(&mut machine, &board, at(2, 3));
        let _ = step(&mut machine, &board, at(2, 0));
        let cleared = step(&mut machine, &board, None);
        assert_eq!(machine.state().phase(), SelectionPhase::Idle);
        assert_eq!(cleared.len(), 7);
    }

    #[test]
    fn test_clear_target_keeps_selection() {
        let board = board();
        let mut machine = SelectionMachine::new();
        let _ = step(&mut machine, &board, at(2, 3));

        assert!(matches!(machine.clear_target(&board), Ok(updates) if updates.is_empty()));

        let _ = step(&mut machine, &board, at(2, 0));
        let Ok(updates) = machine.clear_target(&board) else {
            unreachable!("state belongs to the board")
        };

        assert_eq!(machine.state().phase(), SelectionPhase::Selected);
        assert_eq!(machine.state().selected(), board.id_at(GridCoordinate::new(2, 3)));
        assert!(machine.state().line_of_sight().is_none());
        assert_eq!(
            updated(&updates),
            vec![GridCoordinate::new(2, 0), GridCoordinate::new(2, 1)]
        );
    }

    #[test]
    fn test_out_of_range_activation_keeps_state() {
        let board = board();
        let mut machine = SelectionMachine::new();
        let _ = step(&mut machine, &board, at(2, 3));
        let before = machine.state().clone();

        let result = machine.activate(&board, at(7, 7));

        assert!(matches!(
            result,
            Err(BoardError::CoordinateOutOfRange { operation: "activation", .. })
        ));
        assert_eq!(machine.state(), &before);
    }

    #[test]
    fn test_unknown_tile_id_is_rejected() {
        let board = board();
        let mut machine = SelectionMachine::new();

        assert!(matches!(
            machine.activate_tile(&board, Some(TileId::new(30))),
            Err(BoardError::InvariantViolation { .. })
        ));
        assert_eq!(machine.state().phase(), SelectionPhase::Idle);
    }

    #[test]
    fn test_highlight_precedence() {
        let board = board();
        let mut machine = SelectionMachine::new();
        let _ = step(&mut machine, &board, at(2, 3));
        let _ = step(&mut machine, &board, at(2, 0));
        let state = machine.state();
        let id = |row, column| board.id_at(GridCoordinate::new(row, column));

        let highlight = |row, column| id(row, column).and_then(|tile| state.highlight_of(tile));
        assert_eq!(highlight(2, 3), Some(Highlight::Selected));
        assert_eq!(highlight(2, 0), Some(Highlight::Target));
        assert_eq!(highlight(2, 2), Some(Highlight::Adjacent));
        assert_eq!(highlight(2, 1), Some(Highlight::Colliding));
        assert_eq!(highlight(4, 5), None);

        assert!(Highlight::Selected > Highlight::Target);
        assert!(Highlight::Target > Highlight::Adjacent);
        assert!(Highlight::Adjacent > Highlight::Colliding);
    }

    #[test]
    fn test_state_checks_against_board() {
        let board = board();
        let mut machine = SelectionMachine::new();
        let _ = step(&mut machine, &board, at(2, 3));
        let _ = step(&mut machine, &board, at(4, 0));

        assert!(machine.state().check(&board).is_ok());

        let stale = SelectionState::Selected {
            selected: TileId::new(0),
            adjacent: TileSet::new(board.len()),
        };
        assert!(matches!(
            stale.check(&board),
            Err(BoardError::InvariantViolation { .. })
        ));
    }

    #[test]
    fn test_full_paint_and_reset() {
        let board = board();
        let mut machine = SelectionMachine::new();
        let _ = step(&mut machine, &board, at(0, 0));

        let paint = machine.full_paint(&board);
        assert_eq!(paint.len(), board.len());
        assert_eq!(
            paint.first().map(|update| update.style),
            Some(highlighted(Highlight::Selected))
        );
        assert_eq!(
            machine.display_style(&board, TileId::new(1)),
            Some(highlighted(Highlight::Adjacent))
        );

        let updates = machine.reset(&board);
        assert_eq!(updates.len(), 3);
        assert_eq!(machine.state().phase(), SelectionPhase::Idle);

        let _ = step(&mut machine, &board, at(0, 0));
        machine.clear();
        assert_eq!(machine.state(), &SelectionState::Idle);
        assert_eq!(machine.display_style(&board, TileId::new(0)), Some(Style::BASE));
    }

    #[test]
    fn test_phase_names() {
        assert_eq!(SelectionPhase::Idle.to_string(), "idle");
        assert_eq!(SelectionPhase::Selected.to_string(), "selected");
        assert_eq!(SelectionPhase::Targeted.to_string(), "targeted");
    }
}
