//! Tests for overlay composition order and out-of-range handling

#[cfg(test)]
mod tests {
    use gameboards::algorithm::overlay::{Overlay, apply, compose};
    use gameboards::io::configuration::BoardConfig;
    use gameboards::io::error::BoardError;
    use gameboards::io::style::{Color, LineStyle, Outline, Style, StylePatch};
    use gameboards::spatial::coordinate::GridCoordinate;
    use gameboards::spatial::geometry::Topology;
    use gameboards::spatial::registry::{Board, Tile};

    const RED: Color = Color::rgb(255, 0, 0);
    const GREEN: Color = Color::rgb(0, 255, 0);

    fn board() -> Board {
        let Ok(board) = Board::build(&BoardConfig::new(3, 3, Topology::Rectangle)) else {
            unreachable!("valid configuration")
        };
        board
    }

    fn style_at(board: &Board, row: i32, column: i32) -> Option<Style> {
        board
            .tile_at_coordinate(GridCoordinate::new(row, column))
            .map(Tile::style)
    }

    #[test]
    fn test_overlay_paints_covered_tiles() {
        let mut board = board();
        let cover = Overlay::new("cover", StylePatch::fill(RED)).with_coordinates([(0, 0), (1, 1)]);

        let report = apply(&mut board, &[cover]);

        assert_eq!(report.applied, 2);
        assert!(report.is_clean());
        assert_eq!(style_at(&board, 0, 0).map(|style| style.fill), Some(RED));
        assert_eq!(style_at(&board, 1, 1).map(|style| style.fill), Some(RED));
        assert_eq!(style_at(&board, 2, 2), Some(Style::BASE));
    }

    // Tests later overlays win per style part, keeping parts they leave unset
    // Verified by replacing whole styles instead of patching
    #[test]
    fn test_last_write_wins_per_part() {
        let mut board = board();
        let dashed = Outline::new(GREEN, 3.0, LineStyle::Dash);
        let overlays = [
            Overlay::new("cover", StylePatch::fill(RED)).with_coordinates([(1, 1)]),
            Overlay::new("route", StylePatch::outline(dashed)).with_coordinates([(1, 1)]),
            Overlay::new("enemy", StylePatch::fill(GREEN)).with_coordinates([(1, 1), (0, 2)]),
        ];

        let report = apply(&mut board, &overlays);

        assert_eq!(report.applied, 4);
        assert_eq!(
            style_at(&board, 1, 1),
            Some(Style {
                fill: GREEN,
                outline: dashed,
            })
        );
        assert_eq!(style_at(&board, 0, 2).map(|style| style.fill), Some(GREEN));
    }

    #[test]
    fn test_out_of_range_coordinates_are_skipped() {
        let mut board = board();
        let overlay =
            Overlay::new("cover", StylePatch::fill(RED)).with_coordinates([(0, 0), (3, 0), (-1, 2)]);

        let report = apply(&mut board, &[overlay]);

        assert_eq!(report.applied, 1);
        assert!(!report.is_clean());
        assert_eq!(report.skipped.len(), 2);
        assert_eq!(style_at(&board, 0, 0).map(|style| style.fill), Some(RED));

        let Some(skipped) = report.skipped.first() else {
            unreachable!("two coordinates skipped")
        };
        assert_eq!(skipped.overlay, "cover");
        assert_eq!(skipped.coordinate, GridCoordinate::new(3, 0));
        assert!(matches!(
            skipped.error(),
            BoardError::CoordinateOutOfRange { operation: "overlay application", .. }
        ));
    }

    #[test]
    fn test_compose_resets_previous_overlays() {
        let mut board = board();
        let _ = apply(
            &mut board,
            &[Overlay::new("cover", StylePatch::fill(RED)).with_coordinates([(0, 0)])],
        );

        let report = compose(
            &mut board,
            &[Overlay::new("enemy", StylePatch::fill(GREEN)).with_coordinates([(2, 2)])],
        );

        assert_eq!(report.applied, 1);
        assert_eq!(style_at(&board, 0, 0), Some(Style::BASE));
        assert_eq!(style_at(&board, 2, 2).map(|style| style.fill), Some(GREEN));
    }

    #[test]
    fn test_empty_patch_changes_nothing() {
        let mut board = board();
        let overlay = Overlay::new("marker", StylePatch::default()).with_coordinates([(1, 2)]);

        assert!(overlay.patch.is_empty());
        let report = apply(&mut board, &[overlay]);

        assert_eq!(report.applied, 1);
        assert_eq!(style_at(&board, 1, 2), Some(Style::BASE));
    }
}
