//! Tests for the overlay definition text format

#[cfg(test)]
mod tests {
    use gameboards::io::error::{BoardError, Result};
    use gameboards::io::overlay_file::{load_overlays, parse_overlays};
    use gameboards::io::style::{Color, LineStyle, Outline};
    use gameboards::spatial::coordinate::GridCoordinate;
    use std::io::Write;
    use std::path::Path;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = "\
# blocked terrain
[block]
fill = #000000
cells = 2,6 3,6
cells = 4,6

; cover only changes the outline
[cover]
outline = #00000080 3 dash
cells = 2,2
";

    fn parse_error_line(text: &str) -> Option<usize> {
        match parse_overlays(text) {
            Err(BoardError::OverlayParse { line, .. }) => Some(line),
            _ => None,
        }
    }

    #[test]
    fn test_parse_sections_in_order() -> Result<()> {
        let overlays = parse_overlays(SAMPLE)?;

        assert_eq!(overlays.len(), 2);
        let (Some(block), Some(cover)) = (overlays.first(), overlays.get(1)) else {
            unreachable!("two sections parsed")
        };

        assert_eq!(block.name, "block");
        assert_eq!(block.patch.fill, Some(Color::BLACK));
        assert_eq!(block.patch.outline, None);
        assert_eq!(
            block.coordinates,
            vec![
                GridCoordinate::new(2, 6),
                GridCoordinate::new(3, 6),
                GridCoordinate::new(4, 6),
            ]
        );

        assert_eq!(cover.name, "cover");
        assert_eq!(cover.patch.fill, None);
        assert_eq!(
            cover.patch.outline,
            Some(Outline::new(Color::rgba(0, 0, 0, 128), 3.0, LineStyle::Dash))
        );
        Ok(())
    }

    #[test]
    fn test_outline_defaults() -> Result<()> {
        let overlays = parse_overlays("[route]\noutline = #ff0000\n")?;

        assert_eq!(
            overlays.first().and_then(|overlay| overlay.patch.outline),
            Some(Outline::new(Color::rgb(255, 0, 0), 1.0, LineStyle::Solid))
        );
        Ok(())
    }

    #[test]
    fn test_empty_text_has_no_overlays() -> Result<()> {
        assert!(parse_overlays("")?.is_empty());
        assert!(parse_overlays("# only a comment\n\n")?.is_empty());
        Ok(())
    }

    // Tests parse errors carry the 1-based line of the offending text
    // Verified by reporting the 0-based index instead
    #[test]
    fn test_errors_report_line_numbers() {
        assert_eq!(parse_error_line("fill = #ffffff"), Some(1));
        assert_eq!(parse_error_line("[cover]\nfill = white"), Some(2));
        assert_eq!(parse_error_line("[cover]\n\ncells = 1,1 x,2"), Some(3));
        assert_eq!(parse_error_line("[cover"), Some(1));
        assert_eq!(parse_error_line("[ ]"), Some(1));
        assert_eq!(parse_error_line("[cover]\nopacity = 1"), Some(2));
        assert_eq!(parse_error_line("[cover]\noutline = #000000 -1"), Some(2));
        assert_eq!(parse_error_line("[cover]\noutline = #000000 1 wavy"), Some(2));
        assert_eq!(parse_error_line("[cover]\noutline = #000000 1 dot extra"), Some(2));
        assert_eq!(parse_error_line("[cover]\njust text"), Some(2));
    }

    #[test]
    fn test_load_from_file() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        file.write_all(SAMPLE.as_bytes())?;

        let overlays = load_overlays(file.path())?;
        assert_eq!(overlays.len(), 2);
        Ok(())
    }

    #[test]
    fn test_missing_file() {
        let path = Path::new("/nonexistent/overlays.ini");

        assert!(matches!(
            load_overlays(path),
            Err(BoardError::FileSystem { path: reported, .. }) if reported == path
        ));
    }
}
