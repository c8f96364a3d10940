//! Text format for overlay definitions
//!
//! ```text
//! # blocked terrain
//! [block]
//! fill = #000000
//! cells = 2,6 3,6 3,5 4,6
//!
//! [cover]
//! outline = #000000 3 dash
//! cells = 2,2 3,2 4,3
//! ```
//!
//! Sections are applied in file order. `fill` takes `#RRGGBB[AA]`; `outline`
//! takes a color, an optional width (default 1) and an optional line style
//! (default `solid`); `cells` may repeat. Lines starting with `#` or `;` are
//! comments.

use std::fs;
use std::path::Path;

use crate::algorithm::overlay::Overlay;
use crate::io::error::{ErrorContext, Result, WithContext, overlay_parse};
use crate::io::style::{Color, LineStyle, Outline, StylePatch};
use crate::spatial::coordinate::GridCoordinate;

/// Parse overlay definitions from text
///
/// # Errors
///
/// Returns `OverlayParse` with the 1-based line number of the first malformed line.
pub fn parse_overlays(text: &str) -> Result<Vec<Overlay>> {
    let mut overlays: Vec<Overlay> = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let line_number = index + 1;
        parse_line(raw.trim(), &mut overlays).with_context(ErrorContext {
            line: Some(line_number),
            ..Default::default()
        })?;
    }

    Ok(overlays)
}

/// Read and parse an overlay definition file
///
/// # Errors
///
/// Returns `FileSystem` if the file cannot be read and `OverlayParse` if its
/// content is malformed.
pub fn load_overlays(path: &Path) -> Result<Vec<Overlay>> {
    let text = fs::read_to_string(path).with_context(ErrorContext {
        path: Some(path.to_path_buf()),
        operation: Some("read overlay file"),
        ..Default::default()
    })?;
    parse_overlays(&text)
}

fn parse_line(line: &str, overlays: &mut Vec<Overlay>) -> Result<()> {
    if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
        return Ok(());
    }

    if let Some(header) = line.strip_prefix('[') {
        let name = header
            .strip_suffix(']')
            .ok_or_else(|| overlay_parse(0, &"section header must end with ']'"))?
            .trim();
        if name.is_empty() {
            return Err(overlay_parse(0, &"overlay name must not be empty"));
        }
        overlays.push(Overlay::new(name, StylePatch::default()));
        return Ok(());
    }

    let (key, value) = line
        .split_once('=')
        .ok_or_else(|| overlay_parse(0, &format!("expected 'key = value', found '{line}'")))?;
    let (key, value) = (key.trim(), value.trim());

    let overlay = overlays
        .last_mut()
        .ok_or_else(|| overlay_parse(0, &format!("'{key}' appears before any [overlay] section")))?;

    match key {
        "fill" => {
            overlay.patch.fill = Some(value.parse::<Color>().map_err(|e| overlay_parse(0, &e))?);
        }
        "outline" => {
            overlay.patch.outline = Some(parse_outline(value)?);
        }
        "cells" => {
            for token in value.split_whitespace() {
                let coordinate = token
                    .parse::<GridCoordinate>()
                    .map_err(|e| overlay_parse(0, &e))?;
                overlay.coordinates.push(coordinate);
            }
        }
        other => return Err(overlay_parse(0, &format!("unknown key '{other}'"))),
    }

    Ok(())
}

fn parse_outline(value: &str) -> Result<Outline> {
    let mut parts = value.split_whitespace();

    let color = parts
        .next()
        .ok_or_else(|| overlay_parse(0, &"outline needs a color"))?
        .parse::<Color>()
        .map_err(|e| overlay_parse(0, &e))?;

    let width = match parts.next() {
        Some(width) => width
            .parse::<f64>()
            .ok()
            .filter(|width| width.is_finite() && *width >= 0.0)
            .ok_or_else(|| overlay_parse(0, &format!("invalid outline width '{width}'")))?,
        None => 1.0,
    };

    let line = match parts.next() {
        Some(style) => style.parse::<LineStyle>().map_err(|e| overlay_parse(0, &e))?,
        None => LineStyle::Solid,
    };

    if let Some(extra) = parts.next() {
        return Err(overlay_parse(0, &format!("unexpected '{extra}' after outline")));
    }

    Ok(Outline::new(color, width, line))
}
