//! Builds a board from the symbol detector's JSON output.
//!
//! The upstream detector reports each marble as a pixel position plus a
//! symbol name. Nothing here touches pixels beyond that: the gold marble
//! anchors the grid (there is exactly one per board and it sits at the
//! center), and the hex pitch is estimated as the median nearest-neighbour
//! distance between detected symbols, which is robust against the odd
//! missed or spurious detection.

use serde::Deserialize;
use tracing::debug;

use crate::engine::{Board, Element, CENTER};
use crate::error::{Error, Result};

/// One detected marble, in pixel coordinates.
#[derive(Clone, Debug, Deserialize)]
pub struct DetectedSymbol {
    pub x: f64,
    pub y: f64,
    pub name: String,
    pub confidence: f64,
}

/// The detector's full output for one captured board.
#[derive(Clone, Debug, Deserialize)]
pub struct Detection {
    pub symbols: Vec<DetectedSymbol>,
    pub width: u32,
    pub height: u32,
}

/// Parses detector JSON and builds the board it describes.
pub fn board_from_json(data: &str) -> Result<Board> {
    let detection: Detection = serde_json::from_str(data)?;
    board_from_detection(&detection)
}

/// Builds a board from already-parsed detection output.
pub fn board_from_detection(detection: &Detection) -> Result<Board> {
    let symbols = &detection.symbols;
    let center = symbols
        .iter()
        .find(|s| matches!(Element::from_name(&s.name), Ok(Element::Gold)))
        .ok_or(Error::CenterNotFound)?;
    let cell = hex_pitch(symbols) / 3f64.sqrt();
    debug!(
        cell,
        center_x = center.x,
        center_y = center.y,
        symbols = symbols.len(),
        "detection geometry"
    );

    let mut entries = Vec::with_capacity(symbols.len());
    for symbol in symbols {
        let element = Element::from_name(&symbol.name)?;
        let (dq, dr) = pixel_to_axial(symbol.x - center.x, symbol.y - center.y, cell);
        let q = CENTER as i32 + dq;
        let r = CENTER as i32 + dr;
        if q < 0 || r < 0 {
            return Err(Error::OutOfWindow { q, r });
        }
        entries.push((q as usize, r as usize, element));
    }
    Board::from_entries(&entries)
}

/// Median nearest-neighbour pixel distance between symbols.
fn hex_pitch(symbols: &[DetectedSymbol]) -> f64 {
    if symbols.len() < 2 {
        return 1.0;
    }
    let mut nearest = Vec::with_capacity(symbols.len());
    for (i, a) in symbols.iter().enumerate() {
        let mut best = f64::INFINITY;
        for (j, b) in symbols.iter().enumerate() {
            if i == j {
                continue;
            }
            let distance = ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt();
            if distance < best {
                best = distance;
            }
        }
        nearest.push(best);
    }
    nearest.sort_by(|a, b| a.total_cmp(b));
    nearest[nearest.len() / 2]
}

/// Converts a pixel offset from the center into an axial offset.
fn pixel_to_axial(x: f64, y: f64, cell: f64) -> (i32, i32) {
    let q = (x * 3f64.sqrt() / 3.0 - y / 3.0) / cell;
    let r = (2.0 * y / 3.0) / cell;
    (q.round() as i32, r.round() as i32)
}
