//! Pairing visualisation: layout mode, connection lines and pair hues
//!
//! Everything here is pure geometry and colour math so it can be tested
//! without a terminal. The board component paints the result.

use super::catalog::EntityId;
use super::evaluation::Mark;
use super::session::GameSession;
use ratatui::layout::Rect;

/// How pairings are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// Lines across the gutter between the columns
    Wide,
    /// Matching colours on both items of a pair
    Narrow,
}

impl LayoutMode {
    /// Narrow at or below the breakpoint, wide above it
    pub fn for_width(width_px: u32, breakpoint_px: u32) -> Self {
        if width_px <= breakpoint_px {
            LayoutMode::Narrow
        } else {
            LayoutMode::Wide
        }
    }

    pub fn name(&self) -> &str {
        match self {
            LayoutMode::Wide => "lines",
            LayoutMode::Narrow => "colours",
        }
    }
}

/// A line from the right edge of a left item to the left edge of a right
/// item, in game-area cell coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConnectionLine {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub mark: Option<Mark>,
}

/// Colours shared by both items of a pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub left: EntityId,
    pub slot: usize,
    pub background: (u8, u8, u8),
    pub border: (u8, u8, u8),
}

/// The visual layer drawn over or onto the board
#[derive(Debug, Clone, PartialEq)]
pub enum Overlay {
    Lines(Vec<ConnectionLine>),
    Highlights(Vec<Highlight>),
}

impl Overlay {
    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        match self {
            Overlay::Lines(lines) => lines.is_empty(),
            Overlay::Highlights(highlights) => highlights.is_empty(),
        }
    }

    pub fn highlight_for_left(&self, id: EntityId) -> Option<&Highlight> {
        match self {
            Overlay::Highlights(highlights) => highlights.iter().find(|h| h.left == id),
            Overlay::Lines(_) => None,
        }
    }

    /// The last pairing onto `slot` paints it
    pub fn highlight_for_slot(&self, slot: usize) -> Option<&Highlight> {
        match self {
            Overlay::Highlights(highlights) => highlights.iter().rev().find(|h| h.slot == slot),
            Overlay::Lines(_) => None,
        }
    }
}

/// Build the overlay for the session's current layout mode
///
/// `left_rects` are indexed by catalog position, `right_rects` by display
/// slot. Pairings whose items have no rect (not drawn) are skipped.
pub fn compute_overlay(session: &GameSession, left_rects: &[Rect], right_rects: &[Rect]) -> Overlay {
    let catalog = session.catalog();
    let pairings = session.pairings();

    match session.layout() {
        LayoutMode::Wide => {
            let lines = pairings
                .iter()
                .filter_map(|pairing| {
                    let start = left_rects.get(catalog.position(pairing.left)?)?;
                    let end = right_rects.get(pairing.right.slot)?;
                    let (x1, y1) = right_edge_midpoint(*start);
                    let (x2, y2) = left_edge_midpoint(*end);
                    Some(ConnectionLine {
                        x1,
                        y1,
                        x2,
                        y2,
                        mark: session.marks().left(pairing.left),
                    })
                })
                .collect();
            Overlay::Lines(lines)
        }
        LayoutMode::Narrow => {
            let total = catalog.len();
            let highlights = pairings
                .iter()
                .enumerate()
                .map(|(index, pairing)| {
                    let hue = pair_hue(index, total);
                    Highlight {
                        left: pairing.left,
                        slot: pairing.right.slot,
                        background: hsl_to_rgb(hue, 0.7, 0.9),
                        border: hsl_to_rgb(hue, 0.7, 0.5),
                    }
                })
                .collect();
            Overlay::Highlights(highlights)
        }
    }
}

fn right_edge_midpoint(rect: Rect) -> (f64, f64) {
    (
        f64::from(rect.x) + f64::from(rect.width),
        f64::from(rect.y) + f64::from(rect.height) / 2.0,
    )
}

fn left_edge_midpoint(rect: Rect) -> (f64, f64) {
    (
        f64::from(rect.x),
        f64::from(rect.y) + f64::from(rect.height) / 2.0,
    )
}

/// Hue for the pairing at `index`, spaced evenly around the wheel
pub fn pair_hue(index: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (index as f64 * (360.0 / total as f64)) % 360.0
}

/// HSL (hue in degrees, saturation and lightness in 0..=1) to RGB
pub fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> (u8, u8, u8) {
    let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let sector = hue.rem_euclid(360.0) / 60.0;
    let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
    let m = lightness - chroma / 2.0;

    let (r, g, b) = match sector as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };

    let channel = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    (channel(r), channel(g), channel(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::catalog::Catalog;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn session() -> GameSession {
        GameSession::with_rng(Catalog::digestive_system().unwrap(), 768, StdRng::seed_from_u64(5))
    }

    fn column(x: u16, width: u16) -> Vec<Rect> {
        (0..10).map(|i| Rect::new(x, i * 3, width, 3)).collect()
    }

    #[test]
    fn test_layout_mode_breakpoint() {
        assert_eq!(LayoutMode::for_width(768, 768), LayoutMode::Narrow);
        assert_eq!(LayoutMode::for_width(320, 768), LayoutMode::Narrow);
        assert_eq!(LayoutMode::for_width(769, 768), LayoutMode::Wide);
    }

    #[test]
    fn test_hsl_to_rgb() {
        assert_eq!(hsl_to_rgb(0.0, 0.7, 0.5), (217, 38, 38));
        assert_eq!(hsl_to_rgb(120.0, 0.7, 0.9), (212, 247, 212));
        assert_eq!(hsl_to_rgb(0.0, 0.0, 1.0), (255, 255, 255));
    }

    #[test]
    fn test_pair_hues_are_evenly_spaced() {
        assert_eq!(pair_hue(0, 10), 0.0);
        assert_eq!(pair_hue(1, 10), 36.0);
        assert_eq!(pair_hue(5, 10), 180.0);
        assert_eq!(pair_hue(3, 0), 0.0);
    }

    #[test]
    fn test_wide_lines_join_facing_edges() {
        let mut session = session();
        session.select_left(2);
        session.select_right(4);

        let overlay = compute_overlay(&session, &column(0, 30), &column(40, 30));
        let Overlay::Lines(lines) = overlay else {
            panic!("expected lines in wide layout");
        };
        assert_eq!(lines.len(), 1);
        let line = lines[0];
        // left id 2 is the second row, slot 4 the fifth
        assert_eq!((line.x1, line.y1), (30.0, 4.5));
        assert_eq!((line.x2, line.y2), (40.0, 13.5));
        assert_eq!(line.mark, None);
    }

    #[test]
    fn test_checked_lines_carry_marks() {
        let mut session = session();
        let slot = session.right_order().iter().position(|&id| id == 1).unwrap();
        session.select_left(1);
        session.select_right(slot);
        session.select_left(2);
        session.select_right(slot);
        session.check_answers();

        let overlay = compute_overlay(&session, &column(0, 30), &column(40, 30));
        let Overlay::Lines(lines) = overlay else {
            panic!("expected lines in wide layout");
        };
        // lines follow pairing order: left 1 then left 2
        let marks: Vec<_> = lines.iter().map(|l| l.mark).collect();
        assert_eq!(marks, vec![Some(Mark::Correct), Some(Mark::Wrong)]);
    }

    #[test]
    fn test_narrow_highlights_use_insertion_order() {
        let mut session = session();
        session.resize(400);
        session.select_left(7);
        session.select_right(0);
        session.select_left(3);
        session.select_right(1);

        let overlay = compute_overlay(&session, &column(0, 20), &column(22, 20));
        let first = overlay.highlight_for_left(7).unwrap();
        let second = overlay.highlight_for_slot(1).unwrap();
        assert_eq!(first.slot, 0);
        assert_eq!(first.background, hsl_to_rgb(0.0, 0.7, 0.9));
        assert_eq!(second.left, 3);
        assert_eq!(second.border, hsl_to_rgb(36.0, 0.7, 0.5));
        assert!(overlay.highlight_for_left(1).is_none());
    }

    #[test]
    fn test_shared_right_item_takes_latest_hue() {
        let mut session = session();
        session.resize(400);
        session.select_left(1);
        session.select_right(0);
        session.select_left(2);
        session.select_right(0);

        let overlay = compute_overlay(&session, &column(0, 20), &column(22, 20));
        let shared = overlay.highlight_for_slot(0).unwrap();
        assert_eq!(shared.left, 2);
        assert_eq!(shared.background, hsl_to_rgb(36.0, 0.7, 0.9));
        assert_eq!(
            overlay.highlight_for_left(1).map(|h| h.background),
            Some(hsl_to_rgb(0.0, 0.7, 0.9))
        );
    }

    #[test]
    fn test_overlay_switches_with_layout() {
        let mut session = session();
        session.select_left(1);
        session.select_right(0);
        let left = column(0, 30);
        let right = column(40, 30);

        assert!(matches!(compute_overlay(&session, &left, &right), Overlay::Lines(_)));
        session.resize(500);
        assert!(matches!(
            compute_overlay(&session, &left, &right),
            Overlay::Highlights(_)
        ));
    }

    #[test]
    fn test_empty_overlay_after_reset() {
        let mut session = session();
        session.reveal_answers();
        session.reset_state();
        assert!(compute_overlay(&session, &column(0, 30), &column(40, 30)).is_empty());
    }
}
