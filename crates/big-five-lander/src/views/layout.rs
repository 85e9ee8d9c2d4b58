//! Dashboard page geometry
//!
//! The dashboard is laid out as one tall page and scrolled inside the viewport. The
//! timeline reserves a row for every target up front, so rows never shift while
//! targets are being revealed.

use ratatui::layout::Rect;

/// Key hint bar pinned to the bottom of the terminal
pub const HINT_BAR_HEIGHT: u16 = 1;
pub const HEADER_HEIGHT: u16 = 5;
pub const SECTION_GAP: u16 = 1;
/// Title, subtitle, spacer and the card row
pub const OVERVIEW_HEIGHT: u16 = 9;
pub const OVERVIEW_CARD_HEIGHT: u16 = 6;
pub const TIMELINE_TITLE_HEIGHT: u16 = 3;
pub const TIMELINE_CARD_HEIGHT: u16 = 5;
/// Card plus spacing
pub const TIMELINE_ROW_HEIGHT: u16 = TIMELINE_CARD_HEIGHT + 1;
pub const FOOTER_HEIGHT: u16 = 3;

/// Rows available for page content in a terminal of `terminal_height` rows
pub fn viewport_height(terminal_height: u16) -> u16 {
    terminal_height.saturating_sub(HINT_BAR_HEIGHT)
}

/// Total page height for a timeline of `target_count` targets
pub fn content_height(target_count: usize) -> u16 {
    PageLayout::new(0, target_count).height
}

/// Section areas in page coordinates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLayout {
    pub header: Rect,
    pub overview: Rect,
    pub timeline: Rect,
    pub footer: Rect,
    pub height: u16,
}

impl PageLayout {
    pub fn new(width: u16, target_count: usize) -> Self {
        let rows = u16::try_from(target_count).unwrap_or(u16::MAX);
        let timeline_height = TIMELINE_TITLE_HEIGHT.saturating_add(rows.saturating_mul(TIMELINE_ROW_HEIGHT));

        let header = Rect::new(0, 0, width, HEADER_HEIGHT);
        let overview = Rect::new(0, header.bottom() + SECTION_GAP, width, OVERVIEW_HEIGHT);
        let timeline = Rect::new(0, overview.bottom() + SECTION_GAP, width, timeline_height);
        let footer = Rect::new(
            0,
            timeline.bottom().saturating_add(SECTION_GAP),
            width,
            FOOTER_HEIGHT,
        );

        Self {
            header,
            overview,
            timeline,
            footer,
            height: footer.bottom(),
        }
    }
}
