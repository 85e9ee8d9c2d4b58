//! Strategic targets timeline widget
//!
//! Three columns: left cards, the rail with one dot per target, right cards. Narrow
//! terminals get a single stacked column with the rail on the left.

use crate::view_models::{TargetCardViewModel, TimelineViewModel};
use crate::views::layout::{TIMELINE_CARD_HEIGHT, TIMELINE_ROW_HEIGHT, TIMELINE_TITLE_HEIGHT};
use big_five_reveal::Placement;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

/// Width of the rail column
const RAIL_WIDTH: u16 = 3;
/// Below this width both sides would clip, so cards stack in one column
const STACKED_BELOW: u16 = 60;

pub struct TimelineWidget<'a>(pub &'a TimelineViewModel);

impl Widget for TimelineWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let vm = self.0;
        if area.is_empty() || area.width < RAIL_WIDTH {
            return;
        }

        let [title_area, rows_area] =
            Layout::vertical([Constraint::Length(TIMELINE_TITLE_HEIGHT), Constraint::Fill(1)])
                .areas(area);

        Paragraph::new(vec![
            Line::from(Span::styled(vm.title, vm.title_style)),
            Line::from(Span::styled(vm.subtitle, vm.subtitle_style)),
        ])
        .alignment(Alignment::Center)
        .render(title_area, buf);

        let stacked = rows_area.width < STACKED_BELOW;
        let (left, rail, right) = if stacked {
            let [rail, cards] =
                Layout::horizontal([Constraint::Length(RAIL_WIDTH), Constraint::Fill(1)])
                    .areas(rows_area);
            (cards, rail, cards)
        } else {
            let [left, rail, right] = Layout::horizontal([
                Constraint::Fill(1),
                Constraint::Length(RAIL_WIDTH),
                Constraint::Fill(1),
            ])
            .areas(rows_area);
            (left, rail, right)
        };

        let rail_x = rail.x + RAIL_WIDTH / 2;
        for y in rows_area.top()..rows_area.bottom() {
            buf[(rail_x, y)].set_symbol("│").set_style(vm.rail_style);
        }

        for row in &vm.rows {
            let offset = u16::try_from(row.index)
                .unwrap_or(u16::MAX)
                .saturating_mul(TIMELINE_ROW_HEIGHT);
            let top = rows_area.y.saturating_add(offset);
            if top >= rows_area.bottom() {
                break;
            }
            let height = TIMELINE_CARD_HEIGHT.min(rows_area.bottom() - top);

            let dot_y = top + TIMELINE_CARD_HEIGHT / 2;
            if dot_y < rows_area.bottom() {
                buf[(rail_x, dot_y)].set_symbol(row.dot).set_style(row.dot_style);
            }

            if let Some(card) = &row.card {
                // Cards read towards the rail
                let (column, alignment) = match row.placement {
                    _ if stacked => (right, Alignment::Left),
                    Placement::Left => (left, Alignment::Right),
                    Placement::Right => (right, Alignment::Left),
                };
                let card_area = Rect::new(column.x, top, column.width, height);
                render_card(card, alignment, card_area, buf);
            }
        }
    }
}

fn render_card(card: &TargetCardViewModel, alignment: Alignment, area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(card.border_style);

    let lines = vec![
        Line::from(vec![
            Span::styled(format!(" {} ", card.glyph), card.badge_style),
            Span::raw(" "),
            Span::styled(card.title.clone(), card.title_style),
        ]),
        Line::from(Span::styled(card.value.clone(), card.value_style)),
        Line::from(Span::styled(card.target_line.clone(), card.target_style)),
    ];

    Paragraph::new(lines)
        .block(block)
        .alignment(alignment)
        .render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;

    fn render(revealed: usize) -> Buffer {
        render_at(80, revealed)
    }

    fn render_at(width: u16, revealed: usize) -> Buffer {
        let mut state = AppState::default();
        state.timeline.revealed = revealed;
        let vm = TimelineViewModel::from_state(&state);

        let height = TIMELINE_TITLE_HEIGHT + 5 * TIMELINE_ROW_HEIGHT;
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        TimelineWidget(&vm).render(area, &mut buf);
        buf
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
    }

    /// Cell column of the first occurrence of `needle` in row `y`
    fn column_of(buf: &Buffer, y: u16, needle: &str) -> usize {
        let text = row_text(buf, y);
        let byte = text.find(needle).unwrap();
        text[..byte].chars().count()
    }

    fn all_text(buf: &Buffer) -> String {
        (0..buf.area.height).map(|y| row_text(buf, y)).collect::<Vec<_>>().join("\n")
    }

    #[test]
    fn test_hidden_targets_are_not_drawn() {
        let buf = render(0);
        let text = all_text(&buf);
        assert!(text.contains("Strategic Targets 2025"));
        assert!(!text.contains("Revenue"));
        assert_eq!(text.matches('○').count(), 5);
    }

    #[test]
    fn test_cards_alternate_sides() {
        let buf = render(2);

        let middle = (buf.area.width / 2) as usize;

        let revenue_row = TIMELINE_TITLE_HEIGHT + 1;
        assert!(column_of(&buf, revenue_row, "Revenue") < middle);

        let collection_row = revenue_row + TIMELINE_ROW_HEIGHT;
        assert!(column_of(&buf, collection_row, "Collection") > middle);

        let text = all_text(&buf);
        assert_eq!(text.matches('●').count(), 2);
        assert_eq!(text.matches('○').count(), 3);
        assert!(!text.contains("New Business"));
    }

    #[test]
    fn test_narrow_terminal_stacks_cards() {
        let buf = render_at(40, 2);

        let revenue_row = TIMELINE_TITLE_HEIGHT + 1;
        let collection_row = revenue_row + TIMELINE_ROW_HEIGHT;
        let revenue_at = column_of(&buf, revenue_row, "Revenue");
        let collection_at = column_of(&buf, collection_row, "Collection");

        assert_eq!(revenue_at, collection_at);
        assert!(revenue_at > RAIL_WIDTH as usize);
        assert_eq!(row_text(&buf, revenue_row + 1).chars().nth(1), Some('●'));
    }
}
