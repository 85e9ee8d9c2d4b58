//! Dashboard view
//!
//! The whole page is drawn into an off-screen buffer of its full height, then the
//! rows under the scroll offset are copied into the frame. The key hint bar stays
//! pinned to the last terminal row.

use crate::state::AppState;
use crate::view_models::{
    FooterViewModel, HeaderViewModel, HintBarViewModel, OverviewViewModel, TimelineViewModel,
};
use crate::views::layout::{PageLayout, HINT_BAR_HEIGHT, OVERVIEW_CARD_HEIGHT};
use crate::views::particles_view::render_particles;
use crate::views::timeline_view::TimelineWidget;
use crate::views::{View, ViewId};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::Stylize,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
    Frame,
};

/// Dashboard view - header, overview, timeline and footer on one scrollable page
#[derive(Debug, Clone)]
pub struct DashboardView;

impl DashboardView {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DashboardView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for DashboardView {
    fn view_id(&self) -> ViewId {
        ViewId::Dashboard
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        let [page_area, hint_area] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(HINT_BAR_HEIGHT)])
                .areas(area);

        let page = render_page(state, area.width);
        copy_rows(&page, state.scroll.offset, page_area, f.buffer_mut());

        render_hint_bar(&HintBarViewModel::from_state(state), hint_area, f);
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }
}

/// Draw the full page at `width` columns
fn render_page(state: &AppState, width: u16) -> Buffer {
    let layout = PageLayout::new(width, state.targets.len());
    let page_area = Rect::new(0, 0, width, layout.height);
    let mut buf = Buffer::empty(page_area);

    Block::default()
        .style(state.theme.page_background())
        .render(page_area, &mut buf);

    render_header(&HeaderViewModel::from_state(state), layout.header, &mut buf);
    render_overview(&OverviewViewModel::from_state(state), layout.overview, &mut buf);
    TimelineWidget(&TimelineViewModel::from_state(state)).render(layout.timeline, &mut buf);
    render_footer(&FooterViewModel::from_state(state), layout.footer, &mut buf);

    render_particles(&state.particles, &state.theme, page_area, &mut buf);
    buf
}

/// Copy page rows starting at `offset` into `area` of the frame buffer
fn copy_rows(page: &Buffer, offset: u16, area: Rect, out: &mut Buffer) {
    let visible = area.height.min(page.area.height.saturating_sub(offset));
    let width = area.width.min(page.area.width);

    for y in 0..visible {
        for x in 0..width {
            out[(area.x + x, area.y + y)] = page[(x, offset + y)].clone();
        }
    }
}

fn render_header(vm: &HeaderViewModel, area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(vm.border_style);

    let mut name = vec![Span::styled(vm.name.clone(), vm.name_style)];
    if vm.typing {
        name.push(Span::styled("▌", vm.name_style.slow_blink()));
    }

    Paragraph::new(vec![
        Line::from(""),
        Line::from(name),
        Line::from(Span::styled(vm.subtitle, vm.subtitle_style)),
    ])
    .alignment(Alignment::Center)
    .block(block)
    .render(area, buf);
}

fn render_overview(vm: &OverviewViewModel, area: Rect, buf: &mut Buffer) {
    let [title_area, _, cards_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Length(OVERVIEW_CARD_HEIGHT),
    ])
    .areas(area);

    Paragraph::new(vec![
        Line::from(Span::styled(vm.title, vm.title_style)),
        Line::from(Span::styled(vm.subtitle, vm.subtitle_style)),
    ])
    .alignment(Alignment::Center)
    .render(title_area, buf);

    let columns = Layout::horizontal(vm.cards.iter().map(|_| Constraint::Fill(1)))
        .flex(Flex::Center)
        .spacing(1)
        .split(cards_area);

    for (card, column) in vm.cards.iter().zip(columns.iter()) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(vm.border_style);

        Paragraph::new(vec![
            Line::from(vec![
                Span::styled(card.glyph, vm.value_style),
                Span::raw(" "),
                Span::styled(card.label, vm.label_style),
            ]),
            Line::from(""),
            Line::from(Span::styled(card.value, vm.value_style)),
            Line::from(Span::styled(card.description, vm.description_style)),
        ])
        .alignment(Alignment::Center)
        .block(block)
        .render(*column, buf);
    }
}

fn render_footer(vm: &FooterViewModel, area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(vm.copyright_style);

    Paragraph::new(vec![
        Line::from(Span::styled(vm.copyright.clone(), vm.copyright_style)),
        Line::from(Span::styled(vm.tagline.clone(), vm.tagline_style)),
    ])
    .alignment(Alignment::Center)
    .block(block)
    .render(area, buf);
}

fn render_hint_bar(vm: &HintBarViewModel, area: Rect, f: &mut Frame) {
    let mut spans = Vec::new();
    for (key, description) in &vm.hints {
        spans.push(Span::styled(format!(" {} ", key), vm.key_style));
        spans.push(Span::styled(format!("{} ", description), vm.description_style));
    }

    let [hints_area, progress_area] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(vm.progress.chars().count() as u16 + 1),
    ])
    .areas(area);

    f.render_widget(Block::default().style(vm.background), area);
    f.render_widget(Paragraph::new(Line::from(spans)), hints_area);
    f.render_widget(
        Paragraph::new(Span::styled(vm.progress.clone(), vm.description_style)),
        progress_area,
    );
}
