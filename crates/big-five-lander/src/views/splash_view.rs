use crate::state::AppState;
use crate::view_models::SplashViewModel;
use crate::views::{View, ViewId};
use figlet_rs::FIGfont;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Stylize,
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

/// Width of the splash progress bar, in cells
const PROGRESS_WIDTH: usize = 24;

/// Splash screen view - covers the dashboard until the splash gate opens
#[derive(Debug, Clone)]
pub struct SplashView;

impl SplashView {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SplashView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for SplashView {
    fn view_id(&self) -> ViewId {
        ViewId::Splash
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        let vm = SplashViewModel::from_state(state, PROGRESS_WIDTH);
        render_splash(&vm, area, f);
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }
}

fn render_splash(vm: &SplashViewModel, area: Rect, f: &mut Frame) {
    f.render_widget(Block::default().style(vm.background), area);

    let title_lines = figlet_title(vm, area.width);
    let title_height = title_lines.len() as u16;

    let [_, title_area, _, pulse_area, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(title_height),
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Fill(1),
    ])
    .areas(area);

    f.render_widget(
        Paragraph::new(title_lines).alignment(Alignment::Center),
        title_area,
    );

    let lines = vec![
        Line::from(Span::styled(vm.pulse, vm.pulse_style.bold())),
        Line::from(""),
        Line::from(Span::styled(vm.progress_bar.clone(), vm.progress_style)),
        Line::from(Span::styled("Loading...", vm.pulse_style.dim())),
    ];
    f.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        pulse_area,
    );
}

/// FIGlet rendering of the organization name, or plain text when it would not fit
fn figlet_title(vm: &SplashViewModel, width: u16) -> Vec<Line<'static>> {
    let plain = || vec![Line::from(Span::styled(vm.title.clone(), vm.title_style))];

    let Ok(font) = FIGfont::standard() else {
        return plain();
    };
    let Some(figure) = font.convert(&vm.title) else {
        return plain();
    };

    let rendered = figure.to_string();
    let widest = rendered.lines().map(|l| l.chars().count()).max().unwrap_or(0);
    if widest > width as usize {
        return plain();
    }

    rendered
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| Line::from(Span::styled(line.to_string(), vm.title_style)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_narrow_terminal_falls_back_to_plain_title() {
        let mut terminal = Terminal::new(TestBackend::new(30, 12)).unwrap();
        let state = AppState::default();
        terminal
            .draw(|f| SplashView::new().render(&state, f.area(), f))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Casa Grande PropCare"));
        assert!(text.contains("Loading..."));
    }

    #[test]
    fn test_wide_terminal_renders_banner() {
        let mut terminal = Terminal::new(TestBackend::new(200, 20)).unwrap();
        let state = AppState::default();
        terminal
            .draw(|f| SplashView::new().render(&state, f.area(), f))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(!text.contains("Casa Grande PropCare"));
        assert!(text.contains("Loading..."));
    }
}
