use crate::state::ParticleField;
use big_five_theme::Theme;
use ratatui::{buffer::Buffer, layout::Rect};

const PARTICLE: &str = "·";

/// Sprinkle the particle field over the blank cells of `area`
///
/// Drawn after the page content, so particles only show through empty space.
pub fn render_particles(field: &ParticleField, theme: &Theme, area: Rect, buf: &mut Buffer) {
    if area.is_empty() {
        return;
    }

    for p in &field.particles {
        let x = area.x + ((p.x * area.width as f32) as u16).min(area.width - 1);
        let y = area.y + ((p.y * area.height as f32) as u16).min(area.height - 1);

        let cell = &mut buf[(x, y)];
        if cell.symbol() == " " {
            let color = theme.particle_colors[p.color % theme.particle_colors.len()];
            cell.set_symbol(PARTICLE).set_fg(color);
        }
    }
}
