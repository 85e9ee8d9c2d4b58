use big_five_reveal::ColorToken;
use ratatui::style::{palette::tailwind, Color, Modifier, Style};

/// Application theme - centralized color and style management
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg_primary: Color,
    pub bg_panel: Color,
    pub bg_splash: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // Brand colors
    pub brand_gold: Color,
    pub brand_dark: Color,
    pub brand_gray: Color,

    // Timeline
    pub timeline_rail: Color,
    pub card_border: Color,

    /// Colors particles cycle through
    pub particle_colors: [Color; 3],
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            bg_primary: tailwind::NEUTRAL.c950,
            bg_panel: tailwind::NEUTRAL.c900,
            bg_splash: Color::Black,

            text_primary: tailwind::NEUTRAL.c100,
            text_secondary: tailwind::NEUTRAL.c300,
            text_muted: tailwind::NEUTRAL.c500,

            brand_gold: Color::Rgb(0xF4, 0xA0, 0x19),
            brand_dark: Color::Rgb(0x3A, 0x3A, 0x3A),
            brand_gray: Color::Rgb(0x6C, 0x6C, 0x6C),

            timeline_rail: tailwind::NEUTRAL.c800,
            card_border: tailwind::NEUTRAL.c700,

            particle_colors: [
                Color::Rgb(0xF4, 0xA0, 0x19),
                Color::Rgb(0xBB, 0xBB, 0xBB),
                Color::Rgb(0x88, 0x88, 0x88),
            ],
        }
    }

    /// Resolve a target color token
    pub fn token(&self, token: ColorToken) -> Color {
        match token {
            ColorToken::Blue => tailwind::BLUE.c600,
            ColorToken::Green => tailwind::GREEN.c600,
            ColorToken::Purple => tailwind::VIOLET.c600,
            ColorToken::Orange => tailwind::ORANGE.c600,
            ColorToken::Indigo => tailwind::INDIGO.c600,
            ColorToken::Gray => tailwind::GRAY.c400,
        }
    }

    // Prebuilt styles for common use cases

    /// Style for the page background
    pub fn page_background(&self) -> Style {
        Style::default().bg(self.bg_primary)
    }

    /// Style for panel backgrounds (cards)
    pub fn panel_background(&self) -> Style {
        Style::default().bg(self.bg_panel)
    }

    /// Style for the splash screen backdrop
    pub fn splash_background(&self) -> Style {
        Style::default().bg(self.bg_splash)
    }

    /// Style for card borders
    pub fn card_border(&self) -> Style {
        Style::default().fg(self.card_border)
    }

    /// Style for section titles
    pub fn section_title(&self) -> Style {
        Style::default()
            .fg(self.brand_gold)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for large metric values
    pub fn metric_value(&self) -> Style {
        Style::default()
            .fg(self.brand_gold)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for an icon badge in a target color
    pub fn badge(&self, token: ColorToken) -> Style {
        Style::default()
            .fg(Color::White)
            .bg(self.token(token))
            .add_modifier(Modifier::BOLD)
    }

    /// Style for primary text
    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Style for secondary text
    pub fn text_secondary(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Style for muted/helper text
    pub fn muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Style for key hints (e.g., "q" in "q quit")
    pub fn key_hint(&self) -> Style {
        Style::default()
            .fg(self.brand_gold)
            .add_modifier(Modifier::BOLD)
    }
}
