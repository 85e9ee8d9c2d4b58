//! Application State

use crate::domain_models::{organization_overview, OverviewStat};
use crate::views::{SplashView, View};
use big_five_config::AppConfig;
use big_five_reveal::TargetItem;

use super::{HeaderState, ParticleField, ScrollState, SplashScreenState, TimelineState};

/// Drift per tick of the fastest particle, in page widths
const PARTICLE_SPEED: f32 = 0.002;

/// Application state
pub struct AppState {
    pub running: bool,
    /// Stack of views - bottom view is the base, top views are floating overlays
    pub view_stack: Vec<Box<dyn View>>,
    pub splash: SplashScreenState,
    pub header: HeaderState,
    pub timeline: TimelineState,
    pub scroll: ScrollState,
    pub particles: ParticleField,
    /// Strategic targets, in reveal order
    pub targets: Vec<TargetItem>,
    pub overview: Vec<OverviewStat>,
    pub theme: big_five_theme::Theme,
    pub config: AppConfig,
}

impl AppState {
    /// Build the initial state for a configuration
    pub fn new(config: AppConfig) -> Self {
        Self {
            running: true,
            view_stack: vec![Box::new(SplashView::new())],
            splash: SplashScreenState::default(),
            header: HeaderState::default(),
            timeline: TimelineState {
                revealed: 0,
                total: config.targets.len(),
            },
            scroll: ScrollState::default(),
            particles: ParticleField::new(config.particle_count, PARTICLE_SPEED),
            targets: config.targets.clone(),
            overview: organization_overview(),
            theme: big_five_theme::Theme::default(),
            config,
        }
    }

    /// Get the top-most (active) view from the stack
    pub fn active_view(&self) -> Option<&dyn View> {
        self.view_stack.last().map(|view| view.as_ref())
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("running", &self.running)
            .field("view_stack", &format!("{} views", self.view_stack.len()))
            .field("splash", &self.splash)
            .field("header", &self.header)
            .field("timeline", &self.timeline)
            .field("scroll", &self.scroll)
            .field("particles", &self.particles.particles.len())
            .field("targets", &self.targets.len())
            .field("theme", &"<theme>")
            .field("config", &self.config)
            .finish()
    }
}

impl Clone for AppState {
    fn clone(&self) -> Self {
        Self {
            running: self.running,
            view_stack: self.view_stack.clone(),
            splash: self.splash.clone(),
            header: self.header,
            timeline: self.timeline,
            scroll: self.scroll,
            particles: self.particles.clone(),
            targets: self.targets.clone(),
            overview: self.overview.clone(),
            theme: self.theme.clone(),
            config: self.config.clone(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
