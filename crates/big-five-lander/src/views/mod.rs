use crate::state::AppState;
use ratatui::{layout::Rect, Frame};

pub mod dashboard_view;
pub mod layout;
pub mod particles_view;
pub mod splash_view;
pub mod timeline_view;

pub use dashboard_view::DashboardView;
pub use splash_view::SplashView;

/// View identifier - allows comparing which view is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewId {
    Splash,
    Dashboard,
}

/// View trait - defines the interface that all views must implement
///
/// Views travel inside actions (`ReplaceView`), so the trait must stay object-safe
/// and `Send`.
pub trait View: std::fmt::Debug + Send {
    /// Get the unique identifier for this view type
    fn view_id(&self) -> ViewId;

    /// Render this view
    fn render(&self, state: &AppState, area: Rect, f: &mut Frame);

    /// Clone this view into a Box
    /// This is needed because Clone requires Sized, so we provide a manual clone method
    fn clone_box(&self) -> Box<dyn View>;
}

/// Implement Clone for Box<dyn View>
impl Clone for Box<dyn View> {
    fn clone(&self) -> Box<dyn View> {
        self.clone_box()
    }
}

/// Render the entire application UI
///
/// Views are rendered bottom-up so views on top render last.
pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    for view in &state.view_stack {
        view.render(state, area, f);
    }
}
