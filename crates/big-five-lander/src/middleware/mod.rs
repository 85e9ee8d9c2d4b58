use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::state::AppState;

pub mod keyboard_middleware;
pub mod logging;
pub mod reveal_middleware;
pub mod splash_middleware;

pub use keyboard_middleware::KeyboardMiddleware;
pub use logging::LoggingMiddleware;
pub use reveal_middleware::RevealMiddleware;
pub use splash_middleware::SplashMiddleware;

/// Middleware trait - intercepts actions before they reach the reducer
///
/// Middleware runs on the UI thread, so anything slow (timers included) must be handed
/// to the tokio runtime and report back through the [`Dispatcher`].
pub trait Middleware: Send {
    /// Handle an action
    ///
    /// - `action`: The action to process
    /// - `state`: Current application state (read-only)
    /// - `dispatcher`: Use to dispatch actions that should re-enter middleware chain
    ///
    /// Returns `true` to continue chain, `false` to consume action
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool;
}
