//! Actions module
//!
//! All actions in the application, tagged by domain:
//! - `Global`: application-wide actions (keys, quit, tick, resize, view management)
//! - `Splash`: splash gate lifecycle
//! - `Reveal`: timeline reveal progress
//! - `Scroll`: dashboard scrolling

pub mod global;
pub mod reveal;
pub mod scroll;
pub mod splash;

pub use global::GlobalAction;
pub use reveal::RevealAction;
pub use scroll::ScrollAction;
pub use splash::SplashAction;

/// Root action enum - tagged by domain
#[derive(Debug, Clone)]
pub enum Action {
    /// Global application actions
    Global(GlobalAction),
    /// Splash screen actions
    Splash(SplashAction),
    /// Timeline reveal actions
    Reveal(RevealAction),
    /// Dashboard scroll actions
    Scroll(ScrollAction),

    /// No-op action
    None,
}
