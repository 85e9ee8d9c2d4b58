//! Application State Module
//!
//! Contains all state types used by the application, organized by feature.

mod app;
mod header;
mod particles;
mod scroll;
mod splash;
mod timeline;

pub use app::AppState;
pub use header::HeaderState;
pub use particles::{Particle, ParticleField};
pub use scroll::ScrollState;
pub use splash::SplashScreenState;
pub use timeline::TimelineState;
