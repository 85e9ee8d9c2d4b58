//! Staged reveal controller for the Big Five dashboard
//!
//! This crate provides:
//! - A cancel-on-drop one-shot timer ([`OneShot`])
//! - The splash gate that keeps main content hidden until its timer fires ([`SplashGate`])
//! - The reveal sequencer that counts up to the number of targets at a fixed cadence
//!   ([`RevealSequencer`])
//! - The staged display projection used by the timeline ([`stage`])
//! - The static strategic target list ([`TargetItem`], [`big_five_targets`])
//!
//! All timers are tokio tasks, so the controllers must be driven from within a tokio
//! runtime context.

pub mod sequencer;
pub mod splash;
pub mod staged;
pub mod target;
pub mod timer;

pub use sequencer::{RevealSequencer, RevealState};
pub use splash::{SplashGate, SplashState};
pub use staged::{stage, Placement, StagedItem};
pub use target::{big_five_targets, ColorToken, Icon, TargetItem};
pub use timer::OneShot;
