//! Timeline reveal actions

/// Actions for the staged timeline reveal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealAction {
    /// Restart the reveal from zero
    Replay,
    /// The sequencer advanced
    Progress { count: usize, max: usize },
}
