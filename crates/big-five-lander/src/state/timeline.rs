//! Timeline State

/// Reveal progress of the strategic targets timeline
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimelineState {
    /// Number of targets revealed so far
    pub revealed: usize,
    /// Number of targets the sequencer counts up to
    pub total: usize,
}

impl TimelineState {
    pub fn is_complete(&self) -> bool {
        self.revealed >= self.total
    }
}
