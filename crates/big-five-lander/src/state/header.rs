//! Header State

/// Animated header state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeaderState {
    /// Number of characters of the organization name already typed out
    pub shown_chars: usize,
}
