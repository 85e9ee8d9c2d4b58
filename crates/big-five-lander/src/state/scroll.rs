//! Scroll State

/// Vertical scroll position of the dashboard page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollState {
    /// First page row shown at the top of the viewport
    pub offset: u16,
    /// Rows available for page content
    pub viewport_height: u16,
}

impl ScrollState {
    /// Largest valid offset for a page of `content_height` rows
    pub fn max_offset(&self, content_height: u16) -> u16 {
        content_height.saturating_sub(self.viewport_height)
    }

    /// Move by `delta` rows, staying within the page
    pub fn scroll_by(&mut self, delta: i32, content_height: u16) {
        let target = (i32::from(self.offset) + delta).clamp(0, i32::from(self.max_offset(content_height)));
        self.offset = u16::try_from(target).unwrap_or(0);
    }

    /// Pull the offset back inside the page after a resize
    pub fn clamp(&mut self, content_height: u16) {
        self.offset = self.offset.min(self.max_offset(content_height));
    }
}
