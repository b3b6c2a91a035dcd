use ratatui::widgets::ScrollbarState;

/// Scroll offset of a long text dialog and the matching scrollbar state
#[derive(Debug, Default, Clone)]
pub struct DialogScroll {
    pub offset: usize,
    pub state: ScrollbarState,
}

impl DialogScroll {
    pub fn scroll_up(&mut self) {
        self.set(self.offset.saturating_sub(1));
    }

    pub fn scroll_down(&mut self) {
        self.set(self.offset.saturating_add(1));
    }

    pub fn page_up(&mut self) {
        self.set(self.offset.saturating_sub(10));
    }

    pub fn page_down(&mut self) {
        self.set(self.offset.saturating_add(10));
    }

    pub fn scroll_to_top(&mut self) {
        self.set(0);
    }

    /// Rendering clamps the offset to the real content length
    pub fn scroll_to_bottom(&mut self) {
        self.set(usize::MAX);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Clamp the offset against the content and return the visible window start
    pub fn clamp(&mut self, total_lines: usize, visible_height: usize) -> usize {
        let max_scroll = total_lines.saturating_sub(visible_height);
        self.offset = self.offset.min(max_scroll);
        self.state = self
            .state
            .content_length(total_lines)
            .viewport_content_length(visible_height)
            .position(self.offset);
        self.offset
    }

    fn set(&mut self, offset: usize) {
        self.offset = offset;
        self.state = self.state.position(offset);
    }
}
