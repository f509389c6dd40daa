/// Vertical scroll window over a list of rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollState {
    pub offset: u16,
    pub max_offset: u16,
    pub viewport_height: u16,
}

impl ScrollState {
    pub fn new() -> Self {
        Self {
            offset: 0,
            max_offset: 0,
            viewport_height: 0,
        }
    }

    pub fn update_bounds(&mut self, content_rows: usize, viewport_height: u16) {
        self.viewport_height = viewport_height;

        // Clamp to u16::MAX for ratatui compatibility
        self.max_offset = content_rows
            .saturating_sub(viewport_height as usize)
            .min(u16::MAX as usize) as u16;

        self.offset = self.offset.min(self.max_offset);
    }

    pub fn reset(&mut self) {
        self.offset = 0;
    }

    /// Scroll the minimum amount that brings `row` into the viewport
    pub fn ensure_visible(&mut self, row: usize) {
        if self.viewport_height == 0 {
            return;
        }

        let row = row.min(u16::MAX as usize) as u16;
        let visible_end = self.offset.saturating_add(self.viewport_height);

        if row < self.offset {
            self.offset = row;
        } else if row >= visible_end {
            let new_offset = row.saturating_add(1).saturating_sub(self.viewport_height);
            self.offset = new_offset.min(self.max_offset);
        }
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}
