use crate::document::Position;

/// The part of the document visible on screen, in rows and display columns.
pub struct Window {
    pub height: u16,
    pub width: u16,
    pub vertical_offset: usize,
    pub horizontal_offset: usize,
}

impl Window {
    pub fn new(height: u16, width: u16) -> Window {
        Window {
            height,
            width,
            vertical_offset: 0,
            horizontal_offset: 0,
        }
    }

    pub fn resize(&mut self, height: u16, width: u16) {
        self.height = height;
        self.width = width;
    }

    pub fn bottom(&self) -> usize {
        self.vertical_offset.saturating_add(self.height as usize)
    }

    pub fn right(&self) -> usize {
        self.horizontal_offset.saturating_add(self.width as usize)
    }

    /// Scrolls the least amount needed for `position` to be visible.
    pub fn update_offsets(&mut self, position: Position) {
        if position.row < self.vertical_offset {
            self.vertical_offset = position.row;
        }
        if position.row >= self.bottom() {
            self.vertical_offset += position.row - self.bottom() + 1;
        }
        if position.column < self.horizontal_offset {
            self.horizontal_offset = position.column;
        }
        if position.column >= self.right() {
            self.horizontal_offset += position.column - self.right() + 1;
        }
    }

    /// Screen cell of `position` relative to the window's top-left corner,
    /// if it is inside the window.
    pub fn relative(&self, position: Position) -> Option<(u16, u16)> {
        if position.row < self.vertical_offset
            || position.row >= self.bottom()
            || position.column < self.horizontal_offset
            || position.column >= self.right()
        {
            return None;
        }

        Some((
            (position.column - self.horizontal_offset) as u16,
            (position.row - self.vertical_offset) as u16,
        ))
    }
}
