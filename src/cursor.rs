use crate::document::{Location, Range};

/// Caret of an editing session, with an optional selection anchor.
pub struct Cursor {
    pub location: Location,
    pub anchor: Option<Location>,
    /// Display column kept across vertical moves through shorter lines.
    pub target_column: Option<usize>,
}

impl Cursor {
    pub fn new() -> Cursor {
        Cursor {
            location: Location::default(),
            anchor: None,
            target_column: None,
        }
    }

    /// Moves to `location`. With `extend` the selection grows from the
    /// current anchor (or from the old location if there is none); without
    /// it any selection is dropped.
    pub fn moved(&mut self, location: Location, extend: bool) {
        if extend {
            if self.anchor.is_none() {
                self.anchor = Some(self.location);
            }
        } else {
            self.anchor = None;
        }
        self.location = location;
    }

    /// Places the caret after an edit; the selection and sticky column are
    /// cleared.
    pub fn placed(&mut self, location: Location) {
        self.location = location;
        self.anchor = None;
        self.target_column = None;
    }

    pub fn selection(&self) -> Option<Range> {
        match self.anchor {
            Some(anchor) if anchor != self.location => Some(Range::new(anchor, self.location)),
            _ => None,
        }
    }
}

impl Default for Cursor {
    fn default() -> Cursor {
        Cursor::new()
    }
}
