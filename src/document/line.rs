use crate::config::Settings;
use crate::display_line::DisplayLine;

/// A view of one line of a document.
///
/// `Blank` is what the document hands out for indexes past its last line; it
/// is never stored. `Stored` borrows the bytes of a real line, which stay
/// valid only until the next mutation of the document.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Line<'a> {
    Blank,
    Stored(&'a [u8]),
}

impl<'a> Line<'a> {
    pub fn text(&self) -> &'a [u8] {
        match *self {
            Line::Blank => &[],
            Line::Stored(text) => text,
        }
    }

    pub fn size(&self) -> usize {
        self.text().len()
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Line::Blank)
    }

    pub fn display(&self, settings: &Settings) -> DisplayLine<'a> {
        DisplayLine::new(self.text(), settings)
    }
}
