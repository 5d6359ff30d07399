use crate::config::Settings;
use std::io::{self, Write};

const TAB: u8 = b'\t';
const PLACEHOLDER: u8 = b'?';

/// Translates between byte offsets and screen columns for one line.
///
/// Every byte occupies one column except tab, which advances to the next
/// tab stop. A tab sitting exactly on a stop advances a full tab width.
pub struct DisplayLine<'a> {
    text: &'a [u8],
    tab_width: usize,
}

impl<'a> DisplayLine<'a> {
    pub fn new(text: &'a [u8], settings: &Settings) -> DisplayLine<'a> {
        DisplayLine {
            text,
            tab_width: settings.tab_stop(),
        }
    }

    pub fn text(&self) -> &'a [u8] {
        self.text
    }

    pub fn size(&self) -> usize {
        self.text.len()
    }

    /// Total rendered width of the line.
    pub fn width(&self) -> usize {
        self.text
            .iter()
            .fold(0, |column, &byte| self.advance(byte, column))
    }

    /// Display column of the byte at `offset`. Offsets past the end of the
    /// line are clamped to its length.
    pub fn column(&self, offset: usize) -> usize {
        let offset = std::cmp::min(offset, self.text.len());
        self.text[..offset]
            .iter()
            .fold(0, |column, &byte| self.advance(byte, column))
    }

    /// Greatest offset whose column does not exceed `column`. A column inside
    /// an expanded tab resolves to the tab itself; a column at or past the
    /// line's width resolves to the end of the line.
    pub fn offset(&self, column: usize) -> usize {
        let mut current = 0;
        for (offset, &byte) in self.text.iter().enumerate() {
            let next = self.advance(byte, current);
            if next > column {
                return offset;
            }
            current = next;
        }

        self.text.len()
    }

    /// Writes up to `width` columns of the line, starting at column
    /// `horizontal_offset`, into `out`. Tabs are expanded to spaces; the
    /// visible part of a tab cut by either edge is drawn as spaces so later
    /// bytes keep their columns. Returns the number of columns written.
    pub fn paint(
        &self,
        out: &mut impl Write,
        horizontal_offset: usize,
        width: usize,
    ) -> io::Result<usize> {
        let right = horizontal_offset.saturating_add(width);
        let mut rendered = Vec::with_capacity(width);
        let mut column = 0;

        for &byte in self.text.iter() {
            if column >= right {
                break;
            }

            let next = self.advance(byte, column);
            if next <= horizontal_offset {
                column = next;
                continue;
            }

            match byte {
                TAB => {
                    let start = std::cmp::max(column, horizontal_offset);
                    let end = std::cmp::min(next, right);
                    rendered.extend(std::iter::repeat(b' ').take(end - start));
                }
                byte if byte < 0x20 || byte == 0x7f => rendered.push(PLACEHOLDER),
                byte => rendered.push(byte),
            }
            column = next;
        }

        out.write_all(&rendered)?;
        Ok(rendered.len())
    }

    fn advance(&self, byte: u8, column: usize) -> usize {
        match byte {
            TAB => column + self.tab_width - (column % self.tab_width),
            _ => column + 1,
        }
    }
}
