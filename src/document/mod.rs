pub mod coordinates;
pub mod line;

pub use coordinates::{Location, Position, Range};
pub use line::Line;

use crate::config::Settings;
use crate::file;
use std::path::Path;
use tracing::{debug, warn};

const LINE_BREAK: u8 = b'\n';

/// The text of an open file, held as a sequence of lines.
///
/// Lines never contain a line break; breaks are implied by position in the
/// sequence. Lines are never edited in place: every change builds a new line
/// and replaces the old entry. Coordinates supplied by callers are clamped to
/// the nearest real address, so no operation fails.
#[derive(Clone)]
pub struct Document {
    lines: Vec<Box<[u8]>>,
    maxline: usize,
    settings: Settings,
}

impl Document {
    pub fn new(settings: Settings) -> Document {
        Document {
            lines: Vec::new(),
            maxline: 0,
            settings,
        }
    }

    /// Loads the file at `path`, one line per line of input. A file that
    /// cannot be read yields an empty document.
    pub fn open(path: &Path, settings: Settings) -> Document {
        let mut document = Document::new(settings);
        match file::load(path) {
            Ok(lines) => {
                for line in lines {
                    document.append_line(line);
                }
                debug!(path = %path.display(), lines = document.line_count(), "loaded document");
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "could not read file, starting empty");
            }
        }

        document
    }

    /// Builds a document from in-memory text, splitting on line breaks the
    /// same way a file load does.
    pub fn from_text(text: &[u8], settings: Settings) -> Document {
        let mut document = Document::new(settings);
        if text.is_empty() {
            return document;
        }

        let text = text.strip_suffix(&[LINE_BREAK]).unwrap_or(text);
        for line in text.split(|b| *b == LINE_BREAK) {
            document.append_line(line.to_vec());
        }

        document
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Index of the last line; zero for an empty document.
    pub fn maxline(&self) -> usize {
        self.maxline
    }

    /// The line at `index`, or a blank line when there is no such line.
    pub fn line(&self, index: usize) -> Line<'_> {
        match self.lines.get(index) {
            Some(text) => Line::Stored(text),
            None => Line::Blank,
        }
    }

    pub fn lines(&self) -> impl Iterator<Item = Line<'_>> {
        self.lines.iter().map(|text| Line::Stored(text))
    }

    pub fn home(&self) -> Location {
        Location::new(0, 0)
    }

    pub fn end(&self) -> Location {
        Location::new(self.maxline, self.line(self.maxline).size())
    }

    /// Range spanning the whole document.
    pub fn all(&self) -> Range {
        Range::new(self.home(), self.end())
    }

    /// Screen position of `loc`; the row is clamped to the last line.
    pub fn position(&self, loc: Location) -> Position {
        let row = std::cmp::min(self.maxline, loc.line);
        let column = self.line(row).display(&self.settings).column(loc.offset);
        Position::new(row, column)
    }

    /// Location under the screen position `pos`; the row is clamped to the
    /// last line and the column resolves to the greatest offset at or
    /// before it.
    pub fn location(&self, pos: Position) -> Location {
        let line = std::cmp::min(self.maxline, pos.row);
        let offset = self.line(line).display(&self.settings).offset(pos.column);
        Location::new(line, offset)
    }

    /// One byte forward, wrapping to the start of the next line. Unchanged at
    /// the end of the document.
    pub fn next(&self, loc: Location) -> Location {
        let mut loc = self.sanitize(loc);
        if loc.offset < self.line(loc.line).size() {
            loc.offset += 1;
        } else if loc.line < self.maxline {
            loc.line += 1;
            loc.offset = 0;
        }
        loc
    }

    /// One byte back, wrapping to the end of the previous line. Unchanged at
    /// the start of the document.
    pub fn prev(&self, loc: Location) -> Location {
        let mut loc = self.sanitize(loc);
        if loc.offset > 0 {
            loc.offset -= 1;
        } else if loc.line > 0 {
            loc.line -= 1;
            loc.offset = self.line(loc.line).size();
        }
        loc
    }

    /// Bytes covered by `span`, with a single line break for every line
    /// boundary crossed.
    pub fn text(&self, span: &Range) -> Vec<u8> {
        let end = std::cmp::min(self.sanitize(span.end()), self.end());
        let begin = std::cmp::min(self.sanitize(span.begin()), end);

        let mut out = Vec::new();
        let mut loc = begin;
        let mut chunk = self.substr_to_end(loc);
        while loc.line < end.line {
            out.extend_from_slice(chunk);
            out.push(LINE_BREAK);
            loc.line += 1;
            loc.offset = 0;
            chunk = self.line(loc.line).text();
        }
        out.extend_from_slice(&chunk[..end.offset - loc.offset]);
        out
    }

    /// Inserts a single byte and returns the location just after it. At one
    /// past the last line, a new line holding the byte is appended. A line
    /// break splits the line.
    pub fn insert(&mut self, loc: Location, byte: u8) -> Location {
        if byte == LINE_BREAK {
            return self.split(loc);
        }

        let mut loc = self.sanitize(loc);
        if loc.line < self.lines.len() {
            let mut text = self.line(loc.line).text().to_vec();
            text.insert(loc.offset, byte);
            self.update_line(loc.line, text);
            loc.offset += 1;
        } else {
            loc.line = self.append_line(vec![byte]);
            loc.offset = 1;
        }
        loc
    }

    /// Inserts text which may contain line breaks. Each break starts a new
    /// line; the part of the original line after `loc` ends up after the
    /// inserted text. Returns the location just after the inserted text.
    pub fn insert_text(&mut self, loc: Location, text: &[u8]) -> Location {
        let mut loc = self.sanitize(loc);
        if text.is_empty() {
            return loc;
        }

        // Hold back the tail of the line while segments are appended, then
        // put it back after the last one.
        let suffix = self.substr_to_end(loc).to_vec();
        let prefix = self.substr_from_home(loc).to_vec();
        self.update_line(loc.line, prefix);

        let mut segments = text.split(|b| *b == LINE_BREAK);
        if let Some(first) = segments.next() {
            self.append_to_line(loc.line, first);
        }
        for segment in segments {
            loc.line += 1;
            self.insert_line(loc.line, segment.to_vec());
        }

        loc.offset = self.line(loc.line).size();
        self.append_to_line(loc.line, &suffix);
        loc
    }

    /// Breaks the line at `loc` in two and returns the start of the second
    /// half.
    pub fn split(&mut self, loc: Location) -> Location {
        let loc = self.sanitize(loc);
        let text = self.line(loc.line).text();
        let (head, tail) = text.split_at(loc.offset);
        let (head, tail) = (head.to_vec(), tail.to_vec());

        self.update_line(loc.line, head);
        self.insert_line(loc.line + 1, tail);
        Location::new(loc.line + 1, 0)
    }

    /// Removes the text covered by `chars`, joining its first and last lines.
    /// Returns the join point.
    pub fn erase(&mut self, chars: &Range) -> Location {
        if self.lines.is_empty() {
            return self.home();
        }

        let begin = self.sanitize(chars.begin());
        if begin.line >= self.lines.len() {
            return begin;
        }
        let end = self.sanitize(chars.end());

        let mut joined = self.substr_from_home(begin).to_vec();
        joined.extend_from_slice(self.substr_to_end(end));

        let last = std::cmp::min(end.line, self.lines.len() - 1);
        self.lines.drain(begin.line + 1..last + 1);
        self.update_line(begin.line, joined);
        self.update_maxline();

        Location::new(begin.line, begin.offset)
    }

    /// Clamps `loc` to an address the document can act on: the line may be
    /// at most one past the last line, and the offset at most that line's
    /// length.
    pub fn sanitize(&self, loc: Location) -> Location {
        let line = std::cmp::min(loc.line, self.lines.len());
        let offset = std::cmp::min(loc.offset, self.line(line).size());
        Location::new(line, offset)
    }

    fn substr_from_home(&self, loc: Location) -> &[u8] {
        let text = self.line(loc.line).text();
        &text[..std::cmp::min(text.len(), loc.offset)]
    }

    fn substr_to_end(&self, loc: Location) -> &[u8] {
        let text = self.line(loc.line).text();
        &text[std::cmp::min(text.len(), loc.offset)..]
    }

    /// Replaces the line at `index`, or appends when `index` is past the end.
    fn update_line(&mut self, index: usize, text: Vec<u8>) {
        debug_assert!(!text.contains(&LINE_BREAK));
        if index < self.lines.len() {
            self.lines[index] = text.into_boxed_slice();
        } else {
            self.lines.push(text.into_boxed_slice());
            self.update_maxline();
        }
    }

    fn insert_line(&mut self, index: usize, text: Vec<u8>) {
        debug_assert!(!text.contains(&LINE_BREAK));
        let index = std::cmp::min(index, self.lines.len());
        self.lines.insert(index, text.into_boxed_slice());
        self.update_maxline();
    }

    fn append_line(&mut self, text: Vec<u8>) -> usize {
        let index = self.lines.len();
        self.update_line(index, text);
        index
    }

    fn append_to_line(&mut self, index: usize, suffix: &[u8]) {
        let mut text = self.line(index).text().to_vec();
        text.extend_from_slice(suffix);
        self.update_line(index, text);
    }

    fn update_maxline(&mut self) {
        self.maxline = self.lines.len().saturating_sub(1);
    }
}
