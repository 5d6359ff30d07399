use std::cmp::Ordering;

/// Address of a byte inside a document: line index plus byte offset.
///
/// A location is not guaranteed to point at a real place until it has been
/// sanitized by the document it is used with.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Location {
    pub line: usize,
    pub offset: usize,
}

impl Location {
    pub fn new(line: usize, offset: usize) -> Location {
        Location { line, offset }
    }
}

impl Ord for Location {
    fn cmp(&self, other: &Self) -> Ordering {
        self.line
            .cmp(&other.line)
            .then(self.offset.cmp(&other.offset))
    }
}

impl PartialOrd for Location {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Screen address: row maps to a line index, column is tab-expanded.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    pub fn new(row: usize, column: usize) -> Position {
        Position { row, column }
    }
}

/// Span between two locations. The endpoints may be given in either order;
/// `begin()` is always the lesser of the two.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Range {
    from: Location,
    to: Location,
}

impl Range {
    pub fn new(from: Location, to: Location) -> Range {
        Range { from, to }
    }

    /// Zero-width range sitting at a single location.
    pub fn caret(at: Location) -> Range {
        Range { from: at, to: at }
    }

    pub fn begin(&self) -> Location {
        std::cmp::min(self.from, self.to)
    }

    pub fn end(&self) -> Location {
        std::cmp::max(self.from, self.to)
    }

    pub fn is_empty(&self) -> bool {
        self.from == self.to
    }

    pub fn contains_line(&self, line: usize) -> bool {
        self.begin().line <= line && line <= self.end().line
    }
}
