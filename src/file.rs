use crate::document::Document;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Reads `path` as a sequence of lines. Line breaks are dropped; a final line
/// without a trailing break is kept.
pub fn load(path: &Path) -> io::Result<Vec<Vec<u8>>> {
    let reader = BufReader::new(File::open(path)?);
    reader.split(b'\n').collect()
}

/// Writes the whole document to `path`, ending every line with a break.
pub fn save(path: &Path, document: &Document) -> io::Result<()> {
    let file = &mut BufWriter::new(File::create(path)?);
    if !document.is_empty() {
        file.write_all(&document.text(&document.all()))?;
        file.write_all(b"\n")?;
    }
    file.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::document::Location;
    use std::fs;

    #[test]
    fn load_splits_on_line_breaks() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lines.txt");
        fs::write(&path, b"one\n\ttwo\n\nthree").unwrap();

        let lines = load(&path).unwrap();
        assert_eq!(
            vec![b"one".to_vec(), b"\ttwo".to_vec(), b"".to_vec(), b"three".to_vec()],
            lines
        );
    }

    #[test]
    fn load_ignores_trailing_break() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trailing.txt");
        fs::write(&path, b"abc\ndef\n").unwrap();

        assert_eq!(vec![b"abc".to_vec(), b"def".to_vec()], load(&path).unwrap());
    }

    #[test]
    fn load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load(&dir.path().join("missing.txt")).is_err());
    }

    #[test]
    fn open_missing_file_gives_empty_document() {
        let dir = tempfile::tempdir().unwrap();
        let document = Document::open(&dir.path().join("missing.txt"), Settings::default());
        assert!(document.is_empty());
        assert_eq!(document.home(), document.end());
    }

    #[test]
    fn save_then_open_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("saved.txt");
        let mut document = Document::new(Settings::default());
        document.insert_text(Location::new(0, 0), b"alpha\n\tbeta\n\ngamma");

        save(&path, &document).unwrap();
        assert_eq!(b"alpha\n\tbeta\n\ngamma\n".to_vec(), fs::read(&path).unwrap());

        let reopened = Document::open(&path, Settings::default());
        assert_eq!(document.text(&document.all()), reopened.text(&reopened.all()));
        assert_eq!(4, reopened.line_count());
    }

    #[test]
    fn save_empty_document_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.txt");
        save(&path, &Document::new(Settings::default())).unwrap();
        assert!(fs::read(&path).unwrap().is_empty());
    }
}
