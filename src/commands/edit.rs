use crate::config::IndentationPreference;
use crate::document::{Location, Range};
use crate::editor::Editor;
use tracing::debug;

pub fn delete_backward(editor: &mut Editor) {
    if erase_selection(editor).is_some() {
        return;
    }

    let location = editor.cursor.location;
    let previous = editor.document.prev(location);
    if previous != location {
        let location = editor.document.erase(&Range::new(previous, location));
        edited(editor, location);
    }
}

pub fn delete_forward(editor: &mut Editor) {
    if erase_selection(editor).is_some() {
        return;
    }

    let location = editor.cursor.location;
    let next = editor.document.next(location);
    if next != location {
        let location = editor.document.erase(&Range::new(location, next));
        edited(editor, location);
    }
}

pub fn insert_character(editor: &mut Editor, c: char) {
    let location = replace_selection(editor);
    let buf = &mut [0u8; 4];
    let encoded = c.encode_utf8(buf);
    let bytes = encoded.as_bytes();
    let location = match bytes {
        [byte] => editor.document.insert(location, *byte),
        _ => editor.document.insert_text(location, bytes),
    };
    edited(editor, location);
}

pub fn insert_newline(editor: &mut Editor) {
    let location = replace_selection(editor);
    let location = editor.document.split(location);
    edited(editor, location);
}

pub fn insert_tab(editor: &mut Editor) {
    let location = replace_selection(editor);
    let settings = *editor.document.settings();
    let location = match settings.indentation {
        IndentationPreference::Tabs => editor.document.insert(location, b'\t'),
        IndentationPreference::Spaces => {
            // Pad to the next tab stop rather than a fixed count.
            let tab_stop = settings.tab_stop();
            let column = editor.document.position(location).column;
            let spaces = vec![b' '; tab_stop - column % tab_stop];
            editor.document.insert_text(location, &spaces)
        }
    };
    edited(editor, location);
}

/// Copies the selection, or the current line with its line break when there
/// is no selection.
pub fn copy(editor: &mut Editor) {
    let range = editor
        .cursor
        .selection()
        .unwrap_or_else(|| current_line_range(editor));
    editor.clipboard = editor.document.text(&range);
    if editor.cursor.selection().is_none() && !ends_with_break(&editor.clipboard) {
        editor.clipboard.push(b'\n');
    }
    debug!(bytes = editor.clipboard.len(), "copied");
}

/// Like `copy`, then removes what was copied.
pub fn cut(editor: &mut Editor) {
    if editor.document.is_empty() {
        return;
    }

    copy(editor);
    let range = editor
        .cursor
        .selection()
        .unwrap_or_else(|| current_line_range(editor));
    let location = editor.document.erase(&range);
    edited(editor, location);
    debug!(bytes = editor.clipboard.len(), "cut");
}

pub fn paste(editor: &mut Editor) {
    if editor.clipboard.is_empty() {
        return;
    }

    let location = replace_selection(editor);
    let clipboard = std::mem::take(&mut editor.clipboard);
    let location = editor.document.insert_text(location, &clipboard);
    editor.clipboard = clipboard;
    edited(editor, location);
    debug!(bytes = editor.clipboard.len(), "pasted");
}

// The current line through the start of the next one; the last line has no
// break to take along.
fn current_line_range(editor: &Editor) -> Range {
    let line = editor.cursor.location.line;
    let end = if line < editor.document.maxline() {
        Location::new(line + 1, 0)
    } else {
        Location::new(line, editor.document.line(line).size())
    };
    Range::new(Location::new(line, 0), end)
}

fn ends_with_break(text: &[u8]) -> bool {
    text.last() == Some(&b'\n')
}

fn erase_selection(editor: &mut Editor) -> Option<Location> {
    let selection = editor.cursor.selection()?;
    let location = editor.document.erase(&selection);
    edited(editor, location);
    Some(location)
}

fn replace_selection(editor: &mut Editor) -> Location {
    erase_selection(editor).unwrap_or(editor.cursor.location)
}

fn edited(editor: &mut Editor, location: Location) {
    editor.cursor.placed(location);
    editor.modified = true;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::document::Document;

    fn editor(text: &str) -> Editor {
        Editor::with_document(Document::from_text(text.as_bytes(), Settings::default()), None)
    }

    fn contents(editor: &Editor) -> String {
        String::from_utf8(editor.document.text(&editor.document.all())).unwrap()
    }

    fn select(editor: &mut Editor, from: Location, to: Location) {
        editor.cursor.placed(from);
        editor.cursor.moved(to, true);
    }

    #[test]
    fn backspace_joins_lines() {
        let editor = &mut editor("abc\ndef");
        editor.cursor.location = Location::new(1, 0);
        delete_backward(editor);
        assert_eq!("abcdef", contents(editor));
        assert_eq!(Location::new(0, 3), editor.cursor.location);

        delete_backward(editor);
        assert_eq!("abdef", contents(editor));
        assert_eq!(Location::new(0, 2), editor.cursor.location);
    }

    #[test]
    fn backspace_at_home_does_nothing() {
        let editor = &mut editor("abc");
        delete_backward(editor);
        assert_eq!("abc", contents(editor));
        assert!(!editor.modified);
    }

    #[test]
    fn delete_forward_joins_lines() {
        let editor = &mut editor("abc\ndef");
        editor.cursor.location = Location::new(0, 3);
        delete_forward(editor);
        assert_eq!("abcdef", contents(editor));
        assert_eq!(Location::new(0, 3), editor.cursor.location);

        editor.cursor.location = Location::new(0, 6);
        delete_forward(editor);
        assert_eq!("abcdef", contents(editor));
    }

    #[test]
    fn typing_replaces_selection() {
        let editor = &mut editor("abc\ndef");
        select(editor, Location::new(0, 1), Location::new(1, 2));
        insert_character(editor, 'X');
        assert_eq!("aXf", contents(editor));
        assert_eq!(Location::new(0, 2), editor.cursor.location);
        assert!(editor.cursor.selection().is_none());
    }

    #[test]
    fn multibyte_character_inserts_all_bytes() {
        let editor = &mut editor("ab");
        editor.cursor.location = Location::new(0, 1);
        insert_character(editor, 'é');
        assert_eq!("aéb", contents(editor));
        assert_eq!(Location::new(0, 3), editor.cursor.location);
    }

    #[test]
    fn newline_splits_line() {
        let editor = &mut editor("abcd");
        editor.cursor.location = Location::new(0, 2);
        insert_newline(editor);
        assert_eq!("ab\ncd", contents(editor));
        assert_eq!(Location::new(1, 0), editor.cursor.location);
    }

    #[test]
    fn tab_inserts_tab_byte() {
        let editor = &mut editor("ab");
        editor.cursor.location = Location::new(0, 1);
        insert_tab(editor);
        assert_eq!("a\tb", contents(editor));
        assert_eq!(Location::new(0, 2), editor.cursor.location);
    }

    #[test]
    fn tab_pads_spaces_to_next_stop() {
        let document = Document::from_text(
            b"ab",
            Settings::new(4, IndentationPreference::Spaces).unwrap(),
        );
        let editor = &mut Editor::with_document(document, None);
        editor.cursor.location = Location::new(0, 1);
        insert_tab(editor);
        assert_eq!("a   b", contents(editor));
        assert_eq!(Location::new(0, 4), editor.cursor.location);

        insert_tab(editor);
        assert_eq!("a       b", contents(editor));
        assert_eq!(Location::new(0, 8), editor.cursor.location);
    }

    #[test]
    fn copy_and_paste_selection() {
        let editor = &mut editor("abc\ndef");
        select(editor, Location::new(0, 1), Location::new(1, 1));
        copy(editor);
        assert_eq!(b"bc\nd".to_vec(), editor.clipboard);
        assert_eq!("abc\ndef", contents(editor));

        editor.cursor.placed(Location::new(1, 3));
        paste(editor);
        assert_eq!("abc\ndefbc\nd", contents(editor));
        assert_eq!(Location::new(2, 1), editor.cursor.location);
        assert_eq!(b"bc\nd".to_vec(), editor.clipboard);
    }

    #[test]
    fn cut_without_selection_takes_line() {
        let editor = &mut editor("one\ntwo\nthree");
        editor.cursor.location = Location::new(1, 2);
        cut(editor);
        assert_eq!("one\nthree", contents(editor));
        assert_eq!(b"two\n".to_vec(), editor.clipboard);
        assert_eq!(Location::new(1, 0), editor.cursor.location);

        paste(editor);
        assert_eq!("one\ntwo\nthree", contents(editor));
        assert_eq!(Location::new(2, 0), editor.cursor.location);
    }

    #[test]
    fn cut_last_line_keeps_empty_line() {
        let editor = &mut editor("one\ntwo");
        editor.cursor.location = Location::new(1, 1);
        cut(editor);
        assert_eq!("one\n", contents(editor));
        assert_eq!(b"two\n".to_vec(), editor.clipboard);
        assert_eq!(2, editor.document.line_count());
    }

    #[test]
    fn cut_selection() {
        let editor = &mut editor("abcdef");
        select(editor, Location::new(0, 4), Location::new(0, 1));
        cut(editor);
        assert_eq!("aef", contents(editor));
        assert_eq!(b"bcd".to_vec(), editor.clipboard);
        assert_eq!(Location::new(0, 1), editor.cursor.location);
    }

    #[test]
    fn paste_with_empty_clipboard_is_noop() {
        let editor = &mut editor("abc");
        paste(editor);
        assert_eq!("abc", contents(editor));
        assert!(!editor.modified);
    }
}
