use crate::document::{Location, Position};
use crate::editor::Editor;

pub fn cursor_backward(editor: &mut Editor, extend: bool) {
    let location = match editor.cursor.selection() {
        Some(selection) if !extend => selection.begin(),
        _ => editor.document.prev(editor.cursor.location),
    };
    move_horizontally(editor, location, extend);
}

pub fn cursor_forward(editor: &mut Editor, extend: bool) {
    let location = match editor.cursor.selection() {
        Some(selection) if !extend => selection.end(),
        _ => editor.document.next(editor.cursor.location),
    };
    move_horizontally(editor, location, extend);
}

pub fn cursor_up(editor: &mut Editor, extend: bool) {
    let position = editor.document.position(editor.cursor.location);
    match position.row.checked_sub(1) {
        Some(row) => move_vertically(editor, position, row, extend),
        None => {
            let home = editor.document.home();
            move_horizontally(editor, home, extend);
        }
    }
}

pub fn cursor_down(editor: &mut Editor, extend: bool) {
    let position = editor.document.position(editor.cursor.location);
    if position.row < editor.document.maxline() {
        move_vertically(editor, position, position.row + 1, extend);
    } else {
        let end = editor.document.end();
        move_horizontally(editor, end, extend);
    }
}

pub fn page_up(editor: &mut Editor, extend: bool) {
    let position = editor.document.position(editor.cursor.location);
    let row = position.row.saturating_sub(page_rows(editor));
    move_vertically(editor, position, row, extend);
}

pub fn page_down(editor: &mut Editor, extend: bool) {
    let position = editor.document.position(editor.cursor.location);
    let row = std::cmp::min(
        position.row.saturating_add(page_rows(editor)),
        editor.document.maxline(),
    );
    move_vertically(editor, position, row, extend);
}

pub fn line_start(editor: &mut Editor, extend: bool) {
    let location = Location::new(editor.cursor.location.line, 0);
    move_horizontally(editor, location, extend);
}

pub fn line_end(editor: &mut Editor, extend: bool) {
    let line = editor.cursor.location.line;
    let location = Location::new(line, editor.document.line(line).size());
    move_horizontally(editor, location, extend);
}

pub fn document_start(editor: &mut Editor, extend: bool) {
    let home = editor.document.home();
    move_horizontally(editor, home, extend);
}

pub fn document_end(editor: &mut Editor, extend: bool) {
    let end = editor.document.end();
    move_horizontally(editor, end, extend);
}

fn move_horizontally(editor: &mut Editor, location: Location, extend: bool) {
    editor.cursor.moved(location, extend);
    editor.cursor.target_column = None;
}

// Keeps the display column across lines of different length and tab layout.
fn move_vertically(editor: &mut Editor, from: Position, row: usize, extend: bool) {
    let column = editor.cursor.target_column.unwrap_or(from.column);
    let location = editor.document.location(Position::new(row, column));
    editor.cursor.moved(location, extend);
    editor.cursor.target_column = Some(column);
}

fn page_rows(editor: &Editor) -> usize {
    std::cmp::max(1, editor.window.height as usize)
}
