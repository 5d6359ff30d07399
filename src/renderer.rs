use crate::display_line::DisplayLine;
use crate::document::{Location, Position, Range};
use crate::editor::Editor;
use crate::window::Window;

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    queue, style,
    style::{style, Color, SetBackgroundColor, SetForegroundColor},
    terminal::{Clear, ClearType},
    Result,
};
use std::io::Write;

const MIN_WIDTH_LINE_NUMBER: usize = 3;
const CURRENT_LINE_BACKGROUND: Color = Color::Rgb {
    r: 59,
    g: 66,
    b: 82,
};

fn line_number_width(line_count: usize) -> u16 {
    // Number of columns the display of line numbers will require: max(3, num_digits) + 1 space
    let line_number_digits = line_count.to_string().len();
    (std::cmp::max(MIN_WIDTH_LINE_NUMBER, line_number_digits) + 1) as u16
}

fn cursor_position_info(location: Location, position: Position) -> String {
    if location.offset == position.column {
        format!("Ln {}, Col {}", location.line + 1, location.offset + 1)
    } else {
        format!(
            "Ln {}, Col {}-{}",
            location.line + 1,
            location.offset + 1,
            position.column + 1
        )
    }
}

// Display columns of `line` covered by `selection`. A selection running past
// the end of the line also covers one column for the line break.
fn selected_columns(display: &DisplayLine, line: usize, selection: &Range) -> (usize, usize) {
    let (begin, end) = (selection.begin(), selection.end());
    let start = if line == begin.line {
        display.column(begin.offset)
    } else {
        0
    };
    let stop = if line == end.line {
        display.column(end.offset)
    } else {
        display.width() + 1
    };
    (start, stop)
}

struct Row<'a> {
    display: DisplayLine<'a>,
    screen_row: u16,
    gutter: u16,
    background: Color,
}

impl<'a> Row<'a> {
    // Paints display columns `from..to` of the line, clipped to the window.
    fn paint(
        &self,
        screen: &mut impl Write,
        window: &Window,
        from: usize,
        to: usize,
        selected: bool,
    ) -> Result<()> {
        let from = std::cmp::max(from, window.horizontal_offset);
        let to = std::cmp::min(to, window.right());
        if from >= to {
            return Ok(());
        }

        let (foreground, background) = match selected {
            true => (Color::Black, Color::White),
            false => (Color::White, self.background),
        };
        let screen_column = self.gutter + (from - window.horizontal_offset) as u16;
        queue!(
            screen,
            MoveTo(screen_column, self.screen_row),
            SetForegroundColor(foreground),
            SetBackgroundColor(background)
        )?;

        let written = self.display.paint(screen, from, to - from)?;
        if selected && written < to - from {
            let padding = " ".repeat(to - from - written);
            queue!(screen, style::Print(padding))?;
        }
        Ok(())
    }
}

pub fn render(screen: &mut impl Write, editor: &mut Editor, terminal_size: (u16, u16)) -> Result<()> {
    let (terminal_width, terminal_height) = terminal_size;
    queue!(screen, style::ResetColor, Clear(ClearType::All), Hide)?;

    let document = &editor.document;
    let window = &mut editor.window;
    let line_number_columns = line_number_width(document.line_count());
    window.resize(
        terminal_height.saturating_sub(1),
        terminal_width.saturating_sub(line_number_columns),
    );

    let cursor_location = document.sanitize(editor.cursor.location);
    let cursor_position = document.position(cursor_location);
    window.update_offsets(cursor_position);

    let selection = editor.cursor.selection();
    let visible_lines = std::cmp::max(1, document.line_count());
    let last_line = std::cmp::min(window.bottom(), visible_lines);

    for (screen_row, line_index) in (window.vertical_offset..last_line).enumerate() {
        let screen_row = screen_row as u16;
        let mut background = Color::Reset;

        if line_index == cursor_position.row {
            background = CURRENT_LINE_BACKGROUND;
            let characters = " ".repeat(terminal_width as usize);
            queue!(
                screen,
                MoveTo(0, screen_row),
                style::PrintStyledContent(style(characters).on(background))
            )?;
        }

        let characters = format!(
            "{:>min_width$}",
            line_index + 1,
            min_width = MIN_WIDTH_LINE_NUMBER
        );
        queue!(
            screen,
            MoveTo(0, screen_row),
            style::PrintStyledContent(style(characters).with(Color::Blue).on(background))
        )?;

        let row = Row {
            display: document.line(line_index).display(document.settings()),
            screen_row,
            gutter: line_number_columns,
            background,
        };
        let (start, stop) = match &selection {
            Some(selection) if selection.contains_line(line_index) => {
                selected_columns(&row.display, line_index, selection)
            }
            _ => (usize::max_value(), usize::max_value()),
        };
        row.paint(screen, window, 0, start, false)?;
        row.paint(screen, window, start, stop, true)?;
        row.paint(screen, window, stop, usize::max_value(), false)?;
    }
    queue!(screen, style::ResetColor)?;

    let name = editor
        .file_path
        .as_ref()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| String::from("[No Name]"));
    let marker = if editor.modified { " [+]" } else { "" };
    let status = match &editor.status {
        Some(message) => format!("{}{}  {}", name, marker, message),
        None => format!("{}{}", name, marker),
    };
    queue!(
        screen,
        MoveTo(0, terminal_height.saturating_sub(1)),
        style::Print(status)
    )?;

    let position_info = cursor_position_info(cursor_location, cursor_position);
    let print_column_start =
        terminal_width.saturating_sub(position_info.chars().count() as u16);
    queue!(
        screen,
        MoveTo(print_column_start, terminal_height.saturating_sub(1)),
        style::Print(position_info)
    )?;

    if let Some((column, row)) = window.relative(cursor_position) {
        queue!(screen, MoveTo(line_number_columns + column, row), Show)?;
    }
    screen.flush()?;
    Ok(())
}
