use crate::commands::{app, cursor as cursor_commands, edit};
use crate::config::Settings;
use crate::cursor::Cursor;
use crate::document::Document;
use crate::error::{Error, Result};
use crate::renderer;
use crate::window::Window;
use std::io::{stdout, Write};
use std::path::{Path, PathBuf};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute, terminal,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen},
};
use tracing::{debug, error, info};

/// One editing session: a document, the caret inside it and the terminal
/// window showing it.
pub struct Editor {
    pub(crate) clipboard: Vec<u8>,
    pub(crate) cursor: Cursor,
    pub(crate) document: Document,
    pub(crate) file_path: Option<PathBuf>,
    pub(crate) modified: bool,
    pub(crate) quit_requested: bool,
    pub(crate) running: bool,
    pub(crate) status: Option<String>,
    pub(crate) window: Window,
}

impl Editor {
    pub fn new(file_path: Option<PathBuf>, settings: Settings) -> Editor {
        let document = match &file_path {
            Some(path) if path.exists() => Document::open(path, settings),
            Some(path) => {
                info!(path = %path.display(), "new file");
                Document::new(settings)
            }
            None => Document::new(settings),
        };

        Editor::with_document(document, file_path)
    }

    pub fn with_document(document: Document, file_path: Option<PathBuf>) -> Editor {
        Editor {
            clipboard: Vec::new(),
            cursor: Cursor::new(),
            document,
            file_path,
            modified: false,
            quit_requested: false,
            running: false,
            status: None,
            window: Window::new(0, 0),
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Runs the session on the terminal until the user exits.
    pub fn start(&mut self) -> Result<()> {
        let screen = &mut stdout();
        self.running = true;
        info!(path = ?self.file_path, lines = self.document.line_count(), "session started");

        let result = on_alternate_screen(
            screen,
            terminal::enable_raw_mode,
            terminal::disable_raw_mode,
            |screen| self.run(screen),
        );
        info!("session stopped");

        result
    }

    fn run(&mut self, screen: &mut impl Write) -> Result<()> {
        while self.running {
            renderer::render(screen, self, terminal::size()?)?;

            if let Event::Key(event) = event::read()? {
                if let Some(command) = self.map_key_to_command(event) {
                    self.execute_command(command);
                }
            }
        }

        Ok(())
    }

    pub fn execute_command(&mut self, command: Command) {
        debug!(?command, "execute");
        if command != Command::Exit {
            self.quit_requested = false;
        }

        match command {
            Command::Copy => edit::copy(self),
            Command::CursorBackward { extend } => cursor_commands::cursor_backward(self, extend),
            Command::CursorDown { extend } => cursor_commands::cursor_down(self, extend),
            Command::CursorForward { extend } => cursor_commands::cursor_forward(self, extend),
            Command::CursorUp { extend } => cursor_commands::cursor_up(self, extend),
            Command::Cut => edit::cut(self),
            Command::DeleteBackward => edit::delete_backward(self),
            Command::DeleteForward => edit::delete_forward(self),
            Command::DocumentEnd { extend } => cursor_commands::document_end(self, extend),
            Command::DocumentStart { extend } => cursor_commands::document_start(self, extend),
            Command::Exit => app::exit(self),
            Command::InsertCharacter(c) => edit::insert_character(self, c),
            Command::InsertNewLine => edit::insert_newline(self),
            Command::InsertTab => edit::insert_tab(self),
            Command::LineEnd { extend } => cursor_commands::line_end(self, extend),
            Command::LineStart { extend } => cursor_commands::line_start(self, extend),
            Command::PageDown { extend } => cursor_commands::page_down(self, extend),
            Command::PageUp { extend } => cursor_commands::page_up(self, extend),
            Command::Paste => edit::paste(self),
            Command::Save => {
                if let Err(e) = app::save(self) {
                    error!(error = %e, "save failed");
                    self.status = Some(e.to_string());
                }
            }
        }
    }

    pub fn map_key_to_command(&self, key_event: KeyEvent) -> Option<Command> {
        let extend = key_event.modifiers.contains(KeyModifiers::SHIFT);
        let control = key_event.modifiers.contains(KeyModifiers::CONTROL);

        match key_event.code {
            KeyCode::Char('c') if control => Some(Command::Copy),
            KeyCode::Char('q') if control => Some(Command::Exit),
            KeyCode::Char('s') if control => Some(Command::Save),
            KeyCode::Char('v') if control => Some(Command::Paste),
            KeyCode::Char('x') if control => Some(Command::Cut),
            KeyCode::Char(_) if control => None,
            KeyCode::Char(c) => Some(Command::InsertCharacter(c)),
            KeyCode::Backspace => Some(Command::DeleteBackward),
            KeyCode::Delete => Some(Command::DeleteForward),
            KeyCode::Down => Some(Command::CursorDown { extend }),
            KeyCode::End if control => Some(Command::DocumentEnd { extend }),
            KeyCode::End => Some(Command::LineEnd { extend }),
            KeyCode::Enter => Some(Command::InsertNewLine),
            KeyCode::Home if control => Some(Command::DocumentStart { extend }),
            KeyCode::Home => Some(Command::LineStart { extend }),
            KeyCode::Left => Some(Command::CursorBackward { extend }),
            KeyCode::PageDown => Some(Command::PageDown { extend }),
            KeyCode::PageUp => Some(Command::PageUp { extend }),
            KeyCode::Right => Some(Command::CursorForward { extend }),
            KeyCode::Tab => Some(Command::InsertTab),
            KeyCode::Up => Some(Command::CursorUp { extend }),
            _ => None,
        }
    }
}

// Runs `session` in raw mode on the alternate screen. The main screen is
// restored on every path and the first error is the one returned.
fn on_alternate_screen<W: Write>(
    screen: &mut W,
    enable_raw_mode: impl FnOnce() -> crossterm::Result<()>,
    disable_raw_mode: impl FnOnce() -> crossterm::Result<()>,
    session: impl FnOnce(&mut W) -> Result<()>,
) -> Result<()> {
    execute!(screen, EnterAlternateScreen)?;

    let mut result = enable_raw_mode().map_err(Error::from);
    if result.is_ok() {
        result = session(screen);
        result = result.and(disable_raw_mode().map_err(Error::from));
    }

    let left = execute!(screen, LeaveAlternateScreen).map_err(Error::from);
    result.and(left)
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Command {
    Copy,
    CursorBackward { extend: bool },
    CursorDown { extend: bool },
    CursorForward { extend: bool },
    CursorUp { extend: bool },
    Cut,
    DeleteBackward,
    DeleteForward,
    DocumentEnd { extend: bool },
    DocumentStart { extend: bool },
    Exit,
    InsertCharacter(char),
    InsertNewLine,
    InsertTab,
    LineEnd { extend: bool },
    LineStart { extend: bool },
    PageDown { extend: bool },
    PageUp { extend: bool },
    Paste,
    Save,
}
