use crate::error::{Error, Result};

pub const DEFAULT_TAB_WIDTH: u8 = 4;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Settings {
    pub tab_width: u8,
    pub indentation: IndentationPreference,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum IndentationPreference {
    Tabs,
    Spaces,
}

impl Settings {
    pub fn new(tab_width: u8, indentation: IndentationPreference) -> Result<Settings> {
        if tab_width == 0 {
            return Err(Error::InvalidTabWidth);
        }

        Ok(Settings {
            tab_width,
            indentation,
        })
    }

    /// Tab stop width as used by column arithmetic; never zero.
    pub fn tab_stop(&self) -> usize {
        std::cmp::max(1, self.tab_width as usize)
    }
}

impl Default for Settings {
    fn default() -> Settings {
        Settings {
            tab_width: DEFAULT_TAB_WIDTH,
            indentation: IndentationPreference::Tabs,
        }
    }
}
