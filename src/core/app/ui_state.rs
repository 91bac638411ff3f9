use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::style::Style;
use tui_textarea::{Input, TextArea};

use crate::ui::theme::Theme;

/// Longer input is cut off as the user types or pastes.
pub const MAX_INPUT_CHARS: usize = 500;

pub const INPUT_PLACEHOLDER: &str = "Digite sua mensagem...";

pub struct UiState {
    textarea: TextArea<'static>,
    pub theme: Theme,
    pub exit_requested: bool,
}

impl UiState {
    pub fn new(theme: Theme) -> Self {
        let textarea = Self::build_textarea(&theme);
        Self {
            textarea,
            theme,
            exit_requested: false,
        }
    }

    fn build_textarea(theme: &Theme) -> TextArea<'static> {
        let mut textarea = TextArea::default();
        textarea.set_style(theme.input_text_style);
        textarea.set_cursor_style(theme.input_cursor_style);
        textarea.set_cursor_line_style(Style::default());
        textarea.set_placeholder_text(INPUT_PLACEHOLDER);
        textarea
    }

    pub fn textarea(&self) -> &TextArea<'static> {
        &self.textarea
    }

    pub fn input_text(&self) -> String {
        self.textarea.lines().join("\n")
    }

    pub fn input_char_count(&self) -> usize {
        self.textarea
            .lines()
            .iter()
            .map(|line| line.chars().count())
            .sum()
    }

    pub fn clear_input(&mut self) {
        self.textarea = Self::build_textarea(&self.theme);
    }

    /// Forward an editing key to the input box. Characters beyond
    /// [`MAX_INPUT_CHARS`] are dropped.
    pub fn handle_input_key(&mut self, key: KeyEvent) -> bool {
        if matches!(key.code, KeyCode::Char(_)) && self.input_char_count() >= MAX_INPUT_CHARS {
            return false;
        }
        self.textarea.input(Input::from(key))
    }

    /// Paste without newlines; the chat input is a single line.
    pub fn insert_text(&mut self, text: &str) {
        let room = MAX_INPUT_CHARS.saturating_sub(self.input_char_count());
        let flattened: String = text
            .chars()
            .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
            .take(room)
            .collect();
        self.textarea.insert_str(flattened);
    }
}
