use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone)]
pub struct Theme {
    // Overall background color to paint the full frame
    pub background_color: Color,
    // Chat message styles
    pub user_prefix_style: Style,
    pub user_text_style: Style,
    pub bot_prefix_style: Style,
    pub bot_text_style: Style,
    pub time_style: Style,

    // Chrome
    pub title_style: Style,
    pub host_text_style: Style,
    pub help_button_style: Style,
    pub modal_border_style: Style,
    pub typing_indicator_style: Style,
    pub quick_action_style: Style,
    pub input_border_style: Style,
    pub input_title_style: Style,

    // Input area
    pub input_text_style: Style,
    pub input_cursor_style: Style,

    // Toasts
    pub toast_success_style: Style,
    pub toast_info_style: Style,
    pub toast_warning_style: Style,
    pub toast_error_style: Style,
}

impl Theme {
    pub fn dark_default() -> Self {
        Theme {
            background_color: Color::Black,
            user_prefix_style: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            user_text_style: Style::default().fg(Color::Cyan),
            bot_prefix_style: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            bot_text_style: Style::default().fg(Color::White),
            time_style: Style::default().fg(Color::DarkGray),

            title_style: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            host_text_style: Style::default().fg(Color::Gray),
            help_button_style: Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
            modal_border_style: Style::default().fg(Color::Green),
            typing_indicator_style: Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
            quick_action_style: Style::default().fg(Color::Green),
            input_border_style: Style::default().fg(Color::Gray),
            input_title_style: Style::default().fg(Color::Gray),

            input_text_style: Style::default().fg(Color::White),
            input_cursor_style: Style::default().add_modifier(Modifier::REVERSED),

            toast_success_style: Style::default().fg(Color::Black).bg(Color::Green),
            toast_info_style: Style::default().fg(Color::Black).bg(Color::Cyan),
            toast_warning_style: Style::default().fg(Color::Black).bg(Color::Yellow),
            toast_error_style: Style::default().fg(Color::White).bg(Color::Red),
        }
    }

    pub fn light() -> Self {
        Theme {
            background_color: Color::White,
            user_prefix_style: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            user_text_style: Style::default().fg(Color::Blue),
            bot_prefix_style: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            bot_text_style: Style::default().fg(Color::Black),
            time_style: Style::default().fg(Color::Gray),

            title_style: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            host_text_style: Style::default().fg(Color::DarkGray),
            help_button_style: Style::default()
                .fg(Color::White)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
            modal_border_style: Style::default().fg(Color::Green),
            typing_indicator_style: Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
            quick_action_style: Style::default().fg(Color::Green),
            input_border_style: Style::default().fg(Color::Black),
            input_title_style: Style::default().fg(Color::DarkGray),

            input_text_style: Style::default().fg(Color::Black),
            input_cursor_style: Style::default().add_modifier(Modifier::REVERSED),

            toast_success_style: Style::default().fg(Color::White).bg(Color::Green),
            toast_info_style: Style::default().fg(Color::White).bg(Color::Blue),
            toast_warning_style: Style::default().fg(Color::Black).bg(Color::Yellow),
            toast_error_style: Style::default().fg(Color::White).bg(Color::Red),
        }
    }

    /// Unknown names fall back to the dark theme.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "light" => Self::light(),
            _ => Self::dark_default(),
        }
    }

    pub fn is_known(name: &str) -> bool {
        matches!(name.trim().to_lowercase().as_str(), "dark" | "light")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_names_are_case_insensitive() {
        assert_eq!(Theme::from_name("LIGHT").background_color, Color::White);
        assert_eq!(Theme::from_name("nope").background_color, Color::Black);
        assert!(Theme::is_known(" Dark "));
        assert!(!Theme::is_known("dracula"));
    }
}
