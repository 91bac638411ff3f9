//! Screen geometry and transcript line building.
//!
//! Both the renderer and mouse hit-testing go through [`compute_regions`], so
//! a click always lands on what was drawn.

use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::theme::Theme;
use crate::core::message::Message;

const HELP_BUTTON_WIDTH: u16 = 7;
const HELP_BUTTON_HEIGHT: u16 = 3;
const MODAL_MAX_WIDTH: u16 = 76;
const MODAL_MAX_HEIGHT: u16 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalRegions {
    pub outer: Rect,
    pub messages: Rect,
    pub typing: Rect,
    pub quick_actions: [Rect; 4],
    pub input: Rect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub host: Rect,
    pub help_button: Rect,
    pub modal: Option<ModalRegions>,
}

pub fn compute_regions(area: Rect, modal_open: bool) -> Regions {
    let button_width = HELP_BUTTON_WIDTH.min(area.width);
    let button_height = HELP_BUTTON_HEIGHT.min(area.height);
    let help_button = Rect::new(
        area.right().saturating_sub(button_width + 1).max(area.x),
        area.bottom().saturating_sub(button_height + 1).max(area.y),
        button_width,
        button_height,
    );

    Regions {
        host: area,
        help_button,
        modal: modal_open.then(|| modal_regions(area)),
    }
}

fn modal_regions(area: Rect) -> ModalRegions {
    let width = area.width.saturating_sub(4).min(MODAL_MAX_WIDTH);
    let height = area.height.saturating_sub(2).min(MODAL_MAX_HEIGHT);
    let outer = Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    );
    let inner = Rect::new(
        outer.x.saturating_add(1),
        outer.y.saturating_add(1),
        outer.width.saturating_sub(2),
        outer.height.saturating_sub(2),
    );

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(3),
        ])
        .split(inner);

    let action_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(rows[2]);
    let mut quick_actions = [Rect::default(); 4];
    for (row_idx, row) in action_rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(*row);
        quick_actions[row_idx * 2] = cols[0];
        quick_actions[row_idx * 2 + 1] = cols[1];
    }

    ModalRegions {
        outer,
        messages: rows[0],
        typing: rows[1],
        quick_actions,
        input: rows[3],
    }
}

pub fn contains(rect: Rect, column: u16, row: u16) -> bool {
    rect.contains(Position::new(column, row))
}

/// Greedy word wrap by display width. Explicit newlines are kept, words
/// longer than the width are split.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut out = Vec::new();

    for paragraph in text.split('\n') {
        let mut line = String::new();
        let mut line_width = 0;

        for word in paragraph.split(' ') {
            let word_width = word.width();
            let sep = usize::from(!line.is_empty());

            if line_width + sep + word_width <= width {
                if sep == 1 {
                    line.push(' ');
                }
                line.push_str(word);
                line_width += sep + word_width;
                continue;
            }

            if !line.is_empty() {
                out.push(std::mem::take(&mut line));
                line_width = 0;
            }

            if word_width <= width {
                line.push_str(word);
                line_width = word_width;
                continue;
            }

            for ch in word.chars() {
                let ch_width = ch.width().unwrap_or(0);
                if line_width + ch_width > width && !line.is_empty() {
                    out.push(std::mem::take(&mut line));
                    line_width = 0;
                }
                line.push(ch);
                line_width += ch_width;
            }
        }
        out.push(line);
    }

    out
}

/// Flatten the transcript into styled lines for a given width.
pub fn transcript_lines(messages: &[Message], theme: &Theme, width: u16) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for message in messages {
        let (prefix_style, text_style) = if message.is_user() {
            (theme.user_prefix_style, theme.user_text_style)
        } else {
            (theme.bot_prefix_style, theme.bot_text_style)
        };
        lines.push(Line::from(vec![
            Span::styled(message.origin().display_name(), prefix_style),
            Span::styled(format!(" · {}", message.time_label()), theme.time_style),
        ]));
        for wrapped in wrap_text(message.text(), width as usize) {
            lines.push(Line::from(Span::styled(wrapped, text_style)));
        }
        lines.push(Line::from(""));
    }
    lines
}

/// The last `height` lines, so the newest message is always visible.
pub fn tail<T>(lines: Vec<T>, height: u16) -> Vec<T> {
    let skip = lines.len().saturating_sub(height as usize);
    lines.into_iter().skip(skip).collect()
}
