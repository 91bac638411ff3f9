//! Key and mouse bindings.
//!
//! Bindings depend only on whether the help dialog is open: while it is,
//! printable keys go to the input box; otherwise they drive the host screen.

use ratatui::crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::core::app::AppAction;
use crate::core::quick_action::QuickAction;
use crate::ui::layout::{contains, Regions};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Action(AppAction),
    /// Forward the key to the input box.
    Edit,
    Ignored,
}

pub fn map_key(key: &KeyEvent, widget_open: bool) -> KeyOutcome {
    if key.kind == KeyEventKind::Release {
        return KeyOutcome::Ignored;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::Char('c') if ctrl => return KeyOutcome::Action(AppAction::Quit),
        KeyCode::Char('y') if ctrl => return KeyOutcome::Action(AppAction::CopyLastReply),
        KeyCode::Char('l') if ctrl => {
            return KeyOutcome::Action(AppAction::ToggleTranscriptLog)
        }
        KeyCode::F(1) => return KeyOutcome::Action(AppAction::ToggleWidget),
        _ => {}
    }

    if !widget_open {
        return match key.code {
            KeyCode::Char('?') => KeyOutcome::Action(AppAction::OpenWidget),
            KeyCode::Char('q') => KeyOutcome::Action(AppAction::Quit),
            KeyCode::Esc => KeyOutcome::Action(AppAction::DismissToast),
            _ => KeyOutcome::Ignored,
        };
    }

    match key.code {
        KeyCode::Esc => KeyOutcome::Action(AppAction::CloseWidget),
        KeyCode::Enter => KeyOutcome::Action(AppAction::SubmitInput),
        KeyCode::Char(c) if alt => c
            .to_digit(10)
            .and_then(|digit| (digit as usize).checked_sub(1))
            .and_then(QuickAction::from_slot)
            .map(|action| KeyOutcome::Action(AppAction::QuickAction(action)))
            .unwrap_or(KeyOutcome::Ignored),
        _ if ctrl && matches!(key.code, KeyCode::Char(_)) => KeyOutcome::Ignored,
        _ => KeyOutcome::Edit,
    }
}

/// Resolve a left click against the regions that were last drawn.
pub fn map_mouse(event: &MouseEvent, regions: &Regions) -> Option<AppAction> {
    if event.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }
    let (col, row) = (event.column, event.row);

    match &regions.modal {
        Some(modal) => {
            if let Some(slot) = modal
                .quick_actions
                .iter()
                .position(|cell| contains(*cell, col, row))
            {
                return QuickAction::from_slot(slot).map(AppAction::QuickAction);
            }
            (!contains(modal.outer, col, row)).then_some(AppAction::CloseWidget)
        }
        None => contains(regions.help_button, col, row).then_some(AppAction::OpenWidget),
    }
}
