//! Application state for the interactive session.
//!
//! [`App`] owns the help widget, the toast queue, the input box and the
//! transcript log. The event loop turns terminal input into [`AppAction`]s
//! and feeds them to [`App::apply`]; timers are driven by [`App::tick`].

pub mod ui_state;

use std::error::Error;
use std::path::PathBuf;
use std::time::Instant;

use tracing::{debug, warn};

use crate::core::config::data::Config;
use crate::core::quick_action::QuickAction;
use crate::core::toast::{ToastKind, ToastQueue};
use crate::core::widget::ChatWidget;
use crate::ui::theme::Theme;
use crate::utils::clipboard::copy_to_clipboard;
use crate::utils::logging::LoggingState;

pub use ui_state::UiState;

pub const COPIED_MESSAGE: &str = "Copiado para a área de transferência!";
pub const NOTHING_TO_COPY_MESSAGE: &str = "Nenhuma resposta para copiar.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    OpenWidget,
    CloseWidget,
    ToggleWidget,
    SubmitInput,
    QuickAction(QuickAction),
    CopyLastReply,
    ToggleTranscriptLog,
    DismissToast,
    Quit,
}

pub struct App {
    pub widget: ChatWidget,
    pub toasts: ToastQueue,
    pub ui: UiState,
    transcript: LoggingState,
    logged: usize,
    copy: fn(&str) -> Result<(), String>,
}

impl App {
    pub fn new(config: &Config, log_file: Option<PathBuf>) -> Result<Self, Box<dyn Error>> {
        let widget = ChatWidget::new(config.timing, config.rich_responses());
        let transcript = LoggingState::new(log_file)?;
        Ok(Self::from_parts(
            widget,
            ToastQueue::new(config.toast_ttl()),
            UiState::new(Theme::from_name(config.theme_name())),
            transcript,
        ))
    }

    pub fn from_parts(
        widget: ChatWidget,
        toasts: ToastQueue,
        ui: UiState,
        transcript: LoggingState,
    ) -> Self {
        Self {
            widget,
            toasts,
            ui,
            transcript,
            logged: 0,
            copy: copy_to_clipboard,
        }
    }

    #[cfg(test)]
    fn with_clipboard(mut self, copy: fn(&str) -> Result<(), String>) -> Self {
        self.copy = copy;
        self
    }

    pub fn transcript_status(&self) -> String {
        self.transcript.get_status_string()
    }

    pub fn apply(&mut self, action: AppAction, now: Instant) {
        debug!(?action, "app action");
        match action {
            AppAction::OpenWidget => self.widget.open(now),
            AppAction::CloseWidget => self.widget.close(),
            AppAction::ToggleWidget => self.widget.toggle(now),
            AppAction::SubmitInput => {
                let text = self.ui.input_text();
                if self.widget.send(&text, now) {
                    self.ui.clear_input();
                }
            }
            AppAction::QuickAction(quick) => {
                self.widget.quick_action(quick, now);
            }
            AppAction::CopyLastReply => self.copy_last_reply(now),
            AppAction::ToggleTranscriptLog => match self.transcript.toggle_logging() {
                Ok(status) => {
                    self.toasts.push(status, ToastKind::Info, now);
                }
                Err(err) => {
                    self.toasts.push(err.to_string(), ToastKind::Warning, now);
                }
            },
            AppAction::DismissToast => {
                self.toasts.dismiss_latest();
            }
            AppAction::Quit => {
                // Answer anything still being "typed" so the log is complete
                self.widget.flush();
                self.ui.exit_requested = true;
            }
        }
        self.write_transcript(now);
    }

    /// Advance timers. Returns whether anything visible changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let delivered = self.widget.tick(now);
        let expired = self.toasts.expire(now) > 0;
        if delivered {
            self.write_transcript(now);
        }
        delivered || expired
    }

    fn copy_last_reply(&mut self, now: Instant) {
        let Some(reply) = self.widget.last_bot_message() else {
            self.toasts.push(NOTHING_TO_COPY_MESSAGE, ToastKind::Info, now);
            return;
        };
        match (self.copy)(reply.text()) {
            Ok(()) => {
                self.toasts.success(COPIED_MESSAGE, now);
            }
            Err(err) => {
                warn!("clipboard copy failed: {err}");
                self.toasts.error(err, now);
            }
        }
    }

    fn write_transcript(&mut self, now: Instant) {
        let messages = self.widget.messages();
        if self.logged >= messages.len() {
            return;
        }
        let mut failure = None;
        for message in &messages[self.logged..] {
            if let Err(err) = self.transcript.log_message(message) {
                failure = Some(err.to_string());
                break;
            }
        }
        self.logged = messages.len();
        if let Some(err) = failure {
            warn!("transcript log write failed: {err}");
            self.toasts.error(format!("Falha ao gravar o log: {err}"), now);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::responses::WELCOME_TEXT;
    use crate::core::timing::{FixedJitter, TimingConfig};
    use std::time::Duration;
    use tempfile::TempDir;

    fn test_app(log_file: Option<PathBuf>) -> App {
        let widget = ChatWidget::with_jitter(
            TimingConfig::default(),
            true,
            Box::new(FixedJitter(Duration::ZERO)),
        );
        App::from_parts(
            widget,
            ToastQueue::new(Duration::from_secs(5)),
            UiState::new(Theme::dark_default()),
            LoggingState::new(log_file).expect("logging"),
        )
        .with_clipboard(|_| Ok(()))
    }

    #[test]
    fn submit_sends_input_and_clears_it() {
        let mut app = test_app(None);
        let now = Instant::now();
        app.ui.insert_text("Como excluir um paciente?");
        app.apply(AppAction::SubmitInput, now);

        assert_eq!(app.ui.input_text(), "");
        assert_eq!(app.widget.messages().len(), 1);
        assert!(app.widget.is_typing());
        assert!(app.tick(now + Duration::from_millis(1500)));
        assert_eq!(app.widget.messages().len(), 2);
    }

    #[test]
    fn blank_submit_keeps_input_untouched() {
        let mut app = test_app(None);
        app.ui.insert_text("   ");
        app.apply(AppAction::SubmitInput, Instant::now());
        assert_eq!(app.ui.input_text(), "   ");
        assert!(app.widget.messages().is_empty());
    }

    #[test]
    fn copy_without_replies_shows_info_toast() {
        let mut app = test_app(None);
        app.apply(AppAction::CopyLastReply, Instant::now());
        let toast = app.toasts.iter().next().expect("toast");
        assert_eq!(toast.message, NOTHING_TO_COPY_MESSAGE);
        assert_eq!(toast.kind, ToastKind::Info);
    }

    #[test]
    fn copy_reports_success_and_failure() {
        let now = Instant::now();
        let mut app = test_app(None);
        app.apply(AppAction::OpenWidget, now);
        app.tick(now + Duration::from_secs(1));

        app.apply(AppAction::CopyLastReply, now);
        assert_eq!(
            app.toasts.iter().last().map(|t| t.message.as_str()),
            Some(COPIED_MESSAGE)
        );

        let mut failing = test_app(None).with_clipboard(|_| Err("sem clipboard".into()));
        failing.apply(AppAction::QuickAction(QuickAction::Edit), now);
        assert!(failing.tick(now + Duration::from_secs(1)));
        failing.apply(AppAction::CopyLastReply, now + Duration::from_secs(2));
        let toast = failing.toasts.iter().last().expect("toast");
        assert_eq!(toast.kind, ToastKind::Error);
    }

    #[test]
    fn quit_flushes_pending_reply_into_transcript() {
        let temp_dir = TempDir::new().expect("temp dir");
        let path = temp_dir.path().join("chat.log");
        let mut app = test_app(Some(path.clone()));
        let now = Instant::now();

        app.apply(AppAction::OpenWidget, now);
        app.apply(AppAction::QuickAction(QuickAction::Schedule), now);
        app.apply(AppAction::Quit, now);

        assert!(app.ui.exit_requested);
        assert_eq!(app.widget.messages().len(), 3);
        let log = std::fs::read_to_string(&path).expect("read log");
        assert!(log.contains(WELCOME_TEXT));
        assert!(log.contains("Como funciona a agenda de sessões?"));
        assert!(log.contains("Funcionalidade de agenda em breve!"));
    }

    #[test]
    fn toggling_log_without_file_warns() {
        let mut app = test_app(None);
        app.apply(AppAction::ToggleTranscriptLog, Instant::now());
        assert_eq!(
            app.toasts.iter().next().map(|t| t.kind),
            Some(ToastKind::Warning)
        );
        app.apply(AppAction::DismissToast, Instant::now());
        assert!(app.toasts.is_empty());
    }

    #[test]
    fn toggle_widget_opens_and_closes() {
        let mut app = test_app(None);
        let now = Instant::now();
        app.apply(AppAction::ToggleWidget, now);
        assert!(app.widget.is_open());
        app.apply(AppAction::CloseWidget, now);
        assert!(!app.widget.is_open());
        assert_eq!(app.transcript_status(), "disabled");
    }
}
