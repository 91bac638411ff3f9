//! Help-chat widget state machine.
//!
//! The widget never owns a timer. Delayed work (the welcome greeting and the
//! simulated typing before each reply) is stored as a due [`Instant`] and
//! delivered by [`ChatWidget::tick`], which the event loop calls on every
//! frame. At most one reply is in flight: a new question first delivers the
//! outstanding reply, so the transcript always alternates question and
//! answer.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::core::message::Message;
use crate::core::quick_action::QuickAction;
use crate::core::responses::{classify, CannedResponse, WELCOME_TEXT};
use crate::core::timing::{Jitter, OsJitter, TimingConfig};

/// `now + delay`, or `now` when the sum does not fit in an [`Instant`].
fn due_after(now: Instant, delay: Duration) -> Instant {
    now.checked_add(delay).unwrap_or(now)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetState {
    Closed,
    Open,
}

#[derive(Debug, Clone, Copy)]
struct PendingReply {
    due: Instant,
    response: &'static CannedResponse,
}

pub struct ChatWidget {
    state: WidgetState,
    messages: Vec<Message>,
    welcome_shown: bool,
    welcome_due: Option<Instant>,
    pending: Option<PendingReply>,
    timing: TimingConfig,
    rich_responses: bool,
    jitter: Box<dyn Jitter>,
}

impl ChatWidget {
    pub fn new(timing: TimingConfig, rich_responses: bool) -> Self {
        Self::with_jitter(timing, rich_responses, Box::new(OsJitter))
    }

    pub fn with_jitter(
        timing: TimingConfig,
        rich_responses: bool,
        jitter: Box<dyn Jitter>,
    ) -> Self {
        Self {
            state: WidgetState::Closed,
            messages: Vec::new(),
            welcome_shown: false,
            welcome_due: None,
            pending: None,
            timing,
            rich_responses,
            jitter,
        }
    }

    pub fn state(&self) -> WidgetState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == WidgetState::Open
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// True while a reply is scheduled but not yet delivered.
    pub fn is_typing(&self) -> bool {
        self.pending.is_some()
    }

    pub fn last_bot_message(&self) -> Option<&Message> {
        self.messages.iter().rev().find(|m| m.is_bot())
    }

    /// Earliest instant at which [`tick`](Self::tick) has work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        let reply = self.pending.map(|p| p.due);
        match (self.welcome_due, reply) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    pub fn open(&mut self, now: Instant) {
        self.state = WidgetState::Open;
        if !self.welcome_shown && self.welcome_due.is_none() && self.messages.is_empty() {
            let due = due_after(now, self.timing.welcome_delay());
            debug!(?due, "help widget opened, welcome scheduled");
            self.welcome_due = Some(due);
        } else {
            debug!("help widget opened");
        }
    }

    pub fn close(&mut self) {
        if self.state == WidgetState::Open {
            debug!("help widget closed");
        }
        self.state = WidgetState::Closed;
    }

    pub fn toggle(&mut self, now: Instant) {
        match self.state {
            WidgetState::Open => self.close(),
            WidgetState::Closed => self.open(now),
        }
    }

    /// Append the user's question and schedule the reply. Returns `false`
    /// (and changes nothing) when the trimmed text is empty.
    pub fn send(&mut self, text: &str, now: Instant) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        let delay = self.timing.typing_delay(self.jitter.as_mut());
        self.submit(text, delay, now);
        true
    }

    /// Ask one of the canned questions as if the user had typed it.
    pub fn quick_action(&mut self, action: QuickAction, now: Instant) {
        let delay = self.timing.quick_action_delay();
        self.submit(action.question(), delay, now);
    }

    /// Deliver whatever has come due. Returns whether the transcript changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;
        if self.welcome_due.is_some_and(|due| due <= now) {
            changed |= self.deliver_welcome();
        }
        if self.pending.is_some_and(|p| p.due <= now) {
            changed |= self.deliver_reply();
        }
        changed
    }

    /// Deliver everything still scheduled, regardless of due time.
    pub fn flush(&mut self) -> bool {
        let welcome = self.deliver_welcome();
        let reply = self.deliver_reply();
        welcome || reply
    }

    fn submit(&mut self, text: &str, delay: Duration, now: Instant) {
        // Keep the single reply slot free before queueing the next answer.
        self.flush();

        self.messages.push(Message::user(text));
        let response = classify(text);
        debug!(topic = ?response.topic, ?delay, "reply scheduled");
        self.pending = Some(PendingReply {
            due: due_after(now, delay),
            response,
        });
    }

    fn deliver_welcome(&mut self) -> bool {
        if self.welcome_due.take().is_none() {
            return false;
        }
        self.messages.push(Message::bot(WELCOME_TEXT));
        self.welcome_shown = true;
        true
    }

    fn deliver_reply(&mut self) -> bool {
        let Some(pending) = self.pending.take() else {
            return false;
        };
        self.messages
            .push(Message::from_response(pending.response, self.rich_responses));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::message::Origin;
    use crate::core::responses::{Topic, FALLBACK, RULES};
    use crate::core::timing::FixedJitter;

    fn widget() -> ChatWidget {
        ChatWidget::with_jitter(
            TimingConfig::default(),
            true,
            Box::new(FixedJitter(Duration::from_millis(500))),
        )
    }

    fn origins(widget: &ChatWidget) -> Vec<Origin> {
        widget.messages().iter().map(Message::origin).collect()
    }

    fn response_text(topic: Topic) -> &'static str {
        RULES
            .iter()
            .find(|rule| rule.topic() == topic)
            .map(|rule| rule.response.text)
            .expect("topic has a rule")
    }

    #[test]
    fn starts_closed_and_empty() {
        let widget = widget();
        assert_eq!(widget.state(), WidgetState::Closed);
        assert!(widget.messages().is_empty());
        assert!(!widget.is_typing());
        assert!(widget.next_deadline().is_none());
    }

    #[test]
    fn blank_input_adds_nothing() {
        let mut widget = widget();
        let now = Instant::now();
        assert!(!widget.send("", now));
        assert!(!widget.send("   ", now));
        assert!(!widget.send("\t\n", now));
        assert!(widget.messages().is_empty());
        assert!(!widget.is_typing());
    }

    #[test]
    fn first_open_delivers_one_welcome_after_delay() {
        let mut widget = widget();
        let t0 = Instant::now();
        widget.open(t0);
        assert!(widget.is_open());
        assert!(!widget.tick(t0 + Duration::from_millis(299)));
        assert!(widget.messages().is_empty());

        assert!(widget.tick(t0 + Duration::from_millis(300)));
        assert_eq!(widget.messages().len(), 1);
        assert_eq!(widget.messages()[0].text(), WELCOME_TEXT);
        assert!(widget.messages()[0].is_bot());

        widget.open(t0 + Duration::from_secs(1));
        assert!(!widget.tick(t0 + Duration::from_secs(5)));
        assert_eq!(widget.messages().len(), 1);
    }

    #[test]
    fn reopening_before_welcome_fires_does_not_duplicate_it() {
        let mut widget = widget();
        let t0 = Instant::now();
        widget.open(t0);
        widget.close();
        widget.open(t0 + Duration::from_millis(100));
        widget.tick(t0 + Duration::from_secs(2));
        assert_eq!(widget.messages().len(), 1);
    }

    #[test]
    fn close_then_open_keeps_single_welcome() {
        let mut widget = widget();
        let t0 = Instant::now();
        widget.open(t0);
        widget.tick(t0 + Duration::from_secs(1));
        widget.close();
        assert_eq!(widget.state(), WidgetState::Closed);
        widget.open(t0 + Duration::from_secs(2));
        widget.tick(t0 + Duration::from_secs(3));
        let welcomes = widget
            .messages()
            .iter()
            .filter(|m| m.text() == WELCOME_TEXT)
            .count();
        assert_eq!(welcomes, 1);
    }

    #[test]
    fn send_appends_user_message_then_reply_after_typing_delay() {
        let mut widget = widget();
        let t0 = Instant::now();
        assert!(widget.send("  Como editar um cadastro?  ", t0));
        assert_eq!(widget.messages().len(), 1);
        assert_eq!(widget.messages()[0].text(), "Como editar um cadastro?");
        assert!(widget.is_typing());
        assert_eq!(widget.next_deadline(), Some(t0 + Duration::from_millis(2000)));

        assert!(!widget.tick(t0 + Duration::from_millis(1999)));
        assert!(widget.tick(t0 + Duration::from_millis(2000)));
        assert!(!widget.is_typing());
        assert_eq!(origins(&widget), vec![Origin::User, Origin::Bot]);
    }

    #[test]
    fn quick_action_matches_typed_question() {
        let t0 = Instant::now();

        let mut quick = widget();
        quick.quick_action(QuickAction::Create, t0);
        assert!(quick.tick(t0 + Duration::from_millis(1000)));

        let mut typed = widget();
        typed.send("Como cadastrar um novo paciente?", t0);
        typed.tick(t0 + Duration::from_secs(3));

        assert_eq!(quick.messages()[0].text(), typed.messages()[0].text());
        let quick_reply = quick.last_bot_message().expect("reply");
        let typed_reply = typed.last_bot_message().expect("reply");
        assert_eq!(quick_reply.text(), typed_reply.text());
        assert_eq!(quick_reply.text(), response_text(Topic::CreatePatient));
    }

    #[test]
    fn rapid_sends_never_interleave_replies() {
        let mut widget = widget();
        let t0 = Instant::now();
        widget.send("oi", t0);
        widget.send("valeu", t0 + Duration::from_millis(10));
        widget.send("xyz", t0 + Duration::from_millis(20));
        widget.tick(t0 + Duration::from_secs(10));

        assert_eq!(
            origins(&widget),
            vec![
                Origin::User,
                Origin::Bot,
                Origin::User,
                Origin::Bot,
                Origin::User,
                Origin::Bot,
            ]
        );
        let texts: Vec<&str> = widget.messages().iter().map(Message::text).collect();
        assert_eq!(texts[1], response_text(Topic::Greeting));
        assert_eq!(texts[3], response_text(Topic::Thanks));
        assert_eq!(texts[5], FALLBACK.text);
    }

    #[test]
    fn send_before_welcome_keeps_welcome_first() {
        let mut widget = widget();
        let t0 = Instant::now();
        widget.open(t0);
        widget.send("Quero buscar um paciente", t0 + Duration::from_millis(50));
        widget.tick(t0 + Duration::from_secs(5));
        let texts: Vec<&str> = widget.messages().iter().map(Message::text).collect();
        assert_eq!(texts.len(), 3);
        assert_eq!(texts[0], WELCOME_TEXT);
        assert_eq!(texts[2], response_text(Topic::SearchPatients));
    }

    #[test]
    fn replies_are_delivered_while_closed() {
        let mut widget = widget();
        let t0 = Instant::now();
        widget.open(t0);
        widget.send("tenho um problema", t0);
        widget.close();
        assert!(widget.tick(t0 + Duration::from_secs(3)));
        let reply = widget.last_bot_message().expect("reply");
        assert!(reply.rendered_markup().is_some());
    }

    #[test]
    fn huge_configured_delays_still_schedule_a_reply() {
        let timing = TimingConfig {
            welcome_delay_ms: u64::MAX,
            typing_base_ms: u64::MAX,
            typing_jitter_ms: u64::MAX,
            quick_action_delay_ms: u64::MAX,
        };
        let mut widget = ChatWidget::new(timing, true);
        let t0 = Instant::now();
        widget.open(t0);
        assert!(widget.send("oi", t0));
        assert!(widget.is_typing());
        widget.quick_action(QuickAction::Schedule, t0);
        assert!(widget.is_typing());
    }

    #[test]
    fn plain_mode_drops_markup() {
        let mut widget = ChatWidget::with_jitter(
            TimingConfig::default(),
            false,
            Box::new(FixedJitter(Duration::ZERO)),
        );
        let t0 = Instant::now();
        widget.send("outras dúvidas", t0);
        widget.flush();
        let reply = widget.last_bot_message().expect("reply");
        assert!(reply.rendered_markup().is_none());
        assert_eq!(reply.text(), response_text(Topic::Support));
    }

    #[test]
    fn toggle_switches_state() {
        let mut widget = widget();
        let now = Instant::now();
        widget.toggle(now);
        assert!(widget.is_open());
        widget.toggle(now);
        assert!(!widget.is_open());
    }
}
