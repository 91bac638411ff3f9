//! Interactive session loop.
//!
//! A reader task forwards crossterm events over a channel; the loop applies
//! them to the [`App`], advances the widget timers on a fixed interval and
//! redraws only when something visible changed.

mod keybindings;
mod lifecycle;

use std::error::Error;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use ratatui::crossterm::event::{self, Event};
use ratatui::layout::Rect;
use tokio::sync::mpsc;
use tracing::{debug, info};

use self::keybindings::{map_key, map_mouse, KeyOutcome};
use self::lifecycle::{restore_terminal, setup_terminal, ChatTerminal};
use crate::core::app::App;
use crate::core::config::data::Config;
use crate::ui::layout::compute_regions;
use crate::ui::renderer::ui;

const TICK_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Debug)]
pub enum UiEvent {
    Crossterm(Event),
}

fn spawn_event_reader(event_tx: mpsc::UnboundedSender<UiEvent>) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            if let Ok(true) = event::poll(Duration::from_millis(10)) {
                match event::read() {
                    Ok(ev) => {
                        if event_tx.send(UiEvent::Crossterm(ev)).is_err() {
                            break;
                        }
                    }
                    Err(_) => {
                        continue;
                    }
                }
            } else {
                tokio::task::yield_now().await;
            }
        }
    })
}

pub async fn run_chat(config: Config, log_file: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
    let mut app = App::new(&config, log_file)?;
    info!(theme = config.theme_name(), "starting chat session");

    let mut terminal = setup_terminal()?;
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<UiEvent>();
    let event_reader_handle = spawn_event_reader(event_tx);

    let result = event_loop(&mut app, &mut terminal, &mut event_rx).await;

    event_reader_handle.abort();
    restore_terminal(&mut terminal)?;
    info!(
        messages = app.widget.messages().len(),
        "chat session finished"
    );
    result
}

async fn event_loop(
    app: &mut App,
    terminal: &mut ChatTerminal,
    event_rx: &mut mpsc::UnboundedReceiver<UiEvent>,
) -> Result<(), Box<dyn Error>> {
    let mut ticker = tokio::time::interval(TICK_INTERVAL);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
    let mut request_redraw = true;

    loop {
        if app.ui.exit_requested {
            return Ok(());
        }

        if request_redraw {
            terminal.draw(|f| ui(f, app))?;
            request_redraw = false;
        }

        tokio::select! {
            maybe_event = event_rx.recv() => {
                let Some(UiEvent::Crossterm(ev)) = maybe_event else {
                    return Ok(());
                };
                let size = terminal.size()?;
                let area = Rect::new(0, 0, size.width, size.height);
                request_redraw |= handle_event(app, ev, area, Instant::now());
            }
            _ = ticker.tick() => {
                request_redraw |= app.tick(Instant::now());
            }
        }
    }
}

/// Apply one terminal event. Returns whether a redraw is needed.
fn handle_event(app: &mut App, ev: Event, area: Rect, now: Instant) -> bool {
    match ev {
        Event::Key(key) => match map_key(&key, app.widget.is_open()) {
            KeyOutcome::Action(action) => {
                app.apply(action, now);
                true
            }
            KeyOutcome::Edit => app.ui.handle_input_key(key),
            KeyOutcome::Ignored => false,
        },
        Event::Mouse(mouse) => {
            let regions = compute_regions(area, app.widget.is_open());
            match map_mouse(&mouse, &regions) {
                Some(action) => {
                    app.apply(action, now);
                    true
                }
                None => false,
            }
        }
        Event::Paste(text) => {
            if !app.widget.is_open() {
                debug!("ignoring paste while the help dialog is closed");
                return false;
            }
            app.ui.insert_text(&text);
            true
        }
        Event::Resize(..) => true,
        _ => false,
    }
}
