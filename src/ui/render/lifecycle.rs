use std::sync::Arc;
use std::time::Duration;

use chrono::Local;
use crossterm::event::{self, Event};
use tokio::sync::{Mutex, mpsc, watch};

use crate::audio::{AudioPlayer, ToggleCommand, Volume};
use crate::countdown::{Locale, live_view, prefill_value};
use crate::error::{AppResult, AudioError};
use crate::shutdown::ShutdownSender;
use crate::ui::controller::{App, AppAction};
use crate::ui::live::spawn_live_ticker;

use super::dashboard::{Ui, UiActions};
use super::frame::layout_regions;

/// How often pending terminal input is drained.
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(50);
/// Only one start attempt can be pending at a time.
const OUTCOME_CHANNEL_CAPACITY: usize = 1;

type PlayOutcome = Result<(), AudioError>;

pub struct UiSettings<P> {
    pub locale: Locale,
    pub no_color: bool,
    pub tick: Duration,
    pub volume: Volume,
    pub player: P,
}

struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        Ui::cleanup();
    }
}

/// Runs the interactive countdown until the user quits or shutdown fires.
///
/// # Errors
///
/// Returns an error when the terminal cannot be set up or read.
pub async fn run_ui<P>(settings: UiSettings<P>, shutdown_tx: &ShutdownSender) -> AppResult<()>
where
    P: AudioPlayer + 'static,
{
    let UiSettings {
        locale,
        no_color,
        tick,
        volume,
        player,
    } = settings;

    let mut terminal = Ui::setup_terminal()?;
    let _guard = TerminalGuard;

    let now = Local::now();
    let (live_tx, mut live_rx) = watch::channel(live_view(&now, locale));
    let mut app = App::new(
        Local,
        locale,
        no_color,
        volume,
        live_rx.borrow().clone(),
        prefill_value(&now),
    );
    let mut shutdown_rx = shutdown_tx.subscribe();
    let ticker = spawn_live_ticker(Local, locale, tick, shutdown_tx, live_tx);

    let player = Arc::new(Mutex::new(player));
    let (outcome_tx, mut outcome_rx) = mpsc::channel::<PlayOutcome>(OUTCOME_CHANNEL_CAPACITY);
    let mut input_poll = tokio::time::interval(INPUT_POLL_INTERVAL);
    let mut dirty = true;
    let mut quit = false;

    tracing::info!("Countdown UI started");
    while !quit {
        if dirty {
            Ui::render(&mut terminal, &app.render_data());
            dirty = false;
        }

        tokio::select! {
            _ = shutdown_rx.recv() => break,
            changed = live_rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let view = live_rx.borrow_and_update().clone();
                app.set_live(view);
                dirty = true;
            }
            Some(outcome) = outcome_rx.recv() => {
                app.play_resolved(outcome);
                dirty = true;
            }
            _ = input_poll.tick() => {
                let control = layout_regions(terminal.size()?).map(|regions| regions.control);
                while event::poll(Duration::ZERO)? {
                    let action = match event::read()? {
                        Event::Key(key) => app.handle_key(key),
                        Event::Mouse(mouse) => app.handle_mouse(mouse, control),
                        Event::Paste(text) => {
                            app.paste(&text);
                            AppAction::None
                        }
                        Event::Resize(_, _) | Event::FocusGained | Event::FocusLost => {
                            AppAction::None
                        }
                    };
                    dirty = true;
                    match action {
                        AppAction::None => {}
                        AppAction::Quit => quit = true,
                        AppAction::Audio(ToggleCommand::Play { volume }) => {
                            start_playback(volume, &player, &outcome_tx);
                        }
                        AppAction::Audio(ToggleCommand::Pause) => {
                            // Free here: clicks are ignored while a start holds it.
                            let outcome = player.lock().await.pause();
                            app.pause_resolved(outcome);
                        }
                    }
                }
            }
        }
    }

    tracing::info!("Countdown UI stopping");
    drop(shutdown_tx.send(()));
    ticker.await?;
    if let Err(err) = player.lock().await.pause() {
        tracing::warn!("Failed to stop music on exit: {}", err);
    }
    Ok(())
}

/// Starts playback in the background; the outcome comes back on `outcome_tx`.
fn start_playback<P>(
    volume: Volume,
    player: &Arc<Mutex<P>>,
    outcome_tx: &mpsc::Sender<PlayOutcome>,
) where
    P: AudioPlayer + 'static,
{
    let player = Arc::clone(player);
    let outcome_tx = outcome_tx.clone();
    drop(tokio::spawn(async move {
        let outcome = player.lock().await.play(volume).await;
        if outcome_tx.send(outcome).await.is_err() {
            tracing::debug!("UI closed before playback resolved");
        }
    }));
}
