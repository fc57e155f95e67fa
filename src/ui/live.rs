use std::time::Duration;

use chrono::{TimeZone, Utc};
use tokio::sync::watch;
use tokio::time::MissedTickBehavior;

use crate::countdown::{CountdownView, Locale, live_view};
use crate::shutdown::ShutdownSender;

/// Spawns the live refresh: one tick right away, then every `tick`.
///
/// A new view is published only when the rendered text changes. The task
/// ends on shutdown or once every receiver is gone.
pub fn spawn_live_ticker<Tz>(
    zone: Tz,
    locale: Locale,
    tick: Duration,
    shutdown_tx: &ShutdownSender,
    live_tx: watch::Sender<CountdownView>,
) -> tokio::task::JoinHandle<()>
where
    Tz: TimeZone + Send + 'static,
    Tz::Offset: Send,
{
    let mut shutdown_rx = shutdown_tx.subscribe();
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(tick);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = shutdown_rx.recv() => break,
                _ = ticker.tick() => {
                    let now = Utc::now().with_timezone(&zone);
                    let view = live_view(&now, locale);
                    live_tx.send_if_modified(|current| {
                        if *current == view {
                            false
                        } else {
                            *current = view;
                            true
                        }
                    });
                    if live_tx.is_closed() {
                        break;
                    }
                }
            }
        }
        tracing::debug!("Live ticker stopped");
    })
}
