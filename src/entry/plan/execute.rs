use chrono::Local;

use crate::audio::CommandPlayer;
use crate::countdown::{CountdownView, Locale, custom_view, live_view};
use crate::error::{AppError, AppResult, ValidationError};
use crate::shutdown_handlers::{setup_signal_shutdown_handler, shutdown_channel};
use crate::ui::{UiSettings, run_ui};

use super::types::{RunPlan, UiPlan};

pub(crate) async fn execute_plan(plan: RunPlan) -> AppResult<()> {
    match plan {
        RunPlan::Once { locale } => {
            print_view(&live_view(&Local::now(), locale), locale);
            Ok(())
        }
        RunPlan::At { locale, input } => match custom_view(&input, &Local, locale) {
            Some(view) => {
                print_view(&view, locale);
                Ok(())
            }
            None => {
                tracing::error!("Could not parse reference date '{}'", input);
                Err(AppError::validation(ValidationError::InvalidReference {
                    value: input,
                }))
            }
        },
        RunPlan::Ui(plan) => run_interactive(plan).await,
    }
}

fn print_view(view: &CountdownView, locale: Locale) {
    println!("{} {} {}", view.minutes, locale.minutes_word(), view.label);
}

async fn run_interactive(plan: UiPlan) -> AppResult<()> {
    let (shutdown_tx, _) = shutdown_channel();
    let signal_handle = setup_signal_shutdown_handler(&shutdown_tx);

    let settings = UiSettings {
        locale: plan.locale,
        no_color: plan.no_color,
        tick: plan.tick,
        volume: plan.volume,
        player: CommandPlayer::new(plan.player),
    };
    let result = run_ui(settings, &shutdown_tx).await;

    drop(shutdown_tx.send(()));
    signal_handle.await?;
    result
}
