/// Effect system for the Redux architecture
/// Reducers return (State, Vec<Effect>) where Effects describe side effects
/// to perform; the update() loop executes them
use log::debug;

use anyhow::Result;

use crate::{App, actions::Action, route::Route, task::BackgroundTask};

/// Effects that reducers can request to be performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// (Re)start the search debounce timer for the given generation.
    /// A newer generation supersedes any timer still pending.
    ScheduleSearch {
        generation: u64,
        query: String,
        delay_ms: u64,
    },

    /// Hand the route to the external router and shut the picker down
    Navigate(Route),

    /// No effect
    None,
}

/// Execute an effect and return follow-up actions to dispatch
pub fn execute_effect(app: &mut App, effect: Effect) -> Result<Vec<Action>> {
    match effect {
        Effect::None => Ok(vec![]),

        Effect::ScheduleSearch {
            generation,
            query,
            delay_ms,
        } => {
            let _ = app.task_tx.send(BackgroundTask::DebounceSearch {
                generation,
                query,
                delay_ms,
            });
            Ok(vec![])
        }

        Effect::Navigate(route) => {
            // Cancel goes to the configured list route; confirm renders the
            // creation-flow route from the selection.
            let path = match &route {
                Route::IntegrationsList => app.store.state().config.cancel_route.clone(),
                Route::CreateIntegration { .. } => route.to_string(),
            };
            debug!("navigation request: {}", path);
            app.outcome = Some(path);
            Ok(vec![Action::Quit])
        }
    }
}
