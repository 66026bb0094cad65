use provider_catalog::Channel;

use crate::actions::Action;
use crate::effect::Effect;
use crate::route::Route;
use crate::state::{AppState, DebugConsoleState, InputMode, PickerState, SECTION_CONTEXT_ROWS, Selection, UiState};

/// Root reducer that delegates to sub-reducers based on action type
/// Pure function: takes state and action, returns new state plus effects
pub fn reduce(mut state: AppState, action: &Action) -> (AppState, Vec<Effect>) {
    let mut effects = Vec::new();

    let debounce_ms = state.config.debounce_ms;
    state.ui = ui_reducer(state.ui, action);
    state.picker = picker_reducer(state.picker, action, debounce_ms, &mut effects);
    state.debug_console = debug_console_reducer(state.debug_console, action);

    (state, effects)
}

/// UI chrome reducer - input mode, overlays, quit flag
fn ui_reducer(mut state: UiState, action: &Action) -> UiState {
    match action {
        Action::Quit => {
            state.should_quit = true;
        }
        Action::EnterSearchMode => {
            state.input_mode = InputMode::Search;
        }
        Action::LeaveSearchMode => {
            state.input_mode = InputMode::Normal;
        }
        Action::ToggleHelp => {
            state.show_help = !state.show_help;
        }
        _ => {}
    }

    state
}

/// Catalog, cursor and selection reducer
fn picker_reducer(
    mut state: PickerState,
    action: &Action,
    debounce_ms: u64,
    effects: &mut Vec<Effect>,
) -> PickerState {
    match action {
        Action::SearchInput(c) => {
            state.query.push(*c);
            schedule_refilter(&mut state, debounce_ms, effects);
        }
        Action::SearchBackspace => {
            // Deleting from an already empty box changes nothing; don't
            // restart the quiet period for it.
            if state.query.pop().is_some() {
                schedule_refilter(&mut state, debounce_ms, effects);
            }
        }
        Action::SearchSettled { generation, query } => {
            // Only the newest timer may publish its result; anything older
            // was superseded by a later keystroke.
            if *generation == state.generation {
                state.filtered = state.original.refine(query);
                state.cursor = state
                    .cursor
                    .min(state.provider_count().saturating_sub(1));
                state.scroll_offset = 0;
            }
        }
        Action::CursorNext => {
            let count = state.provider_count();
            if count > 0 {
                state.cursor = if state.cursor + 1 >= count {
                    0
                } else {
                    state.cursor + 1
                };
            }
        }
        Action::CursorPrev => {
            let count = state.provider_count();
            if count > 0 {
                state.cursor = if state.cursor == 0 {
                    count - 1
                } else {
                    state.cursor - 1
                };
            }
        }
        Action::NextChannelTab => {
            if let Some(channel) = step_channel(&state, 1) {
                jump_to_channel(&mut state, channel);
            }
        }
        Action::PrevChannelTab => {
            if let Some(channel) = step_channel(&state, -1) {
                jump_to_channel(&mut state, channel);
            }
        }
        Action::AcceptUnderCursor => {
            if let Some(provider) = state.provider_under_cursor().cloned() {
                state.selection = Selection::Selected(provider);
            }
        }
        Action::Confirm => {
            // Structurally a no-op without a selection; the footer renders
            // the action disabled in that state.
            if let Selection::Selected(provider) = &state.selection {
                effects.push(Effect::Navigate(Route::CreateIntegration {
                    channel: provider.channel,
                    provider_id: provider.id.clone(),
                }));
            }
        }
        Action::Cancel => {
            effects.push(Effect::Navigate(Route::IntegrationsList));
        }
        _ => {}
    }

    state
}

fn schedule_refilter(state: &mut PickerState, debounce_ms: u64, effects: &mut Vec<Effect>) {
    state.generation += 1;
    effects.push(Effect::ScheduleSearch {
        generation: state.generation,
        query: state.query.clone(),
        delay_ms: debounce_ms,
    });
}

/// Step through the visible tabs relative to the cursor's channel, wrapping.
fn step_channel(state: &PickerState, direction: isize) -> Option<Channel> {
    let visible = state.visible_channels();
    if visible.is_empty() {
        return None;
    }

    let current = state.cursor_channel().unwrap_or(visible[0]);
    let position = visible.iter().position(|&c| c == current).unwrap_or(0);
    let len = visible.len() as isize;
    let next = (position as isize + direction).rem_euclid(len) as usize;
    Some(visible[next])
}

/// Scroll the channel's section header into view (keeping a fixed number of
/// context rows above it) and move the cursor to its first provider.
fn jump_to_channel(state: &mut PickerState, channel: Channel) {
    if let (Some(ordinal), Some(row)) = (state.first_ordinal(channel), state.section_row(channel)) {
        state.cursor = ordinal;
        state.scroll_offset = row.saturating_sub(SECTION_CONTEXT_ROWS);
    }
}

/// Debug console reducer
fn debug_console_reducer(mut state: DebugConsoleState, action: &Action) -> DebugConsoleState {
    match action {
        Action::ToggleDebugConsole => {
            state.is_open = !state.is_open;
        }
        Action::ScrollDebugConsoleUp => {
            state.auto_scroll = false;
            state.scroll_offset = state.scroll_offset.saturating_sub(1);
        }
        Action::ScrollDebugConsoleDown => {
            state.scroll_offset = state.scroll_offset.saturating_add(1);
        }
        Action::ToggleDebugAutoScroll => {
            state.auto_scroll = !state.auto_scroll;
        }
        Action::ClearDebugLogs => {
            if let Ok(mut logs) = state.logs.lock() {
                logs.clear();
            }
            state.scroll_offset = 0;
        }
        _ => {}
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use provider_catalog::{Catalog, Provider};

    fn provider(id: &str, name: &str, channel: Channel) -> Provider {
        Provider::new(id, name, channel, format!("channels/{channel}/{id}"))
    }

    /// Catalog from the walkthrough scenario: two email providers whose names
    /// contain "mail" plus one SMS provider.
    fn scenario_state() -> AppState {
        let catalog = Catalog::from_providers(vec![
            provider("mailgun", "Mailgun", Channel::Email),
            provider("mailchimp", "Mailchimp", Channel::Email),
            provider("twilio", "Twilio", Channel::Sms),
        ]);
        AppState {
            picker: PickerState::new(catalog),
            ..AppState::default()
        }
    }

    fn settle(state: AppState, query: &str) -> (AppState, Vec<Effect>) {
        let generation = state.picker.generation;
        reduce(
            state,
            &Action::SearchSettled {
                generation,
                query: query.to_string(),
            },
        )
    }

    #[test]
    fn test_search_input_bumps_generation_and_schedules_a_timer() {
        let state = scenario_state();
        let (state, effects) = reduce(state, &Action::SearchInput('m'));

        assert_eq!(state.picker.query, "m");
        assert_eq!(state.picker.generation, 1);
        assert_eq!(
            effects,
            vec![Effect::ScheduleSearch {
                generation: 1,
                query: "m".to_string(),
                delay_ms: 500,
            }]
        );

        // The filtered catalog is untouched until the timer settles.
        assert_eq!(state.picker.provider_count(), 3);
    }

    #[test]
    fn test_backspace_on_empty_query_schedules_nothing() {
        let state = scenario_state();
        let (state, effects) = reduce(state, &Action::SearchBackspace);

        assert!(effects.is_empty());
        assert_eq!(state.picker.generation, 0);
    }

    #[test]
    fn test_settled_timer_applies_filter_and_hides_empty_channels() {
        let state = scenario_state();
        let (state, _) = reduce(state, &Action::SearchInput('m'));
        let (state, _) = reduce(state, &Action::SearchInput('a'));
        let (state, _) = settle(state, "ma");

        let emails: Vec<&str> = state
            .picker
            .filtered
            .providers(Channel::Email)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(emails, vec!["mailgun", "mailchimp"]);
        assert!(state.picker.filtered.providers(Channel::Sms).is_empty());
        assert_eq!(state.picker.visible_channels(), vec![Channel::Email]);
    }

    #[test]
    fn test_stale_timer_is_discarded() {
        let state = scenario_state();
        let (state, _) = reduce(state, &Action::SearchInput('m'));
        let (state, _) = reduce(state, &Action::SearchInput('a'));

        // A timer from the first keystroke (generation 1) fires late.
        let (state, _) = reduce(
            state,
            &Action::SearchSettled {
                generation: 1,
                query: "m".to_string(),
            },
        );

        // Nothing applied: the displayed catalog still holds all providers.
        assert_eq!(state.picker.provider_count(), 3);
    }

    #[test]
    fn test_shortening_the_query_restores_hidden_providers() {
        let state = scenario_state();
        let (state, _) = reduce(state, &Action::SearchInput('m'));
        let (state, _) = settle(state, "m");
        assert!(state.picker.filtered.providers(Channel::Sms).is_empty());

        // Delete the character; the refilter starts from the original
        // catalog, so the SMS provider comes back.
        let (state, _) = reduce(state, &Action::SearchBackspace);
        let (state, _) = settle(state, "");
        assert_eq!(state.picker.provider_count(), 3);
        assert_eq!(
            state.picker.visible_channels(),
            vec![Channel::Email, Channel::Sms]
        );
    }

    #[test]
    fn test_cursor_is_clamped_when_the_filter_shrinks_the_list() {
        let mut state = scenario_state();
        state.picker.cursor = 2; // twilio
        let (state, _) = reduce(state, &Action::SearchInput('m'));
        let (state, _) = settle(state, "m");

        assert_eq!(state.picker.cursor, 1);
        assert_eq!(state.picker.provider_under_cursor().unwrap().id, "mailchimp");
    }

    #[test]
    fn test_cursor_wraps_in_both_directions() {
        let state = scenario_state();
        let (state, _) = reduce(state, &Action::CursorPrev);
        assert_eq!(state.picker.cursor, 2);

        let (state, _) = reduce(state, &Action::CursorNext);
        assert_eq!(state.picker.cursor, 0);
    }

    #[test]
    fn test_accepting_a_second_provider_replaces_the_first() {
        let state = scenario_state();
        let (state, _) = reduce(state, &Action::AcceptUnderCursor);
        assert!(state.picker.selection.is_provider("mailgun"));

        let (state, _) = reduce(state, &Action::CursorNext);
        let (state, _) = reduce(state, &Action::AcceptUnderCursor);
        assert!(state.picker.selection.is_provider("mailchimp"));
        assert!(matches!(state.picker.selection, Selection::Selected(_)));
    }

    #[test]
    fn test_selection_survives_filtering_it_out() {
        let state = scenario_state();
        let (state, _) = reduce(state, &Action::AcceptUnderCursor); // mailgun

        let (state, _) = reduce(state, &Action::SearchInput('t'));
        let (state, _) = settle(state, "t");

        // Mailgun is no longer visible, but the selection is never
        // auto-cleared within the view.
        assert!(state.picker.selection.is_provider("mailgun"));
    }

    #[test]
    fn test_confirm_without_selection_is_a_no_op() {
        let state = scenario_state();
        let (state, effects) = reduce(state, &Action::Confirm);

        assert!(effects.is_empty());
        assert!(!state.ui.should_quit);
    }

    #[test]
    fn test_confirm_with_selection_navigates_to_the_creation_flow() {
        let state = scenario_state();
        let (state, _) = reduce(state, &Action::AcceptUnderCursor); // mailgun
        let (_, effects) = reduce(state, &Action::Confirm);

        assert_eq!(
            effects,
            vec![Effect::Navigate(Route::CreateIntegration {
                channel: Channel::Email,
                provider_id: "mailgun".to_string(),
            })]
        );
    }

    #[test]
    fn test_cancel_navigates_to_the_integrations_list() {
        let state = scenario_state();
        let (_, effects) = reduce(state, &Action::Cancel);
        assert_eq!(effects, vec![Effect::Navigate(Route::IntegrationsList)]);
    }

    #[test]
    fn test_channel_tab_jump_moves_cursor_and_scrolls_with_context() {
        let state = scenario_state();
        let (state, _) = reduce(state, &Action::NextChannelTab);

        // Cursor lands on the first SMS provider; the SMS section header
        // (row 3) scrolls to one context row from the top.
        assert_eq!(state.picker.provider_under_cursor().unwrap().id, "twilio");
        assert_eq!(state.picker.scroll_offset, 2);

        // Wrap back to email.
        let (state, _) = reduce(state, &Action::NextChannelTab);
        assert_eq!(state.picker.provider_under_cursor().unwrap().id, "mailgun");
        assert_eq!(state.picker.scroll_offset, 0);
    }

    #[test]
    fn test_channel_tab_prev_wraps() {
        let state = scenario_state();
        let (state, _) = reduce(state, &Action::PrevChannelTab);
        assert_eq!(state.picker.cursor_channel(), Some(Channel::Sms));
    }

    #[test]
    fn test_search_mode_toggles() {
        let state = scenario_state();
        let (state, _) = reduce(state, &Action::EnterSearchMode);
        assert_eq!(state.ui.input_mode, InputMode::Search);

        let (state, _) = reduce(state, &Action::LeaveSearchMode);
        assert_eq!(state.ui.input_mode, InputMode::Normal);
    }
}
