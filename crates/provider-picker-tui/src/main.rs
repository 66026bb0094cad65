use anyhow::Result;
use ratatui::{
    crossterm::{
        self,
        event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    },
    prelude::*,
    widgets::*,
};
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

use log::debug;

use crate::actions::Action;
use crate::config::Config;
use crate::effect::execute_effect;
use crate::state::*;
use crate::store::Store;
use crate::task::{BackgroundTask, TaskResult, start_task_worker};
use crate::theme::Theme;
use crate::view_models::channel_tabs::ChannelTabsViewModel;
use crate::view_models::header::HeaderViewModel;
use crate::view_models::provider_list::ProviderListViewModel;

mod actions;
mod config;
mod effect;
mod log_capture;
mod reducer;
mod route;
mod shortcuts;
mod state;
mod store;
mod task;
mod theme;
mod view_models;
mod views;

pub struct App {
    // Redux store - centralized state management
    pub store: Store,
    // Communication channels
    pub action_tx: mpsc::UnboundedSender<Action>,
    pub task_tx: mpsc::UnboundedSender<BackgroundTask>,
    /// Route handed to the external router once the picker exits
    pub outcome: Option<String>,
}

pub fn initialize_panic_handler() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = shutdown();
        original_hook(panic_info);
    }));
}

fn startup() -> Result<()> {
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(std::io::stderr(), crossterm::terminal::EnterAlternateScreen)?;
    Ok(())
}

fn shutdown() -> Result<()> {
    crossterm::execute!(std::io::stderr(), crossterm::terminal::LeaveAlternateScreen)?;
    crossterm::terminal::disable_raw_mode()?;
    Ok(())
}

fn update(app: &mut App, msg: Action) -> Result<()> {
    // Overlays swallow everything except their own actions and internal
    // results (a settled search must always apply).
    let msg = if app.store.state().ui.show_help {
        match msg {
            Action::ToggleHelp | Action::Quit | Action::SearchSettled { .. } | Action::None => msg,
            Action::Cancel => Action::ToggleHelp,
            _ => return Ok(()),
        }
    } else if app.store.state().debug_console.is_open {
        match msg {
            Action::ToggleDebugConsole
            | Action::ScrollDebugConsoleUp
            | Action::ScrollDebugConsoleDown
            | Action::ToggleDebugAutoScroll
            | Action::ClearDebugLogs
            | Action::Quit
            | Action::SearchSettled { .. }
            | Action::None => msg,
            Action::Cancel => Action::ToggleDebugConsole,
            _ => return Ok(()),
        }
    } else {
        msg
    };

    // Dispatch to the reducers, then execute the effects they requested and
    // feed follow-up actions back through the store.
    let effects = app.store.dispatch(msg);
    for effect in effects {
        let follow_up_actions = execute_effect(app, effect)?;
        for action in follow_up_actions {
            let nested_effects = app.store.dispatch(action);
            for nested_effect in nested_effects {
                let nested_actions = execute_effect(app, nested_effect)?;
                for nested_action in nested_actions {
                    let _ = app.action_tx.send(nested_action);
                }
            }
        }
    }

    Ok(())
}

/// Shared flags the event reader consults to route key presses
struct EventFlags {
    search_mode: Arc<Mutex<bool>>,
    help_open: Arc<Mutex<bool>>,
    console_open: Arc<Mutex<bool>>,
}

fn start_event_handler(
    tx: mpsc::UnboundedSender<Action>,
    flags: EventFlags,
) -> tokio::task::JoinHandle<()> {
    let tick_rate = std::time::Duration::from_millis(250);

    tokio::spawn(async move {
        loop {
            let action = if crossterm::event::poll(tick_rate).unwrap_or(false) {
                let search_mode = *flags.search_mode.lock().unwrap();
                let help_open = *flags.help_open.lock().unwrap();
                let console_open = *flags.console_open.lock().unwrap();
                handle_events(search_mode, help_open, console_open).unwrap_or(Action::None)
            } else {
                Action::None
            };

            if tx.send(action).is_err() {
                break;
            }
        }
    })
}

/// Convert TaskResult to Action - the single place where task results become actions
fn result_to_action(result: TaskResult) -> Action {
    match result {
        TaskResult::SearchSettled { generation, query } => {
            Action::SearchSettled { generation, query }
        }
    }
}

async fn run_with_log_buffer(log_buffer: log_capture::LogBuffer) -> Result<Option<String>> {
    let mut t = Terminal::new(CrosstermBackend::new(std::io::stderr()))?;

    let (action_tx, mut action_rx) = mpsc::unbounded_channel();
    let (task_tx, task_rx) = mpsc::unbounded_channel();
    let (result_tx, mut result_rx) = mpsc::unbounded_channel();

    let mut app = App::new(action_tx.clone(), task_tx, log_buffer);

    // Shared flags so the event reader routes keys without touching the store
    let search_mode_shared = Arc::new(Mutex::new(false));
    let help_open_shared = Arc::new(Mutex::new(false));
    let console_open_shared = Arc::new(Mutex::new(false));

    let event_task = start_event_handler(
        app.action_tx.clone(),
        EventFlags {
            search_mode: search_mode_shared.clone(),
            help_open: help_open_shared.clone(),
            console_open: console_open_shared.clone(),
        },
    );
    let worker_task = start_task_worker(task_rx, result_tx);

    loop {
        // Sync the shared flags for the event reader
        *search_mode_shared.lock().unwrap() =
            app.store.state().ui.input_mode == InputMode::Search;
        *help_open_shared.lock().unwrap() = app.store.state().ui.show_help;
        *console_open_shared.lock().unwrap() = app.store.state().debug_console.is_open;

        t.draw(|f| {
            ui(f, &app);
        })?;

        // Handle both actions and task results; results first so a settled
        // filter shows up before the next keystroke is processed.
        let maybe_action = tokio::time::timeout(std::time::Duration::from_millis(100), async {
            tokio::select! {
                biased;
                Some(result) = result_rx.recv() => Some(result_to_action(result)),
                Some(action) = action_rx.recv() => Some(action),
                else => None
            }
        })
        .await;

        match maybe_action {
            Ok(Some(action)) => {
                if let Err(err) = update(&mut app, action) {
                    debug!("Error updating app: {}", err);
                    let _ = app.store.dispatch(Action::Quit);
                }
            }
            Ok(None) => break, // Channels closed
            Err(_) => {
                // Timeout - nothing to do, redraw on the next iteration
            }
        }

        if app.store.state().ui.should_quit {
            break;
        }
    }

    event_task.abort();
    worker_task.abort();

    Ok(app.outcome)
}

fn ui(f: &mut Frame, app: &App) {
    let state = app.store.state();
    let theme = &state.theme;

    // Sidebar layout: header, search box, channel tabs, provider list, footer
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header
            Constraint::Length(3), // Search input
            Constraint::Length(3), // Channel tabs
            Constraint::Min(0),    // Provider list
            Constraint::Length(2), // Footer
        ])
        .split(f.area());

    f.render_widget(
        Block::default().style(Style::default().bg(theme.bg_primary)),
        f.area(),
    );

    let header_vm = HeaderViewModel::from_state(&state.picker, state.config.color_scheme);
    crate::views::header::render_header(f, chunks[0], &header_vm, theme);

    crate::views::search::render_search_input(
        f,
        chunks[1],
        &state.picker.query,
        state.ui.input_mode,
        theme,
    );

    let tabs_vm = ChannelTabsViewModel::from_state(&state.picker);
    crate::views::channel_tabs::render_channel_tabs(f, chunks[2], &tabs_vm, theme);

    // Inner height of the bordered list block
    let list_height = chunks[3].height.saturating_sub(2) as usize;
    let list_vm = ProviderListViewModel::from_state(&state.picker, list_height);
    crate::views::provider_list::render_provider_list(f, chunks[3], &list_vm, theme);

    let has_selection = state.picker.selection.provider().is_some();
    crate::views::footer::render_footer(f, chunks[4], has_selection, theme);

    // Overlays render last
    if state.ui.show_help {
        crate::views::help::render_help_panel(f, f.area(), theme);
    }
    if state.debug_console.is_open {
        crate::views::debug_console::render_debug_console(
            f,
            f.area(),
            &state.debug_console,
            theme,
        );
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the captured logger before anything else
    let log_buffer = log_capture::init_logger();

    initialize_panic_handler();
    startup()?;
    let outcome = run_with_log_buffer(log_buffer).await;
    shutdown()?;

    // The TUI draws on stderr; stdout carries only the navigation request so
    // the launching router/script can consume it.
    if let Some(route) = outcome? {
        println!("{route}");
    }

    Ok(())
}

impl App {
    fn new(
        action_tx: mpsc::UnboundedSender<Action>,
        task_tx: mpsc::UnboundedSender<BackgroundTask>,
        log_buffer: log_capture::LogBuffer,
    ) -> App {
        let config = Config::load();
        let theme = Theme::from_scheme(config.color_scheme);

        let initial_state = AppState {
            ui: UiState::default(),
            picker: PickerState::new(provider_catalog::builtin_catalog()),
            debug_console: DebugConsoleState {
                logs: log_buffer,
                ..DebugConsoleState::default()
            },
            config,
            theme,
        };

        debug!(
            "Catalog loaded: {} providers across {} channels",
            initial_state.picker.original.len(),
            initial_state.picker.visible_channels().len()
        );

        App {
            store: Store::new(initial_state),
            action_tx,
            task_tx,
            outcome: None,
        }
    }
}

fn handle_events(search_mode: bool, help_open: bool, console_open: bool) -> Result<Action> {
    Ok(match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            handle_key_event(key, search_mode, help_open, console_open)
        }
        _ => Action::None,
    })
}

fn handle_key_event(key: KeyEvent, search_mode: bool, help_open: bool, console_open: bool) -> Action {
    // Debug console keys take priority while it is open
    if console_open {
        return match key.code {
            KeyCode::Char('`') | KeyCode::Char('~') | KeyCode::Esc => Action::ToggleDebugConsole,
            KeyCode::Char('j') | KeyCode::Down => Action::ScrollDebugConsoleDown,
            KeyCode::Char('k') | KeyCode::Up => Action::ScrollDebugConsoleUp,
            KeyCode::Char('a') => Action::ToggleDebugAutoScroll,
            KeyCode::Char('c') => Action::ClearDebugLogs,
            _ => Action::None,
        };
    }

    // Any close key dismisses the help panel
    if help_open {
        return match key.code {
            KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::Char('x') | KeyCode::Esc => {
                Action::ToggleHelp
            }
            _ => Action::None,
        };
    }

    // Search mode: printable keys edit the query, arrows still move the cursor
    if search_mode {
        return match key.code {
            KeyCode::Esc | KeyCode::Enter => Action::LeaveSearchMode,
            KeyCode::Backspace => Action::SearchBackspace,
            KeyCode::Down => Action::CursorNext,
            KeyCode::Up => Action::CursorPrev,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Cancel,
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                Action::SearchInput(c)
            }
            _ => Action::None,
        };
    }

    // Ctrl+C cancels from anywhere
    if matches!(key.code, KeyCode::Char('c')) && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Cancel;
    }

    crate::shortcuts::find_action_for_key(&key)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_search_mode_routes_printable_keys_to_the_query() {
        let action = handle_key_event(key(KeyCode::Char('j')), true, false, false);
        assert!(matches!(action, Action::SearchInput('j')));

        let action = handle_key_event(key(KeyCode::Esc), true, false, false);
        assert!(matches!(action, Action::LeaveSearchMode));
    }

    #[test]
    fn test_normal_mode_uses_the_shortcut_table() {
        let action = handle_key_event(key(KeyCode::Char('j')), false, false, false);
        assert!(matches!(action, Action::CursorNext));

        let action = handle_key_event(key(KeyCode::Char('/')), false, false, false);
        assert!(matches!(action, Action::EnterSearchMode));
    }

    #[test]
    fn test_overlays_swallow_unrelated_keys() {
        let action = handle_key_event(key(KeyCode::Char('n')), false, true, false);
        assert!(matches!(action, Action::None));

        let action = handle_key_event(key(KeyCode::Char('n')), false, false, true);
        assert!(matches!(action, Action::None));
    }

    #[test]
    fn test_ctrl_c_cancels() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let action = handle_key_event(ctrl_c, false, false, false);
        assert!(matches!(action, Action::Cancel));
    }
}
