use provider_catalog::{Catalog, Channel, Provider, builtin_catalog};

use crate::config::Config;
use crate::log_capture::LogBuffer;
use crate::theme::Theme;

/// Rows of context kept above a section header when jumping to it via the
/// category tabs, so the header is not flush against (or hidden by) the list
/// chrome.
pub const SECTION_CONTEXT_ROWS: usize = 1;

/// Root application state following Redux pattern
#[derive(Debug, Clone)]
pub struct AppState {
    pub ui: UiState,
    pub picker: PickerState,
    pub debug_console: DebugConsoleState,
    pub config: Config,
    pub theme: Theme,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            ui: UiState::default(),
            picker: PickerState::new(builtin_catalog()),
            debug_console: DebugConsoleState::default(),
            config: Config::default(),
            theme: Theme::default(),
        }
    }
}

/// Which component receives plain key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Search,
}

/// UI chrome state (input mode, overlays, quit flag)
#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub should_quit: bool,
    pub show_help: bool,
    pub input_mode: InputMode,
}

/// At most one chosen provider
///
/// Set on accept, replaced on accepting a different provider, never cleared
/// within the view; closing the picker discards the whole state instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    NoSelection,
    Selected(Provider),
}

impl Selection {
    pub fn provider(&self) -> Option<&Provider> {
        match self {
            Selection::NoSelection => None,
            Selection::Selected(provider) => Some(provider),
        }
    }

    pub fn is_provider(&self, id: &str) -> bool {
        self.provider().is_some_and(|p| p.id == id)
    }
}

/// Catalog, query, cursor and selection state for the provider list
#[derive(Debug, Clone)]
pub struct PickerState {
    /// Catalog as loaded at startup; every refilter starts from here
    pub original: Catalog,
    /// Catalog after the settled query's filter and the channel sort
    pub filtered: Catalog,
    /// Search box contents (may be ahead of `filtered` while a debounce is pending)
    pub query: String,
    /// Debounce generation; a settled timer carrying an older value is stale
    pub generation: u64,
    pub selection: Selection,
    /// Cursor ordinal over the flattened provider rows (selection is separate)
    pub cursor: usize,
    /// Requested list scroll, in flattened rows including section headers
    pub scroll_offset: usize,
}

impl PickerState {
    pub fn new(catalog: Catalog) -> Self {
        // The initial view shows the whole catalog in channel-sorted order.
        let filtered = catalog.refine("");
        Self {
            original: catalog,
            filtered,
            query: String::new(),
            generation: 0,
            selection: Selection::NoSelection,
            cursor: 0,
            scroll_offset: 0,
        }
    }

    /// Total providers across the filtered catalog (the cursor's range).
    pub fn provider_count(&self) -> usize {
        self.filtered.len()
    }

    /// Provider at a flattened cursor ordinal, walking channels in display order.
    pub fn provider_at(&self, ordinal: usize) -> Option<&Provider> {
        let mut remaining = ordinal;
        for channel in Channel::ORDER {
            let list = self.filtered.providers(channel);
            if remaining < list.len() {
                return list.get(remaining);
            }
            remaining -= list.len();
        }
        None
    }

    pub fn provider_under_cursor(&self) -> Option<&Provider> {
        self.provider_at(self.cursor)
    }

    /// Channel the cursor currently sits in, if any providers are visible.
    pub fn cursor_channel(&self) -> Option<Channel> {
        self.provider_under_cursor().map(|p| p.channel)
    }

    /// Tabs are derived from the filtered catalog: empty channels are hidden.
    pub fn visible_channels(&self) -> Vec<Channel> {
        self.filtered.channels_with_providers()
    }

    /// Absolute row of a channel's section header in the rendered list
    /// (sections headers and provider rows interleaved, empty channels
    /// omitted). `None` when the channel has no visible providers.
    pub fn section_row(&self, channel: Channel) -> Option<usize> {
        let mut row = 0;
        for candidate in Channel::ORDER {
            let list = self.filtered.providers(candidate);
            if list.is_empty() {
                continue;
            }
            if candidate == channel {
                return Some(row);
            }
            row += 1 + list.len();
        }
        None
    }

    /// Cursor ordinal of a channel's first visible provider.
    pub fn first_ordinal(&self, channel: Channel) -> Option<usize> {
        let mut ordinal = 0;
        for candidate in Channel::ORDER {
            let list = self.filtered.providers(candidate);
            if candidate == channel {
                return if list.is_empty() { None } else { Some(ordinal) };
            }
            ordinal += list.len();
        }
        None
    }
}

impl Default for PickerState {
    fn default() -> Self {
        Self::new(builtin_catalog())
    }
}

/// Debug console state (Quake-style drop-down over the captured log buffer)
#[derive(Debug, Clone)]
pub struct DebugConsoleState {
    pub is_open: bool,
    pub scroll_offset: usize,
    pub auto_scroll: bool,
    pub logs: LogBuffer,
}

impl Default for DebugConsoleState {
    fn default() -> Self {
        Self {
            is_open: false,
            scroll_offset: 0,
            auto_scroll: true,
            logs: crate::log_capture::create_buffer(),
        }
    }
}
