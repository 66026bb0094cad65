/// Action enum - represents all possible actions in the picker
/// Actions are dispatched to the reducer to update state
#[derive(Debug, Clone)]
pub enum Action {
    // Search box
    EnterSearchMode,
    LeaveSearchMode,
    SearchInput(char),
    SearchBackspace,
    /// Debounce timer fired; apply the query if the generation is current
    SearchSettled { generation: u64, query: String },

    // Cursor and category tabs
    CursorNext,
    CursorPrev,
    NextChannelTab,
    PrevChannelTab,

    // Selection lifecycle
    AcceptUnderCursor,
    /// "Next": hand off to the creation flow (no-op without a selection)
    Confirm,
    /// Close the picker and navigate back to the integrations list
    Cancel,

    // Overlays
    ToggleHelp,
    ToggleDebugConsole,
    ScrollDebugConsoleUp,
    ScrollDebugConsoleDown,
    ToggleDebugAutoScroll,
    ClearDebugLogs,

    Quit,
    None,
}
