use provider_catalog::Channel;

use crate::state::PickerState;

/// View model for the channel tab row - all presentation data pre-computed
///
/// The tab set is derived from the filtered catalog: a channel whose filtered
/// list is empty gets no tab at all, so the row always stays consistent with
/// the list below it.
#[derive(Debug, Clone)]
pub struct ChannelTabsViewModel {
    /// Tab items with display text, visible channels only
    pub tabs: Vec<TabItem>,
    /// Index of the tab whose section holds the cursor
    pub selected_index: Option<usize>,
}

/// A single tab item
#[derive(Debug, Clone)]
pub struct TabItem {
    pub channel: Channel,
    /// Pre-formatted display text: "Email (10)"
    pub display_text: String,
}

impl ChannelTabsViewModel {
    /// Build view model from picker state
    pub fn from_state(picker: &PickerState) -> Self {
        let tabs: Vec<TabItem> = picker
            .visible_channels()
            .into_iter()
            .map(|channel| TabItem {
                channel,
                display_text: format!(
                    "{} ({})",
                    channel.title(),
                    picker.filtered.providers(channel).len()
                ),
            })
            .collect();

        let selected_index = picker
            .cursor_channel()
            .and_then(|current| tabs.iter().position(|tab| tab.channel == current));

        Self {
            tabs,
            selected_index,
        }
    }
}
