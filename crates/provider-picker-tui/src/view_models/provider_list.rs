use provider_catalog::Channel;

use crate::state::PickerState;

/// View model for the provider list - all presentation data pre-computed
#[derive(Debug, Clone)]
pub struct ProviderListViewModel {
    /// Rows visible in the current viewport, formatting applied
    pub visible_rows: Vec<ListRow>,
    /// Effective scroll after clamping and keeping the cursor visible
    pub scroll_offset: usize,
    /// Total rendered rows (section headers + providers)
    pub total_rows: usize,
    /// Total providers across all visible sections
    pub total_providers: usize,
    /// True when the filter removed every provider (empty-search placeholder)
    pub is_empty: bool,
}

/// A single row in the provider list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListRow {
    /// Channel section header
    Section { title: String },
    /// One provider
    Provider {
        name: String,
        /// Cursor indicator: "> " or "  "
        indicator: String,
        is_cursor: bool,
        /// True when this provider is the accepted selection
        is_selected: bool,
    },
}

impl ProviderListViewModel {
    /// Build view model from picker state
    pub fn from_state(picker: &PickerState, visible_height: usize) -> Self {
        let mut rows = Vec::new();
        let mut cursor_row = 0;
        let mut ordinal = 0;

        for channel in Channel::ORDER {
            let providers = picker.filtered.providers(channel);
            if providers.is_empty() {
                continue;
            }

            rows.push(ListRow::Section {
                title: channel.title().to_string(),
            });

            for provider in providers {
                let is_cursor = ordinal == picker.cursor;
                if is_cursor {
                    cursor_row = rows.len();
                }
                let indicator = if is_cursor { "> " } else { "  " };
                rows.push(ListRow::Provider {
                    name: provider.display_name.clone(),
                    indicator: indicator.to_string(),
                    is_cursor,
                    is_selected: picker.selection.is_provider(&provider.id),
                });
                ordinal += 1;
            }
        }

        let total_rows = rows.len();
        let total_providers = ordinal;
        let is_empty = total_providers == 0;

        // Start from the requested scroll (tab jumps set it), then pull the
        // window so the cursor row stays visible.
        let max_scroll = total_rows.saturating_sub(visible_height);
        let mut scroll_offset = picker.scroll_offset.min(max_scroll);
        if visible_height > 0 {
            if cursor_row < scroll_offset {
                scroll_offset = cursor_row;
            } else if cursor_row >= scroll_offset + visible_height {
                scroll_offset = cursor_row + 1 - visible_height;
            }
        }

        let visible_rows = rows
            .into_iter()
            .skip(scroll_offset)
            .take(visible_height.max(1))
            .collect();

        Self {
            visible_rows,
            scroll_offset,
            total_rows,
            total_providers,
            is_empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Selection;
    use provider_catalog::{Catalog, Provider};

    fn provider(id: &str, name: &str, channel: Channel) -> Provider {
        Provider::new(id, name, channel, format!("channels/{channel}/{id}"))
    }

    fn picker() -> PickerState {
        PickerState::new(Catalog::from_providers(vec![
            provider("mailgun", "Mailgun", Channel::Email),
            provider("mailchimp", "Mailchimp", Channel::Email),
            provider("twilio", "Twilio", Channel::Sms),
        ]))
    }

    #[test]
    fn test_rows_interleave_sections_and_providers() {
        let vm = ProviderListViewModel::from_state(&picker(), 10);

        assert_eq!(vm.total_rows, 5);
        assert_eq!(vm.total_providers, 3);
        assert_eq!(
            vm.visible_rows[0],
            ListRow::Section {
                title: "Email".to_string()
            }
        );
        assert!(matches!(
            vm.visible_rows[3],
            ListRow::Section { ref title } if title == "SMS"
        ));
    }

    #[test]
    fn test_cursor_row_is_marked() {
        let mut state = picker();
        state.cursor = 2; // twilio

        let vm = ProviderListViewModel::from_state(&state, 10);
        let ListRow::Provider {
            indicator,
            is_cursor,
            ..
        } = &vm.visible_rows[4]
        else {
            panic!("expected provider row");
        };
        assert!(*is_cursor);
        assert_eq!(indicator, "> ");
    }

    #[test]
    fn test_selected_provider_is_marked_wherever_it_appears() {
        let mut state = picker();
        state.selection = Selection::Selected(provider("mailchimp", "Mailchimp", Channel::Email));

        let vm = ProviderListViewModel::from_state(&state, 10);
        let ListRow::Provider {
            is_selected,
            is_cursor,
            ..
        } = &vm.visible_rows[2]
        else {
            panic!("expected provider row");
        };
        assert!(*is_selected);
        assert!(!*is_cursor, "selection is independent of the cursor");
    }

    #[test]
    fn test_window_follows_the_cursor_below_the_fold() {
        let mut state = picker();
        state.cursor = 2; // twilio, absolute row 4

        let vm = ProviderListViewModel::from_state(&state, 2);
        assert_eq!(vm.scroll_offset, 3);
        assert_eq!(vm.visible_rows.len(), 2);
        assert!(matches!(
            vm.visible_rows[1],
            ListRow::Provider { ref name, .. } if name == "Twilio"
        ));
    }

    #[test]
    fn test_requested_scroll_is_respected_when_cursor_stays_visible() {
        let mut state = picker();
        state.cursor = 2; // row 4
        state.scroll_offset = 2; // SMS header minus one context row

        let vm = ProviderListViewModel::from_state(&state, 3);
        assert_eq!(vm.scroll_offset, 2);
    }

    #[test]
    fn test_empty_filter_result_flags_the_placeholder() {
        let mut state = picker();
        state.filtered = state.original.refine("zzz");

        let vm = ProviderListViewModel::from_state(&state, 10);
        assert!(vm.is_empty);
        assert!(vm.visible_rows.is_empty());
    }
}
