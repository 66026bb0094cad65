use ratatui::{prelude::*, widgets::*};

use crate::theme::Theme;
use crate::view_models::channel_tabs::ChannelTabsViewModel;

/// Render the channel tab row
/// Pure presentation - uses pre-computed view model
pub fn render_channel_tabs(f: &mut Frame, area: Rect, vm: &ChannelTabsViewModel, theme: &Theme) {
    if vm.tabs.is_empty() {
        // Every channel filtered out; the list area shows the placeholder.
        let empty = Block::default()
            .borders(Borders::ALL)
            .title(" Channels ")
            .border_style(Style::default().fg(theme.text_muted));
        f.render_widget(empty, area);
        return;
    }

    let tab_titles: Vec<Line> = vm
        .tabs
        .iter()
        .map(|tab| Line::from(tab.display_text.clone()))
        .collect();

    let tabs = Tabs::new(tab_titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Channels [Tab: switch] ")
                .border_style(Style::default().fg(theme.text_muted)),
        )
        .select(vm.selected_index.unwrap_or(0))
        .style(Style::default().fg(theme.text_secondary))
        .highlight_style(
            Style::default()
                .fg(theme.accent_primary)
                .add_modifier(Modifier::BOLD),
        );

    f.render_widget(tabs, area);
}
