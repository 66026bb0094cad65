use ratatui::{prelude::*, widgets::*};

use crate::theme::Theme;
use crate::view_models::provider_list::{ListRow, ProviderListViewModel};

/// Render the grouped provider list
/// Pure presentation - uses pre-computed view model
pub fn render_provider_list(f: &mut Frame, area: Rect, vm: &ProviderListViewModel, theme: &Theme) {
    if vm.is_empty {
        render_empty_search(f, area, theme);
        return;
    }

    let lines: Vec<Line> = vm
        .visible_rows
        .iter()
        .map(|row| match row {
            ListRow::Section { title } => Line::from(Span::styled(
                title.clone(),
                theme.section_header(),
            )),
            ListRow::Provider {
                name,
                indicator,
                is_cursor,
                is_selected,
            } => {
                let row_style = if *is_selected {
                    theme.selected_row()
                } else if *is_cursor {
                    theme.cursor_row()
                } else {
                    theme.text()
                };

                let marker = if *is_selected { "● " } else { "  " };

                Line::from(vec![
                    Span::styled(indicator.clone(), theme.key_hint()),
                    Span::styled(marker, Style::default().fg(theme.accent_secondary)),
                    Span::styled(name.clone(), row_style),
                ])
            }
        })
        .collect();

    let title = format!(" Providers ({}) ", vm.total_providers);
    let list = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(theme.text_muted)),
    );
    f.render_widget(list, area);
}

/// Placeholder for a search with no matches in any channel
fn render_empty_search(f: &mut Frame, area: Rect, theme: &Theme) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "No providers match your search",
            Style::default()
                .fg(theme.text_secondary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Edit the query to bring providers back",
            theme.muted(),
        )),
    ];

    let placeholder = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Providers ")
                .border_style(Style::default().fg(theme.text_muted)),
        );
    f.render_widget(placeholder, area);
}
