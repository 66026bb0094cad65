use ratatui::{prelude::*, widgets::*};

use crate::state::InputMode;
use crate::theme::Theme;

/// Render the search input box
///
/// The border lights up while search mode is active; an empty query shows
/// the placeholder.
pub fn render_search_input(
    f: &mut Frame,
    area: Rect,
    query: &str,
    input_mode: InputMode,
    theme: &Theme,
) {
    let searching = input_mode == InputMode::Search;

    let content = if query.is_empty() && !searching {
        Span::styled("Search a provider...  (press / to search)", theme.muted())
    } else {
        let caret = if searching { "█" } else { "" };
        Span::styled(
            format!("{query}{caret}"),
            Style::default().fg(theme.text_primary),
        )
    };

    let border_style = if searching {
        theme.panel_border()
    } else {
        Style::default().fg(theme.text_muted)
    };

    let input = Paragraph::new(Line::from(content)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Search ")
            .border_style(border_style),
    );
    f.render_widget(input, area);
}
