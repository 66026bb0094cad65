use ratatui::{prelude::*, widgets::*};

use crate::theme::Theme;

/// Render the footer with the Cancel and Next actions
///
/// Next stays visually disabled until a provider is selected; the reducer
/// ignores Confirm in that state, so the hint and the behavior agree.
pub fn render_footer(f: &mut Frame, area: Rect, has_selection: bool, theme: &Theme) {
    let next_style = if has_selection {
        theme.key_hint()
    } else {
        theme.muted()
    };
    let next_label_style = if has_selection {
        Style::default().fg(theme.text_secondary)
    } else {
        theme.muted()
    };

    let mut spans = vec![
        Span::styled("Esc", theme.key_hint()),
        Span::styled(" Cancel   ", Style::default().fg(theme.text_secondary)),
        Span::styled("n", next_style),
        Span::styled(" Next", next_label_style),
    ];
    if !has_selection {
        spans.push(Span::styled("  (select a provider)", theme.muted()));
    }

    let footer = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(theme.text_muted)),
        );
    f.render_widget(footer, area);
}
