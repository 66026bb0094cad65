use ratatui::{prelude::*, widgets::*};

use crate::theme::Theme;
use crate::view_models::header::HeaderViewModel;

/// Render the sidebar header
/// Pure presentation - uses pre-computed view model
pub fn render_header(f: &mut Frame, area: Rect, vm: &HeaderViewModel, theme: &Theme) {
    let mut lines = vec![
        Line::from(Span::styled(
            vm.title.clone(),
            Style::default()
                .fg(theme.text_primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(vm.subtitle.clone(), theme.muted())),
    ];

    if let Some(ref logo_asset) = vm.logo_asset {
        lines.push(Line::from(vec![
            Span::styled("logo ", theme.muted()),
            Span::styled(logo_asset.clone(), Style::default().fg(theme.text_secondary)),
        ]));
    }

    let header = Paragraph::new(lines).style(Style::default().bg(theme.bg_primary));
    f.render_widget(header, area);
}
