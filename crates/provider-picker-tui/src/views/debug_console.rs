use ratatui::{prelude::*, widgets::*};

use crate::state::DebugConsoleState;
use crate::theme::Theme;

/// Console height as a percentage of the screen
const CONSOLE_HEIGHT_PERCENT: u16 = 50;

/// Render the debug console as a Quake-style drop-down panel
pub fn render_debug_console(f: &mut Frame, area: Rect, console: &DebugConsoleState, theme: &Theme) {
    let console_height = (area.height * CONSOLE_HEIGHT_PERCENT) / 100;
    let console_area = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: console_height.min(area.height),
    };

    f.render_widget(Clear, console_area);

    let Ok(logs) = console.logs.lock() else {
        return;
    };
    let total_logs = logs.len();
    let visible_height = console_height.saturating_sub(2) as usize;

    let scroll_offset = if console.auto_scroll {
        total_logs.saturating_sub(visible_height)
    } else {
        console
            .scroll_offset
            .min(total_logs.saturating_sub(visible_height))
    };

    let log_items: Vec<ListItem> = logs
        .iter()
        .skip(scroll_offset)
        .take(visible_height)
        .map(|entry| {
            use log::Level;

            let level_color = match entry.level {
                Level::Error => theme.status_error,
                Level::Warn => theme.status_warning,
                Level::Info => theme.text_primary,
                Level::Debug => theme.text_secondary,
                Level::Trace => theme.text_muted,
            };

            let timestamp = entry.timestamp.format("%H:%M:%S%.3f");
            let level_str = format!("{:5}", entry.level.to_string().to_uppercase());
            let text = format!("{} {} {} {}", timestamp, level_str, entry.target, entry.message);

            ListItem::new(text).style(Style::default().fg(level_color))
        })
        .collect();

    let logs_list = List::new(log_items).block(
        Block::bordered()
            .title(format!(
                " Debug Console ({}/{}) {} ",
                scroll_offset + visible_height.min(total_logs),
                total_logs,
                if console.auto_scroll { "[AUTO]" } else { "[MANUAL]" }
            ))
            .title_bottom(" `~` Close | j/k Scroll | a Auto-scroll | c Clear ")
            .border_style(Style::default().fg(theme.accent_primary))
            .style(Style::default().bg(theme.bg_secondary)),
    );

    f.render_widget(logs_list, console_area);
}
