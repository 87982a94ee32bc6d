// Console rendering for the activity log.

use ratatui::{prelude::*, widgets::*};

use ariatui::console::{Console, ConsoleLevel};

/// Draw the activity log, newest entry selected.
pub fn draw_console(frame: &mut Frame, console: &mut Console, area: Rect) {
    let items: Vec<ListItem> = console
        .messages()
        .iter()
        .map(|msg| {
            let (tag, color) = match msg.level {
                ConsoleLevel::Info => ("INFO ", Color::Blue),
                ConsoleLevel::Warn => ("WARN ", Color::Yellow),
                ConsoleLevel::Error => ("ERROR", Color::Red),
            };
            ListItem::new(Line::from(vec![
                Span::styled(
                    msg.timestamp.format("%H:%M:%S ").to_string(),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(tag, Style::default().fg(color)),
                Span::raw(" "),
                Span::raw(msg.message.clone()),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Console "),
    );
    frame.render_stateful_widget(list, area, &mut console.list_state);
}
