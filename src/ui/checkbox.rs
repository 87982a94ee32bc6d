// Checkbox rendering.

use ratatui::{prelude::*, widgets::*};

use ariatui::ToggleControl;

/// Draw the checkbox as a single bordered line.
pub fn draw_checkbox(frame: &mut Frame, checkbox: &ToggleControl, focused: bool, area: Rect) {
    let node = checkbox.accessible_node();
    let mark = if node.checked == Some(true) { "[x]" } else { "[ ]" };

    let style = if node.disabled {
        Style::default().fg(Color::DarkGray)
    } else if focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let mut spans = vec![
        Span::styled(format!(" {} ", mark), style),
        Span::styled(node.name.clone(), style),
    ];
    if node.disabled {
        spans.push(Span::styled(
            "  (disabled)",
            Style::default().fg(Color::DarkGray),
        ));
    }

    let border_color = if focused { Color::Cyan } else { Color::DarkGray };
    let widget = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(" Checkbox "),
    );
    frame.render_widget(widget, area);
}
