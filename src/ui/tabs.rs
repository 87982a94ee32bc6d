// Tab strip and panel rendering.
// Draws the tab group from its settled attributes, highlighting the selected tab.

use ratatui::{prelude::*, widgets::*};

use ariatui::TabGroup;

/// Draw the tab strip.
pub fn draw_tab_group(frame: &mut Frame, group: &TabGroup, focused: bool, area: Rect) {
    let tab_titles: Vec<Line> = group
        .all_tabs()
        .map(|tab| {
            // Render what assistive technology would see, not the property
            let selected = tab.element().state_attribute("aria-selected") == Some(true);
            let style = if selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else if tab.disabled() {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default().fg(Color::White)
            };

            Line::from(Span::styled(tab.label().to_string(), style))
        })
        .collect();

    let selected_index = group
        .all_tabs()
        .position(|tab| tab.element().state_attribute("aria-selected") == Some(true))
        .unwrap_or(0);

    let border_color = if focused { Color::Cyan } else { Color::DarkGray };

    let tabs_widget = Tabs::new(tab_titles)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(border_color))
                .title(" ariatui ")
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
        )
        .select(selected_index)
        .highlight_style(Style::default().fg(Color::Yellow))
        .divider(Span::raw(" │ "));

    frame.render_widget(tabs_widget, area);
}

/// Draw the one panel that is not hidden.
pub fn draw_panel(frame: &mut Frame, group: &TabGroup, area: Rect) {
    let visible = group
        .all_panels()
        .find(|panel| panel.element().state_attribute("aria-hidden") == Some(false));

    let block = Block::default().borders(Borders::ALL);
    let widget = match visible {
        Some(panel) => Paragraph::new(panel.content().to_string())
            .wrap(Wrap { trim: true })
            .block(block.title(format!(" {} ", panel.id()))),
        None => Paragraph::new("No tabs")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(block),
    };
    frame.render_widget(widget, area);
}
