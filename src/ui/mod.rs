// UI module for rendering the TUI.
// Lays out the tab strip, active panel, checkbox, accessibility summary and console.

mod checkbox;
mod console;
mod tabs;

use ratatui::{prelude::*, widgets::*};

use crate::app::{App, Focus};

/// Main draw function that renders the entire UI.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tab strip
            Constraint::Min(3),    // Active panel
            Constraint::Length(3), // Checkbox
            Constraint::Length(4), // Accessibility summary
            Constraint::Length(8), // Console
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    tabs::draw_tab_group(frame, &app.tabs, app.focus == Focus::Tabs, chunks[0]);
    tabs::draw_panel(frame, &app.tabs, chunks[1]);
    checkbox::draw_checkbox(
        frame,
        &app.checkbox,
        app.focus == Focus::Checkbox,
        chunks[2],
    );
    draw_accessibility(frame, app, chunks[3]);
    console::draw_console(frame, &mut app.console, chunks[4]);
    draw_status_bar(frame, chunks[5]);
}

/// Draw what assistive technology sees for the focused widget.
fn draw_accessibility(frame: &mut Frame, app: &App, area: Rect) {
    let label = Style::default().fg(Color::DarkGray);

    let lines = match app.focus {
        Focus::Checkbox => {
            let node = app.checkbox.accessible_node();
            vec![
                Line::from(vec![
                    Span::styled("role ", label),
                    Span::raw(node.role.map(|r| r.platform_name()).unwrap_or("none")),
                    Span::styled("  checked ", label),
                    Span::raw(format!("{:?}", node.checked)),
                ]),
                Line::from(vec![
                    Span::styled("disabled ", label),
                    Span::raw(node.disabled.to_string()),
                    Span::styled("  tabindex ", label),
                    Span::raw(format!("{:?}", node.tab_index)),
                ]),
            ]
        }
        Focus::Tabs => {
            let tree = app.tabs.accessibility_tree();
            let selected = app.tabs.selected_tab().and_then(|t| tree.find(t.id()));
            let panel = app.tabs.selected_panel().and_then(|p| tree.find(p.id()));
            vec![
                Line::from(vec![
                    Span::styled("tab ", label),
                    Span::raw(selected.and_then(|n| n.id.clone()).unwrap_or_default()),
                    Span::styled("  aria-controls ", label),
                    Span::raw(selected.and_then(|n| n.controls.clone()).unwrap_or_default()),
                ]),
                Line::from(vec![
                    Span::styled("panel ", label),
                    Span::raw(panel.and_then(|n| n.id.clone()).unwrap_or_default()),
                    Span::styled("  aria-labelledby ", label),
                    Span::raw(panel.and_then(|n| n.labelled_by.clone()).unwrap_or_default()),
                ]),
            ]
        }
    };

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Accessibility "),
    );
    frame.render_widget(widget, area);
}

/// Draw the status bar with keybinding hints.
fn draw_status_bar(frame: &mut Frame, area: Rect) {
    let hints = vec![
        Span::raw(" ←→↑↓ "),
        Span::styled("Switch tab", Style::default().fg(Color::DarkGray)),
        Span::raw("  Home/End "),
        Span::styled("First/last", Style::default().fg(Color::DarkGray)),
        Span::raw("  Space "),
        Span::styled("Toggle", Style::default().fg(Color::DarkGray)),
        Span::raw("  d "),
        Span::styled("Disable", Style::default().fg(Color::DarkGray)),
        Span::raw("  Tab "),
        Span::styled("Focus", Style::default().fg(Color::DarkGray)),
        Span::raw("  q "),
        Span::styled("Quit", Style::default().fg(Color::DarkGray)),
    ];

    let status = Paragraph::new(Line::from(hints));
    frame.render_widget(status, area);
}
