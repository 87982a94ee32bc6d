// App state and main event loop.
// Hosts the demo widgets, routes keyboard input, and settles widget updates before each draw.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::prelude::*;

use ariatui::checkbox::CHECKBOX_TAG;
use ariatui::console::Console;
use ariatui::tabs::{PANEL_TAG, TAB_TAG};
use ariatui::{Config, Element, TabGroup, ToggleControl, input};

use crate::ui;

/// Which widget has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Tabs,
    Checkbox,
}

impl Focus {
    pub fn next(&self) -> Self {
        match self {
            Focus::Tabs => Focus::Checkbox,
            Focus::Checkbox => Focus::Tabs,
        }
    }
}

/// Markup for the demo tab group.
fn demo_markup() -> Vec<Element> {
    let sections = [
        ("Overview", "Tabs pair with panels by position. Use ←/→ to move between them."),
        ("Keyboard", "Home and End jump to the first and last tab. Arrows wrap around."),
        ("Accessibility", "Each tab carries aria-selected and aria-controls; panels carry aria-hidden and aria-labelledby."),
    ];
    sections
        .iter()
        .flat_map(|(title, body)| {
            [
                Element::new(TAB_TAG).with_text(*title),
                Element::new(PANEL_TAG).with_text(*body),
            ]
        })
        .collect()
}

/// Main application state.
pub struct App {
    /// Demo tab group.
    pub tabs: TabGroup,
    /// Demo checkbox.
    pub checkbox: ToggleControl,
    /// Activity log.
    pub console: Console,
    /// Widget with keyboard focus.
    pub focus: Focus,
    /// Whether the app should exit.
    pub should_quit: bool,
    tick_rate: Duration,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let mut tabs = TabGroup::with_config(demo_markup(), config.tabs.clone());
        tabs.initialize();
        tabs.focus();

        let checkbox =
            ToggleControl::upgrade(Element::new(CHECKBOX_TAG).with_text("Enable notifications"));

        let mut console = Console::new();
        console.log_info(format!("Tab group ready with {} tabs", tabs.len()));

        Self {
            tabs,
            checkbox,
            console,
            focus: Focus::default(),
            should_quit: false,
            tick_rate: Duration::from_millis(config.tick_rate_ms),
        }
    }

    /// Main event loop.
    pub fn run(&mut self, terminal: &mut Terminal<impl Backend>) -> io::Result<()> {
        while !self.should_quit {
            // Drawing is the widgets' rendering opportunity.
            self.tabs.settle();
            terminal.draw(|frame| ui::draw(frame, self))?;
            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard and other events.
    #[allow(clippy::collapsible_if)]
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(self.tick_rate)? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Tab | KeyCode::BackTab => self.cycle_focus(),
            KeyCode::Char('d') => {
                let disabled = !self.checkbox.disabled();
                self.checkbox.set_disabled(disabled);
                self.console.log_info(if disabled {
                    "Checkbox disabled"
                } else {
                    "Checkbox enabled"
                });
                if disabled && self.focus == Focus::Checkbox {
                    self.cycle_focus();
                }
            }
            _ => match self.focus {
                Focus::Tabs => {
                    if let Some(index) = self.tabs.handle_key(&key) {
                        let label = self.tabs.pairs()[index].tab.label().to_string();
                        self.console.log_info(format!("Selected tab \"{}\"", label));
                    }
                }
                Focus::Checkbox => {
                    if self.checkbox.handle_key(&key) {
                        let state = if self.checkbox.checked() {
                            "checked"
                        } else {
                            "unchecked"
                        };
                        self.console.log_info(format!("Checkbox {}", state));
                    } else if input::is_activation_key(&key) && self.checkbox.disabled() {
                        self.console.log_warn("Checkbox is disabled");
                    }
                }
            },
        }
    }

    /// Move focus to the other widget, skipping the checkbox while it is
    /// out of the tab order.
    fn cycle_focus(&mut self) {
        let next = self.focus.next();
        let next = if next == Focus::Checkbox && !self.checkbox.accessible_node().in_tab_order() {
            Focus::Tabs
        } else {
            next
        };
        self.focus = next;
        match next {
            Focus::Tabs => self.tabs.focus(),
            Focus::Checkbox => self.tabs.blur(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrows_move_tab_selection() {
        let mut app = App::new(&Config::default());
        app.handle_key(press(KeyCode::Right));
        assert_eq!(app.tabs.selected_index(), Some(1));
        app.handle_key(press(KeyCode::Left));
        app.handle_key(press(KeyCode::Left));
        assert_eq!(app.tabs.selected_index(), Some(2));
        assert!(app.console.messages().last().unwrap().message.contains("Accessibility"));
    }

    #[test]
    fn test_space_toggles_focused_checkbox() {
        let mut app = App::new(&Config::default());
        app.handle_key(press(KeyCode::Tab));
        assert_eq!(app.focus, Focus::Checkbox);
        assert!(!app.tabs.has_focus());

        app.handle_key(press(KeyCode::Char(' ')));
        assert!(app.checkbox.checked());

        // Arrows do nothing to tabs while the checkbox has focus
        app.handle_key(press(KeyCode::Right));
        assert_eq!(app.tabs.selected_index(), Some(0));
    }

    #[test]
    fn test_disabled_checkbox_is_skipped() {
        let mut app = App::new(&Config::default());
        app.handle_key(press(KeyCode::Char('d')));
        assert!(app.checkbox.disabled());

        app.handle_key(press(KeyCode::Tab));
        assert_eq!(app.focus, Focus::Tabs);
    }

    #[test]
    fn test_disabling_focused_checkbox_returns_focus() {
        let mut app = App::new(&Config::default());
        app.handle_key(press(KeyCode::Tab));
        app.handle_key(press(KeyCode::Char('d')));
        assert_eq!(app.focus, Focus::Tabs);
        assert!(app.tabs.has_focus());

        app.handle_key(press(KeyCode::Tab));
        app.handle_key(press(KeyCode::Char(' ')));
        assert!(!app.checkbox.checked());
    }

    #[test]
    fn test_quit() {
        let mut app = App::new(&Config::default());
        app.handle_key(press(KeyCode::Char('q')));
        assert!(app.should_quit);
    }
}
