// Tabbed panel widget.
// Pairs tabs with panels, keeps a single selection, and mirrors it into ARIA attributes.

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};

use crossterm::event::KeyEvent;

use crate::a11y::{AccessibilityTree, Role};
use crate::config::TabsConfig;
use crate::element::Element;
use crate::error::{Result, WidgetError};
use crate::input;

pub const TABS_TAG: &str = "ariatui-tabs";
pub const TAB_TAG: &str = "ariatui-tab";
pub const PANEL_TAG: &str = "ariatui-panel";

// Shared across groups so generated ids never collide.
static TAB_COUNTER: AtomicUsize = AtomicUsize::new(0);
static PANEL_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Input that can move the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabInput {
    /// Pointer activation of the tab at this position.
    Activate(usize),
    Next,
    Previous,
    First,
    Last,
}

/// Lifecycle of a tab group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TabGroupState {
    /// Not initialized, or no well-formed tab/panel pair found.
    #[default]
    Idle,
    /// Exactly one tab selected.
    Ready,
}

/// Resolve an input to the position it selects.
///
/// `selectable` has one entry per tab. Navigation wraps around and steps
/// over unselectable tabs. Returns `None` when nothing can be selected.
pub fn resolve(input: TabInput, current: Option<usize>, selectable: &[bool]) -> Option<usize> {
    let len = selectable.len();
    if len == 0 {
        return None;
    }

    let step = |start: usize, delta: usize| {
        (1..=len)
            .map(|k| (start + k * delta) % len)
            .find(|&i| selectable[i])
    };

    match input {
        TabInput::Activate(index) => selectable
            .get(index)
            .copied()
            .unwrap_or(false)
            .then_some(index),
        TabInput::First => selectable.iter().position(|&s| s),
        TabInput::Last => selectable.iter().rposition(|&s| s),
        TabInput::Next => match current {
            Some(i) => step(i, 1),
            None => selectable.iter().position(|&s| s),
        },
        TabInput::Previous => match current {
            Some(i) => step(i, len - 1),
            None => selectable.iter().rposition(|&s| s),
        },
    }
}

/// A tab in the strip.
#[derive(Debug, Clone)]
pub struct Tab {
    id: String,
    panel_id: String,
    element: Element,
    selected: bool,
    disabled: bool,
}

impl Tab {
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Id of the panel this tab controls.
    pub fn panel_id(&self) -> &str {
        &self.panel_id
    }

    pub fn label(&self) -> &str {
        self.element.text()
    }

    pub fn selected(&self) -> bool {
        self.selected
    }

    /// Marked `aria-disabled="true"` in markup.
    pub fn disabled(&self) -> bool {
        self.disabled
    }

    pub fn element(&self) -> &Element {
        &self.element
    }
}

/// Content shown for one tab.
#[derive(Debug, Clone)]
pub struct Panel {
    id: String,
    tab_id: String,
    element: Element,
    hidden: bool,
}

impl Panel {
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Id of the tab that labels this panel.
    pub fn tab_id(&self) -> &str {
        &self.tab_id
    }

    pub fn content(&self) -> &str {
        self.element.text()
    }

    pub fn hidden(&self) -> bool {
        self.hidden
    }

    pub fn element(&self) -> &Element {
        &self.element
    }
}

#[derive(Debug, Clone)]
pub struct TabPair {
    pub tab: Tab,
    pub panel: Panel,
}

/// A strip of tabs, each controlling one panel.
///
/// Selection changes update the tab/panel properties immediately; the
/// attribute writes they imply are queued until [`TabGroup::settle`], which
/// hosts call at their next rendering opportunity.
#[derive(Debug, Clone)]
pub struct TabGroup {
    element: Element,
    children: Vec<Element>,
    pairs: Vec<TabPair>,
    strays: Vec<Element>,
    selected: Option<usize>,
    focused: Option<usize>,
    pending: bool,
    config: TabsConfig,
}

impl TabGroup {
    pub fn new(children: Vec<Element>) -> Self {
        Self::with_config(children, TabsConfig::default())
    }

    pub fn with_config(children: Vec<Element>, config: TabsConfig) -> Self {
        Self {
            element: Element::new(TABS_TAG),
            children,
            pairs: Vec::new(),
            strays: Vec::new(),
            selected: None,
            focused: None,
            pending: false,
            config,
        }
    }

    /// Discover tabs and panels, wire them up and select the initial tab.
    ///
    /// Does nothing if already initialized or if no tab has a panel.
    pub fn initialize(&mut self) {
        if self.state() == TabGroupState::Ready {
            return;
        }

        let mut tabs = Vec::new();
        let mut panels = Vec::new();
        for child in self.children.drain(..) {
            match child.tag() {
                TAB_TAG => tabs.push(child),
                PANEL_TAG => panels.push(child),
                _ => {}
            }
        }

        let paired = tabs.len().min(panels.len());
        if tabs.len() != panels.len() {
            tracing::warn!(
                tabs = tabs.len(),
                panels = panels.len(),
                "unbalanced tab markup, surplus elements left unwired"
            );
        }
        self.strays.extend(tabs.split_off(paired));
        self.strays.extend(panels.split_off(paired));

        if paired == 0 {
            tracing::debug!("no tab/panel pairs, tab group stays idle");
            return;
        }

        // Generated ids must not collide with ones the author wrote.
        let mut taken: HashSet<String> = tabs
            .iter()
            .chain(&panels)
            .filter_map(|el| el.id())
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .collect();

        for (mut tab_el, mut panel_el) in tabs.into_iter().zip(panels) {
            let tab_id = ensure_id(&mut tab_el, "ariatui-tab", &TAB_COUNTER, &mut taken);
            let panel_id = ensure_id(&mut panel_el, "ariatui-panel", &PANEL_COUNTER, &mut taken);
            let disabled = tab_el.state_attribute("aria-disabled") == Some(true);

            self.pairs.push(TabPair {
                tab: Tab {
                    id: tab_id.clone(),
                    panel_id: panel_id.clone(),
                    element: tab_el,
                    selected: false,
                    disabled,
                },
                panel: Panel {
                    id: panel_id,
                    tab_id,
                    element: panel_el,
                    hidden: true,
                },
            });
        }

        let initial = self
            .pairs
            .iter()
            .position(|p| p.tab.element.state_attribute("aria-selected") == Some(true))
            .unwrap_or(0);
        self.apply_selection(initial);
        self.settle();

        tracing::debug!(tabs = self.pairs.len(), selected = initial, "tab group initialized");
    }

    pub fn state(&self) -> TabGroupState {
        if self.selected.is_some() {
            TabGroupState::Ready
        } else {
            TabGroupState::Idle
        }
    }

    pub fn element(&self) -> &Element {
        &self.element
    }

    /// Tabs in document order.
    pub fn all_tabs(&self) -> impl ExactSizeIterator<Item = &Tab> {
        self.pairs.iter().map(|p| &p.tab)
    }

    /// Panels in document order.
    pub fn all_panels(&self) -> impl ExactSizeIterator<Item = &Panel> {
        self.pairs.iter().map(|p| &p.panel)
    }

    pub fn pairs(&self) -> &[TabPair] {
        &self.pairs
    }

    /// Tabs or panels that had no partner and were left unwired.
    pub fn strays(&self) -> &[Element] {
        &self.strays
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_tab(&self) -> Option<&Tab> {
        self.selected.map(|i| &self.pairs[i].tab)
    }

    pub fn selected_panel(&self) -> Option<&Panel> {
        self.selected.map(|i| &self.pairs[i].panel)
    }

    pub fn position(&self, tab_id: &str) -> Option<usize> {
        self.pairs.iter().position(|p| p.tab.id == tab_id)
    }

    /// Select the tab with this id.
    pub fn select_tab(&mut self, tab_id: &str) -> Result<()> {
        match self.position(tab_id) {
            Some(index) => self.select_index(index),
            None => {
                tracing::warn!(tab_id, "select_tab called with a foreign tab");
                Err(WidgetError::UnknownTab(tab_id.to_string()))
            }
        }
    }

    /// Select the tab at `index` and move focus to it.
    pub fn select_index(&mut self, index: usize) -> Result<()> {
        if index >= self.pairs.len() {
            return Err(WidgetError::IndexOutOfRange {
                index,
                len: self.pairs.len(),
            });
        }
        self.apply_selection(index);
        self.focused = Some(index);
        tracing::debug!(index, "tab selected");
        Ok(())
    }

    /// Feed one input through the reducer. Returns the newly selected position.
    pub fn handle_input(&mut self, input: TabInput) -> Result<Option<usize>> {
        if let TabInput::Activate(index) = input {
            if index >= self.pairs.len() {
                return Err(WidgetError::IndexOutOfRange {
                    index,
                    len: self.pairs.len(),
                });
            }
        }

        let selectable = self.selectable();
        match resolve(input, self.selected, &selectable) {
            Some(index) => {
                self.select_index(index)?;
                Ok(Some(index))
            }
            None => Ok(None),
        }
    }

    /// Pointer activation of a tab.
    pub fn click(&mut self, tab_id: &str) -> Result<Option<usize>> {
        let index = self
            .position(tab_id)
            .ok_or_else(|| WidgetError::UnknownTab(tab_id.to_string()))?;
        self.handle_input(TabInput::Activate(index))
    }

    /// Key press while the strip may have focus. Keys are ignored unless
    /// focus is within the strip.
    pub fn handle_key(&mut self, key: &KeyEvent) -> Option<usize> {
        self.focused?;
        let input = input::tab_input(key)?;
        self.handle_input(input).ok().flatten()
    }

    /// Give focus to the strip. Focus lands on the selected tab.
    pub fn focus(&mut self) {
        self.focused = self.selected;
    }

    pub fn blur(&mut self) {
        self.focused = None;
    }

    pub fn focused_index(&self) -> Option<usize> {
        self.focused
    }

    pub fn has_focus(&self) -> bool {
        self.focused.is_some()
    }

    /// Whether selection changed since the last settle.
    pub fn has_pending_updates(&self) -> bool {
        self.pending
    }

    /// Flush queued attribute writes. Returns true if anything was pending.
    pub fn settle(&mut self) -> bool {
        if !self.pending {
            return false;
        }
        self.reconcile();
        true
    }

    /// Mutable access to a tab element, for hosts and scripts that write
    /// attributes directly. The next selection pass overwrites managed ones.
    pub fn tab_element_mut(&mut self, index: usize) -> Option<&mut Element> {
        self.pairs.get_mut(index).map(|p| &mut p.tab.element)
    }

    pub fn panel_element_mut(&mut self, index: usize) -> Option<&mut Element> {
        self.pairs.get_mut(index).map(|p| &mut p.panel.element)
    }

    /// Accessibility view of the host, then each tab followed by its panel.
    pub fn accessibility_tree(&self) -> AccessibilityTree {
        let elements = std::iter::once(&self.element).chain(
            self.pairs
                .iter()
                .flat_map(|p| [&p.tab.element, &p.panel.element]),
        );
        AccessibilityTree::from_elements(elements)
    }

    fn selectable(&self) -> Vec<bool> {
        self.pairs
            .iter()
            .map(|p| !(self.config.skip_disabled && p.tab.disabled))
            .collect()
    }

    /// Full pass over every pair, so the result holds no matter what state
    /// came before.
    fn apply_selection(&mut self, index: usize) {
        for (i, pair) in self.pairs.iter_mut().enumerate() {
            pair.tab.selected = i == index;
            pair.panel.hidden = i != index;
        }
        self.selected = Some(index);
        self.pending = true;
    }

    fn reconcile(&mut self) {
        self.element.set_attribute("role", Role::TabList.as_str());
        self.element.take_records();

        for pair in &mut self.pairs {
            let tab = &mut pair.tab;
            tab.element.set_attribute("id", tab.id.as_str());
            tab.element.set_attribute("role", Role::Tab.as_str());
            tab.element.set_attribute("aria-controls", tab.panel_id.as_str());
            tab.element.set_state_attribute("aria-selected", tab.selected);
            tab.element
                .set_attribute("tabindex", if tab.selected { "0" } else { "-1" });
            tab.element.take_records();

            let panel = &mut pair.panel;
            panel.element.set_attribute("id", panel.id.as_str());
            panel.element.set_attribute("role", Role::TabPanel.as_str());
            panel.element.set_attribute("aria-labelledby", panel.tab_id.as_str());
            panel.element.set_state_attribute("aria-hidden", panel.hidden);
            panel.element.take_records();
        }
        self.pending = false;
    }
}

fn ensure_id(
    element: &mut Element,
    prefix: &str,
    counter: &AtomicUsize,
    taken: &mut HashSet<String>,
) -> String {
    if let Some(id) = element.id().filter(|id| !id.is_empty()) {
        return id.to_string();
    }
    let id = loop {
        let candidate = format!("{}-{}", prefix, counter.fetch_add(1, Ordering::Relaxed));
        if taken.insert(candidate.clone()) {
            break candidate;
        }
    };
    element.set_attribute("id", id.as_str());
    id
}
