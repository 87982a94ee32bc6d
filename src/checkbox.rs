// Checkbox-like toggle control.
// Keeps the checked/disabled properties, their attributes, and ARIA state in sync.

use crossterm::event::KeyEvent;

use crate::a11y::{AccessibleNode, Role};
use crate::element::Element;
use crate::input;
use crate::value::Value;

/// Tag used for freshly created controls.
pub const CHECKBOX_TAG: &str = "ariatui-checkbox";

const CHECKED: &str = "checked";
const DISABLED: &str = "disabled";

/// A two-state toggle with checkbox semantics.
///
/// Property setters are the programmatic entry points and always apply.
/// User activation goes through [`ToggleControl::toggle_checked`], which
/// respects the disabled gate.
#[derive(Debug, Clone)]
pub struct ToggleControl {
    element: Element,
    checked: bool,
    disabled: bool,
    /// Sequential focus index restored when the control is enabled.
    tab_index: String,
}

impl Default for ToggleControl {
    fn default() -> Self {
        Self::new()
    }
}

impl ToggleControl {
    pub fn new() -> Self {
        Self::upgrade(Element::new(CHECKBOX_TAG))
    }

    /// Adopt existing markup. Author-supplied `role` and `tabindex` are kept;
    /// initial state comes from attribute presence.
    pub fn upgrade(mut element: Element) -> Self {
        if !element.has_attribute("role") {
            element.set_attribute("role", Role::Checkbox.as_str());
        }
        let tab_index = element.get_attribute("tabindex").unwrap_or("0").to_string();
        let checked = element.has_attribute(CHECKED);
        let disabled = element.has_attribute(DISABLED);

        let mut control = Self {
            element,
            checked,
            disabled,
            tab_index,
        };
        control.reconcile();
        control
    }

    pub fn element(&self) -> &Element {
        &self.element
    }

    pub fn checked(&self) -> bool {
        self.checked
    }

    pub fn set_checked(&mut self, value: impl Into<Value>) {
        let checked = value.into().truthy();
        if self.checked != checked {
            self.checked = checked;
            tracing::debug!(checked, "checkbox checked changed");
        }
        self.reconcile();
    }

    pub fn disabled(&self) -> bool {
        self.disabled
    }

    pub fn set_disabled(&mut self, value: impl Into<Value>) {
        let disabled = value.into().truthy();
        if self.disabled != disabled {
            self.disabled = disabled;
            tracing::debug!(disabled, "checkbox disabled changed");
        }
        self.reconcile();
    }

    /// Flip `checked` as a user action. Ignored while disabled.
    /// Returns true if the state changed.
    pub fn toggle_checked(&mut self) -> bool {
        if self.disabled {
            return false;
        }
        self.set_checked(!self.checked);
        true
    }

    /// Pointer activation.
    pub fn click(&mut self) -> bool {
        self.toggle_checked()
    }

    /// Keyboard activation. Returns true if the key toggled the control.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        if input::is_activation_key(key) {
            self.toggle_checked()
        } else {
            false
        }
    }

    /// Set an attribute from outside, as markup or script would.
    pub fn set_attribute(&mut self, name: &str, value: impl Into<String>) {
        self.element.set_attribute(name, value);
        self.flush_mutations();
    }

    /// Remove an attribute from outside, as markup or script would.
    pub fn remove_attribute(&mut self, name: &str) {
        self.element.remove_attribute(name);
        self.flush_mutations();
    }

    /// Accessibility node computed from the current attributes.
    pub fn accessible_node(&self) -> AccessibleNode {
        AccessibleNode::compute(&self.element)
    }

    fn flush_mutations(&mut self) {
        let records = self.element.take_records();
        if records.is_empty() {
            return;
        }
        for record in &records {
            self.attribute_changed(&record.name);
        }
        // Derived attributes written from outside snap back to the state.
        self.reconcile();
    }

    fn attribute_changed(&mut self, name: &str) {
        let present = self.element.has_attribute(name);
        match name {
            CHECKED if present != self.checked => self.set_checked(present),
            DISABLED if present != self.disabled => self.set_disabled(present),
            _ => {}
        }
    }

    /// Recompute every derived representation from `checked`/`disabled`.
    fn reconcile(&mut self) {
        let el = &mut self.element;
        el.toggle_attribute(CHECKED, self.checked);
        el.set_state_attribute("aria-checked", self.checked);
        el.toggle_attribute(DISABLED, self.disabled);
        el.set_state_attribute("aria-disabled", self.disabled);
        if self.disabled {
            el.remove_attribute("tabindex");
        } else {
            match el.get_attribute("tabindex").map(str::to_string) {
                Some(index) => self.tab_index = index,
                None => {
                    el.set_attribute("tabindex", self.tab_index.as_str());
                }
            }
        }
        // Our own writes must not echo back into attribute_changed.
        el.take_records();
    }
}
