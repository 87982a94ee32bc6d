// Computed accessibility nodes.
// Derives role and state from element attributes the way assistive technology sees them.

use serde::Serialize;

use crate::element::Element;
use crate::error::Result;

/// Accessibility role of a widget element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Checkbox,
    Tab,
    TabList,
    TabPanel,
}

impl Role {
    /// Spelling used in the `role` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Checkbox => "checkbox",
            Role::Tab => "tab",
            Role::TabList => "tablist",
            Role::TabPanel => "tabpanel",
        }
    }

    /// Spelling reported by the platform accessibility tree.
    pub fn platform_name(&self) -> &'static str {
        match self {
            Role::Checkbox => "checkBox",
            Role::Tab => "tab",
            Role::TabList => "tabList",
            Role::TabPanel => "tabPanel",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "checkbox" => Some(Role::Checkbox),
            "tab" => Some(Role::Tab),
            "tablist" => Some(Role::TabList),
            "tabpanel" => Some(Role::TabPanel),
            _ => None,
        }
    }
}

/// Accessibility view of one element.
///
/// A node is a snapshot: after the element changes, call
/// [`AccessibleNode::ensure_up_to_date`] before reading it again.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct AccessibleNode {
    pub id: Option<String>,
    pub role: Option<Role>,
    pub name: String,
    pub checked: Option<bool>,
    pub disabled: bool,
    pub selected: Option<bool>,
    pub hidden: bool,
    pub controls: Option<String>,
    pub labelled_by: Option<String>,
    pub tab_index: Option<i32>,
    pub focusable: bool,
}

impl AccessibleNode {
    pub fn compute(element: &Element) -> Self {
        let role = element.get_attribute("role").and_then(Role::parse);
        let disabled = element.state_attribute("aria-disabled").unwrap_or(false);
        let tab_index = element
            .get_attribute("tabindex")
            .and_then(|v| v.trim().parse::<i32>().ok());
        let name = element
            .get_attribute("aria-label")
            .unwrap_or_else(|| element.text())
            .to_string();

        Self {
            id: element.id().map(str::to_string),
            role,
            name,
            checked: element.state_attribute("aria-checked"),
            disabled,
            selected: element.state_attribute("aria-selected"),
            hidden: element.state_attribute("aria-hidden").unwrap_or(false),
            controls: element.get_attribute("aria-controls").map(str::to_string),
            labelled_by: element.get_attribute("aria-labelledby").map(str::to_string),
            tab_index,
            focusable: tab_index.is_some() && !disabled,
        }
    }

    /// Recompute from the element. Returns true if anything changed.
    pub fn ensure_up_to_date(&mut self, element: &Element) -> bool {
        let fresh = Self::compute(element);
        if *self == fresh {
            return false;
        }
        *self = fresh;
        true
    }

    /// Whether the element is a stop in sequential focus navigation.
    pub fn in_tab_order(&self) -> bool {
        self.focusable && self.tab_index.is_some_and(|i| i >= 0)
    }
}

/// Flat snapshot of several accessible nodes in document order.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct AccessibilityTree {
    pub nodes: Vec<AccessibleNode>,
}

impl AccessibilityTree {
    pub fn from_elements<'a>(elements: impl IntoIterator<Item = &'a Element>) -> Self {
        Self {
            nodes: elements.into_iter().map(AccessibleNode::compute).collect(),
        }
    }

    pub fn find(&self, id: &str) -> Option<&AccessibleNode> {
        self.nodes.iter().find(|n| n.id.as_deref() == Some(id))
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse() {
        assert_eq!(Role::parse("checkbox"), Some(Role::Checkbox));
        assert_eq!(Role::parse(" TabPanel "), Some(Role::TabPanel));
        assert_eq!(Role::parse("heading"), None);
        assert_eq!(Role::Checkbox.platform_name(), "checkBox");
    }

    #[test]
    fn test_compute_checkbox_node() {
        let el = Element::new("ariatui-checkbox")
            .with_attribute("role", "checkbox")
            .with_attribute("aria-checked", "true")
            .with_attribute("tabindex", "0")
            .with_text("Accept terms");
        let node = AccessibleNode::compute(&el);
        assert_eq!(node.role, Some(Role::Checkbox));
        assert_eq!(node.checked, Some(true));
        assert!(!node.disabled);
        assert!(node.in_tab_order());
        assert_eq!(node.name, "Accept terms");
    }

    #[test]
    fn test_disabled_is_not_focusable() {
        let el = Element::new("div")
            .with_attribute("aria-disabled", "true")
            .with_attribute("tabindex", "0");
        let node = AccessibleNode::compute(&el);
        assert!(node.disabled);
        assert!(!node.focusable);
    }

    #[test]
    fn test_negative_tabindex_is_not_in_tab_order() {
        let el = Element::new("div").with_attribute("tabindex", "-1");
        let node = AccessibleNode::compute(&el);
        assert!(node.focusable);
        assert!(!node.in_tab_order());
    }

    #[test]
    fn test_ensure_up_to_date() {
        let mut el = Element::new("div").with_attribute("aria-checked", "false");
        let mut node = AccessibleNode::compute(&el);
        assert!(!node.ensure_up_to_date(&el));

        el.set_state_attribute("aria-checked", true);
        // Snapshot is stale until refreshed
        assert_eq!(node.checked, Some(false));
        assert!(node.ensure_up_to_date(&el));
        assert_eq!(node.checked, Some(true));
    }

    #[test]
    fn test_tree_json() {
        let tab = Element::new("ariatui-tab")
            .with_attribute("id", "t1")
            .with_attribute("role", "tab")
            .with_attribute("aria-selected", "true");
        let tree = AccessibilityTree::from_elements([&tab]);
        assert_eq!(tree.find("t1").and_then(|n| n.selected), Some(true));

        let json = tree.to_json().unwrap();
        assert!(json.contains("\"role\":\"tab\""), "{}", json);
        assert!(json.contains("\"selected\":true"), "{}", json);
    }
}
