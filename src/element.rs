// Host element model.
// Holds attributes, a text label, and records attribute mutations like an observer would.

use std::collections::BTreeMap;

use serde::Serialize;

/// A single attribute change, queued until the owner drains it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationRecord {
    /// Attribute that changed.
    pub name: String,
    /// Value before the change (`None` if the attribute was absent).
    pub old_value: Option<String>,
}

/// A minimal DOM-like element: tag, attributes and text.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Element {
    tag: String,
    attributes: BTreeMap<String, String>,
    text: String,
    #[serde(skip)]
    records: Vec<MutationRecord>,
    #[serde(skip)]
    mutations: usize,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Builder form of `set_attribute` for authoring markup.
    /// Authored attributes are not reported as mutations.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn id(&self) -> Option<&str> {
        self.get_attribute("id")
    }

    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Iterate attributes in name order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Set an attribute. Returns true if the stored value changed.
    pub fn set_attribute(&mut self, name: &str, value: impl Into<String>) -> bool {
        let value = value.into();
        if self.get_attribute(name) == Some(value.as_str()) {
            return false;
        }
        let old_value = self.attributes.insert(name.to_string(), value);
        self.record(name, old_value);
        true
    }

    /// Remove an attribute. Returns true if it was present.
    pub fn remove_attribute(&mut self, name: &str) -> bool {
        match self.attributes.remove(name) {
            Some(old_value) => {
                self.record(name, Some(old_value));
                true
            }
            None => false,
        }
    }

    /// Make a presence-based boolean attribute match `present`.
    pub fn toggle_attribute(&mut self, name: &str, present: bool) -> bool {
        if present {
            // Presence is what matters; keep whatever value is already there.
            if self.has_attribute(name) {
                return false;
            }
            self.set_attribute(name, "")
        } else {
            self.remove_attribute(name)
        }
    }

    /// Write an ARIA-style `"true"`/`"false"` state attribute.
    pub fn set_state_attribute(&mut self, name: &str, value: bool) -> bool {
        self.set_attribute(name, if value { "true" } else { "false" })
    }

    /// Read an ARIA-style state attribute. Anything but `"true"`/`"false"` is `None`.
    pub fn state_attribute(&self, name: &str) -> Option<bool> {
        match self.get_attribute(name) {
            Some("true") => Some(true),
            Some("false") => Some(false),
            _ => None,
        }
    }

    /// Drain pending mutation records.
    pub fn take_records(&mut self) -> Vec<MutationRecord> {
        std::mem::take(&mut self.records)
    }

    /// Total number of attribute writes that changed something.
    pub fn mutation_count(&self) -> usize {
        self.mutations
    }

    fn record(&mut self, name: &str, old_value: Option<String>) {
        self.mutations += 1;
        self.records.push(MutationRecord {
            name: name.to_string(),
            old_value,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_attribute_records_changes_only() {
        let mut el = Element::new("div");
        assert!(el.set_attribute("role", "tab"));
        assert!(!el.set_attribute("role", "tab"));
        assert!(el.set_attribute("role", "tabpanel"));
        assert_eq!(el.mutation_count(), 2);

        let records = el.take_records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].old_value, None);
        assert_eq!(records[1].old_value.as_deref(), Some("tab"));
        assert!(el.take_records().is_empty());
    }

    #[test]
    fn test_toggle_attribute() {
        let mut el = Element::new("div");
        assert!(el.toggle_attribute("checked", true));
        assert!(!el.toggle_attribute("checked", true));
        assert_eq!(el.get_attribute("checked"), Some(""));
        assert!(el.toggle_attribute("checked", false));
        assert!(!el.toggle_attribute("checked", false));
        assert!(!el.has_attribute("checked"));
        assert_eq!(el.mutation_count(), 2);
    }

    #[test]
    fn test_toggle_attribute_keeps_existing_value() {
        let mut el = Element::new("div").with_attribute("checked", "checked");
        assert!(!el.toggle_attribute("checked", true));
        assert_eq!(el.get_attribute("checked"), Some("checked"));
    }

    #[test]
    fn test_state_attribute() {
        let mut el = Element::new("div");
        assert_eq!(el.state_attribute("aria-selected"), None);
        el.set_state_attribute("aria-selected", true);
        assert_eq!(el.state_attribute("aria-selected"), Some(true));
        el.set_attribute("aria-selected", "yes");
        assert_eq!(el.state_attribute("aria-selected"), None);
    }

    #[test]
    fn test_authored_attributes_are_not_mutations() {
        let mut el = Element::new("ariatui-tab")
            .with_attribute("id", "first")
            .with_text("Tab 1");
        assert_eq!(el.id(), Some("first"));
        assert_eq!(el.text(), "Tab 1");
        assert_eq!(el.mutation_count(), 0);
        assert!(el.take_records().is_empty());
    }
}
