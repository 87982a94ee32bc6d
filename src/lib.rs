// Accessible widget core.
// A checkbox-like toggle and a tab group that keep properties, attributes and ARIA state consistent.

pub mod a11y;
pub mod checkbox;
pub mod config;
pub mod console;
pub mod element;
pub mod error;
pub mod input;
pub mod tabs;
pub mod value;

pub use a11y::{AccessibilityTree, AccessibleNode, Role};
pub use checkbox::ToggleControl;
pub use config::{Config, TabsConfig};
pub use element::{Element, MutationRecord};
pub use error::{Result, WidgetError};
pub use tabs::{Panel, Tab, TabGroup, TabGroupState, TabInput, TabPair};
pub use value::Value;
