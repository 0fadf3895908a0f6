//! Keyboard equivalents of the pagination buttons.
//!
//! # Example
//!
//! ```rust
//! use datatable::keymap::{KeyMap, PageAction};
//!
//! let km = KeyMap::default();
//! assert_eq!(km.action("right"), Some(PageAction::Next));
//! assert_eq!(km.action("G"), Some(PageAction::Last));
//! assert_eq!(km.action("x"), None);
//! ```

/// A set of keys with a help label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Binding {
    keys: Vec<String>,
    /// Key text shown in help (e.g. "→/l").
    pub help_key: String,
    /// What the binding does.
    pub help_desc: String,
    disabled: bool,
}

impl Binding {
    /// Creates a binding for the given keys.
    #[must_use]
    pub fn new(keys: &[&str]) -> Self {
        Self {
            keys: keys.iter().map(|&k| k.to_string()).collect(),
            ..Self::default()
        }
    }

    /// Sets the help text.
    #[must_use]
    pub fn help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help_key = key.into();
        self.help_desc = desc.into();
        self
    }

    /// Returns the bound keys.
    #[must_use]
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Enables or disables the binding.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// A binding is enabled if it is not disabled and has at least one key.
    #[must_use]
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Returns true if `key` triggers this binding.
    #[must_use]
    pub fn matches(&self, key: &str) -> bool {
        self.enabled() && self.keys.iter().any(|k| k == key)
    }
}

/// Page navigation triggered by a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAction {
    /// Go to page 1.
    First,
    /// Go back one page.
    Prev,
    /// Go forward one page.
    Next,
    /// Go to the last page.
    Last,
}

/// Key bindings for table pagination.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Previous page.
    pub prev_page: Binding,
    /// Next page.
    pub next_page: Binding,
    /// First page.
    pub first_page: Binding,
    /// Last page.
    pub last_page: Binding,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            prev_page: Binding::new(&["left", "h", "pgup"]).help("←/h", "prev page"),
            next_page: Binding::new(&["right", "l", "pgdown"]).help("→/l", "next page"),
            first_page: Binding::new(&["home", "g"]).help("g/home", "first page"),
            last_page: Binding::new(&["end", "G"]).help("G/end", "last page"),
        }
    }
}

impl KeyMap {
    /// Resolves `key` to a page action.
    #[must_use]
    pub fn action(&self, key: &str) -> Option<PageAction> {
        [
            (&self.prev_page, PageAction::Prev),
            (&self.next_page, PageAction::Next),
            (&self.first_page, PageAction::First),
            (&self.last_page, PageAction::Last),
        ]
        .into_iter()
        .find(|(binding, _)| binding.matches(key))
        .map(|(_, action)| action)
    }

    /// Returns "key desc" pairs for the enabled bindings.
    #[must_use]
    pub fn short_help(&self) -> Vec<(String, String)> {
        [
            &self.first_page,
            &self.prev_page,
            &self.next_page,
            &self.last_page,
        ]
        .into_iter()
        .filter(|b| b.enabled())
        .map(|b| (b.help_key.clone(), b.help_desc.clone()))
        .collect()
    }
}
