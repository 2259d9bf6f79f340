//! Filter controls and the state they drive.

use std::fmt;

use super::Text;

/// What a filter control selects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FilterTarget {
    /// Sentinel that shows every item.
    #[default]
    All,
    /// Show only items written in this language code.
    Lang(String),
}

impl FilterTarget {
    /// Parse a control's target attribute (`all` or a language code).
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "all" => Self::All,
            code => Self::Lang(code.to_string()),
        }
    }

    /// Whether an item tagged `lang` is shown under this target.
    pub fn admits(&self, lang: &str) -> bool {
        match self {
            Self::All => true,
            Self::Lang(code) => code == lang,
        }
    }

    /// Attribute value, as written in markup.
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => "all",
            Self::Lang(code) => code,
        }
    }
}

impl fmt::Display for FilterTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifies the click listener currently attached to a filter bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerHandle(u64);

impl ListenerHandle {
    pub fn id(self) -> u64 {
        self.0
    }
}

/// One filter button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterControl {
    pub target: FilterTarget,
    pub label: Text,
    pub active: bool,
}

impl FilterControl {
    pub fn new(target: FilterTarget, label: Text) -> Self {
        Self {
            target,
            label,
            active: false,
        }
    }
}

/// The group of filter controls plus the selection they currently express.
///
/// At most one listener is attached at a time: `attach` always detaches the
/// previous handle first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterBar {
    pub controls: Vec<FilterControl>,
    showing: FilterTarget,
    listener: Option<ListenerHandle>,
    generation: u64,
}

impl FilterBar {
    pub fn new(controls: Vec<FilterControl>) -> Self {
        Self {
            controls,
            ..Default::default()
        }
    }

    /// Target whose items are currently shown.
    pub fn showing(&self) -> &FilterTarget {
        &self.showing
    }

    /// Listener currently attached, if any.
    pub fn listener(&self) -> Option<ListenerHandle> {
        self.listener
    }

    /// Detach the current listener, returning it.
    pub fn detach(&mut self) -> Option<ListenerHandle> {
        self.listener.take()
    }

    /// Detach any existing listener and attach a fresh one.
    ///
    /// Returns `(previous, current)`.
    pub fn attach(&mut self) -> (Option<ListenerHandle>, ListenerHandle) {
        let previous = self.detach();
        self.generation += 1;
        let handle = ListenerHandle(self.generation);
        self.listener = Some(handle);
        (previous, handle)
    }

    /// Make `index` the only active control and show its target.
    ///
    /// Returns `false` (and changes nothing) for an out-of-range index.
    pub fn select(&mut self, index: usize) -> bool {
        let Some(target) = self.controls.get(index).map(|c| c.target.clone()) else {
            return false;
        };
        for (i, control) in self.controls.iter_mut().enumerate() {
            control.active = i == index;
        }
        self.showing = target;
        true
    }

    /// Show everything, marking the `all` control active when there is one.
    pub fn reset(&mut self) {
        match self
            .controls
            .iter()
            .position(|c| c.target == FilterTarget::All)
        {
            Some(index) => {
                self.select(index);
            }
            None => self.showing = FilterTarget::All,
        }
    }

    /// Index of the control carrying `target`.
    pub fn position(&self, target: &FilterTarget) -> Option<usize> {
        self.controls.iter().position(|c| &c.target == target)
    }

    /// Whether an item tagged `lang` is visible under the current selection.
    pub fn is_visible(&self, lang: &str) -> bool {
        self.showing.admits(lang)
    }
}
