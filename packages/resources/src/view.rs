use std::fmt;

use cms_core::Identified;

/// Screen a resource manager is currently showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    List,
    Create,
    Edit,
    Detail,
    Documentation,
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ViewMode::List => "list",
            ViewMode::Create => "create",
            ViewMode::Edit => "edit",
            ViewMode::Detail => "detail",
            ViewMode::Documentation => "documentation",
        };
        f.write_str(label)
    }
}

/// Optional views a resource offers on top of list, create and edit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewSupport {
    pub detail: bool,
    pub documentation: bool,
}

impl Default for ViewSupport {
    fn default() -> Self {
        Self {
            detail: true,
            documentation: false,
        }
    }
}

impl ViewSupport {
    pub fn supports(&self, mode: ViewMode) -> bool {
        match mode {
            ViewMode::List | ViewMode::Create | ViewMode::Edit => true,
            ViewMode::Detail => self.detail,
            ViewMode::Documentation => self.documentation,
        }
    }
}

/// The single record a manager is looking at, if any.
///
/// A record is either being viewed or being edited, never both.
#[derive(Debug, Clone, PartialEq)]
pub enum Focus<R> {
    None,
    Viewing(R),
    Editing(R),
}

impl<R> Default for Focus<R> {
    fn default() -> Self {
        Focus::None
    }
}

impl<R> Focus<R> {
    pub fn is_none(&self) -> bool {
        matches!(self, Focus::None)
    }

    pub fn viewing(&self) -> Option<&R> {
        match self {
            Focus::Viewing(record) => Some(record),
            _ => None,
        }
    }

    pub fn editing(&self) -> Option<&R> {
        match self {
            Focus::Editing(record) => Some(record),
            _ => None,
        }
    }

    pub fn record(&self) -> Option<&R> {
        match self {
            Focus::Viewing(record) | Focus::Editing(record) => Some(record),
            Focus::None => None,
        }
    }
}

impl<R: Identified> Focus<R> {
    pub fn refers_to(&self, id: i64) -> bool {
        self.record().map_or(false, |record| record.id() == id)
    }
}
