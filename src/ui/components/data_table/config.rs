//! Declarative table configuration.
//!
//! A [`TableConfig`] is built once per page and shared behind an `Arc` for the
//! lifetime of the table. It is never serialized, so it may carry closures
//! (accessors, row action conditions, custom cells).

use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::sync::Arc;

use ratatui::text::Line;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::TableError;
use crate::ui::components::badge::BadgeVariant;
use crate::utils::number::NumberFormat;

/// Current filter values keyed by filter id. A missing key means unset.
pub type FilterValueMap = BTreeMap<String, String>;

/// Option lists for `dynamic` select filters, keyed by filter id
pub type DynamicFilterOptions = BTreeMap<String, Vec<SelectOption>>;

/// Caller-supplied row identity
pub type RowIdFn<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;

type ValueFn<T> = Arc<dyn Fn(&T) -> Option<Value> + Send + Sync>;
type CellFn<T> = Arc<dyn Fn(&T) -> Line<'static> + Send + Sync>;
type ConditionFn<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// Where a column reads its value from
pub enum Accessor<T> {
    /// Dotted path into the row's serialized form, e.g. `company.name`
    Path(String),
    With(ValueFn<T>),
}

impl<T> Accessor<T> {
    pub fn path(path: impl Into<String>) -> Self {
        Self::Path(path.into())
    }

    pub fn with(f: impl Fn(&T) -> Option<Value> + Send + Sync + 'static) -> Self {
        Self::With(Arc::new(f))
    }
}

impl<T: Serialize> Accessor<T> {
    /// Read the value for `row`. Missing paths and nulls yield `None`.
    pub fn resolve(&self, row: &T) -> Option<Value> {
        match self {
            Self::Path(path) => {
                let root = serde_json::to_value(row).ok()?;
                lookup_path(&root, path).cloned()
            }
            Self::With(f) => f(row).filter(|v| !v.is_null()),
        }
    }

    /// Read the value for `row` as display text
    pub fn resolve_text(&self, row: &T) -> Option<String> {
        self.resolve(row).as_ref().and_then(value_to_text)
    }
}

impl<T> Clone for Accessor<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Path(path) => Self::Path(path.clone()),
            Self::With(f) => Self::With(Arc::clone(f)),
        }
    }
}

impl<T> fmt::Debug for Accessor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(path) => f.debug_tuple("Path").field(path).finish(),
            Self::With(_) => f.write_str("With(..)"),
        }
    }
}

/// Walk a dotted path through objects and arrays
pub fn lookup_path<'v>(root: &'v Value, path: &str) -> Option<&'v Value> {
    let mut current = root;
    for segment in path.split('.').filter(|s| !s.is_empty()) {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    (!current.is_null()).then_some(current)
}

/// Display text for a scalar JSON value
pub fn value_to_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }
}

/// Maps one raw badge value to its label and look
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeMapping {
    pub value: String,
    pub label: String,
    pub variant: BadgeVariant,
}

impl BadgeMapping {
    pub fn new(value: impl Into<String>, label: impl Into<String>, variant: BadgeVariant) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            variant,
        }
    }
}

/// Column type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnType {
    Avatar,
    String,
    Link,
    Relation,
    Badge,
    Date,
    Number,
    Actions,
    Custom,
    Selection,
}

/// Per-type column payload
pub enum ColumnKind<T> {
    Avatar {
        name: Accessor<T>,
        subtitle: Option<Accessor<T>>,
    },
    String {
        value: Accessor<T>,
        fallback: Option<String>,
        max_width: Option<usize>,
    },
    Link {
        label: Accessor<T>,
        href: Option<Accessor<T>>,
    },
    Relation {
        path: Accessor<T>,
        fallback: String,
    },
    Badge {
        value: Accessor<T>,
        variants: Vec<BadgeMapping>,
    },
    Date {
        value: Accessor<T>,
        format: String,
        fallback: Option<String>,
    },
    Number {
        value: Accessor<T>,
        format: NumberFormat,
        fallback: Option<String>,
    },
    /// Places the row actions dropdown
    Actions,
    Custom {
        cell: CellFn<T>,
    },
    /// Ignored when building columns; the selection column is synthesized
    Selection,
}

impl<T> ColumnKind<T> {
    pub fn tag(&self) -> ColumnType {
        match self {
            Self::Avatar { .. } => ColumnType::Avatar,
            Self::String { .. } => ColumnType::String,
            Self::Link { .. } => ColumnType::Link,
            Self::Relation { .. } => ColumnType::Relation,
            Self::Badge { .. } => ColumnType::Badge,
            Self::Date { .. } => ColumnType::Date,
            Self::Number { .. } => ColumnType::Number,
            Self::Actions => ColumnType::Actions,
            Self::Custom { .. } => ColumnType::Custom,
            Self::Selection => ColumnType::Selection,
        }
    }
}

/// One declared table column
pub struct ColumnConfig<T> {
    pub id: String,
    pub header: String,
    /// Fixed width in cells; `None` shares the remaining space
    pub width: Option<u16>,
    pub kind: ColumnKind<T>,
}

impl<T> ColumnConfig<T> {
    pub fn new(id: impl Into<String>, header: impl Into<String>, kind: ColumnKind<T>) -> Self {
        Self {
            id: id.into(),
            header: header.into(),
            width: None,
            kind,
        }
    }

    pub fn width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    pub fn column_type(&self) -> ColumnType {
        self.kind.tag()
    }

    pub fn text(id: impl Into<String>, header: impl Into<String>, path: &str) -> Self {
        Self::new(
            id,
            header,
            ColumnKind::String {
                value: Accessor::path(path),
                fallback: None,
                max_width: None,
            },
        )
    }

    pub fn relation(id: impl Into<String>, header: impl Into<String>, path: &str, fallback: &str) -> Self {
        Self::new(
            id,
            header,
            ColumnKind::Relation {
                path: Accessor::path(path),
                fallback: fallback.to_string(),
            },
        )
    }

    pub fn date(id: impl Into<String>, header: impl Into<String>, path: &str, format: &str) -> Self {
        Self::new(
            id,
            header,
            ColumnKind::Date {
                value: Accessor::path(path),
                format: format.to_string(),
                fallback: None,
            },
        )
    }

    pub fn number(id: impl Into<String>, header: impl Into<String>, path: &str, format: NumberFormat) -> Self {
        Self::new(
            id,
            header,
            ColumnKind::Number {
                value: Accessor::path(path),
                format,
                fallback: None,
            },
        )
    }

    pub fn badge(id: impl Into<String>, header: impl Into<String>, path: &str, variants: Vec<BadgeMapping>) -> Self {
        Self::new(
            id,
            header,
            ColumnKind::Badge {
                value: Accessor::path(path),
                variants,
            },
        )
    }

    pub fn custom(
        id: impl Into<String>,
        header: impl Into<String>,
        cell: impl Fn(&T) -> Line<'static> + Send + Sync + 'static,
    ) -> Self {
        Self::new(id, header, ColumnKind::Custom { cell: Arc::new(cell) })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterKind {
    Search,
    Select {
        options: Vec<SelectOption>,
        /// Options are supplied at render time through `DynamicFilterOptions`
        dynamic: bool,
    },
    /// Declared but not rendered by the toolbar
    DateRange,
    /// Declared but not rendered by the toolbar
    MultiSelect,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterConfig {
    pub id: String,
    pub placeholder: String,
    pub kind: FilterKind,
}

impl FilterConfig {
    pub fn search(id: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            placeholder: placeholder.into(),
            kind: FilterKind::Search,
        }
    }

    pub fn select(id: impl Into<String>, placeholder: impl Into<String>, options: Vec<SelectOption>) -> Self {
        Self {
            id: id.into(),
            placeholder: placeholder.into(),
            kind: FilterKind::Select {
                options,
                dynamic: false,
            },
        }
    }

    pub fn dynamic_select(id: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            placeholder: placeholder.into(),
            kind: FilterKind::Select {
                options: Vec::new(),
                dynamic: true,
            },
        }
    }

    /// Whether the toolbar draws a control for this filter
    pub fn is_rendered(&self) -> bool {
        matches!(self.kind, FilterKind::Search | FilterKind::Select { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActionVariant {
    #[default]
    Default,
    Destructive,
}

/// A per-row operation offered in the actions dropdown
pub struct ActionConfig<T> {
    pub id: String,
    pub label: String,
    pub icon: Option<String>,
    pub variant: ActionVariant,
    pub condition: Option<ConditionFn<T>>,
    /// Draw a divider above this item
    pub separator: bool,
}

impl<T> ActionConfig<T> {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: None,
            variant: ActionVariant::Default,
            condition: None,
            separator: false,
        }
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn destructive(mut self) -> Self {
        self.variant = ActionVariant::Destructive;
        self
    }

    pub fn separated(mut self) -> Self {
        self.separator = true;
        self
    }

    pub fn when(mut self, condition: impl Fn(&T) -> bool + Send + Sync + 'static) -> Self {
        self.condition = Some(Arc::new(condition));
        self
    }

    /// True when the action has no condition or the condition accepts `row`
    pub fn is_available(&self, row: &T) -> bool {
        self.condition.as_ref().map_or(true, |condition| condition(row))
    }
}

/// An operation applied once to the whole selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkActionConfig {
    pub id: String,
    pub label: String,
    pub icon: Option<String>,
    pub variant: ActionVariant,
}

impl BulkActionConfig {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: None,
            variant: ActionVariant::Default,
        }
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn destructive(mut self) -> Self {
        self.variant = ActionVariant::Destructive;
        self
    }
}

/// A page-level button drawn on the right side of the toolbar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolbarAction {
    pub id: String,
    pub label: String,
    pub key: char,
}

impl ToolbarAction {
    pub fn new(id: impl Into<String>, label: impl Into<String>, key: char) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            key,
        }
    }
}

pub struct TableActions<T> {
    pub row: Vec<ActionConfig<T>>,
    pub bulk: Vec<BulkActionConfig>,
    pub toolbar: Vec<ToolbarAction>,
}

impl<T> Default for TableActions<T> {
    fn default() -> Self {
        Self {
            row: Vec::new(),
            bulk: Vec::new(),
            toolbar: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationConfig {
    pub default_page_size: usize,
    pub page_size_options: Vec<usize>,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page_size: 10,
            page_size_options: vec![10, 20, 50, 100],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyStateAction {
    pub id: String,
    pub label: String,
}

/// What the table shows when a page has no rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub icon: String,
    pub title: String,
    pub description: String,
    pub action: Option<EmptyStateAction>,
}

impl Default for EmptyState {
    fn default() -> Self {
        Self {
            icon: "∅".to_string(),
            title: "No results".to_string(),
            description: String::new(),
            action: None,
        }
    }
}

/// Static description of a table
pub struct TableConfig<T> {
    pub columns: Vec<ColumnConfig<T>>,
    pub selectable: bool,
    pub filters: Vec<FilterConfig>,
    pub actions: TableActions<T>,
    pub pagination: PaginationConfig,
    pub empty_state: EmptyState,
    pub animation: bool,
}

impl<T> TableConfig<T> {
    pub fn new(columns: Vec<ColumnConfig<T>>) -> Self {
        Self {
            columns,
            selectable: false,
            filters: Vec::new(),
            actions: TableActions::default(),
            pagination: PaginationConfig::default(),
            empty_state: EmptyState::default(),
            animation: false,
        }
    }

    pub fn selectable(mut self, selectable: bool) -> Self {
        self.selectable = selectable;
        self
    }

    pub fn filters(mut self, filters: Vec<FilterConfig>) -> Self {
        self.filters = filters;
        self
    }

    pub fn row_actions(mut self, actions: Vec<ActionConfig<T>>) -> Self {
        self.actions.row = actions;
        self
    }

    pub fn bulk_actions(mut self, actions: Vec<BulkActionConfig>) -> Self {
        self.actions.bulk = actions;
        self
    }

    pub fn toolbar_actions(mut self, actions: Vec<ToolbarAction>) -> Self {
        self.actions.toolbar = actions;
        self
    }

    pub fn pagination(mut self, pagination: PaginationConfig) -> Self {
        self.pagination = pagination;
        self
    }

    pub fn empty_state(mut self, empty_state: EmptyState) -> Self {
        self.empty_state = empty_state;
        self
    }

    pub fn animation(mut self, animation: bool) -> Self {
        self.animation = animation;
        self
    }

    /// Check the structural invariants of the config
    pub fn validate(&self) -> Result<(), TableError> {
        if self.columns.is_empty() {
            return Err(TableError::EmptyColumns);
        }

        let mut seen = HashSet::new();
        for column in &self.columns {
            if !seen.insert(column.id.as_str()) {
                return Err(TableError::DuplicateColumnId(column.id.clone()));
            }
        }

        let mut seen = HashSet::new();
        for filter in &self.filters {
            if !seen.insert(filter.id.as_str()) {
                return Err(TableError::DuplicateFilterId(filter.id.clone()));
            }
        }

        if self.pagination.page_size_options.is_empty() {
            return Err(TableError::EmptyPageSizeOptions);
        }
        if !self
            .pagination
            .page_size_options
            .contains(&self.pagination.default_page_size)
        {
            return Err(TableError::DefaultPageSizeNotOffered(self.pagination.default_page_size));
        }

        Ok(())
    }
}
