//! Static column catalog: identity, labels, default geometry and the
//! editor/filter behavior each column carries.

use serde::{Deserialize, Serialize};

/// Narrowest a column can be dragged or persisted to.
pub const MIN_COLUMN_WIDTH: f64 = 60.0;

/// Width applied by the "Autosize to fit" column menu entry.
pub const AUTOSIZE_WIDTH: f64 = 200.0;

/// Identity of a data column. Serialized in lowercase inside the
/// preferences blob, so the variants double as stable storage keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnId {
    Company,
    Owner,
    Stage,
    Amount,
    Status,
    Created,
    Notes,
}

/// Which inline editor a cell of this column opens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditorKind {
    Text,
    Currency,
    Stage,
}

/// How a filter value is matched against a cell of this column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterKind {
    Substring,
    Exact,
}

impl ColumnId {
    /// Default left-to-right column order.
    pub const ALL: [ColumnId; 7] = [
        ColumnId::Company,
        ColumnId::Owner,
        ColumnId::Stage,
        ColumnId::Amount,
        ColumnId::Status,
        ColumnId::Created,
        ColumnId::Notes,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ColumnId::Company => "company",
            ColumnId::Owner => "owner",
            ColumnId::Stage => "stage",
            ColumnId::Amount => "amount",
            ColumnId::Status => "status",
            ColumnId::Created => "created",
            ColumnId::Notes => "notes",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ColumnId::Company => "Company",
            ColumnId::Owner => "Owner",
            ColumnId::Stage => "Stage",
            ColumnId::Amount => "Amount",
            ColumnId::Status => "Status",
            ColumnId::Created => "Created",
            ColumnId::Notes => "Notes",
        }
    }

    pub fn default_width(self) -> f64 {
        match self {
            ColumnId::Company => 260.0,
            ColumnId::Owner => 160.0,
            ColumnId::Stage => 160.0,
            ColumnId::Amount => 160.0,
            ColumnId::Status => 160.0,
            ColumnId::Created => 220.0,
            ColumnId::Notes => 320.0,
        }
    }

    pub fn editor(self) -> EditorKind {
        match self {
            ColumnId::Amount => EditorKind::Currency,
            ColumnId::Stage => EditorKind::Stage,
            _ => EditorKind::Text,
        }
    }

    pub fn filter(self) -> FilterKind {
        match self {
            ColumnId::Stage | ColumnId::Status => FilterKind::Exact,
            _ => FilterKind::Substring,
        }
    }
}
