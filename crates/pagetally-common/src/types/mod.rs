use std::fmt;

use serde::{Deserialize, Serialize};

/// One input element. `None` is an absent record; `Some(v)` is valid when
/// `v >= 0` and invalid otherwise.
pub type Record = Option<i64>;

/// Why a record was left out of the aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkipReason {
    NullRecord,
    InvalidRecord,
}

impl SkipReason {
    /// Classifies a single record. Returns `None` for valid records.
    pub fn classify(record: Record) -> Option<Self> {
        match record {
            None => Some(SkipReason::NullRecord),
            Some(v) if v < 0 => Some(SkipReason::InvalidRecord),
            Some(_) => None,
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NullRecord => write!(f, "null record"),
            SkipReason::InvalidRecord => write!(f, "invalid record"),
        }
    }
}

/// Shape of the collection handed to an aggregation.
///
/// `Absent` and `Empty` are both the "null or empty" outcome but stay
/// distinguishable for callers that care.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "len", rename_all = "snake_case")]
pub enum InputKind {
    #[default]
    Absent,
    Empty,
    Records(usize),
}

impl InputKind {
    pub fn from_len(len: usize) -> Self {
        if len == 0 {
            InputKind::Empty
        } else {
            InputKind::Records(len)
        }
    }

    pub fn len(&self) -> usize {
        match self {
            InputKind::Absent | InputKind::Empty => 0,
            InputKind::Records(n) => *n,
        }
    }

    pub fn is_null_or_empty(&self) -> bool {
        matches!(self, InputKind::Absent | InputKind::Empty)
    }
}
