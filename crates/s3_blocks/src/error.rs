use thiserror::Error;

use crate::domain::BlockKind;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlockError {
    #[error("unknown block kind '{0}' (expected one of: {expected})", expected = expected_kinds())]
    UnknownKind(String),
}

impl BlockError {
    pub fn unknown_kind(raw: impl Into<String>) -> Self {
        Self::UnknownKind(raw.into())
    }
}

fn expected_kinds() -> String {
    BlockKind::ALL
        .iter()
        .map(|kind| kind.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
