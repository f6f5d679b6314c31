use std::{fmt, str::FromStr};

use serde::Serialize;

use crate::error::BlockError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    Session,
    CreateBucket,
    ListBuckets,
    DeleteBucket,
}

impl BlockKind {
    /// Catalogue order.
    pub const ALL: [BlockKind; 4] = [
        BlockKind::Session,
        BlockKind::CreateBucket,
        BlockKind::ListBuckets,
        BlockKind::DeleteBucket,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Session => "session",
            Self::CreateBucket => "create_bucket",
            Self::ListBuckets => "list_buckets",
            Self::DeleteBucket => "delete_bucket",
        }
    }

    pub fn is_session(self) -> bool {
        self == Self::Session
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BlockKind {
    type Err = BlockError;

    /// Accepts `create_bucket`, `create-bucket` and `createBucket`, ignoring case.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized: String = raw
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .map(|c| c.to_ascii_lowercase())
            .collect();

        BlockKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().replace('_', "") == normalized)
            .ok_or_else(|| BlockError::unknown_kind(raw.trim()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockIcon {
    Database,
    Play,
    List,
    Trash,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BlockDefinition {
    pub kind: BlockKind,
    pub label: &'static str,
    pub icon: BlockIcon,
    pub requires_session: bool,
    #[serde(skip)]
    pub template: &'static str,
}
