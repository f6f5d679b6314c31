//! Static block catalogue and the boto3 snippet for each block kind.

use crate::domain::{BlockDefinition, BlockIcon, BlockKind};

const SESSION_TEMPLATE: &str = concat!(
    "import boto3\n",
    "\n",
    "# Initialize session\n",
    "session = boto3.Session()\n",
    "s3_client = session.client(\"s3\")\n",
    "\n",
);

const CREATE_BUCKET_TEMPLATE: &str = concat!(
    "# Create bucket\n",
    "bucket_name = \"your-bucket-name\"\n",
    "response = s3_client.create_bucket(\n",
    "    Bucket=bucket_name,\n",
    "    CreateBucketConfiguration={\"LocationConstraint\": \"us-west-2\"}\n",
    ")\n",
    "\n",
);

const LIST_BUCKETS_TEMPLATE: &str = concat!(
    "# List buckets\n",
    "response = s3_client.list_buckets()\n",
    "buckets = [bucket[\"Name\"] for bucket in response[\"Buckets\"]]\n",
    "print(\"Buckets:\", buckets)\n",
    "\n",
);

const DELETE_BUCKET_TEMPLATE: &str = concat!(
    "# Delete bucket\n",
    "bucket_name = \"your-bucket-name\"\n",
    "response = s3_client.delete_bucket(\n",
    "    Bucket=bucket_name\n",
    ")\n",
    "\n",
);

// Indexed by `BlockKind as usize`; order must match `BlockKind::ALL`.
static BLOCKS: [BlockDefinition; 4] = [
    BlockDefinition {
        kind: BlockKind::Session,
        label: "AWS Session",
        icon: BlockIcon::Database,
        requires_session: false,
        template: SESSION_TEMPLATE,
    },
    BlockDefinition {
        kind: BlockKind::CreateBucket,
        label: "Create S3 Bucket",
        icon: BlockIcon::Play,
        requires_session: true,
        template: CREATE_BUCKET_TEMPLATE,
    },
    BlockDefinition {
        kind: BlockKind::ListBuckets,
        label: "List S3 Buckets",
        icon: BlockIcon::List,
        requires_session: true,
        template: LIST_BUCKETS_TEMPLATE,
    },
    BlockDefinition {
        kind: BlockKind::DeleteBucket,
        label: "Delete S3 Bucket",
        icon: BlockIcon::Trash,
        requires_session: true,
        template: DELETE_BUCKET_TEMPLATE,
    },
];

pub fn list_blocks() -> &'static [BlockDefinition] {
    &BLOCKS
}

pub fn definition(kind: BlockKind) -> &'static BlockDefinition {
    &BLOCKS[kind.index()]
}

pub fn template_for(kind: BlockKind) -> &'static str {
    definition(kind).template
}

/// Renders the script for a connected sequence.
///
/// An empty sequence renders as the empty string. Otherwise the session
/// fragment always comes first, followed by every operation fragment in the
/// order given; `Session` entries inside `kinds` contribute nothing further.
pub fn compose(kinds: &[BlockKind]) -> String {
    if kinds.is_empty() {
        return String::new();
    }

    let mut out = String::from(SESSION_TEMPLATE);
    for kind in kinds.iter().filter(|kind| !kind.is_session()) {
        out.push_str(template_for(*kind));
    }
    out
}

#[cfg(test)]
#[path = "tests/registry_tests.rs"]
mod tests;
