//! Block catalogue and editor state for the S3 visual block editor.
//!
//! The registry holds one static [`BlockDefinition`] per [`BlockKind`]; the
//! editor tracks which kinds are connected, in click order, and keeps the
//! generated boto3 script in sync with that sequence.

pub mod domain;
pub mod editor;
pub mod error;
pub mod registry;

pub use domain::{BlockDefinition, BlockIcon, BlockKind};
pub use editor::{activate, Activation, EditorState};
pub use error::BlockError;
pub use registry::{compose, definition, list_blocks, template_for};
