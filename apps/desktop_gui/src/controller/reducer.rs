//! Applies queued UI events to the editor model.
//!
//! Clipboard and file work needs the platform, so the reducer only asks for
//! it through an [`Effect`]; the app runs the effect and reports failures
//! back as [`UiEvent::Error`].

use s3_blocks::{definition, Activation, BlockKind, EditorState};

use crate::controller::events::{UiError, UiEvent};

pub const SESSION_REQUIRED_STATUS: &str = "Connect AWS Session first";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    CopyToClipboard(String),
    SaveToFile(String),
}

#[derive(Debug, Default)]
pub struct EditorModel {
    pub editor: EditorState,
    pub status: String,
    pub banner: Option<UiError>,
}

impl EditorModel {
    pub fn new() -> Self {
        Self {
            status: "Click AWS Session to start".to_string(),
            ..Self::default()
        }
    }
}

pub fn activation_status(kind: BlockKind, activation: Activation) -> String {
    let label = definition(kind).label;
    match activation {
        Activation::Ignored => SESSION_REQUIRED_STATUS.to_string(),
        Activation::Reset => format!("{label} connected; sequence restarted"),
        Activation::Appended => format!("{label} connected"),
        Activation::Reselected => format!("{label} already connected"),
    }
}

pub fn reduce(model: &mut EditorModel, event: UiEvent) -> Option<Effect> {
    match event {
        UiEvent::BlockClicked(kind) => {
            let activation = model.editor.activate(kind);
            if !activation.changed_state() {
                tracing::debug!(%kind, "block click needs a session first");
            }
            model.status = activation_status(kind, activation);
            None
        }
        UiEvent::CopyCode | UiEvent::SaveCode if model.editor.generated_text().is_empty() => {
            model.status = "Nothing to export yet".to_string();
            None
        }
        UiEvent::CopyCode => Some(Effect::CopyToClipboard(
            model.editor.generated_text().to_string(),
        )),
        UiEvent::SaveCode => Some(Effect::SaveToFile(model.editor.generated_text().to_string())),
        UiEvent::ClearEditor => {
            model.editor.reset_all();
            model.status = "Editor cleared".to_string();
            None
        }
        UiEvent::DismissBanner => {
            model.banner = None;
            None
        }
        UiEvent::Info(message) => {
            model.status = message;
            None
        }
        UiEvent::Error(err) => {
            tracing::warn!(
                context = ?err.context(),
                category = ?err.category(),
                error = err.message(),
                "ui error"
            );
            model.status = err.message().to_string();
            model.banner = Some(err);
            None
        }
    }
}
