//! Editor state and the click transition.

use serde::Serialize;

use crate::{domain::BlockKind, registry::compose};

/// What a single [`EditorState::activate`] call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// Operation block clicked before a session was connected; nothing changed.
    Ignored,
    /// Session clicked; the sequence restarted from `[Session]`.
    Reset,
    Appended,
    /// Already connected; only the selection moved.
    Reselected,
}

impl Activation {
    pub fn changed_state(self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EditorState {
    connected: Vec<BlockKind>,
    selected: Option<BlockKind>,
    generated_text: String,
}

impl EditorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replays a click sequence from an empty editor.
    pub fn replay(kinds: impl IntoIterator<Item = BlockKind>) -> Self {
        let mut state = Self::new();
        for kind in kinds {
            state.activate(kind);
        }
        state
    }

    pub fn connected(&self) -> &[BlockKind] {
        &self.connected
    }

    pub fn selected(&self) -> Option<BlockKind> {
        self.selected
    }

    pub fn generated_text(&self) -> &str {
        &self.generated_text
    }

    pub fn is_connected(&self, kind: BlockKind) -> bool {
        self.connected.contains(&kind)
    }

    pub fn has_session(&self) -> bool {
        self.is_connected(BlockKind::Session)
    }

    /// Applies one click.
    ///
    /// Operation blocks are ignored until a session is connected. Clicking
    /// the session block restarts the sequence; clicking a connected
    /// operation only moves the selection.
    pub fn activate(&mut self, kind: BlockKind) -> Activation {
        if !kind.is_session() && !self.has_session() {
            tracing::trace!(%kind, "ignoring block click without a connected session");
            return Activation::Ignored;
        }

        let activation = if kind.is_session() {
            self.connected.clear();
            self.connected.push(BlockKind::Session);
            Activation::Reset
        } else if self.is_connected(kind) {
            Activation::Reselected
        } else {
            self.connected.push(kind);
            Activation::Appended
        };

        self.selected = Some(kind);
        self.generated_text = compose(&self.connected);

        tracing::debug!(
            %kind,
            outcome = ?activation,
            connected = self.connected.len(),
            "block activated"
        );
        activation
    }

    /// Back to the freshly opened editor.
    pub fn reset_all(&mut self) {
        *self = Self::new();
    }
}

/// By-value form of [`EditorState::activate`].
pub fn activate(kind: BlockKind, mut state: EditorState) -> EditorState {
    state.activate(kind);
    state
}

#[cfg(test)]
#[path = "tests/editor_tests.rs"]
mod tests;
