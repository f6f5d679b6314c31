//! UI events and error modeling for the block editor controller.

use s3_blocks::BlockKind;

#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    BlockClicked(BlockKind),
    CopyCode,
    SaveCode,
    ClearEditor,
    DismissBanner,
    Info(String),
    Error(UiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Clipboard,
    Io,
    Config,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    Startup,
    CopyCode,
    SaveCode,
    General,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_message(context: UiErrorContext, message: impl Into<String>) -> Self {
        let message = message.into();
        let message_lower = message.to_ascii_lowercase();
        let category = if message_lower.contains("clipboard") {
            UiErrorCategory::Clipboard
        } else if message_lower.contains("permission denied")
            || message_lower.contains("no such file")
            || message_lower.contains("read-only")
            || message_lower.contains("failed to write")
        {
            UiErrorCategory::Io
        } else if message_lower.contains("config") || message_lower.contains("toml") {
            UiErrorCategory::Config
        } else {
            match context {
                UiErrorContext::CopyCode => UiErrorCategory::Clipboard,
                UiErrorContext::SaveCode => UiErrorCategory::Io,
                UiErrorContext::Startup => UiErrorCategory::Config,
                UiErrorContext::General => UiErrorCategory::Unknown,
            }
        };

        Self {
            category,
            context,
            message,
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

pub fn err_label(category: UiErrorCategory) -> &'static str {
    match category {
        UiErrorCategory::Clipboard => "Clipboard",
        UiErrorCategory::Io => "File",
        UiErrorCategory::Config => "Configuration",
        UiErrorCategory::Unknown => "Unexpected",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_clipboard_failures() {
        let err = UiError::from_message(
            UiErrorContext::General,
            "clipboard unavailable: no display server",
        );
        assert_eq!(err.category(), UiErrorCategory::Clipboard);
    }

    #[test]
    fn classifies_write_failures_as_io() {
        let err = UiError::from_message(
            UiErrorContext::General,
            "failed to write generated code to '/root/x.py': Permission denied (os error 13)",
        );
        assert_eq!(err.category(), UiErrorCategory::Io);
        assert_eq!(err_label(err.category()), "File");
    }

    #[test]
    fn falls_back_to_context_category() {
        let err = UiError::from_message(UiErrorContext::SaveCode, "dialog closed unexpectedly");
        assert_eq!(err.category(), UiErrorCategory::Io);
        assert_eq!(err.context(), UiErrorContext::SaveCode);

        let err = UiError::from_message(UiErrorContext::General, "boom");
        assert_eq!(err.category(), UiErrorCategory::Unknown);
        assert_eq!(err.message(), "boom");
    }
}
