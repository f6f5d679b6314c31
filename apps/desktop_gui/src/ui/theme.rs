//! Block card colours and glyphs.

use eframe::egui::Color32;
use s3_blocks::{BlockDefinition, BlockIcon};

pub const SESSION_FILL: Color32 = Color32::from_rgb(59, 130, 246);
pub const CONNECTED_FILL: Color32 = Color32::from_rgb(34, 197, 94);
pub const DISCONNECTED_FILL: Color32 = Color32::from_rgb(209, 213, 219);
pub const CONNECTED_DOT: Color32 = Color32::from_rgb(134, 239, 172);
pub const DISCONNECTED_DOT: Color32 = Color32::from_rgb(252, 165, 165);
pub const SELECTED_STROKE: Color32 = Color32::from_rgb(30, 64, 175);
pub const CODE_PANEL_FILL: Color32 = Color32::from_rgb(31, 41, 55);
pub const PAGE_FILL: Color32 = Color32::from_rgb(249, 250, 251);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockVisual {
    pub fill: Color32,
    /// `None` for the session card, which never shows a status dot.
    pub indicator: Option<Color32>,
    pub glyph: &'static str,
}

pub fn glyph_for(icon: BlockIcon) -> &'static str {
    match icon {
        BlockIcon::Database => "💾",
        BlockIcon::Play => "▶",
        BlockIcon::List => "📋",
        BlockIcon::Trash => "🗑",
    }
}

pub fn block_visual(block: &BlockDefinition, connected: bool) -> BlockVisual {
    let glyph = glyph_for(block.icon);
    if !block.requires_session {
        return BlockVisual {
            fill: SESSION_FILL,
            indicator: None,
            glyph,
        };
    }

    let (fill, dot) = if connected {
        (CONNECTED_FILL, CONNECTED_DOT)
    } else {
        (DISCONNECTED_FILL, DISCONNECTED_DOT)
    };
    BlockVisual {
        fill,
        indicator: Some(dot),
        glyph,
    }
}
