use std::path::PathBuf;

mod config;
mod controller;
mod ui;

use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use config::{load_settings, Overrides};
use controller::events::{UiError, UiErrorContext, UiEvent};
use ui::{BlockEditorApp, APP_TITLE};

const UI_EVENT_QUEUE_CAPACITY: usize = 256;

#[derive(Parser, Debug)]
#[command(about = "Click-to-connect editor that builds a boto3 S3 script")]
struct Args {
    /// TOML settings file; defaults to ./block_editor.toml, then the user config dir.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    text_scale: Option<f32>,
    /// Tracing filter directive; wins over RUST_LOG and the settings file.
    #[arg(long)]
    log_filter: Option<String>,
}

fn init_tracing(cli_filter_given: bool, configured: &str) {
    let directive = if cli_filter_given {
        configured.to_string()
    } else {
        std::env::var("RUST_LOG")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| configured.to_string())
    };

    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> eframe::Result<()> {
    let args = Args::parse();
    let loaded = load_settings(&Overrides {
        config_path: args.config.clone(),
        text_scale: args.text_scale,
        log_filter: args.log_filter.clone(),
    });
    let settings = loaded.settings;

    init_tracing(args.log_filter.is_some(), &settings.log_filter);
    for warning in &loaded.warnings {
        tracing::warn!("{warning}");
    }
    tracing::info!(
        source = ?loaded.source,
        text_scale = settings.text_scale,
        "starting block editor"
    );

    let (ui_tx, ui_rx) = bounded::<UiEvent>(UI_EVENT_QUEUE_CAPACITY);
    if !loaded.warnings.is_empty() {
        let startup_error =
            UiError::from_message(UiErrorContext::Startup, loaded.warnings.join("; "));
        if ui_tx.try_send(UiEvent::Error(startup_error)).is_err() {
            tracing::warn!("could not queue startup configuration warning");
        }
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([settings.window_width, settings.window_height])
            .with_min_inner_size([480.0, 480.0]),
        ..Default::default()
    };
    let text_scale = settings.text_scale;
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_zoom_factor(text_scale);
            Ok(Box::new(BlockEditorApp::new(ui_tx, ui_rx)))
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_flags() {
        let args = Args::try_parse_from([
            "block_editor_gui",
            "--config",
            "custom.toml",
            "--text-scale",
            "1.3",
            "--log-filter",
            "debug",
        ])
        .expect("parse");

        assert_eq!(args.config, Some(PathBuf::from("custom.toml")));
        assert_eq!(args.text_scale, Some(1.3));
        assert_eq!(args.log_filter.as_deref(), Some("debug"));
    }

    #[test]
    fn flags_are_optional() {
        let args = Args::try_parse_from(["block_editor_gui"]).expect("parse");
        assert!(args.config.is_none());
        assert!(args.text_scale.is_none());
        assert!(args.log_filter.is_none());
    }
}
