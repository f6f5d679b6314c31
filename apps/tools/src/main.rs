use std::{fs, io::Write, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use s3_blocks::{list_blocks, template_for, BlockKind, EditorState};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Parser, Debug)]
#[command(about = "Headless access to the S3 block catalogue and code generator")]
struct Cli {
    /// Tracing filter directive, e.g. `debug` or `s3_blocks=trace`; wins over RUST_LOG.
    #[arg(long)]
    log_filter: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the block catalogue.
    List {
        #[arg(long)]
        json: bool,
    },
    /// Replay block clicks and print the generated script.
    Generate {
        #[arg(required = true, value_parser = parse_kind)]
        blocks: Vec<BlockKind>,
        /// Print the final editor state as JSON instead of the script.
        #[arg(long)]
        json: bool,
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Print the code fragment of a single block.
    Template {
        #[arg(value_parser = parse_kind)]
        block: BlockKind,
    },
}

fn parse_kind(raw: &str) -> Result<BlockKind, String> {
    raw.parse::<BlockKind>().map_err(|err| err.to_string())
}

fn render_catalogue(json: bool) -> Result<String> {
    let blocks = list_blocks();
    if json {
        return Ok(serde_json::to_string_pretty(blocks)?);
    }

    let mut out = String::new();
    for block in blocks {
        let prerequisite = if block.requires_session {
            "requires session"
        } else {
            "-"
        };
        out.push_str(&format!(
            "{:<14} {:<18} {prerequisite}\n",
            block.kind.as_str(),
            block.label
        ));
    }
    Ok(out)
}

fn replay_clicks(blocks: &[BlockKind]) -> EditorState {
    let mut state = EditorState::new();
    for (position, kind) in blocks.iter().copied().enumerate() {
        if !state.activate(kind).changed_state() {
            tracing::warn!(%kind, position, "click ignored: connect a session block first");
        }
    }
    state
}

fn render_generated(blocks: &[BlockKind], json: bool) -> Result<String> {
    let state = replay_clicks(blocks);
    if json {
        return Ok(serde_json::to_string_pretty(&state)?);
    }
    Ok(state.generated_text().to_string())
}

fn emit(text: &str, output: Option<&PathBuf>) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, text).with_context(|| {
                format!("failed to write generated code to '{}'", path.display())
            })?;
            tracing::info!(path = %path.display(), bytes = text.len(), "wrote generated code");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(text.as_bytes())
                .context("failed to write to stdout")?;
        }
    }
    Ok(())
}

fn resolve_log_filter(cli_filter: Option<&str>, rust_log: Option<String>) -> String {
    cli_filter
        .map(str::to_string)
        .or_else(|| rust_log.filter(|v| !v.trim().is_empty()))
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let directive = resolve_log_filter(cli.log_filter.as_deref(), std::env::var("RUST_LOG").ok());
    let filter =
        EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::List { json } => emit(&render_catalogue(json)?, None)?,
        Command::Generate {
            blocks,
            json,
            output,
        } => emit(&render_generated(&blocks, json)?, output.as_ref())?,
        Command::Template { block } => emit(template_for(block), None)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_generate_with_mixed_spellings() {
        let cli = Cli::try_parse_from([
            "block_tools",
            "generate",
            "session",
            "create-bucket",
            "listBuckets",
        ])
        .expect("parse");

        match cli.command {
            Command::Generate { blocks, json, output } => {
                assert_eq!(
                    blocks,
                    vec![
                        BlockKind::Session,
                        BlockKind::CreateBucket,
                        BlockKind::ListBuckets
                    ]
                );
                assert!(!json);
                assert!(output.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn log_filter_flag_is_optional() {
        let cli = Cli::try_parse_from(["block_tools", "list"]).expect("parse");
        assert!(cli.log_filter.is_none());

        let cli = Cli::try_parse_from(["block_tools", "--log-filter", "trace", "list"])
            .expect("parse");
        assert_eq!(cli.log_filter.as_deref(), Some("trace"));
    }

    #[test]
    fn log_filter_prefers_flag_then_rust_log_then_info() {
        assert_eq!(
            resolve_log_filter(Some("trace"), Some("debug".to_string())),
            "trace"
        );
        assert_eq!(resolve_log_filter(None, Some("debug".to_string())), "debug");
        assert_eq!(resolve_log_filter(None, Some("  ".to_string())), "info");
        assert_eq!(resolve_log_filter(None, None), "info");
    }

    #[test]
    fn ignored_clicks_leave_replayed_state_untouched() {
        let state = replay_clicks(&[BlockKind::ListBuckets, BlockKind::CreateBucket]);
        assert_eq!(state, EditorState::new());
    }

    #[test]
    fn rejects_unknown_block_name() {
        let err = Cli::try_parse_from(["block_tools", "generate", "session", "put_object"])
            .expect_err("unknown block");
        assert!(err.to_string().contains("put_object"));
    }

    #[test]
    fn generate_requires_at_least_one_block() {
        assert!(Cli::try_parse_from(["block_tools", "generate"]).is_err());
    }

    #[test]
    fn generated_text_skips_clicks_before_session() {
        let text = render_generated(
            &[BlockKind::DeleteBucket, BlockKind::Session, BlockKind::ListBuckets],
            false,
        )
        .expect("render");

        assert!(text.starts_with("import boto3\n"));
        assert!(text.contains("# List buckets"));
        assert!(!text.contains("# Delete bucket"));
    }

    #[test]
    fn generated_text_is_empty_without_session() {
        let text = render_generated(&[BlockKind::CreateBucket], false).expect("render");
        assert_eq!(text, "");
    }

    #[test]
    fn json_snapshot_reports_connected_sequence() {
        let raw = render_generated(&[BlockKind::Session, BlockKind::CreateBucket], true)
            .expect("render");
        let value: serde_json::Value = serde_json::from_str(&raw).expect("json");

        assert_eq!(
            value["connected"],
            serde_json::json!(["session", "create_bucket"])
        );
        assert_eq!(value["selected"], serde_json::json!("create_bucket"));
    }

    #[test]
    fn catalogue_lists_every_block_once() {
        let table = render_catalogue(false).expect("render");
        assert_eq!(table.lines().count(), BlockKind::ALL.len());
        assert!(table.lines().next().expect("first row").starts_with("session"));

        let raw = render_catalogue(true).expect("json");
        let rows: serde_json::Value = serde_json::from_str(&raw).expect("json");
        assert_eq!(rows[1]["label"], serde_json::json!("Create S3 Bucket"));
        assert_eq!(rows[0]["requires_session"], serde_json::json!(false));
        assert_eq!(rows[3]["icon"], serde_json::json!("trash"));
        assert!(rows[0].get("template").is_none());
    }

    #[test]
    fn writes_generated_code_to_output_file() {
        let path = std::env::temp_dir().join(format!(
            "block_tools_emit_{}.py",
            std::process::id()
        ));
        emit("print('hi')\n", Some(&path)).expect("emit");
        assert_eq!(fs::read_to_string(&path).expect("read"), "print('hi')\n");
        fs::remove_file(path).expect("cleanup");
    }
}
