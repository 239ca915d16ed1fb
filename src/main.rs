//! Arbor CLI - explore hierarchical datasets as an interactive tree
//!
//! Usage: arbor [COMMAND]
//!
//! Commands:
//!   show     Print the tree and the inspector panel
//!   inspect  Print the inspector view of one node
//!   browse   Browse the tree interactively (default)

mod cli;
mod commands;
mod ui;

use anyhow::Result;
use arbor::ArborError;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, ColorWhen, Commands};
use commands::show::ShowRequest;
use commands::OutputOptions;
use ui::json::emit_event;
use ui::json::events::{CompleteEvent, ErrorEvent};
use ui::terminal::detect_capabilities;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let caps = detect_capabilities();
    let out = OutputOptions {
        json: cli.json,
        supports_unicode: caps.supports_unicode && !cli.ascii,
        supports_color: match cli.color {
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Auto) | None => caps.supports_color,
        },
        show_ids: cli.show_ids,
        is_tty: caps.is_tty && !caps.is_ci,
    };
    let command_name = command_name(cli.command.as_ref());

    if let Err(err) = run(cli, &out) {
        report_error(command_name, &err, &out);
        std::process::exit(1);
    }
}

fn run(cli: Cli, out: &OutputOptions) -> Result<()> {
    let config = commands::load_config(cli.config.as_deref(), out)?;

    match cli.command {
        Some(Commands::Show {
            file,
            toggles,
            select,
            filter,
        }) => {
            let request = ShowRequest {
                toggles,
                select,
                filter,
            };
            commands::show::cmd_show(file.as_deref(), &request, &config, out)
        }
        Some(Commands::Inspect { file, id }) => {
            commands::inspect::cmd_inspect(file.as_deref(), &id, &config, out)
        }
        Some(Commands::Browse { file }) => {
            commands::browse::cmd_browse(file.as_deref(), &config, out)
        }
        None => commands::browse::cmd_browse(None, &config, out),
    }
}

fn command_name(command: Option<&Commands>) -> &'static str {
    match command {
        Some(Commands::Show { .. }) => "show",
        Some(Commands::Inspect { .. }) => "inspect",
        Some(Commands::Browse { .. }) | None => "browse",
    }
}

/// Diagnostics go to stderr. `ARBOR_LOG` takes a full filter directive,
/// otherwise `-v` raises the level one step per flag.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env("ARBOR_LOG")
        .unwrap_or_else(|_| EnvFilter::new(format!("arbor={level}")));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn report_error(command: &str, err: &anyhow::Error, out: &OutputOptions) {
    if out.json {
        let arbor = err.downcast_ref::<ArborError>();
        let code = arbor.map_or("error", ArborError::code);
        let mut event = ErrorEvent::new(command, code, format!("{err:#}"));
        if let Some(file) = arbor.and_then(ArborError::file) {
            event = event.with_file(file.display().to_string());
        }
        let _ = emit_event(&event);
        let _ = emit_event(&CompleteEvent::failure(command));
        return;
    }

    eprint!(
        "{}",
        ui::error::format_error(err, out.supports_color, out.supports_unicode)
    );
}
