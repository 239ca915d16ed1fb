use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Arbor - explore hierarchical datasets as an interactive tree
#[derive(Parser, Debug)]
#[command(name = "arbor")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'arbor' without arguments to browse the sample tree.")]
pub struct Cli {
    /// Output NDJSON events instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Use ASCII glyphs only
    #[arg(long, global = true)]
    pub ascii: bool,

    /// Show node ids next to labels
    #[arg(long, global = true)]
    pub show_ids: bool,

    /// Config file (defaults to ./.arbor.toml, then the user config)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the tree and the inspector panel
    Show {
        /// Dataset file (.json, .yaml, .yml, .toml); sample tree if omitted
        file: Option<PathBuf>,

        /// Toggle a node by id (repeatable, applied in order)
        #[arg(short, long = "toggle", value_name = "ID")]
        toggles: Vec<String>,

        /// Select a node without changing its expansion
        #[arg(short, long, value_name = "ID")]
        select: Option<String>,

        /// Filter the tree by name after toggling
        #[arg(short, long)]
        filter: Option<String>,
    },

    /// Print the inspector view of one node
    Inspect {
        /// Dataset file (.json, .yaml, .yml, .toml); sample tree if omitted
        file: Option<PathBuf>,

        /// Node id (user-supplied or synthetic)
        #[arg(long)]
        id: String,
    },

    /// Browse the tree interactively
    Browse {
        /// Dataset file (.json, .yaml, .yml, .toml); sample tree if omitted
        file: Option<PathBuf>,
    },
}
