//! CLI argument definitions for arcforge

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "arcforge")]
#[command(about = "Crafting requirement calculator", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (defaults apply when it does not exist)
    #[arg(short, long, global = true, env = "ARCFORGE_CONFIG", default_value = "arcforge.toml")]
    pub config: PathBuf,

    /// Directory of item record files (overrides config)
    #[arg(long, global = true, env = "ARCFORGE_ITEMS_DIR")]
    pub items_dir: Option<PathBuf>,

    /// Image directory prefix (overrides config)
    #[arg(long, global = true)]
    pub image_dir: Option<String>,

    /// Preferred name language (overrides config)
    #[arg(long, global = true)]
    pub language: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List craftable, upgradeable, and weapon-tier items
    List,

    /// Direct requirements for a selection
    Calculate {
        /// Selected items as ID=QTY (QTY defaults to 1)
        #[arg(required = true)]
        items: Vec<String>,
    },

    /// Direct requirements for one item
    Expand {
        /// Item ID
        item_id: String,

        /// How many to produce
        #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
        quantity: i64,
    },

    /// Display record for one item
    Info {
        /// Item ID
        item_id: String,
    },

    /// Run a raw JSON request (list, calculate, expand, info)
    Json {
        /// Operation name
        op: String,

        /// Request body; read from stdin when omitted
        body: Option<String>,
    },
}
