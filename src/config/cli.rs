use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::core::text::CaseMode;

#[derive(Debug, Parser)]
#[command(name = "shopkit")]
#[command(about = "Small catalog utilities: format, filter, merge and inspect shop data")]
pub struct Cli {
    /// TOML file with default thresholds, case mode and delay
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Case-transform a display name
    FormatName {
        text: String,

        #[arg(long, value_enum)]
        case: Option<CaseMode>,
    },

    /// List books rated above the featured threshold
    Featured {
        #[arg(long)]
        input: PathBuf,

        #[arg(long)]
        min_rating: Option<f32>,
    },

    /// Show the single highest-priced product
    Priciest {
        #[arg(long)]
        input: PathBuf,
    },

    /// Concatenate product lists into one, preserving order
    Merge {
        #[arg(long = "input", required = true)]
        inputs: Vec<PathBuf>,
    },

    /// Print a description line for every staff record
    Describe {
        #[arg(long)]
        input: PathBuf,
    },

    /// Measure a raw value: character count for text, double for numbers
    Measure {
        #[arg(allow_negative_numbers = true)]
        value: String,
    },

    /// Classify a day of week as weekday or weekend
    DayKind { day: String },

    /// Square a number after a fixed delay
    Square {
        #[arg(allow_negative_numbers = true)]
        value: i32,

        #[arg(long)]
        delay_ms: Option<u64>,
    },
}
