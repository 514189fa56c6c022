use std::path::PathBuf;

use clap::{Parser, Subcommand};

use oki_cli::commands::{self, config_ops, convert_ops, dict_ops};

#[derive(Parser)]
#[command(
    name = "okitool",
    version,
    about = "Okinawan phonetic transcription and dictionary tool"
)]
struct Cli {
    /// Custom kana table TOML (default: embedded)
    #[arg(long, global = true)]
    kana_table: Option<String>,
    /// Custom phonetics table TOML (default: embedded)
    #[arg(long, global = true)]
    phonetics_table: Option<String>,
    /// Custom ETL settings TOML (default: embedded)
    #[arg(long, global = true)]
    settings: Option<String>,
    /// Debug-level logging on stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Write JSONL traces to this directory (requires --features trace)
    #[arg(long, global = true)]
    trace_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a transcription to kana spellings
    Convert {
        /// Transcription, e.g. "hanasi"
        transcription: String,
        /// Print hiragana instead of katakana
        #[arg(long)]
        hiragana: bool,
    },
    /// Print phonemes and per-register pronunciations as JSON
    Analyze {
        /// Transcription
        transcription: String,
    },
    /// Show the mora split with kana and IPA per mora
    Moras {
        /// Transcription
        transcription: String,
    },
    /// Build a JSON dictionary from a tab-separated source
    BuildDict {
        /// Dictionary direction
        #[arg(value_enum)]
        direction: dict_ops::Direction,
        /// Input TSV file
        input: String,
        /// Output JSON file (default: input with .json extension)
        #[arg(short, long)]
        output: Option<String>,
        /// Skip rows that fail to convert instead of aborting
        #[arg(long)]
        skip_invalid: bool,
    },
    /// Export a default phonetic table as TOML
    TablesExport {
        #[arg(value_enum)]
        kind: config_ops::TableKind,
    },
    /// Validate a custom phonetic table TOML file
    TablesValidate {
        #[arg(value_enum)]
        kind: config_ops::TableKind,
        /// Path to the TOML file
        file: String,
    },
    /// Export default ETL settings as TOML
    SettingsExport,
    /// Validate a custom ETL settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();
    commands::init_logging(cli.verbose, cli.trace_dir.as_deref());

    if let Some(file) = &cli.settings {
        commands::load_settings(file);
    }
    let engine = || commands::load_engine(cli.kana_table.as_deref(), cli.phonetics_table.as_deref());

    match cli.command {
        Command::Convert {
            transcription,
            hiragana,
        } => convert_ops::convert_cmd(&engine(), &transcription, hiragana),
        Command::Analyze { transcription } => convert_ops::analyze_cmd(&engine(), &transcription),
        Command::Moras { transcription } => convert_ops::moras_cmd(&engine(), &transcription),
        Command::BuildDict {
            direction,
            input,
            output,
            skip_invalid,
        } => dict_ops::build_dict_cmd(engine(), direction, &input, output.as_deref(), skip_invalid),
        Command::TablesExport { kind } => config_ops::tables_export(kind),
        Command::TablesValidate { kind, file } => config_ops::tables_validate(kind, &file),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
