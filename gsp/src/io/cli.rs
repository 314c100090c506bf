use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use gang_rs::pack::Strategy;
use gang_rs::util::PackingMode;
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    #[arg(short, long, value_name = "FILE")]
    pub input_file: PathBuf,
    #[arg(short, long, value_name = "FOLDER")]
    pub solution_folder: PathBuf,
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    /// Overrides the strategy of the config file
    #[arg(long, value_enum)]
    pub strategy: Option<StrategyArg>,
    /// Overrides the packing mode of the config file
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum StrategyArg {
    Dispatch,
    Shelf,
    Hex,
    MaxRects,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum ModeArg {
    Tight,
    Clean,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Dispatch => Strategy::Dispatch,
            StrategyArg::Shelf => Strategy::Shelf,
            StrategyArg::Hex => Strategy::Hex,
            StrategyArg::MaxRects => Strategy::MaxRects,
        }
    }
}

impl From<ModeArg> for PackingMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Tight => PackingMode::Tight,
            ModeArg::Clean => PackingMode::Clean,
        }
    }
}
