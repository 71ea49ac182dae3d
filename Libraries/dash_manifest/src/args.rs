// File: args.rs
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing::level_filters::LevelFilter;

use crate::mpd::{ManifestOptions, DEFAULT_MIN_BUFFER_TIME};

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, ValueEnum)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

#[derive(Parser, Debug)]
#[command(version, about, long_about="Generates a static DASH manifest from a video info JSON document.")]
pub struct Args {
    /// Video info JSON document, `-` reads from stdin
    #[arg(short, long, default_value = "-")]
    pub input: String,
    /// Where to write the MPD, stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// MPD@minBufferTime in seconds
    #[arg(short, long, default_value_t = DEFAULT_MIN_BUFFER_TIME)]
    pub min_buffer_time: f64,
    /// Rewrite `ip=<address>` markers in media URLs to `ip=0.0.0.0`
    #[arg(short, long, action = clap::ArgAction::SetTrue)]
    pub replace_ips: bool,
    #[arg(short, long, default_value = "info")]
    pub log_level: LogLevel,
}

impl Args {
    pub fn manifest_options(&self) -> ManifestOptions {
        ManifestOptions {
            min_buffer_time: self.min_buffer_time,
            replace_ips: self.replace_ips,
        }
    }
}

pub fn parse_args() -> Args {
    Args::parse()
}

pub fn get_log_level_filter(args: &Args) -> LevelFilter {
    match args.log_level {
        LogLevel::Trace => LevelFilter::TRACE,
        LogLevel::Debug => LevelFilter::DEBUG,
        LogLevel::Info => LevelFilter::INFO,
        LogLevel::Warn => LevelFilter::WARN,
        LogLevel::Error => LevelFilter::ERROR,
    }
}
