use crate::utils::Result;
use clap::{ArgAction, ArgGroup, Parser, Subcommand};
use env_logger::fmt::Color;
use log::{Level, LevelFilter};
use once_cell::sync::Lazy;
use std::{
    io::Write,
    path::{Path, PathBuf},
};

pub static FULL_VERSION: Lazy<String> = Lazy::new(|| {
    format!(
        "{}-{}",
        env!("CARGO_PKG_VERSION"),
        env!("VERGEN_GIT_DESCRIBE")
    )
});

#[derive(Parser)]
#[command(name="seqfind",
          version=&**FULL_VERSION,
          about = "Approximate motif search in short nucleotide sequences",
          long_about = None,
          disable_help_subcommand = true,
          help_template = "{name} {version}\n{about-section}\n{usage-heading}\n    {usage}\n\n{all-args}",
          )]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[clap(short = 'v')]
    #[clap(long = "verbose")]
    #[clap(action = ArgAction::Count, help = "Specify multiple times to increase verbosity level (e.g., -vv for more verbosity)")]
    pub verbosity: u8,
}

#[derive(Subcommand)]
pub enum Command {
    #[clap(about = "Find a recurring approximate motif in a sequence")]
    Motif(MotifArgs),
    #[clap(about = "Evaluate the limit of a population recurrence")]
    Population(PopulationArgs),
}

#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("motif")))]
#[command(arg_required_else_help(true))]
pub struct MotifArgs {
    #[clap(required = true)]
    #[clap(short = 'i')]
    #[clap(long = "input")]
    #[clap(
        help = "Task file: `<occurrences> <length> <max-mismatch>` on the first line, the sequence on the second"
    )]
    #[clap(value_name = "TASK")]
    #[arg(value_parser = check_file_exists)]
    pub input_path: PathBuf,

    #[clap(required = true)]
    #[clap(short = 'o')]
    #[clap(long = "output")]
    #[clap(help = "Output file for the motif and its occurrences")]
    #[clap(value_name = "OUT")]
    #[arg(value_parser = check_output_path)]
    pub output_path: PathBuf,
}

#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("population")))]
#[command(arg_required_else_help(true))]
pub struct PopulationArgs {
    #[clap(required = true)]
    #[clap(short = 'i')]
    #[clap(long = "input")]
    #[clap(help = "Task file: a header line, then one `<start> <a> <b>` triple per line")]
    #[clap(value_name = "TASK")]
    #[arg(value_parser = check_file_exists)]
    pub input_path: PathBuf,

    #[clap(required = true)]
    #[clap(short = 'o')]
    #[clap(long = "output")]
    #[clap(help = "Output file with one limit per task")]
    #[clap(value_name = "OUT")]
    #[arg(value_parser = check_output_path)]
    pub output_path: PathBuf,

    #[clap(help_heading("Advanced"))]
    #[clap(long = "final-day")]
    #[clap(value_name = "FINAL_DAY")]
    #[clap(help = "Day at which the recurrence is evaluated")]
    #[clap(default_value = "100000")]
    #[arg(value_parser = day_in_range)]
    pub final_day: u64,
}

pub fn init_verbose(args: &Cli) {
    let filter_level: LevelFilter = match args.verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    env_logger::Builder::from_default_env()
        .format(|buf, record| {
            let level = record.level();
            let mut style = buf.style();
            match record.level() {
                Level::Error => style.set_color(Color::Red),
                Level::Warn => style.set_color(Color::Yellow),
                Level::Info => style.set_color(Color::Green),
                Level::Debug => style.set_color(Color::Blue),
                Level::Trace => style.set_color(Color::Cyan),
            };

            writeln!(
                buf,
                "{} [{}] - {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                style.value(level),
                record.args()
            )
        })
        .filter_level(filter_level)
        .init();
}

fn check_file_exists(s: &str) -> Result<PathBuf> {
    let path = Path::new(s);
    if !path.exists() {
        Err(format!("File does not exist: {}", path.display()))
    } else {
        Ok(path.to_path_buf())
    }
}

fn check_output_path(s: &str) -> Result<PathBuf> {
    let path = Path::new(s);
    if let Some(parent_dir) = path.parent() {
        if !parent_dir.as_os_str().is_empty() && !parent_dir.exists() {
            return Err(format!("Path does not exist: {}", parent_dir.display()));
        }
    }
    Ok(path.to_path_buf())
}

fn day_in_range(s: &str) -> Result<u64> {
    let day: u64 = s
        .parse()
        .map_err(|_| format!("`{}` is not a valid day number", s))?;
    if day >= 2 {
        Ok(day)
    } else {
        Err("The final day must be at least 2".into())
    }
}
