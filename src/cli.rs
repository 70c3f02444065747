use crate::utils::Result;
use crate::viz::Color;
use clap::{ArgAction, ArgGroup, Parser, Subcommand};
use env_logger::fmt::Color as LogColor;
use gridplot::{Interpolation, Origin};
use log::{Level, LevelFilter};
use once_cell::sync::Lazy;
use std::{
    io::Write,
    path::{Path, PathBuf},
};

pub static FULL_VERSION: Lazy<String> = Lazy::new(|| env!("CARGO_PKG_VERSION").to_string());

#[derive(Parser)]
#[command(name="msaviz",
          version=&**FULL_VERSION,
          about = "Conservation and covariation plots for protein multiple sequence alignments",
          long_about = None,
          disable_help_subcommand = true,
          help_template = "{name} {version}\n{about-section}\n{usage-heading}\n    {usage}\n\n{all-args}{after-help}",
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
    #[clap(about = "Shannon Entropy Bar Plotter")]
    Entropy(EntropyArgs),
    #[clap(about = "Mutual Information Heatmap Plotter")]
    Mutinfo(MutinfoArgs),
}

#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("input").required(true).args(["msa_path", "scores_path"])))]
#[command(arg_required_else_help(true))]
pub struct EntropyArgs {
    #[clap(short = 'm')]
    #[clap(long = "msa")]
    #[clap(help = "Aligned FASTA file (optionally gzipped)")]
    #[clap(value_name = "FASTA")]
    #[arg(value_parser = check_file_exists)]
    pub msa_path: Option<PathBuf>,

    #[clap(short = 's')]
    #[clap(long = "scores")]
    #[clap(help = "File with precomputed per-position entropy values")]
    #[clap(value_name = "SCORES")]
    #[arg(value_parser = check_file_exists)]
    pub scores_path: Option<PathBuf>,

    #[clap(required = true)]
    #[clap(short = 'o')]
    #[clap(long = "image")]
    #[clap(help = "Output image path")]
    #[clap(value_name = "IMAGE")]
    #[arg(value_parser = check_image_path)]
    pub output_path: String,

    #[clap(help_heading("Plotting"))]
    #[clap(long = "indices")]
    #[clap(help = "File with one residue number per position")]
    #[clap(value_name = "INDICES")]
    #[arg(value_parser = check_file_exists)]
    pub indices_path: Option<PathBuf>,

    #[clap(help_heading("Plotting"))]
    #[clap(long = "color")]
    #[clap(value_name = "COLOR")]
    #[clap(help = "Bar color (e.g. blue, teal, orange)")]
    #[arg(value_parser = color_from_string)]
    pub color: Option<Color>,

    #[clap(help_heading("Plotting"))]
    #[clap(long = "title")]
    #[clap(value_name = "TITLE")]
    #[clap(help = "Plot title")]
    pub title: Option<String>,

    #[clap(help_heading("Advanced"))]
    #[clap(long = "keep-gaps")]
    #[clap(conflicts_with = "scores_path")]
    #[clap(help = "Count gaps as a symbol instead of omitting them")]
    pub keep_gaps: bool,
}

#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("input").required(true).args(["msa_path", "matrix_path"])))]
#[command(arg_required_else_help(true))]
pub struct MutinfoArgs {
    #[clap(short = 'm')]
    #[clap(long = "msa")]
    #[clap(help = "Aligned FASTA file (optionally gzipped)")]
    #[clap(value_name = "FASTA")]
    #[arg(value_parser = check_file_exists)]
    pub msa_path: Option<PathBuf>,

    #[clap(short = 'x')]
    #[clap(long = "matrix")]
    #[clap(help = "File with a precomputed mutual information matrix")]
    #[clap(value_name = "MATRIX")]
    #[arg(value_parser = check_file_exists)]
    pub matrix_path: Option<PathBuf>,

    #[clap(required = true)]
    #[clap(short = 'o')]
    #[clap(long = "image")]
    #[clap(help = "Output image path")]
    #[clap(value_name = "IMAGE")]
    #[arg(value_parser = check_image_path)]
    pub output_path: String,

    #[clap(help_heading("Plotting"))]
    #[clap(long = "interpolation")]
    #[clap(value_name = "INTERPOLATION")]
    #[clap(help = "Cell interpolation (nearest or smooth)")]
    #[arg(value_parser = interpolation_from_string)]
    pub interpolation: Option<Interpolation>,

    #[clap(help_heading("Plotting"))]
    #[clap(long = "origin")]
    #[clap(value_name = "ORIGIN")]
    #[clap(help = "Matrix origin placement (lower or upper)")]
    #[arg(value_parser = origin_from_string)]
    pub origin: Option<Origin>,

    #[clap(help_heading("Plotting"))]
    #[clap(long = "title")]
    #[clap(value_name = "TITLE")]
    #[clap(help = "Plot title")]
    pub title: Option<String>,

    #[clap(help_heading("Advanced"))]
    #[clap(long = "apc")]
    #[clap(help = "Apply the average product correction to the matrix")]
    pub apc: bool,
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
                Level::Error => style.set_color(LogColor::Red),
                Level::Warn => style.set_color(LogColor::Yellow),
                Level::Info => style.set_color(LogColor::Green),
                Level::Debug => style.set_color(LogColor::Blue),
                Level::Trace => style.set_color(LogColor::Cyan),
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

fn check_prefix_path(s: &str) -> Result<String> {
    let path = Path::new(s);
    if let Some(parent_dir) = path.parent() {
        if !parent_dir.as_os_str().is_empty() && !parent_dir.exists() {
            return Err(format!("Path does not exist: {}", parent_dir.display()));
        }
    }
    Ok(s.to_string())
}

fn check_image_path(s: &str) -> Result<String> {
    let prefix_check = check_prefix_path(s)?;
    let path = Path::new(s);
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("svg") | Some("png") | Some("pdf") => Ok(prefix_check),
        _ => Err("Image must have an extension of .svg, .png, or .pdf".to_string()),
    }
}

fn check_file_exists(s: &str) -> Result<PathBuf> {
    let path = Path::new(s);
    if !path.exists() {
        Err(format!("File does not exist: {}", path.display()))
    } else {
        Ok(path.to_path_buf())
    }
}

fn color_from_string(s: &str) -> Result<Color> {
    s.parse()
}

fn interpolation_from_string(s: &str) -> Result<Interpolation> {
    match s.to_lowercase().as_str() {
        "nearest" => Ok(Interpolation::Nearest),
        "smooth" => Ok(Interpolation::Smooth),
        _ => Err(format!(
            "Interpolation must be 'nearest' or 'smooth', got: {}",
            s
        )),
    }
}

fn origin_from_string(s: &str) -> Result<Origin> {
    match s.to_lowercase().as_str() {
        "lower" => Ok(Origin::Lower),
        "upper" => Ok(Origin::Upper),
        _ => Err(format!("Origin must be 'lower' or 'upper', got: {}", s)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_path_requires_a_known_extension() {
        assert!(check_image_path("plot.svg").is_ok());
        assert!(check_image_path("plot.png").is_ok());
        assert!(check_image_path("plot.pdf").is_ok());
        assert!(check_image_path("plot.jpg").is_err());
        assert!(check_image_path("plot").is_err());
    }

    #[test]
    fn keep_gaps_requires_alignment_input() {
        let dir = tempfile::tempdir().unwrap();
        let scores = dir.path().join("scores.txt");
        std::fs::write(&scores, "0.1 0.2\n").unwrap();
        // Gap handling only applies when entropy is computed from an alignment
        let result = EntropyArgs::try_parse_from([
            "entropy",
            "--scores",
            scores.to_str().unwrap(),
            "--image",
            "out.svg",
            "--keep-gaps",
        ]);
        assert!(result.is_err());

        let msa = dir.path().join("msa.fasta");
        std::fs::write(&msa, ">a\nAR\n").unwrap();
        let result = EntropyArgs::try_parse_from([
            "entropy",
            "--msa",
            msa.to_str().unwrap(),
            "--image",
            "out.svg",
            "--keep-gaps",
        ]);
        assert!(result.is_ok());
    }

    #[test]
    fn interpolation_and_origin_parsers() {
        assert_eq!(
            interpolation_from_string("NEAREST").unwrap(),
            Interpolation::Nearest
        );
        assert!(interpolation_from_string("cubic").is_err());
        assert_eq!(origin_from_string("upper").unwrap(), Origin::Upper);
        assert!(origin_from_string("center").is_err());
    }
}
