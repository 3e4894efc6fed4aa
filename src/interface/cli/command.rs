//! CLI 명령 파싱 모듈.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::request::{ConvertOptions, ExtentsOptions};

#[derive(Debug, Parser)]
#[command(name = "qli2svg", version)]
#[command(about = "QLI File Parser and SVG Conversion Tool")]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Suppress progress output on stderr
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Convert a QLI program to SVG
    Convert {
        /// QLI program path, or `-` for stdin
        input: String,

        /// SVG output path (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output parameters: oncolor|offcolor|line_width|margin|width|borders
        #[arg(short, long)]
        params: Option<String>,

        /// Output bit that drives the needle (SB/CB)
        #[arg(long)]
        needle_bit: Option<u32>,
    },
    /// Print the extents of a QLI program as JSON
    Extents {
        /// QLI program path, or `-` for stdin
        input: String,

        /// Output bit that drives the needle (SB/CB)
        #[arg(long)]
        needle_bit: Option<u32>,
    },
    /// Describe the fields accepted by --params
    Params,
    /// Show effective merged config
    Config,
}

pub enum CliAction {
    Convert(ConvertOptions),
    Extents(ExtentsOptions),
    DescribeParams,
    InspectConfig,
}

/// 파싱된 동작과 공통 플래그.
pub struct CliInvocation {
    pub action: CliAction,
    pub quiet: bool,
}

impl Cli {
    pub fn parse_action() -> CliInvocation {
        Cli::parse().into_invocation()
    }

    fn into_invocation(self) -> CliInvocation {
        let action = match self.command {
            Commands::Convert {
                input,
                output,
                params,
                needle_bit,
            } => CliAction::Convert(ConvertOptions {
                input,
                output,
                params,
                needle_bit,
            }),
            Commands::Extents { input, needle_bit } => {
                CliAction::Extents(ExtentsOptions { input, needle_bit })
            }
            Commands::Params => CliAction::DescribeParams,
            Commands::Config => CliAction::InspectConfig,
        };

        CliInvocation {
            action,
            quiet: self.quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invocation(args: &[&str]) -> CliInvocation {
        Cli::try_parse_from(args).unwrap().into_invocation()
    }

    #[test]
    fn convert_collects_options() {
        let inv = invocation(&[
            "qli2svg",
            "convert",
            "in.qli",
            "-o",
            "out.svg",
            "--params",
            "green|red",
            "--needle-bit",
            "3",
            "-q",
        ]);
        assert!(inv.quiet);
        let CliAction::Convert(options) = inv.action else {
            panic!("expected convert");
        };
        assert_eq!(options.input, "in.qli");
        assert_eq!(options.output, Some(PathBuf::from("out.svg")));
        assert_eq!(options.params.as_deref(), Some("green|red"));
        assert_eq!(options.needle_bit, Some(3));
    }

    #[test]
    fn extents_accepts_stdin_marker() {
        let inv = invocation(&["qli2svg", "extents", "-"]);
        let CliAction::Extents(options) = inv.action else {
            panic!("expected extents");
        };
        assert_eq!(options.input, "-");
        assert!(!inv.quiet);
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["qli2svg"]).is_err());
    }
}
