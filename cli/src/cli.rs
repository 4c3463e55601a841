// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, io, path::PathBuf};

use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use futures::{FutureExt, future::BoxFuture};
use impact_brief_core::{APP_NAME, Config};
use tracing_subscriber::EnvFilter;

use crate::cmd_charts::CmdCharts;
use crate::cmd_dashboard::CmdDashboard;
use crate::cmd_generate_completion::CmdGenerateCompletion;
use crate::cmd_timeline::CmdTimeline;
use crate::cmd_tui::CmdTui;
use crate::config::parse_config;

/// Run the brief command-line interface.
pub async fn run() -> Result<(), Box<dyn Error>> {
    match Cli::parse() {
        Ok(cli) => {
            if let Err(e) = cli.run().await {
                println!("{} {}", "Error:".red(), e);
            }
        }
        Err(e) => println!("{} {}", "Error:".red(), e),
    };
    Ok(())
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// Force debug logging
    pub debug: bool,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("360 Impact Brief, the executive intelligence dashboard for your terminal.")
            .author("Zexin Yuan <aim@yzx9.xyz>")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(false) // allow default to dashboard
            .arg_required_else_help(false)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $XDG_CONFIG_HOME/brief/config.toml on Linux and \
MacOS, %LOCALAPPDATA%/brief/config.toml on Windows. The dashboard runs on built-in data when \
no config file exists.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .arg(arg!(--debug "Force debug logging"))
            .subcommand(CmdDashboard::command())
            .subcommand(CmdTimeline::command())
            .subcommand(CmdCharts::command())
            .subcommand(CmdTui::command())
            .subcommand(CmdGenerateCompletion::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::*;
        let command = match matches.subcommand() {
            Some((CmdDashboard::NAME, matches)) => Dashboard(CmdDashboard::from(matches)),
            Some((CmdTimeline::NAME, matches)) => Timeline(CmdTimeline::from(matches)),
            Some((CmdCharts::NAME, matches)) => Charts(CmdCharts::from(matches)),
            Some((CmdTui::NAME, matches)) => Tui(CmdTui::from(matches)),
            Some((CmdGenerateCompletion::NAME, matches)) => {
                GenerateCompletion(CmdGenerateCompletion::from(matches))
            }
            None => Dashboard(CmdDashboard),
            _ => unreachable!(),
        };

        let config = matches.get_one("config").cloned();
        let debug = matches.get_flag("debug");
        Ok(Cli {
            config,
            debug,
            command,
        })
    }

    /// Run the command
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config, self.debug).await
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// Show the dashboard
    Dashboard(CmdDashboard),

    /// Show the timeline of upcoming events
    Timeline(CmdTimeline),

    /// Show the chart catalog
    Charts(CmdCharts),

    /// Open the full-screen dashboard
    Tui(CmdTui),

    /// Generate shell completion
    GenerateCompletion(CmdGenerateCompletion),
}

impl Commands {
    /// Run the command with the given configuration
    #[rustfmt::skip]
    pub async fn run(self, config: Option<PathBuf>, debug: bool) -> Result<(), Box<dyn Error>> {
        use Commands::*;
        match self {
            Dashboard(a) => Self::run_with(config, debug, |x| a.run(x).boxed()).await,
            Timeline(a)  => Self::run_with(config, debug, |x| a.run(x).boxed()).await,
            Charts(a)    => Self::run_with(config, debug, |x| a.run(x).boxed()).await,
            Tui(a)       => Self::run_with(config, debug, |x| a.run(x).boxed()).await,
            GenerateCompletion(a) => a.run(),
        }
    }

    async fn run_with<F>(
        config: Option<PathBuf>,
        debug: bool,
        f: F,
    ) -> Result<(), Box<dyn Error>>
    where
        F: for<'a> FnOnce(&'a Config) -> BoxFuture<'a, Result<(), Box<dyn Error>>>,
    {
        let config = parse_config(config).await?;
        init_logging(debug || config.debug);

        f(&config).await
    }
}

/// Initialize the tracing subscriber. `RUST_LOG` wins when set; otherwise
/// debug mode logs everything and normal mode logs errors only.
fn init_logging(debug: bool) {
    let filter = if std::env::var(EnvFilter::DEFAULT_ENV).is_ok() {
        EnvFilter::from_default_env()
    } else if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("error")
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cmd_generate_completion::Shell;
    use crate::util::ArgOutputFormat;
    use impact_brief_core::TimelineView;

    #[test]
    fn test_parse_config() {
        let cli = Cli::try_parse_from(vec!["test", "-c", "/tmp/config.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/config.toml")));
        assert!(matches!(cli.command, Commands::Dashboard(_)));
    }

    #[test]
    fn test_parse_debug_flag() {
        let cli = Cli::try_parse_from(vec!["test", "--debug"]).unwrap();
        assert!(cli.debug);

        let cli = Cli::try_parse_from(vec!["test"]).unwrap();
        assert!(!cli.debug);
    }

    #[test]
    fn test_parse_default_dashboard() {
        let cli = Cli::try_parse_from(vec!["test"]).unwrap();
        assert!(matches!(cli.command, Commands::Dashboard(_)));
    }

    #[test]
    fn test_parse_dashboard() {
        let cli = Cli::try_parse_from(vec!["test", "dashboard"]).unwrap();
        assert!(matches!(cli.command, Commands::Dashboard(_)));
    }

    #[test]
    fn test_parse_timeline_default_view() {
        let cli = Cli::try_parse_from(vec!["test", "timeline"]).unwrap();
        match cli.command {
            Commands::Timeline(cmd) => {
                assert_eq!(cmd.view, TimelineView::Week);
                assert_eq!(cmd.output_format, ArgOutputFormat::Table);
            }
            _ => panic!("Expected Timeline command"),
        }
    }

    #[test]
    fn test_parse_timeline_twoweeks() {
        let args = vec!["test", "timeline", "--view", "twoweeks"];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Commands::Timeline(cmd) => assert_eq!(cmd.view, TimelineView::TwoWeeks),
            _ => panic!("Expected Timeline command"),
        }
    }

    #[test]
    fn test_parse_timeline_rejects_unknown_view() {
        let args = vec!["test", "timeline", "--view", "month"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_parse_charts_json() {
        let args = vec!["test", "charts", "--output-format", "json"];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Commands::Charts(cmd) => assert_eq!(cmd.output_format, ArgOutputFormat::Json),
            _ => panic!("Expected Charts command"),
        }
    }

    #[test]
    fn test_parse_tui() {
        let cli = Cli::try_parse_from(vec!["test", "tui"]).unwrap();
        assert!(matches!(cli.command, Commands::Tui(_)));
    }

    #[test]
    fn test_parse_generate_completions() {
        let args = vec!["test", "generate-completion", "zsh"];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Commands::GenerateCompletion(cmd) => {
                assert_eq!(cmd.shell, Shell::Zsh);
            }
            _ => panic!("Expected GenerateCompletion command"),
        }
    }
}
