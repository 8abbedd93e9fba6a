//  ____  ____     __        __    __  __      _
// |  _ \|  _ \ __ \ \      / /__ |  \/  | ___| |_ ___ _ __
// | |_) | |_) / _` \ \/\ / / _ \| |\/| |/ _ \ __/ _ \ '__|
// |  _ <|  __/ (_| |\ V  V / (_) | |  | |  __/ ||  __/ |
// |_| \_\_|   \__,_| \_/\_/ \___/|_|  |_|\___|\__\___|_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2026-10-18
// Version : 0.1.0
// License : Mulan PSL v2
//
// Random password generator and strength meter.

use std::io;
use std::path::{Path, PathBuf};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use rpawometer::commands::config::{reset_config, set_config, show_config};
use rpawometer::commands::interactive::{Session, TerminalPrompter};
use rpawometer::commands::password_gen::{generate_random, resolve_options, toggle_override, GenOverrides};
use rpawometer::commands::testpass::test_password;
use rpawometer::configtool::{resolve_config_path, Settings};
use rpawometer::passgen::PasswordGenerator;

#[derive(Debug, Parser)]
#[command(name = "rpawometer", version)]
#[command(about = "Generate random passwords and measure password strength", long_about = None)]
struct Cli {
    /// Path to the settings file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print debug logs
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate a new random password
    Gen(GenArgs),

    /// Test password strength
    Check(CheckArgs),

    /// Generate and check passwords in an interactive session
    Interactive,

    /// Show or change the saved generator defaults
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Debug, Parser)]
struct GenArgs {
    /// Length of the password
    #[arg(short, long)]
    length: Option<usize>,

    /// Include digits
    #[arg(long, default_value_t = false, conflicts_with = "no_digits")]
    digits: bool,

    /// Exclude digits
    #[arg(long, default_value_t = false)]
    no_digits: bool,

    /// Include special characters
    #[arg(long, default_value_t = false, conflicts_with = "no_special")]
    special: bool,

    /// Exclude special characters
    #[arg(long, default_value_t = false)]
    no_special: bool,

    /// Seed for a reproducible random source (testing only)
    #[arg(long)]
    seed: Option<u64>,

    /// Print the result as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
}

impl From<&GenArgs> for GenOverrides {
    fn from(args: &GenArgs) -> Self {
        Self {
            length: args.length,
            include_digits: toggle_override(args.digits, args.no_digits),
            include_special: toggle_override(args.special, args.no_special),
        }
    }
}

#[derive(Debug, Parser)]
struct CheckArgs {
    /// Password to test; read without echo when omitted
    password: Option<String>,

    /// Print the result as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Debug, Subcommand)]
enum ConfigCommand {
    /// Print the current settings
    Show,

    /// Restore the default settings
    Reset,

    /// Change one or more settings
    Set {
        /// Default password length
        #[arg(short, long)]
        length: Option<usize>,

        /// Include digits by default
        #[arg(long)]
        digits: Option<bool>,

        /// Include special characters by default
        #[arg(long)]
        special: Option<bool>,
    },
}

fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn"),
    );
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

fn load_settings(config: Option<&Path>) -> Result<Settings> {
    let path = resolve_config_path(config)?;
    Settings::load_from(&path)
        .with_context(|| format!("Failed to load settings from {}", path.display()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.config.as_deref();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Gen(args) => {
            let settings = load_settings(config)?;
            let options = resolve_options(&settings, &GenOverrides::from(&args));
            generate_random(&options, args.seed, args.json, &mut out)?;
            Ok(())
        },
        Commands::Check(args) => {
            test_password(args.password, args.json, &mut out)
        },
        Commands::Interactive => {
            let settings = load_settings(config)?;
            let mut session = Session::new(PasswordGenerator::new(), settings.gen_options());
            session.run(&mut TerminalPrompter, &mut out)
        },
        Commands::Config(ConfigCommand::Show) => show_config(&resolve_config_path(config)?, &mut out),
        Commands::Config(ConfigCommand::Reset) => reset_config(&resolve_config_path(config)?, &mut out),
        Commands::Config(ConfigCommand::Set { length, digits, special }) => {
            set_config(&resolve_config_path(config)?, length, digits, special, &mut out)?;
            Ok(())
        },
    }
}
