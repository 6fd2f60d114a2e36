use bundle_compare::cmd::{self, CompareOptions};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use std::process;

/// Bundle size comparison
///
/// bundle-compare reads two bundler stats files (webpack --json), matches
/// artifacts by chunk name and reports which ones grew, shrank, appeared or
/// disappeared.
#[derive(Parser)]
#[command(author, version, about = "Bundle size comparison", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Disable emoji output (useful for CI/CD or accessibility)
    #[arg(long, global = true)]
    no_emoji: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two stats manifests and write an HTML report
    Compare {
        /// Stats file of the baseline build
        old: String,

        /// Stats file of the build to check
        new: String,

        /// Directory to write index.html to [default: compare/]
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Custom HTML report template
        #[arg(long, value_name = "FILE")]
        template: Option<PathBuf>,

        /// Percent change below which an artifact counts as unchanged [default: 5]
        #[arg(long, value_name = "PCT")]
        threshold: Option<f64>,

        /// Output as JSON (for CI/CD integration)
        #[arg(long)]
        json: bool,

        /// Exit with an error if any artifact grew past the threshold
        #[arg(long)]
        check: bool,
    },

    /// Initialize bundle-compare configuration
    Init,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    // Initialize logger (use RUST_LOG env var to control verbosity)
    env_logger::init();

    let cli = Cli::parse();

    // Set console emoji mode based on CLI flag
    if cli.no_emoji {
        std::env::set_var("NO_EMOJI", "1");
    }

    let result = match cli.command {
        Some(Commands::Compare {
            old,
            new,
            output,
            template,
            threshold,
            json,
            check,
        }) => {
            let options = CompareOptions {
                output_dir: output,
                template,
                threshold_percent: threshold,
                json,
                check,
            };
            cmd::cmd_compare(&old, &new, &options)
        }
        Some(Commands::Init) => cmd::cmd_init(),
        Some(Commands::Completions { shell }) => {
            cmd::cmd_completions(&mut Cli::command(), shell);
            Ok(())
        }
        None => {
            // No subcommand provided, show help
            println!("bundle-compare v{}", env!("CARGO_PKG_VERSION"));
            println!("Bundle size comparison\n");
            println!("Usage: bundle-compare <COMMAND>\n");
            println!("Commands:");
            println!("  compare      Compare two stats manifests and write an HTML report");
            println!("  init         Initialize bundle-compare configuration");
            println!("  completions  Generate shell completions");
            println!("\nRun 'bundle-compare <COMMAND> --help' for more information on a command.");
            Ok(())
        }
    };

    if let Err(e) = result {
        use bundle_compare::error::ErrorFormatter;
        eprintln!("{}", ErrorFormatter::format(&e));
        let exit_code = ErrorFormatter::exit_code(&e);
        process::exit(exit_code);
    }
}
