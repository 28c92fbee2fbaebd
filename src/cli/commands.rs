use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::descriptor::{load_descriptor, Paths};
use crate::generator::ApiDocGenerator;

/// Command-line interface for the apidoc documentation generator.
#[derive(Parser)]
#[command(name = "apidoc-gen")]
#[command(about = "AsciiDoc documentation generator for API descriptors", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Generate AsciiDoc documentation from an API descriptor
    Generate {
        /// Path to the API descriptor file (YAML or JSON)
        #[arg(short, long)]
        descriptor: PathBuf,

        /// Output directory for generated documents (created if absent)
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Load and validate an API descriptor without generating files
    Check {
        /// Path to the API descriptor file (YAML or JSON)
        #[arg(short, long)]
        descriptor: PathBuf,
    },
}

/// Execute the CLI command provided by the user
///
/// # Errors
///
/// Returns an error if:
/// - The descriptor cannot be read, parsed, or validated
/// - The output directory cannot be used
/// - Document generation fails
pub fn run_cli() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    match &cli.command {
        Commands::Generate { descriptor, output } => {
            let api = load_descriptor(descriptor)?;
            let generator = ApiDocGenerator::new(output.as_path())?;
            generator.execute(&api)?;
            println!(
                "✅ Generated documentation for `{}` in {}",
                api.id(),
                output.display()
            );
            Ok(())
        }
        Commands::Check { descriptor } => {
            let api = load_descriptor(descriptor)?;
            let path_count = api.paths().map_or(0, Paths::len);
            let definition_count = api.definitions().map_or(0, |definitions| definitions.len());
            let error_count = api.errors().map_or(0, |errors| errors.len());
            println!(
                "✅ `{}` is valid: {} paths, {} definitions, {} errors",
                api.id(),
                path_count,
                definition_count,
                error_count
            );
            Ok(())
        }
    }
}
