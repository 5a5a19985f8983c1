use clap::{Parser, Subcommand};
use gwent_catalog::{config, input, output, tables, transform};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gwent-catalog")]
#[command(about = "Builds the released-only Gwent card catalog")]
#[command(long_about = "\
Builds the released-only Gwent card catalog

The input is a single JSON bundle produced by the extraction step:

  bundle.json
  ├── templates      # card id → raw template (numeric ids, category bitmasks)
  ├── names          # locale → card id → name
  ├── flavor         # locale → card id → flavor text
  ├── tooltips       # locale → card id → tooltip markup
  ├── keywords       # card id → keyword ids
  ├── categories     # locale → category id → display name
  ├── tokens         # card id → related card ids
  ├── artists        # art id → artist credit
  └── armor          # card id → armor value

Pipeline:
  1. Map        every template becomes a card (labels, categories, text, art URLs)
  2. Propagate  released cards pull in the tokens they summon
  3. Prune      unreleased cards drop out of the published catalog

The catalog is written as pretty-printed JSON keyed by card id. Art URLs are
built from the configured template and patch; run 'gwent-catalog gen-config'
to generate a documented catalog.toml.")]
#[command(version)]
struct Cli {
    /// Input data bundle
    #[arg(long, default_value = "bundle.json", global = true)]
    bundle: PathBuf,

    /// Output catalog file
    #[arg(long, default_value = "catalog.json", global = true)]
    output: PathBuf,

    /// Config file (values below override it)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Game patch for art URLs, e.g. 13.2
    #[arg(long, global = true)]
    patch: Option<String>,

    /// Art URL template with {patch}/{cardId}/{variationId}/{size}/{artId}
    #[arg(long, global = true)]
    image_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the full pipeline and write the catalog
    Build,
    /// Run the pipeline without writing, to validate bundle and config
    Check,
    /// Print a stock catalog.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            let config =
                config::resolve_config(cli.config.as_deref(), cli.patch, cli.image_url)?;
            let tables = tables::GameTables::default();

            println!("==> Loading {}", cli.bundle.display());
            let bundle = input::DataBundle::load(&cli.bundle)?;

            println!("==> Transforming {} templates", bundle.templates.len());
            let (catalog, report) = transform::build_catalog(&bundle, &tables, &config)?;

            println!("==> Writing {}", cli.output.display());
            output::write_catalog(&cli.output, &catalog)?;

            output::print_build_summary(&report);
            println!("==> Catalog complete: {}", cli.output.display());
        }
        Command::Check => {
            let config =
                config::resolve_config(cli.config.as_deref(), cli.patch, cli.image_url)?;
            let tables = tables::GameTables::default();

            println!("==> Checking {}", cli.bundle.display());
            let bundle = input::DataBundle::load(&cli.bundle)?;
            let (_, report) = transform::build_catalog(&bundle, &tables, &config)?;

            output::print_build_summary(&report);
            println!("==> Bundle is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
