use clap::{Parser, Subcommand};
use docnav::{config, output, scan, types::NavStats};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "docnav", version)]
#[command(about = "Derive a documentation site's navigation menu from its source folders")]
#[command(long_about = "\
Derive a documentation site's navigation menu from its source folders

Folders become menu groups, markdown files become entries. A folder's
README.md is its landing page rather than an entry, and folders without
any documents are left out.

Source structure:

  docs/src/
  ├── nav.toml             # Optional: conventions and group labels/icons
  ├── README.md            # Site landing page (not listed)
  ├── intro.md             # → \"intro\"
  ├── .vuepress/           # Hidden, ignored
  └── guide/               # → group \"guide\", prefix guide/
      ├── README.md        # Group landing page (sets link)
      ├── install.md       # → \"install\"
      └── crypto/          # → nested group, prefix guide/crypto/
          └── hash.md

Run 'docnav gen-config' to print a documented nav.toml.")]
struct Cli {
    /// Documentation source directory
    #[arg(long, default_value = "docs/src", global = true)]
    source: PathBuf,

    /// Enable debug logging (otherwise RUST_LOG applies)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the navigation tree
    Show,
    /// Print the navigation tree as sidebar JSON
    Json {
        /// Indent the output
        #[arg(long)]
        pretty: bool,
    },
    /// Validate the source directory and config without printing the tree
    Check,
    /// Print a stock nav.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Show => {
            let (_, nav) = scan::load_and_build(&cli.source)?;
            output::print_nav_tree(&nav);
        }
        Command::Json { pretty } => {
            let (_, nav) = scan::load_and_build(&cli.source)?;
            let json = if pretty {
                serde_json::to_string_pretty(&nav)?
            } else {
                serde_json::to_string(&nav)?
            };
            println!("{json}");
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let (_, nav) = scan::load_and_build(&cli.source)?;
            println!("{}", output::format_summary(&NavStats::collect(&nav)));
            println!("==> Source is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
