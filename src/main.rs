use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand};
use visa_desk::core::catalog::{EntryType, ProductQuery};
use visa_desk::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args)]
struct ProductFilters {
    /// Case-insensitive match on the country name
    #[arg(long)]
    country: Option<String>,

    /// Case-insensitive match on the visa type
    #[arg(long)]
    visa_type: Option<String>,

    #[arg(long)]
    min_price: Option<f64>,

    #[arg(long)]
    max_price: Option<f64>,

    /// Single or Multiple
    #[arg(long)]
    entries: Option<EntryType>,

    #[arg(long)]
    page: Option<u32>,

    #[arg(long)]
    limit: Option<u32>,
}

impl From<ProductFilters> for ProductQuery {
    fn from(filters: ProductFilters) -> ProductQuery {
        ProductQuery {
            page: filters.page,
            limit: filters.limit,
            country: filters.country,
            visa_type: filters.visa_type,
            min_price: filters.min_price,
            max_price: filters.max_price,
            number_of_entries: filters.entries,
        }
    }
}

impl From<Commands> for visa_desk::AppCommand {
    fn from(cmd: Commands) -> visa_desk::AppCommand {
        match cmd {
            Commands::Serve => visa_desk::AppCommand::Serve,
            Commands::Convert { amount, from, to } => {
                visa_desk::AppCommand::Convert { amount, from, to }
            }
            Commands::Currencies => visa_desk::AppCommand::Currencies,
            Commands::Products(filters) => visa_desk::AppCommand::Products(filters.into()),
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Run the HTTP API
    Serve,
    /// Convert an amount from the base currency
    Convert {
        #[arg(allow_hyphen_values = true)]
        amount: String,
        from: String,
        to: String,
    },
    /// List currencies offered for display
    Currencies,
    /// Browse the visa product catalog
    Products(ProductFilters),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => visa_desk::cli::setup::setup(),
        Some(cmd) => visa_desk::run_command(cmd.into(), cli.config_path.as_deref()).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
