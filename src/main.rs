// Command-line front end over the catalog client library
use clap::Parser;
use colored::Colorize;
use tienda_client::infrastructure::config::{self, load_config};
use tienda_client::interfaces::cli::{Cli, Command};
use tienda_client::presentation::render::render_envelope;
use tienda_client::state::AppState;
use tienda_client::{fetch_categories, fetch_filters, fetch_products, ProductQuery, SortOrder};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config()?;

    // Initialize logging
    if config.logging.enable {
        init_logging(&config.logging)?;
    }

    // Handle commands (flags)
    if cli.generate_config {
        config::generate_config_sample()?;
        return Ok(());
    }

    let Some(command) = cli.command else {
        eprintln!(
            "{}",
            "Please provide a command: categories, products or filters".red()
        );
        std::process::exit(1);
    };

    let state = AppState::new(config)?;

    let envelope = match command {
        Command::Categories => fetch_categories(&state.client).await,
        Command::Products {
            page,
            items_per_page,
            sort_by,
            order_by,
            category,
            sub_category,
        } => {
            let order_by = order_by
                .as_deref()
                .map(str::parse::<SortOrder>)
                .transpose()
                .map_err(|e| anyhow::anyhow!(e))?;
            let query = ProductQuery {
                page,
                items_per_page,
                sort_by,
                order_by,
                selected_category: category,
                selected_sub_category: sub_category,
            };
            fetch_products(&state.client, &query).await
        }
        Command::Filters => fetch_filters(&state.client).await,
    };

    // Output result
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&envelope)?);
    } else {
        print!("{}", render_envelope(&envelope));
    }

    // Non-zero exit when the call failed, so scripts can branch on it
    if envelope.success == Some(false) {
        std::process::exit(1);
    }

    Ok(())
}

/// Initialize logging with path and level configuration
fn init_logging(logging: &config::Logging) -> anyhow::Result<()> {
    use tracing_subscriber::EnvFilter;

    let level = match logging.level.as_str() {
        "DEBUG" => "debug",
        "INFO" => "info",
        "WARN" => "warn",
        "ERROR" => "error",
        _ => "warn",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if let Some(path) = &logging.path {
        if !path.is_empty() {
            // Log to file
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(file)
                .init();
            return Ok(());
        }
    }

    // Log to stderr (default)
    tracing_subscriber::fmt().with_env_filter(filter).init();

    Ok(())
}
