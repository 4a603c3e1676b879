use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tienda")]
#[command(about = "Fetch storefront catalog data from the command line.")]
#[command(version)]
pub struct Cli {
    /// Output the raw envelope as JSON
    #[arg(long)]
    pub json: bool,

    /// Generate config sample
    #[arg(long)]
    pub generate_config: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List product categories
    Categories,
    /// List products, optionally paginated, sorted and filtered
    Products {
        /// Page number
        #[arg(short, long)]
        page: Option<u32>,

        /// Items per page
        #[arg(short = 'i', long)]
        items_per_page: Option<u32>,

        /// Field to sort by
        #[arg(short, long)]
        sort_by: Option<String>,

        /// Sort order: asc or desc
        #[arg(short, long)]
        order_by: Option<String>,

        /// Restrict to a category
        #[arg(short, long)]
        category: Option<String>,

        /// Restrict to a sub-category
        #[arg(long)]
        sub_category: Option<String>,
    },
    /// List the category names used for filter controls
    Filters,
}
