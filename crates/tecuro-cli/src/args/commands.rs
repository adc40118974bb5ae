use crate::types::FeaturedKind;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Filter, sort and group the product catalog")]
    Browse {
        /// Page path the URL is built on (defaults to `default_path` from config)
        #[arg(long)]
        path: Option<String>,

        /// Starting query string, e.g. "c=acne&sort=pop"
        #[arg(long)]
        query: Option<String>,

        /// Concern to select; repeatable, any one must match
        #[arg(long = "concern")]
        concerns: Vec<String>,

        /// Trait to require; repeatable, all must hold
        #[arg(long = "trait")]
        traits: Vec<String>,

        #[arg(long)]
        sort: Option<String>,

        /// Print the rendered markup instead of the grouped listing
        #[arg(long)]
        markup: bool,
    },

    #[command(about = "Show the featured products or suits of the landing page")]
    Featured {
        #[arg(value_enum)]
        kind: FeaturedKind,

        #[arg(long)]
        limit: Option<usize>,
    },

    #[command(about = "Search the ingredient glossary")]
    Glossary {
        /// Search text; omit to list every ingredient
        query: Option<String>,
    },

    #[command(about = "Validate a newsletter signup")]
    Subscribe {
        #[arg(long)]
        email: String,

        /// Agree to receive emails
        #[arg(long)]
        consent: bool,
    },
}
