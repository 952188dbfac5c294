//! Catalogue Config

use clap::{ArgAction, Args};

/// Product catalogue settings.
#[derive(Debug, Args)]
pub struct CatalogueConfig {
    /// Seed the product repository with the demo catalogue (true, false)
    #[arg(long, env = "DEMO_PRODUCTS", action = ArgAction::Set, default_value_t = true)]
    pub demo_products: bool,
}
