use whatmeme_config::Config;
use whatmeme_query::WEIGHTS_VERSION;

/// Strategy for displaying configuration information.
///
/// This strategy outputs:
/// - Config file location and whether it exists
/// - Catalog source and size
/// - Scoring weights, trending and status settings
///
/// # Design
/// - Static dispatch: All method calls are monomorphized
/// - Stateless: No internal state
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    type Input = ();

    async fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        let config_path = Config::config_path()?;
        let ctx = super::CatalogContext::open()?;
        let config = &ctx.config;

        println!("=== whatmeme Configuration ===\n");

        println!("Config File:");
        println!("  Path: {}", config_path.display());
        println!(
            "  Status: {}",
            if config_path.exists() {
                "Found"
            } else {
                "Not found (using defaults)"
            }
        );
        println!();

        println!("Catalog:");
        match &config.catalog.path {
            Some(path) => println!("  Source: {}", path.display()),
            None => println!("  Source: built-in"),
        }
        println!("  Memes: {}", ctx.store.snapshot().len());
        println!();

        let weights = &config.recommend.weights;
        println!("Recommendation Weights:");
        println!(
            "  Version: {} (built-in {WEIGHTS_VERSION})",
            weights.version
        );
        println!(
            "  Context: exact {} / partial {} / multi +{}",
            weights.context_exact, weights.context_partial, weights.context_multi_bonus
        );
        println!(
            "  Mood: exact {} / partial {} / variant +{}",
            weights.mood_exact, weights.mood_partial, weights.mood_variant_bonus
        );
        println!(
            "  Example: {} per token / Meaning: {} per token",
            weights.example_token, weights.meaning_token
        );
        println!(
            "  Tag: exact {} / partial {}  Name: {}",
            weights.tag_exact, weights.tag_partial, weights.name_partial
        );
        println!(
            "  Popularity: x{} capped at {}",
            weights.popularity_factor, weights.popularity_cap
        );
        println!(
            "  Cutoff: {} of top score, at most {} results",
            weights.relative_cutoff, weights.max_results
        );
        println!();

        println!("Trending:");
        println!("  Limit: {}", config.trending.limit);
        println!("  Order: {}", config.trending.order.as_str());
        println!();

        println!("Status Thresholds:");
        println!("  Hot: >= {}%", config.status.hot_percent);
        println!("  Steady: >= {}%", config.status.steady_percent);

        Ok(())
    }
}
