use whatmeme_core::TrendOrder;

#[derive(Debug, Clone)]
pub struct TrendingInput {
    /// Overrides `trending.limit`; 0 lists everything.
    pub limit: Option<usize>,
    /// Overrides `trending.order`.
    pub order: Option<TrendOrder>,
    pub json: bool,
}

/// Strategy for listing trending memes.
///
/// # Design
/// - Static dispatch: All method calls are monomorphized
/// - Stateless: All input via `TrendingInput`
#[derive(Debug, Clone, Copy)]
pub struct TrendingStrategy;

impl super::CommandStrategy for TrendingStrategy {
    type Input = TrendingInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let ctx = super::CatalogContext::open()?;
        let catalog = ctx.store.snapshot();

        let limit = input.limit.unwrap_or(ctx.config.trending.limit);
        let order = input.order.unwrap_or(ctx.config.trending.order);
        let memes = catalog.trending(limit, order);

        if input.json {
            return super::print_json(&memes);
        }

        println!("=== 요즘 뜨는 밈 (by {}) ===", order.as_str());
        for (i, meme) in memes.iter().enumerate() {
            println!(
                "{:>2}. {}  (순위 {}, 인기도 {})",
                i + 1,
                meme.name,
                meme.trend_rank,
                meme.popularity
            );
        }
        Ok(())
    }
}
