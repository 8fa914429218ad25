use whatmeme_query::{RecommendOutcome, RecommendationEngine};

#[derive(Debug, Clone)]
pub struct RecommendInput {
    /// Situation sentence such as "퇴근하고 싶을 때 밈 추천해줘".
    pub situation: String,
    pub json: bool,
}

/// Strategy for situation-based recommendations.
///
/// Uses the scoring weights from the loaded configuration.
///
/// # Design
/// - Static dispatch: All method calls are monomorphized
/// - Stateless: All input via `RecommendInput`
#[derive(Debug, Clone, Copy)]
pub struct RecommendStrategy;

impl super::CommandStrategy for RecommendStrategy {
    type Input = RecommendInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let ctx = super::CatalogContext::open()?;
        let catalog = ctx.store.snapshot();
        let engine = RecommendationEngine::new(ctx.config.recommend.weights);
        let outcome = engine.recommend(&catalog, &input.situation);

        if input.json {
            return super::print_json(&outcome);
        }

        match &outcome {
            RecommendOutcome::TooVague => {
                println!("상황을 조금 더 구체적으로 알려주세요. 예: \"퇴근하고 싶을 때\"");
            }
            RecommendOutcome::NoMatch { tokens } => {
                println!("'{}'에 어울리는 밈을 찾지 못했어요.", tokens.join(" "));
            }
            RecommendOutcome::Matched {
                recommendations, ..
            } => {
                for (i, rec) in recommendations.iter().enumerate() {
                    println!(
                        "{}. {} ({:.1}점) - {}",
                        i + 1,
                        rec.meme.name,
                        rec.score,
                        rec.meme.meaning
                    );
                    println!("   매칭: {}", rec.matched_tokens.join(", "));
                }
            }
        }
        Ok(())
    }
}
