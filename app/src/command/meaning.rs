use whatmeme_query::{ResolveFailure, ResolveResult, resolve_meme};

#[derive(Debug, Clone)]
pub struct MeaningInput {
    /// Free-form question such as "럭키비키 뜻이 뭐야?"
    pub query: String,
    pub json: bool,
}

/// Strategy for answering "what does this meme mean" questions.
///
/// # Design
/// - Static dispatch: All method calls are monomorphized
/// - Stateless: All input via `MeaningInput`
#[derive(Debug, Clone, Copy)]
pub struct MeaningStrategy;

impl super::CommandStrategy for MeaningStrategy {
    type Input = MeaningInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let ctx = super::CatalogContext::open()?;
        let catalog = ctx.store.snapshot();
        let result = resolve_meme(&catalog, &input.query);

        if input.json {
            return super::print_json(&result);
        }

        match result {
            ResolveResult::Found { meme, .. } => super::print_meme(&meme),
            ResolveResult::Unresolved {
                normalized_query,
                reason: ResolveFailure::NotFound,
            } => println!("'{normalized_query}' 밈은 아직 카탈로그에 없어요."),
            ResolveResult::Unresolved {
                reason: ResolveFailure::Empty,
                ..
            } => println!("질문에서 밈 이름을 찾지 못했어요. 예: \"럭키비키 뜻\""),
        }
        Ok(())
    }
}
