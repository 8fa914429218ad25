use uuid::Uuid;

#[derive(Debug, Clone, Copy)]
pub struct RandomInput {
    pub json: bool,
}

/// Strategy for showing one meme at random.
///
/// The random bits of a v7 UUID seed the pick.
///
/// # Design
/// - Static dispatch: All method calls are monomorphized
/// - Stateless: No internal state
#[derive(Debug, Clone, Copy)]
pub struct RandomStrategy;

impl super::CommandStrategy for RandomStrategy {
    type Input = RandomInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let ctx = super::CatalogContext::open()?;
        let catalog = ctx.store.snapshot();

        let (_, seed) = Uuid::now_v7().as_u64_pair();
        let Some(meme) = catalog.pick(seed) else {
            anyhow::bail!("Catalog is empty");
        };

        if input.json {
            return super::print_json(meme);
        }
        super::print_meme(meme);
        Ok(())
    }
}
