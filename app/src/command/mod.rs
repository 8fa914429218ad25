//! Static strategy pattern for CLI commands.
//!
//! Each subcommand is its own strategy type with its own input, dispatched
//! statically from `main`.

use serde::Serialize;
use std::sync::Arc;
use whatmeme_config::Config;
use whatmeme_core::{CatalogStore, MemeRecord};

mod info;
mod init;
mod meaning;
mod normalize;
mod random;
mod recommend;
mod status;
mod tokenize;
mod trending;
mod version;

pub use info::InfoStrategy;
pub use init::InitStrategy;
pub use meaning::{MeaningInput, MeaningStrategy};
pub use normalize::{NormalizeInput, NormalizeStrategy};
pub use random::{RandomInput, RandomStrategy};
pub use recommend::{RecommendInput, RecommendStrategy};
pub use status::{StatusInput, StatusStrategy};
pub use tokenize::{TokenizeInput, TokenizeStrategy};
pub use trending::{TrendingInput, TrendingStrategy};
pub use version::VersionStrategy;

/// Core trait defining the contract for all command strategies.
///
/// # Design Principles
/// - **Static dispatch**: All calls are monomorphized at compile time
/// - **Type safety**: Each strategy defines its own input type via associated type
///
/// # Example
/// ```rust
/// struct MyStrategy;
///
/// impl CommandStrategy for MyStrategy {
///     type Input = MyInput;
///
///     async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
///         // Command logic here
///         Ok(())
///     }
/// }
/// ```
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    async fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}

/// Configuration plus the catalog store built from it.
struct CatalogContext {
    config: Config,
    store: CatalogStore,
}

impl CatalogContext {
    fn open() -> anyhow::Result<Self> {
        let config = Config::load()?;
        let store = config.open_store()?;
        Ok(Self { config, store })
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_meme(meme: &Arc<MemeRecord>) {
    println!("{}", meme.name);
    if !meme.aliases.is_empty() {
        println!("  별칭: {}", meme.aliases.join(", "));
    }
    println!("  뜻: {}", meme.meaning);
    if !meme.origin.is_empty() {
        println!("  유래: {}", meme.origin);
    }
    if !meme.examples.is_empty() {
        println!("  예시:");
        for example in &meme.examples {
            println!("    - {example}");
        }
    }
    if !meme.tags.is_empty() {
        println!("  태그: {}", meme.tags.join(", "));
    }
    println!(
        "  트렌드 순위: {}  인기도: {}  업데이트: {}",
        meme.trend_rank, meme.popularity, meme.updated_at
    );
}
