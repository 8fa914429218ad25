#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

mod command;

use clap::{Parser, Subcommand};
use command::{
    CommandStrategy, InfoStrategy, InitStrategy, MeaningInput, MeaningStrategy, NormalizeInput,
    NormalizeStrategy, RandomInput, RandomStrategy, RecommendInput, RecommendStrategy,
    StatusInput, StatusStrategy, TokenizeInput, TokenizeStrategy, TrendingInput,
    TrendingStrategy, VersionStrategy,
};
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use whatmeme_core::TrendOrder;

#[derive(Parser)]
#[command(name = "whatmeme")]
#[command(about = "Korean meme lookup and recommendation", long_about = None)]
struct Cli {
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Explain a meme, e.g. `whatmeme meaning 럭키비키 뜻이 뭐야`
    Meaning {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },
    /// Check whether a meme is still trending
    Status {
        #[arg(required = true, num_args = 1..)]
        keyword: Vec<String>,

        /// Post date (YYYYMMDD) of a recent search hit; repeatable
        #[arg(long = "postdate")]
        postdates: Vec<String>,
    },
    /// Recommend memes for a situation
    Recommend {
        #[arg(required = true, num_args = 1..)]
        situation: Vec<String>,
    },
    /// List trending memes
    Trending {
        /// Number of memes to list, 0 for all
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Sort by `rank` or `popularity`
        #[arg(long = "by")]
        order: Option<TrendOrder>,
    },
    /// Show a random meme
    Random,
    /// Show what a question normalizes to
    Normalize {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },
    /// Show the tokens extracted from a situation
    Tokenize {
        #[arg(required = true, num_args = 1..)]
        situation: Vec<String>,
    },
    /// Initialize configuration
    Init,
    /// Show configuration
    Info,
    /// Show version
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();
    let json = cli.json;

    match cli.command {
        Commands::Meaning { query } => {
            MeaningStrategy
                .execute(MeaningInput {
                    query: query.join(" "),
                    json,
                })
                .await
        }
        Commands::Status { keyword, postdates } => {
            StatusStrategy
                .execute(StatusInput {
                    keyword: keyword.join(" "),
                    postdates,
                    json,
                })
                .await
        }
        Commands::Recommend { situation } => {
            RecommendStrategy
                .execute(RecommendInput {
                    situation: situation.join(" "),
                    json,
                })
                .await
        }
        Commands::Trending { limit, order } => {
            TrendingStrategy
                .execute(TrendingInput { limit, order, json })
                .await
        }
        Commands::Random => RandomStrategy.execute(RandomInput { json }).await,
        Commands::Normalize { query } => {
            NormalizeStrategy
                .execute(NormalizeInput {
                    query: query.join(" "),
                    json,
                })
                .await
        }
        Commands::Tokenize { situation } => {
            TokenizeStrategy
                .execute(TokenizeInput {
                    situation: situation.join(" "),
                    json,
                })
                .await
        }
        Commands::Init => InitStrategy.execute(()).await,
        Commands::Info => InfoStrategy.execute(()).await,
        Commands::Version => VersionStrategy.execute(()).await,
    }
}
