use chrono::Local;
use whatmeme_query::{StatusVerdict, TrendStatus, check_status};

#[derive(Debug, Clone)]
pub struct StatusInput {
    pub keyword: String,
    /// `YYYYMMDD` dates of recent posts mentioning the keyword.
    pub postdates: Vec<String>,
    pub json: bool,
}

/// Strategy for "is this meme still trending" questions.
///
/// Post dates come from an external search client; this command only
/// classifies them.
///
/// # Design
/// - Static dispatch: All method calls are monomorphized
/// - Stateless: All input via `StatusInput`
#[derive(Debug, Clone, Copy)]
pub struct StatusStrategy;

impl super::CommandStrategy for StatusStrategy {
    type Input = StatusInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let ctx = super::CatalogContext::open()?;
        let catalog = ctx.store.snapshot();
        let today = Local::now().date_naive();

        let verdict = check_status(
            &catalog,
            &input.keyword,
            &input.postdates,
            today,
            ctx.config.status,
        );

        if input.json {
            return super::print_json(&verdict);
        }

        match verdict {
            StatusVerdict::Catalog { meme } => {
                println!(
                    "{}: 지금 유행 중인 밈이에요 (트렌드 {}위)",
                    meme.name, meme.trend_rank
                );
            }
            StatusVerdict::Evidence {
                keyword,
                total: 0,
                ..
            } => {
                println!("{keyword}: 최근 게시물 정보가 없어 판단할 수 없어요.");
            }
            StatusVerdict::Evidence {
                keyword,
                recent_percent,
                total,
                status,
            } => {
                let verdict = match status {
                    TrendStatus::Hot => "아직 핫해요",
                    TrendStatus::Steady => "꾸준히 쓰이고 있어요",
                    TrendStatus::Faded => "유행이 지났어요",
                };
                println!("{keyword}: {verdict} (게시물 {total}개 중 최근 한 달 {recent_percent}%)");
            }
        }
        Ok(())
    }
}
