use serde_json::json;
use whatmeme_query::normalize_query;

#[derive(Debug, Clone)]
pub struct NormalizeInput {
    pub query: String,
    pub json: bool,
}

/// Strategy for showing what a question normalizes to.
///
/// # Design
/// - Static dispatch: All method calls are monomorphized
/// - Stateless: All input via `NormalizeInput`
#[derive(Debug, Clone, Copy)]
pub struct NormalizeStrategy;

impl super::CommandStrategy for NormalizeStrategy {
    type Input = NormalizeInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let normalized = normalize_query(&input.query);

        if input.json {
            return super::print_json(&json!({
                "input": input.query,
                "normalized": normalized,
            }));
        }

        if normalized.is_empty() {
            println!("(empty)");
        } else {
            println!("{normalized}");
        }
        Ok(())
    }
}
