use serde_json::json;
use whatmeme_query::tokenize_situation;

#[derive(Debug, Clone)]
pub struct TokenizeInput {
    pub situation: String,
    pub json: bool,
}

/// Strategy for showing the meaning tokens of a situation sentence.
///
/// # Design
/// - Static dispatch: All method calls are monomorphized
/// - Stateless: All input via `TokenizeInput`
#[derive(Debug, Clone, Copy)]
pub struct TokenizeStrategy;

impl super::CommandStrategy for TokenizeStrategy {
    type Input = TokenizeInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let tokens = tokenize_situation(&input.situation);

        if input.json {
            return super::print_json(&json!({
                "input": input.situation,
                "tokens": tokens,
            }));
        }

        if tokens.is_empty() {
            println!("(no tokens)");
        } else {
            println!("{}", tokens.join(" | "));
        }
        Ok(())
    }
}
