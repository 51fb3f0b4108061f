//! Startup-idea evaluation: validate, template, delegate to the model.
//!
//! Pure orchestration. The only interesting failure mode is the backend
//! erroring, which is folded into the returned markdown rather than
//! propagated as a fault.

use pc_backend::{ChatModel, ChatSession};
use pc_protocol::Stage;

/// Shown when the user submits an empty or whitespace-only idea.
pub const EMPTY_PROMPT_MESSAGE: &str = "Please enter your startup idea to get an evaluation.";

/// Build the single-turn evaluation instruction around the user's idea.
pub fn build_evaluation_prompt(idea: &str) -> String {
    format!(
        "You are a seasoned startup advisor. Evaluate the following startup idea \
         and respond in markdown with these sections:\n\
         \n\
         1. **Feasibility** — can this be built with current technology?\n\
         2. **Market potential** — who needs it, and how large is the market?\n\
         3. **Build strategy** — how to get to an MVP.\n\
         4. **Cost and team estimate** — rough budget and founding team.\n\
         5. **Risks** — the main ways this fails.\n\
         \n\
         Startup idea: {idea}"
    )
}

/// Evaluate a startup idea with the given model.
///
/// Returns the model's markdown verbatim on success, the fixed
/// prompt-for-input message for blank input (without touching the
/// backend), or a formatted error line if the backend fails at any point.
/// No retry is attempted. Progress is reported through `progress` as the
/// request moves through its stages.
pub async fn evaluate_idea<M, F>(model: &M, idea: &str, mut progress: F) -> String
where
    M: ChatModel + Sync,
    F: FnMut(Stage),
{
    if idea.trim().is_empty() {
        return EMPTY_PROMPT_MESSAGE.to_string();
    }

    progress(Stage::Initializing);
    let mut chat = match model.start_chat().await {
        Ok(chat) => chat,
        Err(e) => return format_error(&e.to_string()),
    };

    progress(Stage::Sending);
    let prompt = build_evaluation_prompt(idea);

    progress(Stage::Waiting);
    let reply = match chat.send_message(&prompt).await {
        Ok(text) => text,
        Err(e) => return format_error(&e.to_string()),
    };

    progress(Stage::Complete);
    reply
}

fn format_error(message: &str) -> String {
    format!("❌ **Error occurred:** {message}")
}
