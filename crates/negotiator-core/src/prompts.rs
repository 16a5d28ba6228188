//! Prompt templates for the two model calls.
//!
//! Both operations send a single flat prompt string; there is no
//! conversation state. The extraction instruction pins the wire format the
//! parser expects (`task` / `time_min` / `energy`).

use indoc::{formatdoc, indoc};

use crate::task::UserEnergy;

/// Fixed instruction prepended to the brain-dump text.
pub const EXTRACT_INSTRUCTION: &str = indoc! {r#"
    You are a task extractor for a focus assistant.
    Analyze the input text and output a JSON list of tasks.
    Each task must have:
    - "task": The task name (be concise)
    - "time_min": Estimated minutes (integer)
    - "energy": Energy level (Low, Neutral, High)

    Return ONLY raw JSON.
"#};

/// Build the extraction prompt for one brain dump.
///
/// Every tier of the cascade receives this exact string.
pub fn extraction_prompt(text: &str) -> String {
    format!("{EXTRACT_INSTRUCTION}\n{text}")
}

/// Build the recommendation prompt from the serialized task list and the
/// user's constraints.
pub fn recommendation_prompt(
    tasks_json: &str,
    time_budget_min: u32,
    energy: UserEnergy,
) -> String {
    formatdoc! {r#"
        Context: {tasks_json}
        User constraint: {time_budget_min} minutes available, {energy} energy level.

        Pick the SINGLE most logical task to do right now.
        Explain why in a clear, minimal, and encouraging tone.
        Use short headings and bullet points if they help.
    "#}
}
