//! Prompt text sent to the analysis service.

/// Longest code excerpt sent for judgment, in bytes.
pub const MAX_CODE_BYTES: usize = 12_000;

pub const SYSTEM_PROMPT: &str = "You are an expert code analyzer. Given a code snippet, provide a \
concise description of what the code does and rate its complexity on a scale of 1-10, where 1 is \
very simple and 10 is extremely complex. Consider factors like algorithmic complexity, number of \
control structures, and overall cognitive load required to understand the code. Respond with a \
JSON object of the form {\"description\": string, \"complexity\": number}.";

/// Build the user message for one candidate.
#[must_use]
pub fn user_prompt(code: &str, path: &str, language: &str) -> String {
    format!(
        "Analyze this {language} code from the file {path}:\n\n{}\n\nProvide a concise description \
         (1-2 sentences) of what this code does and rate its complexity on a scale of 1-10. If this \
         is a configuration file, initialization code, or extremely simple boilerplate, explicitly \
         rate it lower than 3.",
        truncate(code, MAX_CODE_BYTES)
    )
}

fn truncate(code: &str, max_bytes: usize) -> &str {
    if code.len() <= max_bytes {
        return code;
    }
    let mut end = max_bytes;
    while !code.is_char_boundary(end) {
        end -= 1;
    }
    &code[..end]
}
