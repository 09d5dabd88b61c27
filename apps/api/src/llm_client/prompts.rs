// Shared prompt fragments. Each feature that calls the provider keeps its own
// prompts.rs alongside it and pulls cross-cutting fragments from here.

/// Closing instruction for prompts whose reply must be a bare JSON object.
pub const JSON_ONLY_INSTRUCTION: &str = "Respond with valid JSON only, no additional text.";
