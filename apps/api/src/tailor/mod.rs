// Application tailoring: prompt building, the provider round-trip, and
// extraction of the structured reply. Provider calls go through llm_client only.

pub mod extractor;
pub mod generator;
pub mod handlers;
pub mod models;
pub mod prompts;
