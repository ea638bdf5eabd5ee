// Generation client: schema definitions, prompt templates, and the typed
// analyze / cover letter / interview question calls.
// All model calls go through llm_client, never the provider directly.

pub mod generator;
pub mod prompts;
pub mod schema;
