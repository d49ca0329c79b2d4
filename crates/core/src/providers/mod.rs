pub mod parsing;
pub mod prompts;
pub mod traits;

// AI backend implementations
pub mod gemini;
