//! AI drafting pipeline
//!
//! Classifies a free-text brief into an assistant persona, then drafts a
//! subject and body under that persona's prompt template. Both phases call
//! the structured-output completion service.

mod classifier;
mod client;
mod drafter;
mod orchestrator;
mod persona;
mod prompts;

pub use classifier::AssistantClassifier;
pub use client::CompletionClient;
pub use drafter::{DraftedEmail, EmailDrafter};
pub use orchestrator::{AiOrchestrator, GeneratedEmail};
pub use persona::AssistantPersona;
