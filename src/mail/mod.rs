pub mod address;
pub mod compose;
pub mod gateway;
pub mod types;

pub use compose::{ComposeDraft, ValidationResult, validate_draft};
pub use gateway::EmailGateway;
pub use types::EmailRecord;
