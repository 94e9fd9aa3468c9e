pub mod entity;
pub mod invariants;

pub use entity::TranslationWorkflow;
pub use invariants::validate_workflow;
