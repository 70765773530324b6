//! Knowledge-based inference: constraints, the knowledge base, and the engine

pub mod constraint;
pub mod engine;
pub mod knowledge;

pub use constraint::Constraint;
pub use engine::InferenceEngine;
pub use knowledge::KnowledgeBase;
