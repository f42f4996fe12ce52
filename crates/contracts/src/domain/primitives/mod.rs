pub mod catalog;
pub mod generation;

pub use catalog::{PrimitiveItem, PrimitiveKind};
pub use generation::{GenerationRequest, GenerationStep, GenerationStepKind};
