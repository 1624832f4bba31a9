//! Intensity field synthesis and risk classification.

pub mod field_data;
pub mod risk;
pub mod synthesizer;

pub use field_data::Field;
pub use risk::RiskLevel;
pub use synthesizer::{FieldSynthesizer, Source};
