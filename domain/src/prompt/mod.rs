//! Prompt assembly for consultations

pub mod template;

pub use template::PromptTemplate;
