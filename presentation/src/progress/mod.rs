//! Progress indicators shown while the model is answering

pub mod reporter;
