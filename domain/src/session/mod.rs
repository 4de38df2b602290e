//! Chat messages exchanged with the completion service

pub mod entities;
