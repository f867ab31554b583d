//! Chat messages sent to, and completions received from, the model.

pub mod entities;
pub mod response;
