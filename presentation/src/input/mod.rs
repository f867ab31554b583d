//! Interactive input

pub mod category;
