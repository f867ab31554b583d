//! Use cases
//!
//! - [`classify_question`] — question → label
//! - [`answer_route`] — (route, question) → answer
//! - [`route_question`] — the full classify-then-route chain
//! - [`generate_list`] — category → comma separated list
//! - [`run_demo`] — the fixed demo question sets, run sequentially

pub mod answer_route;
pub mod classify_question;
pub mod generate_list;
pub mod route_question;
pub mod run_demo;
