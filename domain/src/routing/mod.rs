//! Topic routing
//!
//! The classifier's raw [`label::Label`] is mapped onto a persona
//! [`route::Route`] by a pure, total decision table.

pub mod label;
pub mod route;
