//! Request Handlers

pub mod results;
pub mod search;
