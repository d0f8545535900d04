//! Request handlers

pub mod forecast;
