//! kvgate: an HTTP-triggered key-value façade over a single table.
//!
//! The binary serves [`app::create_app`] either through the AWS Lambda
//! runtime or on a local TCP listener.

pub mod app;
pub mod config;
pub mod handlers;
pub mod state;
pub mod storage;
