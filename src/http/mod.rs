//! HTTP transport layer.
//!
//! Holds the request handlers behind each declared route; the route table
//! itself lives in `build_app` at the crate root.

pub mod handlers;
