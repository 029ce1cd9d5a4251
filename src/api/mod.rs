//! # API Layer
//!
//! Presentation boundary: HTTP transport for the listing pipeline.

pub mod rest;
