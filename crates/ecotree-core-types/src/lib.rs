//! Core types shared across ecotree facilities
//!
//! This crate holds the vocabulary both the error and logging facilities
//! agree on:
//!
//! - **Schema constants**: Canonical field keys and event names

pub mod schema;
