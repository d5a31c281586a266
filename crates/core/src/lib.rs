//! Core library for bookscout
//!
//! This crate implements the **Functional Core** of the bookscout
//! application: pure types and transformation functions with zero I/O.
//! The `bookscout` binary crate is the Imperative Shell that performs the
//! actual HTTP lookups and storage reads/writes.
//!
//! All functions here are deterministic, side-effect free, and testable
//! with simple fixture data (no mocking required).
//!
//! # Module Organization
//!
//! - [`book`]: Catalog volume data model and display-shaping transforms
//! - [`query`]: Search query composition for the catalog search endpoint
//! - [`favorites`]: Pure operations over the ordered favorites collection

pub mod book;
pub mod favorites;
pub mod query;
