//! Contains the shared utilities used by the property-based tests of the front end.

#![deny(
    missing_docs,
    missing_debug_implementations,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links
)]

pub mod input;
