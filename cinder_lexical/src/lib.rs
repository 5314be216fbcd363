//! This crate implements the lexical analysis phase of the front end. This phase is responsible
//! for tokenizing the source code into an ordered sequence of tokens.
//!
//! The final output of this phase is a `Vec<`[`token::Token`]`>` bounded by a pair of
//! start-of-file/end-of-file sentinel tokens, produced by [`lexer::Lexer::tokenize`].

#![deny(
    missing_debug_implementations,
    missing_copy_implementations,
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    clippy::missing_errors_doc
)]
#![allow(clippy::missing_panics_doc, clippy::missing_const_for_fn)]

pub mod lexer;
pub mod token;
