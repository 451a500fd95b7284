//! `bag-util` — grab-bag helpers that travel alongside `bag-geo`.
//!
//! Independent, stateless utility functions: no shared state, no protocol
//! between them, each with a plain input/output contract.
//!
//! # Crate layout
//!
//! | Module    | Contents                                              |
//! |-----------|-------------------------------------------------------|
//! | [`slice`] | membership, exclusion, intersection, de-duplication   |
//! | [`text`]  | blank-string predicate/filter, snake_case conversion  |
//! | [`fs`]    | temp-file creation                                    |
//! | [`error`] | `BagError`, `BagResult`                               |

pub mod error;
pub mod fs;
pub mod slice;
pub mod text;

#[cfg(test)]
mod tests;

pub use error::{BagError, BagResult};
