//! URL handling for crawl targets
//!
//! This module provides crawl-target normalization and same-origin comparison.
//! Every same-origin decision the crawler makes goes through [`same_origin`], and
//! every crawl starts from a base produced by [`normalize_base`].

mod normalize;
mod origin;

pub use normalize::normalize_base;
pub use origin::same_origin;
