//! End-to-end news-meme workflow orchestration.
//!
//! [`NewsMemeWorkflow`] composes the upstream clients into one sequential
//! pipeline: fetch news, select an article, fetch the template catalog,
//! request a caption from the generative model, validate it, and render
//! the meme. The [`ops`] module wraps the workflow's capabilities in the
//! uniform response envelope both transport front-ends speak, so each
//! front-end stays a thin adapter.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod ops;
mod workflow;

pub use workflow::NewsMemeWorkflow;
