//! Upstream API clients for the Daumier news-meme library.
//!
//! Each client wraps one external HTTP API and normalizes its response
//! shape:
//!
//! - [`NewsClient`]: news search, capped at 10 articles
//! - [`TemplateClient`]: meme template catalog, capped at 100 entries
//! - [`GeminiClient`]: generative caption text, raw model output
//! - [`RenderClient`]: meme rendering, returns the finished image URL
//!
//! The caption parser ([`parse_caption`]) turns the generative model's
//! untrusted free text into a validated [`daumier_core::CaptionDraft`],
//! collapsing every malformed payload into a uniform "no caption" result.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod caption;
mod gemini;
mod news;
mod render;
mod templates;

pub use caption::parse_caption;
pub use gemini::GeminiClient;
pub use news::NewsClient;
pub use render::RenderClient;
pub use templates::TemplateClient;
