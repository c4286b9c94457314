//! Markdown to HTML conversion for site content.
//!
//! This module converts the small Markdown dialect used by review, blog,
//! note and TYLI documents into HTML fragments. Conversion is an ordered
//! series of whole-document substitutions (see [`render`]): headings and
//! inline markup first, then paragraph wrapping, then line-level list and
//! quote rewriting. It is not a general-purpose Markdown parser, and it does
//! not escape raw HTML in its input.

mod blocks;
mod renderer;
mod rules;

pub use renderer::render;
