//! # reviewkita-content
//!
//! Section parsing and rendering for AI-generated reviewer content.
//!
//! The content generator emits flat text blobs carrying labeled, delimited
//! regions:
//!
//! ```text
//! [SECTION: <KEY>] [<Title>]
//! <body lines...>
//! [END_SECTION]
//! ```
//!
//! This crate extracts those regions into [`ContentSection`] values for
//! side-by-side display (original vs. enhanced), and classifies section
//! bodies into display lines.
//!
//! [`ContentSection`]: reviewkita_core::ContentSection

pub mod parser;
pub mod render;

pub use parser::parse_sections;
pub use render::render_lines;
