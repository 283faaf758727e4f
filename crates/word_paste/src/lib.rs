//! Word Paste - Cleanup of content pasted from word processors
//!
//! This crate turns raw clipboard content (Word HTML, conditional comments,
//! `mso-` styles, bulleted or numbered plain text) into a clean sequence of
//! plain-text list items, and renders those items back as list markup for
//! the editor.
//!
//! Normalization is total: every input, including empty or malformed
//! content, produces at least one non-empty item.

mod bullets;
mod entities;
mod error;
mod item;
mod markup;
mod normalizer;
mod patterns;
pub mod list_markup;
pub mod settings;

pub use bullets::*;
pub use entities::*;
pub use error::*;
pub use item::*;
pub use markup::*;
pub use normalizer::*;
pub use list_markup::*;
pub use settings::*;
