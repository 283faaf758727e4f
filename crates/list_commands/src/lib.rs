//! List Commands - Editor commands operating on list components
//!
//! This crate wires the paste normalizer into the editor's command model:
//! a command validates the selected component, rewrites its children and
//! returns an inverse so the change can be undone.

mod command;
mod device;
mod editor;
mod error;
mod paste_from_word;
mod target;

pub use command::*;
pub use device::*;
pub use editor::*;
pub use error::*;
pub use paste_from_word::*;
pub use target::*;
