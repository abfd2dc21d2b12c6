//! Interactive multi-round item selection for note templates.
//!
//! The [`selector`] module holds the selection engine and its UI seam, the
//! [`config`] module layers option overrides from files, presets, the
//! environment and item catalogs, and [`cli`] wires both into the
//! `item-selector` binary.

pub mod cli;
pub mod config;
pub mod error;
pub mod selector;
pub mod utils;

pub use error::{Error, Result};
pub use selector::{Attribute, Item, ItemRecord, Selector, SelectorOptions, SelectorUi};
