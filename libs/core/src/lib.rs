//! Typed constructors and validation rules for Block Kit surfaces.
//!
//! The crate is layered bottom-up: primitive [`object`]s are composed into interactive
//! [`element`]s, elements and objects are arranged into layout [`block`]s, and blocks are
//! collected into top-level [`view`]s. Every constructor validates its input first and returns
//! the layer's error on the first violated rule; a successful value emits canonical JSON through
//! [`Record`].
pub mod block;
pub mod canonical;
pub mod element;
pub mod error;
pub mod object;
pub mod prelude;
pub mod validate;
pub mod view;

pub use block::{Block, BlockKind};
pub use canonical::Record;
pub use element::{Element, ElementKind};
pub use error::{BlockError, BuildError, ElementError, Layer, ObjectError, ViewError};
pub use object::{Text, TextFormat};
pub use view::{View, ViewKind};

/// Returns the semantic version advertised by this crate.
///
/// ```
/// assert_eq!(blockkit_core::version(), "0.1.0");
/// ```
pub fn version() -> &'static str {
    "0.1.0"
}
