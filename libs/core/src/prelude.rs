//! Glob-importable surface for callers assembling whole views.
//!
//! Constructor names overlap between layers (`element::image` and `block::image`), so the layer
//! modules are re-exported alongside the types instead of every function.
pub use crate::block::{
    self, Block, BlockKind, BlockOpts, ContextElement, ImageBlockOpts, InputOpts, SectionOpts,
    actions, context, divider, header, input, section,
};
pub use crate::canonical::Record;
pub use crate::element::{self, Element, ElementKind};
pub use crate::error::{BlockError, BuildError, ElementError, Layer, ObjectError, ViewError};
pub use crate::object::{
    self, ConfirmDialog, ConversationFilter, ConversationType, OptionGroup, OptionGroups,
    OptionObject, Text, TextFormat, TextOpts,
};
pub use crate::view::{
    self, HomeOpts, ModalOpts, PrivateMetadata, View, ViewKind, WorkflowStepOpts, home, modal,
    workflow_step,
};
