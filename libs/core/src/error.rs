use thiserror::Error;

use crate::element::ElementKind;

/// The layer that rejected a construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Object,
    Element,
    Block,
    View,
}

impl Layer {
    pub fn as_str(self) -> &'static str {
        match self {
            Layer::Object => "object",
            Layer::Element => "element",
            Layer::Block => "block",
            Layer::View => "view",
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ObjectError {
    #[error("unsupported text format '{0}', expected plain_text or mrkdwn")]
    UnsupportedFormat(String),
    #[error("option text must be a non-empty string of at most 75 characters")]
    OptionText,
    #[error("option description text must be a non-empty string of at most 75 characters")]
    OptionDescription,
    #[error("option url must be an absolute url of at most 3000 characters")]
    OptionUrl,
    #[error("option group label must be a non-empty string of at most 75 characters")]
    OptionGroupLabel,
    #[error("option group can hold at most 100 options, got {0}")]
    TooManyGroupOptions(usize),
    #[error("option groups must be a non-empty array")]
    EmptyOptionGroups,
    #[error("option groups can hold at most 100 groups, got {0}")]
    TooManyOptionGroups(usize),
    #[error("unsupported conversation type '{0}', expected one of im, mpim, private, public")]
    UnknownConversationType(String),
    #[error("confirm title must be a non-empty string of at most 100 characters")]
    ConfirmTitle,
    #[error("confirm text must be a non-empty string of at most 300 characters")]
    ConfirmText,
    #[error("confirm button text must be a non-empty string of at most 30 characters")]
    ConfirmLabel,
    #[error("deny button text must be a non-empty string of at most 30 characters")]
    DenyLabel,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ElementError {
    #[error("unsupported element type '{0}'")]
    UnsupportedType(String),
    #[error("action identifier required: a non-empty string of at most 255 characters")]
    ActionId,
    #[error("placeholder text must be a non-empty string of at most 150 characters")]
    Placeholder,
    #[error("options must be a non-empty array")]
    EmptyOptions,
    #[error("{kind} accepts at most {max} options, got {got}")]
    TooManyOptions {
        kind: ElementKind,
        max: usize,
        got: usize,
    },
    #[error("initial option '{0}' must be one of the offered options")]
    InitialOptionNotOffered(String),
    #[error("max_selected_items must be at least 1")]
    MaxSelectedItems,
    #[error("{selected} initial selections exceed max_selected_items of {max}")]
    InitialSelectionExceedsMax { selected: usize, max: u32 },
    #[error("button text must be a non-empty string of at most 75 characters")]
    ButtonText,
    #[error("button url must be an absolute url of at most 3000 characters")]
    ButtonUrl,
    #[error("button value must be at most 2000 characters")]
    ButtonValue,
    #[error("image url must be a non-empty string of at most 3000 characters")]
    ImageUrl,
    #[error("alt text must be a non-empty string of at most 2000 characters")]
    AltText,
    #[error("initial date '{0}' must be formatted as YYYY-MM-DD")]
    InitialDate(String),
    #[error("initial time '{0}' must be formatted as HH:mm")]
    InitialTime(String),
    #[error("min_length must be a number no greater than 3000, got {0}")]
    MinLength(u32),
    #[error("max_length must be a number between 1 and 3000, got {0}")]
    MaxLength(u32),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BlockError {
    #[error("unsupported block type '{0}'")]
    UnsupportedType(String),
    #[error("block_id must be a non-empty string of at most 255 characters")]
    BlockId,
    #[error("section text must be between 1 and 3000 characters")]
    SectionText,
    #[error("section accepts at most 10 fields, got {0}")]
    TooManyFields(usize),
    #[error("section field text must be between 1 and 2000 characters")]
    FieldText,
    #[error("{0} cannot be used as a section accessory")]
    InvalidAccessory(ElementKind),
    #[error("image url must be a non-empty string of at most 3000 characters")]
    ImageUrl,
    #[error("alt text must be a non-empty string of at most 2000 characters")]
    AltText,
    #[error("image title must be a non-empty string of at most 2000 characters")]
    ImageTitle,
    #[error("actions block needs at least one element")]
    EmptyActions,
    #[error("each actions block can have only up to 5 elements, got {0}")]
    TooManyActions(usize),
    #[error("invalid element for actions: {0}")]
    InvalidActionsElement(ElementKind),
    #[error("context needs at least one element")]
    EmptyContext,
    #[error("context accepts at most 10 elements, got {0}")]
    TooManyContextElements(usize),
    #[error("context elements can be only image or text, got {0}")]
    InvalidContextElement(ElementKind),
    #[error("input block needs a non-empty label of at most 2000 characters")]
    InputLabel,
    #[error("input hint must be a non-empty string of at most 2000 characters")]
    InputHint,
    #[error("{0} is not a supported input element")]
    InvalidInputElement(ElementKind),
    #[error("header block needs non-empty text of at most 3000 characters")]
    HeaderText,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ViewError {
    #[error("unsupported view type '{0}'")]
    UnsupportedType(String),
    #[error("title must be a string of at most 24 characters")]
    Title,
    #[error("no blocks: provide at least 1 block")]
    NoBlocks,
    #[error("too many blocks: not more than 100 blocks are allowed, got {0}")]
    TooManyBlocks(usize),
    #[error("submit text must be a non-empty string of at most 24 characters")]
    SubmitText,
    #[error("close text must be a non-empty string of at most 24 characters")]
    CloseText,
    #[error("private metadata must be a string or a structured value")]
    PrivateMetadataType,
    #[error("private metadata could not be serialized: {0}")]
    PrivateMetadataEncoding(String),
    #[error("private metadata max length is 3000 characters, got {0}")]
    PrivateMetadataTooLong(usize),
    #[error("callback_id must be a non-empty string of at most 255 characters")]
    CallbackId,
    #[error("hash must be a non-empty string")]
    Hash,
    #[error("external_id must be a non-empty string of at most 255 characters")]
    ExternalId,
}

/// Any construction failure, tagged with the layer that produced it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error(transparent)]
    Object(#[from] ObjectError),
    #[error(transparent)]
    Element(#[from] ElementError),
    #[error(transparent)]
    Block(#[from] BlockError),
    #[error(transparent)]
    View(#[from] ViewError),
}

impl BuildError {
    pub fn layer(&self) -> Layer {
        match self {
            BuildError::Object(_) => Layer::Object,
            BuildError::Element(_) => Layer::Element,
            BuildError::Block(_) => Layer::Block,
            BuildError::View(_) => Layer::View,
        }
    }
}
