//! Layout blocks.
//!
//! A block arranges text objects and elements inside a view. Which element kinds may appear in
//! which block is fixed by [`permitted_elements`]; anything outside that table fails the whole
//! block. The optional `block_id` is always emitted last.
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::canonical::Record;
use crate::element::{self, Element, ElementKind};
use crate::error::BlockError;
use crate::object::Text;
use crate::validate::{ensure, is_present, is_present_if_set, log_rejection};

pub const MAX_BLOCK_ID_LEN: usize = 255;
pub const MAX_SECTION_TEXT_LEN: usize = 3000;
pub const MAX_SECTION_FIELDS: usize = 10;
pub const MAX_FIELD_TEXT_LEN: usize = 2000;
pub const MAX_IMAGE_TITLE_LEN: usize = 2000;
pub const MAX_ACTIONS_ELEMENTS: usize = 5;
pub const MAX_CONTEXT_ELEMENTS: usize = 10;
pub const MAX_INPUT_LABEL_LEN: usize = 2000;
pub const MAX_INPUT_HINT_LEN: usize = 2000;
pub const MAX_HEADER_TEXT_LEN: usize = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Section,
    Divider,
    Image,
    Actions,
    Context,
    Input,
    Header,
}

impl BlockKind {
    pub const ALL: [BlockKind; 7] = [
        BlockKind::Section,
        BlockKind::Divider,
        BlockKind::Image,
        BlockKind::Actions,
        BlockKind::Context,
        BlockKind::Input,
        BlockKind::Header,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BlockKind::Section => "section",
            BlockKind::Divider => "divider",
            BlockKind::Image => "image",
            BlockKind::Actions => "actions",
            BlockKind::Context => "context",
            BlockKind::Input => "input",
            BlockKind::Header => "header",
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BlockKind {
    type Err = BlockError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        BlockKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == value)
            .ok_or_else(|| BlockError::UnsupportedType(value.to_string()))
    }
}

const SECTION_ACCESSORIES: &[ElementKind] = &[
    ElementKind::Button,
    ElementKind::StaticSelect,
    ElementKind::ExternalSelect,
    ElementKind::UsersSelect,
    ElementKind::ConversationsSelect,
    ElementKind::ChannelsSelect,
    ElementKind::MultiStaticSelect,
    ElementKind::MultiExternalSelect,
    ElementKind::MultiUsersSelect,
    ElementKind::MultiConversationsSelect,
    ElementKind::MultiChannelsSelect,
    ElementKind::Overflow,
    ElementKind::DatePicker,
    ElementKind::TimePicker,
    ElementKind::RadioButtons,
    ElementKind::Checkboxes,
    ElementKind::Image,
];

const ACTIONS_ELEMENTS: &[ElementKind] = &[
    ElementKind::Button,
    ElementKind::Overflow,
    ElementKind::DatePicker,
    ElementKind::TimePicker,
    ElementKind::UsersSelect,
    ElementKind::StaticSelect,
    ElementKind::ChannelsSelect,
    ElementKind::ConversationsSelect,
    ElementKind::ExternalSelect,
    ElementKind::Checkboxes,
    ElementKind::RadioButtons,
];

const CONTEXT_ELEMENTS: &[ElementKind] = &[ElementKind::Image];

const INPUT_ELEMENTS: &[ElementKind] = &[
    ElementKind::PlainTextInput,
    ElementKind::StaticSelect,
    ElementKind::ExternalSelect,
    ElementKind::UsersSelect,
    ElementKind::ConversationsSelect,
    ElementKind::ChannelsSelect,
    ElementKind::MultiStaticSelect,
    ElementKind::MultiExternalSelect,
    ElementKind::MultiUsersSelect,
    ElementKind::MultiConversationsSelect,
    ElementKind::MultiChannelsSelect,
    ElementKind::Checkboxes,
    ElementKind::RadioButtons,
    ElementKind::DatePicker,
    ElementKind::TimePicker,
];

/// Element kinds legal inside a block kind. Context blocks also accept text objects.
///
/// ```
/// use blockkit_core::block::{permitted_elements, BlockKind};
/// use blockkit_core::element::ElementKind;
///
/// assert!(permitted_elements(BlockKind::Actions).contains(&ElementKind::Button));
/// assert!(!permitted_elements(BlockKind::Actions).contains(&ElementKind::Image));
/// assert!(permitted_elements(BlockKind::Divider).is_empty());
/// ```
pub fn permitted_elements(kind: BlockKind) -> &'static [ElementKind] {
    match kind {
        BlockKind::Section => SECTION_ACCESSORIES,
        BlockKind::Actions => ACTIONS_ELEMENTS,
        BlockKind::Context => CONTEXT_ELEMENTS,
        BlockKind::Input => INPUT_ELEMENTS,
        BlockKind::Divider | BlockKind::Image | BlockKind::Header => &[],
    }
}

fn is_permitted(block: BlockKind, element: ElementKind) -> bool {
    permitted_elements(block).contains(&element)
}

/// One layout unit of a view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Section(Section),
    Divider(Divider),
    Image(ImageBlock),
    Actions(Actions),
    Context(Context),
    Input(Input),
    Header(Header),
}

impl Block {
    pub fn kind(&self) -> BlockKind {
        match self {
            Block::Section(_) => BlockKind::Section,
            Block::Divider(_) => BlockKind::Divider,
            Block::Image(_) => BlockKind::Image,
            Block::Actions(_) => BlockKind::Actions,
            Block::Context(_) => BlockKind::Context,
            Block::Input(_) => BlockKind::Input,
            Block::Header(_) => BlockKind::Header,
        }
    }

    pub fn block_id(&self) -> Option<&str> {
        let block_id = match self {
            Block::Section(block) => &block.block_id,
            Block::Divider(block) => &block.block_id,
            Block::Image(block) => &block.block_id,
            Block::Actions(block) => &block.block_id,
            Block::Context(block) => &block.block_id,
            Block::Input(block) => &block.block_id,
            Block::Header(block) => &block.block_id,
        };
        block_id.as_deref()
    }
}

impl Record for Block {
    fn kind(&self) -> &'static str {
        Block::kind(self).as_str()
    }
}

fn check_block_id(block_id: Option<&str>) -> Result<(), BlockError> {
    ensure(
        is_present_if_set(block_id, MAX_BLOCK_ID_LEN),
        BlockError::BlockId,
    )
}

fn rejected(kind: BlockKind) -> impl Fn(&BlockError) {
    move |err: &BlockError| log_rejection(kind.as_str(), err)
}

/// Options shared by blocks whose only optional field is the identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockOpts {
    pub block_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionOpts {
    pub block_id: Option<String>,
    pub fields: Option<Vec<Text>>,
    pub accessory: Option<Element>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    text: Text,
    #[serde(skip_serializing_if = "Option::is_none")]
    fields: Option<Vec<Text>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    accessory: Option<Element>,
    #[serde(skip_serializing_if = "Option::is_none")]
    block_id: Option<String>,
}

impl Section {
    pub fn text(&self) -> &Text {
        &self.text
    }

    pub fn accessory(&self) -> Option<&Element> {
        self.accessory.as_ref()
    }
}

/// Builds a section around a text object.
///
/// ```
/// use blockkit_core::block::{section, SectionOpts};
/// use blockkit_core::object::Text;
/// use blockkit_core::Record;
///
/// let block = section(Text::markdown("*Hi*"), SectionOpts::default()).unwrap();
/// assert_eq!(
///     block.to_json().unwrap(),
///     r#"{"type":"section","text":{"type":"mrkdwn","text":"*Hi*"}}"#
/// );
/// ```
///
/// The primary content must be a text object, never a bare string:
///
/// ```compile_fail
/// use blockkit_core::block::{section, SectionOpts};
///
/// let block = section("hello", SectionOpts::default());
/// ```
pub fn section(text: Text, opts: SectionOpts) -> Result<Block, BlockError> {
    validate_section(&text, &opts).inspect_err(rejected(BlockKind::Section))?;

    Ok(Block::Section(Section {
        text,
        fields: opts.fields,
        accessory: opts.accessory,
        block_id: opts.block_id,
    }))
}

fn validate_section(text: &Text, opts: &SectionOpts) -> Result<(), BlockError> {
    ensure(
        is_present(text.text(), MAX_SECTION_TEXT_LEN),
        BlockError::SectionText,
    )?;
    if let Some(fields) = &opts.fields {
        ensure(
            fields.len() <= MAX_SECTION_FIELDS,
            BlockError::TooManyFields(fields.len()),
        )?;
        for field in fields {
            ensure(
                is_present(field.text(), MAX_FIELD_TEXT_LEN),
                BlockError::FieldText,
            )?;
        }
    }
    if let Some(accessory) = &opts.accessory {
        let kind = accessory.kind();
        ensure(
            is_permitted(BlockKind::Section, kind),
            BlockError::InvalidAccessory(kind),
        )?;
    }
    check_block_id(opts.block_id.as_deref())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Divider {
    #[serde(skip_serializing_if = "Option::is_none")]
    block_id: Option<String>,
}

/// ```
/// use blockkit_core::block::{divider, BlockOpts};
/// use blockkit_core::Record;
///
/// let block = divider(BlockOpts::default()).unwrap();
/// assert_eq!(block.to_json().unwrap(), r#"{"type":"divider"}"#);
/// ```
pub fn divider(opts: BlockOpts) -> Result<Block, BlockError> {
    check_block_id(opts.block_id.as_deref()).inspect_err(rejected(BlockKind::Divider))?;
    Ok(Block::Divider(Divider {
        block_id: opts.block_id,
    }))
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageBlockOpts {
    pub title: Option<String>,
    pub block_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageBlock {
    image_url: String,
    alt_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<Text>,
    #[serde(skip_serializing_if = "Option::is_none")]
    block_id: Option<String>,
}

impl ImageBlock {
    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    pub fn alt_text(&self) -> &str {
        &self.alt_text
    }

    pub fn title(&self) -> Option<&Text> {
        self.title.as_ref()
    }
}

pub fn image(
    image_url: impl Into<String>,
    alt_text: impl Into<String>,
    opts: ImageBlockOpts,
) -> Result<Block, BlockError> {
    let (image_url, alt_text) = (image_url.into(), alt_text.into());
    validate_image(&image_url, &alt_text, &opts).inspect_err(rejected(BlockKind::Image))?;

    Ok(Block::Image(ImageBlock {
        image_url,
        alt_text,
        title: opts.title.map(Text::plain),
        block_id: opts.block_id,
    }))
}

fn validate_image(
    image_url: &str,
    alt_text: &str,
    opts: &ImageBlockOpts,
) -> Result<(), BlockError> {
    ensure(element::is_image_url(image_url), BlockError::ImageUrl)?;
    ensure(element::is_alt_text(alt_text), BlockError::AltText)?;
    ensure(
        is_present_if_set(opts.title.as_deref(), MAX_IMAGE_TITLE_LEN),
        BlockError::ImageTitle,
    )?;
    check_block_id(opts.block_id.as_deref())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Actions {
    elements: Vec<Element>,
    #[serde(skip_serializing_if = "Option::is_none")]
    block_id: Option<String>,
}

impl Actions {
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }
}

pub fn actions(elements: Vec<Element>, opts: BlockOpts) -> Result<Block, BlockError> {
    validate_actions(&elements, &opts).inspect_err(rejected(BlockKind::Actions))?;

    Ok(Block::Actions(Actions {
        elements,
        block_id: opts.block_id,
    }))
}

fn validate_actions(elements: &[Element], opts: &BlockOpts) -> Result<(), BlockError> {
    ensure(!elements.is_empty(), BlockError::EmptyActions)?;
    ensure(
        elements.len() <= MAX_ACTIONS_ELEMENTS,
        BlockError::TooManyActions(elements.len()),
    )?;
    if let Some(bad) = elements
        .iter()
        .map(Element::kind)
        .find(|kind| !is_permitted(BlockKind::Actions, *kind))
    {
        return Err(BlockError::InvalidActionsElement(bad));
    }
    check_block_id(opts.block_id.as_deref())
}

/// A context entry: a text object or an image element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ContextElement {
    Text(Text),
    Element(Element),
}

impl From<Text> for ContextElement {
    fn from(text: Text) -> Self {
        ContextElement::Text(text)
    }
}

impl From<Element> for ContextElement {
    fn from(element: Element) -> Self {
        ContextElement::Element(element)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Context {
    elements: Vec<ContextElement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    block_id: Option<String>,
}

impl Context {
    pub fn elements(&self) -> &[ContextElement] {
        &self.elements
    }
}

pub fn context(elements: Vec<ContextElement>, opts: BlockOpts) -> Result<Block, BlockError> {
    validate_context(&elements, &opts).inspect_err(rejected(BlockKind::Context))?;

    Ok(Block::Context(Context {
        elements,
        block_id: opts.block_id,
    }))
}

fn validate_context(elements: &[ContextElement], opts: &BlockOpts) -> Result<(), BlockError> {
    ensure(!elements.is_empty(), BlockError::EmptyContext)?;
    ensure(
        elements.len() <= MAX_CONTEXT_ELEMENTS,
        BlockError::TooManyContextElements(elements.len()),
    )?;
    for entry in elements {
        if let ContextElement::Element(el) = entry {
            let kind = el.kind();
            ensure(
                is_permitted(BlockKind::Context, kind),
                BlockError::InvalidContextElement(kind),
            )?;
        }
    }
    check_block_id(opts.block_id.as_deref())
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputOpts {
    pub hint: Option<String>,
    pub optional: Option<bool>,
    pub block_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Input {
    label: Text,
    element: Element,
    #[serde(skip_serializing_if = "Option::is_none")]
    hint: Option<Text>,
    #[serde(skip_serializing_if = "Option::is_none")]
    optional: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    block_id: Option<String>,
}

impl Input {
    pub fn label(&self) -> &Text {
        &self.label
    }

    pub fn element(&self) -> &Element {
        &self.element
    }
}

pub fn input(
    label: impl Into<String>,
    element: Element,
    opts: InputOpts,
) -> Result<Block, BlockError> {
    let label = label.into();
    validate_input(&label, &element, &opts).inspect_err(rejected(BlockKind::Input))?;

    Ok(Block::Input(Input {
        label: Text::plain(label),
        element,
        hint: opts.hint.map(Text::plain),
        optional: opts.optional,
        block_id: opts.block_id,
    }))
}

fn validate_input(label: &str, element: &Element, opts: &InputOpts) -> Result<(), BlockError> {
    ensure(is_present(label, MAX_INPUT_LABEL_LEN), BlockError::InputLabel)?;
    let kind = element.kind();
    ensure(
        is_permitted(BlockKind::Input, kind),
        BlockError::InvalidInputElement(kind),
    )?;
    ensure(
        is_present_if_set(opts.hint.as_deref(), MAX_INPUT_HINT_LEN),
        BlockError::InputHint,
    )?;
    check_block_id(opts.block_id.as_deref())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Header {
    text: Text,
    #[serde(skip_serializing_if = "Option::is_none")]
    block_id: Option<String>,
}

pub fn header(text: impl Into<String>, opts: BlockOpts) -> Result<Block, BlockError> {
    let text = text.into();
    ensure(is_present(&text, MAX_HEADER_TEXT_LEN), BlockError::HeaderText)
        .and_then(|()| check_block_id(opts.block_id.as_deref()))
        .inspect_err(rejected(BlockKind::Header))?;

    Ok(Block::Header(Header {
        text: Text::plain(text),
        block_id: opts.block_id,
    }))
}

impl Header {
    pub fn text(&self) -> &Text {
        &self.text
    }
}
