//! Top-level surfaces: modal, home tab and workflow step.
//!
//! Every view holds between 1 and [`MAX_BLOCKS`] blocks. All block kinds are legal in all three
//! views, so the view layer only checks counts and its own fields.
use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use serde_json::Value;

use crate::block::Block;
use crate::canonical::Record;
use crate::error::ViewError;
use crate::object::Text;
use crate::validate::{char_len, ensure, is_present, is_present_if_set, log_rejection};

pub const MAX_BLOCKS: usize = 100;
pub const MAX_TITLE_LEN: usize = 24;
pub const MAX_BUTTON_LABEL_LEN: usize = 24;
pub const MAX_PRIVATE_METADATA_LEN: usize = 3000;
pub const MAX_CALLBACK_ID_LEN: usize = 255;
pub const MAX_EXTERNAL_ID_LEN: usize = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    Modal,
    Home,
    WorkflowStep,
}

impl ViewKind {
    pub const ALL: [ViewKind; 3] = [ViewKind::Modal, ViewKind::Home, ViewKind::WorkflowStep];

    pub fn as_str(self) -> &'static str {
        match self {
            ViewKind::Modal => "modal",
            ViewKind::Home => "home",
            ViewKind::WorkflowStep => "workflow_step",
        }
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewKind {
    type Err = ViewError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        ViewKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == value)
            .ok_or_else(|| ViewError::UnsupportedType(value.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum View {
    Modal(Modal),
    Home(Home),
    WorkflowStep(WorkflowStep),
}

impl View {
    pub fn kind(&self) -> ViewKind {
        match self {
            View::Modal(_) => ViewKind::Modal,
            View::Home(_) => ViewKind::Home,
            View::WorkflowStep(_) => ViewKind::WorkflowStep,
        }
    }

    pub fn blocks(&self) -> &[Block] {
        match self {
            View::Modal(view) => &view.blocks,
            View::Home(view) => &view.blocks,
            View::WorkflowStep(view) => &view.blocks,
        }
    }

    /// The encoded private metadata, if any was supplied.
    pub fn private_metadata(&self) -> Option<&str> {
        let metadata = match self {
            View::Modal(view) => &view.private_metadata,
            View::Home(view) => &view.private_metadata,
            View::WorkflowStep(view) => &view.private_metadata,
        };
        metadata.as_deref()
    }
}

impl Record for View {
    fn kind(&self) -> &'static str {
        View::kind(self).as_str()
    }
}

/// State round-tripped through a view.
///
/// Structured objects and arrays are stored as their compact JSON text; a JSON string is stored
/// as-is. Any other JSON scalar is rejected.
///
/// ```
/// use blockkit_core::view::PrivateMetadata;
/// use serde_json::json;
///
/// let state = PrivateMetadata::from(json!({"step": 2}));
/// assert_eq!(state.encode().unwrap(), r#"{"step":2}"#);
/// assert!(PrivateMetadata::from(json!(42)).encode().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrivateMetadata {
    Text(String),
    Structured(Value),
}

impl PrivateMetadata {
    pub fn encode(&self) -> Result<String, ViewError> {
        let encoded = match self {
            PrivateMetadata::Text(raw) => raw.clone(),
            PrivateMetadata::Structured(Value::String(raw)) => raw.clone(),
            PrivateMetadata::Structured(value @ (Value::Object(_) | Value::Array(_))) => {
                serde_json::to_string(value)
                    .map_err(|err| ViewError::PrivateMetadataEncoding(err.to_string()))?
            }
            PrivateMetadata::Structured(_) => return Err(ViewError::PrivateMetadataType),
        };
        let len = char_len(&encoded);
        ensure(
            len <= MAX_PRIVATE_METADATA_LEN,
            ViewError::PrivateMetadataTooLong(len),
        )?;
        Ok(encoded)
    }
}

impl From<String> for PrivateMetadata {
    fn from(raw: String) -> Self {
        PrivateMetadata::Text(raw)
    }
}

impl From<&str> for PrivateMetadata {
    fn from(raw: &str) -> Self {
        PrivateMetadata::Text(raw.to_string())
    }
}

impl From<Value> for PrivateMetadata {
    fn from(value: Value) -> Self {
        PrivateMetadata::Structured(value)
    }
}

fn check_blocks(blocks: &[Block]) -> Result<(), ViewError> {
    ensure(!blocks.is_empty(), ViewError::NoBlocks)?;
    ensure(
        blocks.len() <= MAX_BLOCKS,
        ViewError::TooManyBlocks(blocks.len()),
    )
}

fn encode_metadata(metadata: Option<&PrivateMetadata>) -> Result<Option<String>, ViewError> {
    metadata.map(PrivateMetadata::encode).transpose()
}

fn check_callback_id(callback_id: Option<&str>) -> Result<(), ViewError> {
    ensure(
        is_present_if_set(callback_id, MAX_CALLBACK_ID_LEN),
        ViewError::CallbackId,
    )
}

fn check_external_id(external_id: Option<&str>) -> Result<(), ViewError> {
    ensure(
        is_present_if_set(external_id, MAX_EXTERNAL_ID_LEN),
        ViewError::ExternalId,
    )
}

fn built(view: View) -> View {
    tracing::debug!(
        target: "blockkit::view",
        kind = view.kind().as_str(),
        blocks = view.blocks().len(),
        "view built"
    );
    view
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalOpts {
    pub submit: Option<String>,
    pub close: Option<String>,
    pub private_metadata: Option<PrivateMetadata>,
    pub callback_id: Option<String>,
    pub clear_on_close: Option<bool>,
    pub notify_on_close: Option<bool>,
    pub hash: Option<String>,
    pub external_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Modal {
    title: Text,
    blocks: Vec<Block>,
    #[serde(skip_serializing_if = "Option::is_none")]
    submit: Option<Text>,
    #[serde(skip_serializing_if = "Option::is_none")]
    close: Option<Text>,
    #[serde(skip_serializing_if = "Option::is_none")]
    private_metadata: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    callback_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    clear_on_close: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    notify_on_close: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    external_id: Option<String>,
}

impl Modal {
    pub fn title(&self) -> &Text {
        &self.title
    }
}

/// Builds a modal.
///
/// ```
/// use blockkit_core::block::{divider, BlockOpts};
/// use blockkit_core::view::{modal, ModalOpts};
/// use blockkit_core::Record;
///
/// let blocks = vec![divider(BlockOpts::default()).unwrap()];
/// let view = modal("Example", blocks, ModalOpts::default()).unwrap();
/// let json = view.to_json().unwrap();
/// assert!(json.starts_with(r#"{"type":"modal","title":{"type":"plain_text","text":"Example"}"#));
/// assert!(json.ends_with(r#""blocks":[{"type":"divider"}]}"#));
/// ```
pub fn modal(
    title: impl Into<String>,
    blocks: Vec<Block>,
    opts: ModalOpts,
) -> Result<View, ViewError> {
    let title = title.into();
    let private_metadata = validate_modal(&title, &blocks, &opts)
        .inspect_err(|err| log_rejection(ViewKind::Modal.as_str(), err))?;

    Ok(built(View::Modal(Modal {
        title: Text::plain(title),
        blocks,
        submit: opts.submit.map(Text::plain),
        close: opts.close.map(Text::plain),
        private_metadata,
        callback_id: opts.callback_id,
        clear_on_close: opts.clear_on_close,
        notify_on_close: opts.notify_on_close,
        hash: opts.hash,
        external_id: opts.external_id,
    })))
}

fn validate_modal(
    title: &str,
    blocks: &[Block],
    opts: &ModalOpts,
) -> Result<Option<String>, ViewError> {
    ensure(is_present(title, MAX_TITLE_LEN), ViewError::Title)?;
    check_blocks(blocks)?;
    ensure(
        is_present_if_set(opts.submit.as_deref(), MAX_BUTTON_LABEL_LEN),
        ViewError::SubmitText,
    )?;
    ensure(
        is_present_if_set(opts.close.as_deref(), MAX_BUTTON_LABEL_LEN),
        ViewError::CloseText,
    )?;
    let private_metadata = encode_metadata(opts.private_metadata.as_ref())?;
    check_callback_id(opts.callback_id.as_deref())?;
    ensure(
        opts.hash.as_deref().is_none_or(|hash| !hash.is_empty()),
        ViewError::Hash,
    )?;
    check_external_id(opts.external_id.as_deref())?;
    Ok(private_metadata)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HomeOpts {
    pub private_metadata: Option<PrivateMetadata>,
    pub callback_id: Option<String>,
    pub external_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Home {
    blocks: Vec<Block>,
    #[serde(skip_serializing_if = "Option::is_none")]
    private_metadata: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    callback_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    external_id: Option<String>,
}

pub fn home(blocks: Vec<Block>, opts: HomeOpts) -> Result<View, ViewError> {
    let private_metadata = validate_home(&blocks, &opts)
        .inspect_err(|err| log_rejection(ViewKind::Home.as_str(), err))?;

    Ok(built(View::Home(Home {
        blocks,
        private_metadata,
        callback_id: opts.callback_id,
        external_id: opts.external_id,
    })))
}

fn validate_home(blocks: &[Block], opts: &HomeOpts) -> Result<Option<String>, ViewError> {
    check_blocks(blocks)?;
    let private_metadata = encode_metadata(opts.private_metadata.as_ref())?;
    check_callback_id(opts.callback_id.as_deref())?;
    check_external_id(opts.external_id.as_deref())?;
    Ok(private_metadata)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkflowStepOpts {
    pub private_metadata: Option<PrivateMetadata>,
    pub callback_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkflowStep {
    blocks: Vec<Block>,
    #[serde(skip_serializing_if = "Option::is_none")]
    private_metadata: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    callback_id: Option<String>,
}

pub fn workflow_step(blocks: Vec<Block>, opts: WorkflowStepOpts) -> Result<View, ViewError> {
    let private_metadata = check_blocks(&blocks)
        .and_then(|()| encode_metadata(opts.private_metadata.as_ref()))
        .and_then(|metadata| check_callback_id(opts.callback_id.as_deref()).map(|()| metadata))
        .inspect_err(|err| log_rejection(ViewKind::WorkflowStep.as_str(), err))?;

    Ok(built(View::WorkflowStep(WorkflowStep {
        blocks,
        private_metadata,
        callback_id: opts.callback_id,
    })))
}
