//! Primitive objects: text, options, option groups, confirmation dialogs and conversation filters.
//!
//! These are the leaves of every surface. They carry no layout role of their own and are
//! composed into elements, blocks and views by value.
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::canonical::Record;
use crate::error::ObjectError;
use crate::validate::{ensure, is_absolute_url, is_present, is_present_if_set, log_rejection};

pub const MAX_OPTION_TEXT_LEN: usize = 75;
pub const MAX_OPTION_DESCRIPTION_LEN: usize = 75;
pub const MAX_OPTION_URL_LEN: usize = 3000;
pub const MAX_OPTION_GROUP_LABEL_LEN: usize = 75;
pub const MAX_OPTIONS_PER_GROUP: usize = 100;
pub const MAX_OPTION_GROUPS: usize = 100;
pub const MAX_CONFIRM_TITLE_LEN: usize = 100;
pub const MAX_CONFIRM_TEXT_LEN: usize = 300;
pub const MAX_CONFIRM_BUTTON_LEN: usize = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TextFormat {
    #[serde(rename = "plain_text")]
    PlainText,
    #[serde(rename = "mrkdwn")]
    Mrkdwn,
}

impl TextFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            TextFormat::PlainText => "plain_text",
            TextFormat::Mrkdwn => "mrkdwn",
        }
    }
}

impl fmt::Display for TextFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TextFormat {
    type Err = ObjectError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "plain_text" => Ok(TextFormat::PlainText),
            "mrkdwn" => Ok(TextFormat::Mrkdwn),
            other => Err(ObjectError::UnsupportedFormat(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextOpts {
    pub emoji: Option<bool>,
    pub verbatim: Option<bool>,
}

/// A user-visible label or body together with its format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Text {
    #[serde(rename = "type")]
    format: TextFormat,
    text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    emoji: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    verbatim: Option<bool>,
}

impl Text {
    pub fn plain(text: impl Into<String>) -> Self {
        Self::with_format(text, TextFormat::PlainText)
    }

    pub fn markdown(text: impl Into<String>) -> Self {
        Self::with_format(text, TextFormat::Mrkdwn)
    }

    fn with_format(text: impl Into<String>, format: TextFormat) -> Self {
        Self {
            format,
            text: text.into(),
            emoji: None,
            verbatim: None,
        }
    }

    pub fn format(&self) -> TextFormat {
        self.format
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn emoji(&self) -> Option<bool> {
        self.emoji
    }

    pub fn verbatim(&self) -> Option<bool> {
        self.verbatim
    }
}

impl Record for Text {
    fn kind(&self) -> &'static str {
        self.format.as_str()
    }
}

/// Builds a text object. The empty string is a valid value.
///
/// The emoji flag only survives for plain text; markdown text never carries it.
///
/// ```
/// use blockkit_core::object::{text, TextFormat, TextOpts};
/// use blockkit_core::Record;
///
/// let hello = text("hello", TextFormat::PlainText, TextOpts::default());
/// assert_eq!(hello.to_json().unwrap(), r#"{"type":"plain_text","text":"hello"}"#);
/// ```
pub fn text(value: impl Into<String>, format: TextFormat, opts: TextOpts) -> Text {
    Text {
        format,
        text: value.into(),
        emoji: match format {
            TextFormat::PlainText => opts.emoji,
            TextFormat::Mrkdwn => None,
        },
        verbatim: opts.verbatim,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionOpts {
    pub description: Option<String>,
    pub url: Option<String>,
}

/// A single selectable choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionObject {
    text: Text,
    value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<Text>,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,
}

impl OptionObject {
    pub fn text(&self) -> &Text {
        &self.text
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn description(&self) -> Option<&Text> {
        self.description.as_ref()
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }
}

impl Record for OptionObject {
    fn kind(&self) -> &'static str {
        "option"
    }
}

/// Builds an option. The value is any string, including the empty one.
///
/// ```compile_fail
/// use blockkit_core::object::{option, OptionOpts};
///
/// // option values are strings; a number is rejected
/// let _ = option("Forty two", 42, OptionOpts::default());
/// ```
pub fn option(
    label: impl Into<String>,
    value: impl Into<String>,
    opts: OptionOpts,
) -> Result<OptionObject, ObjectError> {
    let label = label.into();
    validate_option(&label, &opts).inspect_err(|err| log_rejection("option", err))?;

    Ok(OptionObject {
        text: Text::plain(label),
        value: value.into(),
        description: opts.description.map(Text::plain),
        url: opts.url,
    })
}

fn validate_option(label: &str, opts: &OptionOpts) -> Result<(), ObjectError> {
    ensure(is_present(label, MAX_OPTION_TEXT_LEN), ObjectError::OptionText)?;
    ensure(
        is_present_if_set(opts.description.as_deref(), MAX_OPTION_DESCRIPTION_LEN),
        ObjectError::OptionDescription,
    )?;
    ensure(
        opts.url
            .as_deref()
            .is_none_or(|url| is_absolute_url(url, MAX_OPTION_URL_LEN)),
        ObjectError::OptionUrl,
    )
}

/// A labelled cluster of options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionGroup {
    label: Text,
    options: Vec<OptionObject>,
}

impl OptionGroup {
    pub fn label(&self) -> &Text {
        &self.label
    }

    pub fn options(&self) -> &[OptionObject] {
        &self.options
    }
}

impl Record for OptionGroup {
    fn kind(&self) -> &'static str {
        "option_group"
    }
}

pub fn option_group(
    label: impl Into<String>,
    options: Vec<OptionObject>,
) -> Result<OptionGroup, ObjectError> {
    let label = label.into();
    validate_option_group(&label, &options).inspect_err(|err| log_rejection("option_group", err))?;

    Ok(OptionGroup {
        label: Text::plain(label),
        options,
    })
}

fn validate_option_group(label: &str, options: &[OptionObject]) -> Result<(), ObjectError> {
    ensure(
        is_present(label, MAX_OPTION_GROUP_LABEL_LEN),
        ObjectError::OptionGroupLabel,
    )?;
    ensure(
        options.len() <= MAX_OPTIONS_PER_GROUP,
        ObjectError::TooManyGroupOptions(options.len()),
    )
}

/// Wrapper emitted as `{"option_groups": [...]}` for selects that group their choices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionGroups {
    option_groups: Vec<OptionGroup>,
}

impl OptionGroups {
    pub fn groups(&self) -> &[OptionGroup] {
        &self.option_groups
    }

    /// Every option across all groups, in group order.
    pub fn options(&self) -> impl Iterator<Item = &OptionObject> {
        self.option_groups.iter().flat_map(|group| group.options.iter())
    }
}

impl Record for OptionGroups {
    fn kind(&self) -> &'static str {
        "option_groups"
    }
}

pub fn option_groups(groups: Vec<OptionGroup>) -> Result<OptionGroups, ObjectError> {
    validate_option_groups(&groups).inspect_err(|err| log_rejection("option_groups", err))?;
    Ok(OptionGroups {
        option_groups: groups,
    })
}

fn validate_option_groups(groups: &[OptionGroup]) -> Result<(), ObjectError> {
    ensure(!groups.is_empty(), ObjectError::EmptyOptionGroups)?;
    ensure(
        groups.len() <= MAX_OPTION_GROUPS,
        ObjectError::TooManyOptionGroups(groups.len()),
    )
}

/// Conversation kinds a conversations picker may be restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversationType {
    Im,
    Mpim,
    Private,
    Public,
}

impl ConversationType {
    pub const ALL: [ConversationType; 4] = [
        ConversationType::Im,
        ConversationType::Mpim,
        ConversationType::Private,
        ConversationType::Public,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ConversationType::Im => "im",
            ConversationType::Mpim => "mpim",
            ConversationType::Private => "private",
            ConversationType::Public => "public",
        }
    }
}

impl fmt::Display for ConversationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConversationType {
    type Err = ObjectError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        ConversationType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == value)
            .ok_or_else(|| ObjectError::UnknownConversationType(value.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversationFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    include: Option<Vec<ConversationType>>,
    exclude_external_shared_channels: bool,
    exclude_bot_users: bool,
}

impl ConversationFilter {
    pub fn include(&self) -> Option<&[ConversationType]> {
        self.include.as_deref()
    }

    pub fn exclude_external_shared_channels(&self) -> bool {
        self.exclude_external_shared_channels
    }

    pub fn exclude_bot_users(&self) -> bool {
        self.exclude_bot_users
    }
}

impl Record for ConversationFilter {
    fn kind(&self) -> &'static str {
        "filter"
    }
}

/// Builds a conversation filter. Both exclusion flags are always emitted, and an empty `include`
/// list is kept as `"include": []`.
pub fn conversation_filter(
    include: Option<Vec<ConversationType>>,
    exclude_external_shared_channels: bool,
    exclude_bot_users: bool,
) -> Result<ConversationFilter, ObjectError> {
    Ok(ConversationFilter {
        include,
        exclude_external_shared_channels,
        exclude_bot_users,
    })
}

/// Confirmation prompt shown before a destructive action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfirmDialog {
    title: Text,
    text: Text,
    confirm: Text,
    deny: Text,
}

impl ConfirmDialog {
    pub fn title(&self) -> &Text {
        &self.title
    }

    pub fn text(&self) -> &Text {
        &self.text
    }

    pub fn confirm(&self) -> &Text {
        &self.confirm
    }

    pub fn deny(&self) -> &Text {
        &self.deny
    }
}

impl Record for ConfirmDialog {
    fn kind(&self) -> &'static str {
        "confirm"
    }
}

pub fn confirm(
    title: impl Into<String>,
    body_format: TextFormat,
    body: impl Into<String>,
    confirm_label: impl Into<String>,
    deny_label: impl Into<String>,
) -> Result<ConfirmDialog, ObjectError> {
    let (title, body) = (title.into(), body.into());
    let (confirm_label, deny_label) = (confirm_label.into(), deny_label.into());

    validate_confirm(&title, &body, &confirm_label, &deny_label)
        .inspect_err(|err| log_rejection("confirm", err))?;

    Ok(ConfirmDialog {
        title: Text::plain(title),
        text: text(body, body_format, TextOpts::default()),
        confirm: Text::plain(confirm_label),
        deny: Text::plain(deny_label),
    })
}

fn validate_confirm(
    title: &str,
    body: &str,
    confirm_label: &str,
    deny_label: &str,
) -> Result<(), ObjectError> {
    ensure(is_present(title, MAX_CONFIRM_TITLE_LEN), ObjectError::ConfirmTitle)?;
    ensure(is_present(body, MAX_CONFIRM_TEXT_LEN), ObjectError::ConfirmText)?;
    ensure(
        is_present(confirm_label, MAX_CONFIRM_BUTTON_LEN),
        ObjectError::ConfirmLabel,
    )?;
    ensure(
        is_present(deny_label, MAX_CONFIRM_BUTTON_LEN),
        ObjectError::DenyLabel,
    )
}
