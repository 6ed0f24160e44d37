//! Select menus: static, external, users, conversations and channels, each in single and
//! multi-select flavour.
//!
//! All of them share a required placeholder and an optional confirm dialog. Static selects take
//! either an options list or an option-groups wrapper; when groups are supplied the `options`
//! key is not emitted at all.
use serde::Serialize;

use super::{
    Element, ElementKind, check_action_id, check_max_selected, check_offered, check_options,
    check_placeholder,
};
use crate::error::ElementError;
use crate::object::{ConfirmDialog, ConversationFilter, OptionGroups, OptionObject, Text};
use crate::validate::log_rejection;

pub const MAX_SELECT_OPTIONS: usize = 100;

fn check_select(action_id: &str, placeholder: &str) -> Result<(), ElementError> {
    check_action_id(action_id)?;
    check_placeholder(placeholder)
}

/// Options must be non-empty unless groups replace them; initial picks must be offered.
fn check_static_choices<'a>(
    kind: ElementKind,
    options: &'a [OptionObject],
    groups: Option<&'a OptionGroups>,
    initial: impl IntoIterator<Item = &'a OptionObject>,
) -> Result<(), ElementError> {
    let offered: Vec<&OptionObject> = match groups {
        Some(groups) => groups.options().collect(),
        None => {
            check_options(kind, options, MAX_SELECT_OPTIONS)?;
            options.iter().collect()
        }
    };
    check_offered(initial, &offered)
}

fn rejected(kind: ElementKind) -> impl Fn(&ElementError) {
    move |err: &ElementError| log_rejection(kind.as_str(), err)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticSelectOpts {
    pub option_groups: Option<OptionGroups>,
    pub initial_option: Option<OptionObject>,
    pub confirm: Option<ConfirmDialog>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StaticSelect {
    pub(crate) action_id: String,
    placeholder: Text,
    #[serde(skip_serializing_if = "Option::is_none")]
    options: Option<Vec<OptionObject>>,
    #[serde(flatten)]
    option_groups: Option<OptionGroups>,
    #[serde(skip_serializing_if = "Option::is_none")]
    initial_option: Option<OptionObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    confirm: Option<ConfirmDialog>,
}

/// Builds a single static select.
///
/// ```
/// use blockkit_core::element::{static_select, StaticSelectOpts};
/// use blockkit_core::object::{option, option_group, option_groups, OptionOpts};
/// use blockkit_core::Record;
///
/// let red = option("Red", "red", OptionOpts::default()).unwrap();
/// let groups = option_groups(vec![option_group("Warm", vec![red.clone()]).unwrap()]).unwrap();
/// let opts = StaticSelectOpts { option_groups: Some(groups), ..Default::default() };
///
/// let el = static_select("colour", "Pick one", vec![red], opts).unwrap();
/// let record = el.to_record().unwrap();
/// assert!(record.get("options").is_none());
/// assert!(record.get("option_groups").is_some());
/// ```
pub fn static_select(
    action_id: impl Into<String>,
    placeholder: impl Into<String>,
    options: Vec<OptionObject>,
    opts: StaticSelectOpts,
) -> Result<Element, ElementError> {
    let kind = ElementKind::StaticSelect;
    let (action_id, placeholder) = (action_id.into(), placeholder.into());
    check_select(&action_id, &placeholder)
        .and_then(|()| {
            check_static_choices(
                kind,
                &options,
                opts.option_groups.as_ref(),
                opts.initial_option.as_ref(),
            )
        })
        .inspect_err(rejected(kind))?;

    let options = opts.option_groups.is_none().then_some(options);
    Ok(Element::StaticSelect(StaticSelect {
        action_id,
        placeholder: Text::plain(placeholder),
        options,
        option_groups: opts.option_groups,
        initial_option: opts.initial_option,
        confirm: opts.confirm,
    }))
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultiStaticSelectOpts {
    pub option_groups: Option<OptionGroups>,
    pub initial_options: Option<Vec<OptionObject>>,
    pub confirm: Option<ConfirmDialog>,
    pub max_selected_items: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MultiStaticSelect {
    pub(crate) action_id: String,
    placeholder: Text,
    #[serde(skip_serializing_if = "Option::is_none")]
    options: Option<Vec<OptionObject>>,
    #[serde(flatten)]
    option_groups: Option<OptionGroups>,
    #[serde(skip_serializing_if = "Option::is_none")]
    initial_options: Option<Vec<OptionObject>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    confirm: Option<ConfirmDialog>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_selected_items: Option<u32>,
}

pub fn multi_static_select(
    action_id: impl Into<String>,
    placeholder: impl Into<String>,
    options: Vec<OptionObject>,
    opts: MultiStaticSelectOpts,
) -> Result<Element, ElementError> {
    let kind = ElementKind::MultiStaticSelect;
    let (action_id, placeholder) = (action_id.into(), placeholder.into());
    let initial = opts.initial_options.as_deref().unwrap_or_default();
    check_select(&action_id, &placeholder)
        .and_then(|()| {
            check_static_choices(kind, &options, opts.option_groups.as_ref(), initial)
        })
        .and_then(|()| check_max_selected(opts.max_selected_items, initial.len()))
        .inspect_err(rejected(kind))?;

    let options = opts.option_groups.is_none().then_some(options);
    Ok(Element::MultiStaticSelect(MultiStaticSelect {
        action_id,
        placeholder: Text::plain(placeholder),
        options,
        option_groups: opts.option_groups,
        initial_options: opts.initial_options,
        confirm: opts.confirm,
        max_selected_items: opts.max_selected_items,
    }))
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExternalSelectOpts {
    pub initial_option: Option<OptionObject>,
    /// `Some(0)` is emitted; only `None` leaves the key out.
    pub min_query_length: Option<u32>,
    pub confirm: Option<ConfirmDialog>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExternalSelect {
    pub(crate) action_id: String,
    placeholder: Text,
    #[serde(skip_serializing_if = "Option::is_none")]
    initial_option: Option<OptionObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_query_length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    confirm: Option<ConfirmDialog>,
}

pub fn external_select(
    action_id: impl Into<String>,
    placeholder: impl Into<String>,
    opts: ExternalSelectOpts,
) -> Result<Element, ElementError> {
    let (action_id, placeholder) = (action_id.into(), placeholder.into());
    check_select(&action_id, &placeholder).inspect_err(rejected(ElementKind::ExternalSelect))?;

    Ok(Element::ExternalSelect(ExternalSelect {
        action_id,
        placeholder: Text::plain(placeholder),
        initial_option: opts.initial_option,
        min_query_length: opts.min_query_length,
        confirm: opts.confirm,
    }))
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultiExternalSelectOpts {
    pub initial_options: Option<Vec<OptionObject>>,
    pub confirm: Option<ConfirmDialog>,
    pub min_query_length: Option<u32>,
    pub max_selected_items: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MultiExternalSelect {
    pub(crate) action_id: String,
    placeholder: Text,
    #[serde(skip_serializing_if = "Option::is_none")]
    initial_options: Option<Vec<OptionObject>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    confirm: Option<ConfirmDialog>,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_query_length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_selected_items: Option<u32>,
}

pub fn multi_external_select(
    action_id: impl Into<String>,
    placeholder: impl Into<String>,
    opts: MultiExternalSelectOpts,
) -> Result<Element, ElementError> {
    let (action_id, placeholder) = (action_id.into(), placeholder.into());
    let selected = opts.initial_options.as_ref().map_or(0, Vec::len);
    check_select(&action_id, &placeholder)
        .and_then(|()| check_max_selected(opts.max_selected_items, selected))
        .inspect_err(rejected(ElementKind::MultiExternalSelect))?;

    Ok(Element::MultiExternalSelect(MultiExternalSelect {
        action_id,
        placeholder: Text::plain(placeholder),
        initial_options: opts.initial_options,
        confirm: opts.confirm,
        min_query_length: opts.min_query_length,
        max_selected_items: opts.max_selected_items,
    }))
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsersSelectOpts {
    pub initial_user: Option<String>,
    pub confirm: Option<ConfirmDialog>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UsersSelect {
    pub(crate) action_id: String,
    placeholder: Text,
    #[serde(skip_serializing_if = "Option::is_none")]
    initial_user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    confirm: Option<ConfirmDialog>,
}

pub fn users_select(
    action_id: impl Into<String>,
    placeholder: impl Into<String>,
    opts: UsersSelectOpts,
) -> Result<Element, ElementError> {
    let (action_id, placeholder) = (action_id.into(), placeholder.into());
    check_select(&action_id, &placeholder).inspect_err(rejected(ElementKind::UsersSelect))?;

    Ok(Element::UsersSelect(UsersSelect {
        action_id,
        placeholder: Text::plain(placeholder),
        initial_user: opts.initial_user,
        confirm: opts.confirm,
    }))
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultiUsersSelectOpts {
    pub initial_users: Option<Vec<String>>,
    pub confirm: Option<ConfirmDialog>,
    pub max_selected_items: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MultiUsersSelect {
    pub(crate) action_id: String,
    placeholder: Text,
    #[serde(skip_serializing_if = "Option::is_none")]
    initial_users: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    confirm: Option<ConfirmDialog>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_selected_items: Option<u32>,
}

pub fn multi_users_select(
    action_id: impl Into<String>,
    placeholder: impl Into<String>,
    opts: MultiUsersSelectOpts,
) -> Result<Element, ElementError> {
    let (action_id, placeholder) = (action_id.into(), placeholder.into());
    let selected = opts.initial_users.as_ref().map_or(0, Vec::len);
    check_select(&action_id, &placeholder)
        .and_then(|()| check_max_selected(opts.max_selected_items, selected))
        .inspect_err(rejected(ElementKind::MultiUsersSelect))?;

    Ok(Element::MultiUsersSelect(MultiUsersSelect {
        action_id,
        placeholder: Text::plain(placeholder),
        initial_users: opts.initial_users,
        confirm: opts.confirm,
        max_selected_items: opts.max_selected_items,
    }))
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversationsSelectOpts {
    pub initial_conversation: Option<String>,
    pub confirm: Option<ConfirmDialog>,
    pub filter: Option<ConversationFilter>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversationsSelect {
    pub(crate) action_id: String,
    placeholder: Text,
    #[serde(skip_serializing_if = "Option::is_none")]
    initial_conversation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    confirm: Option<ConfirmDialog>,
    #[serde(skip_serializing_if = "Option::is_none")]
    filter: Option<ConversationFilter>,
}

pub fn conversations_select(
    action_id: impl Into<String>,
    placeholder: impl Into<String>,
    opts: ConversationsSelectOpts,
) -> Result<Element, ElementError> {
    let (action_id, placeholder) = (action_id.into(), placeholder.into());
    check_select(&action_id, &placeholder)
        .inspect_err(rejected(ElementKind::ConversationsSelect))?;

    Ok(Element::ConversationsSelect(ConversationsSelect {
        action_id,
        placeholder: Text::plain(placeholder),
        initial_conversation: opts.initial_conversation,
        confirm: opts.confirm,
        filter: opts.filter,
    }))
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultiConversationsSelectOpts {
    pub initial_conversations: Option<Vec<String>>,
    pub confirm: Option<ConfirmDialog>,
    pub filter: Option<ConversationFilter>,
    pub max_selected_items: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MultiConversationsSelect {
    pub(crate) action_id: String,
    placeholder: Text,
    #[serde(skip_serializing_if = "Option::is_none")]
    initial_conversations: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    confirm: Option<ConfirmDialog>,
    #[serde(skip_serializing_if = "Option::is_none")]
    filter: Option<ConversationFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_selected_items: Option<u32>,
}

pub fn multi_conversations_select(
    action_id: impl Into<String>,
    placeholder: impl Into<String>,
    opts: MultiConversationsSelectOpts,
) -> Result<Element, ElementError> {
    let (action_id, placeholder) = (action_id.into(), placeholder.into());
    let selected = opts.initial_conversations.as_ref().map_or(0, Vec::len);
    check_select(&action_id, &placeholder)
        .and_then(|()| check_max_selected(opts.max_selected_items, selected))
        .inspect_err(rejected(ElementKind::MultiConversationsSelect))?;

    Ok(Element::MultiConversationsSelect(MultiConversationsSelect {
        action_id,
        placeholder: Text::plain(placeholder),
        initial_conversations: opts.initial_conversations,
        confirm: opts.confirm,
        filter: opts.filter,
        max_selected_items: opts.max_selected_items,
    }))
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChannelsSelectOpts {
    pub initial_channel: Option<String>,
    pub confirm: Option<ConfirmDialog>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChannelsSelect {
    pub(crate) action_id: String,
    placeholder: Text,
    #[serde(skip_serializing_if = "Option::is_none")]
    initial_channel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    confirm: Option<ConfirmDialog>,
}

pub fn channels_select(
    action_id: impl Into<String>,
    placeholder: impl Into<String>,
    opts: ChannelsSelectOpts,
) -> Result<Element, ElementError> {
    let (action_id, placeholder) = (action_id.into(), placeholder.into());
    check_select(&action_id, &placeholder).inspect_err(rejected(ElementKind::ChannelsSelect))?;

    Ok(Element::ChannelsSelect(ChannelsSelect {
        action_id,
        placeholder: Text::plain(placeholder),
        initial_channel: opts.initial_channel,
        confirm: opts.confirm,
    }))
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultiChannelsSelectOpts {
    pub initial_channels: Option<Vec<String>>,
    pub confirm: Option<ConfirmDialog>,
    pub max_selected_items: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MultiChannelsSelect {
    pub(crate) action_id: String,
    placeholder: Text,
    #[serde(skip_serializing_if = "Option::is_none")]
    initial_channels: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    confirm: Option<ConfirmDialog>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_selected_items: Option<u32>,
}

pub fn multi_channels_select(
    action_id: impl Into<String>,
    placeholder: impl Into<String>,
    opts: MultiChannelsSelectOpts,
) -> Result<Element, ElementError> {
    let (action_id, placeholder) = (action_id.into(), placeholder.into());
    let selected = opts.initial_channels.as_ref().map_or(0, Vec::len);
    check_select(&action_id, &placeholder)
        .and_then(|()| check_max_selected(opts.max_selected_items, selected))
        .inspect_err(rejected(ElementKind::MultiChannelsSelect))?;

    Ok(Element::MultiChannelsSelect(MultiChannelsSelect {
        action_id,
        placeholder: Text::plain(placeholder),
        initial_channels: opts.initial_channels,
        confirm: opts.confirm,
        max_selected_items: opts.max_selected_items,
    }))
}
