//! Interactive elements and the image element.
//!
//! Every constructor validates first and builds second; the first violated rule is returned and
//! nothing is built. All interactive kinds require an action identifier.
mod button;
mod input;
mod select;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::canonical::Record;
use crate::error::ElementError;
use crate::object::OptionObject;
use crate::validate::{ensure, is_present, is_present_if_set};

pub use button::{Button, ButtonOpts, ButtonStyle, ImageElement, Overflow, OverflowOpts};
pub use button::{button, image, overflow};
pub(crate) use button::{is_alt_text, is_image_url};
pub use input::{
    Checkboxes, CheckboxesOpts, DatePicker, DatePickerOpts, PlainTextInput, PlainTextInputOpts,
    RadioButtons, RadioButtonsOpts, TimePicker, TimePickerOpts,
};
pub use input::{checkboxes, date_picker, plain_text_input, radio_buttons, time_picker};
pub use select::{
    ChannelsSelect, ChannelsSelectOpts, ConversationsSelect, ConversationsSelectOpts,
    ExternalSelect, ExternalSelectOpts, MultiChannelsSelect, MultiChannelsSelectOpts,
    MultiConversationsSelect, MultiConversationsSelectOpts, MultiExternalSelect,
    MultiExternalSelectOpts, MultiStaticSelect, MultiStaticSelectOpts, MultiUsersSelect,
    MultiUsersSelectOpts, StaticSelect, StaticSelectOpts, UsersSelect, UsersSelectOpts,
};
pub use select::{
    channels_select, conversations_select, external_select, multi_channels_select,
    multi_conversations_select, multi_external_select, multi_static_select, multi_users_select,
    static_select, users_select,
};

pub const MAX_ACTION_ID_LEN: usize = 255;
pub const MAX_PLACEHOLDER_LEN: usize = 150;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Button,
    StaticSelect,
    ExternalSelect,
    UsersSelect,
    ConversationsSelect,
    ChannelsSelect,
    MultiStaticSelect,
    MultiExternalSelect,
    MultiUsersSelect,
    MultiConversationsSelect,
    MultiChannelsSelect,
    Overflow,
    DatePicker,
    TimePicker,
    PlainTextInput,
    RadioButtons,
    Checkboxes,
    Image,
}

impl ElementKind {
    pub const ALL: [ElementKind; 18] = [
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
        ElementKind::PlainTextInput,
        ElementKind::RadioButtons,
        ElementKind::Checkboxes,
        ElementKind::Image,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ElementKind::Button => "button",
            ElementKind::StaticSelect => "static_select",
            ElementKind::ExternalSelect => "external_select",
            ElementKind::UsersSelect => "users_select",
            ElementKind::ConversationsSelect => "conversations_select",
            ElementKind::ChannelsSelect => "channels_select",
            ElementKind::MultiStaticSelect => "multi_static_select",
            ElementKind::MultiExternalSelect => "multi_external_select",
            ElementKind::MultiUsersSelect => "multi_users_select",
            ElementKind::MultiConversationsSelect => "multi_conversations_select",
            ElementKind::MultiChannelsSelect => "multi_channels_select",
            ElementKind::Overflow => "overflow",
            ElementKind::DatePicker => "datepicker",
            ElementKind::TimePicker => "timepicker",
            ElementKind::PlainTextInput => "plain_text_input",
            ElementKind::RadioButtons => "radio_buttons",
            ElementKind::Checkboxes => "checkboxes",
            ElementKind::Image => "image",
        }
    }

    /// Every kind except the image element reacts to user interaction.
    pub fn is_interactive(self) -> bool {
        self != ElementKind::Image
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ElementKind {
    type Err = ElementError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        ElementKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == value)
            .ok_or_else(|| ElementError::UnsupportedType(value.to_string()))
    }
}

/// One interactive or display control; each variant carries only its own fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Element {
    Button(Button),
    StaticSelect(StaticSelect),
    ExternalSelect(ExternalSelect),
    UsersSelect(UsersSelect),
    ConversationsSelect(ConversationsSelect),
    ChannelsSelect(ChannelsSelect),
    MultiStaticSelect(MultiStaticSelect),
    MultiExternalSelect(MultiExternalSelect),
    MultiUsersSelect(MultiUsersSelect),
    MultiConversationsSelect(MultiConversationsSelect),
    MultiChannelsSelect(MultiChannelsSelect),
    Overflow(Overflow),
    #[serde(rename = "datepicker")]
    DatePicker(DatePicker),
    #[serde(rename = "timepicker")]
    TimePicker(TimePicker),
    PlainTextInput(PlainTextInput),
    RadioButtons(RadioButtons),
    Checkboxes(Checkboxes),
    Image(ImageElement),
}

impl Element {
    pub fn kind(&self) -> ElementKind {
        match self {
            Element::Button(_) => ElementKind::Button,
            Element::StaticSelect(_) => ElementKind::StaticSelect,
            Element::ExternalSelect(_) => ElementKind::ExternalSelect,
            Element::UsersSelect(_) => ElementKind::UsersSelect,
            Element::ConversationsSelect(_) => ElementKind::ConversationsSelect,
            Element::ChannelsSelect(_) => ElementKind::ChannelsSelect,
            Element::MultiStaticSelect(_) => ElementKind::MultiStaticSelect,
            Element::MultiExternalSelect(_) => ElementKind::MultiExternalSelect,
            Element::MultiUsersSelect(_) => ElementKind::MultiUsersSelect,
            Element::MultiConversationsSelect(_) => ElementKind::MultiConversationsSelect,
            Element::MultiChannelsSelect(_) => ElementKind::MultiChannelsSelect,
            Element::Overflow(_) => ElementKind::Overflow,
            Element::DatePicker(_) => ElementKind::DatePicker,
            Element::TimePicker(_) => ElementKind::TimePicker,
            Element::PlainTextInput(_) => ElementKind::PlainTextInput,
            Element::RadioButtons(_) => ElementKind::RadioButtons,
            Element::Checkboxes(_) => ElementKind::Checkboxes,
            Element::Image(_) => ElementKind::Image,
        }
    }

    /// The action identifier, absent only for the image element.
    pub fn action_id(&self) -> Option<&str> {
        let action_id = match self {
            Element::Button(el) => &el.action_id,
            Element::StaticSelect(el) => &el.action_id,
            Element::ExternalSelect(el) => &el.action_id,
            Element::UsersSelect(el) => &el.action_id,
            Element::ConversationsSelect(el) => &el.action_id,
            Element::ChannelsSelect(el) => &el.action_id,
            Element::MultiStaticSelect(el) => &el.action_id,
            Element::MultiExternalSelect(el) => &el.action_id,
            Element::MultiUsersSelect(el) => &el.action_id,
            Element::MultiConversationsSelect(el) => &el.action_id,
            Element::MultiChannelsSelect(el) => &el.action_id,
            Element::Overflow(el) => &el.action_id,
            Element::DatePicker(el) => &el.action_id,
            Element::TimePicker(el) => &el.action_id,
            Element::PlainTextInput(el) => &el.action_id,
            Element::RadioButtons(el) => &el.action_id,
            Element::Checkboxes(el) => &el.action_id,
            Element::Image(_) => return None,
        };
        Some(action_id)
    }
}

impl Record for Element {
    fn kind(&self) -> &'static str {
        Element::kind(self).as_str()
    }
}

pub(crate) fn check_action_id(action_id: &str) -> Result<(), ElementError> {
    ensure(is_present(action_id, MAX_ACTION_ID_LEN), ElementError::ActionId)
}

pub(crate) fn check_placeholder(placeholder: &str) -> Result<(), ElementError> {
    ensure(
        is_present(placeholder, MAX_PLACEHOLDER_LEN),
        ElementError::Placeholder,
    )
}

pub(crate) fn check_optional_placeholder(placeholder: Option<&str>) -> Result<(), ElementError> {
    ensure(
        is_present_if_set(placeholder, MAX_PLACEHOLDER_LEN),
        ElementError::Placeholder,
    )
}

pub(crate) fn check_options(
    kind: ElementKind,
    options: &[OptionObject],
    max: usize,
) -> Result<(), ElementError> {
    ensure(!options.is_empty(), ElementError::EmptyOptions)?;
    ensure(
        options.len() <= max,
        ElementError::TooManyOptions {
            kind,
            max,
            got: options.len(),
        },
    )
}

/// Every initial option must be one of the offered ones.
pub(crate) fn check_offered<'a>(
    initial: impl IntoIterator<Item = &'a OptionObject>,
    offered: &[&OptionObject],
) -> Result<(), ElementError> {
    for option in initial {
        ensure(
            offered.contains(&option),
            ElementError::InitialOptionNotOffered(option.value().to_string()),
        )?;
    }
    Ok(())
}

pub(crate) fn check_max_selected(max: Option<u32>, selected: usize) -> Result<(), ElementError> {
    let Some(max) = max else {
        return Ok(());
    };
    ensure(max >= 1, ElementError::MaxSelectedItems)?;
    ensure(
        u32::try_from(selected).is_ok_and(|selected| selected <= max),
        ElementError::InitialSelectionExceedsMax { selected, max },
    )
}
