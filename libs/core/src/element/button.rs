//! Buttons, overflow menus and the non-interactive image element.
use serde::Serialize;

use super::{Element, ElementKind, check_action_id, check_options};
use crate::error::ElementError;
use crate::object::{ConfirmDialog, OptionObject, Text};
use crate::validate::{ensure, is_absolute_url, is_present, log_rejection};

pub const MAX_BUTTON_TEXT_LEN: usize = 75;
pub const MAX_BUTTON_URL_LEN: usize = 3000;
pub const MAX_BUTTON_VALUE_LEN: usize = 2000;
pub const MAX_OVERFLOW_OPTIONS: usize = 5;
pub const MAX_IMAGE_URL_LEN: usize = 3000;
pub const MAX_ALT_TEXT_LEN: usize = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonStyle {
    Primary,
    Danger,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ButtonOpts {
    pub url: Option<String>,
    pub value: Option<String>,
    pub confirm: Option<ConfirmDialog>,
    pub style: Option<ButtonStyle>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Button {
    pub(crate) action_id: String,
    text: Text,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    confirm: Option<ConfirmDialog>,
    #[serde(skip_serializing_if = "Option::is_none")]
    style: Option<ButtonStyle>,
}

impl Button {
    pub fn text(&self) -> &Text {
        &self.text
    }

    pub fn style(&self) -> Option<ButtonStyle> {
        self.style
    }
}

/// Builds a button with a plain-text label.
///
/// ```
/// use blockkit_core::element::{button, ButtonOpts};
/// use blockkit_core::Record;
///
/// let el = button("act-1", "Click", ButtonOpts::default()).unwrap();
/// assert_eq!(
///     el.to_json().unwrap(),
///     r#"{"type":"button","action_id":"act-1","text":{"type":"plain_text","text":"Click"}}"#
/// );
/// ```
pub fn button(
    action_id: impl Into<String>,
    text: impl Into<String>,
    opts: ButtonOpts,
) -> Result<Element, ElementError> {
    let (action_id, text) = (action_id.into(), text.into());
    validate_button(&action_id, &text, &opts)
        .inspect_err(|err| log_rejection(ElementKind::Button.as_str(), err))?;

    Ok(Element::Button(Button {
        action_id,
        text: Text::plain(text),
        url: opts.url,
        value: opts.value,
        confirm: opts.confirm,
        style: opts.style,
    }))
}

fn validate_button(action_id: &str, text: &str, opts: &ButtonOpts) -> Result<(), ElementError> {
    check_action_id(action_id)?;
    ensure(is_present(text, MAX_BUTTON_TEXT_LEN), ElementError::ButtonText)?;
    ensure(
        opts.url
            .as_deref()
            .is_none_or(|url| is_absolute_url(url, MAX_BUTTON_URL_LEN)),
        ElementError::ButtonUrl,
    )?;
    ensure(
        opts.value
            .as_deref()
            .is_none_or(|value| value.chars().count() <= MAX_BUTTON_VALUE_LEN),
        ElementError::ButtonValue,
    )
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverflowOpts {
    pub confirm: Option<ConfirmDialog>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Overflow {
    pub(crate) action_id: String,
    options: Vec<OptionObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    confirm: Option<ConfirmDialog>,
}

impl Overflow {
    pub fn options(&self) -> &[OptionObject] {
        &self.options
    }
}

pub fn overflow(
    action_id: impl Into<String>,
    options: Vec<OptionObject>,
    opts: OverflowOpts,
) -> Result<Element, ElementError> {
    let action_id = action_id.into();
    check_action_id(&action_id)
        .and_then(|()| check_options(ElementKind::Overflow, &options, MAX_OVERFLOW_OPTIONS))
        .inspect_err(|err| log_rejection(ElementKind::Overflow.as_str(), err))?;

    Ok(Element::Overflow(Overflow {
        action_id,
        options,
        confirm: opts.confirm,
    }))
}

/// The non-interactive image element; it carries no action identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageElement {
    image_url: String,
    alt_text: String,
}

impl ImageElement {
    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    pub fn alt_text(&self) -> &str {
        &self.alt_text
    }
}

pub fn image(
    image_url: impl Into<String>,
    alt_text: impl Into<String>,
) -> Result<Element, ElementError> {
    let (image_url, alt_text) = (image_url.into(), alt_text.into());
    validate_image(&image_url, &alt_text)
        .inspect_err(|err| log_rejection(ElementKind::Image.as_str(), err))?;

    Ok(Element::Image(ImageElement {
        image_url,
        alt_text,
    }))
}

fn validate_image(image_url: &str, alt_text: &str) -> Result<(), ElementError> {
    ensure(is_image_url(image_url), ElementError::ImageUrl)?;
    ensure(is_alt_text(alt_text), ElementError::AltText)
}

pub(crate) fn is_image_url(value: &str) -> bool {
    is_present(value, MAX_IMAGE_URL_LEN)
}

pub(crate) fn is_alt_text(value: &str) -> bool {
    is_present(value, MAX_ALT_TEXT_LEN)
}
