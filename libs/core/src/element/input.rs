//! Pickers, free-text input and the option lists rendered as radio buttons or checkboxes.
//!
//! Dates are `YYYY-MM-DD` and times `HH:mm`; both are parsed before the element is built, so an
//! element that exists always carries a real calendar date or clock time.
use serde::Serialize;
use time::macros::format_description;
use time::{Date, Time};

use super::{
    Element, ElementKind, check_action_id, check_offered, check_optional_placeholder,
    check_options,
};
use crate::error::ElementError;
use crate::object::{ConfirmDialog, OptionObject, Text};
use crate::validate::{ensure, log_rejection};

pub const MAX_CHOICE_OPTIONS: usize = 10;
pub const MAX_INPUT_LENGTH: u32 = 3000;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatePickerOpts {
    pub placeholder: Option<String>,
    /// `YYYY-MM-DD`.
    pub initial_date: Option<String>,
    pub confirm: Option<ConfirmDialog>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatePicker {
    pub(crate) action_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    placeholder: Option<Text>,
    #[serde(skip_serializing_if = "Option::is_none")]
    initial_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    confirm: Option<ConfirmDialog>,
}

impl DatePicker {
    /// The initial date as a calendar value.
    pub fn initial_date(&self) -> Option<Date> {
        self.initial_date.as_deref().and_then(|raw| parse_date(raw).ok())
    }
}

pub fn date_picker(
    action_id: impl Into<String>,
    opts: DatePickerOpts,
) -> Result<Element, ElementError> {
    let action_id = action_id.into();
    validate_date_picker(&action_id, &opts)
        .inspect_err(|err| log_rejection(ElementKind::DatePicker.as_str(), err))?;

    Ok(Element::DatePicker(DatePicker {
        action_id,
        placeholder: opts.placeholder.map(Text::plain),
        initial_date: opts.initial_date,
        confirm: opts.confirm,
    }))
}

fn validate_date_picker(action_id: &str, opts: &DatePickerOpts) -> Result<(), ElementError> {
    check_action_id(action_id)?;
    check_optional_placeholder(opts.placeholder.as_deref())?;
    if let Some(raw) = opts.initial_date.as_deref() {
        parse_date(raw).map_err(|_| ElementError::InitialDate(raw.to_string()))?;
    }
    Ok(())
}

fn parse_date(raw: &str) -> Result<Date, time::error::Parse> {
    Date::parse(raw, format_description!("[year]-[month]-[day]"))
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimePickerOpts {
    pub placeholder: Option<String>,
    /// 24-hour `HH:mm`.
    pub initial_time: Option<String>,
    pub confirm: Option<ConfirmDialog>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimePicker {
    pub(crate) action_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    placeholder: Option<Text>,
    #[serde(skip_serializing_if = "Option::is_none")]
    initial_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    confirm: Option<ConfirmDialog>,
}

impl TimePicker {
    pub fn initial_time(&self) -> Option<Time> {
        self.initial_time.as_deref().and_then(|raw| parse_time(raw).ok())
    }
}

pub fn time_picker(
    action_id: impl Into<String>,
    opts: TimePickerOpts,
) -> Result<Element, ElementError> {
    let action_id = action_id.into();
    validate_time_picker(&action_id, &opts)
        .inspect_err(|err| log_rejection(ElementKind::TimePicker.as_str(), err))?;

    Ok(Element::TimePicker(TimePicker {
        action_id,
        placeholder: opts.placeholder.map(Text::plain),
        initial_time: opts.initial_time,
        confirm: opts.confirm,
    }))
}

fn validate_time_picker(action_id: &str, opts: &TimePickerOpts) -> Result<(), ElementError> {
    check_action_id(action_id)?;
    check_optional_placeholder(opts.placeholder.as_deref())?;
    if let Some(raw) = opts.initial_time.as_deref() {
        parse_time(raw).map_err(|_| ElementError::InitialTime(raw.to_string()))?;
    }
    Ok(())
}

fn parse_time(raw: &str) -> Result<Time, time::error::Parse> {
    Time::parse(raw, format_description!("[hour]:[minute]"))
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlainTextInputOpts {
    pub placeholder: Option<String>,
    pub initial_value: Option<String>,
    pub multiline: Option<bool>,
    pub min_length: Option<u32>,
    pub max_length: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlainTextInput {
    pub(crate) action_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    placeholder: Option<Text>,
    #[serde(skip_serializing_if = "Option::is_none")]
    initial_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    multiline: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_length: Option<u32>,
}

/// Builds a free-text input.
///
/// ```
/// use blockkit_core::element::{plain_text_input, PlainTextInputOpts};
/// use blockkit_core::Record;
///
/// let opts = PlainTextInputOpts {
///     multiline: Some(false),
///     min_length: Some(0),
///     ..Default::default()
/// };
/// let el = plain_text_input("notes", opts).unwrap();
/// assert_eq!(
///     el.to_json().unwrap(),
///     r#"{"type":"plain_text_input","action_id":"notes","multiline":false,"min_length":0}"#
/// );
/// ```
pub fn plain_text_input(
    action_id: impl Into<String>,
    opts: PlainTextInputOpts,
) -> Result<Element, ElementError> {
    let action_id = action_id.into();
    validate_plain_text_input(&action_id, &opts)
        .inspect_err(|err| log_rejection(ElementKind::PlainTextInput.as_str(), err))?;

    Ok(Element::PlainTextInput(PlainTextInput {
        action_id,
        placeholder: opts.placeholder.map(Text::plain),
        initial_value: opts.initial_value,
        multiline: opts.multiline,
        min_length: opts.min_length,
        max_length: opts.max_length,
    }))
}

fn validate_plain_text_input(
    action_id: &str,
    opts: &PlainTextInputOpts,
) -> Result<(), ElementError> {
    check_action_id(action_id)?;
    check_optional_placeholder(opts.placeholder.as_deref())?;
    if let Some(min) = opts.min_length {
        ensure(min <= MAX_INPUT_LENGTH, ElementError::MinLength(min))?;
    }
    if let Some(max) = opts.max_length {
        ensure((1..=MAX_INPUT_LENGTH).contains(&max), ElementError::MaxLength(max))?;
    }
    Ok(())
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RadioButtonsOpts {
    pub initial_option: Option<OptionObject>,
    pub confirm: Option<ConfirmDialog>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RadioButtons {
    pub(crate) action_id: String,
    options: Vec<OptionObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    initial_option: Option<OptionObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    confirm: Option<ConfirmDialog>,
}

pub fn radio_buttons(
    action_id: impl Into<String>,
    options: Vec<OptionObject>,
    opts: RadioButtonsOpts,
) -> Result<Element, ElementError> {
    let kind = ElementKind::RadioButtons;
    let action_id = action_id.into();
    validate_choices(kind, &action_id, &options, opts.initial_option.as_ref())
        .inspect_err(|err| log_rejection(kind.as_str(), err))?;

    Ok(Element::RadioButtons(RadioButtons {
        action_id,
        options,
        initial_option: opts.initial_option,
        confirm: opts.confirm,
    }))
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckboxesOpts {
    pub initial_options: Option<Vec<OptionObject>>,
    pub confirm: Option<ConfirmDialog>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Checkboxes {
    pub(crate) action_id: String,
    options: Vec<OptionObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    initial_options: Option<Vec<OptionObject>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    confirm: Option<ConfirmDialog>,
}

pub fn checkboxes(
    action_id: impl Into<String>,
    options: Vec<OptionObject>,
    opts: CheckboxesOpts,
) -> Result<Element, ElementError> {
    let kind = ElementKind::Checkboxes;
    let action_id = action_id.into();
    let initial = opts.initial_options.as_deref().unwrap_or_default();
    validate_choices(kind, &action_id, &options, initial)
        .inspect_err(|err| log_rejection(kind.as_str(), err))?;

    Ok(Element::Checkboxes(Checkboxes {
        action_id,
        options,
        initial_options: opts.initial_options,
        confirm: opts.confirm,
    }))
}

fn validate_choices<'a>(
    kind: ElementKind,
    action_id: &str,
    options: &'a [OptionObject],
    initial: impl IntoIterator<Item = &'a OptionObject>,
) -> Result<(), ElementError> {
    check_action_id(action_id)?;
    check_options(kind, options, MAX_CHOICE_OPTIONS)?;
    let offered: Vec<&OptionObject> = options.iter().collect();
    check_offered(initial, &offered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Record;
    use crate::object::{OptionOpts, option};
    use serde_json::json;

    fn choices(count: usize) -> Vec<OptionObject> {
        (0..count)
            .map(|idx| {
                option(format!("Choice {idx}"), format!("c{idx}"), OptionOpts::default()).unwrap()
            })
            .collect()
    }

    #[test]
    fn date_picker_needs_only_action_id() {
        let el = date_picker("due", DatePickerOpts::default()).unwrap();
        assert_eq!(
            el.to_record().unwrap(),
            json!({"type": "datepicker", "action_id": "due"})
        );
        assert_eq!(
            date_picker("", DatePickerOpts::default()).unwrap_err(),
            ElementError::ActionId
        );
    }

    #[test]
    fn date_picker_parses_initial_date() {
        let ok = DatePickerOpts {
            initial_date: Some("2024-02-29".into()),
            ..Default::default()
        };
        let Element::DatePicker(picker) = date_picker("due", ok).unwrap() else {
            panic!("expected a date picker");
        };
        assert_eq!(
            picker.initial_date(),
            Some(Date::from_calendar_date(2024, time::Month::February, 29).unwrap())
        );

        let bad = DatePickerOpts {
            initial_date: Some("2023-02-29".into()),
            ..Default::default()
        };
        assert_eq!(
            date_picker("due", bad).unwrap_err(),
            ElementError::InitialDate("2023-02-29".into())
        );
    }

    #[test]
    fn time_picker_rejects_out_of_range_time() {
        let ok = TimePickerOpts {
            initial_time: Some("09:30".into()),
            placeholder: Some("When?".into()),
            ..Default::default()
        };
        let record = time_picker("at", ok).unwrap().to_record().unwrap();
        assert_eq!(record["type"], json!("timepicker"));
        assert_eq!(record["initial_time"], json!("09:30"));

        let bad = TimePickerOpts {
            initial_time: Some("25:00".into()),
            ..Default::default()
        };
        assert_eq!(
            time_picker("at", bad).unwrap_err(),
            ElementError::InitialTime("25:00".into())
        );
    }

    #[test]
    fn plain_text_input_length_bounds() {
        let min = PlainTextInputOpts {
            min_length: Some(3001),
            ..Default::default()
        };
        assert_eq!(
            plain_text_input("notes", min).unwrap_err(),
            ElementError::MinLength(3001)
        );

        let max = PlainTextInputOpts {
            max_length: Some(0),
            ..Default::default()
        };
        assert_eq!(
            plain_text_input("notes", max).unwrap_err(),
            ElementError::MaxLength(0)
        );

        let widest = PlainTextInputOpts {
            min_length: Some(3000),
            max_length: Some(3000),
            ..Default::default()
        };
        let record = plain_text_input("notes", widest).unwrap().to_record().unwrap();
        assert_eq!(record["min_length"], json!(3000));
        assert_eq!(record["max_length"], json!(3000));

        let placeholder = PlainTextInputOpts {
            placeholder: Some("p".repeat(151)),
            ..Default::default()
        };
        assert_eq!(
            plain_text_input("notes", placeholder).unwrap_err(),
            ElementError::Placeholder
        );
    }

    #[test]
    fn radio_buttons_bound_and_initial() {
        assert!(radio_buttons("pick", choices(10), RadioButtonsOpts::default()).is_ok());
        assert_eq!(
            radio_buttons("pick", choices(11), RadioButtonsOpts::default()).unwrap_err(),
            ElementError::TooManyOptions {
                kind: ElementKind::RadioButtons,
                max: 10,
                got: 11
            }
        );
        let stray = option("Other", "other", OptionOpts::default()).unwrap();
        let opts = RadioButtonsOpts {
            initial_option: Some(stray),
            confirm: None,
        };
        assert_eq!(
            radio_buttons("pick", choices(2), opts).unwrap_err(),
            ElementError::InitialOptionNotOffered("other".into())
        );
    }

    #[test]
    fn checkboxes_accept_a_subset() {
        let options = choices(3);
        let opts = CheckboxesOpts {
            initial_options: Some(vec![options[0].clone(), options[2].clone()]),
            confirm: None,
        };
        let record = checkboxes("tick", options, opts)
            .unwrap()
            .to_record()
            .unwrap();
        assert_eq!(record["initial_options"].as_array().map(Vec::len), Some(2));
        assert_eq!(
            checkboxes("tick", Vec::new(), CheckboxesOpts::default()).unwrap_err(),
            ElementError::EmptyOptions
        );
    }
}
