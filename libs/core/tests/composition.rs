use blockkit_core::prelude::*;
use blockkit_core::element::{
    ButtonOpts, ButtonStyle, ConversationsSelectOpts, PlainTextInputOpts, RadioButtonsOpts,
    button, conversations_select, plain_text_input, radio_buttons,
};
use blockkit_core::object::{OptionOpts, conversation_filter, option};
use blockkit_testutil::{assert_schema, load_fixture};
use serde_json::json;

const VIEW_SCHEMA: &str = "schema/view.schema.json";

fn feedback_modal() -> Result<View, BuildError> {
    let good = option("Good", "good", OptionOpts::default())?;
    let bad = option("Bad", "bad", OptionOpts::default())?;
    let rating = radio_buttons(
        "rating",
        vec![good.clone(), bad],
        RadioButtonsOpts {
            initial_option: Some(good),
            confirm: None,
        },
    )?;
    let comments = plain_text_input(
        "comments",
        PlainTextInputOpts {
            multiline: Some(true),
            max_length: Some(500),
            ..Default::default()
        },
    )?;

    let blocks = vec![
        header("How did we do?", BlockOpts::default())?,
        section(
            Text::markdown("Rate your *last order*"),
            SectionOpts {
                accessory: Some(element::image("https://example.com/order.png", "Order photo")?),
                block_id: Some("intro".into()),
                fields: None,
            },
        )?,
        input(
            "Rating",
            rating,
            InputOpts {
                block_id: Some("rating-block".into()),
                ..Default::default()
            },
        )?,
        input(
            "Comments",
            comments,
            InputOpts {
                optional: Some(true),
                ..Default::default()
            },
        )?,
        context(
            vec![Text::plain("Answers are anonymous").into()],
            BlockOpts::default(),
        )?,
    ];

    let view = modal(
        "Feedback",
        blocks,
        ModalOpts {
            submit: Some("Send".into()),
            close: Some("Cancel".into()),
            private_metadata: Some(json!({"survey": 7}).into()),
            callback_id: Some("feedback-modal".into()),
            ..Default::default()
        },
    )?;
    Ok(view)
}

fn inbox_home() -> Result<View, BuildError> {
    let filter = conversation_filter(
        Some(vec![ConversationType::Public, ConversationType::Mpim]),
        false,
        true,
    )?;
    let toolbar = actions(
        vec![
            button(
                "refresh",
                "Refresh",
                ButtonOpts {
                    style: Some(ButtonStyle::Primary),
                    ..Default::default()
                },
            )?,
            conversations_select(
                "jump",
                "Jump to",
                ConversationsSelectOpts {
                    filter: Some(filter),
                    ..Default::default()
                },
            )?,
        ],
        BlockOpts {
            block_id: Some("toolbar".into()),
        },
    )?;
    let summary = section(
        Text::markdown("*Inbox*"),
        SectionOpts {
            fields: Some(vec![Text::markdown("*Open*\n3"), Text::markdown("*Closed*\n12")]),
            ..Default::default()
        },
    )?;

    Ok(home(
        vec![summary, toolbar],
        HomeOpts {
            callback_id: Some("home-inbox".into()),
            ..Default::default()
        },
    )?)
}

#[test]
fn feedback_modal_matches_yaml_fixture() {
    let record = feedback_modal().unwrap().to_record().unwrap();
    assert_eq!(
        record,
        load_fixture!("feedback_modal.yaml")
    );
    assert_schema!(VIEW_SCHEMA, record);
}

#[test]
fn inbox_home_matches_json_fixture() {
    let record = inbox_home().unwrap().to_record().unwrap();
    assert_eq!(record, load_fixture!("home_tab.json"));
    assert_schema!(VIEW_SCHEMA, record);
}

#[test]
fn rebuilding_is_idempotent() {
    let first = feedback_modal().unwrap();
    let second = feedback_modal().unwrap();
    assert_eq!(first, second);
    assert_eq!(first.to_json().unwrap(), second.to_json().unwrap());
}

#[test]
fn build_error_names_the_rejecting_layer() {
    let from_element: BuildError = button("", "x", ButtonOpts::default())
        .unwrap_err()
        .into();
    assert_eq!(from_element.layer(), Layer::Element);

    let nested = (|| -> Result<View, BuildError> {
        let block = actions(
            vec![element::image("https://example.com/a.png", "a")?],
            BlockOpts::default(),
        )?;
        Ok(modal("Broken", vec![block], ModalOpts::default())?)
    })();
    let err = nested.unwrap_err();
    assert_eq!(err.layer(), Layer::Block);
    assert_eq!(err.layer().as_str(), "block");
}
