use blockkit_core::object::{
    ConversationType, OptionOpts, TextFormat, TextOpts, confirm, conversation_filter, option,
    option_group, option_groups, text,
};
use blockkit_core::{ObjectError, Record};
use blockkit_testutil::keys_of;
use serde_json::json;

#[test]
fn plain_text_without_flags_has_exactly_type_and_text() {
    let value = text("Hi", TextFormat::PlainText, TextOpts::default());
    assert_eq!(
        value.to_record().unwrap(),
        json!({"type": "plain_text", "text": "Hi"})
    );
}

#[test]
fn text_preserves_false_flags_and_empty_text() {
    let value = text(
        "",
        TextFormat::PlainText,
        TextOpts {
            emoji: Some(false),
            verbatim: Some(false),
        },
    );
    assert_eq!(
        value.to_record().unwrap(),
        json!({"type": "plain_text", "text": "", "emoji": false, "verbatim": false})
    );
}

#[test]
fn markdown_drops_emoji_but_keeps_verbatim() {
    let value = text(
        "*bold*",
        TextFormat::Mrkdwn,
        TextOpts {
            emoji: Some(true),
            verbatim: Some(true),
        },
    );
    let record = value.to_record().unwrap();
    assert_eq!(keys_of(&record), ["type", "text", "verbatim"]);
}

#[test]
fn text_format_tags_parse() {
    assert_eq!("mrkdwn".parse::<TextFormat>(), Ok(TextFormat::Mrkdwn));
    assert_eq!(
        "markdown".parse::<TextFormat>(),
        Err(ObjectError::UnsupportedFormat("markdown".into()))
    );
}

#[test]
fn option_fields_in_order() {
    let choice = option(
        "Docs",
        "docs",
        OptionOpts {
            description: Some("Read the manual".into()),
            url: Some("https://example.com/docs".into()),
        },
    )
    .unwrap();
    let record = choice.to_record().unwrap();
    assert_eq!(keys_of(&record), ["text", "value", "description", "url"]);
    assert_eq!(
        record["description"],
        json!({"type": "plain_text", "text": "Read the manual"})
    );
    assert_eq!(choice.kind(), "option");
}

#[test]
fn option_rejections_are_specific() {
    assert_eq!(
        option("", "v", OptionOpts::default()).unwrap_err(),
        ObjectError::OptionText
    );
    assert_eq!(
        option("x".repeat(76), "v", OptionOpts::default()).unwrap_err(),
        ObjectError::OptionText
    );
    let description = OptionOpts {
        description: Some("d".repeat(76)),
        url: None,
    };
    assert_eq!(
        option("Label", "v", description).unwrap_err(),
        ObjectError::OptionDescription
    );
    let url = OptionOpts {
        description: None,
        url: Some("example.com".into()),
    };
    assert_eq!(option("Label", "v", url).unwrap_err(), ObjectError::OptionUrl);
}

#[test]
fn option_groups_bounds() {
    assert_eq!(
        option_groups(Vec::new()).unwrap_err(),
        ObjectError::EmptyOptionGroups
    );
    let empty_group = option_group("Nothing yet", Vec::new()).unwrap();
    let groups = option_groups(vec![empty_group]).unwrap();
    assert_eq!(
        groups.to_record().unwrap(),
        json!({
            "option_groups": [
                {"label": {"type": "plain_text", "text": "Nothing yet"}, "options": []}
            ]
        })
    );

    let many: Vec<_> = (0..101)
        .map(|idx| option_group(format!("G{idx}"), Vec::new()).unwrap())
        .collect();
    assert_eq!(
        option_groups(many).unwrap_err(),
        ObjectError::TooManyOptionGroups(101)
    );
}

#[test]
fn conversation_filter_keeps_false_flags() {
    let filter = conversation_filter(
        Some(vec![ConversationType::Im, ConversationType::Mpim]),
        false,
        false,
    )
    .unwrap();
    assert_eq!(
        filter.to_record().unwrap(),
        json!({
            "include": ["im", "mpim"],
            "exclude_external_shared_channels": false,
            "exclude_bot_users": false
        })
    );

    let open = conversation_filter(None, true, false).unwrap();
    assert_eq!(
        keys_of(&open.to_record().unwrap()),
        ["exclude_external_shared_channels", "exclude_bot_users"]
    );
}

#[test]
fn conversation_filter_keeps_empty_include_and_rejects_unknown_tags() {
    let empty = conversation_filter(Some(Vec::new()), false, false).unwrap();
    assert_eq!(
        empty.to_record().unwrap(),
        json!({
            "include": [],
            "exclude_external_shared_channels": false,
            "exclude_bot_users": false
        })
    );
    assert_eq!(
        "group".parse::<ConversationType>(),
        Err(ObjectError::UnknownConversationType("group".into()))
    );
}

#[test]
fn confirm_checks_every_label() {
    let ok = confirm("Sure?", TextFormat::Mrkdwn, "*Really*", "Yes", "No").unwrap();
    assert_eq!(ok.to_record().unwrap()["text"]["type"], json!("mrkdwn"));

    let cases = [
        (confirm("", TextFormat::PlainText, "b", "y", "n"), ObjectError::ConfirmTitle),
        (
            confirm("t", TextFormat::PlainText, "b".repeat(301), "y", "n"),
            ObjectError::ConfirmText,
        ),
        (
            confirm("t", TextFormat::PlainText, "b", "y".repeat(31), "n"),
            ObjectError::ConfirmLabel,
        ),
        (confirm("t", TextFormat::PlainText, "b", "y", ""), ObjectError::DenyLabel),
    ];
    for (result, expected) in cases {
        assert_eq!(result.unwrap_err(), expected);
    }
}
