use blockkit_core::element::{
    ButtonOpts, CheckboxesOpts, ConversationsSelectOpts, DatePickerOpts, ExternalSelectOpts,
    MultiStaticSelectOpts, OverflowOpts, StaticSelectOpts, button, checkboxes,
    conversations_select, date_picker, external_select, image, multi_static_select, overflow,
    static_select,
};
use blockkit_core::object::{
    ConversationType, OptionObject, OptionOpts, conversation_filter, option, option_group,
    option_groups,
};
use blockkit_core::{ElementError, ElementKind, Record};
use blockkit_testutil::keys_of;
use serde_json::json;

fn fruit(name: &str) -> OptionObject {
    option(name, name.to_lowercase(), OptionOpts::default()).unwrap()
}

#[test]
fn button_minimal_record() {
    let el = button("act-1", "Click", ButtonOpts::default()).unwrap();
    assert_eq!(
        el.to_record().unwrap(),
        json!({
            "type": "button",
            "action_id": "act-1",
            "text": {"type": "plain_text", "text": "Click"}
        })
    );
    assert_eq!(el.kind(), ElementKind::Button);
    assert_eq!(el.action_id(), Some("act-1"));
}

#[test]
fn every_interactive_element_requires_action_id() {
    let options = vec![fruit("Apple")];
    let failures = [
        button("", "Click", ButtonOpts::default()),
        overflow("", options.clone(), OverflowOpts::default()),
        static_select("", "Pick", options.clone(), StaticSelectOpts::default()),
        external_select("", "Search", ExternalSelectOpts::default()),
        date_picker("", DatePickerOpts::default()),
        checkboxes("", options, CheckboxesOpts::default()),
    ];
    for result in failures {
        assert_eq!(result.unwrap_err(), ElementError::ActionId);
    }
}

#[test]
fn static_select_with_groups_omits_options() {
    let groups = option_groups(vec![
        option_group("Fruit", vec![fruit("Apple"), fruit("Pear")]).unwrap(),
        option_group("Veg", vec![fruit("Leek")]).unwrap(),
    ])
    .unwrap();
    let el = static_select(
        "food",
        "Choose food",
        Vec::new(),
        StaticSelectOpts {
            option_groups: Some(groups),
            initial_option: Some(fruit("Leek")),
            confirm: None,
        },
    )
    .unwrap();

    let record = el.to_record().unwrap();
    assert!(record.get("options").is_none());
    assert_eq!(record["option_groups"].as_array().map(Vec::len), Some(2));
    assert_eq!(record["initial_option"]["value"], json!("leek"));
}

#[test]
fn static_select_option_cap() {
    let options: Vec<_> = (0..101).map(|idx| fruit(&format!("F{idx}"))).collect();
    assert_eq!(
        static_select("food", "Pick", options, StaticSelectOpts::default()).unwrap_err(),
        ElementError::TooManyOptions {
            kind: ElementKind::StaticSelect,
            max: 100,
            got: 101
        }
    );
}

#[test]
fn multi_static_select_full_record() {
    let el = multi_static_select(
        "fruit",
        "Fruit",
        vec![fruit("Apple"), fruit("Pear")],
        MultiStaticSelectOpts {
            initial_options: Some(vec![fruit("Pear")]),
            max_selected_items: Some(2),
            ..Default::default()
        },
    )
    .unwrap();
    let record = el.to_record().unwrap();
    assert_eq!(
        keys_of(&record),
        [
            "type",
            "action_id",
            "placeholder",
            "options",
            "initial_options",
            "max_selected_items"
        ]
    );
    assert_eq!(record["type"], json!("multi_static_select"));
}

#[test]
fn multi_static_select_with_groups_omits_options() {
    let groups = || {
        option_groups(vec![
            option_group("Fruit", vec![fruit("Apple"), fruit("Pear")]).unwrap(),
            option_group("Veg", vec![fruit("Leek")]).unwrap(),
        ])
        .unwrap()
    };
    let el = multi_static_select(
        "food",
        "Choose food",
        vec![fruit("Apple")],
        MultiStaticSelectOpts {
            option_groups: Some(groups()),
            initial_options: Some(vec![fruit("Pear"), fruit("Leek")]),
            ..Default::default()
        },
    )
    .unwrap();

    let record = el.to_record().unwrap();
    assert_eq!(
        keys_of(&record),
        ["type", "action_id", "placeholder", "option_groups", "initial_options"]
    );
    assert_eq!(record["option_groups"][1]["label"]["text"], json!("Veg"));

    let err = multi_static_select(
        "food",
        "Choose food",
        vec![fruit("Kiwi")],
        MultiStaticSelectOpts {
            option_groups: Some(groups()),
            initial_options: Some(vec![fruit("Kiwi")]),
            ..Default::default()
        },
    )
    .unwrap_err();
    assert_eq!(err, ElementError::InitialOptionNotOffered("kiwi".into()));
}

#[test]
fn conversations_select_embeds_filter() {
    let filter = conversation_filter(Some(vec![ConversationType::Private]), true, false).unwrap();
    let el = conversations_select(
        "room",
        "Room",
        ConversationsSelectOpts {
            initial_conversation: Some("C123".into()),
            filter: Some(filter),
            confirm: None,
        },
    )
    .unwrap();
    assert_eq!(
        el.to_record().unwrap()["filter"],
        json!({
            "include": ["private"],
            "exclude_external_shared_channels": true,
            "exclude_bot_users": false
        })
    );
}

#[test]
fn image_element_limits() {
    assert!(image(format!("https://example.com/{}", "a".repeat(2900)), "alt").is_ok());
    assert_eq!(
        image("x".repeat(3001), "alt").unwrap_err(),
        ElementError::ImageUrl
    );
    assert_eq!(
        image("https://example.com/a.png", "a".repeat(2001)).unwrap_err(),
        ElementError::AltText
    );
}

#[test]
fn unknown_element_tag_is_unsupported() {
    assert_eq!(
        "slider".parse::<ElementKind>(),
        Err(ElementError::UnsupportedType("slider".into()))
    );
    assert_eq!(
        "multi_users_select".parse::<ElementKind>(),
        Ok(ElementKind::MultiUsersSelect)
    );
}

#[test]
fn identical_arguments_give_identical_records() {
    let build = || {
        static_select(
            "food",
            "Pick",
            vec![fruit("Apple")],
            StaticSelectOpts::default(),
        )
        .unwrap()
    };
    assert_eq!(build(), build());
    assert_eq!(build().to_record().unwrap(), build().to_record().unwrap());
}
