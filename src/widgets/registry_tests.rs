use super::*;

fn instant_registry() -> (WidgetRegistry, CommandSender) {
    WidgetRegistry::channel(Duration::ZERO, 30)
}

#[test]
fn create_assigns_next_free_default_name() {
    let (mut registry, _tx) = instant_registry();
    let first = registry.create(WidgetType::Button);
    let second = registry.create(WidgetType::Button);
    let input = registry.create(WidgetType::Input);

    assert_eq!(registry.canonical_name(&first), Some("Button1"));
    assert_eq!(registry.canonical_name(&second), Some("Button2"));
    assert_eq!(registry.canonical_name(&input), Some("Input1"));
}

#[test]
fn rename_applies_sanitized_name() {
    let (mut registry, tx) = instant_registry();
    let id = registry.insert_named(WidgetType::Button, "Button1");
    tx.send(RegistryCommand::Rename {
        widget_id: id.clone(),
        new_name: "Submit Btn".into(),
    });

    let events = registry.poll(Instant::now());

    assert_eq!(
        events,
        vec![RegistryEvent::Renamed {
            widget_id: id.clone(),
            old_name: "Button1".into(),
            new_name: "SubmitBtn".into(),
        }]
    );
    assert_eq!(registry.canonical_name(&id), Some("SubmitBtn"));
}

#[test]
fn rename_to_sibling_name_is_rejected() {
    let (mut registry, tx) = instant_registry();
    let id = registry.insert_named(WidgetType::Button, "Button1");
    registry.insert_named(WidgetType::Button, "Button2");
    tx.send(RegistryCommand::Rename {
        widget_id: id.clone(),
        new_name: "Button2".into(),
    });

    let events = registry.poll(Instant::now());

    assert_eq!(
        events,
        vec![RegistryEvent::RenameRejected {
            widget_id: id.clone(),
            attempted: "Button2".into(),
            reason: RejectReason::NameInUse,
        }]
    );
    assert_eq!(registry.canonical_name(&id), Some("Button1"));
}

#[test]
fn rename_of_missing_widget_is_rejected() {
    let (mut registry, tx) = instant_registry();
    let ghost = WidgetId::from_string("ghost");
    tx.send(RegistryCommand::Rename {
        widget_id: ghost.clone(),
        new_name: "Anything".into(),
    });

    let events = registry.poll(Instant::now());

    assert!(matches!(
        events.as_slice(),
        [RegistryEvent::RenameRejected {
            reason: RejectReason::UnknownWidget,
            ..
        }]
    ));
}

#[test]
fn rename_to_punctuation_only_is_rejected() {
    let (mut registry, tx) = instant_registry();
    let id = registry.insert_named(WidgetType::Text, "Text1");
    tx.send(RegistryCommand::Rename {
        widget_id: id.clone(),
        new_name: "!!!".into(),
    });

    let events = registry.poll(Instant::now());

    assert!(matches!(
        events.as_slice(),
        [RegistryEvent::RenameRejected {
            reason: RejectReason::InvalidName,
            ..
        }]
    ));
    assert_eq!(registry.canonical_name(&id), Some("Text1"));
}

#[test]
fn updating_flag_tracks_delayed_rename() {
    let (mut registry, tx) = WidgetRegistry::channel(Duration::from_millis(100), 30);
    let id = registry.insert_named(WidgetType::Button, "Button1");
    let start = Instant::now();
    tx.send(RegistryCommand::Rename {
        widget_id: id.clone(),
        new_name: "Submit".into(),
    });

    assert!(registry.poll(start).is_empty());
    assert!(registry.is_updating(&id));
    assert!(registry.has_pending());
    assert_eq!(registry.canonical_name(&id), Some("Button1"));

    let events = registry.poll(start + Duration::from_millis(150));
    assert_eq!(events.len(), 1);
    assert!(!registry.is_updating(&id));
    assert_eq!(registry.canonical_name(&id), Some("Submit"));
}

#[test]
fn commands_apply_in_arrival_order() {
    let (mut registry, tx) = instant_registry();
    let id = registry.insert_named(WidgetType::Button, "Button1");
    tx.send(RegistryCommand::Rename {
        widget_id: id.clone(),
        new_name: "First".into(),
    });
    tx.send(RegistryCommand::Rename {
        widget_id: id.clone(),
        new_name: "Second".into(),
    });

    let events = registry.poll(Instant::now());

    assert_eq!(events.len(), 2);
    assert_eq!(registry.canonical_name(&id), Some("Second"));
}

#[test]
fn copy_creates_widget_of_same_type() {
    let (mut registry, tx) = instant_registry();
    let id = registry.insert_named(WidgetType::Table, "Table1");
    tx.send(RegistryCommand::Copy {
        widget_id: id.clone(),
    });

    let events = registry.poll(Instant::now());

    let [RegistryEvent::Copied { source_id, copy_id }] = events.as_slice() else {
        panic!("expected a copy event, got {events:?}");
    };
    assert_eq!(source_id, &id);
    let copy = registry.get(copy_id).expect("copy exists");
    assert_eq!(copy.widget_type, WidgetType::Table);
    assert_eq!(copy.name, "Table2");
}

#[test]
fn delete_removes_widget_and_ignores_unknown_ids() {
    let (mut registry, tx) = instant_registry();
    let id = registry.insert_named(WidgetType::Image, "Image1");
    tx.send(RegistryCommand::Delete {
        widget_id: id.clone(),
    });
    tx.send(RegistryCommand::Delete {
        widget_id: WidgetId::from_string("ghost"),
    });

    let events = registry.poll(Instant::now());

    assert_eq!(
        events,
        vec![RegistryEvent::Deleted {
            widget_id: id.clone(),
            name: "Image1".to_string(),
        }]
    );
    assert!(registry.get(&id).is_none());
    assert!(registry.existing_names().is_empty());
}

#[test]
fn sending_after_registry_drop_does_not_panic() {
    let (registry, tx) = instant_registry();
    drop(registry);
    tx.send(RegistryCommand::Delete {
        widget_id: WidgetId::new(),
    });
}
