use n2xt_core::{
    filter_visible, matches_filter, AddOutcome, CoreConfig, FieldKind, FormField, KeyValueStore,
    ManualClock, MemoryStore, NotificationKind, SqliteStore, Storefront, Theme, CART_RECORD_KEY,
    THEME_RECORD_KEY,
};

#[test]
fn add_to_cart_shows_success_notification_and_updates_badge() {
    let store = MemoryStore::new();
    let clock = ManualClock::new(0);
    let mut storefront = Storefront::open(&store, &clock, &CoreConfig::default());
    assert!(!storefront.badge_visible());

    storefront.add_to_cart("p1", "Widget", 9.99);

    let notification = storefront.current_notification().unwrap();
    assert_eq!(notification.message, "Widget added to cart!");
    assert_eq!(notification.kind, NotificationKind::Success);
    assert_eq!(storefront.total_item_count(), 1);
    assert!(storefront.badge_visible());
}

#[test]
fn rejected_add_shows_nothing() {
    let store = MemoryStore::new();
    let clock = ManualClock::new(0);
    let mut storefront = Storefront::open(&store, &clock, &CoreConfig::default());

    let outcome = storefront.add_to_cart("", "Ghost", 1.0);
    assert!(matches!(outcome, AddOutcome::Rejected(_)));
    assert!(storefront.current_notification().is_none());
    assert_eq!(storefront.total_item_count(), 0);
}

#[test]
fn storage_failure_surfaces_warning_and_keeps_cart_in_memory() {
    let store = MemoryStore::with_quota(16);
    let clock = ManualClock::new(0);
    let mut storefront = Storefront::open(&store, &clock, &CoreConfig::default());

    let outcome = storefront.add_to_cart("p1", "Widget", 9.99);
    assert!(matches!(outcome, AddOutcome::AddedNotPersisted { .. }));
    assert_eq!(
        storefront.current_notification().unwrap().kind,
        NotificationKind::Warning
    );
    assert_eq!(storefront.total_item_count(), 1);
}

#[test]
fn second_add_replaces_first_notification() {
    let store = MemoryStore::new();
    let clock = ManualClock::new(0);
    let mut storefront = Storefront::open(&store, &clock, &CoreConfig::default());

    storefront.add_to_cart("p1", "Widget", 9.99);
    let first_timer = storefront.presenter().pending_timer().unwrap();
    clock.advance(1_000);
    storefront.add_to_cart("p2", "Gadget", 5.0);

    clock.advance(4_500);
    assert!(storefront.on_timer_elapsed(first_timer).is_none());
    assert_eq!(
        storefront.current_notification().unwrap().message,
        "Gadget added to cart!"
    );
}

#[test]
fn configured_timeout_drives_auto_dismiss() {
    let store = MemoryStore::new();
    let clock = ManualClock::new(0);
    let config = CoreConfig::from_json_str(r#"{"notification_timeout_ms": 1200}"#).unwrap();
    let mut storefront = Storefront::open(&store, &clock, &config);

    storefront.notify("quick", NotificationKind::Info);
    clock.advance(1_199);
    assert!(storefront.poll().is_none());
    clock.advance(1);
    assert!(storefront.poll().is_some());
}

#[test]
fn dismiss_removes_current_notification() {
    let store = MemoryStore::new();
    let clock = ManualClock::new(0);
    let mut storefront = Storefront::open(&store, &clock, &CoreConfig::default());

    storefront.notify("bye", NotificationKind::Info);
    assert!(storefront.dismiss().is_some());
    assert!(storefront.current_notification().is_none());
}

#[test]
fn open_restores_cart_from_store() {
    let store = SqliteStore::open_in_memory().unwrap();
    store
        .set_item(
            CART_RECORD_KEY,
            r#"[{"id":"p1","name":"Widget","price":9.99,"quantity":3}]"#,
        )
        .unwrap();

    let clock = ManualClock::new(0);
    let storefront = Storefront::open(&store, &clock, &CoreConfig::default());
    assert_eq!(storefront.total_item_count(), 3);
    assert_eq!(storefront.cart_items()[0].name, "Widget");
}

#[test]
fn theme_defaults_to_dark_and_toggle_persists() {
    let store = MemoryStore::new();
    let clock = ManualClock::new(0);
    let mut storefront = Storefront::open(&store, &clock, &CoreConfig::default());
    assert_eq!(storefront.theme(), Theme::Dark);

    assert_eq!(storefront.toggle_theme(), Theme::Light);
    assert_eq!(
        store.get_item(THEME_RECORD_KEY).unwrap().as_deref(),
        Some("light")
    );

    let reopened = Storefront::open(&store, &clock, &CoreConfig::default());
    assert_eq!(reopened.theme(), Theme::Light);
}

#[test]
fn unknown_theme_value_falls_back_to_dark() {
    let store = MemoryStore::new();
    store.set_item(THEME_RECORD_KEY, "sepia").unwrap();

    let clock = ManualClock::new(0);
    let storefront = Storefront::open(&store, &clock, &CoreConfig::default());
    assert_eq!(storefront.theme(), Theme::Dark);
}

#[test]
fn valid_form_submission_shows_success() {
    let store = MemoryStore::new();
    let clock = ManualClock::new(0);
    let mut storefront = Storefront::open(&store, &clock, &CoreConfig::default());

    let fields = vec![
        FormField::required("name", FieldKind::Text, "Ava"),
        FormField::required("email", FieldKind::Email, "ava@n2xt.gg"),
        FormField::required("phone", FieldKind::Tel, "+44 (20) 7946-0018"),
        FormField::optional("company", FieldKind::Text, ""),
    ];

    assert!(storefront.submit_form(&fields).is_empty());
    let notification = storefront.current_notification().unwrap();
    assert_eq!(notification.message, "Form submitted successfully!");
    assert_eq!(notification.kind, NotificationKind::Success);
}

#[test]
fn invalid_form_submission_reports_each_field() {
    let store = MemoryStore::new();
    let clock = ManualClock::new(0);
    let mut storefront = Storefront::open(&store, &clock, &CoreConfig::default());

    let fields = vec![
        FormField::required("name", FieldKind::Text, "   "),
        FormField::required("email", FieldKind::Email, "ava@n2xt"),
        FormField::required("phone", FieldKind::Tel, "0123"),
        FormField::optional("website", FieldKind::Email, "not-an-email"),
    ];

    let errors = storefront.submit_form(&fields);
    let messages: Vec<(&str, &str)> = errors
        .iter()
        .map(|error| (error.field.as_str(), error.message))
        .collect();
    assert_eq!(
        messages,
        vec![
            ("name", "This field is required"),
            ("email", "Please enter a valid email address"),
            ("phone", "Please enter a valid phone number"),
        ]
    );
    let notification = storefront.current_notification().unwrap();
    assert_eq!(notification.message, "Please fix the errors in the form.");
    assert_eq!(notification.kind, NotificationKind::Error);
}

#[test]
fn phone_written_in_non_ascii_digits_fails_form_check() {
    let store = MemoryStore::new();
    let clock = ManualClock::new(0);
    let mut storefront = Storefront::open(&store, &clock, &CoreConfig::default());

    let fields = vec![FormField::required(
        "phone",
        FieldKind::Tel,
        "1\u{0662}\u{0663}\u{0664}\u{0665}",
    )];

    let errors = storefront.submit_form(&fields);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "Please enter a valid phone number");
    assert_eq!(
        storefront.current_notification().unwrap().kind,
        NotificationKind::Error
    );
}

#[test]
fn catalog_filter_all_shows_everything() {
    let games = [("Valorant", "fps"), ("League", "moba"), ("CS2", "fps")];

    let all = filter_visible(&games, "all", |game| game.1);
    assert_eq!(all.len(), 3);

    let fps: Vec<&str> = filter_visible(&games, "fps", |game| game.1)
        .into_iter()
        .map(|game| game.0)
        .collect();
    assert_eq!(fps, vec!["Valorant", "CS2"]);

    assert!(!matches_filter("moba", "fps"));
    assert!(filter_visible(&games, "rts", |game| game.1).is_empty());
}
