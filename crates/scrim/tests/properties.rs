//! Property tests for the configuration merge and the scroll lock.

use proptest::prelude::*;
use scrim::{
    BodyStyle, ModalConfig, ModalConfigPatch, Page, StyleMap, scroll::ScrollLock, style,
    testing::TestPage,
};

proptest! {
    /// The merged configuration equals the defaults with only the supplied
    /// keys replaced.
    #[test]
    fn merge_replaces_only_supplied_keys(
        close_on_esc in proptest::option::of(any::<bool>()),
        close_on_outside_click in proptest::option::of(any::<bool>()),
        unstyled in proptest::option::of(any::<bool>()),
        focus_trap_disabled in proptest::option::of(any::<bool>()),
        aria_label in proptest::option::of("[a-z]{1,12}"),
        window_class in proptest::option::of("[a-z-]{1,16}"),
    ) {
        let mut patch = ModalConfigPatch::new();
        patch.close_on_esc = close_on_esc;
        patch.close_on_outside_click = close_on_outside_click;
        patch.unstyled = unstyled;
        patch.focus_trap_disabled = focus_trap_disabled;
        patch.aria_label = aria_label.clone();
        patch.window_class = window_class.clone();

        let merged = ModalConfig::merged(&patch);
        prop_assert_eq!(merged.close_on_esc, close_on_esc.unwrap_or(true));
        prop_assert_eq!(
            merged.close_on_outside_click,
            close_on_outside_click.unwrap_or(true)
        );
        prop_assert_eq!(merged.unstyled, unstyled.unwrap_or(false));
        prop_assert_eq!(
            merged.focus_trap_disabled,
            focus_trap_disabled.unwrap_or(false)
        );
        prop_assert_eq!(merged.aria_label, aria_label);
        prop_assert_eq!(merged.classes.window, window_class);
        // Keys never mentioned by the patch keep their defaults.
        prop_assert_eq!(merged.aria_labelled_by, None);
        prop_assert!(merged.close_button.is_present());
        prop_assert_eq!(merged.styles.background, None);
    }

    /// Engage then disengage restores body style and scroll position exactly,
    /// for any prior inline values.
    #[test]
    fn scroll_lock_restores_exactly(
        offset in 0i64..100_000,
        position in proptest::option::of("static|relative|absolute"),
        overflow in proptest::option::of("auto|scroll|visible"),
        width in proptest::option::of("[1-9][0-9]?%"),
    ) {
        let mut page = TestPage::new(1280, 1024);
        page.scroll_to(offset);
        page.set_body_style(BodyStyle::Position, position);
        page.set_body_style(BodyStyle::Overflow, overflow);
        page.set_body_style(BodyStyle::Width, width);
        let baseline = page.body_styles().clone();

        let mut lock = ScrollLock::new();
        lock.engage(&mut page);
        lock.disengage(&mut page);

        prop_assert_eq!(page.body_styles(), &baseline);
        prop_assert_eq!(page.scroll_offset(), offset);
    }

    /// Every resolved style pair appears in kebab case with its value.
    #[test]
    fn resolved_styles_keep_every_pair(
        entries in proptest::collection::btree_map(
            "[a-z]{1,6}([A-Z][a-z]{1,6}){0,2}",
            "[a-z0-9%# ]{1,10}",
            1..6,
        ),
    ) {
        let map: StyleMap = entries;
        let resolved = style::resolve(&map).unwrap();
        for value in map.values() {
            prop_assert!(resolved.contains(value.as_str()));
        }
        prop_assert!(resolved.starts_with("; "));
        prop_assert_eq!(resolved.matches("; ").count(), map.len());
    }
}
