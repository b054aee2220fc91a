use super::*;
use crate::headless::HeadlessElement;

struct Fixture {
    selector: HeadlessElement,
    wrapper: HeadlessElement,
    count: HeadlessElement,
    controller: TravelerCountController<HeadlessElement>,
}

fn fixture(kind: &str, count: &str) -> Fixture {
    let selector = HeadlessElement::new().with_value(kind);
    let wrapper = HeadlessElement::new();
    let count = HeadlessElement::new().with_value(count);
    let controller = TravelerCountController::new(selector.clone(), wrapper.clone(), count.clone());
    Fixture {
        selector,
        wrapper,
        count,
        controller,
    }
}

#[test]
fn couple_hides_count_and_forces_two() {
    let f = fixture("Couple", "7");
    f.controller.sync_with_selector();
    assert_eq!(f.wrapper.display(), Some(Display::None));
    assert_eq!(f.count.value(), "2");
}

#[test]
fn solo_and_unknown_hide_count_and_force_one() {
    for kind in ["Solo", "Business", ""] {
        let f = fixture(kind, "5");
        f.controller.sync_with_selector();
        assert_eq!(f.wrapper.display(), Some(Display::None), "{kind}");
        assert_eq!(f.count.value(), "1", "{kind}");
    }
}

#[test]
fn groups_show_count_and_default_to_four() {
    for kind in ["Family", "Friends"] {
        let f = fixture(kind, "1");
        f.controller.sync_with_selector();
        assert_eq!(f.wrapper.display(), Some(Display::Block));
        assert_eq!(f.count.value(), "4");
    }
}

#[test]
fn groups_keep_an_existing_group_size() {
    let f = fixture("Friends", "6");
    f.controller.sync_with_selector();
    assert_eq!(f.wrapper.display(), Some(Display::Block));
    assert_eq!(f.count.value(), "6");
}

#[test]
fn switching_types_follows_the_selector() {
    let f = fixture("Solo", "");
    f.controller.sync_with_selector();
    assert_eq!(f.count.value(), "1");

    f.selector.set_value("Family");
    f.controller.sync_with_selector();
    assert_eq!(f.count.value(), "4");

    f.controller.adjust_count(2);
    f.selector.set_value("Friends");
    f.controller.sync_with_selector();
    assert_eq!(f.count.value(), "6");

    f.selector.set_value("Couple");
    f.controller.sync_with_selector();
    assert_eq!(f.count.value(), "2");
    assert_eq!(f.wrapper.display(), Some(Display::None));
}

#[test]
fn adjust_count_is_floored_at_one() {
    let f = fixture("Family", "2");
    assert_eq!(f.controller.adjust_count(-1), 1);
    assert_eq!(f.controller.adjust_count(-1), 1);
    assert_eq!(f.controller.adjust_count(-10), 1);
    assert_eq!(f.count.value(), "1");
    assert_eq!(f.controller.adjust_count(3), 4);
    assert_eq!(f.count.value(), "4");
}

#[test]
fn adjust_count_recovers_from_non_numeric_value() {
    let f = fixture("Family", "lots");
    assert_eq!(f.controller.adjust_count(1), 2);
    assert_eq!(f.count.value(), "2");
}

#[test]
fn selection_reflects_fields() {
    let f = fixture("Friends", "5");
    let selection = f.controller.selection();
    assert_eq!(selection.kind, TravelerType::Friends);
    assert_eq!(selection.count, 5);
    assert_eq!(selection.describe(), "Friends group of 5");
}
