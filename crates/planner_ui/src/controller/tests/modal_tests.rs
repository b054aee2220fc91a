use super::*;
use crate::headless::HeadlessElement;

struct Fixture {
    root: HeadlessElement,
    title: HeadlessElement,
    description: HeadlessElement,
    address: HeadlessElement,
    map: HeadlessElement,
    modal: PlaceModal<HeadlessElement>,
}

fn fixture() -> Fixture {
    let root = HeadlessElement::new();
    let title = HeadlessElement::new();
    let description = HeadlessElement::new();
    let address = HeadlessElement::new();
    let map = HeadlessElement::new();
    let modal = PlaceModal::new(
        root.clone(),
        PlaceModalFields {
            title: title.clone(),
            description: description.clone(),
            address: address.clone(),
            map: map.clone(),
        },
    );
    Fixture {
        root,
        title,
        description,
        address,
        map,
        modal,
    }
}

fn eiffel() -> HeadlessElement {
    HeadlessElement::new()
        .with_attribute("data-name", "Eiffel Tower")
        .with_attribute("data-desc", "Iconic tower")
        .with_attribute("data-address", "Paris")
        .with_attribute("data-map", "https://maps.example/x")
}

#[test]
fn starts_hidden() {
    let f = fixture();
    assert_eq!(f.modal.state(), ModalState::Hidden);
    assert_eq!(f.root.display(), None);
}

#[test]
fn open_renders_attributes_verbatim() {
    let f = fixture();
    let details = f.modal.open_detail(&eiffel());

    assert_eq!(details.name, "Eiffel Tower");
    assert_eq!(f.title.text(), "Eiffel Tower");
    assert_eq!(f.description.text(), "Iconic tower");
    assert_eq!(f.address.text(), "Address: Paris");
    assert_eq!(f.map.href().as_deref(), Some("https://maps.example/x"));
    assert_eq!(f.root.display(), Some(Display::Flex));
    assert_eq!(f.modal.state(), ModalState::Visible);
}

#[test]
fn reopening_replaces_content() {
    let f = fixture();
    f.modal.open_detail(&eiffel());
    f.modal.open_detail(
        &HeadlessElement::new()
            .with_attribute("data-name", "Louvre")
            .with_attribute("data-address", "Rue de Rivoli"),
    );

    assert_eq!(f.title.text(), "Louvre");
    assert_eq!(f.description.text(), "");
    assert_eq!(f.address.text(), "Address: Rue de Rivoli");
    assert_eq!(f.map.href().as_deref(), Some(""));
    assert_eq!(f.modal.state(), ModalState::Visible);
}

#[test]
fn backdrop_click_closes() {
    let f = fixture();
    f.modal.open_detail(&eiffel());
    assert!(f.modal.handle_click(ClickTarget::Backdrop));
    assert_eq!(f.root.display(), Some(Display::None));
    assert_eq!(f.modal.state(), ModalState::Hidden);
}

#[test]
fn click_inside_content_keeps_modal_open() {
    let f = fixture();
    f.modal.open_detail(&eiffel());
    assert!(!f.modal.handle_click(ClickTarget::Elsewhere));
    assert_eq!(f.root.display(), Some(Display::Flex));
    assert_eq!(f.modal.state(), ModalState::Visible);
}

#[test]
fn close_is_idempotent() {
    let f = fixture();
    f.modal.close();
    f.modal.close();
    assert_eq!(f.modal.state(), ModalState::Hidden);
    assert_eq!(f.root.display(), Some(Display::None));
}
