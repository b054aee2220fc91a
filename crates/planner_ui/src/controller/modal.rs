use std::cell::Cell;

use shared::domain::PlaceDetails;

use crate::dom::{AttributeSource, Display, LinkSlot, TextSlot, Visible};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalState {
    Hidden,
    Visible,
}

/// Where a page click landed relative to the modal root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The modal root itself, i.e. the backdrop around the content.
    Backdrop,
    Elsewhere,
}

pub struct PlaceModalFields<E> {
    pub title: E,
    pub description: E,
    pub address: E,
    pub map: E,
}

pub struct PlaceModal<E> {
    root: E,
    fields: PlaceModalFields<E>,
    state: Cell<ModalState>,
}

impl<E> PlaceModal<E>
where
    E: Visible + TextSlot + LinkSlot,
{
    pub fn new(root: E, fields: PlaceModalFields<E>) -> Self {
        Self {
            root,
            fields,
            state: Cell::new(ModalState::Hidden),
        }
    }

    pub fn state(&self) -> ModalState {
        self.state.get()
    }

    pub fn open_detail<A>(&self, source: &A) -> PlaceDetails
    where
        A: AttributeSource + ?Sized,
    {
        let details = PlaceDetails::from_attributes(|name| source.attribute(name));
        self.show(&details);
        details
    }

    /// Replaces all four fields, then shows the modal.
    pub fn show(&self, details: &PlaceDetails) {
        self.fields.title.set_text(&details.name);
        self.fields.description.set_text(&details.description);
        self.fields.address.set_text(&details.address_line());
        self.fields.map.set_href(&details.map_link);
        self.root.set_display(Display::Flex);
        self.state.set(ModalState::Visible);
    }

    pub fn close(&self) {
        self.root.set_display(Display::None);
        self.state.set(ModalState::Hidden);
    }

    /// Returns whether the click closed the modal.
    pub fn handle_click(&self, target: ClickTarget) -> bool {
        match target {
            ClickTarget::Backdrop => {
                self.close();
                true
            }
            ClickTarget::Elsewhere => false,
        }
    }
}

#[cfg(test)]
#[path = "tests/modal_tests.rs"]
mod tests;
