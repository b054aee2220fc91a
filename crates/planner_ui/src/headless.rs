//! In-memory element handles. Clones share state, so a test or a terminal
//! front end can keep one handle and inspect what a controller did to it.

use std::{
    cell::RefCell,
    collections::{BTreeMap, HashMap},
    rc::Rc,
};

use crate::dom::{
    AttributeSource, ChatEntry, Display, EntryId, LinkSlot, MessageLog, PageDocument, TextSlot,
    ValueField, Visible,
};
use crate::page::ids;

#[derive(Debug, Default)]
struct ElementState {
    display: Option<Display>,
    value: String,
    text: String,
    href: Option<String>,
    attributes: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default)]
pub struct HeadlessElement {
    state: Rc<RefCell<ElementState>>,
}

impl HeadlessElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(self, value: &str) -> Self {
        self.state.borrow_mut().value = value.to_string();
        self
    }

    pub fn with_attribute(self, name: &str, value: &str) -> Self {
        self.state
            .borrow_mut()
            .attributes
            .insert(name.to_string(), value.to_string());
        self
    }

    /// `None` until a controller sets it.
    pub fn display(&self) -> Option<Display> {
        self.state.borrow().display
    }

    pub fn text(&self) -> String {
        self.state.borrow().text.clone()
    }

    pub fn href(&self) -> Option<String> {
        self.state.borrow().href.clone()
    }
}

impl Visible for HeadlessElement {
    fn set_display(&self, display: Display) {
        self.state.borrow_mut().display = Some(display);
    }
}

impl ValueField for HeadlessElement {
    fn value(&self) -> String {
        self.state.borrow().value.clone()
    }

    fn set_value(&self, value: &str) {
        self.state.borrow_mut().value = value.to_string();
    }
}

impl TextSlot for HeadlessElement {
    fn set_text(&self, text: &str) {
        self.state.borrow_mut().text = text.to_string();
    }
}

impl LinkSlot for HeadlessElement {
    fn set_href(&self, href: &str) {
        self.state.borrow_mut().href = Some(href.to_string());
    }
}

impl AttributeSource for HeadlessElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.state.borrow().attributes.get(name).cloned()
    }
}

#[derive(Debug, Default)]
struct LogState {
    entries: Vec<ChatEntry>,
    scrolled_to: usize,
}

#[derive(Debug, Clone, Default)]
pub struct HeadlessLog {
    state: Rc<RefCell<LogState>>,
}

impl HeadlessLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<ChatEntry> {
        self.state.borrow().entries.clone()
    }

    pub fn len(&self) -> usize {
        self.state.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True when the last scroll happened with the current last entry in place.
    pub fn shows_latest(&self) -> bool {
        let state = self.state.borrow();
        state.scrolled_to == state.entries.len()
    }
}

impl MessageLog for HeadlessLog {
    fn append(&self, entry: &ChatEntry) {
        self.state.borrow_mut().entries.push(entry.clone());
    }

    fn remove(&self, id: &EntryId) -> bool {
        let mut state = self.state.borrow_mut();
        let Some(pos) = state
            .entries
            .iter()
            .position(|entry| entry.id.as_ref() == Some(id))
        else {
            return false;
        };
        state.entries.remove(pos);
        if state.scrolled_to > state.entries.len() {
            state.scrolled_to = state.entries.len();
        }
        true
    }

    fn scroll_to_latest(&self) {
        let mut state = self.state.borrow_mut();
        state.scrolled_to = state.entries.len();
    }
}

#[derive(Debug, Default)]
pub struct HeadlessDocument {
    elements: HashMap<String, HeadlessElement>,
    selectors: HashMap<String, HeadlessElement>,
    logs: HashMap<String, HeadlessLog>,
}

impl HeadlessDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every element the planner page wires, with the traveler selector on
    /// `Solo` and an empty count.
    pub fn planner_page() -> Self {
        let mut document = Self::new();
        document.insert(ids::PLANNER_FORM, HeadlessElement::new());
        document.insert(ids::LOADING_OVERLAY, HeadlessElement::new());
        document.insert(ids::TRAVELERS_TYPE, HeadlessElement::new().with_value("Solo"));
        document.insert(ids::TRAVELER_COUNT_WRAPPER, HeadlessElement::new());
        document.insert(ids::TRAVELERS_COUNT, HeadlessElement::new());
        document.insert(ids::PLACE_MODAL, HeadlessElement::new());
        document.insert_selector(ids::CLOSE_MODAL_SELECTOR, HeadlessElement::new());
        document.insert(ids::MODAL_TITLE, HeadlessElement::new());
        document.insert(ids::MODAL_DESCRIPTION, HeadlessElement::new());
        document.insert(ids::MODAL_ADDRESS, HeadlessElement::new());
        document.insert(ids::MODAL_MAP, HeadlessElement::new());
        document.insert(ids::CHAT_WIDGET, HeadlessElement::new());
        document.insert(ids::CHAT_TOGGLE, HeadlessElement::new());
        document.insert(ids::CLOSE_CHAT, HeadlessElement::new());
        document.insert(ids::CHAT_INPUT, HeadlessElement::new());
        document.insert(ids::SEND_BUTTON, HeadlessElement::new());
        document.insert_log(ids::CHAT_BODY, HeadlessLog::new());
        document
    }

    pub fn insert(&mut self, id: &str, element: HeadlessElement) -> HeadlessElement {
        self.elements.insert(id.to_string(), element.clone());
        element
    }

    pub fn insert_selector(&mut self, selector: &str, element: HeadlessElement) -> HeadlessElement {
        self.selectors.insert(selector.to_string(), element.clone());
        element
    }

    pub fn insert_log(&mut self, id: &str, log: HeadlessLog) -> HeadlessLog {
        self.logs.insert(id.to_string(), log.clone());
        log
    }

    pub fn remove(&mut self, id: &str) -> Option<HeadlessElement> {
        self.elements.remove(id)
    }

    pub fn remove_log(&mut self, id: &str) -> Option<HeadlessLog> {
        self.logs.remove(id)
    }
}

impl PageDocument for HeadlessDocument {
    type Element = HeadlessElement;
    type Log = HeadlessLog;

    fn element_by_id(&self, id: &str) -> Option<HeadlessElement> {
        self.elements.get(id).cloned()
    }

    fn query_selector(&self, selector: &str) -> Option<HeadlessElement> {
        self.selectors.get(selector).cloned()
    }

    fn message_log(&self, id: &str) -> Option<HeadlessLog> {
        self.logs.get(id).cloned()
    }
}
