use tracing::warn;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, EventTarget, HtmlAnchorElement, HtmlElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement, Node,
};

use crate::dom::{
    AttributeSource, ChatEntry, Display, EntryId, LinkSlot, MessageLog, PageDocument, TextSlot,
    ValueField, Visible,
};

#[derive(Debug, Clone)]
pub struct WebElement {
    element: HtmlElement,
}

impl WebElement {
    pub fn new(element: HtmlElement) -> Self {
        Self { element }
    }

    /// True when `target` is this very node, not one of its descendants.
    pub fn is_target(&self, target: Option<&EventTarget>) -> bool {
        let node = target.and_then(|target| target.dyn_ref::<Node>());
        node.is_some() && self.element.is_same_node(node)
    }
}

impl Visible for WebElement {
    fn set_display(&self, display: Display) {
        if let Err(err) = self
            .element
            .style()
            .set_property("display", display.as_css())
        {
            warn!(id = %self.element.id(), error = ?err, "failed to set display");
        }
    }
}

impl ValueField for WebElement {
    fn value(&self) -> String {
        if let Some(input) = self.element.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(select) = self.element.dyn_ref::<HtmlSelectElement>() {
            select.value()
        } else if let Some(area) = self.element.dyn_ref::<HtmlTextAreaElement>() {
            area.value()
        } else {
            self.element.get_attribute("value").unwrap_or_default()
        }
    }

    fn set_value(&self, value: &str) {
        if let Some(input) = self.element.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
        } else if let Some(select) = self.element.dyn_ref::<HtmlSelectElement>() {
            select.set_value(value);
        } else if let Some(area) = self.element.dyn_ref::<HtmlTextAreaElement>() {
            area.set_value(value);
        } else if let Err(err) = self.element.set_attribute("value", value) {
            warn!(id = %self.element.id(), error = ?err, "failed to set value");
        }
    }
}

impl TextSlot for WebElement {
    fn set_text(&self, text: &str) {
        self.element.set_inner_text(text);
    }
}

impl LinkSlot for WebElement {
    fn set_href(&self, href: &str) {
        if let Some(anchor) = self.element.dyn_ref::<HtmlAnchorElement>() {
            anchor.set_href(href);
        } else if let Err(err) = self.element.set_attribute("href", href) {
            warn!(id = %self.element.id(), error = ?err, "failed to set href");
        }
    }
}

impl AttributeSource for WebElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.element.get_attribute(name)
    }
}

/// The chat body: each entry becomes a `div.chat-message.<role>`.
#[derive(Debug, Clone)]
pub struct WebMessageLog {
    document: Document,
    body: HtmlElement,
}

impl WebMessageLog {
    pub fn new(document: Document, body: HtmlElement) -> Self {
        Self { document, body }
    }
}

impl MessageLog for WebMessageLog {
    fn append(&self, entry: &ChatEntry) {
        let div = match self.document.create_element("div") {
            Ok(div) => div,
            Err(err) => {
                warn!(error = ?err, "failed to create chat entry");
                return;
            }
        };
        div.set_class_name(&entry.class_name());
        if let Some(id) = &entry.id {
            div.set_id(id.as_str());
        }
        match div.dyn_ref::<HtmlElement>() {
            Some(html) => html.set_inner_text(&entry.text),
            None => div.set_text_content(Some(&entry.text)),
        }
        if let Err(err) = self.body.append_child(&div) {
            warn!(error = ?err, "failed to append chat entry");
        }
    }

    fn remove(&self, id: &EntryId) -> bool {
        match self.document.get_element_by_id(id.as_str()) {
            Some(entry) => {
                entry.remove();
                true
            }
            None => false,
        }
    }

    fn scroll_to_latest(&self) {
        self.body.set_scroll_top(self.body.scroll_height());
    }
}

#[derive(Debug, Clone)]
pub struct WebDocument {
    document: Document,
}

impl WebDocument {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl PageDocument for WebDocument {
    type Element = WebElement;
    type Log = WebMessageLog;

    fn element_by_id(&self, id: &str) -> Option<WebElement> {
        self.document
            .get_element_by_id(id)
            .and_then(|element| element.dyn_into::<HtmlElement>().ok())
            .map(WebElement::new)
    }

    fn query_selector(&self, selector: &str) -> Option<WebElement> {
        self.document
            .query_selector(selector)
            .ok()
            .flatten()
            .and_then(|element| element.dyn_into::<HtmlElement>().ok())
            .map(WebElement::new)
    }

    fn message_log(&self, id: &str) -> Option<WebMessageLog> {
        self.element_by_id(id)
            .map(|body| WebMessageLog::new(self.document.clone(), body.element))
    }
}
