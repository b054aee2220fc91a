//! Element handles the controllers are built from.
//!
//! Handles are reference-like: methods take `&self` and the implementation
//! owns whatever interior mutability it needs, the way a DOM node does.

use shared::domain::ChatRole;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display {
    None,
    Block,
    Flex,
}

impl Display {
    pub fn as_css(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Block => "block",
            Self::Flex => "flex",
        }
    }
}

pub trait Visible {
    fn set_display(&self, display: Display);
}

pub trait ValueField {
    fn value(&self) -> String;
    fn set_value(&self, value: &str);
}

/// Plain text content; never interpreted as markup.
pub trait TextSlot {
    fn set_text(&self, text: &str);
}

pub trait LinkSlot {
    fn set_href(&self, href: &str);
}

pub trait AttributeSource {
    fn attribute(&self, name: &str) -> Option<String>;
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntryId(String);

impl EntryId {
    pub fn placeholder(seq: u64) -> Self {
        Self(format!("chat-loading-{seq}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatEntry {
    pub role: ChatRole,
    pub text: String,
    pub id: Option<EntryId>,
}

impl ChatEntry {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
            id: None,
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Bot,
            text: text.into(),
            id: None,
        }
    }

    pub fn tagged(mut self, id: EntryId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn class_name(&self) -> String {
        format!("chat-message {}", self.role.as_class())
    }
}

/// Append-only message list with removable tagged entries.
pub trait MessageLog {
    fn append(&self, entry: &ChatEntry);
    /// Returns `false` when no entry carries `id`.
    fn remove(&self, id: &EntryId) -> bool;
    fn scroll_to_latest(&self);
}

/// Resolves the page's elements. Lookups that miss return `None`; callers
/// treat that as "feature not on this page".
pub trait PageDocument {
    type Element: Clone + Visible + ValueField + TextSlot + LinkSlot + AttributeSource;
    type Log: MessageLog;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;
    fn query_selector(&self, selector: &str) -> Option<Self::Element>;
    fn message_log(&self, id: &str) -> Option<Self::Log>;
}
