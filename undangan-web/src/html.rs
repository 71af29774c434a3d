//! Markup tree produced by the renderers, and its serializer.
//!
//! Text nodes and attribute values are escaped on serialization. `Raw`
//! nodes are written as-is and must only hold markup built by this crate.

use std::fmt::{self, Write};

use undangan_client::escape_html;

const VOID_TAGS: [&str; 4] = ["br", "hr", "img", "input"];

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Html {
    Element(Element),
    Text(String),
    Raw(String),
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Element {
    pub tag: &'static str,
    pub attrs: Vec<(&'static str, String)>,
    pub children: Vec<Html>,
}

impl Element {
    pub fn new(tag: &'static str) -> Element {
        Element {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Element {
        self.attrs.push((name, value.into()));
        self
    }

    pub fn class(self, value: impl Into<String>) -> Element {
        self.attr("class", value)
    }

    pub fn id(self, value: impl Into<String>) -> Element {
        self.attr("id", value)
    }

    pub fn child(mut self, child: impl Into<Html>) -> Element {
        self.children.push(child.into());
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Html>) -> Element {
        self.children.extend(children);
        self
    }

    pub fn text(self, text: impl Into<String>) -> Element {
        self.child(Html::Text(text.into()))
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v as &str)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .map_or(false, |c| c.split_whitespace().any(|c| c == class))
    }

    /// Direct children that are elements
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Html::as_element)
    }

    /// Depth-first search, including `self`
    pub fn find(&self, pred: &dyn Fn(&Element) -> bool) -> Option<&Element> {
        if pred(self) {
            return Some(self);
        }
        self.child_elements().find_map(|c| c.find(pred))
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        self.find(&|e: &Element| e.get_attr("id") == Some(id))
    }

    /// Concatenated text of all descendants, raw markup included verbatim
    pub fn text_content(&self) -> String {
        let mut res = String::new();
        self.push_text(&mut res);
        res
    }

    fn push_text(&self, res: &mut String) {
        for c in &self.children {
            match c {
                Html::Element(e) => e.push_text(res),
                Html::Text(t) | Html::Raw(t) => res.push_str(t),
            }
        }
    }
}

impl Html {
    pub fn raw(markup: impl Into<String>) -> Html {
        Html::Raw(markup.into())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Html::Element(e) => Some(e),
            _ => None,
        }
    }

    pub fn to_markup(&self) -> String {
        self.to_string()
    }
}

impl From<Element> for Html {
    fn from(e: Element) -> Html {
        Html::Element(e)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        for (name, value) in &self.attrs {
            write!(f, " {}=\"{}\"", name, escape_html(value))?;
        }
        f.write_char('>')?;
        if VOID_TAGS.contains(&self.tag) {
            return Ok(());
        }
        for c in &self.children {
            write!(f, "{c}")?;
        }
        write!(f, "</{}>", self.tag)
    }
}

impl fmt::Display for Html {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Html::Element(e) => fmt::Display::fmt(e, f),
            Html::Text(t) => f.write_str(&escape_html(t)),
            Html::Raw(m) => f.write_str(m),
        }
    }
}
