//! A small retained element tree.
//!
//! Rendered cards live here and nowhere else: values are read back from the
//! tree by their `data-field` tags, and selection state lives on the
//! checkbox controls themselves. The tree serializes to HTML for static
//! output.

use std::fmt;

/// Interactive state carried by an `input` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Control {
    Checkbox { checked: bool },
    Text { name: String, value: String },
    Hidden { name: String, value: String },
}

/// One node of the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    data: Vec<(String, String)>,
    text: Option<String>,
    control: Option<Control>,
    children: Vec<Element>,
}

impl Element {
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            id: None,
            classes: Vec::new(),
            data: Vec::new(),
            text: None,
            control: None,
            children: Vec::new(),
        }
    }

    /// A `div` carrying the given (space-separated) classes.
    #[must_use]
    pub fn div(classes: &str) -> Self {
        Self::new("div").with_class(classes)
    }

    #[must_use]
    pub fn checkbox() -> Self {
        Self::new("input").with_control(Control::Checkbox { checked: false })
    }

    #[must_use]
    pub fn text_input(name: impl Into<String>) -> Self {
        Self::new("input").with_control(Control::Text {
            name: name.into(),
            value: String::new(),
        })
    }

    #[must_use]
    pub fn hidden_input(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new("input").with_control(Control::Hidden {
            name: name.into(),
            value: value.into(),
        })
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Adds one or more space-separated classes.
    #[must_use]
    pub fn with_class(mut self, classes: &str) -> Self {
        self.classes
            .extend(classes.split_whitespace().map(str::to_string));
        self
    }

    /// Sets a `data-*` attribute; `key` is given without the prefix.
    #[must_use]
    pub fn with_data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_data(key, value);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    #[must_use]
    pub fn with_control(mut self, control: Control) -> Self {
        self.control = Some(control);
        self
    }

    #[must_use]
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn append_child(&mut self, child: Element) {
        self.children.push(child);
    }

    pub fn set_data(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.data.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.data.push((key, value)),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn data(&self, key: &str) -> Option<&str> {
        self.data
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn control(&self) -> Option<&Control> {
        self.control.as_ref()
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [Element] {
        &mut self.children
    }

    /// Own text followed by the text of every descendant, in document order.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        if let Some(text) = &self.text {
            out.push_str(text);
        }
        for child in &self.children {
            child.collect_text(out);
        }
    }

    /// First descendant (not `self`) matching `pred`, depth-first.
    pub fn find(&self, pred: impl Fn(&Element) -> bool + Copy) -> Option<&Element> {
        self.children.iter().find_map(|child| {
            if pred(child) {
                Some(child)
            } else {
                child.find(pred)
            }
        })
    }

    pub fn find_mut(&mut self, pred: impl Fn(&Element) -> bool + Copy) -> Option<&mut Element> {
        for child in &mut self.children {
            if pred(child) {
                return Some(child);
            }
            if let Some(found) = child.find_mut(pred) {
                return Some(found);
            }
        }
        None
    }

    /// Every descendant matching `pred`, depth-first.
    pub fn find_all(&self, pred: impl Fn(&Element) -> bool + Copy) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect_matching(pred, &mut found);
        found
    }

    fn collect_matching<'a>(
        &'a self,
        pred: impl Fn(&Element) -> bool + Copy,
        found: &mut Vec<&'a Element>,
    ) {
        for child in &self.children {
            if pred(child) {
                found.push(child);
            }
            child.collect_matching(pred, found);
        }
    }

    /// Visits every descendant mutably, depth-first.
    pub fn for_each_mut(&mut self, f: &mut impl FnMut(&mut Element)) {
        for child in &mut self.children {
            f(child);
            child.for_each_mut(f);
        }
    }

    /// The descendant tagged `data-field="<name>"`.
    pub fn field(&self, name: &str) -> Option<&Element> {
        self.find(|el| el.data("field") == Some(name))
    }

    pub fn is_checkbox(&self) -> bool {
        matches!(self.control, Some(Control::Checkbox { .. }))
    }

    pub fn is_checked(&self) -> bool {
        matches!(self.control, Some(Control::Checkbox { checked: true }))
    }

    /// Sets checkbox state. Does nothing on other elements.
    pub fn set_checked(&mut self, value: bool) {
        if let Some(Control::Checkbox { checked }) = &mut self.control {
            *checked = value;
        }
    }

    /// The first checked checkbox below this element.
    pub fn checked_checkbox(&self) -> Option<&Element> {
        self.find(Element::is_checked)
    }

    /// `name` attribute of a text or hidden input.
    pub fn input_name(&self) -> Option<&str> {
        match &self.control {
            Some(Control::Text { name, .. } | Control::Hidden { name, .. }) => Some(name),
            _ => None,
        }
    }

    /// Current value of a text or hidden input.
    pub fn value(&self) -> Option<&str> {
        match &self.control {
            Some(Control::Text { value, .. } | Control::Hidden { value, .. }) => Some(value),
            _ => None,
        }
    }

    /// Sets the value of a text or hidden input. Does nothing on other elements.
    pub fn set_value(&mut self, new_value: impl Into<String>) {
        if let Some(Control::Text { value, .. } | Control::Hidden { value, .. }) =
            &mut self.control
        {
            *value = new_value.into();
        }
    }

    /// Serializes the element and its subtree to HTML.
    pub fn to_html(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        match &self.control {
            Some(Control::Checkbox { .. }) => f.write_str(" type=\"checkbox\"")?,
            Some(Control::Text { name, .. }) => {
                write!(f, " type=\"text\" name=\"{}\"", escape(name))?;
            }
            Some(Control::Hidden { name, .. }) => {
                write!(f, " type=\"hidden\" name=\"{}\"", escape(name))?;
            }
            None => {}
        }
        if let Some(id) = &self.id {
            write!(f, " id=\"{}\"", escape(id))?;
        }
        if !self.classes.is_empty() {
            write!(f, " class=\"{}\"", escape(&self.classes.join(" ")))?;
        }
        for (key, value) in &self.data {
            write!(f, " data-{}=\"{}\"", key, escape(value))?;
        }
        match &self.control {
            Some(Control::Checkbox { checked: true }) => f.write_str(" checked")?,
            Some(Control::Text { value, .. } | Control::Hidden { value, .. }) => {
                write!(f, " value=\"{}\"", escape(value))?;
            }
            _ => {}
        }
        f.write_str(">")?;

        // Inputs are void elements.
        if self.control.is_some() {
            return Ok(());
        }
        if let Some(text) = &self.text {
            f.write_str(&escape(text))?;
        }
        for child in &self.children {
            write!(f, "{child}")?;
        }
        write!(f, "</{}>", self.tag)
    }
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
