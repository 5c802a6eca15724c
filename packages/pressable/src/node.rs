use crate::{
    event::{
        ClickEvent, ControlEvent, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent,
        MouseEventKind,
    },
    handler::Handler,
};
use std::{
    borrow::Cow,
    fmt::{self, Display},
};

/// The value of a rendered attribute.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AttributeValue {
    /// A boolean attribute which is present without a value, such as `disabled`.
    Present,
    /// An attribute with a textual value.
    Text(Cow<'static, str>),
}

impl From<&'static str> for AttributeValue {
    fn from(value: &'static str) -> Self {
        Self::Text(Cow::Borrowed(value))
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::Text(Cow::Owned(value))
    }
}

/// A single attribute applied to an element node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attribute {
    /// The attribute name, e.g. `aria-label`.
    pub name: &'static str,
    /// The attribute value.
    pub value: AttributeValue,
}

impl Attribute {
    /// Creates an attribute with a textual value.
    pub fn new(name: &'static str, value: impl Into<AttributeValue>) -> Self {
        Self {
            name,
            value: value.into(),
        }
    }

    /// Creates a boolean attribute.
    pub fn flag(name: &'static str) -> Self {
        Self {
            name,
            value: AttributeValue::Present,
        }
    }

    /// Returns the textual value, or `None` for boolean attributes.
    pub fn text(&self) -> Option<&str> {
        match &self.value {
            AttributeValue::Present => None,
            AttributeValue::Text(s) => Some(s),
        }
    }
}

/// An event binding attached to an element node.
#[derive(Clone, Debug, PartialEq)]
pub enum Listener {
    /// Invoked when the control is activated.
    Click(Handler<ClickEvent>),
    /// Invoked when a mouse button is pressed over the control.
    MouseDown(Handler<MouseEvent>),
    /// Invoked when a mouse button is released over the control.
    MouseUp(Handler<MouseEvent>),
    /// Invoked when a key is pressed or repeated.
    KeyDown(Handler<KeyEvent>),
    /// Invoked when a key is released.
    KeyUp(Handler<KeyEvent>),
    /// Invoked when the control gains focus.
    Focus(Handler<()>),
    /// Invoked when the control loses focus.
    Blur(Handler<()>),
}

impl Listener {
    /// The DOM-style event name this listener is bound to.
    pub fn event_name(&self) -> &'static str {
        match self {
            Self::Click(_) => "click",
            Self::MouseDown(_) => "mousedown",
            Self::MouseUp(_) => "mouseup",
            Self::KeyDown(_) => "keydown",
            Self::KeyUp(_) => "keyup",
            Self::Focus(_) => "focus",
            Self::Blur(_) => "blur",
        }
    }
}

/// A rendered element, such as the native `button` control.
#[derive(Clone, Debug, PartialEq)]
pub struct ElementNode {
    tag: &'static str,
    attributes: Vec<Attribute>,
    listeners: Vec<Listener>,
    children: Vec<Node>,
}

impl ElementNode {
    /// Creates an element with no attributes, listeners, or children.
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attributes: Vec::new(),
            listeners: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Appends an attribute.
    pub fn attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Appends a listener.
    pub fn listener(mut self, listener: Listener) -> Self {
        self.listeners.push(listener);
        self
    }

    /// Appends several attributes.
    pub fn with_attributes<I: IntoIterator<Item = Attribute>>(mut self, attributes: I) -> Self {
        self.attributes.extend(attributes);
        self
    }

    /// Appends several listeners.
    pub fn with_listeners<I: IntoIterator<Item = Listener>>(mut self, listeners: I) -> Self {
        self.listeners.extend(listeners);
        self
    }

    /// Appends children.
    pub fn children<I: IntoIterator<Item = Node>>(mut self, children: I) -> Self {
        self.children.extend(children);
        self
    }

    /// The element's tag name.
    pub fn tag(&self) -> &'static str {
        self.tag
    }

    /// The attributes, in the order they were applied.
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// The bound listeners, in the order they were applied.
    pub fn listeners(&self) -> &[Listener] {
        &self.listeners
    }

    /// The rendered children.
    pub fn child_nodes(&self) -> &[Node] {
        &self.children
    }

    /// Looks up an attribute by name.
    pub fn get_attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }

    /// Returns `true` if the element carries the given attribute.
    pub fn has_attribute(&self, name: &str) -> bool {
        self.get_attribute(name).is_some()
    }

    /// Returns `true` if the element carries the `disabled` attribute.
    pub fn is_disabled(&self) -> bool {
        self.has_attribute("disabled")
    }

    /// The concatenated text content of all descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.collect_text(&mut out);
        }
        out
    }

    /// Delivers an event to the element with the default behavior of a native button.
    ///
    /// Disabled controls receive nothing. Pressing the primary mouse button or the Enter or
    /// Space key activates the control, which invokes the click listeners after the mouse down
    /// or key down listeners. Other mouse buttons only reach the mouse down listeners.
    ///
    /// Returns `true` if any bound handler was invoked.
    pub fn dispatch(&self, event: &ControlEvent) -> bool {
        tracing::trace!(tag = self.tag, ?event, "dispatching event");
        if self.is_disabled() {
            tracing::debug!(tag = self.tag, "disabled control ignored event");
            return false;
        }
        match event {
            ControlEvent::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => {
                    let handled = self.emit_mouse_down(*mouse);
                    self.emit_click(ClickEvent::Mouse {
                        button: MouseButton::Left,
                        column: mouse.column,
                        row: mouse.row,
                    }) || handled
                }
                MouseEventKind::Down(_) => self.emit_mouse_down(*mouse),
                MouseEventKind::Up(_) => self.emit_mouse_up(*mouse),
                _ => false,
            },
            ControlEvent::Key(key) => match key.kind {
                KeyEventKind::Release => self.emit_key_up(*key),
                KeyEventKind::Press | KeyEventKind::Repeat => {
                    let handled = self.emit_key_down(*key);
                    match key.code {
                        KeyCode::Enter | KeyCode::Char(' ') => {
                            self.emit_click(ClickEvent::Key(key.code)) || handled
                        }
                        _ => handled,
                    }
                }
            },
            ControlEvent::Focus => self.emit(|l| match l {
                Listener::Focus(h) => h.call(()),
                _ => false,
            }),
            ControlEvent::Blur => self.emit(|l| match l {
                Listener::Blur(h) => h.call(()),
                _ => false,
            }),
        }
    }

    fn emit(&self, mut f: impl FnMut(&Listener) -> bool) -> bool {
        self.listeners
            .iter()
            .fold(false, |handled, listener| f(listener) || handled)
    }

    fn emit_click(&self, event: ClickEvent) -> bool {
        self.emit(|l| match l {
            Listener::Click(h) => h.call(event),
            _ => false,
        })
    }

    fn emit_mouse_down(&self, event: MouseEvent) -> bool {
        self.emit(|l| match l {
            Listener::MouseDown(h) => h.call(event),
            _ => false,
        })
    }

    fn emit_mouse_up(&self, event: MouseEvent) -> bool {
        self.emit(|l| match l {
            Listener::MouseUp(h) => h.call(event),
            _ => false,
        })
    }

    fn emit_key_down(&self, event: KeyEvent) -> bool {
        self.emit(|l| match l {
            Listener::KeyDown(h) => h.call(event),
            _ => false,
        })
    }

    fn emit_key_up(&self, event: KeyEvent) -> bool {
        self.emit(|l| match l {
            Listener::KeyUp(h) => h.call(event),
            _ => false,
        })
    }
}

/// The output of rendering an element.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    /// Plain text content.
    Text(String),
    /// An element with attributes, listeners, and children.
    Element(ElementNode),
    /// A group of nodes without a wrapping element.
    Fragment(Vec<Node>),
}

impl Node {
    /// Returns the element, if this node is one.
    pub fn as_element(&self) -> Option<&ElementNode> {
        match self {
            Self::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Delivers an event to this node. Only element nodes react to events.
    pub fn dispatch(&self, event: &ControlEvent) -> bool {
        match self {
            Self::Element(e) => e.dispatch(event),
            _ => false,
        }
    }

    /// The concatenated text content of this node and its descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Self::Text(s) => out.push_str(s),
            Self::Element(e) => e.children.iter().for_each(|c| c.collect_text(out)),
            Self::Fragment(nodes) => nodes.iter().for_each(|c| c.collect_text(out)),
        }
    }

    /// Renders the markup with one node per line, indenting children by two spaces.
    pub fn to_pretty_string(&self) -> String {
        let mut out = String::new();
        self.write_pretty(&mut out, 0)
            .expect("writing to a String cannot fail");
        out
    }

    fn write_pretty<W: fmt::Write>(&self, w: &mut W, depth: usize) -> fmt::Result {
        match self {
            Self::Text(s) => {
                write_indent(w, depth)?;
                write_escaped(w, s, false)?;
                w.write_char('\n')
            }
            Self::Fragment(nodes) => nodes.iter().try_for_each(|n| n.write_pretty(w, depth)),
            Self::Element(e) => {
                write_indent(w, depth)?;
                write_open_tag(w, e)?;
                if e.children.is_empty() {
                    writeln!(w, "</{}>", e.tag)
                } else {
                    w.write_char('\n')?;
                    for child in &e.children {
                        child.write_pretty(w, depth + 1)?;
                    }
                    write_indent(w, depth)?;
                    writeln!(w, "</{}>", e.tag)
                }
            }
        }
    }
}

impl From<ElementNode> for Node {
    fn from(e: ElementNode) -> Self {
        Self::Element(e)
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

fn write_indent<W: fmt::Write>(w: &mut W, depth: usize) -> fmt::Result {
    for _ in 0..depth {
        w.write_str("  ")?;
    }
    Ok(())
}

fn write_escaped<W: fmt::Write>(w: &mut W, s: &str, attribute: bool) -> fmt::Result {
    for c in s.chars() {
        match c {
            '&' => w.write_str("&amp;")?,
            '<' => w.write_str("&lt;")?,
            '>' => w.write_str("&gt;")?,
            '"' if attribute => w.write_str("&quot;")?,
            c => w.write_char(c)?,
        }
    }
    Ok(())
}

// Listeners have no markup representation.
fn write_open_tag<W: fmt::Write>(w: &mut W, e: &ElementNode) -> fmt::Result {
    write!(w, "<{}", e.tag)?;
    for attribute in &e.attributes {
        write!(w, " {}", attribute.name)?;
        if let AttributeValue::Text(value) = &attribute.value {
            w.write_str("=\"")?;
            write_escaped(w, value, true)?;
            w.write_char('"')?;
        }
    }
    w.write_char('>')
}

impl Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write_escaped(f, s, false),
            Self::Fragment(nodes) => nodes.iter().try_for_each(|n| n.fmt(f)),
            Self::Element(e) => e.fmt(f),
        }
    }
}

impl Display for ElementNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_open_tag(f, self)?;
        for child in &self.children {
            child.fmt(f)?;
        }
        write!(f, "</{}>", self.tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    };

    fn counter() -> (Arc<AtomicUsize>, Handler<ClickEvent>) {
        let count = Arc::new(AtomicUsize::new(0));
        let handler = Handler::from({
            let count = count.clone();
            move |_| {
                count.fetch_add(1, Ordering::SeqCst);
            }
        });
        (count, handler)
    }

    #[test]
    fn test_markup_escaping() {
        let node = Node::from(
            ElementNode::new("button")
                .attribute(Attribute::new("title", "say \"hi\" & <go>"))
                .attribute(Attribute::flag("disabled"))
                .children([Node::from("a < b")]),
        );
        assert_eq!(
            node.to_string(),
            "<button title=\"say &quot;hi&quot; &amp; &lt;go&gt;\" disabled>a &lt; b</button>"
        );
    }

    #[test]
    fn test_pretty_string() {
        let node = Node::from(ElementNode::new("button").children([
            Node::from("Save"),
            Node::Fragment(vec![
                Node::from(ElementNode::new("span").children([Node::from("now")])),
                Node::from(ElementNode::new("span")),
            ]),
        ]));
        assert_eq!(
            node.to_pretty_string(),
            indoc! {"
                <button>
                  Save
                  <span>
                    now
                  </span>
                  <span></span>
                </button>
            "}
        );
    }

    #[test]
    fn test_text_content() {
        let node = Node::from(ElementNode::new("button").children([
            Node::from("Sub"),
            Node::from(ElementNode::new("b").children([Node::from("mit")])),
        ]));
        assert_eq!(node.text_content(), "Submit");
    }

    #[test]
    fn test_dispatch_mouse_down_clicks() {
        let (count, handler) = counter();
        let node = ElementNode::new("button").listener(Listener::Click(handler));
        assert!(node.dispatch(&ControlEvent::mouse(
            MouseEventKind::Down(MouseButton::Left),
            1,
            0
        )));
        assert!(!node.dispatch(&ControlEvent::mouse(
            MouseEventKind::Up(MouseButton::Left),
            1,
            0
        )));
        assert!(!node.dispatch(&ControlEvent::mouse(MouseEventKind::Moved, 1, 0)));
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_dispatch_keys() {
        let (count, handler) = counter();
        let node = ElementNode::new("button").listener(Listener::Click(handler));
        assert!(node.dispatch(&ControlEvent::key(KeyEventKind::Press, KeyCode::Enter)));
        assert!(node.dispatch(&ControlEvent::key(KeyEventKind::Press, KeyCode::Char(' '))));
        assert!(!node.dispatch(&ControlEvent::key(KeyEventKind::Release, KeyCode::Enter)));
        assert!(!node.dispatch(&ControlEvent::key(KeyEventKind::Press, KeyCode::Char('x'))));
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_dispatch_disabled() {
        let (count, handler) = counter();
        let node = ElementNode::new("button")
            .attribute(Attribute::flag("disabled"))
            .listener(Listener::Click(handler));
        assert!(!node.dispatch(&ControlEvent::key(KeyEventKind::Press, KeyCode::Enter)));
        assert!(!node.dispatch(&ControlEvent::Focus));
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_dispatch_text_node() {
        assert!(!Node::from("label").dispatch(&ControlEvent::Focus));
    }

    #[test]
    fn test_dispatch_key_repeat() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let node = ElementNode::new("button")
            .listener(Listener::KeyDown(Handler::from({
                let log = log.clone();
                move |e: KeyEvent| log.lock().unwrap().push(format!("keydown {:?}", e.kind))
            })))
            .listener(Listener::Click(Handler::from({
                let log = log.clone();
                move |e: ClickEvent| log.lock().unwrap().push(format!("click {:?}", e))
            })));
        assert!(node.dispatch(&ControlEvent::key(KeyEventKind::Repeat, KeyCode::Char(' '))));
        assert_eq!(
            *log.lock().unwrap(),
            ["keydown Repeat", "click Key(Char(' '))"]
        );
    }

    #[test]
    fn test_dispatch_secondary_mouse_button() {
        let (count, handler) = counter();
        let downs = Arc::new(AtomicUsize::new(0));
        let node = ElementNode::new("button")
            .listener(Listener::Click(handler))
            .listener(Listener::MouseDown(Handler::from({
                let downs = downs.clone();
                move |_: MouseEvent| {
                    downs.fetch_add(1, Ordering::SeqCst);
                }
            })));
        assert!(node.dispatch(&ControlEvent::mouse(
            MouseEventKind::Down(MouseButton::Right),
            0,
            0
        )));
        assert!(!ElementNode::new("button")
            .listener(Listener::Click(Handler::default()))
            .dispatch(&ControlEvent::mouse(
                MouseEventKind::Down(MouseButton::Middle),
                0,
                0
            )));
        assert_eq!(count.load(Ordering::SeqCst), 0);
        assert_eq!(downs.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_dispatch_fragment() {
        let (count, handler) = counter();
        let button = Node::from(ElementNode::new("button").listener(Listener::Click(handler)));
        let fragment = Node::Fragment(vec![button.clone()]);
        assert!(!fragment.dispatch(&ControlEvent::key(KeyEventKind::Press, KeyCode::Enter)));
        assert!(!fragment.dispatch(&ControlEvent::mouse(
            MouseEventKind::Down(MouseButton::Left),
            0,
            0
        )));
        assert_eq!(count.load(Ordering::SeqCst), 0);
        assert!(button.dispatch(&ControlEvent::key(KeyEventKind::Press, KeyCode::Enter)));
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_control_event_conversions() {
        let (count, handler) = counter();
        let node = ElementNode::new("button").listener(Listener::Click(handler));
        let key = KeyEvent::new(KeyCode::Enter, crate::event::KeyModifiers::NONE);
        assert!(node.dispatch(&key.into()));
        let mouse = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 4,
            row: 2,
            modifiers: crate::event::KeyModifiers::NONE,
        };
        assert_eq!(ControlEvent::from(mouse), ControlEvent::mouse(mouse.kind, 4, 2));
        assert!(node.dispatch(&mouse.into()));
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }
}
