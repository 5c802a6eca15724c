use crate::{
    component::render_component,
    component, AnyElement, Attribute, ClickEvent, ElementExt, ElementNode, Handler, KeyEvent,
    Listener, MouseEvent, Node,
};

/// The behavior of a [`Button`] within a form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonType {
    /// A plain button with no default behavior.
    Button,
    /// Submits its form.
    Submit,
    /// Resets its form.
    Reset,
}

impl ButtonType {
    /// The attribute value for this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Submit => "submit",
            Self::Reset => "reset",
        }
    }
}

/// The props which can be passed to the [`Button`] component.
///
/// Every field defaults to absent. Each field that is set is forwarded unmodified to the
/// rendered `button` element as the attribute or listener noted on the field.
#[derive(Clone, Default)]
pub struct ButtonProps {
    /// The content of the button.
    pub children: Vec<AnyElement>,

    /// `id`
    pub id: Option<String>,

    /// `title`
    pub title: Option<String>,

    /// `type`
    pub r#type: Option<ButtonType>,

    /// `name`
    pub name: Option<String>,

    /// `value`
    pub value: Option<String>,

    /// `form`
    pub form: Option<String>,

    /// `disabled`, present only when true.
    ///
    /// A disabled button ignores every event dispatched to it.
    pub disabled: bool,

    /// `autofocus`, present only when true.
    pub autofocus: bool,

    /// `tabindex`
    pub tab_index: Option<i32>,

    /// `aria-label`
    pub aria_label: Option<String>,

    /// `aria-labelledby`
    pub aria_labelledby: Option<String>,

    /// `aria-describedby`
    pub aria_describedby: Option<String>,

    /// `aria-controls`
    pub aria_controls: Option<String>,

    /// `aria-pressed`
    pub aria_pressed: Option<bool>,

    /// `aria-expanded`
    pub aria_expanded: Option<bool>,

    /// The handler to invoke when the button is activated.
    ///
    /// The button is activated two ways:
    ///
    /// - By pressing the primary mouse button over it.
    /// - By pressing the Enter or Space key while it has focus.
    pub on_click: Handler<ClickEvent>,

    /// The handler to invoke when a mouse button is pressed over the button.
    pub on_mouse_down: Handler<MouseEvent>,

    /// The handler to invoke when a mouse button is released over the button.
    pub on_mouse_up: Handler<MouseEvent>,

    /// The handler to invoke when a key is pressed while the button has focus.
    pub on_key_down: Handler<KeyEvent>,

    /// The handler to invoke when a key is released while the button has focus.
    pub on_key_up: Handler<KeyEvent>,

    /// The handler to invoke when the button gains focus.
    pub on_focus: Handler<()>,

    /// The handler to invoke when the button loses focus.
    pub on_blur: Handler<()>,
}

impl ButtonProps {
    fn attributes(&self) -> impl Iterator<Item = Attribute> + '_ {
        let text = |name, value: &Option<String>| {
            value.as_ref().map(|v| Attribute::new(name, v.clone()))
        };
        let flag = |name, set: bool| set.then(|| Attribute::flag(name));
        let boolean = |name, value: Option<bool>| {
            value.map(|v| Attribute::new(name, if v { "true" } else { "false" }))
        };

        [
            text("id", &self.id),
            text("title", &self.title),
            self.r#type.map(|t| Attribute::new("type", t.as_str())),
            text("name", &self.name),
            text("value", &self.value),
            text("form", &self.form),
            flag("disabled", self.disabled),
            flag("autofocus", self.autofocus),
            self.tab_index
                .map(|i| Attribute::new("tabindex", i.to_string())),
            text("aria-label", &self.aria_label),
            text("aria-labelledby", &self.aria_labelledby),
            text("aria-describedby", &self.aria_describedby),
            text("aria-controls", &self.aria_controls),
            boolean("aria-pressed", self.aria_pressed),
            boolean("aria-expanded", self.aria_expanded),
        ]
        .into_iter()
        .flatten()
    }

    fn listeners(&self) -> impl Iterator<Item = Listener> + '_ {
        fn bound<T>(handler: &Handler<T>, f: fn(Handler<T>) -> Listener) -> Option<Listener> {
            (!handler.is_default()).then(|| f(handler.clone()))
        }

        [
            bound(&self.on_click, Listener::Click),
            bound(&self.on_mouse_down, Listener::MouseDown),
            bound(&self.on_mouse_up, Listener::MouseUp),
            bound(&self.on_key_down, Listener::KeyDown),
            bound(&self.on_key_up, Listener::KeyUp),
            bound(&self.on_focus, Listener::Focus),
            bound(&self.on_blur, Listener::Blur),
        ]
        .into_iter()
        .flatten()
    }
}

/// `Button` is a component that renders a native `button` control, forwarding every prop to it
/// and rendering its children inside it.
///
/// The component keeps no state and performs no validation. Handlers are invoked when the host
/// dispatches events to the rendered node with [`Node::dispatch`].
///
/// # Example
///
/// ```
/// # use pressable::prelude::*;
/// let button = element! {
///     Button(on_click: |_| { /* do something */ }, r#type: ButtonType::Submit) {
///         "Submit"
///     }
/// };
/// assert_eq!(button.into_string(), "<button type=\"submit\">Submit</button>");
/// ```
#[component]
pub fn Button(props: &ButtonProps) -> Node {
    ElementNode::new("button")
        .with_attributes(props.attributes())
        .with_listeners(props.listeners())
        .children(props.children.iter().map(|child| child.render()))
        .into()
}

/// Renders a [`Button`] directly from its props.
pub fn button(props: ButtonProps) -> Node {
    render_component::<Button>(&props)
}
