use pressable::{
    component,
    components::{Button, ButtonProps},
    element, Component, ElementExt, ElementNode, NoProps, Node,
};

#[component]
fn Divider() -> Node {
    ElementNode::new("hr").into()
}

#[derive(Clone, Default)]
struct GreetingProps {
    name: String,
}

/// Renders a greeting.
#[component]
fn Greeting(props: &GreetingProps) -> impl Into<Node> {
    format!("Hello, {}!", props.name)
}

#[component]
fn Unused(_props: &GreetingProps) -> Node {
    Node::Fragment(vec![])
}

#[test]
fn no_props() {
    assert_eq!(Divider::render(&NoProps).to_string(), "<hr></hr>");
    assert_eq!(element!(Divider).into_string(), "<hr></hr>");
}

#[test]
fn with_props() {
    let props = GreetingProps {
        name: "Ferris".to_string(),
    };
    assert_eq!(Greeting::render(&props), Node::from("Hello, Ferris!"));
    assert_eq!(
        element!(Greeting(name: "Ferris")).into_string(),
        "Hello, Ferris!"
    );
    assert_eq!(element!(Unused).into_string(), "");
}

#[test]
fn nested_in_button() {
    let e = element! {
        Button {
            Greeting(name: "you")
            Divider
        }
    };
    assert_eq!(e.into_string(), "<button>Hello, you!<hr></hr></button>");
    assert_eq!(
        Button::render(&ButtonProps::default()).to_string(),
        "<button></button>"
    );
}
