use pressable::{element, AnyElement, Element, ElementExt, ElementType};

struct MyComponent;

#[derive(Default)]
struct MyComponentProps {
    foo: String,
    children: Vec<Element<MyComponent>>,
}

impl ElementType for MyComponent {
    type Props = MyComponentProps;
}

struct MyContainer;

#[derive(Default)]
struct MyContainerProps {
    label: Option<String>,
    count: i64,
    children: Vec<AnyElement>,
}

impl ElementType for MyContainer {
    type Props = MyContainerProps;
}

#[test]
fn minimal() {
    let _: Element<MyComponent> = element!(MyComponent);
}

#[test]
fn props() {
    let e = element! {
        MyComponent(foo: "bar")
    };
    assert_eq!(e.props.foo, "bar");

    let e = element!(MyContainer(label: "x".to_string(), count: 3i32));
    assert_eq!(e.props.label.as_deref(), Some("x"));
    assert_eq!(e.props.count, 3);
}

#[test]
fn children() {
    let e = element! {
        MyComponent {
            MyComponent(foo: "bar")
            #(vec![element!(MyComponent(foo: "baz"))])
        }
    };
    assert_eq!(e.props.children.len(), 2);
    assert_eq!(e.props.children[0].props.foo, "bar");
    assert_eq!(e.props.children[1].props.foo, "baz");
}

#[test]
fn any_children() {
    let e = element! {
        MyContainer {
            "text"
            pressable::components::Text(content: "more")
            #(Some("maybe"))
            #(None::<AnyElement>)
        }
    };
    let rendered: Vec<_> = e
        .props
        .children
        .iter()
        .map(|child| child.into_string())
        .collect();
    assert_eq!(rendered, ["text", "more", "maybe"]);
}
