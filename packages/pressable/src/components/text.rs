use crate::{component, Node};

/// The props which can be passed to the [`Text`] component.
#[derive(Clone, Default)]
pub struct TextProps {
    /// The text to display.
    pub content: String,
}

/// `Text` is a component that renders plain text content.
///
/// String literals used as children in the [`element!`](crate::element!) macro are rendered
/// with this component.
#[component]
pub fn Text(props: &TextProps) -> Node {
    Node::Text(props.content.clone())
}
