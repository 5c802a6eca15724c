use crate::{component, AnyElement, ElementExt, Node};

/// The props which can be passed to the [`Fragment`] component.
#[derive(Clone, Default)]
pub struct FragmentProps {
    /// The children of the component.
    pub children: Vec<AnyElement>,
}

/// `Fragment` is a component which allows you to group elements without wrapping them in
/// another element.
///
/// This is typically used when you want to create a component that returns multiple elements.
///
/// # Example
///
/// ```
/// # use pressable::prelude::*;
/// #[component]
/// fn Label() -> Node {
///     element! {
///         Fragment {
///             "Save"
///             Text(content: " changes")
///         }
///     }
///     .render()
/// }
///
/// let button = element! {
///     Button {
///         Label
///     }
/// };
/// assert_eq!(button.into_string(), "<button>Save changes</button>");
/// ```
#[component]
pub fn Fragment(props: &FragmentProps) -> Node {
    Node::Fragment(props.children.iter().map(|child| child.render()).collect())
}
