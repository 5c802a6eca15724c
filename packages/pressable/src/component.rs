use crate::{element::ElementType, node::Node};
use std::any::type_name;

/// `Component` defines a piece of UI which can be rendered from its props.
///
/// Components are stateless: rendering the same props twice produces equal nodes. Most
/// components are defined with the [`component`](macro@crate::component) macro rather than by
/// implementing this trait by hand.
pub trait Component: 'static {
    /// The props accepted by the component.
    type Props: Default + Clone + Send + Sync + 'static;

    /// Renders the component for the given props.
    fn render(props: &Self::Props) -> Node;
}

impl<C: Component> ElementType for C {
    type Props = C::Props;
}

pub(crate) fn render_component<C: Component>(props: &C::Props) -> Node {
    tracing::trace!(component = type_name::<C>(), "rendering component");
    C::render(props)
}

#[doc(hidden)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoProps;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ElementNode;

    struct Hr;

    impl Component for Hr {
        type Props = NoProps;

        fn render(_props: &Self::Props) -> Node {
            ElementNode::new("hr").into()
        }
    }

    #[test]
    fn test_render_component() {
        assert_eq!(render_component::<Hr>(&NoProps).to_string(), "<hr></hr>");
    }
}
