use crate::{
    component::{render_component, Component},
    components::Text,
    node::Node,
};
use std::{
    fmt,
    io::{self, Write},
    sync::Arc,
};

/// Used by the `element!` macro to extend a collection with elements.
#[doc(hidden)]
pub trait ExtendWithElements<T>: Sized {
    fn extend<E: Extend<T>>(self, dest: &mut E);
}

impl<T, U> ExtendWithElements<T> for Element<U>
where
    U: ElementType,
    T: From<Element<U>>,
{
    fn extend<E: Extend<T>>(self, dest: &mut E) {
        dest.extend([self.into()]);
    }
}

impl ExtendWithElements<AnyElement> for AnyElement {
    fn extend<E: Extend<AnyElement>>(self, dest: &mut E) {
        dest.extend([self]);
    }
}

impl<T, U, I> ExtendWithElements<T> for I
where
    I: IntoIterator<Item = U>,
    U: Into<T>,
{
    fn extend<E: Extend<T>>(self, dest: &mut E) {
        dest.extend(self.into_iter().map(|e| e.into()));
    }
}

/// Used by the `element!` macro to extend a collection with elements.
#[doc(hidden)]
pub fn extend_with_elements<T, U, E>(dest: &mut T, elements: U)
where
    T: Extend<E>,
    U: ExtendWithElements<E>,
{
    elements.extend(dest);
}

/// Uniquely identifies an element instance.
#[derive(Clone, Copy, Hash, PartialEq, Eq, Debug)]
pub struct ElementKey(uuid::Uuid);

impl ElementKey {
    /// Generates a new random key.
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for ElementKey {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ElementKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// An element is a description of a component along with the props to render it with.
///
/// Elements are usually created with the [`element!`](crate::element!) macro.
pub struct Element<T: ElementType> {
    /// The key identifying this element.
    pub key: ElementKey,
    /// The props the element's component will be rendered with.
    pub props: T::Props,
}

impl<T: ElementType> Clone for Element<T>
where
    T::Props: Clone,
{
    fn clone(&self) -> Self {
        Self {
            key: self.key,
            props: self.props.clone(),
        }
    }
}

/// A type which can be used as the type of an [`Element`].
pub trait ElementType {
    /// The props accepted by elements of this type.
    type Props;
}

trait ElementRenderer: Send + Sync {
    fn render(&self) -> Node;
}

struct ComponentRenderer<C: Component>(C::Props);

impl<C: Component> ElementRenderer for ComponentRenderer<C> {
    fn render(&self) -> Node {
        render_component::<C>(&self.0)
    }
}

/// A type-erased [`Element`], used for children of any component type.
#[derive(Clone)]
pub struct AnyElement {
    key: ElementKey,
    renderer: Arc<dyn ElementRenderer>,
}

impl fmt::Debug for AnyElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnyElement").field("key", &self.key).finish()
    }
}

impl<T: Component> Element<T> {
    /// Converts the element into an [`AnyElement`].
    pub fn into_any(self) -> AnyElement {
        self.into()
    }
}

impl<T: Component> From<Element<T>> for AnyElement {
    fn from(e: Element<T>) -> Self {
        Self {
            key: e.key,
            renderer: Arc::new(ComponentRenderer::<T>(e.props)),
        }
    }
}

impl From<&str> for AnyElement {
    fn from(content: &str) -> Self {
        content.to_string().into()
    }
}

impl From<String> for AnyElement {
    fn from(content: String) -> Self {
        Element::<Text> {
            key: ElementKey::new(),
            props: crate::components::TextProps { content },
        }
        .into()
    }
}

mod private {
    use super::*;

    pub trait Sealed {}
    impl Sealed for AnyElement {}
    impl Sealed for &AnyElement {}
    impl<T> Sealed for Element<T> where T: Component {}
    impl<T> Sealed for &Element<T> where T: Component {}
}

/// Methods for rendering elements.
pub trait ElementExt: private::Sealed + Sized {
    /// Returns the key of the element.
    fn key(&self) -> ElementKey;

    /// Renders the element into a node tree.
    fn render(&self) -> Node;

    /// Renders the element and serializes it as markup.
    fn into_string(self) -> String {
        self.render().to_string()
    }

    /// Renders the element and writes its markup to the given writer.
    fn write<W: Write>(self, mut w: W) -> io::Result<()> {
        let node = self.render();
        write!(w, "{}", node)?;
        w.flush()
    }
}

impl ElementExt for AnyElement {
    fn key(&self) -> ElementKey {
        self.key
    }

    fn render(&self) -> Node {
        self.renderer.render()
    }
}

impl ElementExt for &AnyElement {
    fn key(&self) -> ElementKey {
        self.key
    }

    fn render(&self) -> Node {
        self.renderer.render()
    }
}

impl<T: Component> ElementExt for Element<T> {
    fn key(&self) -> ElementKey {
        self.key
    }

    fn render(&self) -> Node {
        render_component::<T>(&self.props)
    }
}

impl<T: Component> ElementExt for &Element<T> {
    fn key(&self) -> ElementKey {
        self.key
    }

    fn render(&self) -> Node {
        render_component::<T>(&self.props)
    }
}
