use core::{fmt, ops::Deref};
use std::sync::Arc;

/// `Handler` is a type representing an optional event handler, commonly used for component properties.
///
/// Any function that takes a single argument and returns `()` can be converted into a `Handler`,
/// and it can be invoked using function call syntax. Handlers are reference counted, so cloning
/// one produces a handle to the same function.
pub struct Handler<T>(bool, Arc<dyn Fn(T) + Send + Sync + 'static>);

impl<T> Handler<T> {
    /// Returns `true` if the handler was default-initialized.
    pub fn is_default(&self) -> bool {
        !self.0
    }

    /// Invokes the handler, returning `true` if a function was actually bound.
    pub fn call(&self, value: T) -> bool {
        (self.1)(value);
        self.0
    }
}

impl<T> Clone for Handler<T> {
    fn clone(&self) -> Self {
        Self(self.0, self.1.clone())
    }
}

impl<T> Default for Handler<T> {
    fn default() -> Self {
        Self(false, Arc::new(|_| {}))
    }
}

impl<T, F> From<F> for Handler<T>
where
    F: Fn(T) + Send + Sync + 'static,
{
    fn from(f: F) -> Self {
        Self(true, Arc::new(f))
    }
}

impl<T> Deref for Handler<T> {
    type Target = dyn Fn(T) + Send + Sync + 'static;

    fn deref(&self) -> &Self::Target {
        self.1.as_ref()
    }
}

// Bound handlers are equal when they share the same function. All default handlers are equal.
impl<T> PartialEq for Handler<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self.0, other.0) {
            (true, true) => Arc::ptr_eq(&self.1, &other.1),
            (false, false) => true,
            _ => false,
        }
    }
}

impl<T> fmt::Debug for Handler<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 {
            write!(f, "Handler({:p})", Arc::as_ptr(&self.1))
        } else {
            f.write_str("Handler(default)")
        }
    }
}

impl<T: Clone + Send + Sync + 'static> Handler<T> {
    /// Creates a new handler that uses a constant value for its input.
    pub fn bind(&self, value: T) -> Handler<()> {
        if self.is_default() {
            return Handler::default();
        }
        let handler = self.clone();
        Handler::from(move |_| handler(value.clone()))
    }
}
