//! # pressable
//!
//! `pressable` renders native pressable controls from typed props with a declarative
//! React-like Rust API.
//!
//! ```
//! use pressable::prelude::*;
//!
//! let node = element! {
//!     Button(on_click: |_| println!("submitted"), disabled: true) {
//!         "Submit"
//!     }
//! }
//! .render();
//!
//! assert_eq!(node.to_string(), "<button disabled>Submit</button>");
//! ```

#![warn(missing_docs)]

// # Organization
//
// Code is organized into modules primarily for the benefit of the maintainers. Types will be
// re-exported in the root so that users of the library have a flat namespace to work with.
//
// The exception is components, which remain in their module for the public API.

mod component;
mod element;
mod event;
mod handler;
mod node;

mod flattened_exports {
    pub use crate::component::*;
    pub use crate::element::*;
    pub use crate::event::*;
    pub use crate::handler::*;
    pub use crate::node::*;

    pub use pressable_macros::*;
}

pub use flattened_exports::*;

/// Components for building controls.
pub mod components;

/// By importing this module, you'll bring all of the crate's commonly used types into scope.
pub mod prelude {
    pub use crate::components::*;
    pub use crate::flattened_exports::*;
}

// So we can use our own macros.
extern crate self as pressable;
