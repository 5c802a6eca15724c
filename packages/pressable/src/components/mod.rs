mod button;
pub use button::*;

mod fragment;
pub use fragment::*;

mod text;
pub use text::*;
