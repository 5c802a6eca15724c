pub use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// An input event delivered by the host to a rendered control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ControlEvent {
    /// A mouse event which occurred over the control.
    Mouse(MouseEvent),
    /// A key event received while the control has focus.
    Key(KeyEvent),
    /// The control gained focus.
    Focus,
    /// The control lost focus.
    Blur,
}

impl ControlEvent {
    /// Creates a mouse event of the given kind at the given position.
    pub fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Self {
        Self::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    /// Creates a key event with no modifiers.
    pub fn key(kind: KeyEventKind, code: KeyCode) -> Self {
        let mut event = KeyEvent::new(code, KeyModifiers::NONE);
        event.kind = kind;
        Self::Key(event)
    }
}

impl From<MouseEvent> for ControlEvent {
    fn from(event: MouseEvent) -> Self {
        Self::Mouse(event)
    }
}

impl From<KeyEvent> for ControlEvent {
    fn from(event: KeyEvent) -> Self {
        Self::Key(event)
    }
}

/// Describes what activated a control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickEvent {
    /// The control was pressed with a mouse button.
    Mouse {
        /// The button that was pressed.
        button: MouseButton,
        /// The column of the pointer.
        column: u16,
        /// The row of the pointer.
        row: u16,
    },
    /// The control was activated from the keyboard with Enter or Space.
    Key(KeyCode),
}

impl ClickEvent {
    /// Returns `true` if the activation came from the keyboard.
    pub fn is_keyboard(&self) -> bool {
        matches!(self, Self::Key(_))
    }
}
