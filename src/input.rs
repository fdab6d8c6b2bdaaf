//! Jump input: raw event filtering and the per-frame latch

/// Kind of pointer that produced a pointer event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Touch,
    Pen,
}

impl PointerKind {
    /// Map a DOM `PointerEvent.pointerType`; unknown types count as touch
    pub fn from_type(pointer_type: &str) -> Self {
        match pointer_type {
            "mouse" => PointerKind::Mouse,
            "pen" => PointerKind::Pen,
            _ => PointerKind::Touch,
        }
    }
}

/// Keys the game cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Space,
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.code`
    pub fn from_code(code: &str) -> Self {
        match code {
            "Space" => Key::Space,
            _ => Key::Other,
        }
    }
}

/// Raw input events forwarded by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A key was pressed
    KeyDown { key: Key },
    /// A pointer went down
    PointerDown { button: i16, pointer: PointerKind },
}

impl InputEvent {
    /// Space, the primary mouse button, or any touch / pen contact
    pub fn is_jump_trigger(&self) -> bool {
        match *self {
            InputEvent::KeyDown { key } => key == Key::Space,
            InputEvent::PointerDown { button, pointer } => {
                button == 0 || pointer != PointerKind::Mouse
            }
        }
    }
}

/// Single-slot edge buffer for jump requests.
///
/// Any number of requests between two frames collapse into one jump.
#[derive(Debug, Clone, Copy, Default)]
pub struct JumpLatch {
    pending: bool,
}

impl JumpLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a jump edge
    pub fn request(&mut self) {
        self.pending = true;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Consume the pending request, if any
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }

    /// Drop a pending request without acting on it
    pub fn clear(&mut self) {
        self.pending = false;
    }
}
