//! Pointer events as seen by the carousel track.

/// Kind of pointer event delivered to the track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    /// Pointer left the track's bounds.
    Leave,
}

/// A pointer event carrying the horizontal coordinate in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub x: f32,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, x: f32) -> Self {
        Self { kind, x }
    }

    pub fn down(x: f32) -> Self {
        Self::new(PointerEventKind::Down, x)
    }

    pub fn moved(x: f32) -> Self {
        Self::new(PointerEventKind::Move, x)
    }

    pub fn up(x: f32) -> Self {
        Self::new(PointerEventKind::Up, x)
    }

    pub fn leave(x: f32) -> Self {
        Self::new(PointerEventKind::Leave, x)
    }
}

/// What a handler did with an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventDisposition {
    /// Nothing changed; the host keeps its default behavior.
    Ignored,
    /// State changed. On a move this also means the host must suppress its
    /// default drag-selection behavior.
    Consumed,
}

impl EventDisposition {
    pub fn is_consumed(self) -> bool {
        matches!(self, EventDisposition::Consumed)
    }
}
