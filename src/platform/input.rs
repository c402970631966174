//! Polled input
//!
//! The window shell pushes raw events into an [`EventQueue`]; the frame driver
//! drains it exactly once per tick.

use std::collections::VecDeque;

use glam::Vec2;

/// A discrete input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Any pointer button went down
    PointerPressed,
    /// The window was asked to close
    Quit,
}

/// Something the frame driver can poll for input
pub trait InputSource {
    /// Latest pointer position in playfield coordinates
    fn pointer(&self) -> Option<Vec2>;

    /// Take every event queued since the last call
    fn drain_events(&mut self) -> Vec<InputEvent>;
}

/// Buffered input filled by the platform event loop
#[derive(Debug, Default)]
pub struct EventQueue {
    pointer: Option<Vec2>,
    events: VecDeque<InputEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push_back(event);
    }

    pub fn set_pointer(&mut self, pos: Vec2) {
        self.pointer = Some(pos);
    }

    /// Number of events waiting to be drained
    pub fn pending(&self) -> usize {
        self.events.len()
    }
}

impl InputSource for EventQueue {
    fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    fn drain_events(&mut self) -> Vec<InputEvent> {
        self.events.drain(..).collect()
    }
}
