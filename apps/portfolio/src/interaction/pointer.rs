use serde::Serialize;

use crate::interaction::Teardown;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

/// Where the spotlight sits before the first move event.
pub const DEFAULT_SPOTLIGHT: Point = Point::new(400.0, 300.0);

/// Tracks the pointer relative to a container's top-left corner.
///
/// Last value wins: every move overwrites the position, so there is nothing to
/// queue or throttle.
#[derive(Debug, Clone)]
pub struct PointerTracker {
    origin: Point,
    position: Point,
    listening: bool,
}

impl PointerTracker {
    pub fn new(origin: Point) -> Self {
        PointerTracker {
            origin,
            position: DEFAULT_SPOTLIGHT,
            listening: true,
        }
    }

    /// Handles a move event given in viewport coordinates. In the served page the
    /// inline script performs this update on `mousemove`.
    #[allow(dead_code)]
    pub fn on_move(&mut self, client: Point) {
        if !self.listening {
            return;
        }
        self.position = Point::new(client.x - self.origin.x, client.y - self.origin.y);
    }

    pub fn position(&self) -> Point {
        self.position
    }
}

impl Default for PointerTracker {
    fn default() -> Self {
        PointerTracker::new(Point::new(0.0, 0.0))
    }
}

impl Teardown for PointerTracker {
    fn teardown(&mut self) {
        self.listening = false;
    }

    fn is_torn_down(&self) -> bool {
        !self.listening
    }
}
