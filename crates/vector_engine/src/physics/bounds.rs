//! Play-field rectangle and the boundary responses that use it

use crate::foundation::math::Vec2;

/// Axis-aligned play-field rectangle with a spawn border
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Left edge
    pub left: f32,
    /// Top edge
    pub top: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
    /// Margin kept free of spawns along every edge
    pub border: f32,
}

impl Bounds {
    /// Create a rectangle with no border
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
            border: 0.0,
        }
    }

    /// Set the spawn border
    pub fn with_border(mut self, border: f32) -> Self {
        self.border = border;
        self
    }

    /// Right edge
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    /// Bottom edge
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Center point
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// The rectangle shrunk by the border on every side, never inverted
    pub fn spawn_area(&self) -> Self {
        let border_x = self.border.min(self.width / 2.0);
        let border_y = self.border.min(self.height / 2.0);
        Self::new(
            self.left + border_x,
            self.top + border_y,
            self.width - 2.0 * border_x,
            self.height - 2.0 * border_y,
        )
    }

    /// Reflect a circle's velocity on every axis where it touches or crosses an edge
    ///
    /// The circle may still overlap the edge for a frame; only the velocity flips.
    pub fn bounce_velocity(&self, position: Vec2, radius: f32, velocity: Vec2) -> Vec2 {
        let mut result = velocity;
        if position.x - radius <= self.left || position.x + radius >= self.right() {
            result.x = -result.x;
        }
        if position.y - radius <= self.top || position.y + radius >= self.bottom() {
            result.y = -result.y;
        }
        result
    }

    /// Zero any velocity component pushing a circle further past an edge it touches
    pub fn clamp_velocity(&self, position: Vec2, radius: f32, velocity: Vec2) -> Vec2 {
        let mut result = velocity;
        if (position.x - radius <= self.left && result.x < 0.0)
            || (position.x + radius >= self.right() && result.x > 0.0)
        {
            result.x = 0.0;
        }
        if (position.y - radius <= self.top && result.y < 0.0)
            || (position.y + radius >= self.bottom() && result.y > 0.0)
        {
            result.y = 0.0;
        }
        result
    }
}
