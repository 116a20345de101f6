//! Renderable components: polygon shapes, line segments and text labels
//!
//! These only describe what to draw. Collision uses
//! [`ColliderComponent`](super::ColliderComponent), never the shape radius.

use crate::ecs::EntityKey;
use crate::foundation::math::Vec2;

/// RGBA color with 8-bit channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha channel
    pub a: u8,
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Color {
    /// Opaque black
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Opaque white
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Opaque color from channels
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Opaque color from integer channels, clamped into `0..=255`
    ///
    /// Configuration sentinels (negative values) come out as zero.
    pub fn from_ints(r: i32, g: i32, b: i32) -> Self {
        let channel = |value: i32| value.clamp(0, 255) as u8;
        Self::rgb(channel(r), channel(g), channel(b))
    }

    /// Same color with a different alpha
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

/// Regular polygon inscribed in a circle
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeComponent {
    /// Circumscribed radius
    pub radius: f32,

    /// Number of polygon vertices
    pub vertices: u32,

    /// Fill color
    pub fill: Color,

    /// Outline color
    pub outline: Color,

    /// Outline thickness in pixels
    pub outline_thickness: f32,

    /// Render scale on top of the transform, driven by hit reactions
    pub scale: f32,
}

impl ShapeComponent {
    /// Create a shape at unit render scale
    pub fn new(radius: f32, vertices: u32, fill: Color, outline: Color, outline_thickness: f32) -> Self {
        Self {
            radius,
            vertices,
            fill,
            outline,
            outline_thickness,
            scale: 1.0,
        }
    }

    /// Set the alpha of both fill and outline
    pub fn set_alpha(&mut self, alpha: u8) {
        self.fill.a = alpha;
        self.outline.a = alpha;
    }
}

/// Segment anchored to a parent entity, expressed in the parent's local frame
#[derive(Debug, Clone, PartialEq)]
pub struct LineComponent {
    /// Entity whose position and rotation the line follows
    pub parent: EntityKey,

    /// Segment start relative to the anchor
    pub start: Vec2,

    /// Segment end relative to the anchor
    pub end: Vec2,

    /// Line thickness in pixels
    pub thickness: f32,

    /// Fill color
    pub fill: Color,

    /// Outline color
    pub outline: Color,

    /// Outline thickness in pixels
    pub outline_thickness: f32,
}

impl LineComponent {
    /// Set the alpha of both fill and outline
    pub fn set_alpha(&mut self, alpha: u8) {
        self.fill.a = alpha;
        self.outline.a = alpha;
    }
}

/// Text label drawn at the transform position
#[derive(Debug, Clone, PartialEq)]
pub struct TextComponent {
    /// Label contents
    pub content: String,

    /// Character size in pixels
    pub font_size: u32,

    /// Fill color
    pub color: Color,

    /// Render scale, driven by hit reactions
    pub scale: f32,
}

impl TextComponent {
    /// Create a label at unit scale
    pub fn new(content: impl Into<String>, font_size: u32, color: Color) -> Self {
        Self {
            content: content.into(),
            font_size,
            color,
            scale: 1.0,
        }
    }
}
