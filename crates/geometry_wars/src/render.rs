//! Render surface interface and per-frame draw snapshot
//!
//! The simulation never draws. At the end of each tick it flattens the
//! renderable components into a [`RenderFrame`] and hands it to whatever
//! [`RenderSurface`] the loop was built with.

use std::time::Duration;

use vector_engine::ecs::components::Color;
use vector_engine::foundation::math::{utils, Vec2, Vec2Ext};
use vector_engine::foundation::time::Timer;

use crate::{GameError, Simulation};

/// One drawable primitive
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Filled and outlined regular polygon
    Polygon {
        /// Center position
        position: Vec2,
        /// Rotation in radians
        rotation: f32,
        /// Combined transform and reaction scale
        scale: f32,
        /// Circumscribed radius
        radius: f32,
        /// Vertex count
        vertices: u32,
        /// Fill color
        fill: Color,
        /// Outline color
        outline: Color,
        /// Outline thickness
        outline_thickness: f32,
    },
    /// Thick segment in world coordinates
    Line {
        /// World start point
        start: Vec2,
        /// World end point
        end: Vec2,
        /// Thickness
        thickness: f32,
        /// Fill color
        fill: Color,
        /// Outline color
        outline: Color,
        /// Outline thickness
        outline_thickness: f32,
    },
    /// Text label
    Text {
        /// Top-left position
        position: Vec2,
        /// Contents
        content: String,
        /// Character size
        font_size: u32,
        /// Color
        color: Color,
        /// Render scale
        scale: f32,
    },
}

/// Everything to draw for one tick, in entity insertion order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderFrame {
    /// Tick this frame was captured on
    pub frame: u64,
    /// Score at capture time
    pub score: i64,
    /// Draw commands
    pub commands: Vec<DrawCommand>,
}

/// Window or offscreen target the loop presents frames to
pub trait RenderSurface {
    /// Play-field size in pixels
    fn size(&self) -> (f32, f32);

    /// Wall-clock time since the previous call
    fn elapsed(&mut self) -> Duration;

    /// Draw one frame
    fn present(&mut self, frame: &RenderFrame) -> Result<(), GameError>;
}

/// Measures glyph advances for laying out text entities
pub trait GlyphMetrics {
    /// Horizontal advance of `glyph` at `font_size`
    fn advance(&self, glyph: char, font_size: u32) -> f32;
}

/// Fixed-width glyphs at a fraction of the font size
#[derive(Debug, Clone, Copy)]
pub struct MonospaceMetrics {
    /// Advance as a fraction of the font size
    pub width_ratio: f32,
}

impl Default for MonospaceMetrics {
    fn default() -> Self {
        Self { width_ratio: 0.6 }
    }
}

impl GlyphMetrics for MonospaceMetrics {
    fn advance(&self, _glyph: char, font_size: u32) -> f32 {
        font_size as f32 * self.width_ratio
    }
}

/// Surface that draws nothing, for unattended runs and tests
pub struct HeadlessSurface {
    width: f32,
    height: f32,
    timer: Timer,
    target_fps: u32,
    frames_presented: u64,
    last_command_count: usize,
}

impl HeadlessSurface {
    /// Create an unpaced surface of the given size
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            timer: Timer::new(),
            target_fps: 0,
            frames_presented: 0,
            last_command_count: 0,
        }
    }

    /// Sleep after each frame to hold `fps`; zero disables pacing
    pub fn with_frame_rate(mut self, fps: u32) -> Self {
        self.target_fps = fps;
        self
    }

    /// Frames presented so far
    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    /// Draw commands in the most recent frame
    pub fn last_command_count(&self) -> usize {
        self.last_command_count
    }

    /// Average presentation rate
    pub fn average_fps(&self) -> f32 {
        self.timer.average_fps()
    }
}

impl RenderSurface for HeadlessSurface {
    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn elapsed(&mut self) -> Duration {
        self.timer.update();
        self.timer.delta()
    }

    fn present(&mut self, frame: &RenderFrame) -> Result<(), GameError> {
        self.frames_presented += 1;
        self.last_command_count = frame.commands.len();
        log::trace!("Frame {}: {} draw commands", frame.frame, frame.commands.len());
        let idle = self.timer.remaining_in_frame(self.target_fps);
        if !idle.is_zero() {
            std::thread::sleep(idle);
        }
        Ok(())
    }
}

impl Simulation {
    /// Flatten the world's renderable components into draw commands
    ///
    /// Entities destroyed this tick are still drawn; they disappear at the
    /// next flush.
    pub fn render_frame(&self) -> RenderFrame {
        let spin = utils::deg_to_rad(self.settings.shape_rotation * self.state.frame_count as f32);
        let mut commands = Vec::new();

        for key in self.world.entities() {
            let Some(entity) = self.world.get(*key) else {
                continue;
            };
            let Some(transform) = entity.transform else {
                continue;
            };

            if let Some(shape) = &entity.shape {
                commands.push(DrawCommand::Polygon {
                    position: transform.position,
                    rotation: transform.rotation + spin,
                    scale: transform.scale * shape.scale,
                    radius: shape.radius,
                    vertices: shape.vertices,
                    fill: shape.fill,
                    outline: shape.outline,
                    outline_thickness: shape.outline_thickness,
                });
            }
            if let Some(line) = &entity.line {
                commands.push(DrawCommand::Line {
                    start: transform.position + line.start.rotated(transform.rotation),
                    end: transform.position + line.end.rotated(transform.rotation),
                    thickness: line.thickness,
                    fill: line.fill,
                    outline: line.outline,
                    outline_thickness: line.outline_thickness,
                });
            }
            if let Some(text) = &entity.text {
                commands.push(DrawCommand::Text {
                    position: transform.position,
                    content: text.content.clone(),
                    font_size: text.font_size,
                    color: text.color,
                    scale: transform.scale * text.scale,
                });
            }
        }

        RenderFrame {
            frame: self.state.frame_count,
            score: self.state.score,
            commands,
        }
    }
}
