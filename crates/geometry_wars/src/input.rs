//! Input polling interface
//!
//! Device handling is outside the core. Each frame the loop polls an
//! [`InputSource`] for an already-translated [`FrameInput`].

use std::collections::VecDeque;

use vector_engine::foundation::math::{Vec2, Vec2Ext};
use vector_engine::physics::Bounds;

/// Control intent for a single frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameInput {
    /// Movement axis, each component in {-1, 0, 1}
    pub axis: Vec2,
    /// Cursor position in world coordinates
    pub cursor: Vec2,
    /// Primary fire held
    pub fire: bool,
    /// Special fire held
    pub secondary_fire: bool,
    /// Quit key pressed this frame; needs a second press to take effect
    pub quit_pressed: bool,
    /// Window close requested; quits immediately
    pub close_requested: bool,
    /// Pause key pressed this frame
    pub pause_toggled: bool,
}

/// Supplier of per-frame input
pub trait InputSource {
    /// Input for the next frame
    fn poll(&mut self) -> FrameInput;
}

/// Input source that never does anything
#[derive(Debug, Default)]
pub struct IdleInput;

impl InputSource for IdleInput {
    fn poll(&mut self) -> FrameInput {
        FrameInput::default()
    }
}

/// Replays a fixed list of frames, then idles
#[derive(Debug, Default)]
pub struct ScriptedInput {
    frames: VecDeque<FrameInput>,
}

impl ScriptedInput {
    /// Create a script from frames in playback order
    pub fn new(frames: impl IntoIterator<Item = FrameInput>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> FrameInput {
        self.frames.pop_front().unwrap_or_default()
    }
}

/// Drives the ship around for unattended runs
///
/// The cursor circles the play-field center, movement cycles through the
/// eight directions, primary fire is always held and the special fires on a
/// fixed period.
#[derive(Debug)]
pub struct AutopilotInput {
    center: Vec2,
    radius: f32,
    special_period: u64,
    frame: u64,
}

impl AutopilotInput {
    /// Create an autopilot for the given play field
    pub fn new(play_field: Bounds) -> Self {
        Self {
            center: play_field.center(),
            radius: play_field.width.min(play_field.height) / 3.0,
            special_period: 90,
            frame: 0,
        }
    }

    /// Fire the special weapon every `period` frames
    pub fn with_special_period(mut self, period: u64) -> Self {
        self.special_period = period.max(1);
        self
    }
}

impl InputSource for AutopilotInput {
    fn poll(&mut self) -> FrameInput {
        const DIRECTIONS: [(f32, f32); 8] = [
            (1.0, 0.0),
            (1.0, 1.0),
            (0.0, 1.0),
            (-1.0, 1.0),
            (-1.0, 0.0),
            (-1.0, -1.0),
            (0.0, -1.0),
            (1.0, -1.0),
        ];
        let (x, y) = DIRECTIONS[(self.frame / 45 % 8) as usize];
        let cursor = self.center + Vec2::forward().rotated_deg(self.frame as f32 * 2.0) * self.radius;
        let input = FrameInput {
            axis: Vec2::new(x, y),
            cursor,
            fire: true,
            secondary_fire: self.frame % self.special_period == self.special_period - 1,
            ..FrameInput::default()
        };
        self.frame += 1;
        input
    }
}
