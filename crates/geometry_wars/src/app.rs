//! Frame loop tying input, simulation and rendering together

use crate::input::InputSource;
use crate::render::RenderSurface;
use crate::state::SystemFlags;
use crate::{GameError, Simulation};

/// Frames between FPS samples in the debug log
const FPS_LOG_INTERVAL: u64 = 600;

/// Totals reported when the loop ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Ticks simulated
    pub frames: u64,
    /// Score at exit
    pub score: i64,
    /// Lives left at exit
    pub lives: i32,
}

/// Drives one simulation against a render surface and an input source
pub struct GameLoop<S: RenderSurface, I: InputSource> {
    simulation: Simulation,
    surface: S,
    input: I,
    frame_limit: Option<u64>,
}

impl<S: RenderSurface, I: InputSource> GameLoop<S, I> {
    /// Create a loop; warns when the surface size differs from the configured window
    pub fn new(simulation: Simulation, surface: S, input: I) -> Self {
        let (width, height) = surface.size();
        let settings = simulation.settings();
        if (width, height) != (settings.width, settings.height) {
            log::warn!(
                "Surface is {}x{} but the play field is {}x{}",
                width,
                height,
                settings.width,
                settings.height
            );
        }
        Self {
            simulation,
            surface,
            input,
            frame_limit: None,
        }
    }

    /// Stop after `frames` ticks even if nobody quits
    pub fn with_frame_limit(mut self, frames: u64) -> Self {
        self.frame_limit = Some(frames);
        self
    }

    /// Run until quit or the frame limit
    pub fn run(&mut self) -> Result<RunSummary, GameError> {
        log::info!("Starting main loop...");
        let mut frames = 0;

        while self.simulation.is_running() && self.frame_limit.map_or(true, |limit| frames < limit) {
            let elapsed = self.surface.elapsed();
            let input = self.input.poll();
            self.simulation.step(&input);

            if self.simulation.system_enabled(SystemFlags::RENDER) {
                let frame = self.simulation.render_frame();
                self.surface.present(&frame)?;
            }

            frames += 1;
            if frames % FPS_LOG_INTERVAL == 0 {
                let fps = if elapsed.is_zero() { 0.0 } else { 1.0 / elapsed.as_secs_f32() };
                log::debug!("Frame {}: {:.1} fps, {} entities", frames, fps, self.simulation.world().len());
            }
        }

        let summary = RunSummary {
            frames,
            score: self.simulation.state().score,
            lives: self.simulation.state().lives,
        };
        log::info!(
            "Loop finished after {} frames with score {}",
            summary.frames,
            summary.score
        );
        Ok(summary)
    }

    /// The simulation being driven
    pub fn simulation(&self) -> &Simulation {
        &self.simulation
    }

    /// The render surface
    pub fn surface(&self) -> &S {
        &self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{AutopilotInput, FrameInput, IdleInput, ScriptedInput};
    use crate::render::{HeadlessSurface, RenderFrame};
    use crate::tests::simulation;

    struct FailingSurface;

    impl RenderSurface for FailingSurface {
        fn size(&self) -> (f32, f32) {
            (1280.0, 720.0)
        }

        fn elapsed(&mut self) -> std::time::Duration {
            std::time::Duration::ZERO
        }

        fn present(&mut self, _frame: &RenderFrame) -> Result<(), GameError> {
            Err(GameError::Surface("device lost".to_string()))
        }
    }

    #[test]
    fn test_runs_to_frame_limit() {
        let sim = simulation();
        let bounds = sim.settings().play_field();
        let mut game = GameLoop::new(sim, HeadlessSurface::new(1280.0, 720.0), AutopilotInput::new(bounds))
            .with_frame_limit(120);

        let summary = game.run().unwrap();

        assert_eq!(summary.frames, 120);
        assert_eq!(game.surface().frames_presented(), 120);
        assert!(game.surface().last_command_count() > 0);
    }

    #[test]
    fn test_close_request_stops_loop() {
        let script = ScriptedInput::new([
            FrameInput::default(),
            FrameInput {
                close_requested: true,
                ..FrameInput::default()
            },
        ]);
        let mut game = GameLoop::new(simulation(), HeadlessSurface::new(1280.0, 720.0), script);

        let summary = game.run().unwrap();

        assert_eq!(summary.frames, 2);
        assert!(!game.simulation().is_running());
    }

    #[test]
    fn test_render_toggle_skips_present() {
        let mut sim = simulation();
        sim.set_system_enabled(SystemFlags::RENDER, false);
        let mut game = GameLoop::new(sim, FailingSurface, IdleInput).with_frame_limit(5);
        assert_eq!(game.run().unwrap().frames, 5);
    }

    #[test]
    fn test_surface_failure_ends_run() {
        let mut game = GameLoop::new(simulation(), FailingSurface, IdleInput).with_frame_limit(5);
        assert!(matches!(game.run(), Err(GameError::Surface(_))));
    }
}
