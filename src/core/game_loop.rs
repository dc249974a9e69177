//! The frame loop: input, simulation, render, present, until the host
//! asks to stop.
use log::{info, warn};

use crate::core::input::InputSource;
use crate::core::state::GameState;
use crate::render::framebuffer::Framebuffer;
use crate::render::render3d::render_frame;

/// A window (or test harness) that paces frames and shows finished ones.
pub trait FrameHost: InputSource {
    /// Teardown signal; checked before every frame.
    fn should_close(&self) -> bool;
    fn present(&mut self, frame: &Framebuffer);
}

/// Run until `host.should_close()`. Returns the number of frames shown.
/// A zero-sized framebuffer means there is nothing to draw on, so the loop
/// returns immediately without touching the host.
pub fn run<H: FrameHost>(state: &mut GameState, host: &mut H, frame: &mut Framebuffer) -> u64 {
    if frame.width == 0 || frame.height == 0 {
        warn!("no drawing surface ({}x{}), not starting", frame.width, frame.height);
        return 0;
    }
    info!("game loop started on {}x{} surface", frame.width, frame.height);
    let mut frames = 0u64;
    while !host.should_close() {
        let input = host.poll();
        state.step(&input);
        render_frame(state, frame);
        host.present(frame);
        frames += 1;
    }
    info!("game loop stopped after {frames} frames");
    frames
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::{FrameInput, HeldActions};

    struct Scripted {
        frames_left: u32,
        presented: u32,
    }

    impl InputSource for Scripted {
        fn poll(&mut self) -> FrameInput {
            self.frames_left -= 1;
            FrameInput {
                held: HeldActions { forward: true, ..Default::default() },
                events: Vec::new(),
                dt: 1.0 / 60.0,
            }
        }
    }

    impl FrameHost for Scripted {
        fn should_close(&self) -> bool {
            self.frames_left == 0
        }

        fn present(&mut self, _frame: &Framebuffer) {
            self.presented += 1;
        }
    }

    #[test]
    fn runs_until_teardown() {
        let mut state = GameState::sample();
        let mut host = Scripted { frames_left: 4, presented: 0 };
        let mut fb = Framebuffer::new(64, 48);
        assert_eq!(run(&mut state, &mut host, &mut fb), 4);
        assert_eq!(host.presented, 4);
        assert!((state.player.x - (1.5 + 4.0 * 0.05)).abs() < 1e-4);
    }

    #[test]
    fn missing_surface_is_a_silent_no_op() {
        let mut state = GameState::sample();
        let mut host = Scripted { frames_left: 4, presented: 0 };
        let mut fb = Framebuffer::new(0, 0);
        assert_eq!(run(&mut state, &mut host, &mut fb), 0);
        assert_eq!(host.presented, 0);
        assert_eq!(state.player.x, 1.5);
    }
}
