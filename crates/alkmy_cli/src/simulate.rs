//! Frame-by-frame simulation of a logo loop

use std::cell::RefCell;
use std::rc::Rc;

use alkmy_animation::FrameLoop;
use alkmy_core::{Axis, Size};
use alkmy_marquee::{LogoLoop, LogoLoopConfig, Measurement};
use anyhow::{ensure, Result};
use serde::Serialize;

use crate::config::SimulationConfig;

/// One recorded frame
#[derive(Debug, Clone, Serialize)]
pub struct FrameSample {
    pub frame: u32,
    pub time: f32,
    pub offset: f32,
    pub velocity: f32,
    pub hovered: bool,
    pub running: bool,
    pub copies: usize,
    pub transform: String,
}

/// Host measurement matching the simulated layout
pub fn synthetic_measurement(config: &LogoLoopConfig, sim: &SimulationConfig) -> Measurement {
    let cross = config.item_height;
    match config.axis() {
        Axis::Horizontal => Measurement::new(
            Size::new(sim.container, cross),
            Size::new(sim.sequence, cross),
        ),
        Axis::Vertical => Measurement::new(
            Size::new(cross, sim.container),
            Size::new(cross, sim.sequence),
        )
        .with_parent(Size::new(cross, sim.container)),
    }
}

/// Run the loop for `sim.frames` frames, sampling every `every` frames
pub fn run(config: LogoLoopConfig, sim: &SimulationConfig, every: u32) -> Result<Vec<FrameSample>> {
    ensure!(sim.fps > 0.0, "fps must be positive, got {}", sim.fps);
    let every = every.max(1);

    let measurement = synthetic_measurement(&config, sim);
    let logos = Rc::new(RefCell::new(LogoLoop::new(config, measurement)));
    logos.borrow_mut().mount();

    let mut frames = FrameLoop::new();
    let id = LogoLoop::attach(&logos, &mut frames);

    let frame_ms = 1000.0 / f64::from(sim.fps);
    let mut samples = Vec::new();

    for frame in 0..sim.frames {
        if sim.hover_at == Some(frame) {
            logos.borrow_mut().pointer_enter();
            tracing::info!(frame, "pointer entered");
        }
        if sim.leave_at == Some(frame) {
            logos.borrow_mut().pointer_leave();
            tracing::info!(frame, "pointer left");
        }

        frames.tick_at(f64::from(frame) * frame_ms);

        if frame % every == 0 || frame + 1 == sim.frames {
            let logos = logos.borrow();
            samples.push(FrameSample {
                frame,
                time: (f64::from(frame) * frame_ms / 1000.0) as f32,
                offset: logos.offset(),
                velocity: logos.velocity(),
                hovered: logos.is_hovered(),
                running: logos.state().is_running(),
                copies: logos.copy_count(),
                transform: logos.transform().to_css_translate(),
            });
        }
    }

    LogoLoop::detach(&logos, &mut frames, id);
    Ok(samples)
}
