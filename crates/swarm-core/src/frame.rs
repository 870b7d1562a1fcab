use crate::sim::Simulation;
use crate::surface::Surface;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DriverState {
    #[default]
    Idle,
    Running,
}

/// Per-frame orchestration: clear, then update and draw every particle.
///
/// Each delivered frame advances physics by exactly one fixed step regardless
/// of how much wall time passed, so perceived speed follows the host frame rate.
/// Scheduling the next frame is left to the host loop.
#[derive(Debug, Default)]
pub struct FrameDriver {
    state: DriverState,
    frames: u64,
}

impl FrameDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn tick<S: Surface + ?Sized>(&mut self, sim: &mut Simulation, surface: &mut S, time_ms: f64) {
        if self.state == DriverState::Idle {
            log::info!("[frame] loop running ({} particles)", sim.swarm.len());
            self.state = DriverState::Running;
        }
        self.frames += 1;

        surface.clear();
        let pointer = sim.pointer.position();
        let center = sim.size().center();
        let params = &sim.params;
        for p in sim.swarm.particles_mut() {
            p.update(pointer, params);
            p.draw(surface, time_ms, center, pointer, params);
        }
    }
}
