use crate::constants::*;
use crate::particle::{EntryMode, Particle};
use crate::raster::Sample;
use crate::spatial::ParticleGrid;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fmt;
use std::time::Duration;

/// Runtime-tunable simulation parameters.
#[derive(Clone, Debug)]
pub struct SwarmParams {
    pub ease: f32,
    pub friction: f32,
    pub repulsion_radius: f32,
    pub push_strength: f32,
    pub influence_radius: f32,
    pub max_glow: f32,
    pub reuse_radius: f32,
    pub resize_debounce: Duration,
}

impl Default for SwarmParams {
    fn default() -> Self {
        Self {
            ease: EASE,
            friction: FRICTION,
            repulsion_radius: REPULSION_RADIUS,
            push_strength: PUSH_STRENGTH,
            influence_radius: INFLUENCE_RADIUS,
            max_glow: MAX_GLOW,
            reuse_radius: REUSE_RADIUS,
            resize_debounce: Duration::from_millis(RESIZE_DEBOUNCE_MS),
        }
    }
}

/// How a rebuild treats the particles already alive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RebuildPlan {
    /// Try to retarget nearby live particles before creating new ones.
    pub reuse: bool,
    /// Entry mode for particles that have to be created.
    pub entry: EntryMode,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RebuildStats {
    pub samples: usize,
    pub reused: usize,
    pub created: usize,
    pub retired: usize,
}

impl fmt::Display for RebuildStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "samples={} reused={} created={} retired={}",
            self.samples, self.reused, self.created, self.retired
        )
    }
}

pub struct Swarm {
    particles: Vec<Particle>,
    rng: StdRng,
    next_id: u64,
}

impl Swarm {
    pub fn new(seed: u64) -> Self {
        Self {
            particles: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
            next_id: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    /// Reconcile the live set against `samples`.
    ///
    /// Every sample ends up owned by exactly one particle, either a reused one
    /// (only when `plan.reuse`) or a new one. Particles no sample claimed are
    /// dropped, so afterwards `len() == samples.len()`.
    pub fn rebuild(
        &mut self,
        samples: &[Sample],
        plan: RebuildPlan,
        surface_height: f32,
        reuse_radius: f32,
    ) -> RebuildStats {
        let previous = std::mem::take(&mut self.particles);
        let positions: Vec<Vec2> = previous.iter().map(|p| p.position).collect();
        let mut slots: Vec<Option<Particle>> = previous.into_iter().map(Some).collect();
        let mut grid = (plan.reuse && !slots.is_empty())
            .then(|| ParticleGrid::build(&positions, reuse_radius));

        let mut stats = RebuildStats {
            samples: samples.len(),
            ..Default::default()
        };
        let mut next = Vec::with_capacity(samples.len());

        for sample in samples {
            let claimed = match grid.as_mut() {
                Some(g) if !g.is_empty() => g.nearest(sample.position, &positions).and_then(|i| {
                    g.remove(i, positions[i]);
                    slots[i].take()
                }),
                _ => None,
            };
            match claimed {
                Some(mut p) => {
                    p.retarget(sample);
                    stats.reused += 1;
                    next.push(p);
                }
                None => {
                    let id = self.next_id;
                    self.next_id += 1;
                    next.push(Particle::spawn(
                        id,
                        sample,
                        plan.entry,
                        surface_height,
                        &mut self.rng,
                    ));
                    stats.created += 1;
                }
            }
        }

        stats.retired = slots.iter().filter(|s| s.is_some()).count();
        self.particles = next;
        log::debug!("[swarm] rebuild {:?}: {}", plan, stats);
        stats
    }
}
