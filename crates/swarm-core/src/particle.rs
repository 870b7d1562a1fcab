use crate::constants::*;
use crate::raster::Sample;
use crate::surface::{Color, Surface};
use crate::swarm::SwarmParams;
use glam::Vec2;
use rand::Rng;

/// How a freshly created particle enters the scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryMode {
    /// Placed on its target with zero velocity.
    AtTarget,
    /// Placed below the bottom edge with an upward kick.
    FromBottom,
}

#[derive(Clone, Debug)]
pub struct Particle {
    pub id: u64,
    pub position: Vec2,
    pub target: Vec2,
    pub velocity: Vec2,
    pub color: [u8; 3],
    pub entry: EntryMode,
    size: f32,
    depth: f32,
    hue_seed: f32,
}

/// What a particle looks like on a given frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Appearance {
    pub center: Vec2,
    pub radius: f32,
    pub color: Color,
    pub glow: f32,
}

impl Particle {
    pub fn spawn<R: Rng>(
        id: u64,
        sample: &Sample,
        entry: EntryMode,
        surface_height: f32,
        rng: &mut R,
    ) -> Self {
        let target = sample.position;
        let (position, velocity) = match entry {
            EntryMode::AtTarget => (target, Vec2::ZERO),
            EntryMode::FromBottom => {
                let x = target.x + (rng.gen::<f32>() - 0.5) * ENTRY_SCATTER_X;
                let y = surface_height + rng.gen::<f32>() * ENTRY_DROP_Y;
                let vy = -(rng.gen::<f32>() * ENTRY_LIFT_SPAN + ENTRY_LIFT_MIN);
                (Vec2::new(x, y), Vec2::new(0.0, vy))
            }
        };
        Self {
            id,
            position,
            target,
            velocity,
            color: sample.color,
            entry,
            size: rng.gen::<f32>() * SIZE_SPAN + SIZE_MIN,
            depth: rng.gen::<f32>() * DEPTH_MAX,
            hue_seed: rng.gen::<f32>() * HUE_MAX,
        }
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn depth(&self) -> f32 {
        self.depth
    }

    pub fn hue_seed(&self) -> f32 {
        self.hue_seed
    }

    /// Point the spring at a new sample. Position and velocity are left alone so
    /// the particle glides over on the following frames. The color follows the
    /// new sample so the gradient stays continuous across the reflowed text.
    pub fn retarget(&mut self, sample: &Sample) {
        self.target = sample.position;
        self.color = sample.color;
    }

    /// Advance one fixed logical step.
    pub fn update(&mut self, pointer: Option<Vec2>, params: &SwarmParams) {
        if let Some(p) = pointer {
            self.velocity += repulsion_impulse(
                self.position,
                p,
                params.repulsion_radius,
                params.push_strength,
            );
        }
        self.velocity += (self.target - self.position) * params.ease;
        self.velocity *= params.friction;
        self.position += self.velocity;
    }

    pub fn appearance(
        &self,
        time_ms: f64,
        surface_center: Vec2,
        pointer: Option<Vec2>,
        params: &SwarmParams,
    ) -> Appearance {
        let z = depth_multiplier(time_ms, self.depth);
        let offset = (self.position - surface_center) * z * PARALLAX_FACTOR;

        let mut color = Color::Rgb(self.color);
        let mut glow = 0.0;
        if let Some(p) = pointer {
            let dist = p.distance(self.position);
            if dist < params.influence_radius {
                let proximity = 1.0 - dist / params.influence_radius;
                glow = params.max_glow * proximity;
                let wobble = ((time_ms / 100.0).sin() as f32) * HOVER_HUE_WOBBLE_DEG;
                color = Color::Hsl {
                    hue: self.hue_seed + wobble + proximity * HOVER_HUE_PROXIMITY_DEG,
                    saturation: HOVER_SATURATION,
                    lightness: HOVER_LIGHTNESS,
                };
            }
        }

        Appearance {
            center: self.position + offset,
            radius: self.size * z,
            color,
            glow,
        }
    }

    pub fn draw<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        time_ms: f64,
        surface_center: Vec2,
        pointer: Option<Vec2>,
        params: &SwarmParams,
    ) {
        let a = self.appearance(time_ms, surface_center, pointer, params);
        surface.fill_circle(a.center, a.radius, &a.color, a.glow);
    }
}

/// Velocity change caused by a pointer at `pointer` on a particle at `position`.
///
/// Magnitude is `(radius - dist) * strength` inside the radius and zero outside.
/// A pointer exactly on the particle pushes along -x (atan2(0, 0) = 0).
#[inline]
pub fn repulsion_impulse(position: Vec2, pointer: Vec2, radius: f32, strength: f32) -> Vec2 {
    let delta = pointer - position;
    let dist = delta.length();
    if dist >= radius {
        return Vec2::ZERO;
    }
    let angle = delta.y.atan2(delta.x);
    -Vec2::from_angle(angle) * (radius - dist) * strength
}

/// Breathing multiplier in [0.5, 1.5], phase-shifted by depth.
#[inline]
pub fn depth_multiplier(time_ms: f64, depth: f32) -> f32 {
    let phase = (time_ms + depth as f64 * DEPTH_PHASE_SCALE) / DEPTH_PERIOD_MS;
    (phase.sin() * 0.5 + 1.0) as f32
}
