//! Particle background state
//!
//! Particles live in normalized page coordinates (`0.0..1.0` on both axes) and wrap
//! around the edges. Positions come from a low-discrepancy sequence so the field is
//! evenly spread and identical on every start.

/// Horizontal step of the placement sequence (inverse plastic number)
const SEQ_X: f32 = 0.754_877_7;
/// Vertical step of the placement sequence (inverse plastic number squared)
const SEQ_Y: f32 = 0.569_840_3;

/// A single drifting particle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    /// Index into the theme's particle colors
    pub color: usize,
}

/// The whole particle field
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParticleField {
    pub particles: Vec<Particle>,
}

impl ParticleField {
    /// Spread `count` particles drifting at most `speed` per tick
    pub fn new(count: usize, speed: f32) -> Self {
        let particles = (0..count)
            .map(|i| {
                let n = i as f32 + 1.0;
                let angle = n * std::f32::consts::TAU * SEQ_Y;
                Particle {
                    x: (n * SEQ_X).fract(),
                    y: (n * SEQ_Y).fract(),
                    vx: angle.cos() * speed,
                    // Terminal cells are about twice as tall as wide
                    vy: angle.sin() * speed * 0.5,
                    color: i % 3,
                }
            })
            .collect();
        Self { particles }
    }

    /// Advance every particle by one tick
    pub fn step(&mut self) {
        for p in &mut self.particles {
            p.x = wrap(p.x + p.vx);
            p.y = wrap(p.y + p.vy);
        }
    }
}

fn wrap(v: f32) -> f32 {
    let wrapped = v.rem_euclid(1.0);
    // rem_euclid rounds tiny negatives up to exactly 1.0
    if wrapped >= 1.0 {
        0.0
    } else {
        wrapped
    }
}
