//! Confetti Burst
//!
//! A one-shot particle burst in normalized coordinates: `x` runs 0.0 (left)
//! to 1.0 (right), `y` runs 0.0 (top) to 1.0 (bottom). Pieces are shot
//! from the top centre to a random point in the upper part of the screen,
//! then fall past the bottom edge while swaying and fading out.

use std::time::Duration;

use rand::Rng;

/// Confetti colors as RGB
pub const CONFETTI_PALETTE: [(u8, u8, u8); 5] = [
    (0xFF, 0x92, 0xA5),
    (0xFF, 0xB3, 0xC6),
    (0xFE, 0xCD, 0xD3),
    (0xFF, 0x69, 0xB4),
    (0xFF, 0xFF, 0xFF),
];

/// Burst tuning
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConfettiSettings {
    pub count: usize,
    /// Pause between firing and the first piece leaving the origin
    pub delay: Duration,
    /// Time to reach the top of the arc
    pub explosion: Duration,
    /// Time to fall from the arc to the bottom edge
    pub fall: Duration,
    pub fade_out: bool,
}

impl Default for ConfettiSettings {
    fn default() -> Self {
        Self {
            count: 150,
            delay: Duration::from_millis(300),
            explosion: Duration::from_millis(350),
            fall: Duration::from_millis(2500),
            fade_out: true,
        }
    }
}

#[derive(Clone, Debug)]
struct Piece {
    target_x: f32,
    target_y: f32,
    sway: f32,
    phase: f32,
    color: usize,
    /// Fraction of `fall` this piece is slower than the fastest
    lag: f32,
}

/// A rendered confetti piece
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConfettiPiece {
    pub x: f32,
    pub y: f32,
    /// Index into [`CONFETTI_PALETTE`]
    pub color: usize,
    pub opacity: f32,
}

pub struct Confetti {
    settings: ConfettiSettings,
    pieces: Vec<Piece>,
    elapsed: Duration,
    active: bool,
}

impl Confetti {
    pub fn new(settings: ConfettiSettings) -> Self {
        Self {
            settings,
            pieces: Vec::new(),
            elapsed: Duration::ZERO,
            active: false,
        }
    }

    /// Fire a new burst, replacing any in flight
    pub fn fire<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.pieces = (0..self.settings.count)
            .map(|_| Piece {
                target_x: rng.gen_range(0.0..1.0),
                target_y: rng.gen_range(0.05..0.4),
                sway: rng.gen_range(0.01..0.04),
                phase: rng.gen_range(0.0..std::f32::consts::TAU),
                color: rng.gen_range(0..CONFETTI_PALETTE.len()),
                lag: rng.gen_range(0.0..0.3),
            })
            .collect();
        self.elapsed = Duration::ZERO;
        self.active = true;
    }

    pub fn advance(&mut self, delta: Duration) {
        if !self.active {
            return;
        }
        self.elapsed += delta;
        if self.elapsed >= self.total_duration() {
            self.active = false;
            self.pieces.clear();
        }
    }

    /// Firing delay plus the slowest piece's flight
    pub fn total_duration(&self) -> Duration {
        self.settings.delay + self.settings.explosion + self.settings.fall.mul_f32(1.3)
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Pieces currently on screen
    pub fn pieces(&self) -> Vec<ConfettiPiece> {
        if !self.active || self.elapsed < self.settings.delay {
            return Vec::new();
        }

        let t = self.elapsed - self.settings.delay;
        let explosion = self.settings.explosion.as_secs_f32().max(f32::EPSILON);

        self.pieces
            .iter()
            .filter_map(|p| {
                let secs = t.as_secs_f32();
                if secs < explosion {
                    // Ease-out arc from the origin
                    let k = secs / explosion;
                    let k = 1.0 - (1.0 - k) * (1.0 - k);
                    return Some(ConfettiPiece {
                        x: 0.5 + (p.target_x - 0.5) * k,
                        y: p.target_y * k,
                        color: p.color,
                        opacity: 1.0,
                    });
                }

                let fall = self.settings.fall.as_secs_f32() * (1.0 + p.lag);
                let k = (secs - explosion) / fall.max(f32::EPSILON);
                if k >= 1.0 {
                    return None;
                }
                let y = p.target_y + (1.05 - p.target_y) * k * k;
                let x = p.target_x + p.sway * (p.phase + k * 8.0).sin();
                let opacity = if self.settings.fade_out { 1.0 - k } else { 1.0 };

                Some(ConfettiPiece {
                    x: x.clamp(0.0, 1.0),
                    y,
                    color: p.color,
                    opacity,
                })
            })
            .collect()
    }
}
