//! Hover tilt for cards. Only the easing math lives here; the host drives it
//! from pointer events and animation frames.

use crate::config::{TILT_EPSILON, TILT_INERTIA, TILT_MAX_DEG};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tilt {
    pub current_x: f64,
    pub current_y: f64,
    pub target_x: f64,
    pub target_y: f64,
    max_deg: f64,
    inertia: f64,
}

impl Default for Tilt {
    fn default() -> Self {
        Self::new(TILT_MAX_DEG, TILT_INERTIA)
    }
}

impl Tilt {
    pub fn new(max_deg: f64, inertia: f64) -> Self {
        Self {
            current_x: 0.0,
            current_y: 0.0,
            target_x: 0.0,
            target_y: 0.0,
            max_deg,
            inertia,
        }
    }

    /// Aims at a pointer given as a fraction of the card's width and height.
    pub fn aim(&mut self, rel_x: f64, rel_y: f64) {
        self.target_x = (0.5 - rel_y) * self.max_deg;
        self.target_y = (rel_x - 0.5) * self.max_deg;
    }

    pub fn reset(&mut self) {
        self.target_x = 0.0;
        self.target_y = 0.0;
    }

    /// Advances one frame. Returns true while another frame is needed.
    pub fn step(&mut self) -> bool {
        self.current_x += (self.target_x - self.current_x) * self.inertia;
        self.current_y += (self.target_y - self.current_y) * self.inertia;
        (self.current_x - self.target_x).abs() > TILT_EPSILON
            || (self.current_y - self.target_y).abs() > TILT_EPSILON
    }

    pub fn transform(&self) -> String {
        format!(
            "rotateX({}deg) rotateY({}deg) translateZ(10px)",
            self.current_x, self.current_y
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_aims_at_full_tilt() {
        let mut tilt = Tilt::default();
        tilt.aim(1.0, 0.0);
        assert_eq!(tilt.target_x, 5.0);
        assert_eq!(tilt.target_y, 5.0);
    }

    #[test]
    fn settles_after_reset() {
        let mut tilt = Tilt::default();
        tilt.aim(0.0, 1.0);
        while tilt.step() {}
        tilt.reset();
        let mut frames = 0;
        while tilt.step() {
            frames += 1;
            assert!(frames < 1_000, "tilt never settled");
        }
        assert!(tilt.current_x.abs() <= TILT_EPSILON);
        assert!(tilt.current_y.abs() <= TILT_EPSILON);
    }
}
