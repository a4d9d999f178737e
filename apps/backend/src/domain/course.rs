//! The built-in 18-hole course and the difficulty tolerance table.

use serde::Serialize;

const STANDARD_TARGETS: [f64; 18] = [
    140.0, 180.0, 100.0, 200.0, 135.0, 100.0, 170.0, 210.0, 100.0, 150.0, 180.0, 120.0, 200.0,
    135.0, 120.0, 170.0, 200.0, 110.0,
];
const STANDARD_PARS: [u8; 18] = [3, 4, 3, 4, 3, 3, 4, 5, 3, 4, 4, 3, 4, 3, 3, 4, 4, 3];

/// Allowed deviation when a difficulty falls outside 1..=5.
pub const DEFAULT_TOLERANCE: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Hole {
    /// 1-indexed
    pub number: i16,
    /// Revolutions the shot should land on
    pub target: f64,
    pub par: u8,
}

/// Ordered, non-empty, immutable sequence of holes.
#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    holes: Vec<Hole>,
}

impl Course {
    pub fn standard() -> Self {
        let holes = STANDARD_TARGETS
            .iter()
            .zip(STANDARD_PARS.iter())
            .enumerate()
            .map(|(i, (&target, &par))| Hole {
                number: i as i16 + 1,
                target,
                par,
            })
            .collect();
        Self { holes }
    }

    /// `None` outside `1..=hole_count()`.
    pub fn hole_at(&self, number: i16) -> Option<&Hole> {
        if number < 1 {
            return None;
        }
        self.holes.get(number as usize - 1)
    }

    pub fn hole_count(&self) -> i16 {
        self.holes.len() as i16
    }

    pub fn total_par(&self) -> i32 {
        self.holes.iter().map(|h| i32::from(h.par)).sum()
    }

    pub fn holes(&self) -> &[Hole] {
        &self.holes
    }

    pub fn targets(&self) -> Vec<f64> {
        self.holes.iter().map(|h| h.target).collect()
    }

    pub fn first_hole(&self) -> &Hole {
        // Non-empty by construction.
        &self.holes[0]
    }

    pub fn is_last(&self, number: i16) -> bool {
        number == self.hole_count()
    }
}

impl Default for Course {
    fn default() -> Self {
        Self::standard()
    }
}

/// Allowed |measurement - target| for a difficulty level.
pub fn tolerance_for(difficulty: i16) -> f64 {
    match difficulty {
        1 => 10.0,
        2 => 7.0,
        3 => 5.0,
        4 => 3.0,
        5 => 2.0,
        _ => DEFAULT_TOLERANCE,
    }
}
