//! The easing function table.
//!
//! A closed set of scalar remappings over the unit interval, used to
//! distribute the light-to-seed portion of a shade ramp. A tagged enum
//! instead of name-keyed function values, so an invalid name cannot
//! exist at runtime.

use std::f64::consts::PI;
use std::fmt::{Display, Formatter};

/// Shading function for the head of a ramp.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shading {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Shading {
    /// All shading functions, in cycle order.
    pub const fn array() -> [Shading; 4] {
        use Shading::*;
        [Linear, EaseIn, EaseOut, EaseInOut]
    }

    /// Evaluates the function at `x`.
    ///
    /// Every variant fixes both endpoints: `apply(0) == 0` and
    /// `apply(1) == 1`.
    pub fn apply(self, x: f64) -> f64 {
        match self {
            Shading::Linear => x,
            Shading::EaseIn => 1.0 - (x * PI / 2.0).cos(),
            Shading::EaseOut => (x * PI / 2.0).sin(),
            Shading::EaseInOut => (1.0 - (x * PI).cos()) / 2.0,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Shading::Linear => "linear",
            Shading::EaseIn => "ease-in",
            Shading::EaseOut => "ease-out",
            Shading::EaseInOut => "ease-in-out",
        }
    }

    pub fn from_name(n: &str) -> Option<Self> {
        match n {
            "linear" => Some(Shading::Linear),
            "ease-in" => Some(Shading::EaseIn),
            "ease-out" => Some(Shading::EaseOut),
            "ease-in-out" => Some(Shading::EaseInOut),
            _ => None,
        }
    }

    /// The next function in cycle order, wrapping around.
    pub const fn next(self) -> Self {
        match self {
            Shading::Linear => Shading::EaseIn,
            Shading::EaseIn => Shading::EaseOut,
            Shading::EaseOut => Shading::EaseInOut,
            Shading::EaseInOut => Shading::Linear,
        }
    }
}

impl Display for Shading {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
