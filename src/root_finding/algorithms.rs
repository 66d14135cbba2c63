//! Root-finding algorithm definitions.
//!
//! Provides the [`Algorithm`] enum, which enumerates all supported methods,
//! and their default iteration caps.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};


/// Root-finding algorithm variants.
/// - [`Algorithm::Bracket`] contains bracket methods for root-finding
/// - [`Algorithm::Open`]    contains open methods for root-finding
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Algorithm {
    Bracket(BracketFamily),
    Open(OpenFamily),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BracketFamily {
    Bisection,
    RegulaFalsiPure,
    RegulaFalsiIllinois,
    RegulaFalsiPegasus,
    RegulaFalsiAndersonBjorck,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OpenFamily {
    FixedPoint,
    Newton,
    Secant,
}

impl Algorithm {
    /// Default iteration count if `max_iter` is unset in config.
    ///
    /// # Notes
    /// └ Values are heuristic and method-specific. Bisection gets a fixed cap
    ///   rather than the width-only halving bound, since its stopping test also
    ///   waits on `|f(x)| <= tol`.
    pub const fn default_max_iter(self) -> usize {
        match self {
            Algorithm::Bracket(BracketFamily::Bisection)                   => 100,
            Algorithm::Bracket(BracketFamily::RegulaFalsiPure)             => 200,
            Algorithm::Bracket(BracketFamily::RegulaFalsiIllinois)
            | Algorithm::Bracket(BracketFamily::RegulaFalsiPegasus)
            | Algorithm::Bracket(BracketFamily::RegulaFalsiAndersonBjorck) => 100,
            Algorithm::Open(OpenFamily::FixedPoint)                        => 100,
            Algorithm::Open(OpenFamily::Newton)                            => 50,
            Algorithm::Open(OpenFamily::Secant)                            => 100,
        }
    }

    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Bracket(BracketFamily::Bisection)                 => "bisection",
            Algorithm::Bracket(BracketFamily::RegulaFalsiPure)           => "regula_falsi_pure",
            Algorithm::Bracket(BracketFamily::RegulaFalsiIllinois)       => "regula_falsi_illinois",
            Algorithm::Bracket(BracketFamily::RegulaFalsiPegasus)        => "regula_falsi_pegasus",
            Algorithm::Bracket(BracketFamily::RegulaFalsiAndersonBjorck) => "regula_falsi_anderson_bjorck",
            Algorithm::Open(OpenFamily::FixedPoint)                      => "fixed_point",
            Algorithm::Open(OpenFamily::Newton)                          => "newton",
            Algorithm::Open(OpenFamily::Secant)                          => "secant",
        }
    }
}
impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}
