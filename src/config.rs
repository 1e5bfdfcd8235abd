//! Difficulty tunables and host platform detection.
//!
//! The game has exactly one configuration surface: on touch/mobile hosts the
//! physics tunables are swapped for an easier set, once, at process start.

use serde::{Deserialize, Serialize};

/// Platform-identifier fragments that mark a touch/mobile host.
const MOBILE_MARKERS: [&str; 8] = [
    "android",
    "webos",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
];

/// Difficulty profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    /// Desktop defaults.
    Standard,
    /// Touch/mobile hosts: weaker gravity, slower climb, wider spawn spacing.
    Easy,
}

impl Difficulty {
    /// Detect the profile for the current host.
    pub fn detect() -> Self {
        Self::for_platform(&platform_identifier())
    }

    /// Profile for a given platform identifier.
    pub fn for_platform(identifier: &str) -> Self {
        if is_mobile_platform(identifier) {
            Self::Easy
        } else {
            Self::Standard
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::Easy => "Easy",
        }
    }

    /// Velocity added per tick.
    pub fn gravity(&self) -> f64 {
        match self {
            Self::Standard => 0.3,
            Self::Easy => 0.1,
        }
    }

    /// Velocity override on jump (negative = upward). Replaces, never adds.
    pub fn jump_strength(&self) -> f64 {
        match self {
            Self::Standard => -7.0,
            Self::Easy => -3.0,
        }
    }

    /// Horizontal pipe scroll per tick.
    pub fn pipe_speed(&self) -> f64 {
        match self {
            Self::Standard => 1.5,
            Self::Easy => 2.0,
        }
    }

    /// Spawn threshold compared against the newest pipe's x.
    pub fn pipe_interval(&self) -> f64 {
        match self {
            Self::Standard => 200.0,
            Self::Easy => 250.0,
        }
    }

    pub fn tunables(&self) -> Tunables {
        Tunables {
            gravity: self.gravity(),
            jump_strength: self.jump_strength(),
            pipe_speed: self.pipe_speed(),
            pipe_interval: self.pipe_interval(),
        }
    }
}

/// Physics tunables cached on the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tunables {
    pub gravity: f64,
    pub jump_strength: f64,
    pub pipe_speed: f64,
    pub pipe_interval: f64,
}

impl Default for Tunables {
    fn default() -> Self {
        Difficulty::Standard.tunables()
    }
}

/// True if the identifier names a touch/mobile platform (case-insensitive).
pub fn is_mobile_platform(identifier: &str) -> bool {
    let lower = identifier.to_lowercase();
    MOBILE_MARKERS.iter().any(|marker| lower.contains(marker))
}

/// Identifier for the host running this process.
///
/// Terminals have no user agent; the OS name stands in for one, with Termux
/// (a terminal on Android phones) reported as Android.
pub fn platform_identifier() -> String {
    let os = std::env::consts::OS;
    if std::env::var_os("TERMUX_VERSION").is_some() {
        format!("{} (Android; Termux)", os)
    } else {
        os.to_string()
    }
}
