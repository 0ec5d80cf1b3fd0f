//! Where the main window opens on launch.
//!
//! With `window_restore` on, the window reopens exactly where the user left
//! it.  Otherwise it opens near the top-left corner at a size derived from the
//! screen: half the width and 80% of the height, capped at 1600×1200 so it
//! stays reasonable on very large monitors.

use std::fmt;
use std::str::FromStr;

use super::settings::UserSettings;

/// Top-left corner used when geometry is not restored.
const FRESH_POSITION: (i32, i32) = (20, 20);
/// Largest width used when geometry is not restored.
const FRESH_MAX_WIDTH: f64 = 1600.0;
/// Largest height used when geometry is not restored.
const FRESH_MAX_HEIGHT: f64 = 1200.0;
const FRESH_WIDTH_FRACTION: f64 = 0.5;
const FRESH_HEIGHT_FRACTION: f64 = 0.8;

/// Size of the screen the window opens on, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenSize {
    pub width: u32,
    pub height: u32,
}

impl FromStr for ScreenSize {
    type Err = String;

    /// Parses `"WIDTHxHEIGHT"`, e.g. `"2560x1440"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (w, h) = s
            .split_once(|c| c == 'x' || c == 'X')
            .ok_or_else(|| format!("expected WIDTHxHEIGHT, got `{s}`"))?;
        let width = w.trim().parse::<u32>().map_err(|e| format!("bad width `{w}`: {e}"))?;
        let height = h.trim().parse::<u32>().map_err(|e| format!("bad height `{h}`: {e}"))?;
        Ok(Self { width, height })
    }
}

/// Position and size of a top-level window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowGeometry {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl WindowGeometry {
    /// Geometry for the main window at launch.
    pub fn initial(settings: &UserSettings, screen: ScreenSize) -> Self {
        if settings.window_restore() {
            let (x, y) = settings.window_position();
            let (width, height) = settings.window_size();
            return Self { x, y, width, height };
        }
        let (x, y) = FRESH_POSITION;
        Self {
            x,
            y,
            width: (f64::from(screen.width) * FRESH_WIDTH_FRACTION).min(FRESH_MAX_WIDTH) as i32,
            height: (f64::from(screen.height) * FRESH_HEIGHT_FRACTION).min(FRESH_MAX_HEIGHT)
                as i32,
        }
    }
}

impl fmt::Display for WindowGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}+{}+{}", self.width, self.height, self.x, self.y)
    }
}
