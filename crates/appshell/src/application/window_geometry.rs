//! Main-window placement use cases.
//!
//! [`initial_geometry`] is called once before the main window is shown;
//! [`remember_geometry`] when it closes.  The placement rule itself lives in
//! [`WindowGeometry::initial`].

use appshell_core::{ScreenSize, WindowGeometry};
use tracing::debug;

use super::SettingsStore;

/// Geometry for the main window at launch on a screen of `screen` size.
pub fn initial_geometry<S: SettingsStore>(store: &S, screen: ScreenSize) -> WindowGeometry {
    let geometry = WindowGeometry::initial(store.settings(), screen);
    debug!("initial window geometry {geometry}");
    geometry
}

/// Records the window's final geometry and saves.
///
/// # Errors
///
/// Propagates the store's save error.
pub fn remember_geometry<S: SettingsStore>(
    store: &mut S,
    geometry: WindowGeometry,
) -> Result<(), S::Error> {
    let settings = store.settings_mut();
    settings.set_window_position(geometry.x, geometry.y);
    settings.set_window_size(geometry.width, geometry.height);
    store.save()
}
