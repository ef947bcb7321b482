//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Modifier for the "add previous employer" shortcut
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const ADD_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const ADD_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Add shortcut display for the status bar
#[cfg(target_os = "macos")]
pub const ADD_SHORTCUT: &str = "Cmd+N";

#[cfg(not(target_os = "macos"))]
pub const ADD_SHORTCUT: &str = "^N";
