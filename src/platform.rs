//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Modifier for the copy-invite shortcut
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: none, since Ctrl+C quits
#[cfg(target_os = "macos")]
pub const COPY_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const COPY_MODIFIER: KeyModifiers = KeyModifiers::NONE;

/// Copy shortcut display
#[cfg(target_os = "macos")]
pub const COPY_SHORTCUT: &str = "Cmd+C";

#[cfg(not(target_os = "macos"))]
pub const COPY_SHORTCUT: &str = "c";

/// Submit shortcut display for form help text
/// Ctrl+S works on all platforms
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";
