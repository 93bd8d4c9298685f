//! Screen routing and the auth gate.
//!
//! The gate is a pair of pure functions so the redirect rules can be
//! tested without an app instance: every screen except login/register
//! requires an identity, and a signed-in user asking for login/register
//! lands on the dashboard instead.

use super::types::Screen;

/// Whether a screen requires a signed-in identity.
pub fn is_protected(screen: Screen) -> bool {
    !matches!(screen, Screen::Login | Screen::Register)
}

/// Resolve a navigation request against the auth state.
///
/// Protected screens fall back to login when signed out; the public
/// screens fall forward to the dashboard when signed in.
pub fn resolve_screen(requested: Screen, signed_in: bool) -> Screen {
    match (is_protected(requested), signed_in) {
        (true, false) => Screen::Login,
        (false, true) => Screen::Dashboard,
        _ => requested,
    }
}
