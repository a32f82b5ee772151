// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host environment description.
//!
//! Engine and platform quirks are not probed from globals; the host states
//! them once in an [`Environment`] value and passes it to the classifiers
//! that need it. Tests construct whatever environment a scenario calls for
//! instead of toggling process-wide flags.

use crate::listen::Registration;

/// Rendering/input engine family the host runs on.
///
/// Only distinctions that change classification behavior are enumerated;
/// everything else is `Other`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Engine {
    /// WebKit-family engines, which report keypad Enter as a distinct code.
    WebKit,
    /// Gecko-family engines.
    Gecko,
    /// Legacy Trident engines.
    Trident,
    /// Anything else.
    Other,
}

/// Platform keyboard conventions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Platform {
    /// macOS-style keyboards: Meta is the primary modifier.
    Mac,
    /// Everything else: Ctrl is the primary modifier.
    Other,
}

/// Capability descriptor for the host environment.
///
/// Bundles the three environment facts normalization consults: which engine
/// family delivers events, which platform's keyboard conventions apply, and
/// which listener [`Registration`] mechanism the host exposes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Environment {
    /// Engine family.
    pub engine: Engine,
    /// Platform keyboard conventions.
    pub platform: Platform,
    /// Listener registration mechanism.
    pub registration: Registration,
}

impl Environment {
    /// Describe an environment explicitly.
    pub const fn new(engine: Engine, platform: Platform, registration: Registration) -> Self {
        Self {
            engine,
            platform,
            registration,
        }
    }

    /// Whether the engine delivers keypad Enter as the alternate key code
    /// ([`crate::types::keys::MAC_ENTER`]) that must fold into Enter.
    pub const fn has_alternate_enter(&self) -> bool {
        matches!(self.engine, Engine::WebKit)
    }

    /// Whether Meta (rather than Ctrl) is the primary click modifier.
    pub const fn meta_is_primary(&self) -> bool {
        matches!(self.platform, Platform::Mac)
    }
}

impl Default for Environment {
    /// A plain W3C-mechanism environment with no engine quirks.
    fn default() -> Self {
        Self::new(Engine::Other, Platform::Other, Registration::W3c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alternate_enter_is_webkit_only() {
        for engine in [Engine::Gecko, Engine::Trident, Engine::Other] {
            let env = Environment::new(engine, Platform::Other, Registration::W3c);
            assert!(!env.has_alternate_enter());
        }
        let env = Environment::new(Engine::WebKit, Platform::Other, Registration::W3c);
        assert!(env.has_alternate_enter());
    }

    #[test]
    fn primary_modifier_follows_platform() {
        let mac = Environment::new(Engine::WebKit, Platform::Mac, Registration::W3c);
        assert!(mac.meta_is_primary());
        assert!(!Environment::default().meta_is_primary());
    }
}
