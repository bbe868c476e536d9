// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

/// Screens the shell can mount. Exactly one is mounted at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    SignIn,
}

impl Screen {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Screen::Home => "home",
            Screen::SignIn => "sign-in",
        }
    }
}
