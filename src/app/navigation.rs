// SPDX-License-Identifier: MPL-2.0
//! Navigation history.
//!
//! Every navigation replaces the top entry instead of pushing a new one, so
//! the history never grows past the mounted screen.

use super::Screen;

#[derive(Debug, Clone)]
pub struct Navigator {
    /// Oldest first; the last entry is mounted.
    history: Vec<Screen>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(Screen::default())
    }
}

impl Navigator {
    #[must_use]
    pub fn new(start: Screen) -> Self {
        Self {
            history: vec![start],
        }
    }

    #[must_use]
    pub fn current(&self) -> Screen {
        self.history.last().copied().unwrap_or_default()
    }

    /// Mounts `target` in place of the current screen.
    ///
    /// Returns `false` when `target` is already mounted.
    pub fn replace(&mut self, target: Screen) -> bool {
        let current = self.current();
        if current == target {
            return false;
        }
        tracing::info!(from = current.name(), to = target.name(), "navigate");
        match self.history.last_mut() {
            Some(top) => *top = target,
            None => self.history.push(target),
        }
        true
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn can_go_back(&self) -> bool {
        self.history.len() > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_given_screen() {
        let navigator = Navigator::new(Screen::SignIn);
        assert_eq!(navigator.current(), Screen::SignIn);
        assert_eq!(navigator.depth(), 1);
        assert!(!navigator.can_go_back());
    }

    #[test]
    fn replace_swaps_top_entry() {
        let mut navigator = Navigator::new(Screen::Home);

        assert!(navigator.replace(Screen::SignIn));
        assert_eq!(navigator.current(), Screen::SignIn);
        assert_eq!(navigator.depth(), 1);

        assert!(navigator.replace(Screen::Home));
        assert_eq!(navigator.current(), Screen::Home);
        assert_eq!(navigator.depth(), 1);
        assert!(!navigator.can_go_back());
    }

    #[test]
    fn replacing_with_mounted_screen_is_noop() {
        let mut navigator = Navigator::new(Screen::SignIn);
        assert!(!navigator.replace(Screen::SignIn));
        assert_eq!(navigator.current(), Screen::SignIn);
        assert_eq!(navigator.depth(), 1);
    }
}
