//! Focus resolution.
//!
//! [`FocusResolver`] asks the host what is in front of the agent once per
//! tick and keeps track of the focused target, firing `on_defocus` /
//! `on_focus` hooks when it changes.

use crate::target::{TargetHandle, same_focus, same_target};

/// Outcome of one [`FocusResolver::resolve`] call.
#[derive(Clone, Default)]
pub struct FocusChange {
    /// Target that lost focus this tick. `None` when focus did not change,
    /// even if a target is still focused; read `current` for that.
    pub previous: Option<TargetHandle>,
    /// Target in focus after this tick.
    pub current: Option<TargetHandle>,
    /// Whether the focused target changed identity.
    pub changed: bool,
}

impl FocusChange {
    fn unchanged(current: Option<TargetHandle>) -> Self {
        Self {
            previous: None,
            current,
            changed: false,
        }
    }
}

impl std::fmt::Debug for FocusChange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = |t: &Option<TargetHandle>| t.as_ref().map(|t| t.prompt_label());
        f.debug_struct("FocusChange")
            .field("previous", &label(&self.previous))
            .field("current", &label(&self.current))
            .field("changed", &self.changed)
            .finish()
    }
}

/// Tracks the currently focused target.
#[derive(Default)]
pub struct FocusResolver {
    current: Option<TargetHandle>,
}

impl FocusResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently focused target, if any.
    #[inline]
    pub fn current(&self) -> Option<&TargetHandle> {
        self.current.as_ref()
    }

    /// Calls `hit_test` once and updates focus.
    ///
    /// On change, `on_defocus` fires on the old target before `on_focus`
    /// fires on the new one. Re-resolving to the same target is a no-op.
    pub fn resolve<F>(&mut self, hit_test: F) -> FocusChange
    where
        F: FnOnce() -> Option<TargetHandle>,
    {
        let found = hit_test();

        if same_focus(found.as_ref(), self.current.as_ref()) {
            return FocusChange::unchanged(self.current.clone());
        }

        let previous = self.current.take();
        if let Some(old) = &previous {
            old.on_defocus();
        }
        if let Some(new) = &found {
            new.on_focus();
        }

        tracing::debug!(
            previous = ?previous.as_ref().map(|t| t.prompt_label()),
            current = ?found.as_ref().map(|t| t.prompt_label()),
            "focus changed"
        );

        self.current = found.clone();
        FocusChange {
            previous,
            current: found,
            changed: true,
        }
    }

    /// Drops focus, firing `on_defocus` on the current target.
    ///
    /// Returns the target that was released.
    pub fn clear(&mut self) -> Option<TargetHandle> {
        let released = self.current.take();
        if let Some(target) = &released {
            target.on_defocus();
            tracing::debug!(label = %target.prompt_label(), "focus released");
        }
        released
    }

    /// Returns `true` if `target` is the focused target.
    pub fn is_focused(&self, target: &TargetHandle) -> bool {
        self.current
            .as_ref()
            .is_some_and(|current| same_target(current, target))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::target::Targetable;

    struct Recorder {
        name: &'static str,
        log: Rc<RefCell<Vec<String>>>,
    }

    impl Targetable for Recorder {
        fn prompt_label(&self) -> String {
            self.name.into()
        }

        fn can_interact(&self) -> bool {
            true
        }

        fn on_focus(&self) {
            self.log.borrow_mut().push(format!("focus {}", self.name));
        }

        fn on_defocus(&self) {
            self.log.borrow_mut().push(format!("defocus {}", self.name));
        }
    }

    fn recorder(name: &'static str, log: &Rc<RefCell<Vec<String>>>) -> TargetHandle {
        Rc::new(Recorder {
            name,
            log: Rc::clone(log),
        })
    }

    #[test]
    fn focus_then_switch_orders_hooks() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let a = recorder("a", &log);
        let b = recorder("b", &log);
        let mut resolver = FocusResolver::new();

        let change = resolver.resolve(|| Some(Rc::clone(&a)));
        assert!(change.changed);
        assert!(change.previous.is_none());

        let change = resolver.resolve(|| Some(Rc::clone(&b)));
        assert!(change.changed);
        assert!(resolver.is_focused(&b));

        assert_eq!(*log.borrow(), vec!["focus a", "defocus a", "focus b"]);
    }

    #[test]
    fn same_target_is_idempotent() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let a = recorder("a", &log);
        let mut resolver = FocusResolver::new();

        resolver.resolve(|| Some(Rc::clone(&a)));
        let change = resolver.resolve(|| Some(Rc::clone(&a)));

        assert!(!change.changed);
        assert!(change.previous.is_none());
        assert!(change.current.as_ref().is_some_and(|t| same_target(t, &a)));
        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn losing_hit_defocuses() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let a = recorder("a", &log);
        let mut resolver = FocusResolver::new();

        resolver.resolve(|| Some(Rc::clone(&a)));
        let change = resolver.resolve(|| None);

        assert!(change.changed);
        assert!(change.current.is_none());
        assert!(resolver.current().is_none());
        assert_eq!(*log.borrow(), vec!["focus a", "defocus a"]);

        let change = resolver.resolve(|| None);
        assert!(!change.changed);
    }

    #[test]
    fn clear_releases_target() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let a = recorder("a", &log);
        let mut resolver = FocusResolver::new();

        resolver.resolve(|| Some(Rc::clone(&a)));
        assert!(resolver.clear().is_some());
        assert!(resolver.clear().is_none());
        assert_eq!(*log.borrow(), vec!["focus a", "defocus a"]);
    }
}
