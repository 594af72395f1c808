/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Reference-counted marker classes on `<body>`.
//!
//! An open dialog tags the page with `modal-open` so surrounding chrome can
//! blur itself. Several dialogs may be open at once, so the class is counted
//! per holder: it is added when the first [`MarkerGuard`] is acquired and
//! removed only when the last one is dropped.

use std::cell::RefCell;
use std::collections::HashMap;

pub const MODAL_OPEN_CLASS: &str = "modal-open";

/// Something that carries a class list.
pub trait ClassTarget {
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
}

/// The document body. Missing `window`/`document`/`body` is a no-op.
#[derive(Debug, Default, Clone, Copy)]
pub struct BodyTarget;

impl BodyTarget {
    fn body() -> Option<web_sys::HtmlElement> {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
    }
}

impl ClassTarget for BodyTarget {
    fn add_class(&self, class: &str) {
        if let Some(body) = Self::body() {
            if let Err(e) = body.class_list().add_1(class) {
                log::warn!("Failed to add body class {class}: {e:?}");
            }
        }
    }

    fn remove_class(&self, class: &str) {
        if let Some(body) = Self::body() {
            if let Err(e) = body.class_list().remove_1(class) {
                log::warn!("Failed to remove body class {class}: {e:?}");
            }
        }
    }
}

/// Holder counts per class, applied to a [`ClassTarget`] on the 0→1 and
/// 1→0 transitions.
#[derive(Debug)]
pub struct MarkerRegistry<T: ClassTarget> {
    target: T,
    holders: HashMap<String, usize>,
}

impl<T: ClassTarget> MarkerRegistry<T> {
    pub fn new(target: T) -> Self {
        Self {
            target,
            holders: HashMap::new(),
        }
    }

    pub fn acquire(&mut self, class: &str) {
        let count = self.holders.entry(class.to_string()).or_insert(0);
        *count += 1;
        if *count == 1 {
            log::debug!("Adding body marker {class}");
            self.target.add_class(class);
        }
    }

    pub fn release(&mut self, class: &str) {
        match self.holders.get_mut(class) {
            Some(count) if *count > 1 => *count -= 1,
            Some(_) => {
                self.holders.remove(class);
                log::debug!("Removing body marker {class}");
                self.target.remove_class(class);
            }
            None => log::warn!("Released body marker {class} with no holders"),
        }
    }

    pub fn holders(&self, class: &str) -> usize {
        self.holders.get(class).copied().unwrap_or(0)
    }
}

thread_local! {
    static BODY_MARKERS: RefCell<MarkerRegistry<BodyTarget>> =
        RefCell::new(MarkerRegistry::new(BodyTarget));
}

/// Scoped hold on a body marker class. Dropping the guard releases it.
#[derive(Debug)]
#[must_use = "the marker is released as soon as the guard is dropped"]
pub struct MarkerGuard {
    class: &'static str,
}

impl MarkerGuard {
    pub fn acquire(class: &'static str) -> Self {
        BODY_MARKERS.with(|markers| markers.borrow_mut().acquire(class));
        Self { class }
    }
}

impl Drop for MarkerGuard {
    fn drop(&mut self) {
        // The registry may already be gone during thread teardown.
        let _ = BODY_MARKERS.try_with(|markers| markers.borrow_mut().release(self.class));
    }
}

/// Number of live guards holding `class`.
pub fn marker_holders(class: &str) -> usize {
    BODY_MARKERS.with(|markers| markers.borrow().holders(class))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[derive(Default, Clone)]
    struct Recording {
        calls: Rc<RefCell<Vec<String>>>,
    }

    impl ClassTarget for Recording {
        fn add_class(&self, class: &str) {
            self.calls.borrow_mut().push(format!("+{class}"));
        }

        fn remove_class(&self, class: &str) {
            self.calls.borrow_mut().push(format!("-{class}"));
        }
    }

    #[test]
    fn single_holder_adds_then_removes() {
        let target = Recording::default();
        let mut registry = MarkerRegistry::new(target.clone());

        registry.acquire(MODAL_OPEN_CLASS);
        assert_eq!(registry.holders(MODAL_OPEN_CLASS), 1);
        registry.release(MODAL_OPEN_CLASS);

        assert_eq!(registry.holders(MODAL_OPEN_CLASS), 0);
        assert_eq!(*target.calls.borrow(), vec!["+modal-open", "-modal-open"]);
    }

    #[test]
    fn overlapping_holders_release_once_last_is_gone() {
        let target = Recording::default();
        let mut registry = MarkerRegistry::new(target.clone());

        registry.acquire(MODAL_OPEN_CLASS);
        registry.acquire(MODAL_OPEN_CLASS);
        registry.release(MODAL_OPEN_CLASS);
        assert_eq!(*target.calls.borrow(), vec!["+modal-open"]);
        assert_eq!(registry.holders(MODAL_OPEN_CLASS), 1);

        registry.release(MODAL_OPEN_CLASS);
        assert_eq!(*target.calls.borrow(), vec!["+modal-open", "-modal-open"]);
    }

    #[test]
    fn unbalanced_release_is_ignored() {
        let target = Recording::default();
        let mut registry = MarkerRegistry::new(target.clone());

        registry.release(MODAL_OPEN_CLASS);
        assert!(target.calls.borrow().is_empty());
        assert_eq!(registry.holders(MODAL_OPEN_CLASS), 0);
    }

    #[test]
    fn classes_are_counted_independently() {
        let target = Recording::default();
        let mut registry = MarkerRegistry::new(target.clone());

        registry.acquire("a");
        registry.acquire("b");
        registry.release("a");
        assert_eq!(registry.holders("b"), 1);
        assert_eq!(*target.calls.borrow(), vec!["+a", "+b", "-a"]);
    }
}
