//! Mount tracking for spawned futures.
//!
//! Futures spawned by a component cannot be cancelled. They hold a [`MountFlag`]
//! and drop their result when the component has gone away.

use std::cell::Cell;
use std::rc::Rc;

/// Shared flag cleared when the owning component unmounts.
#[derive(Clone, Debug)]
pub struct MountFlag(Rc<Cell<bool>>);

impl MountFlag {
    /// Flag for a freshly mounted component.
    #[must_use]
    pub fn mounted() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    /// Whether the owner is still mounted.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.0.get()
    }

    /// Mark the owner as unmounted. Every clone observes the change.
    pub fn unmount(&self) {
        self.0.set(false);
    }

    /// Run `apply` only while the owner is mounted.
    pub fn if_mounted<F: FnOnce()>(&self, apply: F) -> bool {
        let mounted = self.is_mounted();
        if mounted {
            apply();
        }
        mounted
    }
}

impl PartialEq for MountFlag {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::MountFlag;
    use std::cell::Cell;

    #[test]
    fn clones_observe_unmount() {
        let flag = MountFlag::mounted();
        let held_by_future = flag.clone();
        assert!(held_by_future.is_mounted());
        flag.unmount();
        assert!(!held_by_future.is_mounted());
        assert_eq!(flag, held_by_future);
        assert_ne!(flag, MountFlag::mounted());
    }

    #[test]
    fn if_mounted_skips_writes_after_unmount() {
        let writes = Cell::new(0);
        let flag = MountFlag::mounted();
        assert!(flag.if_mounted(|| writes.set(writes.get() + 1)));
        flag.unmount();
        assert!(!flag.if_mounted(|| writes.set(writes.get() + 1)));
        assert_eq!(writes.get(), 1);
    }
}
