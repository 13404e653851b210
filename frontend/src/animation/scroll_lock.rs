//! Reference-counted page scroll lock. The intro and every open modal hold
//! a guard; the page only scrolls again once the last guard is dropped.

use std::cell::Cell;
use std::rc::Rc;

pub trait LockTarget {
    fn set_locked(&self, locked: bool);
}

struct LockInner<T: LockTarget> {
    holders: Cell<usize>,
    target: T,
}

pub struct ScrollLock<T: LockTarget> {
    inner: Rc<LockInner<T>>,
}

impl<T: LockTarget> Clone for ScrollLock<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: LockTarget> ScrollLock<T> {
    pub fn new(target: T) -> Self {
        Self {
            inner: Rc::new(LockInner {
                holders: Cell::new(0),
                target,
            }),
        }
    }

    #[cfg(test)]
    pub fn holders(&self) -> usize {
        self.inner.holders.get()
    }

    #[cfg(test)]
    pub fn is_locked(&self) -> bool {
        self.holders() > 0
    }

    pub fn acquire(&self) -> ScrollLockGuard<T> {
        let holders = self.inner.holders.get();
        self.inner.holders.set(holders + 1);
        if holders == 0 {
            self.inner.target.set_locked(true);
        }
        ScrollLockGuard {
            inner: Rc::clone(&self.inner),
        }
    }
}

#[must_use = "the lock is released as soon as the guard is dropped"]
pub struct ScrollLockGuard<T: LockTarget> {
    inner: Rc<LockInner<T>>,
}

impl<T: LockTarget> Drop for ScrollLockGuard<T> {
    fn drop(&mut self) {
        let holders = self.inner.holders.get().saturating_sub(1);
        self.inner.holders.set(holders);
        if holders == 0 {
            self.inner.target.set_locked(false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Body {
        writes: RefCell<Vec<bool>>,
    }

    impl LockTarget for Rc<Body> {
        fn set_locked(&self, locked: bool) {
            self.writes.borrow_mut().push(locked);
        }
    }

    #[test]
    fn single_owner() {
        let body = Rc::new(Body::default());
        let lock = ScrollLock::new(Rc::clone(&body));

        let guard = lock.acquire();
        assert!(lock.is_locked());
        drop(guard);
        assert!(!lock.is_locked());
        assert_eq!(*body.writes.borrow(), vec![true, false]);
    }

    #[test]
    fn modal_closing_during_intro_keeps_lock() {
        let body = Rc::new(Body::default());
        let lock = ScrollLock::new(Rc::clone(&body));

        let intro = lock.acquire();
        let modal = lock.acquire();
        assert_eq!(lock.holders(), 2);

        drop(modal);
        assert!(lock.is_locked());
        assert_eq!(*body.writes.borrow(), vec![true]);

        drop(intro);
        assert!(!lock.is_locked());
        assert_eq!(*body.writes.borrow(), vec![true, false]);
    }

    #[test]
    fn relock_after_release() {
        let body = Rc::new(Body::default());
        let lock = ScrollLock::new(Rc::clone(&body));
        drop(lock.acquire());
        let _again = lock.clone().acquire();
        assert_eq!(*body.writes.borrow(), vec![true, false, true]);
    }
}
