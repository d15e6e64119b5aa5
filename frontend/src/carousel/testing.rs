//! Deterministic timer driver for tests.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

use super::timers::TimerDriver;

enum Task {
    Once(Box<dyn FnOnce()>),
    Repeat(Box<dyn FnMut()>),
}

struct Entry {
    due: u64,
    period: u64,
    task: Option<Task>,
}

#[derive(Default)]
struct Inner {
    now: u64,
    next_id: u64,
    entries: BTreeMap<u64, Entry>,
}

/// Fires callbacks in order of due time; ties go to whichever was scheduled first.
#[derive(Clone, Default)]
pub(crate) struct VirtualTimers {
    inner: Rc<RefCell<Inner>>,
}

pub(crate) struct VirtualHandle {
    id: u64,
    inner: Weak<RefCell<Inner>>,
}

impl Drop for VirtualHandle {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.upgrade() {
            // The removed closure may own other handles, so drop it after the borrow ends.
            let removed = inner.borrow_mut().entries.remove(&self.id);
            drop(removed);
        }
    }
}

impl VirtualTimers {
    pub(crate) fn now(&self) -> u64 {
        self.inner.borrow().now
    }

    pub(crate) fn pending(&self) -> usize {
        self.inner
            .borrow()
            .entries
            .values()
            .filter(|entry| entry.task.is_some())
            .count()
    }

    pub(crate) fn advance(&self, millis: u64) {
        let target = self.now() + millis;
        loop {
            let next = {
                let inner = self.inner.borrow();
                inner
                    .entries
                    .iter()
                    .filter(|(_, entry)| entry.task.is_some() && entry.due <= target)
                    .min_by_key(|(id, entry)| (entry.due, **id))
                    .map(|(id, entry)| (*id, entry.due))
            };
            let Some((id, due)) = next else { break };

            let task = {
                let mut inner = self.inner.borrow_mut();
                inner.now = due;
                inner.entries.get_mut(&id).and_then(|entry| entry.task.take())
            };

            match task {
                Some(Task::Once(callback)) => {
                    callback();
                    let removed = self.inner.borrow_mut().entries.remove(&id);
                    drop(removed);
                }
                Some(Task::Repeat(mut callback)) => {
                    callback();
                    let cancelled = {
                        let mut inner = self.inner.borrow_mut();
                        match inner.entries.get_mut(&id) {
                            Some(entry) => {
                                entry.due += entry.period;
                                entry.task = Some(Task::Repeat(callback));
                                None
                            }
                            None => Some(callback),
                        }
                    };
                    drop(cancelled);
                }
                None => {}
            }
        }
        self.inner.borrow_mut().now = target;
    }

    fn schedule(&self, millis: u32, period: u64, task: Task) -> VirtualHandle {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        let due = inner.now + u64::from(millis);
        inner.entries.insert(
            id,
            Entry {
                due,
                period,
                task: Some(task),
            },
        );
        VirtualHandle {
            id,
            inner: Rc::downgrade(&self.inner),
        }
    }
}

impl TimerDriver for VirtualTimers {
    type Handle = VirtualHandle;

    fn timeout(&self, millis: u32, callback: Box<dyn FnOnce()>) -> VirtualHandle {
        self.schedule(millis, 0, Task::Once(callback))
    }

    fn interval(&self, millis: u32, callback: Box<dyn FnMut()>) -> VirtualHandle {
        self.schedule(millis, u64::from(millis.max(1)), Task::Repeat(callback))
    }
}
