//! Element types that record how a container treats them.

use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Default)]
struct Counts {
    created: Cell<usize>,
    cloned: Cell<usize>,
    dropped: Cell<usize>,
}

/// Issues [`Tracked`] values and observes their lifecycle.
///
/// Every value created through [`Tracker::item`], and every clone of such a
/// value, reports to the same counters. Default-constructed `Tracked` values
/// are not attached to any tracker, so filler slots of a container do not
/// disturb the counts.
#[derive(Clone, Debug, Default)]
pub struct Tracker {
    counts: Rc<Counts>,
}

impl Tracker {
    pub fn new() -> Tracker {
        Tracker::default()
    }

    /// Creates a tracked value.
    pub fn item(&self, value: i64) -> Tracked {
        self.counts.created.set(self.counts.created.get() + 1);
        Tracked {
            value,
            counts: Some(self.counts.clone()),
        }
    }

    /// Number of values created through [`Tracker::item`].
    pub fn created(&self) -> usize {
        self.counts.created.get()
    }

    /// Number of clones made of tracked values.
    pub fn cloned(&self) -> usize {
        self.counts.cloned.get()
    }

    /// Number of tracked values (originals and clones) dropped so far.
    pub fn dropped(&self) -> usize {
        self.counts.dropped.get()
    }

    /// Number of tracked values currently alive.
    pub fn alive(&self) -> usize {
        self.created() + self.cloned() - self.dropped()
    }
}

/// A value whose clones and drops are counted by its [`Tracker`].
#[derive(Debug, Default)]
pub struct Tracked {
    pub value: i64,
    counts: Option<Rc<Counts>>,
}

impl Tracked {
    /// Returns `true` if this value reports to a tracker.
    pub fn is_tracked(&self) -> bool {
        self.counts.is_some()
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        if let Some(counts) = &self.counts {
            counts.cloned.set(counts.cloned.get() + 1);
        }
        Tracked {
            value: self.value,
            counts: self.counts.clone(),
        }
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        if let Some(counts) = &self.counts {
            counts.dropped.set(counts.dropped.get() + 1);
        }
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Tracked {}
