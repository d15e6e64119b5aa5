use std::fmt;

use super::TextItem;

/// Identifies one appearance of an item in a column.
///
/// `step` counts every advance since the column started, so the same item
/// coming round again gets a fresh key and replays its enter animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransitionKey {
    pub item_id: u32,
    pub step: u64,
}

impl fmt::Display for TransitionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.item_id, self.step)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Shown {
    pub item: TextItem,
    pub key: TransitionKey,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TransitionEvent {
    Exit(Shown),
    Enter(Shown),
}

/// One change of the visible item in a column.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub exited: Shown,
    pub entered: Shown,
}

impl Transition {
    /// Events in the order the renderer must apply them: old item out, then new item in.
    pub fn events(&self) -> [TransitionEvent; 2] {
        [
            TransitionEvent::Exit(self.exited.clone()),
            TransitionEvent::Enter(self.entered.clone()),
        ]
    }
}

/// Position of a single column within its fixed item sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnCycler {
    items: Vec<TextItem>,
    step: u64,
}

impl ColumnCycler {
    pub fn new(items: Vec<TextItem>) -> Self {
        Self::starting_at(items, 0)
    }

    pub fn starting_at(items: Vec<TextItem>, step: u64) -> Self {
        Self { items, step }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn step(&self) -> u64 {
        self.step
    }

    /// `None` for an empty column.
    pub fn current_index(&self) -> Option<usize> {
        if self.items.is_empty() {
            return None;
        }
        Some((self.step % self.items.len() as u64) as usize)
    }

    pub fn visible(&self) -> Option<Shown> {
        let index = self.current_index()?;
        let item = self.items[index].clone();
        Some(Shown {
            key: TransitionKey {
                item_id: item.id,
                step: self.step,
            },
            item,
        })
    }

    /// Moves to the next item, wrapping at the end of the column.
    pub fn advance(&mut self) -> Option<Transition> {
        let exited = self.visible()?;
        self.step += 1;
        let entered = self.visible()?;
        Some(Transition { exited, entered })
    }

    /// Re-derives the position from a shared clock.
    ///
    /// The column shows `((clock + phase) mod (len * ticks_per_item)) / ticks_per_item`,
    /// which is the same as `step mod len` with `step = (clock + phase) / ticks_per_item`.
    /// Returns a transition only when that step differs from the current one.
    pub fn sync_to_clock(&mut self, clock: u64, phase: u64, ticks_per_item: u64) -> Option<Transition> {
        let step = clock_step(clock, phase, ticks_per_item);
        if step == self.step {
            return None;
        }
        let exited = self.visible()?;
        self.step = step;
        let entered = self.visible()?;
        Some(Transition { exited, entered })
    }
}

pub fn clock_step(clock: u64, phase: u64, ticks_per_item: u64) -> u64 {
    (clock + phase) / ticks_per_item.max(1)
}
