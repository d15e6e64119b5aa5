use std::cell::{Cell, RefCell};
use std::num::NonZeroUsize;
use std::rc::Rc;

use log::{debug, info};
use rand::Rng;

use super::cycler::{clock_step, ColumnCycler, Shown, Transition};
use super::distributor::distribute;
use super::timers::{RepeatingTimer, StaggeredTimer, TimerDriver};
use crate::config::{CarouselConfig, ConfigError, TimingModel};

/// A column that swapped its visible item.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnChange {
    pub column: usize,
    pub transition: Transition,
}

enum Ticking<H: 'static> {
    Columns(Vec<StaggeredTimer<H>>),
    Clock(RepeatingTimer<H>),
    Idle,
}

/// A distributed pool with its columns ticking.
///
/// Each column's cycler is only ever mutated by that column's own timer (or by
/// the shared clock in clock mode). Stopping, or dropping, releases every timer.
pub struct Carousel<D: TimerDriver> {
    columns: Vec<Rc<RefCell<ColumnCycler>>>,
    ticking: Ticking<D::Handle>,
}

impl<D: TimerDriver> Carousel<D> {
    pub fn start<R, F>(
        config: &CarouselConfig,
        rng: &mut R,
        driver: &D,
        on_change: F,
    ) -> Result<Self, ConfigError>
    where
        R: Rng + ?Sized,
        F: Fn(ColumnChange) + 'static,
    {
        config.validate()?;
        let column_count = NonZeroUsize::new(config.column_count).ok_or(ConfigError::ZeroColumns)?;
        let distributed = distribute(&config.pool, column_count, rng);
        let on_change: Rc<dyn Fn(ColumnChange)> = Rc::new(on_change);

        let carousel = match config.timing {
            TimingModel::IndependentTimers => {
                let columns: Vec<_> = distributed
                    .into_iter()
                    .map(|items| Rc::new(RefCell::new(ColumnCycler::new(items))))
                    .collect();
                let timers = Self::start_column_timers(config, &columns, driver, &on_change);
                let ticking = if timers.is_empty() {
                    Ticking::Idle
                } else {
                    Ticking::Columns(timers)
                };
                Carousel { columns, ticking }
            }
            TimingModel::SharedClock { tick_ms } => {
                let ticks_per_item = u64::from(config.cycle_duration_ms / tick_ms);
                let phase_ticks = u64::from(config.stagger_ms / tick_ms);
                let columns: Vec<_> = distributed
                    .into_iter()
                    .enumerate()
                    .map(|(index, items)| {
                        let phase = index as u64 * phase_ticks;
                        let step = clock_step(0, phase, ticks_per_item);
                        Rc::new(RefCell::new(ColumnCycler::starting_at(items, step)))
                    })
                    .collect();
                let ticking = if columns.iter().all(|column| column.borrow().is_empty()) {
                    Ticking::Idle
                } else {
                    Ticking::Clock(Self::start_clock(
                        tick_ms,
                        ticks_per_item,
                        phase_ticks,
                        &columns,
                        driver,
                        &on_change,
                    ))
                };
                Carousel { columns, ticking }
            }
        };

        info!(
            "Text carousel started: {} columns, {:?}, {} ms per item",
            config.column_count, config.timing, config.cycle_duration_ms
        );
        Ok(carousel)
    }

    fn start_column_timers(
        config: &CarouselConfig,
        columns: &[Rc<RefCell<ColumnCycler>>],
        driver: &D,
        on_change: &Rc<dyn Fn(ColumnChange)>,
    ) -> Vec<StaggeredTimer<D::Handle>> {
        columns
            .iter()
            .enumerate()
            .filter(|(_, column)| !column.borrow().is_empty())
            .map(|(index, column)| {
                let delay = config.stagger_ms.saturating_mul(index as u32);
                let column = column.clone();
                let on_change = on_change.clone();
                StaggeredTimer::start(driver, delay, config.cycle_duration_ms, move || {
                    let transition = column.borrow_mut().advance();
                    if let Some(transition) = transition {
                        on_change(ColumnChange {
                            column: index,
                            transition,
                        });
                    }
                })
            })
            .collect()
    }

    fn start_clock(
        tick_ms: u32,
        ticks_per_item: u64,
        phase_ticks: u64,
        columns: &[Rc<RefCell<ColumnCycler>>],
        driver: &D,
        on_change: &Rc<dyn Fn(ColumnChange)>,
    ) -> RepeatingTimer<D::Handle> {
        let columns = columns.to_vec();
        let on_change = on_change.clone();
        let clock = Cell::new(0u64);
        RepeatingTimer::start(driver, tick_ms, move || {
            let now = clock.get() + 1;
            clock.set(now);
            for (index, column) in columns.iter().enumerate() {
                let phase = index as u64 * phase_ticks;
                let transition = column.borrow_mut().sync_to_clock(now, phase, ticks_per_item);
                if let Some(transition) = transition {
                    on_change(ColumnChange {
                        column: index,
                        transition,
                    });
                }
            }
        })
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// What every column shows right now; `None` for empty columns.
    pub fn snapshot(&self) -> Vec<Option<Shown>> {
        self.columns
            .iter()
            .map(|column| column.borrow().visible())
            .collect()
    }

    pub fn is_running(&self) -> bool {
        !matches!(self.ticking, Ticking::Idle)
    }

    pub fn stop(mut self) {
        self.release();
    }

    fn release(&mut self) {
        match std::mem::replace(&mut self.ticking, Ticking::Idle) {
            Ticking::Columns(timers) => {
                debug!("Stopping {} column timers", timers.len());
                timers.into_iter().for_each(StaggeredTimer::stop);
            }
            Ticking::Clock(clock) => {
                debug!("Stopping carousel clock");
                clock.stop();
            }
            Ticking::Idle => {}
        }
    }
}

impl<D: TimerDriver> Drop for Carousel<D> {
    fn drop(&mut self) {
        self.release();
    }
}
