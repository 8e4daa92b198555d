use super::StepCounter;
use crate::dataset::Bar;
use crossbeam_channel::Sender;

/// A position touched by a step and the bar that sits there afterwards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub index: usize,
    pub bar: Bar,
}

/// One counted step.
///
/// `step` is the counter value this step produced (1-based). A comparison or
/// single placement touches one or two positions; a swap always touches two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepEvent {
    pub step: u64,
    pub first: Placement,
    pub second: Option<Placement>,
}

impl StepEvent {
    pub fn placements(&self) -> impl Iterator<Item = &Placement> {
        std::iter::once(&self.first).chain(self.second.iter())
    }

    /// Replay this step onto a mirror of the dataset being sorted
    pub fn apply(&self, mirror: &mut [Bar]) {
        for placement in self.placements() {
            if let Some(slot) = mirror.get_mut(placement.index) {
                *slot = placement.bar;
            }
        }
    }

    pub fn touches(&self, index: usize) -> bool {
        self.placements().any(|p| p.index == index)
    }
}

/// Consumer of step events.
///
/// Called on the sorting thread, once per step, in step order. Implementations
/// must return promptly; anything slow belongs on the other end of a channel.
pub trait StepObserver {
    fn on_step(&mut self, event: &StepEvent);
}

/// Records every event (tests, headless replays)
impl StepObserver for Vec<StepEvent> {
    fn on_step(&mut self, event: &StepEvent) {
        self.push(*event);
    }
}

/// Forwards events to another thread. The channel is expected to be
/// unbounded; a receiver that has gone away is not the sorter's problem.
impl StepObserver for Sender<StepEvent> {
    fn on_step(&mut self, event: &StepEvent) {
        if self.try_send(*event).is_err() {
            log::trace!("step {} dropped: receiver gone or full", event.step);
        }
    }
}

/// Handle the algorithms report steps through.
///
/// Every `notify*` call counts exactly one step and forwards one
/// [`StepEvent`] to the observer, if there is one.
pub struct Probe<'a> {
    counter: StepCounter,
    observer: Option<&'a mut dyn StepObserver>,
}

impl<'a> Probe<'a> {
    /// Count into `counter` without forwarding events
    pub fn new(counter: StepCounter) -> Self {
        Probe {
            counter,
            observer: None,
        }
    }

    pub fn with_observer(counter: StepCounter, observer: &'a mut dyn StepObserver) -> Self {
        Probe {
            counter,
            observer: Some(observer),
        }
    }

    pub fn counter(&self) -> &StepCounter {
        &self.counter
    }

    pub fn steps(&self) -> u64 {
        self.counter.get()
    }

    /// One step touching a single position
    #[inline]
    pub fn notify(&mut self, data: &[Bar], index: usize) {
        let first = Placement {
            index,
            bar: data[index],
        };
        self.emit(first, None);
    }

    /// One step touching two positions (a comparison or a swap)
    #[inline]
    pub fn notify_pair(&mut self, data: &[Bar], a: usize, b: usize) {
        let first = Placement {
            index: a,
            bar: data[a],
        };
        let second = Placement {
            index: b,
            bar: data[b],
        };
        self.emit(first, Some(second));
    }

    fn emit(&mut self, first: Placement, second: Option<Placement>) {
        let step = self.counter.increment();
        if let Some(observer) = self.observer.as_mut() {
            observer.on_step(&StepEvent {
                step,
                first,
                second,
            });
        }
    }
}
