//! Observer registration and notification behaviour.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Weak};
use std::thread;

use skene_core::{observer_fn, CounterObserver, CounterService, CounterState, Result, SkeneError};

#[derive(Default)]
struct Recorder {
    seen: Mutex<Vec<i64>>,
}

impl Recorder {
    fn seen(&self) -> Vec<i64> {
        self.seen.lock().unwrap().clone()
    }
}

impl CounterObserver for Recorder {
    fn on_counter_changed(&self, state: CounterState) -> Result<()> {
        self.seen.lock().unwrap().push(state.value);
        Ok(())
    }
}

#[test]
fn increment_notifies_once_with_new_value() {
    let svc = CounterService::new();
    svc.set_value(9);

    let rec = Arc::new(Recorder::default());
    svc.add_observer(rec.clone());
    svc.increment();

    assert_eq!(rec.seen(), vec![10]);
}

#[test]
fn every_mutator_notifies_and_readers_do_not() {
    let svc = CounterService::new();
    let rec = Arc::new(Recorder::default());
    svc.add_observer(rec.clone());

    svc.increment();
    svc.decrement();
    svc.decrement();
    svc.set_value(42);
    svc.reset();
    let _ = svc.get_value();
    let _ = svc.get_state();

    assert_eq!(rec.seen(), vec![1, 0, -1, 42, 0]);
}

#[test]
fn removed_observer_is_not_called() {
    let svc = CounterService::new();
    let rec = Arc::new(Recorder::default());
    let id = svc.add_observer(rec.clone());

    svc.increment();
    assert!(svc.remove_observer(id));
    svc.increment();

    assert_eq!(rec.seen(), vec![1]);
    assert_eq!(svc.observer_count(), 0);
}

#[test]
fn removing_unknown_token_is_a_noop() {
    let svc = CounterService::new();
    let rec = Arc::new(Recorder::default());
    let id = svc.add_observer(rec.clone());
    assert!(svc.remove_observer(id));
    assert!(!svc.remove_observer(id));
    assert_eq!(svc.observer_count(), 0);
}

#[test]
fn duplicate_registration_notifies_twice_with_identical_state() {
    let svc = CounterService::new();
    let rec = Arc::new(Recorder::default());
    let a = svc.add_observer(rec.clone());
    let b = svc.add_observer(rec.clone());
    assert_ne!(a, b);

    svc.increment();
    assert_eq!(rec.seen(), vec![1, 1]);
}

#[test]
fn instance_removal_drops_first_registration_only() {
    let svc = CounterService::new();
    let rec = Arc::new(Recorder::default());
    let handle: Arc<dyn CounterObserver> = rec.clone();
    svc.add_observer(Arc::clone(&handle));
    svc.add_observer(Arc::clone(&handle));

    assert!(svc.remove_observer_instance(&handle));
    svc.increment();
    assert_eq!(rec.seen(), vec![1]);

    assert!(svc.remove_observer_instance(&handle));
    assert!(!svc.remove_observer_instance(&handle));
    svc.increment();
    assert_eq!(rec.seen(), vec![1]);
}

#[test]
fn instance_removal_ignores_other_observers() {
    let svc = CounterService::new();
    let kept = Arc::new(Recorder::default());
    let stranger: Arc<dyn CounterObserver> = Arc::new(Recorder::default());
    svc.add_observer(kept.clone());

    assert!(!svc.remove_observer_instance(&stranger));
    svc.increment();
    assert_eq!(kept.seen(), vec![1]);
}

#[test]
fn observers_run_in_registration_order() {
    let svc = CounterService::new();
    let log = Arc::new(Mutex::new(Vec::new()));
    for tag in ["a", "b", "c"] {
        let log = Arc::clone(&log);
        svc.add_observer(observer_fn(move |_| {
            log.lock().unwrap().push(tag);
            Ok(())
        }));
    }

    svc.increment();
    assert_eq!(*log.lock().unwrap(), vec!["a", "b", "c"]);
}

#[test]
fn observer_runs_on_the_mutating_thread() {
    let svc = Arc::new(CounterService::new());
    let seen_on = Arc::new(Mutex::new(None));
    {
        let seen_on = Arc::clone(&seen_on);
        svc.add_observer(observer_fn(move |_| {
            *seen_on.lock().unwrap() = Some(thread::current().id());
            Ok(())
        }));
    }

    let worker = {
        let svc = Arc::clone(&svc);
        thread::spawn(move || {
            svc.increment();
            thread::current().id()
        })
    };
    let worker_id = worker.join().unwrap();
    assert_eq!(*seen_on.lock().unwrap(), Some(worker_id));
}

#[test]
fn failing_observer_does_not_block_the_rest() {
    let svc = CounterService::new();
    svc.add_observer(observer_fn(|_| Err(SkeneError::Observer("label gone".into()))));
    let rec = Arc::new(Recorder::default());
    svc.add_observer(rec.clone());

    svc.increment();
    svc.increment();

    assert_eq!(rec.seen(), vec![1, 2]);
    assert_eq!(svc.get_value(), 2);
}

/// Re-enters the service from inside the callback.
struct Clamp {
    svc: Weak<CounterService>,
    limit: i64,
    seen: Mutex<Vec<i64>>,
}

impl CounterObserver for Clamp {
    fn on_counter_changed(&self, state: CounterState) -> Result<()> {
        self.seen.lock().unwrap().push(state.value);
        if state.value > self.limit {
            if let Some(svc) = self.svc.upgrade() {
                svc.set_value(self.limit);
            }
        }
        Ok(())
    }
}

#[test]
fn reentrant_observer_does_not_deadlock() {
    let svc = Arc::new(CounterService::new());
    let clamp = Arc::new(Clamp {
        svc: Arc::downgrade(&svc),
        limit: 2,
        seen: Mutex::new(Vec::new()),
    });
    svc.add_observer(clamp.clone());

    for _ in 0..3 {
        svc.increment();
    }

    assert_eq!(svc.get_value(), 2);
    assert_eq!(*clamp.seen.lock().unwrap(), vec![1, 2, 3, 2]);
}

#[test]
fn observer_may_register_another_observer_during_notification() {
    let svc = Arc::new(CounterService::new());
    let late = Arc::new(Recorder::default());
    let registered = Arc::new(AtomicUsize::new(0));
    {
        let weak = Arc::downgrade(&svc);
        let late = Arc::clone(&late);
        let registered = Arc::clone(&registered);
        svc.add_observer(observer_fn(move |_| {
            if registered.fetch_add(1, Ordering::SeqCst) == 0 {
                if let Some(svc) = weak.upgrade() {
                    svc.add_observer(late.clone());
                }
            }
            Ok(())
        }));
    }

    // The late observer was not in the list copied for the first fan-out.
    svc.increment();
    assert!(late.seen().is_empty());

    svc.increment();
    assert_eq!(late.seen(), vec![2]);
}

#[test]
fn concurrent_notifications_carry_their_own_state() {
    const THREADS: usize = 4;
    const PER_THREAD: usize = 500;

    let svc = Arc::new(CounterService::new());
    let rec = Arc::new(Recorder::default());
    svc.add_observer(rec.clone());

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let svc = Arc::clone(&svc);
            thread::spawn(move || {
                for _ in 0..PER_THREAD {
                    svc.increment();
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    let mut seen = rec.seen();
    seen.sort_unstable();
    let expected: Vec<i64> = (1..=(THREADS * PER_THREAD) as i64).collect();
    assert_eq!(seen, expected);
}
