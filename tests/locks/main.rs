//! Lock family tests — the shared contract, checked against every variant.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;
use std::time::{Duration, Instant};

use sync_or::lock::{
    BlockingLock, Lock, LockError, LockKind, TimedLock, TokenLock, TryLockTimeout,
};

const KINDS: [LockKind; 3] = [LockKind::Blocking, LockKind::Token, LockKind::Timed];

#[test]
fn lock_unlock_pairs_leave_lock_unlocked() {
    for kind in KINDS {
        let lock = kind.new_lock();
        for _ in 0..10 {
            lock.lock();
            assert!(lock.is_locked(), "{kind}");
            lock.unlock().unwrap();
        }
        assert!(!lock.is_locked(), "{kind}");
    }
}

#[test]
fn unlock_without_acquisition_is_double_unlock() {
    for kind in KINDS {
        let lock = kind.new_lock();
        assert_eq!(lock.unlock(), Err(LockError::DoubleUnlock(kind)));

        assert!(lock.try_lock());
        lock.unlock().unwrap();
        assert_eq!(lock.unlock(), Err(LockError::DoubleUnlock(kind)));
        assert!(!lock.is_locked(), "{kind}");
    }
}

#[test]
fn double_unlock_error_names_the_variant() {
    let err = TokenLock::new().unlock().unwrap_err();
    assert_eq!(err.to_string(), "unlock of unlocked token lock");
}

#[test]
fn try_lock_on_locked_lock_changes_nothing() {
    for kind in KINDS {
        let lock = kind.new_lock();
        assert!(lock.try_lock(), "{kind}");
        assert!(lock.is_locked());
        assert!(!lock.try_lock(), "{kind}");
        assert!(lock.is_locked());
        lock.unlock().unwrap();
    }
}

#[test]
fn concurrent_try_lock_has_exactly_one_winner() {
    for kind in KINDS {
        for _ in 0..20 {
            let lock = kind.new_lock();
            let start = Arc::new(Barrier::new(16));
            let winners = Arc::new(AtomicUsize::new(0));

            let handles: Vec<_> = (0..16)
                .map(|_| {
                    let lock = Arc::clone(&lock);
                    let start = Arc::clone(&start);
                    let winners = Arc::clone(&winners);
                    thread::spawn(move || {
                        start.wait();
                        if lock.try_lock() {
                            winners.fetch_add(1, Ordering::SeqCst);
                        }
                    })
                })
                .collect();
            for handle in handles {
                handle.join().unwrap();
            }

            assert_eq!(winners.load(Ordering::SeqCst), 1, "{kind}");
            assert!(lock.is_locked());
        }
    }
}

#[test]
fn unlock_from_another_thread_is_allowed() {
    for kind in KINDS {
        let lock = kind.new_lock();
        lock.lock();
        let other = Arc::clone(&lock);
        thread::spawn(move || other.unlock()).join().unwrap().unwrap();
        assert!(!lock.is_locked(), "{kind}");
    }
}

#[test]
fn racing_unlocks_fault_exactly_once() {
    for kind in KINDS {
        for _ in 0..50 {
            let lock = kind.new_lock();
            lock.lock();
            let start = Arc::new(Barrier::new(2));

            let handles: Vec<_> = (0..2)
                .map(|_| {
                    let lock = Arc::clone(&lock);
                    let start = Arc::clone(&start);
                    thread::spawn(move || {
                        start.wait();
                        lock.unlock()
                    })
                })
                .collect();
            let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

            assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1, "{kind}");
            assert!(results.contains(&Err(LockError::DoubleUnlock(kind))));
            assert!(!lock.is_locked());
        }
    }
}

#[test]
fn blocked_waiters_each_get_a_turn() {
    for kind in KINDS {
        let lock = kind.new_lock();
        let acquired = Arc::new(AtomicUsize::new(0));
        lock.lock();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let lock = Arc::clone(&lock);
                let acquired = Arc::clone(&acquired);
                thread::spawn(move || {
                    lock.lock();
                    acquired.fetch_add(1, Ordering::SeqCst);
                    lock.unlock().unwrap();
                })
            })
            .collect();

        thread::sleep(Duration::from_millis(20));
        assert_eq!(acquired.load(Ordering::SeqCst), 0, "{kind}");
        lock.unlock().unwrap();

        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(acquired.load(Ordering::SeqCst), 4, "{kind}");
        assert!(!lock.is_locked());
    }
}

#[test]
fn timed_try_lock_succeeds_when_released_before_timeout() {
    let lock = Arc::new(TimedLock::new());
    lock.lock();

    let releaser = {
        let lock = Arc::clone(&lock);
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(20));
            lock.unlock().unwrap();
        })
    };

    assert!(lock.try_lock_for(Duration::from_secs(2)));
    assert!(lock.is_locked());
    releaser.join().unwrap();
}

#[test]
fn timed_try_lock_fails_when_released_after_timeout() {
    let lock = Arc::new(TimedLock::new());
    lock.lock();

    let releaser = {
        let lock = Arc::clone(&lock);
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(300));
            lock.unlock().unwrap();
        })
    };

    let started = Instant::now();
    assert!(!lock.try_lock_for(Duration::from_millis(30)));
    assert!(started.elapsed() >= Duration::from_millis(30));
    releaser.join().unwrap();
    // The late release went to the slot, not to the timed-out caller.
    assert!(!lock.is_locked());
}

#[test]
fn timed_try_lock_fails_when_never_released() {
    let lock = TimedLock::new();
    lock.lock();
    assert!(!lock.try_lock_for(Duration::from_millis(10)));
    assert!(lock.is_locked());
}

#[test]
fn timed_waiters_never_both_acquire() {
    let lock = Arc::new(TimedLock::new());
    lock.lock();
    let start = Arc::new(Barrier::new(3));

    let handles: Vec<_> = (0..2)
        .map(|_| {
            let lock = Arc::clone(&lock);
            let start = Arc::clone(&start);
            thread::spawn(move || {
                start.wait();
                lock.try_lock_for(Duration::from_millis(200))
            })
        })
        .collect();

    start.wait();
    thread::sleep(Duration::from_millis(20));
    lock.unlock().unwrap();

    let acquired = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(|acquired| *acquired)
        .count();
    assert_eq!(acquired, 1);
    assert!(lock.is_locked());
}

#[test]
fn concrete_types_match_their_kind() {
    assert_eq!(BlockingLock::new().kind(), LockKind::Blocking);
    assert_eq!(TokenLock::default().kind(), LockKind::Token);
    assert_eq!(TimedLock::default().kind(), LockKind::Timed);
}
