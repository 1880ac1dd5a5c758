//! Synchronization helpers.
//!
//! A mutex becomes poisoned when a thread panics while holding it. The only
//! shared state in this crate is the logger's output sink and its last
//! printed timestamp; losing either to a poisoned lock would silence all
//! further logging, so locks are recovered instead.
//!
//! ```rust
//! use std::sync::Mutex;
//! use termgrid::sync::lock_recover;
//!
//! let data = Mutex::new(vec![1, 2, 3]);
//! let guard = lock_recover(&data);
//! assert_eq!(guard.len(), 3);
//! ```

use std::sync::{Mutex, MutexGuard, PoisonError};

/// Lock a mutex, recovering the data if a previous holder panicked.
///
/// # Panics
///
/// This function never panics.
#[inline]
pub fn lock_recover<T: ?Sized>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| {
        #[cfg(debug_assertions)]
        eprintln!("[termgrid::sync] mutex poison recovered");
        PoisonError::into_inner(poisoned)
    })
}
