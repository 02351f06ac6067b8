use std::{
    mem,
    sync::{
        Mutex, MutexGuard, PoisonError,
        atomic::{AtomicI32, Ordering},
    },
};

use crate::log::{log_level::LogLevel, log_msg::LogMsg};

/// State shared between producers and the drain thread.
///
/// The batch is the only lock-protected value; the threshold is a plain
/// atomic because nothing ever read-modify-writes it.
#[derive(Debug)]
pub(crate) struct Shared {
    threshold: AtomicI32,
    batch: Mutex<Vec<LogMsg>>,
}

impl Shared {
    pub(crate) fn new(threshold: LogLevel) -> Self {
        Self {
            threshold: AtomicI32::new(threshold.value()),
            batch: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn threshold(&self) -> LogLevel {
        LogLevel::new(self.threshold.load(Ordering::Relaxed))
    }

    pub(crate) fn set_threshold(&self, level: LogLevel) {
        self.threshold.store(level.value(), Ordering::Relaxed);
    }

    /// Appends a stream's batch, in order, in a single locked operation.
    pub(crate) fn ingest(&self, mut messages: Vec<LogMsg>) {
        if messages.is_empty() {
            return;
        }
        let mut batch = self.lock();
        if batch.is_empty() {
            // Adopt the incoming allocation instead of copying into ours.
            mem::swap(&mut *batch, &mut messages);
        } else {
            batch.append(&mut messages);
        }
    }

    /// Swaps the shared batch with `spare`, which must be empty.
    ///
    /// Only pointers move while the lock is held; the caller filters and
    /// writes the returned messages after the guard is gone.
    pub(crate) fn take_batch(&self, spare: &mut Vec<LogMsg>) {
        debug_assert!(spare.is_empty());
        mem::swap(&mut *self.lock(), spare);
    }

    /// Drops everything currently queued. Returns how many messages went.
    pub(crate) fn discard(&self) -> usize {
        let dropped = mem::take(&mut *self.lock());
        dropped.len()
    }

    #[cfg(test)]
    pub(crate) fn pending(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<LogMsg>> {
        // A panic while holding the lock cannot leave the Vec half-updated.
        self.batch.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(messages: &[LogMsg]) -> Vec<&str> {
        messages.iter().map(LogMsg::text).collect()
    }

    #[test]
    fn empty_ingest_is_noop() {
        let shared = Shared::new(LogLevel::ERROR);
        shared.ingest(Vec::new());
        assert_eq!(shared.pending(), 0);
    }

    #[test]
    fn ingest_preserves_hand_off_order() {
        let shared = Shared::new(LogLevel::ERROR);
        shared.ingest(vec![
            LogMsg::new(LogLevel::ERROR, "a1"),
            LogMsg::new(LogLevel::ERROR, "a2"),
        ]);
        shared.ingest(vec![LogMsg::new(LogLevel::WARN, "b1")]);

        let mut drained = Vec::new();
        shared.take_batch(&mut drained);
        assert_eq!(texts(&drained), ["a1", "a2", "b1"]);
        assert_eq!(shared.pending(), 0);
    }

    #[test]
    fn take_batch_leaves_spare_in_place() {
        let shared = Shared::new(LogLevel::ERROR);
        shared.ingest(vec![LogMsg::new(LogLevel::ERROR, "x")]);

        let mut spare = Vec::with_capacity(16);
        shared.take_batch(&mut spare);
        assert_eq!(texts(&spare), ["x"]);

        spare.clear();
        shared.take_batch(&mut spare);
        assert!(spare.is_empty());
    }

    #[test]
    fn discard_empties_the_batch() {
        let shared = Shared::new(LogLevel::ERROR);
        shared.ingest(vec![
            LogMsg::new(LogLevel::ERROR, "a"),
            LogMsg::new(LogLevel::TRACE, "b"),
        ]);
        assert_eq!(shared.discard(), 2);
        assert_eq!(shared.pending(), 0);
        assert_eq!(shared.discard(), 0);
    }

    #[test]
    fn threshold_round_trips() {
        let shared = Shared::new(LogLevel::INFO);
        assert_eq!(shared.threshold(), LogLevel::INFO);
        shared.set_threshold(LogLevel::new(-3));
        assert_eq!(shared.threshold(), LogLevel::new(-3));
    }
}
