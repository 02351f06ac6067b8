use crate::{
    config::{LineMode, LoggerConfig},
    error::{LoggerError, Result},
    log::{
        log_level::LogLevel, log_msg::LogMsg, log_stream::LogStream,
        logger_handle::LoggerHandle, shared::Shared,
    },
};

use crossbeam_channel::{Receiver, Sender, select};
use std::{
    fmt::Display,
    io::{self, Write},
    mem,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    thread::{self, JoinHandle},
    time::Duration,
};

/// Output destination owned by the drain thread while it runs.
pub type Output = Box<dyn Write + Send>;

/// Batched logger drained by a background thread on a fixed tick.
///
/// # Architecture
///
/// 1. **Producers**: call sites build messages in a [`LogStream`] obtained
///    from [`stream`](Self::stream). Nothing is shared while they write.
/// 2. **Hand-off**: dropping a stream moves its finished messages into the
///    shared batch under a mutex, in one operation.
/// 3. **Drain**: the `logger-drain` thread wakes every `tick`, swaps the
///    shared batch out, and writes every message whose level is at or below
///    the current threshold. Everything else in that batch is discarded.
///
/// # Shutdown
///
/// [`shutdown`](Self::shutdown) (also run on drop) stops the drain thread
/// without a final drain: messages handed off since the last tick are
/// **lost**. Streams that are dropped after the logger itself is gone are
/// silently discarded.
pub struct Logger {
    shared: Arc<Shared>,
    tick: Duration,
    line_mode: LineMode,
    state: Mutex<State>,
}

enum State {
    Running(Worker),
    /// `None` once the writer has been lost to a panicked drain thread.
    Stopped(Option<Output>),
}

struct Worker {
    // Dropping the sender is the stop signal.
    stop_tx: Sender<()>,
    thread: JoinHandle<Output>,
}

impl Logger {
    /// Starts a logger with threshold `0` that drains into `writer` every `tick`.
    pub fn new<W>(tick: Duration, writer: W) -> Result<Self>
    where
        W: Write + Send + 'static,
    {
        Self::with_config(&LoggerConfig::with_tick(tick), writer)
    }

    /// Starts a logger from `config`, draining into `writer`.
    ///
    /// # Errors
    ///
    /// [`LoggerError::InvalidTick`] for a zero tick, or
    /// [`LoggerError::Spawn`] if the drain thread cannot be created.
    pub fn with_config<W>(config: &LoggerConfig, writer: W) -> Result<Self>
    where
        W: Write + Send + 'static,
    {
        if config.tick.is_zero() {
            return Err(LoggerError::InvalidTick(format!("{:?}", config.tick)));
        }
        let logger = Self {
            shared: Arc::new(Shared::new(config.threshold)),
            tick: config.tick,
            line_mode: config.line_mode,
            state: Mutex::new(State::Stopped(Some(Box::new(writer)))),
        };
        logger.start()?;
        Ok(logger)
    }

    /// Starts a logger from `config` that writes to standard error.
    pub fn stderr(config: &LoggerConfig) -> Result<Self> {
        Self::with_config(config, io::stderr())
    }

    /// Returns a fresh stream bound to this logger.
    #[must_use]
    pub fn stream(&self, level: impl Into<LogLevel>) -> LogStream {
        LogStream::new(Arc::downgrade(&self.shared), level.into())
    }

    /// One-shot stream at the default level, seeded with `value`.
    ///
    /// ```rust
    /// # use batchlog::log::Logger;
    /// # let logger = Logger::new(std::time::Duration::from_millis(5), std::io::sink())?;
    /// logger.write("retries: ").text(3);
    /// # Ok::<(), batchlog::LoggerError>(())
    /// ```
    #[must_use]
    pub fn write(&self, value: impl Display) -> LogStream {
        let mut stream = self.stream(LogLevel::default());
        stream.text(value);
        stream
    }

    /// Replaces the threshold; the drain thread applies it from its next tick.
    pub fn set_threshold(&self, level: impl Into<LogLevel>) {
        self.shared.set_threshold(level.into());
    }

    #[must_use]
    pub fn threshold(&self) -> LogLevel {
        self.shared.threshold()
    }

    /// Returns a cloneable handle for other threads or modules.
    ///
    /// The handle does not keep the logger alive.
    #[must_use]
    pub fn handle(&self) -> LoggerHandle {
        LoggerHandle::new(Arc::downgrade(&self.shared))
    }

    #[must_use]
    pub fn tick(&self) -> Duration {
        self.tick
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        matches!(*self.lock_state(), State::Running(_))
    }

    /// Spawns the drain thread again after a [`shutdown`](Self::shutdown).
    ///
    /// # Errors
    ///
    /// [`LoggerError::AlreadyRunning`] if the thread is alive,
    /// [`LoggerError::NoOutput`] if the writer was lost, or
    /// [`LoggerError::Spawn`] if the OS refuses a new thread (the writer is
    /// lost in that case too).
    pub fn start(&self) -> Result<()> {
        let mut state = self.lock_state();
        match mem::replace(&mut *state, State::Stopped(None)) {
            State::Running(worker) => {
                *state = State::Running(worker);
                Err(LoggerError::AlreadyRunning)
            }
            State::Stopped(None) => Err(LoggerError::NoOutput),
            State::Stopped(Some(out)) => {
                *state = State::Running(self.spawn(out)?);
                Ok(())
            }
        }
    }

    /// Stops the drain thread and waits for it to exit.
    ///
    /// There is no final drain: messages handed off since the last tick are
    /// discarded, even if the logger is started again later. Calling this on
    /// a stopped logger does nothing.
    pub fn shutdown(&self) {
        let mut state = self.lock_state();
        if !matches!(*state, State::Running(_)) {
            return;
        }
        if let State::Running(worker) = mem::replace(&mut *state, State::Stopped(None)) {
            *state = State::Stopped(worker.stop());
            self.shared.discard();
        }
    }

    /// Stops the logger and gives back its writer.
    pub fn into_writer(self) -> Option<Output> {
        self.shutdown();
        let state = mem::replace(&mut *self.lock_state(), State::Stopped(None));
        match state {
            State::Stopped(out) => out,
            State::Running(_) => None,
        }
    }

    fn spawn(&self, out: Output) -> Result<Worker> {
        let (stop_tx, stop_rx) = crossbeam_channel::bounded::<()>(0);
        let shared = Arc::clone(&self.shared);
        let tick = self.tick;
        let line_mode = self.line_mode;

        let thread = thread::Builder::new()
            .name("logger-drain".into())
            .spawn(move || drain_loop(&shared, tick, line_mode, &stop_rx, out))
            .map_err(LoggerError::Spawn)?;

        Ok(Worker { stop_tx, thread })
    }

    fn lock_state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        self.shutdown();
    }
}

impl Worker {
    fn stop(self) -> Option<Output> {
        drop(self.stop_tx);
        self.thread.join().ok()
    }
}

/// Body of the `logger-drain` thread. Returns the writer on stop.
///
/// `tick` keeps a fixed cadence: a late tick is delivered once and the next
/// one is scheduled a full interval after it, so missed ticks never pile up.
fn drain_loop(
    shared: &Shared,
    tick: Duration,
    line_mode: LineMode,
    stop_rx: &Receiver<()>,
    mut out: Output,
) -> Output {
    let ticker = crossbeam_channel::tick(tick);
    let mut batch = Vec::new();
    loop {
        select! {
            recv(stop_rx) -> _ => break,
            recv(ticker) -> _ => {
                drain_once(shared, &mut batch, line_mode, &mut *out);
            }
        }
    }
    out
}

/// One drain tick. Returns how many messages were written.
///
/// Only the swap happens under the lock; filtering and I/O run after it is
/// released. Write errors are ignored, the writer owns its failure policy.
pub(crate) fn drain_once(
    shared: &Shared,
    batch: &mut Vec<LogMsg>,
    line_mode: LineMode,
    out: &mut dyn Write,
) -> usize {
    shared.take_batch(batch);
    if batch.is_empty() {
        return 0;
    }

    let threshold = shared.threshold();
    let mut written = 0;
    for msg in batch.drain(..) {
        if !msg.level().passes(threshold) {
            continue;
        }
        let text = msg.into_text();
        let _ = out.write_all(text.as_bytes());
        if line_mode == LineMode::WithNewline {
            let _ = out.write_all(b"\n");
        }
        written += 1;
    }

    if written > 0 {
        let _ = out.flush();
    }
    written
}
