//! Producers for the window queue.
//!
//! Everything that talks to a running window does so through one
//! `std::sync::mpsc` channel of [`WindowMsg`]: the input poller thread, the
//! coalesced [`RepaintSignal`] and the [`TaskRunner`] that runs slow jobs on
//! tokio's blocking pool.

use crate::ui::backend::EventSource;
use crate::ui::core::event::Event;
use std::io;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

pub const DEFAULT_POLL: Duration = Duration::from_millis(50);

#[derive(Debug)]
pub enum WindowMsg<M> {
    Input(Event),
    Repaint,
    Message(M),
}

/// Requests a repaint; any number of requests between two frames queue a
/// single [`WindowMsg::Repaint`].
pub struct RepaintSignal<M> {
    pending: Arc<AtomicBool>,
    tx: Sender<WindowMsg<M>>,
}

impl<M> Clone for RepaintSignal<M> {
    fn clone(&self) -> Self {
        Self {
            pending: Arc::clone(&self.pending),
            tx: self.tx.clone(),
        }
    }
}

impl<M> RepaintSignal<M> {
    pub fn new(tx: Sender<WindowMsg<M>>) -> Self {
        Self {
            pending: Arc::new(AtomicBool::new(false)),
            tx,
        }
    }

    /// Returns `true` when this call queued the repaint.
    pub fn request(&self) -> bool {
        if self.pending.swap(true, Ordering::AcqRel) {
            return false;
        }
        if self.tx.send(WindowMsg::Repaint).is_err() {
            self.pending.store(false, Ordering::Release);
            return false;
        }
        true
    }

    /// Called by the window when it takes the queued repaint.
    pub fn clear(&self) {
        self.pending.store(false, Ordering::Release);
    }

    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }
}

/// The window's queue: one receiver, cloneable senders and the repaint signal.
pub struct Queue<M> {
    tx: Sender<WindowMsg<M>>,
    rx: Receiver<WindowMsg<M>>,
    repaint: RepaintSignal<M>,
}

impl<M> Default for Queue<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> Queue<M> {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let repaint = RepaintSignal::new(tx.clone());
        Self { tx, rx, repaint }
    }

    pub fn sender(&self) -> Sender<WindowMsg<M>> {
        self.tx.clone()
    }

    pub fn repaint(&self) -> RepaintSignal<M> {
        self.repaint.clone()
    }

    pub fn receiver(&self) -> &Receiver<WindowMsg<M>> {
        &self.rx
    }

    /// Posts an application message.
    pub fn post(&self, msg: M) {
        let _ = self.tx.send(WindowMsg::Message(msg));
    }
}

/// Background thread moving events from an [`EventSource`] into the queue.
///
/// Polls in bounded slices and checks its stop flag between them; a source
/// error is forwarded as [`Event::Error`] and ends the thread.
pub struct InputPoller {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl InputPoller {
    pub fn spawn<E, M>(mut source: E, tx: Sender<WindowMsg<M>>, poll: Duration) -> io::Result<Self>
    where
        E: EventSource + Send + 'static,
        M: Send + 'static,
    {
        let stop = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&stop);
        let handle = std::thread::Builder::new()
            .name("cellui-input".to_string())
            .spawn(move || {
                while !flag.load(Ordering::Acquire) {
                    match source.poll_event(poll) {
                        Ok(Some(ev)) => {
                            if tx.send(WindowMsg::Input(ev)).is_err() {
                                break;
                            }
                        }
                        Ok(None) => {}
                        Err(e) => {
                            tracing::error!(error = %e, "input poll failed");
                            let _ = tx.send(WindowMsg::Input(Event::Error(e.to_string())));
                            break;
                        }
                    }
                }
                tracing::debug!("input poller stopped");
            })?;
        Ok(Self {
            stop,
            handle: Some(handle),
        })
    }

    /// Signals the thread and waits for its current poll to return.
    pub fn stop(&mut self) {
        self.stop.store(true, Ordering::Release);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for InputPoller {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Maps the reason a job died (its panic message, or a cancellation) to the
/// message the window receives in place of the job's own result.
pub type OnFailure<M> = Arc<dyn Fn(String) -> M + Send + Sync>;

/// Runs blocking jobs off the UI thread and posts their result as
/// [`WindowMsg::Message`]. Every job yields exactly one message: a job that
/// panics is reported through the failure mapper given to [`TaskRunner::new`].
///
/// While any job is outstanding a ticker requests a repaint every `tick` so
/// animated widgets (a [`crate::ui::widgets::Loading`]) keep moving.
pub struct TaskRunner<M> {
    runtime: tokio::runtime::Runtime,
    tx: Sender<WindowMsg<M>>,
    repaint: RepaintSignal<M>,
    tick: Duration,
    outstanding: Arc<AtomicUsize>,
    on_failure: OnFailure<M>,
}

impl<M: Send + 'static> TaskRunner<M> {
    pub fn new<F>(queue: &Queue<M>, tick: Duration, on_failure: F) -> io::Result<Self>
    where
        F: Fn(String) -> M + Send + Sync + 'static,
    {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("cellui-task")
            .enable_time()
            .build()
            .or_else(|e| {
                tracing::error!(
                    error = %e,
                    "Failed to create multi-thread tokio runtime, falling back to current-thread"
                );
                tokio::runtime::Builder::new_current_thread()
                    .enable_time()
                    .build()
            })?;
        Ok(Self {
            runtime,
            tx: queue.sender(),
            repaint: queue.repaint(),
            tick: tick.max(Duration::from_millis(1)),
            outstanding: Arc::new(AtomicUsize::new(0)),
            on_failure: Arc::new(on_failure),
        })
    }

    /// Jobs started and not yet finished.
    pub fn outstanding(&self) -> usize {
        self.outstanding.load(Ordering::Acquire)
    }

    pub fn is_busy(&self) -> bool {
        self.outstanding() > 0
    }

    pub fn spawn<F>(&self, job: F)
    where
        F: FnOnce() -> M + Send + 'static,
    {
        self.outstanding.fetch_add(1, Ordering::AcqRel);
        let tx = self.tx.clone();
        let repaint = self.repaint.clone();
        let outstanding = Arc::clone(&self.outstanding);
        let tick = self.tick;
        let on_failure = Arc::clone(&self.on_failure);

        self.runtime.spawn(async move {
            let ticker = tokio::spawn(async move {
                let mut interval = tokio::time::interval(tick);
                interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
                loop {
                    interval.tick().await;
                    repaint.request();
                }
            });

            let result = tokio::task::spawn_blocking(job).await;
            ticker.abort();
            outstanding.fetch_sub(1, Ordering::AcqRel);

            let msg = match result {
                Ok(msg) => {
                    tracing::debug!("task finished");
                    msg
                }
                Err(e) => {
                    let reason = failure_reason(e);
                    tracing::error!(%reason, "task failed");
                    on_failure(reason)
                }
            };
            let _ = tx.send(WindowMsg::Message(msg));
        });
    }
}

fn failure_reason(err: tokio::task::JoinError) -> String {
    if !err.is_panic() {
        return err.to_string();
    }
    let payload = err.into_panic();
    if let Some(s) = payload.downcast_ref::<&str>() {
        return (*s).to_string();
    }
    match payload.downcast::<String>() {
        Ok(s) => *s,
        Err(_) => "task panicked".to_string(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/ui/worker.rs"]
mod tests;
