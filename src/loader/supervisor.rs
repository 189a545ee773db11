//! Serialization and superseding of image load requests.
//!
//! The supervisor owns at most one in-flight [`LoadTask`] and the channel all
//! workers report through. Results are drained on the owning thread with
//! [`LoadSupervisor::poll`]; the sequence-number comparison happens at drain
//! time, so a new request issued between a worker's emit and the next drain
//! still wins the race.

use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;
use std::thread::JoinHandle;

use crate::decoder::{Bitmap, FileDecoder, ImageDecoder};
use crate::loader::task::{LoadTask, TaskMessage, TaskPayload};

/// Callback invoked by workers after each notification, so a GUI event loop
/// can schedule a repaint without the library depending on it.
pub type RepaintHook = Arc<dyn Fn() + Send + Sync>;

/// A notification that survived the stale filter.
///
/// Every event delivered by [`LoadSupervisor::poll`] belongs to the current
/// request; superseded tasks never surface here.
#[derive(Debug, Clone)]
pub enum LoadEvent {
    /// Progress percent in [0, 100] for the current request.
    Progress(u8),
    /// The current request decoded successfully.
    Loaded(Bitmap, PathBuf),
    /// The current request failed; carries the user-facing message.
    Failed(String),
}

impl LoadEvent {
    /// True for `Loaded` and `Failed`, the events that end a request.
    pub fn is_terminal(&self) -> bool {
        matches!(self, LoadEvent::Loaded(..) | LoadEvent::Failed(..))
    }
}

/// The in-flight task and the sequence number it was started under.
struct ActiveTask {
    seq: u64,
    handle: JoinHandle<()>,
}

/// Coordinates background image loading with the thread that owns it.
///
/// Guarantees:
/// - at most one task is active at a time;
/// - `poll` only ever delivers events from the latest request;
/// - superseded tasks run to completion but their output is discarded
///   (cooperative cancellation, no thread interruption);
/// - `dispose` joins outstanding workers so teardown never leaves a thread
///   holding references into the supervisor.
pub struct LoadSupervisor {
    decoder: Arc<dyn ImageDecoder>,
    sender: Sender<TaskMessage>,
    receiver: Receiver<TaskMessage>,
    /// Monotonic counter identifying the latest request. Owned and mutated
    /// only by this struct, on the thread that drains the channel.
    current_seq: u64,
    active: Option<ActiveTask>,
    /// Superseded or finished task handles awaiting disposal.
    retired: Vec<JoinHandle<()>>,
    repaint: Option<RepaintHook>,
}

impl LoadSupervisor {
    /// Creates a supervisor using the production [`FileDecoder`].
    pub fn new() -> Self {
        Self::with_decoder(Arc::new(FileDecoder))
    }

    /// Creates a supervisor with a caller-supplied decoder.
    pub fn with_decoder(decoder: Arc<dyn ImageDecoder>) -> Self {
        let (sender, receiver) = channel();
        Self {
            decoder,
            sender,
            receiver,
            current_seq: 0,
            active: None,
            retired: Vec::new(),
            repaint: None,
        }
    }

    /// Installs the hook workers invoke after each notification.
    ///
    /// The GUI passes a closure around `egui::Context::request_repaint` so
    /// frames are produced while a load is in flight.
    pub fn set_repaint_hook(&mut self, hook: impl Fn() + Send + Sync + 'static) {
        self.repaint = Some(Arc::new(hook));
    }

    /// Starts loading `path`, superseding any in-flight request.
    ///
    /// Non-blocking: returns as soon as the worker thread is spawned. The
    /// caller is responsible for the path being meaningful; a bad path
    /// surfaces later as a `Failed` event, not here. A previous task keeps
    /// running, but its notifications are now stale and will be dropped.
    pub fn request(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        self.current_seq += 1;

        if let Some(prev) = self.active.take() {
            tracing::debug!(seq = prev.seq, "superseding in-flight load");
            self.retired.push(prev.handle);
        }

        let task = LoadTask::new(
            path,
            self.current_seq,
            Arc::clone(&self.decoder),
            self.sender.clone(),
            self.repaint.clone(),
        );
        self.active = Some(ActiveTask {
            seq: self.current_seq,
            handle: task.start(),
        });
    }

    /// Drains pending worker notifications, returning only current ones.
    ///
    /// Call once per frame from the thread that owns the supervisor. Stale
    /// messages (sequence number behind the current request) are discarded
    /// here; a terminal event retires the active task.
    pub fn poll(&mut self) -> Vec<LoadEvent> {
        let mut events = Vec::new();
        while let Ok(message) = self.receiver.try_recv() {
            if message.seq != self.current_seq {
                tracing::trace!(
                    seq = message.seq,
                    current = self.current_seq,
                    "dropping stale notification"
                );
                continue;
            }
            match message.payload {
                TaskPayload::Progress(percent) => events.push(LoadEvent::Progress(percent)),
                TaskPayload::Loaded(bitmap, path) => {
                    self.retire_active();
                    events.push(LoadEvent::Loaded(bitmap, path));
                }
                TaskPayload::Failed(text) => {
                    self.retire_active();
                    events.push(LoadEvent::Failed(text));
                }
            }
        }
        self.reap_retired();
        events
    }

    /// True while a request has not yet reached its terminal event.
    pub fn is_loading(&self) -> bool {
        self.active.is_some()
    }

    /// Joins all outstanding workers and clears the active slot.
    ///
    /// Safe to call during window teardown even if the active task never
    /// produced a terminal notification, and safe to call repeatedly. The
    /// sequence bump makes anything still in the channel stale, so a `poll`
    /// after `dispose` delivers nothing.
    pub fn dispose(&mut self) {
        self.current_seq += 1;
        if let Some(active) = self.active.take() {
            tracing::debug!(seq = active.seq, "joining active load on dispose");
            let _ = active.handle.join();
        }
        for handle in self.retired.drain(..) {
            let _ = handle.join();
        }
    }

    /// Moves the active task to the retired list after its terminal event.
    fn retire_active(&mut self) {
        if let Some(active) = self.active.take() {
            self.retired.push(active.handle);
        }
    }

    /// Joins retired workers that have already run out.
    fn reap_retired(&mut self) {
        let mut still_running = Vec::new();
        for handle in self.retired.drain(..) {
            if handle.is_finished() {
                let _ = handle.join();
            } else {
                still_running.push(handle);
            }
        }
        self.retired = still_running;
    }
}

impl Default for LoadSupervisor {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for LoadSupervisor {
    fn drop(&mut self) {
        self.dispose();
    }
}
