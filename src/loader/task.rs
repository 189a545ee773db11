//! A single asynchronous load attempt.
//!
//! Each task owns one file path and one worker thread. It reports progress
//! and its terminal outcome through the supervisor's notification channel,
//! tagged with the sequence number of the request that created it.

use std::path::PathBuf;
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::decoder::{Bitmap, ImageDecoder};
use crate::loader::supervisor::RepaintHook;

/// Pause between progress stages, matching the pacing of the decode pipeline.
const STAGE_DELAY: Duration = Duration::from_millis(100);

/// Notification payload emitted by a load worker.
pub(crate) enum TaskPayload {
    /// Progress percent in [0, 100], non-decreasing within one task.
    Progress(u8),
    /// Decode succeeded; carries the bitmap and the path it was decoded from.
    Loaded(Bitmap, PathBuf),
    /// Decode failed; carries the user-facing error message.
    Failed(String),
}

/// A worker notification tagged with its originating request sequence number.
///
/// The supervisor compares `seq` against its current sequence number at drain
/// time; mismatching messages are stale and dropped.
pub(crate) struct TaskMessage {
    pub seq: u64,
    pub payload: TaskPayload,
}

/// One load attempt: a path, a decoder, and the channel to report through.
///
/// A task emits, in order: progress 10, 30, the decode attempt, progress 70,
/// then either progress 100 followed by `Loaded`, or `Failed` with no
/// trailing 100. It never touches viewer state; notifications are its only
/// side effect.
pub struct LoadTask {
    path: PathBuf,
    seq: u64,
    decoder: Arc<dyn ImageDecoder>,
    sender: Sender<TaskMessage>,
    repaint: Option<RepaintHook>,
}

impl LoadTask {
    pub(crate) fn new(
        path: PathBuf,
        seq: u64,
        decoder: Arc<dyn ImageDecoder>,
        sender: Sender<TaskMessage>,
        repaint: Option<RepaintHook>,
    ) -> Self {
        Self {
            path,
            seq,
            decoder,
            sender,
            repaint,
        }
    }

    /// Starts the worker thread for this attempt.
    ///
    /// Consumes the task, so a second start is a compile error. Returns the
    /// thread handle; the supervisor owns it until the task is retired.
    pub(crate) fn start(self) -> JoinHandle<()> {
        thread::spawn(move || self.run())
    }

    fn run(self) {
        tracing::debug!(seq = self.seq, path = %self.path.display(), "load task started");

        if !self.emit(TaskPayload::Progress(10)) {
            return;
        }
        thread::sleep(STAGE_DELAY);
        if !self.emit(TaskPayload::Progress(30)) {
            return;
        }

        let decoded = self.decoder.decode(&self.path);

        if !self.emit(TaskPayload::Progress(70)) {
            return;
        }
        thread::sleep(STAGE_DELAY);

        match decoded {
            Some(bitmap) => {
                if !self.emit(TaskPayload::Progress(100)) {
                    return;
                }
                self.emit(TaskPayload::Loaded(bitmap, self.path.clone()));
            }
            None => {
                self.emit(TaskPayload::Failed(format!(
                    "Failed to load image: {}",
                    self.path.display()
                )));
            }
        }
    }

    /// Sends one notification; returns false if the channel is gone.
    ///
    /// A closed channel means the supervisor was dropped, so the worker just
    /// stops emitting and runs out.
    fn emit(&self, payload: TaskPayload) -> bool {
        let delivered = self
            .sender
            .send(TaskMessage {
                seq: self.seq,
                payload,
            })
            .is_ok();
        if delivered {
            if let Some(hook) = &self.repaint {
                hook();
            }
        }
        delivered
    }
}
