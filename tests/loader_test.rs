use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use insight::{Bitmap, ImageDecoder, LoadEvent, LoadSupervisor};
use tempfile::tempdir;

mod common;
use common::{init_tracing, solid_image, write_image};

/// Decoder with scripted behavior for pipeline tests.
struct ScriptedDecoder {
    delay: Duration,
    fail: bool,
}

impl ScriptedDecoder {
    fn ok() -> Arc<Self> {
        Arc::new(Self {
            delay: Duration::ZERO,
            fail: false,
        })
    }

    fn failing() -> Arc<Self> {
        Arc::new(Self {
            delay: Duration::ZERO,
            fail: true,
        })
    }

    fn slow(delay: Duration) -> Arc<Self> {
        Arc::new(Self { delay, fail: false })
    }
}

impl ImageDecoder for ScriptedDecoder {
    fn decode(&self, _path: &Path) -> Option<Bitmap> {
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
        if self.fail {
            None
        } else {
            Some(Bitmap::from_rgba8(vec![255; 4], 1, 1))
        }
    }
}

const EVENT_TIMEOUT: Duration = Duration::from_secs(10);

/// Polls once per few milliseconds until a terminal event arrives,
/// collecting everything delivered along the way.
fn drain_until_terminal(supervisor: &mut LoadSupervisor) -> Vec<LoadEvent> {
    let start = Instant::now();
    let mut events = Vec::new();
    loop {
        let batch = supervisor.poll();
        let finished = batch.iter().any(LoadEvent::is_terminal);
        events.extend(batch);
        if finished {
            return events;
        }
        assert!(
            start.elapsed() < EVENT_TIMEOUT,
            "no terminal event within {:?}",
            EVENT_TIMEOUT
        );
        thread::sleep(Duration::from_millis(5));
    }
}

fn progress_values(events: &[LoadEvent]) -> Vec<u8> {
    events
        .iter()
        .filter_map(|event| match event {
            LoadEvent::Progress(percent) => Some(*percent),
            _ => None,
        })
        .collect()
}

fn terminal_events(events: &[LoadEvent]) -> Vec<&LoadEvent> {
    events.iter().filter(|event| event.is_terminal()).collect()
}

#[test]
fn uncontested_success_reports_full_progress_sequence() {
    init_tracing();
    let mut supervisor = LoadSupervisor::with_decoder(ScriptedDecoder::ok());
    supervisor.request("/img/any.png");

    let events = drain_until_terminal(&mut supervisor);

    assert_eq!(progress_values(&events), vec![10, 30, 70, 100]);
    let terminals = terminal_events(&events);
    assert_eq!(terminals.len(), 1);
    match terminals[0] {
        LoadEvent::Loaded(_, path) => assert_eq!(path, &PathBuf::from("/img/any.png")),
        other => panic!("expected Loaded, got {:?}", other),
    }
    assert!(!supervisor.is_loading());
}

#[test]
fn uncontested_failure_stops_at_seventy_percent() {
    init_tracing();
    let mut supervisor = LoadSupervisor::with_decoder(ScriptedDecoder::failing());
    supervisor.request("/img/broken.png");

    let events = drain_until_terminal(&mut supervisor);

    // No trailing 100 on the failure path, and no Loaded at all.
    assert_eq!(progress_values(&events), vec![10, 30, 70]);
    let terminals = terminal_events(&events);
    assert_eq!(terminals.len(), 1);
    match terminals[0] {
        LoadEvent::Failed(message) => {
            assert_eq!(message, "Failed to load image: /img/broken.png");
        }
        other => panic!("expected Failed, got {:?}", other),
    }
}

#[test]
fn newer_request_supersedes_older_one() {
    init_tracing();
    let mut supervisor =
        LoadSupervisor::with_decoder(ScriptedDecoder::slow(Duration::from_millis(300)));

    supervisor.request("/img/first.png");
    supervisor.request("/img/second.png");

    let events = drain_until_terminal(&mut supervisor);

    let terminals = terminal_events(&events);
    assert_eq!(terminals.len(), 1, "only the latest request may complete");
    match terminals[0] {
        LoadEvent::Loaded(_, path) => assert_eq!(path, &PathBuf::from("/img/second.png")),
        other => panic!("expected Loaded for the second request, got {:?}", other),
    }
}

#[test]
fn rapid_requests_deliver_only_last_outcome() {
    init_tracing();
    let mut supervisor =
        LoadSupervisor::with_decoder(ScriptedDecoder::slow(Duration::from_millis(10)));

    for i in 0..12 {
        supervisor.request(format!("/img/frame-{i}.png"));
    }

    let events = drain_until_terminal(&mut supervisor);
    let terminals = terminal_events(&events);
    assert_eq!(terminals.len(), 1);
    match terminals[0] {
        LoadEvent::Loaded(_, path) => assert_eq!(path, &PathBuf::from("/img/frame-11.png")),
        other => panic!("expected Loaded for the last request, got {:?}", other),
    }

    // Superseded workers are still running out; none of their results may
    // surface in later polls.
    let settle_deadline = Instant::now() + Duration::from_millis(600);
    while Instant::now() < settle_deadline {
        assert!(
            !supervisor.poll().iter().any(LoadEvent::is_terminal),
            "stale terminal event leaked through"
        );
        thread::sleep(Duration::from_millis(10));
    }
}

#[test]
fn real_decode_reports_dimensions_and_path() {
    init_tracing();
    let tmp = tempdir().unwrap();
    let img_path = tmp.path().join("cat.png");
    write_image(&img_path, &solid_image(100, 100, [10, 20, 30, 255]));

    let mut supervisor = LoadSupervisor::new();
    supervisor.request(img_path.clone());

    let events = drain_until_terminal(&mut supervisor);

    // Progress stays within bounds and never goes backwards.
    let progress = progress_values(&events);
    assert!(progress.windows(2).all(|pair| pair[0] <= pair[1]));
    assert!(progress.iter().all(|&percent| percent <= 100));

    let terminals = terminal_events(&events);
    assert_eq!(terminals.len(), 1);
    match terminals[0] {
        LoadEvent::Loaded(bitmap, path) => {
            assert_eq!(bitmap.width(), 100);
            assert_eq!(bitmap.height(), 100);
            assert_eq!(path, &img_path);
        }
        other => panic!("expected Loaded, got {:?}", other),
    }
}

#[test]
fn missing_file_reports_error_with_path() {
    init_tracing();
    let tmp = tempdir().unwrap();
    let img_path = tmp.path().join("missing").join("file.png");

    let mut supervisor = LoadSupervisor::new();
    supervisor.request(img_path.clone());

    let events = drain_until_terminal(&mut supervisor);
    let terminals = terminal_events(&events);
    assert_eq!(terminals.len(), 1);
    match terminals[0] {
        LoadEvent::Failed(message) => {
            assert_eq!(
                message,
                &format!("Failed to load image: {}", img_path.display())
            );
        }
        other => panic!("expected Failed, got {:?}", other),
    }
}

#[test]
fn dispose_with_inflight_task_joins_cleanly() {
    init_tracing();
    let mut supervisor =
        LoadSupervisor::with_decoder(ScriptedDecoder::slow(Duration::from_millis(200)));
    supervisor.request("/img/abandoned.png");

    supervisor.dispose();

    assert!(!supervisor.is_loading());
    assert!(supervisor.poll().is_empty());

    // Second dispose and further polls stay inert.
    supervisor.dispose();
    assert!(supervisor.poll().is_empty());
}

#[test]
fn dropping_supervisor_with_active_task_is_clean() {
    init_tracing();
    let mut supervisor =
        LoadSupervisor::with_decoder(ScriptedDecoder::slow(Duration::from_millis(100)));
    supervisor.request("/img/abandoned.png");
    drop(supervisor);
}
