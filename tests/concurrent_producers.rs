#![allow(clippy::unwrap_used, clippy::expect_used)]

mod support;

use batchlog::log::{LogLevel, Logger};
use batchlog::{LineMode, LoggerConfig};
use std::collections::{HashMap, HashSet};
use std::thread;
use std::time::Duration;
use support::{SharedBuf, wait_until};

const THREADS: usize = 8;
const STREAMS_PER_THREAD: usize = 150;
const MSGS_PER_STREAM: usize = 3;

fn parse(line: &str) -> (usize, usize, usize) {
    let mut parts = line.split('-').map(|p| p[1..].parse::<usize>().unwrap());
    (
        parts.next().unwrap(),
        parts.next().unwrap(),
        parts.next().unwrap(),
    )
}

#[test]
fn every_message_is_written_exactly_once_in_stream_order() {
    let buf = SharedBuf::default();
    let config = LoggerConfig {
        line_mode: LineMode::WithNewline,
        ..LoggerConfig::with_tick(Duration::from_millis(5))
    };
    let logger = Logger::with_config(&config, buf.clone()).unwrap();

    thread::scope(|scope| {
        for t in 0..THREADS {
            let handle = logger.handle();
            scope.spawn(move || {
                for s in 0..STREAMS_PER_THREAD {
                    let mut stream = handle.stream(LogLevel::ERROR);
                    for m in 0..MSGS_PER_STREAM {
                        stream.text(format_args!("t{t}-s{s}-m{m}")).flush();
                    }
                }
            });
        }
    });

    let total = THREADS * STREAMS_PER_THREAD * MSGS_PER_STREAM;
    assert!(
        wait_until(Duration::from_secs(5), || buf.lines().len() >= total),
        "only {} of {total} lines arrived",
        buf.lines().len()
    );
    thread::sleep(Duration::from_millis(30));
    let lines = buf.lines();
    assert_eq!(lines.len(), total);

    let unique: HashSet<&String> = lines.iter().collect();
    assert_eq!(unique.len(), total, "duplicate lines written");

    // Each thread hands its streams off one after another, so both the
    // stream sequence and the message sequence inside a stream must hold.
    let mut last_seen: HashMap<usize, (usize, usize)> = HashMap::new();
    for line in &lines {
        let (t, s, m) = parse(line);
        if let Some(&prev) = last_seen.get(&t) {
            assert!((s, m) > prev, "thread {t}: {line} written after s{}-m{}", prev.0, prev.1);
        }
        last_seen.insert(t, (s, m));
    }
}

#[test]
fn threshold_changes_from_other_threads_are_observed() {
    let buf = SharedBuf::default();
    let logger = Logger::new(Duration::from_millis(5), buf.clone()).unwrap();
    let handle = logger.handle();

    thread::spawn(move || handle.set_threshold(LogLevel::DEBUG))
        .join()
        .unwrap();
    assert_eq!(logger.threshold(), LogLevel::DEBUG);

    logger.stream(LogLevel::DEBUG).text("visible");
    assert!(wait_until(Duration::from_secs(2), || buf.contents() == "visible"));
}

#[test]
fn streams_can_move_to_another_thread_before_hand_off() {
    let buf = SharedBuf::default();
    let logger = Logger::new(Duration::from_millis(5), buf.clone()).unwrap();

    let mut stream = logger.stream(LogLevel::ERROR);
    stream.text("built here, ");
    thread::spawn(move || {
        stream.text("dropped there");
    })
    .join()
    .unwrap();

    assert!(wait_until(Duration::from_secs(2), || {
        buf.contents() == "built here, dropped there"
    }));
}
