use std::io;
use std::sync::{Arc, Mutex};

use pacman_chase::formatter::{current_tick, set_tick, TickFormatter};
use pretty_assertions::assert_eq;
use speculoos::prelude::*;

#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture(f: impl FnOnce()) -> String {
    let buffer = SharedBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_max_level(tracing::Level::TRACE)
        .event_format(TickFormatter)
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, f);
    let bytes = buffer.0.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
}

#[test]
fn test_line_layout() {
    set_tick(0x12345);
    assert_eq!(current_tick(), 0x12345);

    let output = capture(|| tracing::info!(score = 10, "Pellet eaten"));
    let line = output.lines().next().unwrap();
    let parts: Vec<&str> = line.splitn(3, ' ').collect();

    // HH:MM:SS.ffff
    assert_that(&parts[0].len()).is_equal_to(13);
    assert_that(&parts[0].chars().filter(|&c| c == ':').count()).is_equal_to(2);
    // Only the low sixteen bits of the tick are shown.
    assert_eq!(parts[1], "0x2345");
    assert_that(&parts[2].starts_with(" INFO formatting: ")).is_true();
    assert_that(&line.ends_with("Pellet eaten score=10")).is_true();
}

#[test]
fn test_levels_are_aligned() {
    let output = capture(|| {
        tracing::trace!("a");
        tracing::debug!("b");
        tracing::warn!("c");
        tracing::error!("d");
    });

    let levels: Vec<&str> = output.lines().map(|line| &line[21..26]).collect();
    assert_eq!(levels, vec!["TRACE", "DEBUG", " WARN", "ERROR"]);
}
