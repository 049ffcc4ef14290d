//! Streamed input with a bounded wait for the first bytes.
//!
//! A reader thread forwards chunks over a channel and signals when the stream
//! closes. The receiving side owns the buffer; if nothing has arrived by the
//! deadline the read fails fast instead of blocking forever on an unpiped
//! terminal.

use std::io::Read;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::sync::Mutex;
use std::thread;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::domain::{MineError, Result};
use crate::ports::TextSource;

const CHUNK_SIZE: usize = 8 * 1024;

enum StreamEvent {
    Chunk(Vec<u8>),
    Closed,
    Failed(std::io::Error),
}

pub struct StreamSource<R> {
    reader: Mutex<Option<R>>,
    timeout: Duration,
}

impl StreamSource<std::io::Stdin> {
    pub fn stdin(timeout: Duration) -> Self {
        Self::new(std::io::stdin(), timeout)
    }
}

impl<R: Read + Send + 'static> StreamSource<R> {
    pub fn new(reader: R, timeout: Duration) -> Self {
        Self {
            reader: Mutex::new(Some(reader)),
            timeout,
        }
    }

    fn spawn_reader(mut reader: R) -> Receiver<StreamEvent> {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let mut chunk = vec![0u8; CHUNK_SIZE];
            loop {
                let event = match reader.read(&mut chunk) {
                    Ok(0) => StreamEvent::Closed,
                    Ok(n) => StreamEvent::Chunk(chunk[..n].to_vec()),
                    Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                    Err(e) => StreamEvent::Failed(e),
                };
                let done = !matches!(event, StreamEvent::Chunk(_));
                // The receiver hung up after a timeout; nobody is listening.
                if tx.send(event).is_err() || done {
                    break;
                }
            }
        });
        rx
    }

    fn no_input(&self) -> MineError {
        MineError::NoInput {
            waited_ms: u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX),
        }
    }
}

impl<R: Read + Send + 'static> TextSource for StreamSource<R> {
    fn read_text(&self) -> Result<String> {
        let reader = self
            .reader
            .lock()
            .ok()
            .and_then(|mut slot| slot.take())
            .ok_or_else(|| self.no_input())?;

        let rx = Self::spawn_reader(reader);
        let deadline = Instant::now() + self.timeout;
        let mut buffer: Vec<u8> = Vec::new();

        loop {
            let event = if buffer.is_empty() {
                let remaining = deadline.saturating_duration_since(Instant::now());
                match rx.recv_timeout(remaining) {
                    Ok(event) => event,
                    Err(RecvTimeoutError::Timeout) => return Err(self.no_input()),
                    Err(RecvTimeoutError::Disconnected) => StreamEvent::Closed,
                }
            } else {
                rx.recv().unwrap_or(StreamEvent::Closed)
            };

            match event {
                StreamEvent::Chunk(bytes) => {
                    debug!(bytes = bytes.len(), "input chunk");
                    buffer.extend_from_slice(&bytes);
                }
                StreamEvent::Closed => break,
                StreamEvent::Failed(e) => return Err(MineError::Read(e)),
            }
        }

        if buffer.is_empty() {
            return Err(self.no_input());
        }
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}
