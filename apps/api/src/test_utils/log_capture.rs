//! In-memory log sink for asserting on emitted tracing events.

use std::io;
use std::sync::{Arc, Mutex};

use tracing::Subscriber;

/// Collects formatted log lines written by a `fmt` subscriber.
///
/// ```ignore
/// let logs = LogCapture::new();
/// let _guard = tracing::subscriber::set_default(logs.subscriber());
/// // ... exercise code ...
/// assert!(logs.contents().contains("ERROR"));
/// ```
#[derive(Clone, Default)]
pub struct LogCapture {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl LogCapture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Plain-text subscriber writing every event at DEBUG and above into this capture.
    pub fn subscriber(&self) -> impl Subscriber + Send + Sync + 'static {
        let sink = self.clone();
        tracing_subscriber::fmt()
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(move || sink.clone())
            .finish()
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buf.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.lock().unwrap().extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
