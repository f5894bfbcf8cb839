// Resize diagnostics go through `tracing`; capture them with a scoped
// subscriber and check growth is reported once per doubling.
use chained_hashmap::ChainedMap;
use std::io;
use std::sync::{Arc, Mutex};
use tracing::Level;

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl io::Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn each_doubling_is_logged() {
    let capture = Capture::default();
    let writer = capture.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let mut m = ChainedMap::new();
        // 16 -> 32 -> 64
        for i in 0..25 {
            m.set(format!("k{i}"), i);
        }
        assert_eq!(m.bucket_count(), 64);
    });

    let out = String::from_utf8(capture.0.lock().unwrap().clone()).unwrap();
    assert_eq!(out.matches("growing chained table").count(), 2, "{out}");
    assert!(out.contains("new_buckets=32"), "{out}");
    assert!(out.contains("new_buckets=64"), "{out}");
}
