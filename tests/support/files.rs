use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static TEMP_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Unique path in the system temp dir; the file is not created.
pub fn temp_path(prefix: &str, extension: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let suffix = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    path.push(format!("propedge-{prefix}-{nanos}-{suffix}.{extension}"));
    path
}

pub fn write_temp(prefix: &str, extension: &str, contents: &str) -> PathBuf {
    let path = temp_path(prefix, extension);
    fs::write(&path, contents).expect("write temp file");
    path
}
