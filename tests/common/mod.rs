//! Shared helpers for the integration tests

#![allow(dead_code)]

use std::cell::RefCell;
use std::sync::Once;

use log::{Level, LevelFilter, Log, Metadata, Record};

use dataset_vision::Tensor;

thread_local! {
    static CAPTURED: RefCell<Vec<(Level, String)>> = RefCell::new(Vec::new());
}

/// Records every log line on the thread that emitted it, so tests running in
/// parallel only see their own output.
struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        CAPTURED.with(|lines| lines.borrow_mut().push((record.level(), record.args().to_string())));
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;
static INIT: Once = Once::new();

/// Installs the capturing logger (once per test binary) and clears this thread's buffer.
pub fn capture_logs() {
    INIT.call_once(|| {
        log::set_logger(&LOGGER).expect("logger already installed");
        log::set_max_level(LevelFilter::Trace);
    });
    CAPTURED.with(|lines| lines.borrow_mut().clear());
}

/// Error lines logged on this thread since the last `capture_logs()`
pub fn error_lines() -> Vec<String> {
    CAPTURED.with(|lines| {
        lines
            .borrow()
            .iter()
            .filter(|(level, _)| *level == Level::Error)
            .map(|(_, line)| line.clone())
            .collect()
    })
}

pub fn debug_lines() -> Vec<String> {
    CAPTURED.with(|lines| {
        lines
            .borrow()
            .iter()
            .filter(|(level, _)| *level == Level::Debug)
            .map(|(_, line)| line.clone())
            .collect()
    })
}

/// U8 HWC image where every pixel of row `y`, column `x` is `(y, x, y + x)`
pub fn gradient_image(height: usize, width: usize) -> Tensor {
    let mut data = Vec::with_capacity(height * width * 3);
    for y in 0..height {
        for x in 0..width {
            data.extend_from_slice(&[y as u8, x as u8, (y + x) as u8]);
        }
    }
    Tensor::from_u8(vec![height, width, 3], data).unwrap()
}

/// PNG bytes for a `gradient_image`
pub fn encoded_png(height: usize, width: usize) -> Vec<u8> {
    let tensor = gradient_image(height, width);
    let image = tensor.to_dynamic_image().unwrap();
    let mut bytes = std::io::Cursor::new(Vec::new());
    image.write_to(&mut bytes, image::ImageFormat::Png).unwrap();
    bytes.into_inner()
}
