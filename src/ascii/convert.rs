//! Conversion orchestration: validation, worker fan-out and row assembly.

use std::num::NonZeroUsize;
use std::thread;

use super::buffer::PixelBuffer;
use super::error::{ConvertError, Status};
use super::partition::{row_owner, worker_count};
use super::windowed::WindowGeometry;
use super::{plain, windowed};

/// Line terminator placed after every output row.
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
/// Line terminator placed after every output row.
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Conversion mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// One glyph per pixel
    Plain,
    /// One glyph per `window_size x window_size` block
    Windowed { window_size: usize },
}

impl Mode {
    /// Build a mode from the boolean compression flag. `window_size` is
    /// ignored when `compress` is false.
    pub fn from_flags(compress: bool, window_size: usize) -> Self {
        if compress {
            Mode::Windowed { window_size }
        } else {
            Mode::Plain
        }
    }
}

/// A pixel buffer paired with the mode to convert it with.
#[derive(Debug, Clone, Copy)]
pub struct ConversionRequest<'a> {
    pub pixels: &'a PixelBuffer,
    pub mode: Mode,
}

/// Tuning knobs that do not affect the produced text.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConvertOptions {
    /// Worker count override. `None` uses the available parallelism.
    pub workers: Option<NonZeroUsize>,
}

impl ConvertOptions {
    fn resolved_workers(&self) -> usize {
        self.workers.map(NonZeroUsize::get).unwrap_or_else(worker_count)
    }
}

/// Converted rows in output order, without line terminators.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputRows {
    rows: Vec<String>,
}

impl OutputRows {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Join rows in index order, terminating each with [`LINE_ENDING`].
    pub fn into_text(self) -> String {
        let capacity = self
            .rows
            .iter()
            .map(|row| row.len() + LINE_ENDING.len())
            .sum();
        let mut text = String::with_capacity(capacity);
        for row in &self.rows {
            text.push_str(row);
            text.push_str(LINE_ENDING);
        }
        text
    }
}

/// Result of [`convert`]: a status code and, when the status is OK, the text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionResult {
    pub status: Status,
    pub data: String,
}

impl ConversionResult {
    /// A result that has not been finalized yet.
    pub fn pending() -> Self {
        Self::default()
    }

    fn finish(&mut self, outcome: Result<OutputRows, ConvertError>) {
        match outcome {
            Ok(rows) => {
                self.status = Status::Ok;
                self.data = rows.into_text();
            }
            Err(e) => {
                self.status = e.status();
                self.data.clear();
            }
        }
    }
}

/// Convert `pixels` to ASCII art.
///
/// With `compress` false every pixel becomes one glyph and `window_size` is
/// ignored. With `compress` true, `window_size` must be odd, greater than 1
/// and fit inside the image, or the result carries `Status::BadParameters`.
pub fn convert(pixels: &PixelBuffer, compress: bool, window_size: usize) -> ConversionResult {
    let request = ConversionRequest {
        pixels,
        mode: Mode::from_flags(compress, window_size),
    };
    let mut result = ConversionResult::pending();
    result.finish(convert_rows(&request, &ConvertOptions::default()));
    result
}

/// Convert a request into ordered output rows.
///
/// All parameter checks run before any worker is started. Each worker
/// renders the rows it owns under [`row_owner`]; a failing worker fails the
/// whole request.
pub fn convert_rows(
    request: &ConversionRequest<'_>,
    options: &ConvertOptions,
) -> Result<OutputRows, ConvertError> {
    convert_rows_with(request, options, |rows, workers, render_row| {
        run_workers(rows, workers, render_row)
    })
}

/// Row renderer handed to a worker pool.
type RenderRow<'a> = dyn Fn(usize, &mut String) + Sync + 'a;

/// Validate `request`, then hand the row count and renderer to `run`.
///
/// `run` is only invoked once validation has passed.
fn convert_rows_with<R>(
    request: &ConversionRequest<'_>,
    options: &ConvertOptions,
    run: R,
) -> Result<OutputRows, ConvertError>
where
    R: FnOnce(usize, usize, &RenderRow<'_>) -> Result<OutputRows, ConvertError>,
{
    let pixels = request.pixels;
    let workers = options.resolved_workers();

    match request.mode {
        Mode::Plain => {
            log::debug!(
                "plain conversion: {}x{} pixels across {} workers",
                pixels.width(),
                pixels.height(),
                workers
            );
            run(pixels.height(), workers, &|row, line| {
                plain::render_row(pixels, row, line)
            })
        }
        Mode::Windowed { window_size } => {
            let geometry = WindowGeometry::new(pixels.width(), pixels.height(), window_size)?;
            log::debug!(
                "windowed conversion: window {} -> {}x{} glyphs across {} workers",
                geometry.window(),
                geometry.columns(),
                geometry.rows(),
                workers
            );
            run(geometry.rows(), workers, &|row, line| {
                windowed::render_row(pixels, &geometry, row, line)
            })
        }
    }
}

/// Fan `row_count` rows out over `workers` scoped threads.
///
/// Every slot is handed to exactly one worker as a `&mut`, so no locking is
/// involved. Rows are read back by index after all workers are joined.
fn run_workers<F>(row_count: usize, workers: usize, render_row: F) -> Result<OutputRows, ConvertError>
where
    F: Fn(usize, &mut String) + Sync,
{
    let workers = workers.max(1);
    let mut slots = vec![String::new(); row_count];

    let mut partitions: Vec<Vec<(usize, &mut String)>> = (0..workers).map(|_| Vec::new()).collect();
    for (row, slot) in slots.iter_mut().enumerate() {
        partitions[row_owner(row, workers)].push((row, slot));
    }

    let render_row = &render_row;
    let outcome = thread::scope(|scope| {
        let handles: Vec<_> = partitions
            .into_iter()
            .enumerate()
            .map(|(id, assigned)| {
                thread::Builder::new()
                    .name(format!("ascii-worker-{}", id))
                    .spawn_scoped(scope, move || {
                        for (row, line) in assigned {
                            render_row(row, line);
                        }
                    })
            })
            .collect();

        // Join every handle explicitly so a panicking worker is reported
        // instead of re-raised when the scope ends.
        let mut outcome = Ok(());
        for (id, handle) in handles.into_iter().enumerate() {
            let joined = match handle {
                Ok(handle) => handle.join().map_err(|_| ConvertError::WorkerFailed { worker: id }),
                Err(e) => Err(ConvertError::WorkerSpawn(e)),
            };
            if let Err(e) = joined {
                log::warn!("conversion worker {} failed: {}", id, e);
                if outcome.is_ok() {
                    outcome = Err(e);
                }
            }
        }
        outcome
    });
    outcome?;

    log::info!("converted {} rows with {} workers", row_count, workers);
    Ok(OutputRows { rows: slots })
}
