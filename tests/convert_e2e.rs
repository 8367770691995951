//! End-to-end tests for the conversion entry points.
//!
//! These tests verify:
//! - Output dimensions in plain and windowed mode
//! - Determinism across worker counts
//! - Solid-colour boundaries and the mid-grey windowed scenario
//! - Parameter rejection before any conversion happens

use pic2ascii::ascii::{
    convert, convert_rows, ConversionRequest, ConvertOptions, Mode, PixelBuffer, Status,
    LINE_ENDING,
};
use std::num::NonZeroUsize;

/// Helper to create a test image with the specified pattern.
fn make_image(pattern: &str, width: usize, height: usize) -> PixelBuffer {
    let mut data = Vec::with_capacity(width * height * 3);
    for y in 0..height {
        for x in 0..width {
            let bgr = match pattern {
                "black" => [0, 0, 0],
                "white" => [255, 255, 255],
                "grey" => [128, 128, 128],
                "gradient_h" => {
                    let v = ((x * 255) / width.max(1)) as u8;
                    [v, v, v]
                }
                "noise" => {
                    // Cheap deterministic hash so every pixel differs
                    let h = (x * 73 + y * 151 + x * y * 7) % 256;
                    [h as u8, (h * 3 % 256) as u8, (h * 5 % 256) as u8]
                }
                _ => panic!("unknown pattern {}", pattern),
            };
            data.extend_from_slice(&bgr);
        }
    }
    PixelBuffer::from_bgr(data, width, height).unwrap()
}

fn lines(text: &str) -> Vec<&str> {
    text.split_terminator(LINE_ENDING).collect()
}

fn with_workers(n: usize) -> ConvertOptions {
    ConvertOptions {
        workers: NonZeroUsize::new(n),
    }
}

// ==================== Plain Mode ====================

#[test]
fn test_plain_dimensions() {
    let image = make_image("noise", 37, 23);
    let result = convert(&image, false, 0);
    assert_eq!(result.status, Status::Ok);

    let rows = lines(&result.data);
    assert_eq!(rows.len(), 23);
    for row in rows {
        assert_eq!(row.chars().count(), 37);
    }
}

#[test]
fn test_plain_ignores_window_size() {
    let image = make_image("gradient_h", 10, 4);
    let a = convert(&image, false, 4);
    let b = convert(&image, false, 3);
    assert_eq!(a.status, Status::Ok);
    assert_eq!(a, b);
}

#[test]
fn test_plain_black_is_all_hash() {
    let image = make_image("black", 12, 5);
    let result = convert(&image, false, 1);
    assert_eq!(result.status, Status::Ok);
    assert!(lines(&result.data).iter().all(|row| row.chars().all(|c| c == '#')));
}

#[test]
fn test_plain_white_is_all_blank() {
    let image = make_image("white", 12, 5);
    let result = convert(&image, false, 1);
    assert_eq!(result.status, Status::Ok);
    let rows = lines(&result.data);
    assert_eq!(rows.len(), 5);
    assert!(rows.iter().all(|row| *row == " ".repeat(12)));
}

#[test]
fn test_plain_gradient_gets_lighter_left_to_right() {
    let image = make_image("gradient_h", 50, 1);
    let result = convert(&image, false, 0);
    let row = lines(&result.data)[0];
    assert!(row.starts_with('#'));
    assert!(row.ends_with(' '));
}

#[test]
fn test_empty_image_plain() {
    let image = PixelBuffer::from_bgr(Vec::new(), 0, 0).unwrap();
    let result = convert(&image, false, 0);
    assert_eq!(result.status, Status::Ok);
    assert!(result.data.is_empty());
}

// ==================== Windowed Mode ====================

#[test]
fn test_windowed_dimensions() {
    let image = make_image("noise", 47, 31);
    for window in [3usize, 5, 7, 9] {
        let result = convert(&image, true, window);
        assert_eq!(result.status, Status::Ok, "window {}", window);

        let rows = lines(&result.data);
        assert_eq!(rows.len(), 31 / window);
        for row in rows {
            assert_eq!(row.chars().count(), 47 / window);
        }
    }
}

#[test]
fn test_windowed_mid_grey_scenario() {
    // 4x4 mid grey, window 3: one block, trailing row and column clipped
    let image = make_image("grey", 4, 4);
    let result = convert(&image, true, 3);
    assert_eq!(result.status, Status::Ok);
    assert_eq!(result.data, format!("={}", LINE_ENDING));
}

#[test]
fn test_windowed_even_window_bad_parameters() {
    let image = make_image("grey", 16, 16);
    let result = convert(&image, true, 4);
    assert_eq!(result.status, Status::BadParameters);
    assert_eq!(result.status.code(), 3);
    assert!(result.data.is_empty());
}

#[test]
fn test_windowed_too_small_image_bad_parameters() {
    let image = make_image("grey", 2, 2);
    let result = convert(&image, true, 3);
    assert_eq!(result.status, Status::BadParameters);
    assert!(result.data.is_empty());
}

#[test]
fn test_windowed_window_of_one_bad_parameters() {
    let image = make_image("grey", 8, 8);
    assert_eq!(convert(&image, true, 1).status, Status::BadParameters);
    assert_eq!(convert(&image, true, 0).status, Status::BadParameters);
}

#[test]
fn test_windowed_black_and_white() {
    let black = convert(&make_image("black", 9, 9), true, 3);
    assert_eq!(black.data, format!("###{0}###{0}###{0}", LINE_ENDING));

    let white = convert(&make_image("white", 9, 9), true, 3);
    assert!(lines(&white.data).iter().all(|row| *row == "   "));
}

// ==================== Determinism ====================

#[test]
fn test_output_identical_across_worker_counts() {
    let image = make_image("noise", 101, 67);
    for mode in [Mode::Plain, Mode::Windowed { window_size: 5 }] {
        let request = ConversionRequest {
            pixels: &image,
            mode,
        };
        let reference = convert_rows(&request, &with_workers(1)).unwrap();
        for workers in [2, 3, 4, 7, 16, 200] {
            let rows = convert_rows(&request, &with_workers(workers)).unwrap();
            assert_eq!(rows, reference, "mode {:?}, workers {}", mode, workers);
        }
    }
}

#[test]
fn test_repeated_calls_identical() {
    let image = make_image("noise", 64, 48);
    let first = convert(&image, true, 3);
    for _ in 0..5 {
        assert_eq!(convert(&image, true, 3), first);
    }
}

#[test]
fn test_convert_rows_matches_convert_text() {
    let image = make_image("noise", 30, 20);
    let request = ConversionRequest {
        pixels: &image,
        mode: Mode::Windowed { window_size: 3 },
    };
    let rows = convert_rows(&request, &ConvertOptions::default()).unwrap();
    assert_eq!(rows.len(), 6);
    assert_eq!(rows.into_text(), convert(&image, true, 3).data);
}
