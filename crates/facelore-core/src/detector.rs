//! Classical frontal-face detector.
//!
//! Model-free Haar-cascade-style detection: a multi-scale sliding window is
//! scored with integral-image region contrasts (eye band darker than the
//! lower face, left/right balance, variance gate), then overlapping
//! candidates are removed with IoU-based NMS and the survivors are sorted
//! by confidence. Only axis-aligned frontal faces are targeted; downstream
//! stages use the first returned box.

use image::imageops::FilterType;
use image::GrayImage;

// --- Named constants (no magic numbers) ---
const MIN_WINDOW: u32 = 40;
const SCALE_STEP: f32 = 1.25;
/// Face windows are slightly taller than wide.
const WINDOW_ASPECT: f32 = 1.2;
const CONFIDENCE_THRESHOLD: f32 = 0.5;
const NMS_IOU_THRESHOLD: f32 = 0.3;
/// Windows with less grayscale variance than this are flat background.
const MIN_WINDOW_VARIANCE: f32 = 150.0;
/// Images wider than this are scanned at reduced resolution.
const WORKING_WIDTH: u32 = 320;

/// Detected face region in original-image coordinates.
#[derive(Debug, Clone)]
pub struct FaceBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub confidence: f32,
}

/// Summed-area tables for O(1) region mean and variance.
struct IntegralImage {
    width: usize,
    height: usize,
    /// (width+1) × (height+1), row-major, zero border.
    sum: Vec<u64>,
    sq_sum: Vec<u64>,
}

impl IntegralImage {
    fn build(gray: &GrayImage) -> Self {
        let width = gray.width() as usize;
        let height = gray.height() as usize;
        let stride = width + 1;
        let mut sum = vec![0u64; stride * (height + 1)];
        let mut sq_sum = vec![0u64; stride * (height + 1)];

        let raw = gray.as_raw();
        for y in 0..height {
            let mut row = 0u64;
            let mut row_sq = 0u64;
            for x in 0..width {
                let v = u64::from(raw[y * width + x]);
                row += v;
                row_sq += v * v;
                sum[(y + 1) * stride + (x + 1)] = sum[y * stride + (x + 1)] + row;
                sq_sum[(y + 1) * stride + (x + 1)] = sq_sum[y * stride + (x + 1)] + row_sq;
            }
        }

        Self { width, height, sum, sq_sum }
    }

    /// Sum over the rectangle at (x, y) with size w × h. Must be in bounds.
    fn rect_sum(&self, x: usize, y: usize, w: usize, h: usize) -> u64 {
        let stride = self.width + 1;
        debug_assert!(x + w <= self.width && y + h <= self.height);
        self.sum[(y + h) * stride + (x + w)] + self.sum[y * stride + x]
            - self.sum[y * stride + (x + w)]
            - self.sum[(y + h) * stride + x]
    }

    fn rect_sq_sum(&self, x: usize, y: usize, w: usize, h: usize) -> u64 {
        let stride = self.width + 1;
        self.sq_sum[(y + h) * stride + (x + w)] + self.sq_sum[y * stride + x]
            - self.sq_sum[y * stride + (x + w)]
            - self.sq_sum[(y + h) * stride + x]
    }

    fn rect_mean(&self, x: usize, y: usize, w: usize, h: usize) -> f32 {
        let n = (w * h) as f32;
        self.rect_sum(x, y, w, h) as f32 / n
    }

    fn rect_variance(&self, x: usize, y: usize, w: usize, h: usize) -> f32 {
        let n = (w * h) as f32;
        let mean = self.rect_sum(x, y, w, h) as f32 / n;
        self.rect_sq_sum(x, y, w, h) as f32 / n - mean * mean
    }
}

/// Detect frontal faces, returning boxes sorted by confidence (best first).
pub fn detect(gray: &GrayImage) -> Vec<FaceBox> {
    // Scan at reduced resolution for large inputs; map boxes back afterward.
    let (scan, scale) = if gray.width() > WORKING_WIDTH {
        let scale = gray.width() as f32 / WORKING_WIDTH as f32;
        let h = (gray.height() as f32 / scale).round().max(1.0) as u32;
        (
            image::imageops::resize(gray, WORKING_WIDTH, h, FilterType::Triangle),
            scale,
        )
    } else {
        (gray.clone(), 1.0)
    };

    let integral = IntegralImage::build(&scan);
    let candidates = scan_windows(&integral);

    let mut result = nms(candidates, NMS_IOU_THRESHOLD);
    result.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    if scale != 1.0 {
        for b in &mut result {
            b.x *= scale;
            b.y *= scale;
            b.width *= scale;
            b.height *= scale;
        }
    }

    tracing::debug!(faces = result.len(), "face detection finished");
    result
}

/// Slide windows over all scales, scoring each against the face heuristics.
fn scan_windows(integral: &IntegralImage) -> Vec<FaceBox> {
    let mut candidates = Vec::new();

    let mut w = MIN_WINDOW as usize;
    loop {
        let h = (w as f32 * WINDOW_ASPECT).round() as usize;
        if w > integral.width || h > integral.height {
            break;
        }

        let step = (w / 8).max(2);
        let mut y = 0;
        while y + h <= integral.height {
            let mut x = 0;
            while x + w <= integral.width {
                let confidence = score_window(integral, x, y, w, h);
                if confidence > CONFIDENCE_THRESHOLD {
                    candidates.push(FaceBox {
                        x: x as f32,
                        y: y as f32,
                        width: w as f32,
                        height: h as f32,
                        confidence,
                    });
                }
                x += step;
            }
            y += step;
        }

        let next = (w as f32 * SCALE_STEP).round() as usize;
        if next == w {
            break;
        }
        w = next;
    }

    candidates
}

/// Score one window against the frontal-face heuristics.
///
/// A face window shows a dark horizontal eye band above a brighter
/// mouth/cheek band, and near-equal left/right halves. Flat windows are
/// rejected outright by the variance gate.
fn score_window(integral: &IntegralImage, x: usize, y: usize, w: usize, h: usize) -> f32 {
    if integral.rect_variance(x, y, w, h) < MIN_WINDOW_VARIANCE {
        return 0.0;
    }

    let band = |top: f32, bottom: f32| -> f32 {
        let by = y + (h as f32 * top) as usize;
        let bh = ((h as f32 * (bottom - top)) as usize).max(1);
        integral.rect_mean(x, by, w, bh.min(y + h - by))
    };

    let eye_mean = band(0.20, 0.45);
    let lower_mean = band(0.55, 0.85);
    // A 100-point brightness gap saturates the cue.
    let eyes_darker = ((lower_mean - eye_mean) / 100.0).clamp(0.0, 1.0);

    let half = w / 2;
    let left_mean = integral.rect_mean(x, y, half, h);
    let right_mean = integral.rect_mean(x + w - half, y, half, h);
    let balance = (1.0 - (left_mean - right_mean).abs() / 64.0).clamp(0.0, 1.0);

    0.6 * eyes_darker + 0.4 * balance
}

/// Non-Maximum Suppression: greedily keep the most confident remaining box
/// and drop everything that overlaps it past the threshold.
fn nms(mut candidates: Vec<FaceBox>, iou_threshold: f32) -> Vec<FaceBox> {
    // Ascending, so pop() hands back the most confident candidate.
    candidates.sort_by(|a, b| {
        a.confidence
            .partial_cmp(&b.confidence)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut keep = Vec::new();
    while let Some(best) = candidates.pop() {
        candidates.retain(|c| iou(&best, c) <= iou_threshold);
        keep.push(best);
    }
    keep
}

/// Intersection-over-Union between two boxes.
fn iou(a: &FaceBox, b: &FaceBox) -> f32 {
    let span = |a0: f32, al: f32, b0: f32, bl: f32| ((a0 + al).min(b0 + bl) - a0.max(b0)).max(0.0);

    let inter = span(a.x, a.width, b.x, b.width) * span(a.y, a.height, b.y, b.height);
    let union = a.width * a.height + b.width * b.height - inter;
    if union <= 0.0 {
        return 0.0;
    }
    inter / union
}
