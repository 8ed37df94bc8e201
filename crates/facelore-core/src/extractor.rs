//! Face feature extraction.
//!
//! Turns a raster image into the fixed-shape [`FaceFeatures`] vector. This
//! stage never fails: an unreadable image, an image without a detectable
//! face, or a degenerate numeric case all degrade to the canonical default
//! vector, so every input yields a complete report downstream.

use crate::detector;
use crate::types::FaceFeatures;
use image::{DynamicImage, GrayImage};
use ndarray::Array2;
use thiserror::Error;

/// Sobel gradient magnitudes above this count as edge pixels.
const EDGE_MAGNITUDE_THRESHOLD: f32 = 200.0;
/// Symmetry fallback when a half-face has no variance to correlate.
const SYMMETRY_FALLBACK: f64 = 0.8;
/// Texture fallback when the crop is too small for a Laplacian response.
const TEXTURE_FALLBACK: f64 = 100.0;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("empty input")]
    EmptyInput,
    #[error("image decode failed: {0}")]
    ImageDecode(#[from] image::ImageError),
}

/// Decode raw image bytes into a raster image.
pub fn decode(bytes: &[u8]) -> Result<DynamicImage, DecodeError> {
    if bytes.is_empty() {
        return Err(DecodeError::EmptyInput);
    }
    Ok(image::load_from_memory(bytes)?)
}

/// Extract features from encoded image bytes. Total: decode failure
/// degrades to the canonical default vector.
pub fn extract_bytes(bytes: &[u8]) -> FaceFeatures {
    match decode(bytes) {
        Ok(img) => extract(&img),
        Err(err) => {
            tracing::warn!(error = %err, "image unreadable, using default features");
            FaceFeatures::canonical_default()
        }
    }
}

/// Extract features from a decoded image. Total: no detectable face
/// degrades to the canonical default vector.
pub fn extract(image: &DynamicImage) -> FaceFeatures {
    let gray = image.to_luma8();

    let faces = detector::detect(&gray);
    let Some(face) = faces.first() else {
        tracing::debug!("no face detected, using default features");
        return FaceFeatures::canonical_default();
    };

    let Some(region) = crop_region(&gray, face) else {
        tracing::debug!("face box degenerate, using default features");
        return FaceFeatures::canonical_default();
    };

    let features = compute_features(&region);
    tracing::debug!(
        face_ratio = features.face_ratio,
        brightness = features.brightness,
        contrast = features.contrast,
        symmetry = features.symmetry,
        "face features extracted"
    );
    features
}

/// Crop the detected box out of the grayscale image, clamped to bounds.
/// Returns `None` when the clamped region is too small to measure.
fn crop_region(gray: &GrayImage, face: &detector::FaceBox) -> Option<Array2<f32>> {
    let img_w = gray.width() as i64;
    let img_h = gray.height() as i64;
    if img_w == 0 || img_h == 0 {
        return None;
    }

    let x = (face.x.round() as i64).clamp(0, img_w - 1);
    let y = (face.y.round() as i64).clamp(0, img_h - 1);
    let w = (face.width.round() as i64).min(img_w - x);
    let h = (face.height.round() as i64).min(img_h - y);

    if w < 4 || h < 4 {
        return None;
    }

    let (x, y, w, h) = (x as u32, y as u32, w as usize, h as usize);
    Some(Array2::from_shape_fn((h, w), |(r, c)| {
        f32::from(gray.get_pixel(x + c as u32, y + r as u32).0[0])
    }))
}

/// Compute the feature vector from a cropped grayscale face region.
pub(crate) fn compute_features(region: &Array2<f32>) -> FaceFeatures {
    let (h, w) = region.dim();

    let face_ratio = if h > 0 { w as f64 / h as f64 } else { 1.0 };
    let brightness = f64::from(region.mean().unwrap_or(127.0));

    let mean = brightness as f32;
    let variance = region.mapv(|v| (v - mean) * (v - mean)).mean().unwrap_or(0.0);
    let contrast = f64::from(variance.sqrt());

    let texture = laplacian_variance(region).unwrap_or(TEXTURE_FALLBACK);
    let symmetry = half_face_correlation(region).unwrap_or(SYMMETRY_FALLBACK);
    let edge_density = sobel_edge_density(region);

    FaceFeatures {
        face_ratio,
        brightness,
        contrast,
        texture,
        symmetry,
        edge_density,
        face_width: w as u32,
        face_height: h as u32,
    }
}

/// Variance of the 4-neighbor Laplacian response over the region interior.
/// Approximates sharpness/complexity of the face texture.
fn laplacian_variance(region: &Array2<f32>) -> Option<f64> {
    let (h, w) = region.dim();
    if h < 3 || w < 3 {
        return None;
    }

    let mut responses = Vec::with_capacity((h - 2) * (w - 2));
    for r in 1..h - 1 {
        for c in 1..w - 1 {
            let l = 4.0 * region[[r, c]]
                - region[[r - 1, c]]
                - region[[r + 1, c]]
                - region[[r, c - 1]]
                - region[[r, c + 1]];
            responses.push(f64::from(l));
        }
    }

    let n = responses.len() as f64;
    let mean = responses.iter().sum::<f64>() / n;
    Some(responses.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n)
}

/// Pearson correlation between the left half and the horizontally mirrored
/// right half, truncated to equal width. `None` when either half has zero
/// variance (correlation is undefined on a flat region).
fn half_face_correlation(region: &Array2<f32>) -> Option<f64> {
    let (h, w) = region.dim();
    let half = w / 2;
    if half < 2 {
        return None;
    }

    let mut left = Vec::with_capacity(h * half);
    let mut right = Vec::with_capacity(h * half);
    for r in 0..h {
        for c in 0..half {
            left.push(f64::from(region[[r, c]]));
            // Mirrored right half: column j maps to original column w-1-j.
            right.push(f64::from(region[[r, w - 1 - c]]));
        }
    }

    pearson(&left, &right)
}

fn pearson(a: &[f64], b: &[f64]) -> Option<f64> {
    let n = a.len() as f64;
    let mean_a = a.iter().sum::<f64>() / n;
    let mean_b = b.iter().sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_a = 0.0;
    let mut var_b = 0.0;
    for (&x, &y) in a.iter().zip(b) {
        cov += (x - mean_a) * (y - mean_b);
        var_a += (x - mean_a) * (x - mean_a);
        var_b += (y - mean_b) * (y - mean_b);
    }

    let denom = (var_a * var_b).sqrt();
    if denom < f64::EPSILON {
        return None;
    }
    Some(cov / denom)
}

/// Fraction of region pixels whose Sobel gradient magnitude crosses the
/// edge threshold.
fn sobel_edge_density(region: &Array2<f32>) -> f64 {
    let (h, w) = region.dim();
    if h < 3 || w < 3 {
        return 0.0;
    }

    let mut edge_count = 0usize;
    for r in 1..h - 1 {
        for c in 1..w - 1 {
            let gx = region[[r - 1, c + 1]] + 2.0 * region[[r, c + 1]] + region[[r + 1, c + 1]]
                - region[[r - 1, c - 1]]
                - 2.0 * region[[r, c - 1]]
                - region[[r + 1, c - 1]];
            let gy = region[[r + 1, c - 1]] + 2.0 * region[[r + 1, c]] + region[[r + 1, c + 1]]
                - region[[r - 1, c - 1]]
                - 2.0 * region[[r - 1, c]]
                - region[[r - 1, c + 1]];
            if (gx * gx + gy * gy).sqrt() > EDGE_MAGNITUDE_THRESHOLD {
                edge_count += 1;
            }
        }
    }

    edge_count as f64 / (h * w) as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    #[test]
    fn test_undecodable_bytes_yield_default() {
        let features = extract_bytes(b"definitely not an image");
        assert_eq!(features, FaceFeatures::canonical_default());
    }

    #[test]
    fn test_empty_bytes_yield_default() {
        assert_eq!(extract_bytes(&[]), FaceFeatures::canonical_default());
    }

    #[test]
    fn test_faceless_image_yields_default() {
        let img = DynamicImage::ImageLuma8(GrayImage::from_pixel(200, 200, Luma([127u8])));
        assert_eq!(extract(&img), FaceFeatures::canonical_default());
    }

    #[test]
    fn test_default_path_is_bit_identical() {
        let a = extract_bytes(b"garbage");
        let b = extract_bytes(b"garbage");
        assert_eq!(a, b);
    }

    #[test]
    fn test_compute_features_on_uniform_region_guards_symmetry() {
        // Flat region: Pearson denominator is zero — must take the guarded
        // fallback instead of NaN.
        let region = Array2::from_elem((50, 40), 90.0f32);
        let features = compute_features(&region);
        assert_eq!(features.symmetry, 0.8);
        assert!((features.brightness - 90.0).abs() < 1e-3);
        assert!(features.contrast < 1e-3);
        assert_eq!(features.edge_density, 0.0);
    }

    #[test]
    fn test_compute_features_mirrored_region_is_symmetric() {
        // Left half noise mirrored onto the right half: correlation ≈ 1.
        let mut region = Array2::zeros((40, 40));
        for r in 0..40usize {
            for c in 0..20usize {
                let v = ((r * 31 + c * 17) % 97) as f32 + 60.0;
                region[[r, c]] = v;
                region[[r, 39 - c]] = v;
            }
        }
        let features = compute_features(&region);
        assert!(features.symmetry > 0.99, "symmetry = {}", features.symmetry);
    }

    #[test]
    fn test_compute_features_ratio_and_size() {
        let region = Array2::from_shape_fn((235, 200), |(r, c)| ((r + c) % 128) as f32);
        let features = compute_features(&region);
        assert!((features.face_ratio - 200.0 / 235.0).abs() < 1e-9);
        assert_eq!(features.face_width, 200);
        assert_eq!(features.face_height, 235);
        assert!(features.face_ratio > 0.0);
        assert!((0.0..=255.0).contains(&features.brightness));
        assert!((0.0..=1.0).contains(&features.edge_density));
        assert!((-1.0..=1.0).contains(&features.symmetry));
    }

    #[test]
    fn test_pearson_perfect_correlation() {
        let a = [1.0, 2.0, 3.0, 4.0];
        let b = [2.0, 4.0, 6.0, 8.0];
        let r = pearson(&a, &b).unwrap();
        assert!((r - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_pearson_flat_input_is_undefined() {
        let a = [5.0, 5.0, 5.0];
        let b = [1.0, 2.0, 3.0];
        assert!(pearson(&a, &b).is_none());
    }

    #[test]
    fn test_extract_synthetic_face() {
        // Same pattern the detector targets: bright canvas, dark eye band.
        let mut img = GrayImage::from_pixel(120, 144, Luma([180u8]));
        for y in 28..64 {
            for x in 0..120 {
                img.put_pixel(x, y, Luma([80u8]));
            }
        }
        let features = extract(&DynamicImage::ImageLuma8(img));
        // A face was found: features must come from the crop, not the default.
        assert_ne!(features, FaceFeatures::canonical_default());
        assert!(features.symmetry > 0.9, "symmetry = {}", features.symmetry);
        assert!(features.brightness > 80.0 && features.brightness < 200.0);
        assert!(features.contrast > 0.0);
    }
}
