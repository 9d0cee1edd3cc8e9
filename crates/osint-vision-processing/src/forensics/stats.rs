//! Grayscale image statistics

use image::GrayImage;
use imageproc::edges::canny;
use osint_vision_core::models::ImageAnalysis;

/// Laplacian variance below which the image counts as blurred.
pub const BLUR_THRESHOLD: f64 = 100.0;

const CANNY_LOW: f32 = 50.0;
const CANNY_HIGH: f32 = 150.0;
const ENTROPY_EPSILON: f64 = 1e-7;

pub fn analyze_gray(gray: &GrayImage) -> ImageAnalysis {
    let blur_score = laplacian_variance(gray);
    let (brightness, contrast) = brightness_and_contrast(gray);

    ImageAnalysis {
        blur_detected: blur_score < BLUR_THRESHOLD,
        blur_score,
        edge_density: edge_density(gray),
        histogram_entropy: histogram_entropy(gray),
        brightness,
        contrast,
    }
}

/// Variance of the 4-neighbour Laplacian response, mirroring across the
/// border without repeating the edge pixel.
pub fn laplacian_variance(gray: &GrayImage) -> f64 {
    let (width, height) = gray.dimensions();
    if width == 0 || height == 0 {
        return 0.0;
    }

    let at = |x: i64, y: i64| -> i64 {
        let x = reflect_101(x, width);
        let y = reflect_101(y, height);
        i64::from(gray.get_pixel(x, y)[0])
    };

    let mut moments = Moments::default();
    for y in 0..i64::from(height) {
        for x in 0..i64::from(width) {
            moments.push(
                at(x - 1, y) + at(x + 1, y) + at(x, y - 1) + at(x, y + 1) - 4 * at(x, y),
            );
        }
    }

    moments.variance()
}

/// Fraction of pixels marked as edges by Canny at thresholds 50/150.
pub fn edge_density(gray: &GrayImage) -> f64 {
    let (width, height) = gray.dimensions();
    if width < 3 || height < 3 {
        return 0.0;
    }

    let edges = canny(gray, CANNY_LOW, CANNY_HIGH);
    let edge_pixels = edges.pixels().filter(|p| p[0] > 0).count();
    edge_pixels as f64 / (width as f64 * height as f64)
}

/// Base-2 Shannon entropy of the 256-bin histogram.
pub fn histogram_entropy(gray: &GrayImage) -> f64 {
    let total = gray.pixels().len();
    if total == 0 {
        return 0.0;
    }

    let mut histogram = [0u64; 256];
    for pixel in gray.pixels() {
        histogram[pixel[0] as usize] += 1;
    }

    -histogram
        .iter()
        .map(|&count| {
            let p = count as f64 / total as f64;
            p * (p + ENTROPY_EPSILON).log2()
        })
        .sum::<f64>()
}

/// Mean intensity and population standard deviation.
pub fn brightness_and_contrast(gray: &GrayImage) -> (f64, f64) {
    let mut moments = Moments::default();
    for pixel in gray.pixels() {
        moments.push(i64::from(pixel[0]));
    }
    (moments.mean(), moments.variance().sqrt())
}

/// Running count, sum and sum of squares over integer samples. Exact for
/// any image within the decode limits.
#[derive(Debug, Default)]
struct Moments {
    count: u64,
    sum: i64,
    sum_sq: u64,
}

impl Moments {
    fn push(&mut self, value: i64) {
        self.count += 1;
        self.sum += value;
        self.sum_sq += value.unsigned_abs().pow(2);
    }

    fn mean(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        self.sum as f64 / self.count as f64
    }

    /// Population variance.
    fn variance(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        let mean = self.mean();
        (self.sum_sq as f64 / self.count as f64 - mean * mean).max(0.0)
    }
}

fn reflect_101(index: i64, len: u32) -> u32 {
    let len = i64::from(len);
    if len == 1 {
        return 0;
    }
    let period = 2 * (len - 1);
    let mut i = index.rem_euclid(period);
    if i >= len {
        i = period - i;
    }
    i as u32
}
