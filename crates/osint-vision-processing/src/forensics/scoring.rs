//! Threshold rules turning statistics into findings and a quality score

use osint_vision_core::models::{ImageAnalysis, ManipulationLikelihood, Signal};

const ENTROPY_FLOOR: f64 = 6.5;
const CONTRAST_FLOOR: f64 = 30.0;
const EDGE_DENSITY_CEILING: f64 = 0.15;
const DARK_CEILING: f64 = 50.0;
const BRIGHT_FLOOR: f64 = 200.0;

const BLUR_PENALTY: u8 = 20;
const ENTROPY_PENALTY: u8 = 15;
const CONTRAST_PENALTY: u8 = 10;

/// Start at 100 and deduct per failed check, never below 0.
pub fn quality_score(analysis: &ImageAnalysis) -> u8 {
    let mut score: u8 = 100;
    if analysis.blur_detected {
        score = score.saturating_sub(BLUR_PENALTY);
    }
    if analysis.histogram_entropy < ENTROPY_FLOOR {
        score = score.saturating_sub(ENTROPY_PENALTY);
    }
    if analysis.contrast < CONTRAST_FLOOR {
        score = score.saturating_sub(CONTRAST_PENALTY);
    }
    score
}

/// Findings in a fixed order: blur, edges, entropy, exposure, contrast.
pub fn findings(analysis: &ImageAnalysis) -> Vec<Signal> {
    let mut findings = Vec::new();

    if analysis.blur_detected {
        findings.push(Signal::warning("Image Blur Detected", 75));
    }

    if analysis.edge_density > EDGE_DENSITY_CEILING {
        findings.push(Signal::info("High Edge Density", 60));
    }

    if analysis.histogram_entropy < ENTROPY_FLOOR {
        findings.push(Signal::warning("Low Histogram Entropy", 70));
    }

    if analysis.brightness < DARK_CEILING {
        findings.push(Signal::info("Very Dark Image", 80));
    } else if analysis.brightness > BRIGHT_FLOOR {
        findings.push(Signal::info("Very Bright Image", 80));
    }

    if analysis.contrast < CONTRAST_FLOOR {
        findings.push(Signal::warning("Low Contrast", 65));
    }

    findings
}

/// Score and its likelihood label, taken from the final score only.
pub fn assess(analysis: &ImageAnalysis) -> (u8, ManipulationLikelihood) {
    let score = quality_score(analysis);
    (score, ManipulationLikelihood::from_quality_score(score))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn healthy() -> ImageAnalysis {
        ImageAnalysis {
            blur_detected: false,
            blur_score: 450.0,
            edge_density: 0.08,
            histogram_entropy: 7.4,
            brightness: 120.0,
            contrast: 55.0,
        }
    }

    fn labels(signals: &[Signal]) -> Vec<&str> {
        signals.iter().map(|s| s.label.as_str()).collect()
    }

    #[test]
    fn test_healthy_image_scores_full() {
        let analysis = healthy();
        assert_eq!(assess(&analysis), (100, ManipulationLikelihood::Low));
        assert!(findings(&analysis).is_empty());
    }

    #[test]
    fn test_entropy_penalty_alone_stays_low() {
        let analysis = ImageAnalysis {
            histogram_entropy: 5.0,
            ..healthy()
        };
        assert_eq!(assess(&analysis), (85, ManipulationLikelihood::Low));

        let analysis = ImageAnalysis {
            histogram_entropy: 5.0,
            blur_detected: true,
            ..healthy()
        };
        assert_eq!(assess(&analysis), (65, ManipulationLikelihood::Medium));
    }

    #[test]
    fn test_all_penalties_make_high() {
        let analysis = ImageAnalysis {
            blur_detected: true,
            histogram_entropy: 0.0,
            contrast: 0.0,
            ..healthy()
        };
        assert_eq!(assess(&analysis), (55, ManipulationLikelihood::High));
    }

    #[test]
    fn test_exposure_branches_are_exclusive() {
        let dark = ImageAnalysis {
            brightness: 12.0,
            ..healthy()
        };
        assert_eq!(labels(&findings(&dark)), vec!["Very Dark Image"]);

        let bright = ImageAnalysis {
            brightness: 240.0,
            ..healthy()
        };
        assert_eq!(labels(&findings(&bright)), vec!["Very Bright Image"]);
    }

    #[test]
    fn test_finding_order_and_confidence() {
        let analysis = ImageAnalysis {
            blur_detected: true,
            blur_score: 3.0,
            edge_density: 0.3,
            histogram_entropy: 2.0,
            brightness: 255.0,
            contrast: 4.0,
        };
        let findings = findings(&analysis);
        assert_eq!(
            labels(&findings),
            vec![
                "Image Blur Detected",
                "High Edge Density",
                "Low Histogram Entropy",
                "Very Bright Image",
                "Low Contrast",
            ]
        );
        let confidences: Vec<u8> = findings.iter().map(|s| s.confidence).collect();
        assert_eq!(confidences, vec![75, 60, 70, 80, 65]);
    }
}
