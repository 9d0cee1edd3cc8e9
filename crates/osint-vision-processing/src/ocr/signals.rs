//! Scam-pattern signals over recognized text
//!
//! Every rule runs independently against the full text, in a fixed order.

use osint_vision_core::models::{LanguageDetection, OcrReport, Signal};
use regex::Regex;
use std::sync::LazyLock;

/// Returned as `text` when recognition produced nothing.
pub const NO_TEXT_FALLBACK: &str = "No readable text detected in image.";

static URGENCY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)urgent|immediately|alert|warning|act now|verify|suspended|locked")
        .expect("urgency pattern is valid")
});

static SHORTENED_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)bit\.ly|tinyurl|t\.co|goo\.gl|ow\.ly").expect("shortener pattern is valid")
});

// Case is irrelevant for digits, so this one stays case-sensitive.
static PHONE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\+?\d[\d\-\s]{8,}").expect("phone pattern is valid"));

static SENSITIVE_TERMS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)password|credit card|ssn|social security|account number")
        .expect("sensitive-term pattern is valid")
});

static EMAIL_ADDRESS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}").expect("email pattern is valid")
});

/// `min(98, 60 + 0.1 * chars)`; non-decreasing in text length.
pub fn text_confidence(text: &str) -> f64 {
    (60.0 + 0.1 * text.chars().count() as f64).min(98.0)
}

pub fn detect_signals(text: &str) -> Vec<Signal> {
    let mut signals = Vec::new();

    if URGENCY.is_match(text) {
        signals.push(Signal::danger("Urgency Language Detected", 92));
    }

    if SHORTENED_URL.is_match(text) {
        signals.push(Signal::danger("Shortened URL Found", 88));
    }

    if PHONE_NUMBER.is_match(text) {
        signals.push(Signal::warning("Phone Number Detected", 76));
    }

    if SENSITIVE_TERMS.is_match(text) {
        signals.push(Signal::danger("Sensitive Information Keywords", 85));
    }

    let emails = EMAIL_ADDRESS.find_iter(text).count();
    if emails > 0 {
        signals.push(Signal::info(
            format!("Email Addresses Found ({} detected)", emails),
            90,
        ));
    }

    signals
}

/// Assemble the OCR response from the engine's text.
pub fn build_report(extracted: &str) -> OcrReport {
    let text = if extracted.is_empty() {
        NO_TEXT_FALLBACK.to_string()
    } else {
        extracted.to_string()
    };

    OcrReport {
        text,
        signals: detect_signals(extracted),
        confidence: text_confidence(extracted),
        language: LanguageDetection::NotComputed,
    }
}
