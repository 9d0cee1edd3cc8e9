pub mod analyze;
pub mod forensics;
pub mod health;
pub mod metadata;
pub mod ocr;
pub mod root;
