use md5::Md5;
use osint_vision_core::models::ImageHashes;
use sha1::Sha1;
use sha2::{Digest, Sha256};

/// MD5, SHA-1 and SHA-256 of the raw upload, lowercase hex.
pub fn compute_hashes(data: &[u8]) -> ImageHashes {
    ImageHashes {
        md5: hex::encode(Md5::digest(data)),
        sha1: hex::encode(Sha1::digest(data)),
        sha256: hex::encode(Sha256::digest(data)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_digests_of_empty_input() {
        let hashes = compute_hashes(b"");
        assert_eq!(hashes.md5, "d41d8cd98f00b204e9800998ecf8427e");
        assert_eq!(hashes.sha1, "da39a3ee5e6b4b0d3255bfef95601890afd80709");
        assert_eq!(
            hashes.sha256,
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_digests_are_deterministic() {
        let data = b"\x89PNG\r\n\x1a\nnot really";
        assert_eq!(compute_hashes(data), compute_hashes(data));
        assert_ne!(compute_hashes(data), compute_hashes(b"other"));
    }
}
