use sha2::{Digest, Sha256};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::SystemTime;

/// Length of a generated client identifier, in hex characters.
pub const APP_ID_LEN: usize = 20;

static COUNTER: AtomicU64 = AtomicU64::new(0);

/// Generate a fresh client identifier: 20 lowercase hex characters.
///
/// Uniform hex derived from a SHA-256 digest over the current time, the
/// process id and a process-wide counter. No uniqueness guarantee across
/// processes — collision avoidance is purely probabilistic, and the token
/// carries no cryptographic claim.
pub fn generate() -> String {
    let nanos = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let seq = COUNTER.fetch_add(1, Ordering::Relaxed);

    let mut hasher = Sha256::new();
    hasher.update(nanos.to_le_bytes());
    hasher.update(seq.to_le_bytes());
    hasher.update(std::process::id().to_le_bytes());
    let digest = hasher.finalize();

    digest[..APP_ID_LEN / 2]
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_id_is_20_hex_chars() {
        for _ in 0..50 {
            let id = generate();
            assert_eq!(id.len(), APP_ID_LEN);
            assert!(id.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn consecutive_ids_differ() {
        // The counter alone guarantees distinct digests within a process.
        assert_ne!(generate(), generate());
    }
}
