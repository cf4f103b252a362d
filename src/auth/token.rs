use sha2::{Digest, Sha256};

/// Derive a bearer token from an external identity, the configured secret
/// and a creation timestamp. Opaque on the wire; uniqueness comes from the
/// timestamp component.
pub fn derive(subject_id: &str, secret: &str, timestamp: i64) -> String {
    let mut hasher = Sha256::new();
    hasher.update(subject_id.as_bytes());
    hasher.update(secret.as_bytes());
    hasher.update(timestamp.to_string().as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Short invitation key for test accounts: hash the email plus timestamp,
/// hex-encode, keep every third character starting from the first.
pub fn invitation_key(email: &str, timestamp: i64) -> String {
    let mut hasher = Sha256::new();
    hasher.update(email.as_bytes());
    hasher.update(timestamp.to_string().as_bytes());
    let digest = format!("{:x}", hasher.finalize());
    digest.chars().step_by(3).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derive_is_deterministic_hex() {
        let a = derive("user@example.com", "secret", 1_700_000_000);
        let b = derive("user@example.com", "secret", 1_700_000_000);
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn derive_varies_with_timestamp_and_secret() {
        let base = derive("user@example.com", "secret", 1_700_000_000);
        assert_ne!(base, derive("user@example.com", "secret", 1_700_000_001));
        assert_ne!(base, derive("user@example.com", "other", 1_700_000_000));
    }

    #[test]
    fn invitation_key_takes_every_third_character() {
        let email = "invitee@example.com";
        let timestamp = 1_700_000_000;

        let mut hasher = Sha256::new();
        hasher.update(email.as_bytes());
        hasher.update(timestamp.to_string().as_bytes());
        let digest = format!("{:x}", hasher.finalize());

        let key = invitation_key(email, timestamp);
        // 64 hex chars at stride 3 -> 22-character key
        assert_eq!(key.len(), 22);
        for (i, c) in key.chars().enumerate() {
            assert_eq!(digest.chars().nth(i * 3), Some(c));
        }
    }
}
