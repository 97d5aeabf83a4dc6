//! Request nonces
//!
//! The exchange rejects a nonce that is not greater than the last one it saw
//! for an API key. Nonces are wall-clock seconds scaled by [`NONCE_SCALE`],
//! bumped past the previously issued value when the clock has not moved.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Nonce units per second
pub const NONCE_SCALE: u64 = 100_000;

/// Last nonce handed out by this process
static LAST_NONCE: AtomicU64 = AtomicU64::new(0);

fn clock_nonce() -> u64 {
    let elapsed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();

    elapsed.as_secs() * NONCE_SCALE + u64::from(elapsed.subsec_micros()) / 10
}

/// Next nonce, strictly greater than every earlier one in this process
pub fn next_nonce() -> u64 {
    let now = clock_nonce();
    let previous = match LAST_NONCE.fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
        Some(now.max(last + 1))
    }) {
        Ok(previous) | Err(previous) => previous,
    };

    now.max(previous + 1)
}

/// Next nonce in its wire form
pub fn generate_nonce() -> String {
    next_nonce().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nonces_strictly_increase() {
        let mut last = next_nonce();
        for _ in 0..10_000 {
            let nonce = next_nonce();
            assert!(nonce > last);
            last = nonce;
        }
    }

    #[test]
    fn test_nonce_tracks_wall_clock() {
        let secs = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_secs();
        let nonce = next_nonce();
        assert!(nonce >= secs * NONCE_SCALE);
    }

    #[test]
    fn test_nonce_is_numeric() {
        let nonce = generate_nonce();
        assert!(nonce.chars().all(|c| c.is_ascii_digit()));
    }
}
