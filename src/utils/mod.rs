//! Utility functions shared across the application.

/// Masks a wallet address for logging, keeping the first six and last four characters.
///
/// Format: `0x1234567890abcdef` → `0x1234…cdef`. Anything too short to mask
/// meaningfully is replaced entirely.
#[must_use]
pub fn mask_wallet_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 10 {
        return "*".repeat(chars.len());
    }

    let head: String = chars.iter().take(6).collect();
    let tail: String = chars.iter().skip(chars.len() - 4).collect();
    format!("{head}…{tail}")
}
