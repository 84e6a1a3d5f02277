/// Alias hashing
///
/// Derives the 32-bit key under which an engine is stored in the registry.

/// Seed and multiplier are odd 64-bit primes; the recurrence is a
/// Fowler/Noll/Vo-style rolling hash.
const SEED: u64 = 3_074_457_345_618_258_791;
const MULTIPLIER: u64 = 3_074_457_345_618_258_799;

/// Hash an alias into its registry key.
///
/// Defined over the UTF-16 code units of the alias, in order, with wrapping
/// 64-bit arithmetic truncated to 32 bits at the end. The full 32-bit value
/// is the key; stored keys are sparse. Not cryptographic, only meant to
/// compress short human-chosen aliases into a fixed-width key.
///
/// Data files written with this function are only readable if it stays
/// bit-for-bit stable, so don't touch the constants.
pub fn alias_key(alias: &str) -> u32 {
    let mut acc = SEED;
    for unit in alias.encode_utf16() {
        acc = acc.wrapping_add(u64::from(unit));
        acc = acc.wrapping_mul(MULTIPLIER);
    }
    acc as u32
}
