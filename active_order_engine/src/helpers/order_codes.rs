use log::*;
use rand::Rng;

const ORDER_CODE_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
pub const MIN_ORDER_CODE_LENGTH: usize = 8;
pub const MAX_ORDER_CODE_LENGTH: usize = 32;

/// Limits an order code length to `MIN_ORDER_CODE_LENGTH..=MAX_ORDER_CODE_LENGTH`. Codes are unique, so short codes
/// would make order creation fail on collisions.
pub fn clamp_order_code_length(length: usize) -> usize {
    let clamped = length.clamp(MIN_ORDER_CODE_LENGTH, MAX_ORDER_CODE_LENGTH);
    if clamped != length {
        warn!(
            "🪛️ Order codes must be between {MIN_ORDER_CODE_LENGTH} and {MAX_ORDER_CODE_LENGTH} characters long. \
             Using {clamped} instead of {length}."
        );
    }
    clamped
}

/// Generates a random, uppercase alphanumeric order code of the given length.
pub fn new_order_code(length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| {
            let i = rng.gen_range(0..ORDER_CODE_CHARSET.len());
            ORDER_CODE_CHARSET[i] as char
        })
        .collect()
}
