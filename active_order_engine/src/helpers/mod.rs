mod order_codes;

pub use order_codes::{clamp_order_code_length, new_order_code, MAX_ORDER_CODE_LENGTH, MIN_ORDER_CODE_LENGTH};
