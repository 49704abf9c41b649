/// Maps a base64 symbol to its 6-bit value. Bytes outside the alphabet map to 0.
fn symbol_value(byte: u8) -> u32 {
    match byte {
        b'A'..=b'Z' => u32::from(byte - b'A'),
        b'a'..=b'z' => u32::from(byte - b'a') + 26,
        b'0'..=b'9' => u32::from(byte - b'0') + 52,
        b'+' => 62,
        b'/' => 63,
        _ => 0,
    }
}

fn is_symbol(byte: &u8) -> bool {
    byte.is_ascii_alphanumeric() || *byte == b'+' || *byte == b'/'
}

/// Largest block size honoured by [`decode_blocks`].
pub const MAX_BLOCK_SIZE: usize = 1 << 16;

/// Unpadded decoded length for `symbols` base64 symbols.
pub fn decoded_len(symbols: usize) -> usize {
    symbols.saturating_mul(3).saturating_add(1) / 4
}

/// Decodes a single base64 token. Never fails: bytes outside the alphabet,
/// padding and whitespace included, are dropped before decoding.
pub fn decode(input: &str) -> Vec<u8> {
    decode_blocks(input, 0)
}

/// Output length for `symbols` symbols rounded up to `block_size`. Rounding is
/// skipped for a block size of 0, above [`MAX_BLOCK_SIZE`], or on overflow.
fn padded_len(symbols: usize, block_size: usize) -> usize {
    let len = decoded_len(symbols);
    if block_size == 0 || block_size > MAX_BLOCK_SIZE {
        return len;
    }

    len.div_ceil(block_size)
        .checked_mul(block_size)
        .unwrap_or(len)
}

/// Like [`decode`], but rounds the output length up to a multiple of
/// `block_size` and zero-fills the tail. A block size of 0 disables rounding.
pub fn decode_blocks(input: &str, block_size: usize) -> Vec<u8> {
    let symbols: Vec<u8> = input.bytes().filter(is_symbol).collect();
    let in_len = symbols.len();
    let out_len = padded_len(in_len, block_size);

    let mut out = vec![0_u8; out_len];
    let mut out_idx = 0;
    let mut register = 0_u32;

    for (in_idx, &symbol) in symbols.iter().enumerate() {
        let slot = in_idx & 3;
        register |= symbol_value(symbol) << (6 * (3 - slot));

        if slot == 3 || in_idx + 1 == in_len {
            let mut emitted = 0;
            while emitted < 3 && out_idx < out_len {
                out[out_idx] = (register >> (16 - 8 * emitted)) as u8;
                emitted += 1;
                out_idx += 1;
            }
            register = 0;
        }
    }

    out
}
