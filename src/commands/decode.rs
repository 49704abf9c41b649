use serde::Serialize;

use crate::cli::DecodeArgs;
use crate::codec::base64;
use crate::context::AppContext;
use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Serialize)]
struct DecodeView {
    length: usize,
    hex: String,
}

pub fn run(ctx: &AppContext, args: DecodeArgs) -> AppResult<()> {
    check_block_size(args.block_size)?;

    let bytes = base64::decode_blocks(&args.text, args.block_size);
    let view = DecodeView {
        length: bytes.len(),
        hex: to_hex(&bytes),
    };

    let text = format!("{} bytes: {}", view.length, view.hex);
    ctx.output.emit(&[text], &view)
}

fn check_block_size(block_size: usize) -> AppResult<()> {
    if block_size > base64::MAX_BLOCK_SIZE {
        return Err(AppError::InvalidInput(format!(
            "--block-size must be at most {}",
            base64::MAX_BLOCK_SIZE
        )));
    }
    Ok(())
}

fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|byte| format!("{byte:02x}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_lowercase_hex() {
        assert_eq!(to_hex(&[0x00, 0x0f, 0xab, 0xff]), "000fabff");
        assert_eq!(to_hex(&[]), "");
    }

    #[test]
    fn rejects_block_size_over_limit() {
        assert!(check_block_size(0).is_ok());
        assert!(check_block_size(base64::MAX_BLOCK_SIZE).is_ok());

        match check_block_size(usize::MAX) {
            Err(AppError::InvalidInput(message)) => assert!(message.contains("--block-size")),
            other => panic!("expected invalid input, got {other:?}"),
        }
    }
}
