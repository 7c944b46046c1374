use crate::ascii::AsciiDecoder;
use crate::token::Tokens;
use crate::utf8::Utf8Decoder;

/// The character encodings a [`Decoder`] can be constructed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterEncoding {
    Ascii,
    Utf8,
}

/// Trait for implementations that turn a stream of encoded bytes into
/// graphical-character tokens.
///
/// A character decoder sees every byte the [`crate::Tokenizer`] is not
/// holding back for escape processing, and decides for each one whether it
/// is part of the character encoding. Bytes it declines fall through to the
/// tokenizer's control-code classification. This is also how 8-bit C1
/// control codes are resolved: bytes 128..=159 are ordinary data to a
/// decoder, and they act as control codes exactly when the decoder declines
/// them.
pub trait CharacterDecoder {
    /// Processes one input byte, appending any resulting tokens to
    /// `output`, and returns whether the byte was accepted.
    ///
    /// Accepting a byte means consuming it as part of a valid (or
    /// invalid-but-recognized) encoding unit; declining leaves it to the
    /// caller to classify as a control code. Appended tokens are ordered:
    /// replacement tokens for previously buffered bytes that this byte
    /// abandoned come first, then any token produced by the byte itself.
    /// Replacements emitted while declining still stand.
    ///
    /// Bytes 0..=31 must never be accepted on any non-control path, so no
    /// encoding may use them except to represent C0 control codes.
    fn process_byte(&mut self, byte: u8, output: &mut Tokens) -> bool;

    /// Resets the decoder, appending one replacement token per buffered
    /// byte of any incomplete sequence to `output`.
    ///
    /// Idempotent when nothing is buffered.
    fn flush(&mut self, output: &mut Tokens);
}

/// A [`CharacterDecoder`] selected at runtime by [`CharacterEncoding`].
#[derive(Debug, Clone)]
pub enum Decoder {
    Ascii(AsciiDecoder),
    Utf8(Utf8Decoder),
}

impl Decoder {
    pub const fn new(encoding: CharacterEncoding) -> Self {
        match encoding {
            CharacterEncoding::Ascii => Self::Ascii(AsciiDecoder::new()),
            CharacterEncoding::Utf8 => Self::Utf8(Utf8Decoder::new()),
        }
    }
}

impl CharacterDecoder for Decoder {
    fn process_byte(&mut self, byte: u8, output: &mut Tokens) -> bool {
        match self {
            Self::Ascii(decoder) => decoder.process_byte(byte, output),
            Self::Utf8(decoder) => decoder.process_byte(byte, output),
        }
    }

    fn flush(&mut self, output: &mut Tokens) {
        match self {
            Self::Ascii(decoder) => decoder.flush(output),
            Self::Utf8(decoder) => decoder.flush(output),
        }
    }
}

/// Returns whether `byte` is a C0 control code (0..=31).
#[inline(always)]
pub const fn is_c0_control_code(byte: u8) -> bool {
    byte <= 31
}

/// Returns whether `byte` is an 8-bit C1 control code (128..=159).
#[inline(always)]
pub const fn is_c1_control_code(byte: u8) -> bool {
    byte >= 128 && byte <= 159
}

/// Returns whether `byte` is a C0 or 8-bit C1 control code.
#[inline(always)]
pub const fn is_control_code(byte: u8) -> bool {
    is_c0_control_code(byte) || is_c1_control_code(byte)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_classes() {
        for b in 0u8..=255u8 {
            assert_eq!(is_c0_control_code(b), b <= 31);
            assert_eq!(is_c1_control_code(b), b >= 128 && b <= 159);
            assert_eq!(
                is_control_code(b),
                is_c0_control_code(b) || is_c1_control_code(b)
            );
        }
    }

    #[test]
    fn factory_selects_implementation() {
        assert!(matches!(
            Decoder::new(CharacterEncoding::Ascii),
            Decoder::Ascii(_)
        ));
        assert!(matches!(
            Decoder::new(CharacterEncoding::Utf8),
            Decoder::Utf8(_)
        ));
    }
}
