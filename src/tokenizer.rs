use core::mem;

use crate::decoder::{
    is_c0_control_code, is_c1_control_code, is_control_code, CharacterDecoder,
    CharacterEncoding, Decoder,
};
use crate::token::{Token, Tokens};

/// Turns a stream of input bytes into a stream of [`Token`]s.
///
/// Each byte is first offered to the owned [`Decoder`]; bytes the decoder
/// declines are classified as C0 control codes, as 8-bit C1 control codes
/// (when enabled), or swallowed. ESC gets special handling: it is held back
/// one byte so that the two-byte sequence ESC c, with c in 64..=95, can be
/// emitted as the single token for the C1 control code c+64.
#[derive(Debug)]
pub struct Tokenizer {
    // Are 8-bit C1 control codes enabled?
    accept_8bit_c1: bool,
    decoder: Decoder,
    // The previous byte was an ESC awaiting classification. Never survives
    // past the processing of the following byte.
    saw_escape: bool,
}

impl Tokenizer {
    /// Constructs a `Tokenizer` decoding the given [`CharacterEncoding`].
    pub const fn new(accept_8bit_c1: bool, encoding: CharacterEncoding) -> Self {
        Self::with_decoder(accept_8bit_c1, Decoder::new(encoding))
    }

    /// Constructs a `Tokenizer` around an existing [`Decoder`].
    pub const fn with_decoder(accept_8bit_c1: bool, decoder: Decoder) -> Self {
        Self {
            accept_8bit_c1,
            decoder,
            saw_escape: false,
        }
    }

    /// Processes one input byte, returning the tokens it produced (possibly
    /// none).
    pub fn process_byte(&mut self, byte: u8) -> Tokens {
        let mut output = Tokens::new();

        if self.saw_escape {
            self.saw_escape = false;
            // A C1 escape sequence transforms directly into a C1 token.
            if byte >= 64 && byte <= 95 {
                output.push(-Token::from(byte) - 64);
                return output;
            }
            // Invalid escape sequence: the ESC is dropped without a token
            // and the byte is processed anew below.
        }

        if self.decoder.process_byte(byte, &mut output) {
            return output;
        }

        if is_control_code(byte) {
            // ESC is held back; the next byte decides whether it begins a
            // C1 escape sequence. Any resynchronization replacements the
            // decoder emitted while declining are returned now.
            if byte == 27 {
                self.saw_escape = true;
                return output;
            }

            if is_c0_control_code(byte) || (self.accept_8bit_c1 && is_c1_control_code(byte)) {
                output.push(-Token::from(byte));
                return output;
            }
        }

        // Unknown/invalid bytes, and 8-bit C1 control codes while they are
        // not being accepted, are swallowed.
        output
    }

    /// Processes a run of bytes, delivering each resulting token to `emit`
    /// in emission order.
    pub fn process_bytes(&mut self, bytes: &[u8], mut emit: impl FnMut(Token)) {
        for &byte in bytes {
            for &token in self.process_byte(byte).values() {
                emit(token);
            }
        }
    }

    #[inline(always)]
    pub const fn accept_8bit_c1(&self) -> bool {
        self.accept_8bit_c1
    }

    /// Enables or disables 8-bit C1 control codes, effective from the next
    /// processed byte. Buffered decoder state is unaffected.
    #[inline(always)]
    pub fn set_accept_8bit_c1(&mut self, accept_8bit_c1: bool) {
        self.accept_8bit_c1 = accept_8bit_c1;
    }

    #[inline(always)]
    pub const fn character_decoder(&self) -> &Decoder {
        &self.decoder
    }

    /// Replaces the character decoder, returning the previous one together
    /// with the tokens produced by flushing it.
    ///
    /// Bytes buffered in the outgoing decoder were received and must be
    /// accounted for, so they surface as replacement tokens rather than
    /// being discarded. A pending ESC is tokenizer state, not decoder
    /// state, and survives the swap.
    pub fn set_character_decoder(&mut self, decoder: Decoder) -> (Decoder, Tokens) {
        let mut output = Tokens::new();
        self.decoder.flush(&mut output);
        (mem::replace(&mut self.decoder, decoder), output)
    }

    /// Switches to a fresh decoder for `encoding`, discarding the previous
    /// decoder and returning the tokens produced by flushing it.
    pub fn set_character_encoding(&mut self, encoding: CharacterEncoding) -> Tokens {
        let (_, output) = self.set_character_decoder(Decoder::new(encoding));
        output
    }
}
