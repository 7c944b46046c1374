//! Byte-stream tokenizer for VT100-like terminal data streams.
//!
//! This library provides the lowest-level handling of a virtual terminal
//! input stream: it turns the raw bytes read from a pseudo-terminal or
//! network link into a sequence of [`Token`]s, each of which is either a
//! Unicode codepoint or a C0/C1 control code. A downstream terminal state
//! machine consumes the tokens, in emission order, to update display state;
//! this crate deliberately stops at the token boundary and assigns no
//! meaning to control sequences beyond their introducer tokens.
//!
//! Tokens are signed: a non-negative token is a codepoint, and a
//! non-positive token is a control code encoded as minus its C0 or 8-bit C1
//! byte value. (NUL overlaps codepoint zero; the ambiguity is tolerated.)
//! The two-byte sequence ESC c, with c in 64..=95, is the 7-bit form of the
//! C1 control code c+64 and produces the same token as its 8-bit form, so a
//! consumer sees a single representation of, say, CSI: [`TOKEN_CSI`].
//!
//! Bytes pass first through a [`CharacterDecoder`] ([`AsciiDecoder`] or
//! [`Utf8Decoder`], selected by [`CharacterEncoding`]); bytes the decoder
//! declines are then classified as control codes. Undecodable input is
//! replaced, as eagerly as its invalidity can be determined, by
//! [`REPLACEMENT_TOKEN`].
//!
//! ```rust
//! use vttoken::{CharacterEncoding, Tokenizer, TOKEN_CSI, TOKEN_LF};
//!
//! let mut tokenizer = Tokenizer::new(false, CharacterEncoding::Utf8);
//! let mut tokens = Vec::new();
//! tokenizer.process_bytes(b"ok\n\x1b[", |token| tokens.push(token));
//! assert_eq!(tokens, [111, 107, TOKEN_LF, TOKEN_CSI]);
//! ```
#![no_std]

mod ascii;
mod decoder;
mod token;
mod tokenizer;
mod utf8;

pub use ascii::AsciiDecoder;
pub use decoder::{
    is_c0_control_code, is_c1_control_code, is_control_code, CharacterDecoder,
    CharacterEncoding, Decoder,
};
pub use token::*;
pub use tokenizer::Tokenizer;
pub use utf8::Utf8Decoder;
