//! JWS compact serialization: `header.payload.signature`

use crate::error::{JwtError, JwtResult};

const SEPARATOR: char = '.';

/// The three base64url segments of a compact token, borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segments<'a> {
    /// Encoded header.
    pub header: &'a str,
    /// Encoded payload.
    pub payload: &'a str,
    /// Encoded signature.
    pub signature: &'a str,
}

impl<'a> Segments<'a> {
    /// Bundle already-encoded segments.
    #[must_use]
    pub fn new(header: &'a str, payload: &'a str, signature: &'a str) -> Self {
        Self {
            header,
            payload,
            signature,
        }
    }

    /// Split on the first two separators.
    ///
    /// The signature segment absorbs any further separators. Empty segments
    /// are accepted here; they fail later when decoded.
    pub fn split(token: &'a str) -> JwtResult<Self> {
        let mut parts = token.splitn(3, SEPARATOR);
        match (parts.next(), parts.next(), parts.next()) {
            (Some(header), Some(payload), Some(signature)) => {
                Ok(Self::new(header, payload, signature))
            }
            _ => Err(JwtError::InvalidToken),
        }
    }

    /// Join as `header.payload.signature`.
    #[must_use]
    pub fn join(&self) -> String {
        let mut out =
            String::with_capacity(self.header.len() + self.payload.len() + self.signature.len() + 2);
        out.push_str(self.header);
        out.push(SEPARATOR);
        out.push_str(self.payload);
        out.push(SEPARATOR);
        out.push_str(self.signature);
        out
    }

    /// The bytes covered by the signature: `header.payload`, as received.
    #[must_use]
    pub fn signing_input(&self) -> String {
        signing_input(self.header, self.payload)
    }
}

/// Build the signing input `header.payload` from encoded segments.
#[must_use]
pub fn signing_input(header: &str, payload: &str) -> String {
    let mut out = String::with_capacity(header.len() + payload.len() + 1);
    out.push_str(header);
    out.push(SEPARATOR);
    out.push_str(payload);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_segments() {
        let segments = Segments::new(
            "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9",
            "eyJzdWIiOiIxMjM0NTY3ODkwIn0",
            "signature",
        );
        assert_eq!(
            segments.join(),
            "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.eyJzdWIiOiIxMjM0NTY3ODkwIn0.signature"
        );
        assert_eq!(Segments::new("", "", "").join(), "..");
    }

    #[test]
    fn splits_three_segments() {
        let segments = Segments::split("header.payload.signature").unwrap();
        assert_eq!(segments, Segments::new("header", "payload", "signature"));
        assert_eq!(segments.signing_input(), "header.payload");
    }

    #[test]
    fn signature_absorbs_extra_separators() {
        let segments = Segments::split("head.er.pay.load.sig.nature").unwrap();
        assert_eq!(segments.header, "head");
        assert_eq!(segments.payload, "er");
        assert_eq!(segments.signature, "pay.load.sig.nature");
    }

    #[test]
    fn too_few_separators_is_invalid() {
        for token in ["", "header", "header.payload"] {
            assert_eq!(Segments::split(token), Err(JwtError::InvalidToken));
        }
    }

    #[test]
    fn edge_separators_yield_empty_segments() {
        assert_eq!(Segments::split("..").unwrap(), Segments::new("", "", ""));
        assert_eq!(Segments::split(".payload.signature").unwrap().header, "");
        assert_eq!(Segments::split("header.payload.").unwrap().signature, "");
    }

    #[test]
    fn split_then_join_preserves_text() {
        for token in ["a.b.c", "..", "a.b.c.d.e", "x..y"] {
            assert_eq!(Segments::split(token).unwrap().join(), token);
        }
    }
}
