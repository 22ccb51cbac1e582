//! Unverified JWT claims decoding

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use passage_application::ports::{ClaimsDecoder, ClaimsError};
use passage_domain::TokenClaims;

/// Decodes claims out of a JWT without checking its signature.
///
/// Splits the compact serialization, base64url-decodes the payload
/// segment, and deserializes the claims JSON. No signature verification
/// of any kind happens here; this is only suitable for reading metadata
/// (such as expiry) out of a token the client just received from the
/// issuer itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnverifiedJwtDecoder;

impl ClaimsDecoder for UnverifiedJwtDecoder {
    fn decode_unverified(&self, token: &str) -> Result<TokenClaims, ClaimsError> {
        let parts: Vec<&str> = token.split('.').collect();
        if parts.len() != 3 {
            return Err(ClaimsError::new("token is not a compact JWT"));
        }

        let payload = URL_SAFE_NO_PAD
            .decode(parts[1])
            .map_err(|e| ClaimsError::new(format!("payload is not base64url: {e}")))?;

        serde_json::from_slice(&payload)
            .map_err(|e| ClaimsError::new(format!("claims are not valid JSON: {e}")))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Builds a structurally valid JWT with an unsigned payload.
    fn jwt_with_payload(payload: &str) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"none"}"#);
        let payload = URL_SAFE_NO_PAD.encode(payload.as_bytes());
        format!("{header}.{payload}.signature")
    }

    #[test]
    fn test_decodes_expiry_claim() {
        let token = jwt_with_payload(r#"{"exp": 1700003600, "sub": "service-a"}"#);
        let claims = UnverifiedJwtDecoder.decode_unverified(&token).unwrap();

        assert_eq!(claims.exp, Some(1_700_003_600));
        assert_eq!(claims.sub.as_deref(), Some("service-a"));
    }

    #[test]
    fn test_ignores_unknown_claims() {
        let token = jwt_with_payload(r#"{"exp": 10, "aud": "x", "custom": [1, 2]}"#);
        let claims = UnverifiedJwtDecoder.decode_unverified(&token).unwrap();
        assert_eq!(claims.exp, Some(10));
    }

    #[test]
    fn test_rejects_non_jwt() {
        let err = UnverifiedJwtDecoder.decode_unverified("opaque-token").unwrap_err();
        assert_eq!(err.to_string(), "failed to decode token claims: token is not a compact JWT");
    }

    #[test]
    fn test_rejects_bad_base64_payload() {
        let err = UnverifiedJwtDecoder
            .decode_unverified("header.!!!.signature")
            .unwrap_err();
        assert!(err.to_string().contains("not base64url"));
    }

    #[test]
    fn test_rejects_non_json_payload() {
        let payload = URL_SAFE_NO_PAD.encode(b"not json");
        let token = format!("header.{payload}.signature");
        let err = UnverifiedJwtDecoder.decode_unverified(&token).unwrap_err();
        assert!(err.to_string().contains("not valid JSON"));
    }
}
