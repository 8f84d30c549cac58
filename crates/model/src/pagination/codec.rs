use crate::{
    core::value::Value,
    error::CursorError,
    order::spec::OrderSpec,
    pagination::cursor::Cursor,
    records::row::FieldValue,
};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

/// Bidirectional, lossless conversion between a cursor and an opaque
/// token safe to embed in a URL query parameter.
///
/// The wire format is base64 (URL-safe, no padding) over a JSON array of
/// `[attribute, value]` pairs in order-spec order. Encoding is
/// deterministic: the same cursor always yields the same token. The
/// token carries only sort-key values, nothing else.
pub struct CursorCodec<'a> {
    order: &'a OrderSpec,
}

impl<'a> CursorCodec<'a> {
    pub fn new(order: &'a OrderSpec) -> Self {
        CursorCodec { order }
    }

    /// The empty cursor encodes to the empty string.
    pub fn encode(&self, cursor: &Cursor) -> String {
        if cursor.is_empty() {
            return String::new();
        }
        let pairs: Vec<(&str, &Value)> = cursor
            .fields()
            .iter()
            .map(|f| (f.name.as_str(), &f.value))
            .collect();
        // Serializing (&str, &Value) pairs cannot fail.
        let json = serde_json::to_vec(&pairs).unwrap_or_default();
        URL_SAFE_NO_PAD.encode(json)
    }

    /// An absent or empty token decodes to the empty cursor (start of
    /// dataset). Every other failure mode is a `CursorError`: the token
    /// is client input, so decoding never panics.
    pub fn decode(&self, token: &str) -> Result<Cursor, CursorError> {
        if token.is_empty() {
            return Ok(Cursor::empty());
        }

        let bytes = URL_SAFE_NO_PAD
            .decode(token)
            .map_err(|_| CursorError::Encoding)?;
        let pairs: Vec<(String, Value)> =
            serde_json::from_slice(&bytes).map_err(|e| CursorError::Payload(e.to_string()))?;

        self.validate(&pairs)?;

        Ok(Cursor::new(
            pairs
                .into_iter()
                .map(|(name, value)| FieldValue { name, value })
                .collect(),
        ))
    }

    fn validate(&self, pairs: &[(String, Value)]) -> Result<(), CursorError> {
        let defs = self.order.definitions();
        let attributes_match = pairs.len() == defs.len()
            && pairs
                .iter()
                .zip(defs.iter())
                .all(|((name, _), def)| name.eq_ignore_ascii_case(&def.attribute));
        if !attributes_match {
            return Err(CursorError::AttributeMismatch {
                expected: self.order.attributes().collect::<Vec<_>>().join(", "),
                found: pairs
                    .iter()
                    .map(|(name, _)| name.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            });
        }

        for ((name, value), def) in pairs.iter().zip(defs.iter()) {
            if !def.value_type.matches(value) {
                return Err(CursorError::TypeMismatch {
                    attribute: name.clone(),
                    expected: def.value_type,
                    found: value.data_type(),
                });
            }
        }

        Ok(())
    }
}
