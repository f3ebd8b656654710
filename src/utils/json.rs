use serde_json::Value;

use crate::errors::ApiError;

/* Some forwarding endpoints wrap the upstream JSON in HTML or prepend garbage. Try the
strict parse first; on failure, retry on the substring between the first opening bracket
and the last closing bracket. Anything beyond that is a real parse error for the caller.
*/
pub fn parse_json_lenient(text: &str) -> Result<Value, ApiError> {
    match serde_json::from_str(text) {
        Ok(value) => Ok(value),
        Err(strict_err) => {
            let start = text.find(&['[', '{'][..]);
            let end = text.rfind(&[']', '}'][..]);
            if let (Some(start), Some(end)) = (start, end) {
                if end > start {
                    if let Ok(value) = serde_json::from_str(&text[start..=end]) {
                        return Ok(value);
                    }
                }
            }
            return Err(ApiError::DeserializationError(strict_err.to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_json_parses() {
        let value = parse_json_lenient(r#"{"result": 15500.5}"#).unwrap();
        assert_eq!(value["result"].as_f64(), Some(15500.5));
    }

    #[test]
    fn wrapped_json_is_salvaged() {
        let value = parse_json_lenient("<pre>{\"result\": 15500}</pre>").unwrap();
        assert_eq!(value["result"].as_f64(), Some(15500.0));
    }

    #[test]
    fn hopeless_payload_is_an_error() {
        assert!(parse_json_lenient("service unavailable").is_err());
    }
}
