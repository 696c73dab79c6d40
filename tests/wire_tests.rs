use http_problem::{
    BoxError, CodecError, DecodeLimits, JsonCodec, ProblemCodec, ProblemDef, ProblemError,
    RESERVED_MEMBERS,
};
use serde_json::{json, Map, Value};

const OUT_OF_CREDIT: ProblemDef = ProblemDef::new(
    "You do not have enough credit.",
    403,
    "https://example.com/probs/out-of-credit",
);

// Helper to build the problem used throughout RFC 7807
fn out_of_credit() -> ProblemError {
    OUT_OF_CREDIT
        .with_detail("Your current balance is 30, but that costs 50.")
        .with_instance("/account/12345/msgs/abc")
        .with_extension("balance", &30)
        .unwrap()
        .with_extension("accounts", &["/account/12345", "/account/67890"])
        .unwrap()
}

#[test]
fn test_wire_format_matches_rfc_example() {
    let json: Value = serde_json::from_slice(&out_of_credit().to_json().unwrap()).unwrap();

    assert_eq!(
        json,
        json!({
            "type": "https://example.com/probs/out-of-credit",
            "title": "You do not have enough credit.",
            "status": 403,
            "detail": "Your current balance is 30, but that costs 50.",
            "instance": "/account/12345/msgs/abc",
            "balance": 30,
            "accounts": ["/account/12345", "/account/67890"]
        })
    );
}

#[test]
fn test_serialization_is_deterministic() {
    let first = out_of_credit().to_json().unwrap();
    let second = out_of_credit().to_json().unwrap();
    assert_eq!(first, second);

    let text = String::from_utf8(first).unwrap();
    let accounts = text.find("\"accounts\"").unwrap();
    let balance = text.find("\"balance\"").unwrap();
    assert!(accounts < balance);
}

#[test]
fn test_round_trip() {
    let problem = out_of_credit();
    let decoded = ProblemError::from_json(&problem.to_json().unwrap()).unwrap();
    assert_eq!(decoded, problem);
    assert!(OUT_OF_CREDIT.matches(&decoded));
    for key in RESERVED_MEMBERS {
        assert!(decoded.extension(key).is_none());
    }
}

#[test]
fn test_decode_from_upstream_payload() {
    let payload = br#"{
        "type": "https://example.com/probs/rate-limited",
        "title": "Too Many Requests",
        "status": 429,
        "detail": "",
        "instance": "",
        "retry_after": 30
    }"#;

    let problem = ProblemError::from_json(payload).unwrap();
    assert_eq!(problem.status, 429);
    assert_eq!(problem.extension("retry_after"), Some(&json!(30)));
    assert_eq!(
        problem.to_string(),
        "Too Many Requests on  reference https://example.com/probs/rate-limited"
    );
}

#[test]
fn test_decode_without_extensions_yields_empty_map() {
    let payload = br#"{"type":"","title":"Gone","status":410,"detail":"","instance":""}"#;
    let problem = ProblemError::from_json(payload).unwrap();
    assert!(problem.extension_members.is_empty());
    assert_eq!(problem.type_or_blank(), "about:blank");
}

#[test]
fn test_decode_limits() {
    let codec = JsonCodec::new(DecodeLimits {
        max_extension_members: 1,
        ..DecodeLimits::default()
    });
    let payload = out_of_credit().to_json().unwrap();

    let err = ProblemError::from_json_with(&payload, &codec).unwrap_err();
    assert!(matches!(err, CodecError::Decode { .. }));
    assert!(err.to_string().contains("limit is 1"));

    let codec = JsonCodec::new(DecodeLimits::default());
    assert!(ProblemError::from_json_with(&payload, &codec).is_ok());
}

#[test]
fn test_untrusted_limits_are_opt_in() {
    let mut problem = ProblemError::new("Bad Request", 400, "");
    for n in 0..65 {
        problem.insert_extension(format!("field_{n}"), &n).unwrap();
    }
    let payload = problem.to_json().unwrap();

    assert_eq!(ProblemError::from_json(&payload).unwrap(), problem);

    let codec = JsonCodec::new(DecodeLimits::untrusted());
    let err = ProblemError::from_json_with(&payload, &codec).unwrap_err();
    assert_eq!(
        err.to_string(),
        "cannot decode problem details: payload has 65 extension members, limit is 64"
    );
}

#[test]
fn test_duplicate_type_member_is_never_written() {
    let mut problem = out_of_credit();
    problem
        .extension_members
        .insert("type".to_string(), json!("https://example.com/probs/other"));

    let err = problem.to_json().unwrap_err();
    assert!(matches!(err, CodecError::ReservedMember { ref key } if key == "type"));
}

/// Codec that only accepts scalar extension values
struct ScalarOnly;

impl ProblemCodec for ScalarOnly {
    fn encode_member(&self, _key: &str, value: &Value) -> Result<Value, BoxError> {
        match value {
            Value::Array(_) | Value::Object(_) => Err("only scalar members are allowed".into()),
            scalar => Ok(scalar.clone()),
        }
    }

    fn decode_document(&self, bytes: &[u8]) -> Result<Map<String, Value>, BoxError> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

#[test]
fn test_custom_codec_failure_names_member() {
    let err = out_of_credit().to_json_with(&ScalarOnly).unwrap_err();
    assert_eq!(
        err.to_string(),
        "cannot encode extension member `accounts`: only scalar members are allowed"
    );
}

#[test]
fn test_custom_codec_decode() {
    let payload = br#"{"type":"","title":"","status":500,"detail":"","instance":""}"#;
    let problem = ProblemError::from_json_with(payload, &ScalarOnly).unwrap();
    assert_eq!(problem.status, 500);

    let err = ProblemError::from_json_with(b"42", &ScalarOnly).unwrap_err();
    assert!(matches!(err, CodecError::Decode { .. }));
}
