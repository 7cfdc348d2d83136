use super::*;

fn op(offset: u64, length: u64) -> UploadOperation {
    UploadOperation {
        method: "PUT".to_string(),
        url: format!("https://upload.example/{}", offset),
        offset,
        length,
        request_headers: Vec::new(),
    }
}

#[test]
fn contiguous_operations_covering_the_file_are_valid() {
    validate_upload_operations(&[op(0, 5), op(5, 5)], 10).expect("valid");
}

#[test]
fn out_of_order_operations_are_still_valid() {
    validate_upload_operations(&[op(6, 4), op(0, 6)], 10).expect("valid");
}

#[test]
fn gap_is_rejected() {
    let err = validate_upload_operations(&[op(0, 4), op(5, 5)], 10).unwrap_err();
    assert!(err.to_string().contains("gap"), "{}", err);
}

#[test]
fn overlap_is_rejected() {
    let err = validate_upload_operations(&[op(0, 6), op(5, 5)], 10).unwrap_err();
    assert!(err.to_string().contains("overlap"), "{}", err);
}

#[test]
fn short_coverage_is_rejected() {
    let err = validate_upload_operations(&[op(0, 5)], 10).unwrap_err();
    assert!(err.to_string().contains("cover 5 bytes"), "{}", err);
}

#[test]
fn overrun_is_rejected() {
    assert!(validate_upload_operations(&[op(0, 12)], 10).is_err());
}

#[test]
fn empty_operations_only_valid_for_empty_file() {
    validate_upload_operations(&[], 0).expect("empty file");
    assert!(validate_upload_operations(&[], 1).is_err());
}

#[test]
fn zero_length_operation_is_rejected() {
    assert!(validate_upload_operations(&[op(0, 0), op(0, 10)], 10).is_err());
}

#[test]
fn deserializes_server_shape() {
    let v = serde_json::json!({
        "method": "PUT",
        "url": "https://upload.example/part",
        "length": 1024,
        "offset": 2048,
        "requestHeaders": [{"name": "Content-Type", "value": "image/png"}]
    });
    let parsed: UploadOperation = serde_json::from_value(v).expect("parse op");
    assert_eq!(parsed.offset, 2048);
    assert_eq!(parsed.byte_range().expect("range"), 2048..3072);
    assert_eq!(parsed.request_headers[0].name, "Content-Type");
}
