//! QR-code and barcode input rules.

/// Inputs receiving scanned codes.
pub const SCAN_INPUT_SELECTOR: &str = r#"input[name="qr_code_id"]"#;

/// Codes handed out by the scan simulator.
pub const DEMO_CODES: [&str; 9] = [
    "USER001", "USER002", "USER003", "EMP123", "EMP456", "GUEST789", "ADMIN001", "VISITOR99",
    "STAFF007",
];

/// Codes are stored upper-case.
pub fn normalize_code(raw: &str) -> String {
    raw.to_uppercase()
}

/// Scanners terminate a code with Enter.
pub fn is_scan_terminator(key: &str) -> bool {
    key == "Enter"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_code() {
        assert_eq!(normalize_code("emp123"), "EMP123");
        assert_eq!(normalize_code("Guest789"), "GUEST789");
        assert_eq!(normalize_code(""), "");
    }

    #[test]
    fn test_scan_terminator() {
        assert!(is_scan_terminator("Enter"));
        assert!(!is_scan_terminator("Tab"));
    }

    #[test]
    fn test_demo_codes_are_normalized() {
        for code in DEMO_CODES {
            assert_eq!(normalize_code(code), code);
        }
    }
}
