//! Common test helpers and sample codes shared across the test suite.

use eanid::Symbology;

/// Known-good codes, one or more per symbology.
pub const VALID_CODES: &[(&str, Symbology)] = &[
    ("96385074", Symbology::Ean8),
    ("55123457", Symbology::Ean8),
    ("036000291452", Symbology::UpcA),
    ("012345678905", Symbology::UpcA),
    ("4006381333931", Symbology::Ean13),
    ("5901234123457", Symbology::Ean13),
    ("9780306406157", Symbology::Ean13),
    ("00012345600012", Symbology::Gtin14),
    ("10012345678902", Symbology::Gtin14),
];

/// Replace the last digit of a code with `digit`.
#[allow(dead_code)]
pub fn with_check_digit(code: &str, digit: u8) -> String {
    let mut out = code[..code.len() - 1].to_string();
    out.push(char::from(b'0' + digit));
    out
}

/// The declared check digit of a code.
#[allow(dead_code)]
pub fn last_digit(code: &str) -> u8 {
    code.as_bytes()[code.len() - 1] - b'0'
}
