#![no_main]

use eanid::{BarcodeIdentifier, IdentifyConfig};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let strict = BarcodeIdentifier::new();
    if let Ok(record) = strict.identify(text) {
        let joined: String = record.fields.values().map(|f| f.value.as_str()).collect();
        assert!(joined.is_empty() || joined == record.code);
    }

    let lenient = BarcodeIdentifier::with_config(IdentifyConfig {
        strip_separators: true,
        ..IdentifyConfig::permissive()
    });
    assert!(lenient.identify(text).is_ok());
});
