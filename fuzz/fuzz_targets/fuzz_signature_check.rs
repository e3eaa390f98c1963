#![no_main]
use libfuzzer_sys::fuzz_target;
use jxlsig::{check_signature, Probe, Signature, MAX_SIGNATURE_LEN};

fuzz_target!(|data: &[u8]| {
    let sig = check_signature(data);

    // The C export must agree with the Rust API
    let raw = unsafe { jxlsig::c_api::SignatureCheck(data.as_ptr(), data.len()) };
    assert_eq!(raw, sig.as_raw());
    assert_eq!(Signature::from_raw(raw), Some(sig));

    // Nothing past the first twelve bytes may influence the result
    if data.len() > MAX_SIGNATURE_LEN {
        assert_eq!(check_signature(&data[..MAX_SIGNATURE_LEN]), sig);
    }

    // A decided result never flips when more bytes arrive
    if sig.probe() != Probe::Inconclusive {
        for len in 1..data.len().min(MAX_SIGNATURE_LEN) {
            let shorter = check_signature(&data[..len]);
            assert!(shorter.probe() == Probe::Inconclusive || shorter == sig);
        }
    }

    // A match always covers its whole signature
    if sig.is_jxl() {
        assert!(data.len() >= sig.header_len());
    }
});
