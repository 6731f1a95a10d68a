#![no_main]
use jiff::civil::Date;
use libfuzzer_sys::fuzz_target;
use vanitycal::{countdown_label, duration_label, Label};

fn date_from(bytes: &[u8]) -> Option<Date> {
    let year = i16::from_le_bytes([bytes[0], bytes[1]]) % 10_000;
    Date::new(year, (bytes[2] % 12 + 1) as i8, (bytes[3] % 31 + 1) as i8).ok()
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 8 {
        return;
    }
    let (Some(a), Some(b)) = (date_from(&data[..4]), date_from(&data[4..8])) else {
        return;
    };
    let _ = duration_label(a, b).to_string();
    let countdown = countdown_label(a, b);
    if a >= b {
        assert_eq!(countdown, Label::DDay);
    }
    assert_eq!(duration_label(a, a), Label::DDay);
});
