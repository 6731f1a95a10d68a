#![no_main]
use libfuzzer_sys::fuzz_target;
use vanitycal::config::CalendarConfig;
use vanitycal::Clock;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Loading, validating and expanding should never panic, only return Ok or Err
        let Ok(config) = CalendarConfig::from_toml_str(s) else {
            return;
        };
        let Ok(calendar) = config.validate() else {
            return;
        };
        let clock = Clock::on_date(jiff::civil::date(2026, 2, 6)).unwrap();
        let _ = calendar.to_ics(&clock);
    }
});
