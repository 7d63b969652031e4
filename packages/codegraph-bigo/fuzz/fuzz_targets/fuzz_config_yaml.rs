#![no_main]

use codegraph_bigo::config::AnalyzerConfig;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(yaml_str) = std::str::from_utf8(data) {
        // Parsing and validation must never panic
        if let Ok(config) = AnalyzerConfig::from_yaml_str(yaml_str) {
            let _ = config.enabled_languages();
        }
    }
});
