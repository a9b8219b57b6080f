#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Config parsing must never panic, and a parsed config must resolve
        // its selected image without panicking either.
        if let Ok(config) = toml::from_str::<dv::Config>(content) {
            let _ = config.resolve_image(None);
            let _ = config.current_agent_name();
        }
    }
});
