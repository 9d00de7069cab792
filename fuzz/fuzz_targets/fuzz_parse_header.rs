#![no_main]

use libfuzzer_sys::fuzz_target;
use wavsplit_format::{derive_mono, header_to_vec, parse_header_bytes};

fuzz_target!(|data: &[u8]| {
    let Ok(header) = parse_header_bytes(data) else {
        return;
    };

    // Anything the parser accepts must write back and parse to the same fields.
    let written = header_to_vec(&header).expect("parsed header is writable");
    let reparsed = parse_header_bytes(&written).expect("written header parses");
    assert_eq!(reparsed.data_size(), header.data_size());
    assert_eq!(reparsed.total_samples(), header.total_samples());

    let mono = derive_mono(&header);
    assert_eq!(header_to_vec(&mono).map(|b| b.len()).ok(), Some(44));
});
