// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2026 Jonathan D.A. Jewell
#![no_main]

use delivery_network::loader::parse_network;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(graph) = parse_network(text) {
        let covered: usize = graph.connected_components().iter().map(Vec::len).sum();
        assert_eq!(covered, graph.node_count());
    }
});
