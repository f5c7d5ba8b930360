// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2026 Jonathan D.A. Jewell
#![no_main]

use arbitrary::Arbitrary;
use delivery_network::graph::Graph;
use delivery_network::power::MinPowerStrategy;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    edges: Vec<(u8, u8, u16)>,
    src: u8,
    dest: u8,
}

fuzz_target!(|input: Input| {
    let mut graph: Graph<u8, u64> = Graph::new([input.src, input.dest]);
    for (a, b, power) in input.edges.iter().take(256) {
        graph.add_edge(*a, *b, u64::from(*power));
    }

    let bisect = graph
        .min_power_with(&input.src, &input.dest, MinPowerStrategy::Bisect)
        .unwrap();
    let scan = graph
        .min_power_with(&input.src, &input.dest, MinPowerStrategy::Scan)
        .unwrap();
    assert_eq!(
        bisect.as_ref().map(|found| found.power),
        scan.as_ref().map(|found| found.power)
    );

    if let Some(found) = bisect {
        assert!(graph
            .get_path_with_power(&input.src, &input.dest, found.power)
            .unwrap()
            .is_some());
        if input.src != input.dest {
            assert!(graph
                .get_path_with_power(&input.src, &input.dest, found.power.saturating_sub(1))
                .unwrap()
                .is_none()
                || found.power == 0);
        }
    }
});
