//! Parsing throughput on generated LDF text.
//!
//! Run with: cargo bench --bench parse_benchmark

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use ldf_rs::Ldf;
use std::fmt::Write;

/// Build an LDF with `frames` frames of four 8-bit signals each.
fn generate_ldf(frames: usize) -> String {
    let mut text = String::new();
    text.push_str("Nodes {\n  Master: ECU, 5 ms, 0.1 ms;\n  Slaves: Node1, Node2;\n}\n");

    text.push_str("Signals {\n");
    for f in 0..frames {
        for s in 0..4 {
            let _ = writeln!(text, "  Sig_{f}_{s}: 8, 0x{s:02X}, ECU, Node1, Node2;");
        }
    }
    text.push_str("}\n");

    text.push_str("Frames {\n");
    for f in 0..frames {
        let _ = writeln!(text, "  Frame_{f}: 0x{:02X}, ECU, 4 {{", f % 60);
        for s in 0..4 {
            let _ = writeln!(text, "    Sig_{f}_{s}, {};", s * 8);
        }
        text.push_str("  }\n");
    }
    text.push_str("}\n");

    text.push_str("Signal_encoding_types {\n  OnOff {\n    logical_value, 0, \"off\";\n    logical_value, 1, \"on\";\n  }\n}\n");
    text.push_str("Signal_representation {\n  OnOff: ");
    let names: Vec<String> = (0..frames).map(|f| format!("Sig_{f}_0")).collect();
    text.push_str(&names.join(", "));
    text.push_str(";\n}\n");

    text.push_str("Node_attributes {\n");
    for node in ["Node1", "Node2"] {
        let _ = writeln!(
            text,
            "  {node} {{\n    LIN_protocol = \"2.1\";\n    product_id = 0x1E, 0x1, 0;\n    configurable_frames {{ Frame_0; }}\n  }}"
        );
    }
    text.push_str("}\n");
    text
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    for frames in [10, 60, 250] {
        let text = generate_ldf(frames);
        group.bench_with_input(BenchmarkId::from_parameter(frames), &text, |b, text| {
            b.iter(|| Ldf::parse(black_box(text)).expect("generated LDF parses"));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
