//! Benchmarks for wire request serialization
//!
//! Measures the per-call cost of building provider request bodies from a
//! unified conversation, for both format families.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use ai_cascade::wire::{adapter_for, GenerationParams};
use ai_cascade::{Message, WireFormat};

fn sample_conversation() -> Vec<Message> {
    (0..32)
        .map(|i| {
            if i % 2 == 0 {
                Message::user(format!("question {}", i))
            } else {
                Message::assistant(format!("answer {}", i))
            }
        })
        .collect()
}

fn bench_serialize_request(c: &mut Criterion) {
    let messages = sample_conversation();
    let params = GenerationParams::default();

    c.bench_function("serialize_chat_completions", |b| {
        let adapter = adapter_for(WireFormat::ChatCompletions);
        b.iter(|| black_box(adapter.serialize_request("bench-model", &messages, &params)))
    });

    c.bench_function("serialize_native_generation", |b| {
        let adapter = adapter_for(WireFormat::NativeGeneration);
        b.iter(|| black_box(adapter.serialize_request("bench-model", &messages, &params)))
    });
}

criterion_group!(benches, bench_serialize_request);
criterion_main!(benches);
