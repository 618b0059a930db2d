//! Benchmarks for the per-sample generators and full preset voices.
//!
//! Run with: cargo bench
//!
//! The render loop must run well ahead of real time: at 44.1 kHz one
//! second of audio is 44 100 draws, so a block of 512 draws has a
//! ~11.6 ms deadline.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use keywave::graph::envelope::EnvelopeNode;
use keywave::graph::node::Generator;
use keywave::graph::oscillator::Oscillator;
use keywave::synth::Voice;
use keywave::voices;

const SAMPLE_RATE: f32 = 44_100.0;

/// Common pull-loop lengths, matching typical output buffer sizes.
const BLOCK_SIZES: &[usize] = &[64, 256, 1024];

fn draw<G: Generator>(generator: &mut G, count: usize) -> f32 {
    let mut acc = 0.0;
    for _ in 0..count {
        acc += generator.next_frame().to_mono();
    }
    acc
}

fn bench_oscillator(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/oscillator");

    for &size in BLOCK_SIZES {
        // Sine - transcendental per sample
        let mut osc = Oscillator::sine(440.0, SAMPLE_RATE);
        group.bench_with_input(BenchmarkId::new("sine", size), &size, |b, &size| {
            b.iter(|| draw(black_box(&mut osc), size))
        });

        // Sawtooth - linear ramp
        let mut osc = Oscillator::sawtooth(440.0, SAMPLE_RATE);
        group.bench_with_input(BenchmarkId::new("sawtooth", size), &size, |b, &size| {
            b.iter(|| draw(black_box(&mut osc), size))
        });

        // Triangle - absolute value
        let mut osc = Oscillator::triangle(440.0, SAMPLE_RATE);
        group.bench_with_input(BenchmarkId::new("triangle", size), &size, |b, &size| {
            b.iter(|| draw(black_box(&mut osc), size))
        });

        // Square - sign of sine
        let mut osc = Oscillator::square(440.0, SAMPLE_RATE);
        group.bench_with_input(BenchmarkId::new("square", size), &size, |b, &size| {
            b.iter(|| draw(black_box(&mut osc), size))
        });
    }

    group.finish();
}

fn bench_envelope(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/envelope");

    for &size in BLOCK_SIZES {
        let mut env = EnvelopeNode::adsr(0.01, 0.1, 0.7, 0.3, SAMPLE_RATE);
        group.bench_with_input(BenchmarkId::new("adsr", size), &size, |b, &size| {
            b.iter(|| draw(black_box(&mut env), size))
        });
    }

    group.finish();
}

fn bench_presets(c: &mut Criterion) {
    let mut group = c.benchmark_group("voices");

    for name in voices::PRESET_NAMES {
        let graph = voices::by_name(name, 440.0, SAMPLE_RATE).unwrap();
        let mut voice = Voice::new(graph, SAMPLE_RATE);
        group.bench_function(BenchmarkId::new(*name, 512usize), |b| {
            b.iter(|| {
                let mut acc = 0.0;
                for _ in 0..512 {
                    acc += black_box(voice.next_frame().to_mono());
                }
                acc
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_oscillator, bench_envelope, bench_presets);
criterion_main!(benches);
