// Run with: cargo bench --bench write_text

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use hd44780_sim::command::{BitMode, Command, Font, LineCount, SET_DDRAM_ADDR};
use hd44780_sim::config::PanelConfig;
use hd44780_sim::controller::Controller;
use hd44780_sim::Duty;
use std::{hint::black_box, time::Duration};

// Three representative strings of different lengths
const TEST_STRINGS: &[(&str, &str)] = &[
    ("short", "HELLO"),
    ("medium", "THE QUICK BROWN FOX"),
    ("line", "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789abcd"),
];

fn configure_criterion() -> Criterion {
    Criterion::default()
        .sample_size(100)
        .measurement_time(Duration::from_secs(10))
        .warm_up_time(Duration::from_secs(3))
        .confidence_level(0.95)
        .significance_level(0.05)
}

fn controller(bit_mode: BitMode) -> Controller {
    let mut lcd = Controller::new(PanelConfig::new(Duty::Sixteen, 2, 40)).unwrap();
    lcd.write_command(
        Command::FunctionSet {
            bit_mode: BitMode::Eight,
            lines: LineCount::Two,
            font: Font::Dots5x8,
        }
        .encode(),
    );
    if bit_mode == BitMode::Four {
        lcd.write_command(
            Command::FunctionSet {
                bit_mode,
                lines: LineCount::Two,
                font: Font::Dots5x8,
            }
            .encode(),
        );
    }
    lcd
}

fn write_eight_bit(lcd: &mut Controller, text: &str) {
    lcd.write_command(SET_DDRAM_ADDR);
    for byte in text.bytes() {
        lcd.write_data(byte);
    }
}

fn write_four_bit(lcd: &mut Controller, text: &str) {
    lcd.write_command(SET_DDRAM_ADDR & 0xF0);
    lcd.write_command(SET_DDRAM_ADDR << 4);
    for byte in text.bytes() {
        lcd.write_data(byte & 0xF0);
        lcd.write_data(byte << 4);
    }
}

fn write_text_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("write_text");

    for (case, text) in TEST_STRINGS {
        group.throughput(Throughput::Elements(text.len() as u64));

        group.bench_with_input(BenchmarkId::new("eight_bit", case), text, |b, text| {
            let mut lcd = controller(BitMode::Eight);
            b.iter(|| write_eight_bit(black_box(&mut lcd), black_box(text)));
        });

        group.bench_with_input(BenchmarkId::new("four_bit", case), text, |b, text| {
            let mut lcd = controller(BitMode::Four);
            b.iter(|| write_four_bit(black_box(&mut lcd), black_box(text)));
        });
    }

    group.finish();
}

criterion_group!(name = benches; config = configure_criterion(); targets = write_text_benchmark);
criterion_main!(benches);
