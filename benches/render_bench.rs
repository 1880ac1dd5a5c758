//! Benchmarks for termgrid rendering.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use termgrid::cells::cell_len;
use termgrid::measure::ColumnWidths;
use termgrid::prelude::*;
use termgrid::text::wrap;

const PARAGRAPH: &str = "This is a longer string that needs to be wrapped to fit within a certain width. It contains multiple words and should demonstrate the wrapping algorithm.";

fn sample_table(rows: usize) -> Table {
    let mut table = Table::new(["id", "name", "description", "status"]);
    if let Some(column) = table.column_by_name_mut("status") {
        column.body_style = ColumnStyle::new().align(Align::Center).padding_x(1, 1);
    }
    for index in 0..rows {
        table.add_row([
            index.to_string(),
            format!("item-{index}"),
            PARAGRAPH.to_string(),
            "ok".to_string(),
        ]);
    }
    table
}

fn benchmark_cell_len(c: &mut Criterion) {
    c.bench_function("cell_len_ascii", |b| {
        b.iter(|| black_box(cell_len(black_box(PARAGRAPH))));
    });

    c.bench_function("cell_len_cyrillic", |b| {
        b.iter(|| black_box(cell_len(black_box("Короткое описание языка программирования"))));
    });
}

fn benchmark_wrap(c: &mut Criterion) {
    c.bench_function("wrap_80", |b| {
        b.iter(|| black_box(wrap(PARAGRAPH, 80, 79)));
    });

    c.bench_function("wrap_20", |b| {
        b.iter(|| black_box(wrap(PARAGRAPH, 20, 19)));
    });
}

fn benchmark_shrink(c: &mut Criterion) {
    c.bench_function("shrink_8_columns", |b| {
        b.iter(|| {
            let mut widths = ColumnWidths::from(vec![4, 12, 48, 9, 30, 7, 60, 15]);
            black_box(widths.shrink_to_fit(9, black_box(100)));
            widths
        });
    });
}

fn benchmark_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("table_render");
    for rows in [10, 100] {
        let table = sample_table(rows);
        group.bench_with_input(BenchmarkId::new("unconstrained", rows), &table, |b, table| {
            b.iter(|| black_box(table.render_for(0)));
        });
        group.bench_with_input(BenchmarkId::new("width_80", rows), &table, |b, table| {
            b.iter(|| black_box(table.render_for(80)));
        });
    }
    group.finish();
}

fn benchmark_style_parse(c: &mut Criterion) {
    c.bench_function("column_style_parse", |b| {
        b.iter(|| black_box(ColumnStyle::parse("center bottom pad=2,0,1,0")));
    });
}

criterion_group!(
    benches,
    benchmark_cell_len,
    benchmark_wrap,
    benchmark_shrink,
    benchmark_render,
    benchmark_style_parse
);

criterion_main!(benches);
