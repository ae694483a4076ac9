use criterion::{black_box, criterion_group, criterion_main, Criterion};
use scatter_core::{Record, Scene, ScatterChart, ScatterOptions};

fn table(n: usize) -> Vec<Record> {
    (0..n)
        .map(|i| {
            let x = 100.0 + i as f64 * 37.0;
            let y = 2.0e7 + ((i as f64 * 0.7).sin() + 1.0) * 9.0e7;
            Record::new(format!("fmt{i}"), x, y)
        })
        .collect()
}

fn bench_scene(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene_build");
    for &n in &[9usize, 200usize] {
        let records = table(n);
        let opts = ScatterOptions::default().color_by_label(true).annotate_points(true);
        group.bench_function(format!("records_{n}"), |b| {
            b.iter(|| black_box(Scene::build(&records, &opts).unwrap()))
        });
    }
    group.finish();
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &dpi in &[100.0f32, 300.0] {
        let opts = ScatterOptions::new("bench.png")
            .figure_size(7.0, 3.5)
            .dpi(dpi)
            .annotate_points(true)
            .render_text(false);
        let chart = ScatterChart::new(table(9), opts);
        group.bench_function(format!("dpi_{dpi}"), |b| {
            b.iter(|| black_box(chart.render_to_bytes().unwrap()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_scene, bench_encode);
criterion_main!(benches);
