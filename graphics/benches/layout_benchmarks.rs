use criterion::{Criterion, black_box, criterion_group, criterion_main};

use kestrel_graphics::{BufferElement, BufferLayout, ShaderDataType};

// ---------------------------------------------------------------------------
// Layout construction
// ---------------------------------------------------------------------------

fn bench_layout_position_color(c: &mut Criterion) {
    c.bench_function("buffer_layout_position_color", |b| {
        b.iter(|| {
            BufferLayout::new(vec![
                BufferElement::new(black_box(ShaderDataType::Float3), "a_position"),
                BufferElement::new(black_box(ShaderDataType::Float4), "a_color"),
            ])
        });
    });
}

fn bench_layout_wide(c: &mut Criterion) {
    c.bench_function("buffer_layout_16_elements", |b| {
        b.iter(|| {
            let elements = (0..16)
                .map(|i| {
                    BufferElement::new(black_box(ShaderDataType::Float4), format!("a_attr{i}"))
                })
                .collect();
            BufferLayout::new(elements)
        });
    });
}

fn bench_layout_iteration(c: &mut Criterion) {
    let layout = BufferLayout::new(
        (0..16)
            .map(|i| BufferElement::new(ShaderDataType::Float4, format!("a_attr{i}")))
            .collect(),
    );
    c.bench_function("buffer_layout_offset_sum", |b| {
        b.iter(|| layout.iter().map(|e| black_box(e.offset)).sum::<u32>());
    });
}

criterion_group!(
    benches,
    bench_layout_position_color,
    bench_layout_wide,
    bench_layout_iteration
);
criterion_main!(benches);
