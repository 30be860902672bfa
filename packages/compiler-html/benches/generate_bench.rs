use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sigforge_compiler_html::generate_signature_html;
use sigforge_schema::{find_template, LayoutPreset, Signature, SIGNATURE_TEMPLATES};

fn template(id: &str) -> Signature {
    find_template(id)
        .map(|template| template.instantiate("bench"))
        .unwrap_or_else(|| Signature::new("bench", "Bench User"))
}

fn generate_each_layout(c: &mut Criterion) {
    for (id, layout) in [
        ("corporate-classic", LayoutPreset::Horizontal),
        ("creative-professional", LayoutPreset::Stacked),
        ("freelancer", LayoutPreset::Compact),
    ] {
        let signature = template(id);
        c.bench_function(&format!("generate_{layout}"), |b| {
            b.iter(|| generate_signature_html(black_box(&signature)))
        });
    }
}

fn generate_all_templates(c: &mut Criterion) {
    let signatures: Vec<Signature> = SIGNATURE_TEMPLATES
        .iter()
        .map(|template| template.instantiate(template.name))
        .collect();

    c.bench_function("generate_all_templates", |b| {
        b.iter(|| {
            for signature in &signatures {
                black_box(generate_signature_html(black_box(signature)));
            }
        })
    });
}

criterion_group!(benches, generate_each_layout, generate_all_templates);
criterion_main!(benches);
