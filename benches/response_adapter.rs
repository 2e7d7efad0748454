//! Benchmarks for backend response adaptation
//!
//! This benchmark measures:
//! - Parsing the backend wire payload
//! - Adapting parsed responses into analysis and suggestion

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use complaint_triage_client::{adapt_backend_response, BackendComplaintResponse};

fn backend_payload(sources: usize) -> String {
    let kaynaklar: Vec<serde_json::Value> = (0..sources)
        .map(|i| {
            serde_json::json!({
                "dokuman_adi": format!("Prosedür {}", i),
                "kaynak": format!("docs/prosedur-{}.pdf", i),
                "ozet": "Yetkisiz işlemlerde itiraz süreci"
            })
        })
        .collect();

    serde_json::json!({
        "id": 42,
        "maskedText": "Kartımdan bilgim dışında [MASKED] TL çekildi",
        "kategori": "DOLANDIRICILIK_YETKISIZ_ISLEM",
        "oncelik": "YUKSEK",
        "oneri": "Kartınız geçici olarak kullanıma kapatıldı.",
        "durum": "ANALYZED",
        "kaynaklar": kaynaklar,
        "insan_incelemesi_gerekli": true,
        "guven_skorlari": {"kategori": 0.92, "oncelik": 0.81},
        "sistem_durumu": {"rag_durumu": "OK", "llm_durumu": "OK"}
    })
    .to_string()
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_backend_response");

    for sources in [0usize, 5, 50] {
        let payload = backend_payload(sources);
        group.throughput(Throughput::Bytes(payload.len() as u64));
        group.bench_with_input(BenchmarkId::new("sources", sources), &payload, |b, p| {
            b.iter(|| {
                let parsed: BackendComplaintResponse =
                    serde_json::from_str(black_box(p)).unwrap();
                black_box(parsed)
            })
        });
    }

    group.finish();
}

fn bench_adapt(c: &mut Criterion) {
    let mut group = c.benchmark_group("adapt_backend_response");

    for sources in [0usize, 5, 50] {
        let parsed: BackendComplaintResponse =
            serde_json::from_str(&backend_payload(sources)).unwrap();
        group.bench_with_input(BenchmarkId::new("sources", sources), &parsed, |b, r| {
            b.iter(|| black_box(adapt_backend_response(black_box(r))))
        });
    }

    let unmapped = BackendComplaintResponse {
        category_code: "TEKNIK".into(),
        priority_code: "ACIL".into(),
        ..Default::default()
    };
    group.bench_function("unmapped_codes", |b| {
        b.iter(|| black_box(adapt_backend_response(black_box(&unmapped))))
    });

    group.finish();
}

criterion_group!(benches, bench_parse, bench_adapt);
criterion_main!(benches);
