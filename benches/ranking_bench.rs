//! Enrichment throughput: demand flattening plus the full rank battery.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use datacore::data::{CrewRecord, ItemIndex, ItemRecord};
use datacore::pipeline::enrich_roster;
use datacore::ranking::run_battery;
use serde_json::json;

const SKILLS: [&str; 6] = [
    "command_skill",
    "science_skill",
    "security_skill",
    "engineering_skill",
    "diplomacy_skill",
    "medicine_skill",
];

fn catalog() -> ItemIndex {
    let mut items = Vec::new();
    for tier in 0..20u32 {
        items.push(json!({
            "symbol": format!("gear_{tier}"),
            "recipe": {"craftCost": 10 + tier, "list": [
                {"symbol": format!("part_{}", tier % 7), "count": 1 + tier % 3, "factionOnly": false},
                {"symbol": format!("part_{}", (tier + 3) % 7), "count": 2, "factionOnly": tier % 5 == 0}
            ]}
        }));
    }
    for part in 0..7u32 {
        items.push(json!({
            "symbol": format!("part_{part}"),
            "item_sources": [
                {"type": 0, "cost": 6 + part, "chance_grade": part % 6},
                {"type": 2, "cost": 10, "avg_cost": 20.0 + f64::from(part)}
            ]
        }));
    }
    let items: Vec<ItemRecord> = serde_json::from_value(json!(items)).unwrap();
    ItemIndex::new(items)
}

fn roster(size: usize) -> Vec<CrewRecord> {
    (0..size)
        .map(|i| {
            let mut skills = serde_json::Map::new();
            for offset in 0..3 {
                let core = 100 + (i * 37 + offset * 101) % 900;
                skills.insert(
                    SKILLS[(i + offset * 2) % SKILLS.len()].to_string(),
                    json!({"core": core, "range_min": core / 3, "range_max": core / 2}),
                );
            }
            let slots: Vec<_> = (0..4)
                .map(|slot| json!({"level": slot * 10 + 1, "symbol": format!("gear_{}", (i + slot * 5) % 20)}))
                .collect();
            serde_json::from_value(json!({
                "symbol": format!("crew_{i}"),
                "name": format!("Crew {i}"),
                "max_rarity": 1 + i % 5,
                "base_skills": skills,
                "equipment_slots": slots,
            }))
            .unwrap()
        })
        .collect()
}

fn bench_enrichment(c: &mut Criterion) {
    let items = catalog();

    let mut group = c.benchmark_group("enrichment");
    group.sample_size(30);

    for size in [100usize, 1_000] {
        let crew = roster(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("rank_battery", size), &crew, |b, crew| {
            b.iter_batched(
                || crew.clone(),
                |mut crew| {
                    run_battery(&mut crew);
                    black_box(crew)
                },
                BatchSize::LargeInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("enrich_roster", size), &crew, |b, crew| {
            b.iter_batched(
                || crew.clone(),
                |mut crew| {
                    enrich_roster(&mut crew, &items);
                    black_box(crew)
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_enrichment);
criterion_main!(benches);
