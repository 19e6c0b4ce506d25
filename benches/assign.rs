use criterion::{black_box, criterion_group, criterion_main, Criterion};

use vaultlight::defs::{item_type, DefinitionIndex, ItemDefinition};
use vaultlight::{assign_mods, ArmorSlot};

fn mod_def(type_name: &str, cost: u8) -> ItemDefinition {
    ItemDefinition {
        name: type_name.to_string(),
        type_name: type_name.to_string(),
        item_type: item_type::MOD,
        energy_cost: Some(cost),
        ..Default::default()
    }
}

fn build_input() -> (Vec<u32>, DefinitionIndex) {
    let mut defs = DefinitionIndex::new();
    let mut hashes = Vec::new();
    let mut hash = 1u32;

    // A seed mod per slot plus a spread of general and unbucketed mods
    for slot in ArmorSlot::ALL {
        defs.insert(hash, mod_def(&format!("{} Armor Mod", slot.name()), 3));
        hashes.push(hash);
        hash += 1;
    }
    for i in 0..20 {
        let type_name = if i % 3 == 0 {
            format!("General Armor Mod {}", i)
        } else {
            format!("Siphon Mod {}", i)
        };
        defs.insert(hash, mod_def(&type_name, (i % 5) as u8 + 1));
        hashes.push(hash);
        hash += 1;
    }
    // A few unresolvable hashes mixed in
    hashes.extend([9001, 9002]);

    (hashes, defs)
}

fn bench_assign(c: &mut Criterion) {
    let (hashes, defs) = build_input();
    c.bench_function("assign_mods 25", |b| {
        b.iter(|| assign_mods(black_box(&hashes), &defs))
    });
}

criterion_group!(benches, bench_assign);
criterion_main!(benches);
