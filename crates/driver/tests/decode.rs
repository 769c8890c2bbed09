//! Decode semantics of the built tree: any value that matches a pattern's
//! literal bits must decode to that pattern, whatever its field bits hold.

use opdec_analyzer::pattern::PatternId;
use opdec_analyzer::{analyze, Analysis};
use opdec_common::files::{FileStore, SourceFileId};
use opdec_parser::parse_table;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const AVR: &str = include_str!("fixtures/avr.opd");

fn analysis(src: &str) -> Analysis {
    let mut files = FileStore::new();
    let id: SourceFileId = files.add_file("table.opd", src);
    let (table, diags) = parse_table(id, src);
    assert!(diags.is_empty(), "unexpected diagnostics: {diags:#?}");
    analyze(id, &table).expect("table should analyze")
}

#[test]
fn leaf_count_equals_pattern_count() {
    let analysis = analysis(AVR);
    assert_eq!(analysis.tree.leaf_count(), analysis.patterns.len());
}

#[test]
fn tree_is_deterministic() {
    assert_eq!(analysis(AVR).tree, analysis(AVR).tree);
}

#[test]
fn three_mode_decode() {
    let analysis = analysis(AVR);
    let width_mask = (1u64 << analysis.bits) - 1;
    let mut rng = StdRng::seed_from_u64(0x0DEC0DE);

    for (index, pattern) in analysis.patterns.iter().enumerate() {
        let id = PatternId(index as u32);
        let variable = !pattern.mask & width_mask;

        // Field bits all zero, then all one.
        assert_eq!(
            analysis.tree.decode(pattern.value),
            Some(id),
            "{} with zeroed fields",
            pattern.name
        );
        assert_eq!(
            analysis.tree.decode(pattern.value | variable),
            Some(id),
            "{} with oned fields",
            pattern.name
        );

        // Then randomized fills.
        for _ in 0..100 {
            let fill: u64 = rng.gen();
            let value = pattern.value | (fill & variable);
            assert_eq!(
                analysis.tree.decode(value),
                Some(id),
                "{} with fields 0x{:04X}",
                pattern.name,
                fill & variable
            );
        }
    }
}

#[test]
fn known_encodings() {
    let analysis = analysis(AVR);
    let name_of = |value: u64| {
        let id = analysis.tree.decode(value).expect("should decode");
        analysis.patterns[id.index()].name.as_str()
    };

    assert_eq!(name_of(0x0000), "NOP");
    assert_eq!(name_of(0x01F7), "MOVW"); // movw r30, r14
    assert_eq!(name_of(0x1C01), "ADC"); // adc r0, r1
    assert_eq!(name_of(0x9508), "RET");
    assert_eq!(name_of(0x9518), "RETI");
    assert_eq!(name_of(0x9512), "SWAP"); // swap r17
    assert_eq!(name_of(0xE50F), "LDI"); // ldi r16, 0x5F
    assert_eq!(name_of(0xC800), "RJMP");
    assert_eq!(name_of(0xB608), "IN"); // in r0, 0x38
    assert_eq!(name_of(0xBE08), "OUT");
}

#[test]
fn out_of_domain_values_hit_the_sentinel() {
    // 0b1000.... : no pattern has top nibble 1000 in the abridged table.
    let analysis = analysis(AVR);
    assert_eq!(analysis.tree.decode(0x8000), None);
    assert_eq!(analysis.tree.decode(0xFFFF), None);
}
