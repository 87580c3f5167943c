//! End-to-end tests for the Gibbs motif sampler.

use psat::motif::{GibbsConfig, GibbsSampler};

fn planted_sequences() -> Vec<Vec<u8>> {
    // TACGAT planted at a different offset in each sequence.
    vec![
        b"TACGATGGGGGGGG".to_vec(),
        b"CCCCTACGATCCCC".to_vec(),
        b"GGGGGGGGTACGAT".to_vec(),
        b"AATACGATAAAAAA".to_vec(),
    ]
}

#[test]
fn test_sampler_terminates_and_reports_windows() {
    let mut sampler = GibbsSampler::new(planted_sequences(), GibbsConfig::default())
        .expect("valid sampler input");
    let motifs = sampler.run();

    assert_eq!(motifs.len(), 4);
    let seqs = planted_sequences();
    for motif in &motifs {
        assert_eq!(motif.window.len(), 6);
        let seq = &seqs[motif.seq_index];
        assert!(motif.start + 6 <= seq.len());
        assert_eq!(
            motif.window.as_bytes(),
            &seq[motif.start..motif.start + 6]
        );
    }
}

#[test]
fn test_same_seed_same_motifs() {
    let run = |seed| {
        let config = GibbsConfig {
            seed,
            ..GibbsConfig::default()
        };
        GibbsSampler::new(planted_sequences(), config)
            .expect("valid sampler input")
            .run()
    };

    assert_eq!(run(20), run(20));
    assert_eq!(run(7), run(7));
}

#[test]
fn test_iteration_cap_is_respected() {
    // A cap of one iteration forces an immediate report; the windows must
    // still be real slices of the inputs.
    let config = GibbsConfig {
        max_iterations: 1,
        ..GibbsConfig::default()
    };
    let mut sampler =
        GibbsSampler::new(planted_sequences(), config).expect("valid sampler input");
    let motifs = sampler.run();

    assert_eq!(motifs.len(), 4);
    for motif in &motifs {
        assert_eq!(motif.window.len(), 6);
    }
}
