use std::f64::consts::TAU;

use tonegen::{ToneEngine, AMPLITUDE, SAMPLE_RATE};

#[test]
fn renders_880_hz_scenario_in_512_frame_chunks() {
    let engine = ToneEngine::new();
    engine.set_frequency(880.0);

    let mut output = vec![0.0f32; 44_100];
    for chunk in output.chunks_mut(512) {
        engine.render_into(chunk);
    }

    // First sample is sin(0) scaled: exactly zero.
    assert_eq!(output[0], 0.0);

    // 25 samples in, the phase is 25 increments of 2π·880/44100.
    let expected = (AMPLITUDE * (TAU * 880.0 * 25.0 / SAMPLE_RATE).sin()) as f32;
    assert!(
        (output[25] - expected).abs() < 1e-6,
        "sample 25 was {}, expected {}",
        output[25],
        expected
    );
}

#[test]
fn amplitude_never_exceeds_headroom_scalar() {
    for &freq in &[40.0, 440.0, 880.0, 3_999.0, 20_000.0] {
        let engine = ToneEngine::new();
        engine.set_frequency(freq);

        // Three seconds of audio in hardware-sized pulls.
        let mut buffer = vec![0.0f32; 512];
        for _ in 0..(3 * 44_100 / 512) {
            engine.render_into(&mut buffer);
            for &sample in &buffer {
                assert!(
                    sample.abs() <= AMPLITUDE as f32,
                    "{} Hz produced out-of-range sample {}",
                    freq,
                    sample
                );
            }
        }
    }
}

#[test]
fn empty_buffer_is_a_no_op() {
    let engine = ToneEngine::new();
    engine.set_frequency(440.0);

    let mut buffer = vec![0.0f32; 64];
    engine.render_into(&mut buffer);

    let phase_before = engine.phase();
    assert_eq!(engine.render_into(&mut []), 0);
    assert_eq!(engine.phase(), phase_before);
}

#[test]
fn zero_frequency_renders_silence() {
    let engine = ToneEngine::new();
    engine.set_frequency(0.0);

    let mut buffer = vec![1.0f32; 256];
    assert_eq!(engine.render_into(&mut buffer), 256);
    assert!(buffer.iter().all(|&sample| sample == 0.0));
}

#[test]
fn negative_frequency_is_accepted_and_bounded() {
    let engine = ToneEngine::new();
    engine.set_frequency(-440.0);

    let mut buffer = vec![0.0f32; 4096];
    engine.render_into(&mut buffer);

    assert!(buffer.iter().all(|sample| sample.abs() <= AMPLITUDE as f32));
    // Mirror image of the positive-frequency tone: heads negative first.
    assert!(buffer[1] < 0.0);
}
