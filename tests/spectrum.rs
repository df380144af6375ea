use rustfft::{num_complex::Complex, FftPlanner};
use saavy_drums::{synth::VoicePool, voices::DrumKind};

const SAMPLE_RATE: f64 = 44_100.0;
const FFT_SIZE: usize = 16_384;

fn render(kind: DrumKind) -> Vec<f64> {
    let mut pool = VoicePool::with_defaults(SAMPLE_RATE);
    pool.spawn(kind, 0.25, 1.0, 0.0);
    (0..FFT_SIZE).map(|_| pool.render().0[0]).collect()
}

/// Power per bin up to Nyquist.
fn power_spectrum(signal: &[f64]) -> Vec<f64> {
    let fft = FftPlanner::new().plan_fft_forward(signal.len());
    let mut buffer: Vec<Complex<f64>> = signal.iter().map(|&x| Complex::new(x, 0.0)).collect();
    fft.process(&mut buffer);
    buffer[..signal.len() / 2].iter().map(|c| c.norm_sqr()).collect()
}

fn bin_hz(bin: usize) -> f64 {
    bin as f64 * SAMPLE_RATE / FFT_SIZE as f64
}

fn centroid(power: &[f64]) -> f64 {
    let total: f64 = power.iter().sum();
    power
        .iter()
        .enumerate()
        .map(|(bin, p)| bin_hz(bin) * p)
        .sum::<f64>()
        / total
}

fn fraction_above(power: &[f64], hz: f64) -> f64 {
    let total: f64 = power.iter().sum();
    let high: f64 = power
        .iter()
        .enumerate()
        .filter(|(bin, _)| bin_hz(*bin) >= hz)
        .map(|(_, p)| p)
        .sum();
    high / total
}

#[test]
fn hihat_energy_sits_far_above_kick() {
    let kick = power_spectrum(&render(DrumKind::Kick));
    let hat = power_spectrum(&render(DrumKind::HiHat));

    let kick_centroid = centroid(&kick);
    let hat_centroid = centroid(&hat);
    assert!(kick_centroid < 1000.0, "kick centroid {kick_centroid:.0} Hz");
    assert!(hat_centroid > 4000.0, "hihat centroid {hat_centroid:.0} Hz");

    assert!(fraction_above(&hat, 2000.0) > 0.5);
    assert!(fraction_above(&kick, 2000.0) < 0.1);
}

#[test]
fn kick_peak_sits_in_the_sub_range() {
    let kick = power_spectrum(&render(DrumKind::Kick));
    let (peak, _) = kick
        .iter()
        .enumerate()
        .skip(1)
        .fold((0, 0.0), |best, (bin, &p)| if p > best.1 { (bin, p) } else { best });
    let hz = bin_hz(peak);
    assert!((40.0..200.0).contains(&hz), "kick peak at {hz:.1} Hz");
}
