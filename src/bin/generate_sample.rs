use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    // 2 s of 1 kHz samples
    let dt = 0.001;
    let n_samples = 2000;

    // Per-shock damped oscillation: (frequency Hz, amplitude mm, phase rad, decay s)
    let shocks = [
        (1.8, 38.0, 0.0, 1.6),
        (2.1, 33.0, 0.9, 1.4),
        (1.6, 41.0, 2.2, 1.8),
        (2.4, 30.0, 1.5, 1.2),
    ];

    let mut text = String::new();
    for n in 0..n_samples {
        let t = n as f64 * dt;
        let row: Vec<String> = shocks
            .iter()
            .map(|&(freq, amp, phase, decay)| {
                let pos = amp
                    * (-t / decay).exp()
                    * (2.0 * std::f64::consts::PI * freq * t + phase).sin()
                    + rng.gauss(0.0, 0.15);
                format!("{pos:.5}")
            })
            .collect();
        text.push_str(&row.join(" "));
        text.push('\n');
    }

    std::fs::write("sample_shock_log.txt", &text).expect("Failed to write sample log");

    // The same content framed the way the upload widget delivers it, so the
    // main binary can be exercised with `shocklog < sample_payload.txt`.
    let payload = format!("data:text/plain;base64,{}", STANDARD.encode(&text));
    std::fs::write("sample_payload.txt", payload).expect("Failed to write payload");

    println!(
        "Wrote {n_samples} samples ({} channels) to sample_shock_log.txt and sample_payload.txt",
        shocks.len()
    );
}
