// File: crates/demo/src/main.rs
// Summary: Demo renders a synthetic (or CSV-loaded) signal through the scope:
//          full view, zoomed transient, simulated drag, benchmark overlay.

use anyhow::{Context, Result};
use scope_core::types::{HEIGHT, WIDTH};
use scope_core::{theme, Scope};
use std::path::{Path, PathBuf};

const SAMPLE_RATE: f64 = 8_000.0;

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let input = args.next();
    let theme_name = args.next().unwrap_or_else(|| "dark".to_string());

    let samples = match &input {
        Some(path) => {
            let samples = load_samples_csv(Path::new(path))
                .with_context(|| format!("failed to load samples from '{path}'"))?;
            println!("Loaded {} samples from {path}", samples.len());
            samples
        }
        None => {
            let samples = synth_pluck(6.0);
            println!("Synthesized {} samples at {} Hz", samples.len(), SAMPLE_RATE);
            samples
        }
    };
    if samples.is_empty() {
        anyhow::bail!("no samples to plot — check the input file.");
    }
    let n = samples.len();

    let mut scope = Scope::with_theme(WIDTH, HEIGHT, theme::find(&theme_name))?;
    scope.plot_signal(samples, 1.0 / SAMPLE_RATE, None);
    scope.autoscale();

    // 1) Full trace
    let out_full = out_name("full");
    scope.render_to_png(&out_full)?;
    println!("Wrote {}", out_full.display());

    // 2) Zoom into the attack transient
    scope.set_bounds(Some(0.95), Some(1.15), None, None);
    let out_zoom = out_name("zoom");
    scope.render_to_png(&out_zoom)?;
    println!("Wrote {}", out_zoom.display());

    // 3) Simulated drag: pan right through the trace with fast redraws
    scope.pan_start(512, 320);
    for step in 1..=4 {
        scope.mouse_move(512 - step * 60, 320);
    }
    scope.pan_end();
    let out_pan = out_name("pan");
    scope.render_to_png(&out_pan)?;
    println!("Wrote {}", out_pan.display());

    // 4) Benchmark overlay over the full view again
    scope.benchmark(true);
    scope.autoscale();
    let out_bench = out_name("bench");
    scope.render_to_png(&out_bench)?;
    if let Some(stats) = scope.last_frame() {
        println!(
            "Wrote {} ({} points in {:.2} ms)",
            out_bench.display(),
            stats.points,
            stats.duration.as_secs_f64() * 1e3
        );
    }

    println!("Rendered {n}-sample trace in theme '{}'", scope.theme().name);
    Ok(())
}

/// Output file name like target/out/scope_<suffix>.png
fn out_name(suffix: &str) -> PathBuf {
    let out = PathBuf::from("target/out");
    std::fs::create_dir_all(&out).ok();
    out.join(format!("scope_{suffix}.png"))
}

/// A plucked-string-ish burst: decaying partials after a quiet lead-in,
/// deterministic so repeated runs produce identical output.
fn synth_pluck(seconds: f64) -> Vec<f64> {
    let n = (seconds * SAMPLE_RATE) as usize;
    let mut v = Vec::with_capacity(n);
    for i in 0..n {
        let t = i as f64 / SAMPLE_RATE;
        let env = if t < 1.0 { 0.05 } else { (-(t - 1.0) * 1.2).exp() };
        let tone = (t * 220.0 * std::f64::consts::TAU).sin() * 0.7
            + (t * 440.0 * std::f64::consts::TAU).sin() * 0.2
            + (t * 663.0 * std::f64::consts::TAU).sin() * 0.08;
        // cheap deterministic noise floor
        let noise = ((i as f64 * 12.9898).sin() * 43758.5453).fract() * 0.01;
        v.push(tone * env + noise);
    }
    v
}

/// Load one sample per row from the first CSV column; unparseable rows are
/// skipped rather than failing the run.
fn load_samples_csv(path: &Path) -> Result<Vec<f64>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        if let Some(v) = rec.get(0).and_then(|s| s.trim().parse::<f64>().ok()) {
            out.push(v);
        }
    }
    Ok(out)
}
