//! Action bodies for the CLI subcommands.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use tangent_curve::api::{
    draw_series, evaluate, sweep, Coefficients, ReplayToken, SeriesCfg, SweepCfg,
};

use crate::figure::Figure;
use crate::provenance::{header, write_sidecar, Payload};
use crate::table::write_sweep;

/// Read and strictly parse a coefficient file.
pub fn load_coefficients(path: &Path) -> Result<Coefficients> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading coefficients from {}", path.display()))?;
    let coeffs: Coefficients = text
        .parse()
        .with_context(|| format!("parsing coefficients in {}", path.display()))?;
    tracing::info!(
        path = %path.display(),
        pairs = coeffs.len(),
        b0 = coeffs.fundamental(),
        "coefficients_loaded"
    );
    Ok(coeffs)
}

fn sweep_params(cfg: &SweepCfg) -> serde_json::Value {
    json!({
        "start": cfg.start,
        "end": cfg.end,
        "step": cfg.step,
        "include_end": cfg.include_end,
    })
}

/// Sample one curve and write its table plus provenance.
pub fn sample(input: &Path, out: &Path, cfg: SweepCfg, tag: Option<String>) -> Result<PathBuf> {
    tracing::info!(input = %input.display(), out = %out.display(), tag = ?tag, "sample");
    let coeffs = load_coefficients(input)?;
    let s = sweep(&coeffs, &cfg)?;
    tracing::info!(
        samples = s.len(),
        closure_gap = s.closure_gap().unwrap_or(0.0),
        "sweep_done"
    );
    write_sweep(out, &s)?;
    let payload = Payload::new(
        json!({
            "action": "sample",
            "input": input.to_string_lossy(),
            "pairs": coeffs.len(),
            "sweep": sweep_params(&cfg),
        }),
        tag,
    );
    write_sidecar(out, payload)
}

/// Plot every input curve into one figure.
pub fn plot(
    inputs: &[PathBuf],
    out: &Path,
    size: u32,
    cfg: SweepCfg,
    tag: Option<String>,
) -> Result<PathBuf> {
    tracing::info!(inputs = inputs.len(), out = %out.display(), size, tag = ?tag, "plot");
    let mut fig = Figure::new(out, size);
    for input in inputs {
        let coeffs = load_coefficients(input)?;
        let s = sweep(&coeffs, &cfg)?;
        fig.add_curve(input.to_string_lossy(), &s);
    }
    tracing::debug!(curves = fig.len(), "figure_ready");
    let written = fig.finish()?;
    let payload = Payload::new(
        json!({
            "action": "plot",
            "inputs": inputs.iter().map(|p| p.to_string_lossy()).collect::<Vec<_>>(),
            "size": size,
            "sweep": sweep_params(&cfg),
        }),
        tag,
    );
    write_sidecar(&written, payload)?;
    Ok(written)
}

#[derive(Debug, Serialize)]
pub struct EvalOut {
    pub theta: f64,
    pub x: f64,
    pub y: f64,
}

/// Evaluate a single angle.
pub fn eval(input: &Path, theta: f64) -> Result<EvalOut> {
    let coeffs = load_coefficients(input)?;
    let p = evaluate(theta, &coeffs);
    tracing::debug!(theta, x = p.x, y = p.y, "eval");
    Ok(EvalOut {
        theta,
        x: p.x,
        y: p.y,
    })
}

/// Draw a random series and write it in the coefficient text format.
pub fn random(out: &Path, cfg: SeriesCfg, tok: ReplayToken, tag: Option<String>) -> Result<PathBuf> {
    tracing::info!(out = %out.display(), harmonics = cfg.harmonics, seed = tok.seed, index = tok.index, "random");
    let coeffs = draw_series(cfg, tok)?;
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(out, format!("{coeffs}\n")).with_context(|| format!("writing {}", out.display()))?;
    let payload = Payload::new(
        json!({
            "action": "random",
            "harmonics": cfg.harmonics,
            "fundamental": cfg.fundamental,
            "amplitude": cfg.amplitude,
            "decay": cfg.decay,
            "seed": tok.seed,
            "index": tok.index,
        }),
        tag,
    );
    write_sidecar(out, payload)
}

/// Provenance block for stdout.
pub fn report(tag: Option<&str>) -> serde_json::Value {
    let mut obj = header(tag);
    obj["params"] = json!({});
    obj["outputs"] = json!([]);
    obj
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write_reference(dir: &Path) -> PathBuf {
        let path = dir.join("coeff1.txt");
        fs::write(&path, "0,1~0,0~0.5,0.3\n").unwrap();
        path
    }

    #[test]
    fn eval_reference_at_zero_is_origin() {
        let dir = tempdir().unwrap();
        let input = write_reference(dir.path());
        let out = eval(&input, 0.0).unwrap();
        assert_eq!((out.x, out.y), (0.0, 0.0));
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempdir().unwrap();
        let err = load_coefficients(&dir.path().join("nope.txt")).unwrap_err();
        assert!(format!("{err:#}").contains("nope.txt"));
    }

    #[test]
    fn malformed_file_fails_at_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.txt");
        fs::write(&path, "0,1~0.5\n").unwrap();
        let err = load_coefficients(&path).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("pair 1"), "{msg}");
    }

    #[test]
    fn sample_writes_table_and_sidecar() {
        let dir = tempdir().unwrap();
        let input = write_reference(dir.path());
        let out = dir.path().join("data/curve.csv");
        let prov = sample(&input, &out, SweepCfg::default(), Some("t1".into())).unwrap();
        assert!(out.exists());
        let doc: serde_json::Value = serde_json::from_slice(&fs::read(prov).unwrap()).unwrap();
        assert_eq!(doc["params"]["pairs"], 3);
        assert_eq!(doc["params"]["sweep"]["include_end"], true);
        let rows = fs::read_to_string(&out).unwrap().lines().count();
        assert_eq!(rows, 202);
    }

    #[test]
    fn plot_renders_all_inputs() {
        let dir = tempdir().unwrap();
        let first = write_reference(dir.path());
        let second = dir.path().join("coeff2.txt");
        fs::write(&second, "0,2~0,0~0,0~0.1,-0.2").unwrap();
        let out = dir.path().join("fig/curves.svg");
        let written = plot(&[first, second], &out, 300, SweepCfg::default(), None).unwrap();
        assert_eq!(written, out);
        assert!(fs::read_to_string(&out).unwrap().contains("<svg"));
        assert!(dir.path().join("fig/curves.provenance.json").exists());
    }

    #[test]
    fn random_file_loads_back() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("rand.txt");
        let cfg = SeriesCfg {
            harmonics: 5,
            ..SeriesCfg::default()
        };
        random(&out, cfg, ReplayToken { seed: 9, index: 1 }, None).unwrap();
        let back = load_coefficients(&out).unwrap();
        assert_eq!(back, draw_series(cfg, ReplayToken { seed: 9, index: 1 }).unwrap());
    }

    #[test]
    fn report_has_provenance_fields() {
        let obj = report(Some("x"));
        assert_eq!(obj["tag"], "x");
        assert!(obj["code_rev"].is_string());
    }
}
