//! Sweep tables on disk (`theta,x,y`), CSV or Parquet by extension.

use anyhow::{bail, Context, Result};
use polars::prelude::*;
use std::fs::{self, File};
use std::path::Path;
use tangent_curve::api::Sweep;

pub fn sweep_frame(s: &Sweep) -> PolarsResult<DataFrame> {
    polars::df!(
        "theta" => s.theta.as_slice(),
        "x" => s.x.as_slice(),
        "y" => s.y.as_slice()
    )
}

/// Write the sweep to `out`; parent directories are created as needed.
pub fn write_sweep(out: &Path, s: &Sweep) -> Result<()> {
    let mut df = sweep_frame(s)?;
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let ext = out
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("csv") => {
            let mut file =
                File::create(out).with_context(|| format!("creating {}", out.display()))?;
            CsvWriter::new(&mut file)
                .include_header(true)
                .finish(&mut df)
                .with_context(|| format!("writing {}", out.display()))?;
        }
        Some("parquet") => {
            let file = File::create(out).with_context(|| format!("creating {}", out.display()))?;
            ParquetWriter::new(file)
                .finish(&mut df)
                .with_context(|| format!("writing {}", out.display()))?;
        }
        _ => bail!(
            "unsupported table extension for {} (use .csv or .parquet)",
            out.display()
        ),
    }
    tracing::info!(
        out = %out.display(),
        rows = df.height(),
        cols = df.width(),
        "sweep_table_written"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tangent_curve::api::{sweep, Coefficients, SweepCfg};
    use tempfile::tempdir;

    fn demo_sweep() -> Sweep {
        let c = Coefficients::from_tuples(&[(0.0, 1.0), (0.0, 0.0), (0.5, 0.3)]).unwrap();
        sweep(&c, &SweepCfg::default()).unwrap()
    }

    #[test]
    fn frame_has_one_row_per_sample() {
        let df = sweep_frame(&demo_sweep()).unwrap();
        assert_eq!(df.shape(), (201, 3));
        for name in ["theta", "x", "y"] {
            assert!(df.column(name).is_ok(), "missing column {name}");
        }
    }

    #[test]
    fn csv_round_trips_through_lazy_reader() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("nested/curve.csv");
        write_sweep(&out, &demo_sweep()).unwrap();
        let df = LazyCsvReader::new(&out)
            .with_infer_schema_length(Some(100))
            .finish()
            .unwrap()
            .collect()
            .unwrap();
        assert_eq!(df.height(), 201);
        assert_eq!(df.width(), 3);
    }

    #[test]
    fn parquet_is_written() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("curve.parquet");
        write_sweep(&out, &demo_sweep()).unwrap();
        assert!(fs::metadata(&out).unwrap().len() > 0);
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let dir = tempdir().unwrap();
        let err = write_sweep(&dir.path().join("curve.txt"), &demo_sweep()).unwrap_err();
        assert!(err.to_string().contains("unsupported"));
    }
}
