use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use flate2::bufread::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;

use self::controls::Session;

pub mod color;
pub mod controls;
pub mod diagram;
pub mod error;
pub mod math;
pub mod optics;
pub mod units;

/// Reads a session from JSON, gzip-compressed if the file name ends in `.gz`.
pub fn load_setup(path: impl AsRef<Path>) -> Result<Session> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let mut reader = BufReader::new(file);
    let session: Session = if path.extension() == Some("gz".as_ref()) {
        let mut decoder = GzDecoder::new(reader);
        serde_json::from_reader(&mut decoder)?
    } else {
        serde_json::from_reader(&mut reader)?
    };
    session.validate()?;
    log::info!("loaded setup from {}", path.display());
    Ok(session)
}

/// Writes an SVG document, as `.svgz` if the file name says so.
pub fn save_svg(path: impl AsRef<Path>, svg: &str) -> Result<()> {
    let path = path.as_ref();
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    if path.extension() == Some("svgz".as_ref()) {
        let mut encoder = GzEncoder::new(writer, Compression::default());
        encoder.write_all(svg.as_bytes())?;
        encoder.finish()?.flush()?;
    } else {
        writer.write_all(svg.as_bytes())?;
        writer.flush()?;
    }

    log::info!("wrote diagram to {}", path.display());
    Ok(())
}
