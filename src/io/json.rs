use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use std::sync::Arc;

use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use crate::config::SimConfig;
use crate::error::PersistError;
use crate::pad::LaunchPad;
use crate::sim::event::EventLog;
use crate::vehicle::{LaunchConfig, Rocket};

/// Where the launcher keeps its parameters unless told otherwise.
pub const DEFAULT_STORE: &str = "./data/launchParams.json";

// ---------------------------------------------------------------------------
// Persisted records: configuration only, never live flight state
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointRecord {
    pub x: f64,
    pub y: f64,
}

impl From<Point2<f64>> for PointRecord {
    fn from(p: Point2<f64>) -> Self {
        Self { x: p.x, y: p.y }
    }
}

impl From<PointRecord> for Point2<f64> {
    fn from(p: PointRecord) -> Self {
        Point2::new(p.x, p.y)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RocketRecord {
    pub name: String,
    pub angle: f64,
    pub velocity: f64,
    pub start: PointRecord,
}

impl From<&Rocket> for RocketRecord {
    fn from(r: &Rocket) -> Self {
        let c = r.config();
        Self {
            name: c.name().to_string(),
            angle: c.angle_deg(),
            velocity: c.velocity(),
            start: c.start().into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PadRecord {
    pub anchor: PointRecord,
    pub rockets: Vec<RocketRecord>,
}

impl LaunchPad {
    pub fn to_record(&self) -> PadRecord {
        PadRecord {
            anchor: self.anchor().into(),
            rockets: self.rockets().iter().map(RocketRecord::from).collect(),
        }
    }

    /// Rebuild a pad from persisted parameters. Every rocket comes back
    /// on the pad at its recorded start, un-launched.
    pub fn from_record(
        record: &PadRecord,
        config: SimConfig,
        log: Arc<EventLog>,
    ) -> Result<Self, PersistError> {
        // Validate everything first so a rejected load logs nothing.
        let launches = record
            .rockets
            .iter()
            .enumerate()
            .map(|(index, r)| {
                LaunchConfig::new(
                    r.name.clone(),
                    r.angle,
                    r.velocity,
                    r.start.into(),
                    config.max_velocity,
                )
                .map_err(|source| PersistError::InvalidRocket { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut pad = LaunchPad::new(config, log);
        pad.set_anchor(record.anchor.into());
        for launch in launches {
            pad.push(launch);
        }
        pad.log()
            .log_event(format!("Launch pad loaded with {} rockets", pad.len()));
        Ok(pad)
    }
}

// ---------------------------------------------------------------------------
// Reader / writer
// ---------------------------------------------------------------------------

/// Write the pad's launch parameters as pretty JSON.
pub fn write_pad<W: Write>(writer: &mut W, pad: &LaunchPad) -> Result<(), PersistError> {
    serde_json::to_writer_pretty(&mut *writer, &pad.to_record())?;
    writeln!(writer)?;
    Ok(())
}

pub fn read_pad<R: Read>(
    reader: R,
    config: SimConfig,
    log: Arc<EventLog>,
) -> Result<LaunchPad, PersistError> {
    let record: PadRecord = serde_json::from_reader(reader)?;
    LaunchPad::from_record(&record, config, log)
}

/// Save to `path`, creating parent directories as needed.
pub fn write_pad_file(path: impl AsRef<Path>, pad: &LaunchPad) -> Result<(), PersistError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let mut writer = BufWriter::new(File::create(path)?);
    write_pad(&mut writer, pad)?;
    writer.flush()?;
    Ok(())
}

pub fn read_pad_file(
    path: impl AsRef<Path>,
    config: SimConfig,
    log: Arc<EventLog>,
) -> Result<LaunchPad, PersistError> {
    let file = File::open(path)?;
    read_pad(BufReader::new(file), config, log)
}
