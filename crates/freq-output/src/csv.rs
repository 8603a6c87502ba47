//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `ticks.csv`
//! - `events.csv`

use std::fs::{self, File};
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{EventRow, OutputResult, TickRow};

pub const TICKS_FILE:  &str = "ticks.csv";
pub const EVENTS_FILE: &str = "events.csv";

const TICK_HEADER: [&str; 15] = [
    "tick",
    "elapsed_secs",
    "phase",
    "cargo_pct",
    "draft_fore_ft",
    "draft_aft_ft",
    "draft_port_ft",
    "draft_starboard_ft",
    "gm_m",
    "trim_deg",
    "heel_deg",
    "bucket_x_cm",
    "bucket_y_cm",
    "bucket_z_cm",
    "mob_active",
];

const EVENT_HEADER: [&str; 4] = ["tick", "elapsed_secs", "kind", "value"];

/// Writes a recorded session to two CSV files.
pub struct CsvWriter {
    ticks:    Writer<File>,
    events:   Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open (truncating) both files and write the
    /// header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        fs::create_dir_all(dir)?;

        let mut ticks = Writer::from_path(dir.join(TICKS_FILE))?;
        ticks.write_record(TICK_HEADER)?;

        let mut events = Writer::from_path(dir.join(EVENTS_FILE))?;
        events.write_record(EVENT_HEADER)?;

        Ok(Self {
            ticks,
            events,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_ticks(&mut self, rows: &[TickRow]) -> OutputResult<()> {
        for row in rows {
            // Empty bucket columns when there is no crane.
            let [bx, by, bz] = match row.bucket {
                Some(p) => [p.x.to_string(), p.y.to_string(), p.z.to_string()],
                None    => Default::default(),
            };
            self.ticks.write_record(&[
                row.tick.to_string(),
                row.elapsed_secs.to_string(),
                row.phase.display_name().to_owned(),
                row.cargo_load_percent.to_string(),
                row.draft_fore_ft.to_string(),
                row.draft_aft_ft.to_string(),
                row.draft_port_ft.to_string(),
                row.draft_starboard_ft.to_string(),
                row.gm_m.to_string(),
                row.trim_deg.to_string(),
                row.heel_deg.to_string(),
                bx,
                by,
                bz,
                (row.mob_active as u8).to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_events(&mut self, rows: &[EventRow]) -> OutputResult<()> {
        for row in rows {
            self.events.write_record(&[
                row.tick.to_string(),
                row.elapsed_secs.to_string(),
                row.kind.as_str().to_owned(),
                row.value.clone(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.ticks.flush()?;
        self.events.flush()?;
        Ok(())
    }
}
