//! Integration tests for freq-output.

use std::cell::RefCell;
use std::rc::Rc;

use freq_core::{Phase, Point3, SimConfig};
use freq_sim::{Sim, SimBuilder, SimObserver, SimSnapshot};

use crate::{EventKind, EventRow, OutputError, OutputResult, OutputWriter, TickRow};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Keeps every row in memory.
#[derive(Default)]
struct VecWriter {
    ticks:    Vec<TickRow>,
    events:   Vec<EventRow>,
    finishes: usize,
}

impl OutputWriter for VecWriter {
    fn write_ticks(&mut self, rows: &[TickRow]) -> OutputResult<()> {
        self.ticks.extend_from_slice(rows);
        Ok(())
    }
    fn write_events(&mut self, rows: &[EventRow]) -> OutputResult<()> {
        self.events.extend_from_slice(rows);
        Ok(())
    }
    fn finish(&mut self) -> OutputResult<()> {
        self.finishes += 1;
        Ok(())
    }
}

/// Fails every tick write.
struct FullDisk;

impl OutputWriter for FullDisk {
    fn write_ticks(&mut self, _rows: &[TickRow]) -> OutputResult<()> {
        Err(OutputError::Io(std::io::Error::other("disk full")))
    }
    fn write_events(&mut self, _rows: &[EventRow]) -> OutputResult<()> {
        Ok(())
    }
    fn finish(&mut self) -> OutputResult<()> {
        Ok(())
    }
}

fn snapshot(elapsed: f32, bucket: Option<Point3>) -> SimSnapshot {
    SimSnapshot {
        phase: Phase::CargoLoad,
        simulation_elapsed_secs: elapsed,
        cargo_load_percent: 75.0,
        bucket_position: bucket,
        mob_active: true,
        ..Default::default()
    }
}

fn tick_row(tick: u64, bucket: Option<Point3>) -> TickRow {
    TickRow::from_snapshot(tick, &snapshot(tick as f32, bucket))
}

fn recorded_sim() -> (Sim, Rc<RefCell<crate::SimOutputObserver<VecWriter>>>) {
    let mut sim = SimBuilder::equipped(SimConfig::default()).build().unwrap();
    let rec = Rc::new(RefCell::new(crate::SimOutputObserver::new(VecWriter::default())));
    sim.subscribe(Box::new(Rc::clone(&rec)));
    (sim, rec)
}

// ── CsvWriter ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use super::*;
    use crate::csv::{CsvWriter, EVENTS_FILE, TICKS_FILE};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn records(path: &std::path::Path) -> Vec<csv::StringRecord> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.records().map(|r| r.unwrap()).collect()
    }

    #[test]
    fn csv_files_created_in_new_dir() {
        let dir = tmp();
        let out = dir.path().join("nested").join("run");
        let _w = CsvWriter::new(&out).unwrap();
        assert!(out.join(TICKS_FILE).exists());
        assert!(out.join(EVENTS_FILE).exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(TICKS_FILE)).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers.len(), 15);
        assert_eq!(headers[0], "tick");
        assert_eq!(headers[2], "phase");
        assert_eq!(headers[14], "mob_active");

        let mut rdr2 = csv::Reader::from_path(dir.path().join(EVENTS_FILE)).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["tick", "elapsed_secs", "kind", "value"]);
    }

    #[test]
    fn csv_tick_rows() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_ticks(&[tick_row(1, Some(Point3::new(10.0, -5.0, 1500.0))), tick_row(2, None)])
            .unwrap();
        w.finish().unwrap();

        let rows = records(&dir.path().join(TICKS_FILE));
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "1");
        assert_eq!(&rows[0][2], "CARGO-LOAD");
        assert_eq!(&rows[0][3], "75");
        assert_eq!(&rows[0][11], "10");
        assert_eq!(&rows[0][12], "-5");
        assert_eq!(&rows[0][13], "1500");
        assert_eq!(&rows[0][14], "1");
        // No crane: empty bucket columns.
        assert_eq!(&rows[1][11], "");
        assert_eq!(&rows[1][13], "");
    }

    #[test]
    fn csv_event_rows() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_events(&[
            EventRow { tick: 4, elapsed_secs: 2.5, kind: EventKind::Phase, value: "PRE-LOAD".into() },
            EventRow { tick: 9, elapsed_secs: 5.0, kind: EventKind::Mob, value: "1".into() },
        ])
        .unwrap();
        w.finish().unwrap();

        let rows = records(&dir.path().join(EVENTS_FILE));
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][1], "2.5");
        assert_eq!(&rows[0][2], "phase");
        assert_eq!(&rows[0][3], "PRE-LOAD");
        assert_eq!(&rows[1][2], "mob");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn full_session_to_csv() {
        let dir = tmp();
        let mut sim = SimBuilder::equipped(SimConfig::default()).build().unwrap();
        let rec = Rc::new(RefCell::new(crate::SimOutputObserver::new(
            CsvWriter::new(dir.path()).unwrap(),
        )));
        sim.subscribe(Box::new(Rc::clone(&rec)));
        sim.start();
        let ticks = sim.run_to_completion(1.0, 1_000).unwrap();
        rec.borrow_mut().finish().unwrap();

        let tick_rows = records(&dir.path().join(TICKS_FILE));
        assert_eq!(tick_rows.len() as u64, ticks);
        let last = tick_rows.last().unwrap();
        assert_eq!(&last[2], "NONE");
        assert_eq!(&last[3], "100");

        let event_rows = records(&dir.path().join(EVENTS_FILE));
        let phases: Vec<&str> = event_rows.iter().map(|r| r.get(3).unwrap()).collect();
        assert_eq!(
            phases,
            ["INITIAL-SURV", "PRE-LOAD", "ACTIVE-LOAD", "CARGO-LOAD", "POST-LOAD", "FINAL-SURV", "NONE"]
        );
    }
}

// ── SimOutputObserver ─────────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use super::*;
    use crate::SimOutputObserver;

    #[test]
    fn one_tick_row_per_tick() {
        let (mut sim, rec) = recorded_sim();
        sim.set_phase(Phase::ActiveLoad);
        for _ in 0..5 {
            sim.tick(1.0);
        }
        let rec = rec.borrow();
        assert_eq!(rec.ticks_recorded(), 5);
    }

    #[test]
    fn events_stamped_with_delivering_tick() {
        let (mut sim, rec) = recorded_sim();
        sim.set_phase(Phase::PreLoad);
        sim.tick(1.0);
        sim.tick(1.0);
        sim.trigger_mob();
        sim.tick(1.0);

        drop(sim);
        let writer = Rc::try_unwrap(rec).ok().unwrap().into_inner().into_writer();
        assert_eq!(writer.ticks.len(), 3);
        assert_eq!(
            writer.events,
            [
                EventRow { tick: 1, elapsed_secs: 1.0, kind: EventKind::Phase, value: "PRE-LOAD".into() },
                EventRow { tick: 3, elapsed_secs: 3.0, kind: EventKind::Mob, value: "1".into() },
            ]
        );
    }

    #[test]
    fn finish_flushes_held_events_once() {
        let (mut sim, rec) = recorded_sim();
        sim.tick(1.0);
        sim.set_phase(Phase::FinalSurvey);
        rec.borrow_mut().finish().unwrap();
        rec.borrow_mut().finish().unwrap();
        // Ticks after finish are ignored.
        sim.tick(1.0);

        drop(sim);
        let writer = Rc::try_unwrap(rec).ok().unwrap().into_inner().into_writer();
        assert_eq!(writer.finishes, 1);
        assert_eq!(writer.ticks.len(), 1);
        assert_eq!(writer.events.len(), 1);
        assert_eq!(writer.events[0].tick, 1);
        assert_eq!(writer.events[0].value, "FINAL-SURV");
    }

    #[test]
    fn cargo_updates_are_not_events() {
        let mut obs = SimOutputObserver::new(VecWriter::default());
        obs.on_cargo_load_updated(42.0);
        obs.on_tick_end(&snapshot(1.0, None));
        let writer = obs.into_writer();
        assert!(writer.events.is_empty());
        assert_eq!(writer.ticks[0].cargo_load_percent, 75.0);
    }

    #[test]
    fn write_error_kept_and_reported() {
        let mut obs = SimOutputObserver::new(FullDisk);
        obs.on_tick_end(&snapshot(1.0, None));
        obs.on_tick_end(&snapshot(2.0, None));
        assert_eq!(obs.ticks_recorded(), 2);
        assert!(matches!(obs.take_error(), Some(OutputError::Io(_))));
        assert!(obs.take_error().is_none());

        obs.on_tick_end(&snapshot(3.0, None));
        assert!(obs.finish().is_err());
        assert!(obs.finish().is_ok());
    }

    #[test]
    fn tick_row_copies_snapshot() {
        let row = tick_row(7, Some(Point3::ORIGIN));
        assert_eq!(row.tick, 7);
        assert_eq!(row.elapsed_secs, 7.0);
        assert_eq!(row.phase, Phase::CargoLoad);
        assert!(row.mob_active);
        assert_eq!(row.bucket, Some(Point3::ORIGIN));
    }
}
