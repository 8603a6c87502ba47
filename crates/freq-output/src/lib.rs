//! `freq-output` — session recorders for the FREQ simulation.
//!
//! A recorder is a [`SimOutputObserver`] wrapping any [`OutputWriter`]
//! backend.  It turns the simulation's notifications into two row streams:
//!
//! | Stream   | Row          | One row per                                  |
//! |----------|--------------|----------------------------------------------|
//! | ticks    | [`TickRow`]  | `Sim::tick` call                             |
//! | events   | [`EventRow`] | phase change or MOB transition               |
//!
//! [`CsvWriter`] writes them to `ticks.csv` and `events.csv`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use freq_output::{CsvWriter, SimOutputObserver};
//!
//! let recorder = Rc::new(RefCell::new(
//!     SimOutputObserver::new(CsvWriter::new(Path::new("./output"))?),
//! ));
//! sim.subscribe(Box::new(Rc::clone(&recorder)));
//! sim.start();
//! sim.run_to_completion(1.0 / 30.0, 100_000)?;
//! recorder.borrow_mut().finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{EventKind, EventRow, TickRow};
pub use writer::OutputWriter;
