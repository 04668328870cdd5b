//! Console session
//!
//! The session talks to the outside world only through [`LineSource`] and
//! [`LineSink`], so it runs the same against a terminal or a script.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use crate::consts::*;
use crate::error::RoverError;
use crate::settings::Settings;
use crate::sim::{Grid, Rover, execute_line};

/// Supplies one input line per request; `None` at end of input
pub trait LineSource {
    fn read_line(&mut self) -> Result<Option<String>, RoverError>;
}

/// Accepts output lines
pub trait LineSink {
    fn write_line(&mut self, line: &str) -> Result<(), RoverError>;
}

/// Line source over any buffered reader (stdin in the binary)
pub struct ReaderSource<R>(pub R);

impl<R: BufRead> LineSource for ReaderSource<R> {
    fn read_line(&mut self) -> Result<Option<String>, RoverError> {
        let mut bytes = Vec::new();
        if self.0.read_until(b'\n', &mut bytes)? == 0 {
            return Ok(None);
        }
        // Undecodable bytes become U+FFFD, which no command maps to.
        let line = String::from_utf8_lossy(&bytes);
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }
}

/// Line sink over any writer (stdout in the binary)
pub struct WriterSink<W>(pub W);

impl<W: Write> LineSink for WriterSink<W> {
    fn write_line(&mut self, line: &str) -> Result<(), RoverError> {
        writeln!(self.0, "{}", line)?;
        self.0.flush()?;
        Ok(())
    }
}

/// Scripted input
impl LineSource for VecDeque<String> {
    fn read_line(&mut self) -> Result<Option<String>, RoverError> {
        Ok(self.pop_front())
    }
}

/// Captured output
impl LineSink for Vec<String> {
    fn write_line(&mut self, line: &str) -> Result<(), RoverError> {
        self.push(line.to_string());
        Ok(())
    }
}

/// Announce and perform the landing described by `settings`
pub fn land_rover<'g>(
    settings: &Settings,
    grid: &'g Grid,
    sink: &mut impl LineSink,
) -> Result<Rover<'g>, RoverError> {
    if settings.reveal_obstacles {
        for p in grid.obstacles() {
            sink.write_line(&p.to_string())?;
        }
    }

    sink.write_line(&format!("Landing rover at {}", settings.start.position))?;
    let landing = settings.start.land(grid)?;
    if landing.adjusted() {
        sink.write_line(&format!(
            "Grid has obstacle at rover starting position. Landed rover at {} instead",
            landing.rover.position()
        ))?;
    }
    Ok(landing.rover)
}

/// Drive the rover from `source` until `exit` or end of input.
///
/// Returns the rover as it stood when the session ended.
pub fn run_session<'g>(
    rover: Rover<'g>,
    source: &mut impl LineSource,
    sink: &mut impl LineSink,
) -> Result<Rover<'g>, RoverError> {
    let mut rover = rover;

    loop {
        sink.write_line(MENU)?;

        let Some(line) = source.read_line()? else {
            log::info!("Input closed; ending session");
            break;
        };
        if line.eq_ignore_ascii_case(EXIT_COMMAND) {
            break;
        }

        let report = execute_line(rover, &line);
        log::debug!("Applied {} commands from {:?}", report.executed, line);
        if let Some(message) = report.blocked.and_then(|o| o.report()) {
            sink.write_line(&message)?;
        }
        rover = report.rover;
        sink.write_line(&rover.position_report())?;
    }

    Ok(rover)
}
