use std::thread;
use std::time::Duration;

use log::{debug, info, warn};

use crate::engine::client::MegaverseClient;
use crate::engine::transport::Transport;
use crate::error::ApiResult;
use crate::model::cell_code::CellCode;
use crate::model::goal_map::GoalMap;

/// Blocks between goal rows to stay under the service's rate limit.
pub trait Pause {
    fn pause(&mut self, duration: Duration);
}

pub struct ThreadSleep;

impl Pause for ThreadSleep {
    fn pause(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stroke {
    Create,
    Erase,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaintReport {
    pub rows: usize,
    pub calls: usize,
    pub blank: usize,
    pub unrecognized: usize,
}

const CROSS_FIRST: u32 = 2;
const CROSS_LAST: u32 = 8;

/// Coordinates of the X drawn by [`Painter::draw_cross`]: both diagonals of
/// rows 2..=8, the crossing cell listed once.
pub fn cross_cells() -> Vec<(u32, u32)> {
    let mut cells = Vec::new();
    for start in CROSS_FIRST..=CROSS_LAST {
        let end = CROSS_FIRST + CROSS_LAST - start;
        cells.push((start, start));
        if start != end {
            cells.push((start, end));
        }
    }
    cells
}

pub struct Painter<T, P> {
    client: MegaverseClient<T>,
    pacer: P,
    row_delay: Duration,
}

impl<T: Transport, P: Pause> Painter<T, P> {
    pub fn new(client: MegaverseClient<T>, pacer: P, row_delay: Duration) -> Self {
        Self {
            client,
            pacer,
            row_delay,
        }
    }

    pub fn draw_cross(&mut self) -> ApiResult<PaintReport> {
        let mut report = PaintReport::default();
        for (row, column) in cross_cells() {
            self.client.polyanets().create(row, column)?;
            report.calls += 1;
        }
        report.rows = (CROSS_LAST - CROSS_FIRST + 1) as usize;
        Ok(report)
    }

    pub fn draw_goal(&mut self) -> ApiResult<PaintReport> {
        let goal = self.client.goal_map().get_goal()?;
        self.replay(&goal, Stroke::Create)
    }

    /// Deletes whatever the goal map says should be drawn.
    pub fn clear_goal(&mut self) -> ApiResult<PaintReport> {
        let goal = self.client.goal_map().get_goal()?;
        self.replay(&goal, Stroke::Erase)
    }

    fn replay(&mut self, goal: &GoalMap, stroke: Stroke) -> ApiResult<PaintReport> {
        let mut report = PaintReport::default();

        for row in 0..goal.rows() {
            if row > 0 {
                info!("Sleeping {:?} before row {}...", self.row_delay, row + 1);
                self.pacer.pause(self.row_delay);
            }

            for (column, code) in goal.row_cells(row) {
                if code.is_drawable() {
                    self.apply(row as u32, column, &code, stroke)?;
                    report.calls += 1;
                } else if let CellCode::Unrecognized(raw) = &code {
                    warn!("Skipping unrecognized cell '{}' at ({}, {})", raw, row, column);
                    report.unrecognized += 1;
                } else {
                    report.blank += 1;
                }
            }

            report.rows += 1;
            info!("Finished row {} of {}", row + 1, goal.rows());
        }

        Ok(report)
    }

    fn apply(&self, row: u32, column: u32, code: &CellCode, stroke: Stroke) -> ApiResult<()> {
        debug!("{:?} {} at ({}, {})", stroke, code.encode(), row, column);
        match (code, stroke) {
            (CellCode::Polyanet, Stroke::Create) => self.client.polyanets().create(row, column)?,
            (CellCode::Polyanet, Stroke::Erase) => self.client.polyanets().delete(row, column)?,
            (CellCode::Soloon(color), Stroke::Create) => {
                self.client.soloons().create(row, column, *color)?
            }
            (CellCode::Soloon(_), Stroke::Erase) => self.client.soloons().delete(row, column)?,
            (CellCode::Cometh(direction), Stroke::Create) => {
                self.client.comeths().create(row, column, *direction)?
            }
            (CellCode::Cometh(_), Stroke::Erase) => self.client.comeths().delete(row, column)?,
            (CellCode::Space | CellCode::Unrecognized(_), _) => return Ok(()),
        };
        Ok(())
    }
}
