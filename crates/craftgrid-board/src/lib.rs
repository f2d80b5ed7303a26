//! craftgrid planning board: slot grid, unscheduled pool, drag-and-drop.
//!
//! The board shows a fixed calendar window (days × working hours) of
//! scheduled jobs next to a pool of open orders. Moving a job card between
//! the two is the only way the board changes a job; everything on screen
//! is re-derived from the job store after each change.
//!
//! # Components
//!
//! - **`slot`**: Slot keys and the calendar window
//! - **`grid`**: SlotGrid derivation (scheduled jobs per slot)
//! - **`pool`**: UnscheduledPool derivation (open orders)
//! - **`filter`**: Employee filter ("all" or one employee)
//! - **`engine`**: Drag/drop state machine and assignment policy
//! - **`surface`**: Resolving a drop point to a slot or the pool
//! - **`planner`**: Owns the state, re-renders after every change
//! - **`agenda`**: A single worker's day and next job
//! - **`report`**: Work-report templates
//! - **`stats`**: Dashboard counters

pub mod agenda;
pub mod engine;
pub mod error;
pub mod filter;
pub mod grid;
pub mod planner;
pub mod pool;
pub mod report;
pub mod slot;
pub mod stats;
pub mod surface;
pub mod view;

pub use agenda::{
    Agenda, AgendaCursor, AgendaEntry, AgendaHour, EMPTY_DAY_MESSAGE, EMPTY_NEXT_JOB_MESSAGE, Timeline,
    next_job,
};
pub use engine::{AssignmentEngine, AssignmentPolicy, DragPhase, DropOutcome, DropTarget};
pub use error::{BoardError, BoardResult};
pub use filter::EmployeeFilter;
pub use grid::{SlotCell, SlotGrid, SlotRow};
pub use planner::{BoardView, Planner, RenderSink};
pub use pool::PoolView;
pub use report::{ReportTemplate, TEMPLATES, TemplateOutcome, WorkReport};
pub use slot::{CalendarWindow, SlotKey};
pub use stats::BoardStats;
pub use surface::{BoardLayout, DropSurface, NodeId, NodeKind, resolve_target};
pub use view::{CardAccent, JobCard};
