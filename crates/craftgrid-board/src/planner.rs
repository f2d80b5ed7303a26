//! Planner: owns the board state and re-renders after every change.
//!
//! The planner is the one place the job store, the employee filter and
//! the drag session live. Every operation that can change what the board
//! shows (a drop, a filter change, a new order) ends by deriving a fresh
//! [`BoardView`] from the store and handing it to each subscribed
//! [`RenderSink`]. Views are never patched incrementally.

use chrono::{NaiveDate, NaiveDateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};

use craft_core::PlannerConfig;
use craftgrid_state::{Employee, Job, JobId, JobStore, JobType, SeedData};

use crate::agenda::{self, Agenda};
use crate::engine::{AssignmentEngine, AssignmentPolicy, DragPhase, DropOutcome, DropTarget};
use crate::error::{BoardError, BoardResult};
use crate::filter::EmployeeFilter;
use crate::grid::SlotGrid;
use crate::pool::PoolView;
use crate::slot::CalendarWindow;
use crate::stats::BoardStats;
use crate::surface::{DropSurface, resolve_target};

/// Everything the presentation layer draws in one pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardView {
    pub filter: EmployeeFilter,
    pub grid: SlotGrid,
    pub pool: PoolView,
}

impl BoardView {
    pub fn derive(window: &CalendarWindow, store: &JobStore, filter: &EmployeeFilter) -> Self {
        Self {
            filter: filter.clone(),
            grid: SlotGrid::derive(window, store, filter),
            pool: PoolView::derive(store),
        }
    }
}

/// Receives each freshly derived board.
pub trait RenderSink {
    fn render(&mut self, board: &BoardView);
}

impl<F: FnMut(&BoardView)> RenderSink for F {
    fn render(&mut self, board: &BoardView) {
        self(board)
    }
}

pub struct Planner {
    config: PlannerConfig,
    window: CalendarWindow,
    store: JobStore,
    employees: Vec<Employee>,
    filter: EmployeeFilter,
    engine: AssignmentEngine,
    sinks: Vec<Box<dyn RenderSink>>,
}

impl Planner {
    /// Create a planner over a populated store.
    pub fn new(config: PlannerConfig, store: JobStore) -> BoardResult<Self> {
        config.validate()?;
        let window = CalendarWindow::from_config(&config.calendar);
        let engine = AssignmentEngine::new(AssignmentPolicy::from_config(&config.assignment));
        info!(
            slots = window.len(),
            jobs = store.len(),
            "planner ready"
        );
        Ok(Self {
            config,
            window,
            store,
            employees: Vec::new(),
            filter: EmployeeFilter::All,
            engine,
            sinks: Vec::new(),
        })
    }

    /// Create a planner from a seed document (jobs and roster).
    pub fn from_seed(config: PlannerConfig, seed: SeedData) -> BoardResult<Self> {
        let planner = Self::new(config, JobStore::from_seed(seed.jobs))?;
        Ok(planner.with_employees(seed.employees))
    }

    pub fn with_employees(mut self, employees: Vec<Employee>) -> Self {
        self.employees = employees;
        self
    }

    /// Register a sink for every subsequent render.
    pub fn subscribe(&mut self, sink: impl RenderSink + 'static) {
        self.sinks.push(Box::new(sink));
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    pub fn window(&self) -> &CalendarWindow {
        &self.window
    }

    pub fn store(&self) -> &JobStore {
        &self.store
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn filter(&self) -> &EmployeeFilter {
        &self.filter
    }

    pub fn drag_phase(&self) -> &DragPhase {
        self.engine.phase()
    }

    /// Snapshot of the current jobs and roster.
    pub fn seed(&self) -> SeedData {
        SeedData {
            employees: self.employees.clone(),
            jobs: self.store.export(),
        }
    }

    /// Derive the board from the current state.
    pub fn board(&self) -> BoardView {
        BoardView::derive(&self.window, &self.store, &self.filter)
    }

    /// Derive the board and push it to every sink.
    pub fn render(&mut self) -> BoardView {
        let board = self.board();
        debug!(
            filter = %board.filter,
            placed = board.grid.placed_count(),
            open = board.pool.jobs().len(),
            sinks = self.sinks.len(),
            "board rendered"
        );
        for sink in &mut self.sinks {
            sink.render(&board);
        }
        board
    }

    pub fn drag_start(&mut self, job_id: impl Into<JobId>) {
        self.engine.drag_start(job_id);
    }

    pub fn drag_cancel(&mut self) {
        self.engine.drag_cancel();
    }

    /// Drop the dragged job onto a known target.
    ///
    /// A slot outside the calendar window counts as unresolved.
    pub fn drop(&mut self, target: DropTarget) -> DropOutcome {
        let resolved = match target {
            DropTarget::Slot(slot) if !self.window.contains(&slot) => None,
            other => Some(other),
        };
        self.finish_drop(resolved)
    }

    /// Drop onto whatever node of a surface the pointer was released over.
    pub fn drop_on<S: DropSurface + ?Sized>(&mut self, surface: &S, node: S::Node) -> DropOutcome {
        match resolve_target(surface, node) {
            Some(target) => self.drop(target),
            None => self.finish_drop(None),
        }
    }

    fn finish_drop(&mut self, target: Option<DropTarget>) -> DropOutcome {
        let outcome = self.engine.drop(target, &mut self.store, &self.filter);
        self.render();
        outcome
    }

    /// Change the employee filter. Only the grid's content changes.
    pub fn set_filter(&mut self, filter: EmployeeFilter) {
        if self.filter != filter {
            info!(from = %self.filter, to = %filter, "employee filter changed");
        }
        self.filter = filter;
        self.render();
    }

    /// Append an order built elsewhere. Its fields are taken as given.
    pub fn add_order(&mut self, job: Job) -> BoardResult<()> {
        let id = job.id.clone();
        self.store.insert(job)?;
        info!(job = %id, "order added");
        self.render();
        Ok(())
    }

    /// Create an unscheduled order with a fresh `j<millis>` id.
    pub fn new_order(
        &mut self,
        title: impl Into<String>,
        customer: impl Into<String>,
        job_type: impl Into<JobType>,
    ) -> BoardResult<JobId> {
        let id = self.next_order_id();
        self.add_order(Job::new_order(id.clone(), title, customer, job_type))?;
        Ok(id)
    }

    fn next_order_id(&self) -> JobId {
        let mut millis = Utc::now().timestamp_millis();
        loop {
            let id = format!("j{millis}");
            if !self.store.contains(&id) {
                return id;
            }
            millis += 1;
        }
    }

    /// One employee's day over the window's hours.
    pub fn agenda(&self, employee: &str, date: NaiveDate) -> BoardResult<Agenda> {
        self.check_employee(employee)?;
        Ok(Agenda::build(&self.store, employee, date, &self.window.hours()))
    }

    pub fn next_job(&self, employee: &str, now: NaiveDateTime) -> BoardResult<Option<&Job>> {
        self.check_employee(employee)?;
        Ok(agenda::next_job(&self.store, employee, now))
    }

    pub fn stats(&self, today: NaiveDate) -> BoardStats {
        BoardStats::derive(&self.employees, &self.store, today)
    }

    /// Without a roster any id is accepted.
    fn check_employee(&self, employee: &str) -> BoardResult<()> {
        if self.employees.is_empty() || self.employees.iter().any(|e| e.id == employee) {
            Ok(())
        } else {
            Err(BoardError::UnknownEmployee(employee.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use craftgrid_state::{EmployeeRole, EmployeeStatus, JobStatus};

    use crate::surface::BoardLayout;

    fn planner_with(jobs: Vec<Job>) -> Planner {
        Planner::new(PlannerConfig::default(), JobStore::from_seed(jobs)).unwrap()
    }

    fn recorder(planner: &mut Planner) -> Rc<RefCell<Vec<BoardView>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        planner.subscribe(move |board: &BoardView| sink.borrow_mut().push(board.clone()));
        seen
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut config = PlannerConfig::default();
        config.calendar.days = 0;
        let result = Planner::new(config, JobStore::new());
        assert!(matches!(result, Err(BoardError::Config(_))));
    }

    #[test]
    fn drop_renders_once_per_event() {
        let mut planner = planner_with(vec![Job::new_order("j1", "t", "c", "Wartung")]);
        let seen = recorder(&mut planner);

        planner.drag_start("j1");
        let outcome = planner.drop("2025-12-30T10:00".parse().unwrap());

        assert!(outcome.is_applied());
        let seen = seen.borrow();
        assert_eq!(seen.len(), 1);
        assert!(seen[0].pool.is_empty());
        assert_eq!(seen[0].grid.slot_of("j1"), Some("2025-12-30T10:00".parse().unwrap()));
    }

    #[test]
    fn no_op_drop_still_redraws_unchanged_board() {
        let mut planner = planner_with(vec![Job::new_order("j1", "t", "c", "Wartung")]);
        let before = planner.board();
        let seen = recorder(&mut planner);

        planner.drag_start("missing");
        let outcome = planner.drop(DropTarget::Pool);

        assert_eq!(outcome, DropOutcome::UnknownJob { job_id: "missing".to_string() });
        assert_eq!(seen.borrow().as_slice(), &[before]);
    }

    #[test]
    fn slot_outside_window_is_unresolved() {
        let mut planner = planner_with(vec![Job::new_order("j1", "t", "c", "Wartung")]);

        planner.drag_start("j1");
        let outcome = planner.drop("2025-12-30T19:00".parse().unwrap());

        assert_eq!(outcome, DropOutcome::UnresolvedTarget { job_id: "j1".to_string() });
        assert_eq!(planner.store().get("j1").unwrap().status, JobStatus::Offen);
    }

    #[test]
    fn drop_on_card_text_lands_in_enclosing_cell() {
        let mut planner = planner_with(vec![
            Job::new_order("j1", "t", "c", "Wartung"),
            Job::new_order("j2", "t", "c", "Reparatur"),
        ]);
        planner.drag_start("j1");
        planner.drop("2025-12-29T11:00".parse().unwrap());

        let layout = BoardLayout::from_board(&planner.board());
        let text = layout.card_text("j1").unwrap();
        planner.drag_start("j2");
        let outcome = planner.drop_on(&layout, text);

        assert_eq!(
            outcome,
            DropOutcome::Scheduled {
                job_id: "j2".to_string(),
                slot: "2025-12-29T11:00".parse().unwrap()
            }
        );
        let cell = planner.board().grid.cell(&"2025-12-29T11:00".parse().unwrap()).cloned().unwrap();
        assert_eq!(cell.jobs.len(), 2);
    }

    #[test]
    fn drop_on_time_label_is_ignored() {
        let mut planner = planner_with(vec![Job::new_order("j1", "t", "c", "Wartung")]);
        let layout = BoardLayout::from_board(&planner.board());

        planner.drag_start("j1");
        let outcome = planner.drop_on(&layout, layout.time_label(10).unwrap());

        assert_eq!(outcome, DropOutcome::UnresolvedTarget { job_id: "j1".to_string() });
        assert_eq!(planner.drag_phase(), &DragPhase::Idle);
    }

    #[test]
    fn filter_change_rerenders_without_mutating() {
        let mut planner = planner_with(vec![Job::new_order("j1", "t", "c", "Wartung")]);
        planner.drag_start("j1");
        planner.drop("2025-12-29T08:00".parse().unwrap());
        let jobs_before = planner.store().export();
        let seen = recorder(&mut planner);

        planner.set_filter(EmployeeFilter::employee("u2"));

        assert_eq!(planner.store().export(), jobs_before);
        let seen = seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].filter, EmployeeFilter::employee("u2"));
        assert_eq!(seen[0].grid.placed_count(), 0);
    }

    #[test]
    fn new_order_lands_in_pool() {
        let mut planner = planner_with(vec![]);
        let seen = recorder(&mut planner);

        let id = planner.new_order("Badsanierung", "Familie Schmidt", "Installation").unwrap();

        assert!(id.starts_with('j'));
        let job = planner.store().get(&id).unwrap();
        assert_eq!(job.status, JobStatus::Offen);
        assert!(job.is_consistent());
        assert!(seen.borrow()[0].pool.contains(&id));
    }

    #[test]
    fn new_order_ids_are_unique() {
        let mut planner = planner_with(vec![]);
        let a = planner.new_order("a", "c", "Wartung").unwrap();
        let b = planner.new_order("b", "c", "Wartung").unwrap();
        assert_ne!(a, b);
        assert_eq!(planner.store().len(), 2);
    }

    #[test]
    fn add_order_with_taken_id_fails() {
        let mut planner = planner_with(vec![Job::new_order("j1", "t", "c", "Wartung")]);
        let err = planner
            .add_order(Job::new_order("j1", "dup", "c", "Wartung"))
            .unwrap_err();
        assert!(matches!(err, BoardError::State(_)));
    }

    #[test]
    fn agenda_checks_roster() {
        let seed = SeedData {
            employees: vec![Employee {
                id: "u1".to_string(),
                name: "Meister Müller".to_string(),
                role: EmployeeRole::Handwerker,
                status: EmployeeStatus::Aktiv,
            }],
            jobs: vec![],
        };
        let planner = Planner::from_seed(PlannerConfig::default(), seed).unwrap();
        let day = NaiveDate::from_ymd_opt(2025, 12, 29).unwrap();

        assert!(planner.agenda("u1", day).unwrap().is_empty());
        assert!(matches!(
            planner.agenda("u9", day),
            Err(BoardError::UnknownEmployee(id)) if id == "u9"
        ));
    }

    #[test]
    fn seed_snapshot_reflects_drops() {
        let mut planner = planner_with(vec![Job::new_order("j1", "t", "c", "Wartung")]);
        planner.drag_start("j1");
        planner.drop("2025-12-31T16:00".parse().unwrap());

        let seed = planner.seed();
        assert_eq!(seed.jobs[0].status, JobStatus::Geplant);
        assert!(seed.jobs[0].is_assigned_to("u1"));
    }
}
