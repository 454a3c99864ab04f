//! Data-store contract and the in-memory reference implementation.
//!
//! The engine treats the attendance, salary-structure, payroll, and
//! finance stores as external collaborators; this module expresses their
//! contract as the [`EngineStore`] trait. The trait is synchronous because
//! every engine operation is request/batch-shaped and runs to completion
//! within one call. [`MemoryStore`] is the reference implementation used
//! by the test suite.

mod memory;

pub use memory::MemoryStore;

use uuid::Uuid;

use crate::models::{
    AttendanceRecord, Employee, ExpenseRecord, IncomeRecord, PayMonth, PayrollRecord,
    SalaryAdjustment, SalaryStructure,
};

/// The data-access contract the engine operates against.
///
/// Implementations must uphold two invariants the engine relies on:
/// at most one attendance record per (employee, date), and at most one
/// payroll record per (employee, month, year) — the engine maintains the
/// latter by deleting before inserting during regeneration.
pub trait EngineStore {
    /// All employees with the active flag set.
    fn active_employees(&self) -> Vec<Employee>;

    /// Looks up one employee by id.
    fn employee(&self, id: &str) -> Option<Employee>;

    /// The current salary structure for an employee: the one with the most
    /// recent `effective_from`.
    fn current_salary_structure(&self, employee_id: &str) -> Option<SalaryStructure>;

    /// All attendance records for an employee whose date falls within the
    /// given pay month.
    fn attendance_for_month(&self, employee_id: &str, period: PayMonth) -> Vec<AttendanceRecord>;

    /// Deletes any payroll record for (employee, month, year), cascading to
    /// its adjustments. Returns the number of records removed.
    fn delete_payroll_for_period(&mut self, employee_id: &str, period: PayMonth) -> usize;

    /// Inserts a freshly generated payroll record.
    fn insert_payroll(&mut self, record: PayrollRecord);

    /// Looks up one payroll record by id.
    fn payroll(&self, id: Uuid) -> Option<PayrollRecord>;

    /// Replaces a payroll record in place, matched by id. Returns `false`
    /// if no record with that id exists.
    fn update_payroll(&mut self, record: PayrollRecord) -> bool;

    /// All payroll records.
    fn payrolls(&self) -> Vec<PayrollRecord>;

    /// Inserts an adjustment.
    fn insert_adjustment(&mut self, adjustment: SalaryAdjustment);

    /// Deletes one adjustment from one payroll record. Returns `false` if
    /// it did not exist.
    fn delete_adjustment(&mut self, payroll_id: Uuid, adjustment_id: Uuid) -> bool;

    /// All adjustments belonging to one payroll record.
    fn adjustments_for(&self, payroll_id: Uuid) -> Vec<SalaryAdjustment>;

    /// All income rows.
    fn incomes(&self) -> Vec<IncomeRecord>;

    /// All expense rows.
    fn expenses(&self) -> Vec<ExpenseRecord>;
}
