//! In-memory reference implementation of the data-store contract.

use uuid::Uuid;

use crate::models::{
    AttendanceRecord, Employee, ExpenseRecord, IncomeRecord, PayMonth, PayrollRecord,
    SalaryAdjustment, SalaryStructure,
};

use super::EngineStore;

/// An in-memory [`EngineStore`].
///
/// Used by the test suite and as the reference semantics for the contract,
/// in particular the one-record-per-(employee, date) attendance invariant
/// and the adjustment cascade on payroll deletion.
///
/// # Example
///
/// ```
/// use payroll_ledger_engine::store::{EngineStore, MemoryStore};
/// use payroll_ledger_engine::models::Employee;
///
/// let mut store = MemoryStore::new();
/// store.add_employee(Employee {
///     id: "emp_001".to_string(),
///     name: "Ayesha Rahman".to_string(),
///     department: None,
///     designation: None,
///     active: true,
/// });
/// assert_eq!(store.active_employees().len(), 1);
/// ```
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    employees: Vec<Employee>,
    structures: Vec<SalaryStructure>,
    attendance: Vec<AttendanceRecord>,
    payrolls: Vec<PayrollRecord>,
    adjustments: Vec<SalaryAdjustment>,
    incomes: Vec<IncomeRecord>,
    expenses: Vec<ExpenseRecord>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an employee.
    pub fn add_employee(&mut self, employee: Employee) {
        self.employees.push(employee);
    }

    /// Adds a salary structure revision for an employee.
    pub fn add_salary_structure(&mut self, structure: SalaryStructure) {
        self.structures.push(structure);
    }

    /// Adds or replaces the attendance record for (employee, date). The
    /// replace branch is what manual correction uses.
    pub fn add_attendance(&mut self, record: AttendanceRecord) {
        if let Some(existing) = self
            .attendance
            .iter_mut()
            .find(|r| r.employee_id == record.employee_id && r.date == record.date)
        {
            *existing = record;
        } else {
            self.attendance.push(record);
        }
    }

    /// Adds an income row.
    pub fn add_income(&mut self, income: IncomeRecord) {
        self.incomes.push(income);
    }

    /// Adds an expense row.
    pub fn add_expense(&mut self, expense: ExpenseRecord) {
        self.expenses.push(expense);
    }
}

impl EngineStore for MemoryStore {
    fn active_employees(&self) -> Vec<Employee> {
        self.employees.iter().filter(|e| e.active).cloned().collect()
    }

    fn employee(&self, id: &str) -> Option<Employee> {
        self.employees.iter().find(|e| e.id == id).cloned()
    }

    fn current_salary_structure(&self, employee_id: &str) -> Option<SalaryStructure> {
        self.structures
            .iter()
            .filter(|s| s.employee_id == employee_id)
            .max_by_key(|s| s.effective_from)
            .cloned()
    }

    fn attendance_for_month(&self, employee_id: &str, period: PayMonth) -> Vec<AttendanceRecord> {
        self.attendance
            .iter()
            .filter(|r| r.employee_id == employee_id && period.contains(r.date))
            .cloned()
            .collect()
    }

    fn delete_payroll_for_period(&mut self, employee_id: &str, period: PayMonth) -> usize {
        let removed_ids: Vec<Uuid> = self
            .payrolls
            .iter()
            .filter(|r| {
                r.employee_id == employee_id && r.month == period.month && r.year == period.year
            })
            .map(|r| r.id)
            .collect();
        self.payrolls.retain(|r| !removed_ids.contains(&r.id));
        self.adjustments
            .retain(|a| !removed_ids.contains(&a.payroll_id));
        removed_ids.len()
    }

    fn insert_payroll(&mut self, record: PayrollRecord) {
        self.payrolls.push(record);
    }

    fn payroll(&self, id: Uuid) -> Option<PayrollRecord> {
        self.payrolls.iter().find(|r| r.id == id).cloned()
    }

    fn update_payroll(&mut self, record: PayrollRecord) -> bool {
        match self.payrolls.iter_mut().find(|r| r.id == record.id) {
            Some(existing) => {
                *existing = record;
                true
            }
            None => false,
        }
    }

    fn payrolls(&self) -> Vec<PayrollRecord> {
        self.payrolls.clone()
    }

    fn insert_adjustment(&mut self, adjustment: SalaryAdjustment) {
        self.adjustments.push(adjustment);
    }

    fn delete_adjustment(&mut self, payroll_id: Uuid, adjustment_id: Uuid) -> bool {
        let before = self.adjustments.len();
        self.adjustments
            .retain(|a| !(a.payroll_id == payroll_id && a.id == adjustment_id));
        self.adjustments.len() < before
    }

    fn adjustments_for(&self, payroll_id: Uuid) -> Vec<SalaryAdjustment> {
        self.adjustments
            .iter()
            .filter(|a| a.payroll_id == payroll_id)
            .cloned()
            .collect()
    }

    fn incomes(&self) -> Vec<IncomeRecord> {
        self.incomes.clone()
    }

    fn expenses(&self) -> Vec<ExpenseRecord> {
        self.expenses.clone()
    }
}
