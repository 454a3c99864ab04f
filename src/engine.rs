//! The payroll engine service.
//!
//! [`PayrollEngine`] ties the data-store contract to the pure calculation
//! functions and exposes the operations the route and report layers
//! consume: batch payroll generation, adjustment add/delete, status
//! updates, and general ledger computation.
//!
//! # Concurrency
//!
//! Every operation is request/batch-triggered and runs to completion
//! within one call; there is no streaming and no partial response.
//! Regeneration for one (month, year) is not safe to run concurrently for
//! the same period: the delete-then-insert is not one atomic transaction,
//! so callers must serialize regeneration per period (e.g. an external
//! lock keyed on month and year). Two concurrent adjustment writes on the
//! same payroll record race on the read-then-write recomputation; the last
//! write wins. Ledger computation is read-only and safe for unlimited
//! concurrent invocations.

use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    aggregate_attendance, calculate_payroll, compute_general_ledger, recompute_adjustments,
};
use crate::config::PayrollSettings;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AdjustmentType, LedgerReport, PayMonth, PayrollRecord, PayrollStatus, SalaryAdjustment,
};
use crate::money::parse_amount;
use crate::store::EngineStore;

/// The outcome of a batch payroll generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationOutcome {
    /// How many payroll records were created.
    pub created: usize,
    /// How many employees were skipped for lack of a salary structure.
    pub skipped: usize,
}

/// The payroll computation and ledger service over a data store.
///
/// # Example
///
/// ```
/// use payroll_ledger_engine::config::PayrollSettings;
/// use payroll_ledger_engine::engine::PayrollEngine;
/// use payroll_ledger_engine::models::PayMonth;
/// use payroll_ledger_engine::store::MemoryStore;
///
/// let mut engine = PayrollEngine::new(MemoryStore::new(), PayrollSettings::default());
/// let outcome = engine
///     .generate_payroll(PayMonth { month: 1, year: 2026 }, "admin")
///     .unwrap();
/// assert_eq!(outcome.created, 0);
/// ```
#[derive(Debug)]
pub struct PayrollEngine<S: EngineStore> {
    store: S,
    settings: PayrollSettings,
}

impl<S: EngineStore> PayrollEngine<S> {
    /// Creates an engine over a store with the given HR settings. The
    /// settings are read once here and passed into every calculation.
    pub fn new(store: S, settings: PayrollSettings) -> Self {
        Self { store, settings }
    }

    /// Read access to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The settings this engine was constructed with.
    pub fn settings(&self) -> &PayrollSettings {
        &self.settings
    }

    /// Generates payroll for every active employee for one pay month.
    ///
    /// Regeneration is destructive and idempotent per (employee, period):
    /// any existing record for the period is deleted (cascading its
    /// adjustments) before the fresh one is inserted, so re-running with
    /// unchanged inputs yields the same records, not duplicates.
    ///
    /// Employees without a salary structure are skipped and counted, never
    /// fatal; each employee is processed independently.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPeriod`] if the month is out of range.
    pub fn generate_payroll(
        &mut self,
        period: PayMonth,
        actor: &str,
    ) -> EngineResult<GenerationOutcome> {
        validate_period(period)?;

        let generated_at = Utc::now();
        let mut created = 0usize;
        let mut skipped = 0usize;

        for employee in self.store.active_employees() {
            let Some(structure) = self.store.current_salary_structure(&employee.id) else {
                warn!(
                    employee_id = %employee.id,
                    period = %period,
                    "Skipping employee without salary structure"
                );
                skipped += 1;
                continue;
            };

            let records = self.store.attendance_for_month(&employee.id, period);
            let attendance = aggregate_attendance(&records, period);
            let record = calculate_payroll(
                &structure,
                &attendance,
                &self.settings,
                period,
                actor,
                generated_at,
            );

            self.store.delete_payroll_for_period(&employee.id, period);
            self.store.insert_payroll(record);
            created += 1;
        }

        info!(
            period = %period,
            created,
            skipped,
            actor,
            "Payroll generation completed"
        );

        Ok(GenerationOutcome { created, skipped })
    }

    /// Generates (or regenerates) payroll for a single employee.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPeriod`] for an out-of-range month,
    /// [`EngineError::EmployeeNotFound`] for an unknown employee, and
    /// [`EngineError::MissingSalaryStructure`] when the employee has no
    /// structure — in the single-employee scope this is surfaced directly
    /// instead of being counted as a skip.
    pub fn generate_payroll_for_employee(
        &mut self,
        employee_id: &str,
        period: PayMonth,
        actor: &str,
    ) -> EngineResult<PayrollRecord> {
        validate_period(period)?;

        let employee =
            self.store
                .employee(employee_id)
                .ok_or_else(|| EngineError::EmployeeNotFound {
                    id: employee_id.to_string(),
                })?;
        let structure = self
            .store
            .current_salary_structure(&employee.id)
            .ok_or_else(|| EngineError::MissingSalaryStructure {
                employee_id: employee.id.clone(),
            })?;

        let records = self.store.attendance_for_month(&employee.id, period);
        let attendance = aggregate_attendance(&records, period);
        let record = calculate_payroll(
            &structure,
            &attendance,
            &self.settings,
            period,
            actor,
            Utc::now(),
        );

        self.store.delete_payroll_for_period(&employee.id, period);
        self.store.insert_payroll(record.clone());

        info!(
            employee_id = %employee.id,
            period = %period,
            net_salary = %record.net_salary,
            "Payroll generated for single employee"
        );

        Ok(record)
    }

    /// Adds a discretionary adjustment to a payroll record and recomputes
    /// its net salary from the full resulting adjustment list.
    ///
    /// The amount arrives as a decimal string, per the engine's boundary
    /// convention, and must be strictly positive; the adjustment type
    /// alone decides the sign applied during recomputation. The record is
    /// never left half-updated: all validation happens before anything is
    /// written.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::PayrollNotFound`] for an unknown record and
    /// [`EngineError::InvalidAmount`] for an unparseable, zero, or
    /// negative amount.
    pub fn add_adjustment(
        &mut self,
        payroll_id: Uuid,
        kind: AdjustmentType,
        amount: &str,
        reason: &str,
        actor: &str,
    ) -> EngineResult<SalaryAdjustment> {
        let mut record = self
            .store
            .payroll(payroll_id)
            .ok_or(EngineError::PayrollNotFound { id: payroll_id })?;
        let parsed = parse_amount(amount)?;
        if parsed <= Decimal::ZERO {
            return Err(EngineError::InvalidAmount {
                value: amount.to_string(),
                message: "adjustment amount must be positive".to_string(),
            });
        }

        let adjustment = SalaryAdjustment {
            id: Uuid::new_v4(),
            payroll_id,
            kind,
            amount: parsed,
            reason: reason.to_string(),
            created_by: actor.to_string(),
            created_at: Utc::now(),
        };

        let mut adjustments = self.store.adjustments_for(payroll_id);
        adjustments.push(adjustment.clone());
        recompute_adjustments(&record, &adjustments).apply_to(&mut record);

        self.store.insert_adjustment(adjustment.clone());
        self.store.update_payroll(record);

        info!(
            payroll_id = %payroll_id,
            kind = %kind,
            amount = %adjustment.amount,
            actor,
            "Adjustment added"
        );

        Ok(adjustment)
    }

    /// Deletes one adjustment and recomputes the record's net salary over
    /// the remaining adjustments — the identical recomputation as on
    /// insert, so net salary never drifts across add/delete cycles.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::PayrollNotFound`] for an unknown record and
    /// [`EngineError::AdjustmentNotFound`] for an unknown adjustment.
    pub fn delete_adjustment(
        &mut self,
        payroll_id: Uuid,
        adjustment_id: Uuid,
    ) -> EngineResult<()> {
        let mut record = self
            .store
            .payroll(payroll_id)
            .ok_or(EngineError::PayrollNotFound { id: payroll_id })?;

        if !self.store.delete_adjustment(payroll_id, adjustment_id) {
            return Err(EngineError::AdjustmentNotFound {
                payroll_id,
                adjustment_id,
            });
        }

        let remaining = self.store.adjustments_for(payroll_id);
        recompute_adjustments(&record, &remaining).apply_to(&mut record);
        self.store.update_payroll(record);

        info!(
            payroll_id = %payroll_id,
            adjustment_id = %adjustment_id,
            "Adjustment deleted"
        );

        Ok(())
    }

    /// Updates a payroll record's lifecycle status.
    ///
    /// Transitions are monotonic in practice (draft, generated, paid) but
    /// the order is not hard-enforced, preserved as observed. Setting
    /// `Paid` stamps the payment timestamp the general ledger uses for
    /// inclusion and dating; an already-paid record keeps its original
    /// stamp.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::PayrollNotFound`] for an unknown record.
    pub fn update_payroll_status(
        &mut self,
        payroll_id: Uuid,
        status: PayrollStatus,
    ) -> EngineResult<()> {
        let mut record = self
            .store
            .payroll(payroll_id)
            .ok_or(EngineError::PayrollNotFound { id: payroll_id })?;

        record.status = status;
        if status == PayrollStatus::Paid && record.paid_at.is_none() {
            record.paid_at = Some(Utc::now());
        }
        self.store.update_payroll(record);

        info!(payroll_id = %payroll_id, status = %status, "Payroll status updated");

        Ok(())
    }

    /// Computes the general ledger over all income, expense, and
    /// paid-payroll rows. The view is produced fresh on every call.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InconsistentLedgerData`] if any source row is
    /// malformed; no partial report is produced.
    pub fn compute_general_ledger(&self) -> EngineResult<LedgerReport> {
        compute_general_ledger(
            &self.store.incomes(),
            &self.store.expenses(),
            &self.store.payrolls(),
        )
    }
}

fn validate_period(period: PayMonth) -> EngineResult<()> {
    if period.first_day().is_none() {
        return Err(EngineError::InvalidPeriod {
            month: period.month,
            year: period.year,
        });
    }
    Ok(())
}
