//! Property-based tests for the calculation invariants.
//!
//! These pin the algebraic guarantees the engine makes: exact decimal
//! arithmetic, net-salary restoration across adjustment add/delete cycles,
//! the late-to-absent conversion equivalence, and order-independence of
//! ledger totals.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use std::str::FromStr;
use uuid::Uuid;

use payroll_ledger_engine::calculation::compute_general_ledger;
use payroll_ledger_engine::config::PayrollSettings;
use payroll_ledger_engine::engine::PayrollEngine;
use payroll_ledger_engine::models::{
    AdjustmentType, AttendanceRecord, AttendanceStatus, Employee, IncomeRecord, PayMonth,
    SalaryStructure,
};
use payroll_ledger_engine::money::{format_amount, parse_amount, sum_amounts};
use payroll_ledger_engine::store::{EngineStore, MemoryStore};

fn cents_to_string(cents: u64) -> String {
    format!("{}.{:02}", cents / 100, cents % 100)
}

fn adjustment_kind(index: u8) -> AdjustmentType {
    match index % 5 {
        0 => AdjustmentType::Bonus,
        1 => AdjustmentType::Penalty,
        2 => AdjustmentType::LoanDeduction,
        3 => AdjustmentType::Advance,
        _ => AdjustmentType::Other,
    }
}

fn seeded_store(basic_cents: u64) -> MemoryStore {
    let mut store = MemoryStore::new();
    store.add_employee(Employee {
        id: "emp_001".to_string(),
        name: "Ayesha Rahman".to_string(),
        department: None,
        designation: None,
        active: true,
    });
    store.add_salary_structure(SalaryStructure {
        employee_id: "emp_001".to_string(),
        basic_salary: Decimal::from_str(&cents_to_string(basic_cents)).unwrap(),
        house_allowance: Decimal::ZERO,
        medical_allowance: Decimal::ZERO,
        travel_allowance: Decimal::ZERO,
        food_allowance: Decimal::ZERO,
        other_allowance: Decimal::ZERO,
        effective_from: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
    });
    store
}

fn seeded_engine(basic_cents: u64) -> PayrollEngine<MemoryStore> {
    PayrollEngine::new(seeded_store(basic_cents), PayrollSettings::default())
}

fn period() -> PayMonth {
    PayMonth {
        month: 1,
        year: 2026,
    }
}

fn status_record(day: u32, status: AttendanceStatus) -> AttendanceRecord {
    AttendanceRecord {
        employee_id: "emp_001".to_string(),
        date: NaiveDate::from_ymd_opt(2026, 1, day).unwrap(),
        status,
        check_in: None,
        check_out: None,
    }
}

proptest! {
    /// Decimal amounts survive a parse/format round trip without losing
    /// value, whatever the trailing-zero shape of the input.
    #[test]
    fn prop_amount_roundtrip_preserves_value(cents in 0u64..10_000_000_000) {
        let text = cents_to_string(cents);
        let parsed = parse_amount(&text).unwrap();
        let reparsed = parse_amount(&format_amount(parsed)).unwrap();
        prop_assert_eq!(parsed, reparsed);
    }

    /// Summing amount strings agrees with integer arithmetic over cents.
    /// This is the no-float-drift guarantee at the smallest scale.
    #[test]
    fn prop_sum_matches_integer_cents(cents in proptest::collection::vec(0u64..1_000_000, 0..50)) {
        let strings: Vec<String> = cents.iter().copied().map(cents_to_string).collect();
        let total: u64 = cents.iter().sum();

        let summed = parse_amount(&sum_amounts(&strings).unwrap()).unwrap();
        let expected = parse_amount(&cents_to_string(total)).unwrap();
        prop_assert_eq!(summed, expected);
    }

    /// Adding any batch of adjustments and then deleting them all restores
    /// the payroll record's net salary to the last digit.
    #[test]
    fn prop_adjustment_add_delete_restores_net(
        basic_cents in 100_000u64..10_000_000,
        adjustments in proptest::collection::vec((0u8..5, 1u64..1_000_000), 0..8),
    ) {
        let mut engine = seeded_engine(basic_cents);
        let record = engine
            .generate_payroll_for_employee("emp_001", period(), "admin")
            .unwrap();
        let original_net = record.net_salary;

        let mut ids = Vec::new();
        for (kind_index, cents) in adjustments {
            let added = engine
                .add_adjustment(
                    record.id,
                    adjustment_kind(kind_index),
                    &cents_to_string(cents),
                    "prop",
                    "admin",
                )
                .unwrap();
            ids.push(added.id);
        }
        for id in ids {
            engine.delete_adjustment(record.id, id).unwrap();
        }

        let after = engine.store().payroll(record.id).unwrap();
        prop_assert_eq!(after.net_salary, original_net);
        prop_assert_eq!(after.other_deductions, Decimal::ZERO);
    }

    /// Every three late days cost exactly one absent day: a month of
    /// `lates` late marks nets the same salary as `lates / 3` absences
    /// plus `lates % 3` late marks.
    #[test]
    fn prop_three_lates_equal_one_absent(lates in 0u32..=31, basic_cents in 100_000u64..10_000_000) {
        let mut late_store = seeded_store(basic_cents);
        for day in 1..=lates {
            late_store.add_attendance(status_record(day, AttendanceStatus::Late));
        }

        let converted_absents = lates / 3;
        let residual_lates = lates % 3;
        let mut split_store = seeded_store(basic_cents);
        for day in 1..=converted_absents {
            split_store.add_attendance(status_record(day, AttendanceStatus::Absent));
        }
        for day in 1..=residual_lates {
            split_store
                .add_attendance(status_record(converted_absents + day, AttendanceStatus::Late));
        }

        let mut late_engine = PayrollEngine::new(late_store, PayrollSettings::default());
        let mut split_engine = PayrollEngine::new(split_store, PayrollSettings::default());
        let from_lates = late_engine
            .generate_payroll_for_employee("emp_001", period(), "admin")
            .unwrap();
        let from_split = split_engine
            .generate_payroll_for_employee("emp_001", period(), "admin")
            .unwrap();

        prop_assert_eq!(from_lates.attendance_deduction, from_split.attendance_deduction);
        prop_assert_eq!(from_lates.net_salary, from_split.net_salary);
    }

    /// The ledger's final balance depends only on the set of rows, never
    /// on the order they arrive in.
    #[test]
    fn prop_ledger_balance_is_order_independent(
        amounts in proptest::collection::vec((1u32..=28, 0u64..1_000_000), 1..30),
    ) {
        let rows: Vec<IncomeRecord> = amounts
            .iter()
            .map(|(day, cents)| IncomeRecord {
                id: Uuid::new_v4(),
                date: NaiveDate::from_ymd_opt(2026, 1, *day).unwrap(),
                description: "row".to_string(),
                category: "client_payment".to_string(),
                amount: cents_to_string(*cents),
            })
            .collect();
        let reversed: Vec<IncomeRecord> = rows.iter().rev().cloned().collect();

        let forward = compute_general_ledger(&rows, &[], &[]).unwrap();
        let backward = compute_general_ledger(&reversed, &[], &[]).unwrap();

        prop_assert_eq!(forward.final_balance, backward.final_balance);
        prop_assert_eq!(forward.total_debits, backward.total_debits);
        prop_assert_eq!(
            forward.final_balance,
            forward.total_debits - forward.total_credits
        );
    }

    /// Each ledger entry's balance is the previous balance plus its own
    /// debit-minus-credit, and the last balance equals the final balance.
    #[test]
    fn prop_running_balance_is_cumulative(
        amounts in proptest::collection::vec((1u32..=28, 0u64..1_000_000), 1..30),
    ) {
        let rows: Vec<IncomeRecord> = amounts
            .iter()
            .map(|(day, cents)| IncomeRecord {
                id: Uuid::new_v4(),
                date: NaiveDate::from_ymd_opt(2026, 1, *day).unwrap(),
                description: "row".to_string(),
                category: "client_payment".to_string(),
                amount: cents_to_string(*cents),
            })
            .collect();

        let report = compute_general_ledger(&rows, &[], &[]).unwrap();

        let mut expected = Decimal::ZERO;
        for entry in &report.entries {
            expected += entry.debit - entry.credit;
            prop_assert_eq!(entry.balance, expected);
        }
        prop_assert_eq!(report.final_balance, expected);
    }
}
