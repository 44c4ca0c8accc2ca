//! 结算不变量的性质测试
//!
//! - 均摊份额之和等于总额
//! - 应收合计等于应付合计
//! - 指令按人汇总等于各自的应收/应付金额
//! - 指令金额均为正

use bigdecimal::{BigDecimal, Zero};
use proptest::prelude::*;
use std::collections::HashMap;
use utility_iou::service::calculator::compute_fair_share;
use utility_iou::{MonthlyUtilities, SettlementCalculator};

/// 以分为单位生成非负金额
fn amount_strategy() -> impl Strategy<Value = BigDecimal> {
    (0i64..50_000_00i64).prop_map(|cents| BigDecimal::new(cents.into(), 2))
}

/// 1..8 人，每人 0..4 项付款
fn utilities_strategy() -> impl Strategy<Value = MonthlyUtilities> {
    prop::collection::vec(prop::collection::vec(amount_strategy(), 0..4), 1..8).prop_map(|people| {
        let mut utilities = MonthlyUtilities::new();
        for (i, payments) in people.into_iter().enumerate() {
            let person = format!("person{i}");
            utilities.add_person(person.clone());
            for (j, amount) in payments.into_iter().enumerate() {
                utilities.insert(person.clone(), format!("utility{j}"), amount);
            }
        }
        utilities
    })
}

fn sum<'a>(amounts: impl IntoIterator<Item = &'a BigDecimal>) -> BigDecimal {
    let mut total = BigDecimal::zero();
    for a in amounts {
        total += a;
    }
    total
}

proptest! {
    #[test]
    fn fair_share_sums_to_total(total in amount_strategy(), people in 1usize..50) {
        let shares = compute_fair_share(&total, people).unwrap();
        prop_assert_eq!(shares.len(), people);
        prop_assert_eq!(sum(&shares), total);
        let first = &shares[0];
        prop_assert!(shares[..people - 1].iter().all(|s| s == first));
        prop_assert!(shares[people - 1] >= *first);
    }

    #[test]
    fn credits_balance_debts(utilities in utilities_strategy()) {
        let report = SettlementCalculator::new(&utilities).settle().unwrap();
        prop_assert_eq!(sum(&report.fair_share), report.grand_total.clone());
        prop_assert_eq!(
            sum(report.creditors.iter().map(|s| &s.amount)),
            sum(report.debtors.iter().map(|s| &s.amount))
        );
    }

    #[test]
    fn instructions_settle_every_party_exactly(utilities in utilities_strategy()) {
        let report = SettlementCalculator::new(&utilities).settle().unwrap();

        let mut paid: HashMap<&str, BigDecimal> = HashMap::new();
        let mut received: HashMap<&str, BigDecimal> = HashMap::new();
        for i in &report.instructions {
            prop_assert!(i.amount > BigDecimal::zero());
            *paid.entry(i.debtor.as_str()).or_insert_with(BigDecimal::zero) += &i.amount;
            *received.entry(i.creditor.as_str()).or_insert_with(BigDecimal::zero) += &i.amount;
        }

        for d in &report.debtors {
            prop_assert_eq!(paid.get(d.person.as_str()).cloned().unwrap_or_else(BigDecimal::zero), d.amount.clone());
        }
        for c in &report.creditors {
            prop_assert_eq!(received.get(c.person.as_str()).cloned().unwrap_or_else(BigDecimal::zero), c.amount.clone());
        }
    }

    #[test]
    fn settle_is_deterministic(utilities in utilities_strategy()) {
        let first = SettlementCalculator::new(&utilities).settle().unwrap();
        let second = SettlementCalculator::new(&utilities).settle().unwrap();
        prop_assert_eq!(first, second);
    }
}
