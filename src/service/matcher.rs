use bigdecimal::{BigDecimal, Zero};

use crate::models::{PaymentInstruction, Standing};

/// 贪心匹配应付方与应收方
///
/// 外层按应付金额升序遍历 debtors，内层按应收金额升序遍历 creditors，
/// 每次支付 min(剩余应付, 剩余应收)。两个列表须已排序。
pub fn match_debtors_to_creditors(creditors: &[Standing], debtors: &[Standing]) -> Vec<PaymentInstruction> {
    // 应收方剩余金额，匹配过程中扣减
    let mut outstanding: Vec<BigDecimal> = creditors.iter().map(|c| c.amount.clone()).collect();
    let mut instructions = Vec::new();

    for debtor in debtors {
        let mut remaining = debtor.amount.clone();

        for (creditor, credit) in creditors.iter().zip(outstanding.iter_mut()) {
            if *credit <= BigDecimal::zero() {
                continue;
            }
            // 已付清，处理下一位
            if remaining <= BigDecimal::zero() {
                break;
            }

            let pay = if remaining >= *credit {
                credit.clone()
            } else {
                remaining.clone()
            };

            *credit -= &pay;
            remaining -= &pay;

            instructions.push(PaymentInstruction {
                debtor: debtor.person.clone(),
                creditor: creditor.person.clone(),
                amount: pay,
            });
        }

        if remaining > BigDecimal::zero() {
            tracing::warn!("{} still owes {} after all creditors were paid", debtor.person, remaining);
        }
    }

    instructions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use std::str::FromStr;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    fn standing(person: &str, role: Role, amount: &str) -> Standing {
        Standing {
            person: person.to_string(),
            role,
            paid: BigDecimal::zero(),
            amount: dec(amount),
        }
    }

    fn triples(instructions: &[PaymentInstruction]) -> Vec<(&str, &str, BigDecimal)> {
        instructions
            .iter()
            .map(|i| (i.debtor.as_str(), i.creditor.as_str(), i.amount.clone()))
            .collect()
    }

    #[test]
    fn single_debtor_pays_single_creditor() {
        let creditors = vec![standing("a", Role::Creditor, "50.00")];
        let debtors = vec![standing("c", Role::Debtor, "50.00")];
        let out = match_debtors_to_creditors(&creditors, &debtors);
        assert_eq!(triples(&out), vec![("c", "a", dec("50.00"))]);
    }

    #[test]
    fn debtor_spreads_over_creditors_in_ascending_order() {
        let creditors = vec![
            standing("x", Role::Creditor, "10.00"),
            standing("y", Role::Creditor, "30.00"),
        ];
        let debtors = vec![
            standing("p", Role::Debtor, "15.00"),
            standing("q", Role::Debtor, "25.00"),
        ];
        let out = match_debtors_to_creditors(&creditors, &debtors);
        assert_eq!(
            triples(&out),
            vec![
                ("p", "x", dec("10.00")),
                ("p", "y", dec("5.00")),
                ("q", "y", dec("25.00")),
            ]
        );
    }

    #[test]
    fn exhausted_creditors_are_skipped() {
        let creditors = vec![
            standing("x", Role::Creditor, "5.00"),
            standing("y", Role::Creditor, "5.00"),
        ];
        let debtors = vec![
            standing("p", Role::Debtor, "5.00"),
            standing("q", Role::Debtor, "5.00"),
        ];
        let out = match_debtors_to_creditors(&creditors, &debtors);
        assert_eq!(
            triples(&out),
            vec![("p", "x", dec("5.00")), ("q", "y", dec("5.00"))]
        );
    }

    #[test]
    fn no_parties_no_instructions() {
        assert!(match_debtors_to_creditors(&[], &[]).is_empty());
    }
}
