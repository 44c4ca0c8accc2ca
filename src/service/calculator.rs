use bigdecimal::{BigDecimal, Zero};
use indexmap::IndexMap;
use tracing::{debug, info};

use crate::error::{PaymentDefect, SettleError};
use crate::models::{MonthlyUtilities, Role, SettlementReport, Standing};
use crate::service::matcher::match_debtors_to_creditors;

/// 金额保留两位小数 (分)
const CENT_SCALE: i64 = 2;

/// 结算计算器: 汇总 -> 均摊 -> 分类 -> 匹配
pub struct SettlementCalculator<'a> {
    utilities: &'a MonthlyUtilities,
}

impl<'a> SettlementCalculator<'a> {
    pub fn new(utilities: &'a MonthlyUtilities) -> Self {
        Self { utilities }
    }

    /// 完整结算流程，生成报告
    pub fn settle(&self) -> Result<SettlementReport, SettleError> {
        validate_payments(self.utilities)?;

        // Phase 1: 汇总
        let grand_total = compute_grand_total(self.utilities)?;
        let utility_totals = compute_utility_totals(self.utilities);
        let individual_totals = compute_individual_totals(self.utilities);
        info!(
            "Grand total {} across {} people, {} utilities",
            grand_total,
            self.utilities.len(),
            utility_totals.len()
        );

        // Phase 2: 均摊
        let fair_share = compute_fair_share(&grand_total, self.utilities.len())?;
        info!("Fair share: {:?}", fair_share.iter().map(ToString::to_string).collect::<Vec<_>>());

        // Phase 3: 分类
        let (creditors, debtors) = classify_and_settle(&individual_totals, &fair_share)?;
        info!("{} creditors, {} debtors", creditors.len(), debtors.len());

        // Phase 4: 匹配
        let instructions = match_debtors_to_creditors(&creditors, &debtors);
        info!("{} payment instructions", instructions.len());

        let top_payer = paid_most(&individual_totals).map(str::to_string);

        Ok(SettlementReport {
            grand_total,
            utility_totals,
            individual_totals,
            fair_share,
            top_payer,
            creditors,
            debtors,
            instructions,
        })
    }
}

/// 拒绝负数及超过两位小数的金额
pub fn validate_payments(utilities: &MonthlyUtilities) -> Result<(), SettleError> {
    if utilities.is_empty() {
        return Err(SettleError::EmptyConfiguration);
    }

    for (person, payments) in utilities.iter() {
        for (utility, amount) in payments {
            let defect = if *amount < BigDecimal::zero() {
                Some(PaymentDefect::Negative)
            } else if amount.with_scale(CENT_SCALE) != *amount {
                Some(PaymentDefect::SubCent)
            } else {
                None
            };

            if let Some(reason) = defect {
                return Err(SettleError::InvalidPayment {
                    person: person.clone(),
                    utility: utility.clone(),
                    amount: amount.clone(),
                    reason,
                });
            }
        }
    }

    Ok(())
}

/// 全员全部付款合计，四舍五入到分
pub fn compute_grand_total(utilities: &MonthlyUtilities) -> Result<BigDecimal, SettleError> {
    if utilities.is_empty() {
        return Err(SettleError::EmptyConfiguration);
    }

    let mut total = BigDecimal::zero();
    for (_, payments) in utilities.iter() {
        for amount in payments.values() {
            total += amount;
        }
    }

    Ok(total.round(CENT_SCALE).with_scale(CENT_SCALE))
}

/// 每人付款合计 (不做舍入)
pub fn compute_individual_totals(utilities: &MonthlyUtilities) -> IndexMap<String, BigDecimal> {
    utilities
        .iter()
        .map(|(person, payments)| {
            let mut paid = BigDecimal::zero();
            for amount in payments.values() {
                paid += amount;
            }
            (person.clone(), paid)
        })
        .collect()
}

/// 每项费用的全员合计，按首次出现顺序
pub fn compute_utility_totals(utilities: &MonthlyUtilities) -> IndexMap<String, BigDecimal> {
    let mut totals: IndexMap<String, BigDecimal> = IndexMap::new();
    for (_, payments) in utilities.iter() {
        for (utility, amount) in payments {
            *totals.entry(utility.clone()).or_insert_with(BigDecimal::zero) += amount;
        }
    }
    totals
}

/// 均摊总额
///
/// 每人基础份额为 total / people 截断到分；除不尽的余数 (不足 people 分)
/// 全部加到最后一份上，保证各份之和恰好等于总额。
pub fn compute_fair_share(grand_total: &BigDecimal, people: usize) -> Result<Vec<BigDecimal>, SettleError> {
    if people == 0 {
        return Err(SettleError::EmptyConfiguration);
    }

    let count = BigDecimal::from(people as u64);
    let base = (grand_total / &count).with_scale(CENT_SCALE);
    let spread = &base * &count;
    let remainder = grand_total - &spread;

    let mut shares = vec![base.clone(); people - 1];
    shares.push((&base + &remainder).with_scale(CENT_SCALE));
    Ok(shares)
}

/// 划分应收/应付
///
/// 付款超过 fair_share[0] 的人为应收方；其余为应付方，其中付款最少的人
/// (并列时取第一个) 以 fair_share 最后一份 (含余数) 计算应付金额。
/// 金额为零的人已付足份额，不进入任何一方。两个列表均按金额稳定升序。
pub fn classify_and_settle(
    individual_totals: &IndexMap<String, BigDecimal>,
    fair_share: &[BigDecimal],
) -> Result<(Vec<Standing>, Vec<Standing>), SettleError> {
    let (Some(share), Some(last_share)) = (fair_share.first(), fair_share.last()) else {
        return Err(SettleError::EmptyConfiguration);
    };
    let least = paid_least(individual_totals);

    let mut creditors = Vec::new();
    let mut debtors = Vec::new();

    for (person, paid) in individual_totals {
        let (role, amount) = if paid > share {
            (Role::Creditor, paid - share)
        } else if least == Some(person.as_str()) {
            (Role::Debtor, last_share - paid)
        } else {
            (Role::Debtor, share - paid)
        };
        let amount = amount.round(CENT_SCALE).with_scale(CENT_SCALE);

        if amount.is_zero() {
            debug!("{} paid {} and is settled", person, paid);
            continue;
        }
        debug!("{} paid {} -> {:?} {}", person, paid, role, amount);

        let standing = Standing {
            person: person.clone(),
            role,
            paid: paid.clone(),
            amount,
        };
        match role {
            Role::Creditor => creditors.push(standing),
            Role::Debtor => debtors.push(standing),
        }
    }

    creditors.sort_by(|a, b| a.amount.cmp(&b.amount));
    debtors.sort_by(|a, b| a.amount.cmp(&b.amount));

    Ok((creditors, debtors))
}

/// 付款最少的人，并列时取第一个
pub fn paid_least(individual_totals: &IndexMap<String, BigDecimal>) -> Option<&str> {
    let mut least: Option<(&str, &BigDecimal)> = None;
    for (person, paid) in individual_totals {
        if least.map_or(true, |(_, min)| paid < min) {
            least = Some((person.as_str(), paid));
        }
    }
    least.map(|(person, _)| person)
}

/// 付款最多的人，并列时取第一个
pub fn paid_most(individual_totals: &IndexMap<String, BigDecimal>) -> Option<&str> {
    let mut most: Option<(&str, &BigDecimal)> = None;
    for (person, paid) in individual_totals {
        if most.map_or(true, |(_, max)| paid > max) {
            most = Some((person.as_str(), paid));
        }
    }
    most.map(|(person, _)| person)
}
