use std::io::{self, Write};

use super::money;
use crate::models::SettlementReport;

const BANNER_WIDTH: usize = 80;

/// 控制台文本报告
pub fn write_report<W: Write>(w: &mut W, report: &SettlementReport) -> io::Result<()> {
    let banner = "#".repeat(BANNER_WIDTH);

    writeln!(w, "\n{}\n", banner)?;
    writeln!(
        w,
        "The grand total for utilities this month was: $ {}\n",
        money(&report.grand_total)
    )?;

    for (utility, total) in &report.utility_totals {
        writeln!(w, "\t{:<20} $ {}", utility, money(total))?;
    }
    if !report.utility_totals.is_empty() {
        writeln!(w)?;
    }

    let shares: Vec<String> = report.fair_share.iter().map(money).collect();
    writeln!(
        w,
        "Splitting this evenly results in everyone paying $ {}\n",
        shares.join(", ")
    )?;

    // 个人收付情况，按配置顺序
    for (person, paid) in &report.individual_totals {
        if let Some(c) = report.creditors.iter().find(|s| &s.person == person) {
            writeln!(
                w,
                "{} paid $ {} and is owed $ {} for this month's utilities.",
                person,
                money(paid),
                money(&c.amount)
            )?;
        } else if let Some(d) = report.debtors.iter().find(|s| &s.person == person) {
            writeln!(
                w,
                "{} paid $ {} and owes $ {} for this month's utilities.",
                person,
                money(paid),
                money(&d.amount)
            )?;
        } else {
            writeln!(w, "{} paid $ {} and has paid their share.", person, money(paid))?;
        }
    }

    if !report.debtors.is_empty() {
        writeln!(w)?;
    }
    for debtor in &report.debtors {
        writeln!(w, "{} owes:", debtor.person)?;
        for instruction in report.payments_by(&debtor.person) {
            writeln!(
                w,
                "\t{} $ {} for this month's utilities.",
                instruction.creditor,
                money(&instruction.amount)
            )?;
        }
    }

    writeln!(w, "\n{}\n", banner)
}
