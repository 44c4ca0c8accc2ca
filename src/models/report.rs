use bigdecimal::BigDecimal;
use indexmap::IndexMap;
use serde::Serialize;

use super::{PaymentInstruction, Standing};

/// 完整结算报告，由 output 模块负责格式化
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SettlementReport {
    pub grand_total: BigDecimal,
    /// 费用名称 -> 全员合计
    pub utility_totals: IndexMap<String, BigDecimal>,
    /// 人员 -> 个人付款合计
    pub individual_totals: IndexMap<String, BigDecimal>,
    pub fair_share: Vec<BigDecimal>,
    pub top_payer: Option<String>,
    /// 按应收金额升序
    pub creditors: Vec<Standing>,
    /// 按应付金额升序
    pub debtors: Vec<Standing>,
    pub instructions: Vec<PaymentInstruction>,
}

impl SettlementReport {
    /// 恰好付足份额、无需收付的人
    pub fn settled_people(&self) -> Vec<&str> {
        self.individual_totals
            .keys()
            .filter(|p| {
                !self.creditors.iter().any(|s| &s.person == *p)
                    && !self.debtors.iter().any(|s| &s.person == *p)
            })
            .map(String::as_str)
            .collect()
    }

    /// 某人作为付款方的全部指令
    pub fn payments_by<'a>(&'a self, debtor: &'a str) -> impl Iterator<Item = &'a PaymentInstruction> {
        self.instructions.iter().filter(move |i| i.debtor == debtor)
    }
}
