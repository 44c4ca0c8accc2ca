use bigdecimal::BigDecimal;
use serde::Serialize;

/// 结算身份
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// 多付，应收
    Creditor,
    /// 少付，应付
    Debtor,
}

/// 单人结算结果 (应收或应付金额，均为正数)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Standing {
    pub person: String,
    pub role: Role,
    /// 个人实际付款合计
    pub paid: BigDecimal,
    pub amount: BigDecimal,
}

/// 付款指令: debtor 向 creditor 支付 amount
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentInstruction {
    pub debtor: String,
    pub creditor: String,
    pub amount: BigDecimal,
}
