use bigdecimal::BigDecimal;
use indexmap::IndexMap;
use serde::Serialize;

/// 单人当月各项水电费付款: 费用名称 -> 金额
pub type PersonPayments = IndexMap<String, BigDecimal>;

/// 当月水电费配置 (人员 -> 各项付款)
///
/// 保持配置文件中的顺序，最少付款人并列时按此顺序取第一个。
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MonthlyUtilities {
    payments: IndexMap<String, PersonPayments>,
}

impl MonthlyUtilities {
    pub fn new() -> Self {
        Self::default()
    }

    /// 登记一个人 (可以没有任何付款项)
    pub fn add_person(&mut self, person: impl Into<String>) {
        self.payments.entry(person.into()).or_default();
    }

    /// 记录某人对某项费用的付款，同名费用累加
    pub fn insert(&mut self, person: impl Into<String>, utility: impl Into<String>, amount: BigDecimal) {
        let entry = self
            .payments
            .entry(person.into())
            .or_default()
            .entry(utility.into())
            .or_insert_with(|| BigDecimal::from(0));
        *entry += amount;
    }

    pub fn people(&self) -> impl Iterator<Item = &str> {
        self.payments.keys().map(String::as_str)
    }

    pub fn payments_of(&self, person: &str) -> Option<&PersonPayments> {
        self.payments.get(person)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &PersonPayments)> {
        self.payments.iter()
    }

    /// 人数
    pub fn len(&self) -> usize {
        self.payments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payments.is_empty()
    }

    /// 不同费用名称的数量
    pub fn utility_count(&self) -> usize {
        let mut names: Vec<&str> = self
            .payments
            .values()
            .flat_map(|p| p.keys().map(String::as_str))
            .collect();
        names.sort_unstable();
        names.dedup();
        names.len()
    }
}
