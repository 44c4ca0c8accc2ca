pub mod csv;
pub mod text;

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::OutputError;
use crate::models::SettlementReport;

/// 报告输出格式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// 按指定格式输出报告
pub fn render<W: Write>(report: &SettlementReport, format: OutputFormat, writer: &mut W) -> Result<(), OutputError> {
    match format {
        OutputFormat::Text => text::write_report(writer, report)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, report)?;
            writeln!(writer)?;
        }
    }
    Ok(())
}

/// 金额统一显示两位小数
pub fn money(amount: &BigDecimal) -> String {
    amount.round(2).with_scale(2).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn money_always_has_two_decimals() {
        let cases = [("100", "100.00"), ("0.5", "0.50"), ("33.34", "33.34"), ("0", "0.00")];
        for (input, expected) in cases {
            assert_eq!(money(&BigDecimal::from_str(input).unwrap()), expected);
        }
    }
}
