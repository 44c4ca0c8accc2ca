use serde::Serialize;
use std::io::Write;

use super::money;
use crate::error::OutputError;
use crate::models::PaymentInstruction;

#[derive(Serialize)]
struct InstructionRow<'a> {
    debtor: &'a str,
    creditor: &'a str,
    amount: String,
}

/// 付款指令导出为 CSV (debtor,creditor,amount)
pub fn write_instructions<W: Write>(writer: W, instructions: &[PaymentInstruction]) -> Result<(), OutputError> {
    let mut wtr = ::csv::WriterBuilder::new().has_headers(true).from_writer(writer);

    if instructions.is_empty() {
        // 无指令时仍输出表头
        wtr.write_record(["debtor", "creditor", "amount"])?;
    }
    for i in instructions {
        wtr.serialize(InstructionRow {
            debtor: &i.debtor,
            creditor: &i.creditor,
            amount: money(&i.amount),
        })?;
    }

    wtr.flush()?;
    Ok(())
}
