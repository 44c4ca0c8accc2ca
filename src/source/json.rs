use bigdecimal::BigDecimal;
use indexmap::IndexMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::str::FromStr;

use crate::error::SourceError;
use crate::models::MonthlyUtilities;

/// 配置文件原始结构: { "人员": { "费用": 金额 } }
type RawUtilities = IndexMap<String, IndexMap<String, serde_json::Number>>;

/// 读取当月 JSON 配置文件
pub fn load_utilities(path: &Path) -> Result<MonthlyUtilities, SourceError> {
    let raw = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => SourceError::ConfigNotFound(path.to_path_buf()),
        _ => SourceError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    let utilities = parse_utilities(&raw)?;
    tracing::info!(
        "Loaded {}: {} people, {} utilities",
        path.display(),
        utilities.len(),
        utilities.utility_count()
    );
    Ok(utilities)
}

/// 解析 JSON 文本
///
/// 金额经由 JSON 数字的十进制文本转换，不经过浮点运算。
pub fn parse_utilities(raw: &str) -> Result<MonthlyUtilities, SourceError> {
    let doc: RawUtilities = serde_json::from_str(raw)?;

    let mut utilities = MonthlyUtilities::new();
    for (person, payments) in doc {
        utilities.add_person(person.clone());
        for (utility, number) in payments {
            let text = number.to_string();
            let amount = BigDecimal::from_str(&text).map_err(|_| SourceError::Amount {
                person: person.clone(),
                utility: utility.clone(),
                value: text.clone(),
            })?;
            utilities.insert(person.clone(), utility, amount);
        }
    }

    Ok(utilities)
}
