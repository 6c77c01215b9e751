use crate::bits::{regroup, BitSequence};
use crate::error::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct RegroupReport<'a> {
    bits: &'a str,
    width: usize,
    groups: Vec<&'a str>,
    exact: bool,
}

/// Regroup a binary digit string from `from`-bit groups to `to`-bit groups
pub fn regroup_bits(digits: &str, from: usize, to: usize, json: bool) -> Result<String> {
    let sequence = BitSequence::new(digits, from)?;
    let (regrouped, exact) = regroup(&sequence, to)?;

    if json {
        let report = RegroupReport {
            bits: regrouped.bits(),
            width: regrouped.width(),
            groups: regrouped.groups().collect(),
            exact,
        };
        return Ok(serde_json::to_string_pretty(&report)? + "\n");
    }

    let mut output = String::new();
    output.push_str(&format!("Input:  {} ({}-bit groups)\n", sequence, from));
    output.push_str(&format!("Output: {} ({}-bit groups)\n", regrouped, to));
    output.push_str(&format!("Bits: {}\n", regrouped.bits()));
    output.push_str(&format!(
        "Exact: {}\n",
        if exact { "yes" } else { "no, high bits were dropped" }
    ));
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regroup_text() {
        let text = regroup_bits("0000010100000011", 8, 4, false).unwrap();
        assert!(text.contains("Input:  00000101 00000011 (8-bit groups)"));
        assert!(text.contains("Output: 0101 0011 (4-bit groups)"));
        assert!(text.contains("Exact: yes"));
    }

    #[test]
    fn test_regroup_json_reports_loss() {
        let json = regroup_bits("11110000", 8, 4, true).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["bits"], "0000");
        assert_eq!(parsed["exact"], false);
        assert_eq!(parsed["groups"], serde_json::json!(["0000"]));
    }

    #[test]
    fn test_regroup_rejects_non_binary() {
        assert!(regroup_bits("10a1", 8, 4, false).is_err());
    }
}
