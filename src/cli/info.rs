use crate::algorithm::PaddingAlgorithm;
use crate::codec::{pad, PadOptions};
use crate::error::{PadError, Result};
use crate::representation::{classify, Representation};
use serde::Serialize;

const REPRESENTATIONS: [Representation; 3] =
    [Representation::Raw, Representation::Hex, Representation::Binary];

#[derive(Debug, Serialize)]
struct AlgorithmEntry {
    name: &'static str,
    algorithm: PaddingAlgorithm,
    description: &'static str,
    representations: Vec<Representation>,
}

/// List the supported padding algorithms
pub fn show_algorithms(json: bool) -> Result<String> {
    let entries: Vec<AlgorithmEntry> = PaddingAlgorithm::ALL
        .iter()
        .map(|&algorithm| AlgorithmEntry {
            name: algorithm.name(),
            algorithm,
            description: algorithm.description(),
            representations: REPRESENTATIONS
                .into_iter()
                .filter(|&r| algorithm.is_compatible_with(r))
                .collect(),
        })
        .collect();

    if json {
        return Ok(serde_json::to_string_pretty(&entries)? + "\n");
    }

    let mut output = String::new();
    output.push_str("Padding algorithms\n");
    output.push_str("==================\n\n");
    for entry in &entries {
        let representations: Vec<&str> = entry.representations.iter().map(|r| r.name()).collect();
        output.push_str(&format!(
            "  {:<12} {:<40} [{}]\n",
            entry.name,
            entry.description,
            representations.join(", ")
        ));
    }
    output.push_str("\n  pkcs5 is accepted as an alias of pkcs7\n");
    Ok(output)
}

#[derive(Debug, Serialize)]
struct PaddingEstimate {
    algorithm: PaddingAlgorithm,
    /// Symbols `pad` would add, `None` when the algorithm does not apply
    added_symbols: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
}

#[derive(Debug, Serialize)]
struct Inspection {
    representation: Representation,
    symbols: usize,
    symbol_width: usize,
    units: usize,
    block_size: usize,
    padding: Vec<PaddingEstimate>,
}

/// Describe how the codec sees `data` and what each algorithm would add
pub fn inspect_data(data: &[u8], raw: bool, block_size: usize, json: bool) -> Result<String> {
    let representation = classify(data, raw);
    let width = representation.symbol_width();

    let mut padding = Vec::with_capacity(PaddingAlgorithm::ALL.len());
    for algorithm in PaddingAlgorithm::ALL {
        let options = PadOptions::new(algorithm, block_size).raw(raw);
        let estimate = if algorithm.is_compatible_with(representation) {
            match pad(data, &options) {
                Ok(padded) => PaddingEstimate {
                    algorithm,
                    added_symbols: Some(padded.len() - data.len()),
                    reason: None,
                },
                Err(PadError::BlockSizeTooLarge { max, .. }) => PaddingEstimate {
                    algorithm,
                    added_symbols: None,
                    reason: Some(format!("block size above {}", max)),
                },
                Err(e) => return Err(e),
            }
        } else {
            PaddingEstimate {
                algorithm,
                added_symbols: None,
                reason: Some(format!("incompatible with {} data", representation)),
            }
        };
        padding.push(estimate);
    }

    let inspection = Inspection {
        representation,
        symbols: data.len(),
        symbol_width: width,
        units: data.len() / width,
        block_size,
        padding,
    };

    if json {
        return Ok(serde_json::to_string_pretty(&inspection)? + "\n");
    }

    let mut output = String::new();
    output.push_str(&format!("Representation: {}\n", inspection.representation));
    output.push_str(&format!(
        "Length: {} symbols ({} units of {} symbol(s))\n",
        inspection.symbols, inspection.units, inspection.symbol_width
    ));
    output.push_str(&format!("Block size: {}\n\n", inspection.block_size));
    output.push_str("Padding to add:\n");
    for estimate in &inspection.padding {
        match (estimate.added_symbols, &estimate.reason) {
            (Some(added), _) => output.push_str(&format!(
                "  {:<12} {} symbol(s)\n",
                estimate.algorithm.name(),
                added
            )),
            (None, reason) => output.push_str(&format!(
                "  {:<12} n/a ({})\n",
                estimate.algorithm.name(),
                reason.as_deref().unwrap_or("not applicable")
            )),
        }
    }
    Ok(output)
}
