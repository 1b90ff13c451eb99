//! Pairwise containment and supernet reports.
//!
//! Failures on one pair (for example an IPv6 prefix) are recorded on that pair's report so the
//! rest of the list is still processed.

use crate::models::Prefix;
use crate::NetError;
use itertools::Itertools;
use serde::Serialize;

/// Result of comparing two prefixes.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PairReport {
    pub left: Prefix,
    pub right: Prefix,
    /// `left` strictly contains `right`.
    pub left_contains_right: Option<bool>,
    /// `right` strictly contains `left`.
    pub right_contains_left: Option<bool>,
    /// Most specific prefix covering both.
    pub supernet: Option<Prefix>,
    /// Why the fields above are missing, if they are.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Parse every string as `<address>/<length>`.
///
/// # Returns
/// * `Ok(Vec<Prefix>)` - Prefixes in input order
/// * `Err` - The first input that does not parse
pub fn parse_prefixes<S: AsRef<str>>(inputs: &[S]) -> Result<Vec<Prefix>, NetError> {
    inputs
        .iter()
        .map(|s| s.as_ref().trim().parse::<Prefix>())
        .collect()
}

/// Compare each unordered pair of prefixes once, in input order.
pub fn compare_pairs(prefixes: &[Prefix]) -> Vec<PairReport> {
    log::info!("# Comparing {} prefixes", prefixes.len());

    prefixes
        .iter()
        .tuple_combinations()
        .map(|(left, right)| compare_pair(left, right))
        .collect()
}

fn compare_pair(left: &Prefix, right: &Prefix) -> PairReport {
    let result = left.contains(right).and_then(|l_r| {
        let r_l = right.contains(left)?;
        let supernet = left.get_supernet(right)?;
        Ok((l_r, r_l, supernet))
    });

    match result {
        Ok((l_r, r_l, supernet)) => PairReport {
            left: *left,
            right: *right,
            left_contains_right: Some(l_r),
            right_contains_left: Some(r_l),
            supernet: Some(supernet),
            error: None,
        },
        Err(e) => {
            log::warn!("Skipping pair {left} / {right}: {e}");
            PairReport {
                left: *left,
                right: *right,
                left_contains_right: None,
                right_contains_left: None,
                supernet: None,
                error: Some(e.to_string()),
            }
        }
    }
}
