use std::collections::BTreeSet;

use anyhow::{Context, Result};
use polars::prelude::DataFrame;
use serde::Serialize;
use tracing::debug;

use proposal_common::normalize_column_key;
use proposal_model::canonical_columns;

/// A header renamed to its canonical spelling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderRename {
    pub from: String,
    pub to: &'static str,
}

/// Renames recognised headers (`Pickup_Cost`, `NotApprovedby`, `Date_Key`) to
/// their canonical names. Unrecognised columns are left alone. If a canonical
/// name is already taken, later variants keep their original header.
pub fn canonicalize_headers(df: &mut DataFrame) -> Result<Vec<HeaderRename>> {
    let original: Vec<String> = df
        .get_column_names()
        .into_iter()
        .map(|name| name.to_string())
        .collect();
    let mut taken: BTreeSet<String> = original.iter().cloned().collect();
    let mut renames = Vec::new();
    let mut names = Vec::with_capacity(original.len());
    for name in &original {
        let key = normalize_column_key(name);
        let canonical = canonical_columns().find(|candidate| normalize_column_key(candidate) == key);
        match canonical {
            Some(canonical) if canonical != name.as_str() && !taken.contains(canonical) => {
                taken.remove(name);
                taken.insert(canonical.to_string());
                debug!(from = %name, to = canonical, "canonicalized header");
                renames.push(HeaderRename {
                    from: name.clone(),
                    to: canonical,
                });
                names.push(canonical.to_string());
            }
            _ => names.push(name.clone()),
        }
    }
    if !renames.is_empty() {
        df.set_column_names(names)
            .context("rename columns to canonical headers")?;
    }
    Ok(renames)
}

#[cfg(test)]
mod tests {
    use polars::prelude::{Column, IntoColumn, NamedFrom, Series};

    use super::*;

    fn frame(names: &[&str]) -> DataFrame {
        let columns: Vec<Column> = names
            .iter()
            .map(|name| Series::new((*name).into(), vec![1.0f64]).into_column())
            .collect();
        DataFrame::new(columns).unwrap()
    }

    #[test]
    fn renames_known_variants() {
        let mut df = frame(&["Pickup_Cost", "NotApprovedby", "Date_Key", "Comment"]);
        let renames = canonicalize_headers(&mut df).unwrap();
        assert_eq!(renames.len(), 3);
        let names: Vec<String> = df
            .get_column_names()
            .into_iter()
            .map(|name| name.to_string())
            .collect();
        assert_eq!(names, vec!["PickupCost", "NotApprovedBy", "DateKey", "Comment"]);
    }

    #[test]
    fn keeps_existing_canonical_name() {
        let mut df = frame(&["TotalCost", "Total_Cost"]);
        let renames = canonicalize_headers(&mut df).unwrap();
        assert!(renames.is_empty());
        assert!(df.column("TotalCost").is_ok());
        assert!(df.column("Total_Cost").is_ok());
    }
}
