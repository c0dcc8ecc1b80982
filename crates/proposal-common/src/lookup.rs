/// Reduces a header to a comparison key: lowercase, no `_`, `-` or whitespace.
///
/// `Pickup_Cost`, `pickup cost` and `PickupCost` all share the key `pickupcost`.
pub fn normalize_column_key(name: &str) -> String {
    name.trim()
        .trim_matches('\u{feff}')
        .chars()
        .filter(|ch| !(ch.is_whitespace() || *ch == '_' || *ch == '-'))
        .flat_map(char::to_lowercase)
        .collect()
}
