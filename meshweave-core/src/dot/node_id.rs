//! Letter identifiers for nodes.

/// Bijective base-26 label for the node at `index`: `A`..`Z`, then `AA`,
/// `AB` and so on, like spreadsheet columns.
///
/// # Examples
/// ```
/// use meshweave_core::dot::node_id;
///
/// assert_eq!(node_id(0), "A");
/// assert_eq!(node_id(25), "Z");
/// assert_eq!(node_id(26), "AA");
/// ```
#[must_use]
pub fn node_id(index: usize) -> String {
    let mut letters = Vec::new();
    let mut remaining = index as u128 + 1;
    while remaining > 0 {
        let digit = (remaining - 1) % 26;
        letters.push(char::from(b'A' + digit as u8));
        remaining = (remaining - 1) / 26;
    }
    letters.iter().rev().collect()
}
