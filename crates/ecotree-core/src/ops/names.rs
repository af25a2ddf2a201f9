//! Opening-name splitting.
//!
//! Names look like `Family` or `Family: Variation, Subvariation, ...`.
//! Everything before the first colon is the family; the rest is a single
//! nested path, one segment per comma.

/// A full opening name decomposed into its family and variation chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitName {
    pub family: String,
    /// Variation labels, outermost first; each one nests under the previous
    pub variations: Vec<String>,
}

impl SplitName {
    /// Re-join into the `Family: A, B` form used by the input rows
    pub fn full_name(&self) -> String {
        if self.variations.is_empty() {
            return self.family.clone();
        }
        format!("{}: {}", self.family, self.variations.join(", "))
    }

    /// Number of levels below the family
    pub fn depth(&self) -> usize {
        self.variations.len()
    }
}

/// Split an opening name into family and variation chain
///
/// Segments are trimmed but otherwise kept verbatim, so qualifiers such as
/// `with 5...Nc6` stay part of their label. An empty segment (a trailing
/// colon or doubled comma) is still a level of its own, labelled `""`.
///
/// ```
/// use ecotree_core::split_name;
///
/// let split = split_name("Sicilian Defense: Najdorf Variation, English Attack");
/// assert_eq!(split.family, "Sicilian Defense");
/// assert_eq!(split.variations, vec!["Najdorf Variation", "English Attack"]);
/// ```
pub fn split_name(name: &str) -> SplitName {
    match name.split_once(':') {
        Some((family, rest)) => SplitName {
            family: family.trim().to_string(),
            variations: rest
                .split(',')
                .map(|segment| segment.trim().to_string())
                .collect(),
        },
        None => SplitName {
            family: name.trim().to_string(),
            variations: Vec::new(),
        },
    }
}
