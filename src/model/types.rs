use std::collections::BTreeSet;
use std::fmt;

/// AutoDock receptor atom types for which AutoGrid can compute maps.
pub const SUPPORTED_RECEPTOR_TYPES: [&str; 20] = [
    "HD", "C", "A", "N", "NA", "OA", "F", "P", "SA", "S", "Cl", "Br", "I", "Mg", "Ca", "Mn", "Fe",
    "Zn", "H", "OC",
];

/// The distinct receptor atom types present in a structure.
///
/// Members are unique, sorted in byte order, and always drawn from the
/// whitelist the set was built against. Renders as the space-joined list that
/// the `receptor_types` GPF keyword expects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReceptorTypes(Vec<String>);

impl ReceptorTypes {
    /// Builds the set from raw tokens, dropping anything not in `supported`.
    pub fn from_tokens<I, S>(tokens: I, supported: &[String]) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let unique: BTreeSet<String> = tokens.into_iter().map(Into::into).collect();
        Self(
            unique
                .into_iter()
                .filter(|t| supported.iter().any(|s| s == t))
                .collect(),
        )
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ReceptorTypes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(" "))
    }
}

pub fn default_supported_types() -> Vec<String> {
    SUPPORTED_RECEPTOR_TYPES
        .iter()
        .map(|t| t.to_string())
        .collect()
}
