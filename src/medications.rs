use std::collections::BTreeMap;

/// Built-in medication catalog: (id, display name).
pub const MEDICATIONS: &[(&str, &str)] = &[
    ("ibuprofen", "Ibuprofen"),
    ("paracetamol", "Paracetamol"),
    ("aspirin", "Aspirin"),
    ("zolmitriptan", "Zolmitriptan"),
];

/// Built-in trigger catalog: (id, label).
pub const TRIGGERS: &[(&str, &str)] = &[
    ("lack-of-sleep", "Lack of sleep"),
    ("too-much-sleep", "Too much sleep"),
    ("stress", "Stress"),
    ("hunger", "Hunger"),
];

/// Lookup from medication id to display name. Ids missing from the table
/// resolve to themselves, so unknown medications still show up in stats.
#[derive(Debug, Clone)]
pub struct MedicationNames {
    names: BTreeMap<String, String>,
}

impl MedicationNames {
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            names: pairs
                .into_iter()
                .map(|(id, name)| (id.into(), name.into()))
                .collect(),
        }
    }

    pub fn resolve<'a>(&'a self, id: &'a str) -> &'a str {
        self.names.get(id).map(String::as_str).unwrap_or(id)
    }
}

impl Default for MedicationNames {
    fn default() -> Self {
        Self::from_pairs(MEDICATIONS.iter().copied())
    }
}
