use serde::Serialize;

/// An entry in the conference's committee catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct Committee {
    #[schema(example = "unsc")]
    pub id: &'static str,
    #[schema(example = "UN Security Council")]
    pub name: &'static str,
}

impl Committee {
    const fn new(id: &'static str, name: &'static str) -> Self {
        Self { id, name }
    }

    /// Look up a committee by its id.
    pub fn find(id: &str) -> Option<&'static Committee> {
        COMMITTEES.iter().find(|c| c.id == id)
    }
}

/// Committees offered at the conference, national bodies first.
pub const COMMITTEES: &[Committee] = &[
    Committee::new("lok-sabha", "Lok Sabha"),
    Committee::new("rajya-sabha", "Rajya Sabha"),
    Committee::new("supreme-court", "Supreme Court of India"),
    Committee::new("niti-aayog", "NITI Aayog"),
    Committee::new("cabinet", "Union Cabinet"),
    Committee::new("standing-committee", "Parliamentary Standing Committee"),
    Committee::new("unsc", "UN Security Council"),
    Committee::new("unga", "UN General Assembly"),
    Committee::new("ecosoc", "ECOSOC"),
    Committee::new("who", "World Health Organization"),
    Committee::new("unhrc", "UN Human Rights Council"),
    Committee::new("unicef", "UNICEF"),
    Committee::new("nato", "NATO"),
    Committee::new("imf", "International Monetary Fund"),
    Committee::new("world-bank", "World Bank"),
    Committee::new("g20", "G20 Summit"),
    Committee::new("african-union", "African Union"),
    Committee::new("asean", "ASEAN"),
    Committee::new("european-parliament", "European Parliament"),
    Committee::new("icj", "International Court of Justice"),
];
