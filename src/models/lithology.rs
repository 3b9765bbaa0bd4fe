//! The fixed lithology classification table.
//!
//! Order matters: the classifier walks the table top to bottom and the
//! first category with a matching keyword stem wins. Treat the table as
//! read-only configuration; nothing mutates it at runtime.

/// A named lithology category with its keyword stems and display color.
#[derive(Debug, PartialEq, Eq)]
pub struct Lithology {
    pub name: &'static str,
    /// Lowercase stems matched as substrings against the description.
    pub keywords: &'static [&'static str],
    pub rgb: (u8, u8, u8),
}

impl Lithology {
    /// CSS-style hex color, used by the HTML export.
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.rgb.0, self.rgb.1, self.rgb.2)
    }
}

/// Categories in precedence order. A description mentioning both clay and
/// sand classifies as Clay because Clay is listed first.
pub const LITHOLOGIES: &[Lithology] = &[
    Lithology {
        name: "Clay",
        keywords: &["clay", "argill"],
        rgb: (141, 110, 99),
    },
    Lithology {
        name: "Sand",
        keywords: &["sand"],
        rgb: (253, 216, 53),
    },
    Lithology {
        name: "Silt",
        keywords: &["silt"],
        rgb: (174, 213, 129),
    },
    Lithology {
        name: "Gravel",
        keywords: &["gravel", "pebbl"],
        rgb: (144, 164, 174),
    },
    Lithology {
        name: "Organic material",
        keywords: &["organic", "peat", "humus", "topsoil"],
        rgb: (93, 64, 55),
    },
    Lithology {
        name: "Marl",
        keywords: &["marl"],
        rgb: (77, 182, 172),
    },
];

/// Fallback category when no keyword matches or the description is empty.
pub const UNKNOWN: Lithology = Lithology {
    name: "Unknown lithology",
    keywords: &[],
    rgb: (189, 189, 189),
};
