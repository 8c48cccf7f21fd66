//! Product category enum.

use serde::{Deserialize, Serialize};

/// A bakery product category.
///
/// The catalog filter treats "all categories" as the absence of a category
/// (`Option<Category>`), so there is no `All` variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Cakes,
    Cupcakes,
    Cookies,
    Pastries,
}

impl Category {
    /// All categories, in storefront display order.
    pub const ALL: [Self; 4] = [Self::Cakes, Self::Cupcakes, Self::Cookies, Self::Pastries];

    /// Human-readable label (e.g., "Cakes").
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Cakes => "Cakes",
            Self::Cupcakes => "Cupcakes",
            Self::Cookies => "Cookies",
            Self::Pastries => "Pastries",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cakes => write!(f, "cakes"),
            Self::Cupcakes => write!(f, "cupcakes"),
            Self::Cookies => write!(f, "cookies"),
            Self::Pastries => write!(f, "pastries"),
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cakes" => Ok(Self::Cakes),
            "cupcakes" => Ok(Self::Cupcakes),
            "cookies" => Ok(Self::Cookies),
            "pastries" => Ok(Self::Pastries),
            _ => Err(format!("invalid category: {s}")),
        }
    }
}
