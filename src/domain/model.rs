use serde::{Deserialize, Serialize};

/// A ski resort as it appears in the static dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resort {
    pub id: String,
    pub name: String,
    pub country: String,
    pub description: String,
    pub image_credit: String,
    pub price: u32,
    pub size: u32,
    pub elevation: u32,
    #[serde(alias = "resorts")]
    pub runs: u32,
    #[serde(default)]
    pub facilities: Vec<String>,
}

impl Resort {
    pub fn size_label(&self) -> &'static str {
        match self.size {
            1 => "Small",
            2 => "Average",
            _ => "Large",
        }
    }

    pub fn price_label(&self) -> String {
        "$".repeat(self.price as usize)
    }

    pub fn facility_types(&self) -> Vec<Facility> {
        self.facilities
            .iter()
            .map(|name| Facility::new(name.clone()))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Facility {
    pub name: String,
}

impl Facility {
    pub fn new(name: String) -> Self {
        Self { name }
    }

    pub fn description(&self) -> &'static str {
        match self.name.as_str() {
            "Accommodation" => "This resort has popular on-site accommodation.",
            "Beginners" => "This resort has lots of ski schools.",
            "Cross-country" => "This resort has many cross-country ski routes.",
            "Eco-friendly" => "This resort has won an award for environmental friendliness.",
            "Family" => "This resort is popular with families.",
            _ => "No further information about this facility.",
        }
    }
}

/// Sort key for the resort list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    #[default]
    None,
    #[cfg_attr(feature = "cli", value(name = "name"))]
    #[serde(rename = "name")]
    ByName,
    #[cfg_attr(feature = "cli", value(name = "country"))]
    #[serde(rename = "country")]
    ByCountry,
}

/// Emitted to registry observers after every toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteChange {
    pub id: String,
    pub is_favorite: bool,
}
