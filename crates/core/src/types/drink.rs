//! The event drinks menu.
//!
//! The catalog is static reference data: guests pick from it, nobody edits it.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// Menu section a drink belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DrinkCategory {
    #[default]
    Beer,
    Wine,
    Traditional,
    Soft,
}

impl DrinkCategory {
    /// All categories in menu order.
    pub const ALL: [Self; 4] = [Self::Beer, Self::Wine, Self::Traditional, Self::Soft];

    /// Value used in URLs and persisted data.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beer => "beer",
            Self::Wine => "wine",
            Self::Traditional => "traditional",
            Self::Soft => "soft",
        }
    }

    /// Tab title on the drinks page.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Beer => "Namibian Beer",
            Self::Wine => "Local Wine",
            Self::Traditional => "Traditional Brews",
            Self::Soft => "Soft Drinks",
        }
    }

    /// Tab icon on the drinks page.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Beer => "🍺",
            Self::Wine => "🍷",
            Self::Traditional => "🥃",
            Self::Soft => "🥤",
        }
    }
}

impl std::fmt::Display for DrinkCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DrinkCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "beer" => Ok(Self::Beer),
            "wine" => Ok(Self::Wine),
            "traditional" => Ok(Self::Traditional),
            "soft" => Ok(Self::Soft),
            other => Err(format!("unknown drink category: {other}")),
        }
    }
}

/// A drink on the menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Drink {
    pub id: String,
    pub name: String,
    pub category: DrinkCategory,
    pub image: String,
    pub description: String,
}

const BEER_IMAGE: &str =
    "https://images.pexels.com/photos/1552630/pexels-photo-1552630.jpeg?auto=compress&cs=tinysrgb&w=400";
const WHEAT_IMAGE: &str =
    "https://images.pexels.com/photos/1267696/pexels-photo-1267696.jpeg?auto=compress&cs=tinysrgb&w=400";
const WINE_IMAGE: &str =
    "https://images.pexels.com/photos/1407846/pexels-photo-1407846.jpeg?auto=compress&cs=tinysrgb&w=400";
const BREW_IMAGE: &str =
    "https://images.pexels.com/photos/1283219/pexels-photo-1283219.jpeg?auto=compress&cs=tinysrgb&w=400";
const COLA_IMAGE: &str = "https://images.pexels.com/photos/50593/coca-cola-cold-drink-soft-drink-coke-50593.jpeg?auto=compress&cs=tinysrgb&w=400";
const SODA_IMAGE: &str =
    "https://images.pexels.com/photos/1292294/pexels-photo-1292294.jpeg?auto=compress&cs=tinysrgb&w=400";
const TEA_IMAGE: &str =
    "https://images.pexels.com/photos/1638280/pexels-photo-1638280.jpeg?auto=compress&cs=tinysrgb&w=400";

/// (id, name, category, image, description)
const MENU: &[(&str, &str, DrinkCategory, &str, &str)] = &[
    (
        "windhoek-lager",
        "Windhoek Lager",
        DrinkCategory::Beer,
        BEER_IMAGE,
        "Namibia's premium lager beer, crisp and refreshing",
    ),
    (
        "tafel-lager",
        "Tafel Lager",
        DrinkCategory::Beer,
        WHEAT_IMAGE,
        "Light and smooth Namibian beer",
    ),
    (
        "windhoek-draught",
        "Windhoek Draught",
        DrinkCategory::Beer,
        BEER_IMAGE,
        "Fresh draught beer with authentic Namibian taste",
    ),
    (
        "camelthorn-weiss",
        "Camelthorn Weiss",
        DrinkCategory::Beer,
        WHEAT_IMAGE,
        "Namibian wheat beer with citrus notes",
    ),
    (
        "kristall-kellerei-red",
        "Kristall Kellerei Red",
        DrinkCategory::Wine,
        WINE_IMAGE,
        "Premium Namibian red wine",
    ),
    (
        "kristall-kellerei-white",
        "Kristall Kellerei White",
        DrinkCategory::Wine,
        WINE_IMAGE,
        "Crisp Namibian white wine",
    ),
    (
        "orange-river-cellars",
        "Orange River Cellars",
        DrinkCategory::Wine,
        WINE_IMAGE,
        "Local wine from the Orange River region",
    ),
    (
        "oshikundu",
        "Oshikundu",
        DrinkCategory::Traditional,
        BREW_IMAGE,
        "Traditional fermented drink made from millet",
    ),
    (
        "otombo",
        "Otombo",
        DrinkCategory::Traditional,
        BREW_IMAGE,
        "Traditional Namibian alcoholic beverage",
    ),
    (
        "marula-beer",
        "Marula Beer",
        DrinkCategory::Traditional,
        BREW_IMAGE,
        "Traditional beer made from marula fruit",
    ),
    (
        "coca-cola",
        "Coca-Cola",
        DrinkCategory::Soft,
        COLA_IMAGE,
        "Classic Coca-Cola",
    ),
    (
        "fanta-orange",
        "Fanta Orange",
        DrinkCategory::Soft,
        SODA_IMAGE,
        "Refreshing orange soda",
    ),
    (
        "sprite",
        "Sprite",
        DrinkCategory::Soft,
        SODA_IMAGE,
        "Lemon-lime soda",
    ),
    (
        "rooibos-tea",
        "Rooibos Tea",
        DrinkCategory::Soft,
        TEA_IMAGE,
        "Traditional South African red bush tea",
    ),
];

static CATALOG: LazyLock<Vec<Drink>> = LazyLock::new(|| {
    MENU.iter()
        .map(|&(id, name, category, image, description)| Drink {
            id: id.to_owned(),
            name: name.to_owned(),
            category,
            image: image.to_owned(),
            description: description.to_owned(),
        })
        .collect()
});

/// The full drinks menu in display order.
#[must_use]
pub fn catalog() -> &'static [Drink] {
    &CATALOG
}

/// Look up a drink by its ID.
#[must_use]
pub fn find_drink(id: &str) -> Option<&'static Drink> {
    catalog().iter().find(|d| d.id == id)
}

impl DrinkCategory {
    /// Drinks in this category, in menu order.
    pub fn drinks(self) -> impl Iterator<Item = &'static Drink> {
        catalog().iter().filter(move |d| d.category == self)
    }
}
