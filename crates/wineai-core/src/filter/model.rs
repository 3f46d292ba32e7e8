use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use super::price::PriceRange;
use crate::config::FilterDefaults;

/// Placeholder written into the request context for an `Any` selection.
pub const NOT_SPECIFIED: &str = "Not Specified";

/// Grape variety filter.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter, EnumString, IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Grape {
    #[default]
    Any,
    #[strum(to_string = "Sauvignon Blanc")]
    SauvignonBlanc,
    Chardonnay,
    #[strum(to_string = "Pinot Noir")]
    PinotNoir,
    #[strum(to_string = "Cabernet Sauvignon", serialize = "Cabernet")]
    CabernetSauvignon,
    Merlot,
    #[strum(to_string = "Syrah/Shiraz", serialize = "Syrah", serialize = "Shiraz")]
    SyrahShiraz,
    Riesling,
    #[strum(
        to_string = "Pinot Grigio/Gris",
        serialize = "Pinot Grigio",
        serialize = "Pinot Gris"
    )]
    PinotGrigioGris,
    #[strum(to_string = "Rosé Blend", serialize = "Rose Blend", serialize = "Rosé")]
    RoseBlend,
}

impl Grape {
    pub fn label(self) -> &'static str {
        self.into()
    }

    /// Label used in the request context; `Any` becomes "Not Specified".
    pub fn context_label(self) -> &'static str {
        match self {
            Grape::Any => NOT_SPECIFIED,
            other => other.label(),
        }
    }
}

/// Wine region filter.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter, EnumString, IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Region {
    #[default]
    Any,
    #[strum(to_string = "Napa Valley (USA)", serialize = "Napa Valley", serialize = "Napa")]
    NapaValley,
    #[strum(to_string = "Bordeaux (France)", serialize = "Bordeaux")]
    Bordeaux,
    #[strum(to_string = "Burgundy (France)", serialize = "Burgundy")]
    Burgundy,
    #[strum(to_string = "Tuscany (Italy)", serialize = "Tuscany")]
    Tuscany,
    #[strum(to_string = "Marlborough (New Zealand)", serialize = "Marlborough")]
    Marlborough,
    #[strum(
        to_string = "Barossa Valley (Australia)",
        serialize = "Barossa Valley",
        serialize = "Barossa"
    )]
    BarossaValley,
    #[strum(to_string = "Mosel (Germany)", serialize = "Mosel")]
    Mosel,
    #[strum(to_string = "Rioja (Spain)", serialize = "Rioja")]
    Rioja,
}

impl Region {
    pub fn label(self) -> &'static str {
        self.into()
    }

    /// Label used in the request context; `Any` becomes "Not Specified".
    pub fn context_label(self) -> &'static str {
        match self {
            Region::Any => NOT_SPECIFIED,
            other => other.label(),
        }
    }
}

/// The three user-selected constraints applied to every turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterSelection {
    pub grape: Grape,
    pub region: Region,
    pub price: PriceRange,
}

impl FilterSelection {
    /// Starts from `Any`/`Any` with the configured default price range,
    /// normalized the same way as slider input.
    pub fn from_defaults(defaults: &FilterDefaults) -> Self {
        Self {
            price: PriceRange::from_slider(defaults.default_price_min, defaults.default_price_max),
            ..Self::default()
        }
    }

    /// Serializes the selection into the preference line prepended to the
    /// user's request.
    pub fn to_context(&self) -> String {
        format!(
            "User Preferences: Grape=[{}], Region=[{}], Price Range=[{}].",
            self.grape.context_label(),
            self.region.context_label(),
            self.price
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_context_for_any_grape_and_napa() {
        let filters = FilterSelection {
            grape: Grape::Any,
            region: Region::NapaValley,
            price: PriceRange::new(20, 80),
        };
        assert_eq!(
            filters.to_context(),
            "User Preferences: Grape=[Not Specified], Region=[Napa Valley (USA)], Price Range=[$20 - $80]."
        );
    }

    #[test]
    fn test_default_context() {
        assert_eq!(
            FilterSelection::default().to_context(),
            "User Preferences: Grape=[Not Specified], Region=[Not Specified], Price Range=[$20 - $80]."
        );
    }

    #[test]
    fn test_labels_match_display() {
        for grape in Grape::iter() {
            assert_eq!(grape.label(), grape.to_string());
        }
        for region in Region::iter() {
            assert_eq!(region.label(), region.to_string());
        }
        assert_eq!(Grape::iter().count(), 10);
        assert_eq!(Region::iter().count(), 9);
    }

    #[test]
    fn test_parse_labels_case_insensitively() {
        assert_eq!(Grape::from_str("pinot noir").unwrap(), Grape::PinotNoir);
        assert_eq!(Grape::from_str("Syrah/Shiraz").unwrap(), Grape::SyrahShiraz);
        assert_eq!(Grape::from_str("shiraz").unwrap(), Grape::SyrahShiraz);
        assert_eq!(Grape::from_str("ANY").unwrap(), Grape::Any);
        assert_eq!(
            Region::from_str("Marlborough (New Zealand)").unwrap(),
            Region::Marlborough
        );
        assert_eq!(Region::from_str("rioja").unwrap(), Region::Rioja);
        assert!(Grape::from_str("Zinfandel").is_err());
        assert!(Region::from_str("Mendoza").is_err());
    }

    #[test]
    fn test_from_defaults_orders_price() {
        let defaults = FilterDefaults {
            default_price_min: 100,
            default_price_max: 40,
        };
        let filters = FilterSelection::from_defaults(&defaults);
        assert_eq!(filters.price, PriceRange::new(40, 100));
        assert_eq!(filters.grape, Grape::Any);
        assert_eq!(filters.region, Region::Any);
    }

    #[test]
    fn test_from_defaults_snaps_to_step() {
        let defaults = FilterDefaults {
            default_price_min: 22,
            default_price_max: 78,
        };
        let filters = FilterSelection::from_defaults(&defaults);
        assert_eq!(filters.price.min(), 20);
        assert_eq!(filters.price.max(), 80);
    }
}
