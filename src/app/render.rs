use crate::core::favorites::FavoritesRegistry;
use crate::core::view_model::ResortListViewModel;
use crate::core::Resort;
use std::fmt;

/// A list row: the resort plus whether it carries the favorite marker.
#[derive(Debug, Clone, Copy)]
pub struct ResortRow<'a> {
    pub resort: &'a Resort,
    pub is_favorite: bool,
}

pub fn list_rows<'a>(
    view_model: &'a ResortListViewModel,
    favorites: &FavoritesRegistry,
) -> Vec<ResortRow<'a>> {
    view_model
        .visible_resorts()
        .into_iter()
        .map(|resort| ResortRow {
            resort,
            is_favorite: favorites.contains(&resort.id),
        })
        .collect()
}

impl fmt::Display for ResortRow<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.is_favorite { "♥" } else { " " };
        write!(
            f,
            "{} {} ({}) - {} runs",
            marker, self.resort.name, self.resort.country, self.resort.runs
        )
    }
}

/// The detail screen for one resort.
#[derive(Debug, Clone, Copy)]
pub struct ResortDetail<'a> {
    pub resort: &'a Resort,
    pub is_favorite: bool,
}

impl fmt::Display for ResortDetail<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let resort = self.resort;
        writeln!(f, "{}", resort.name)?;
        writeln!(f, "{}", "=".repeat(resort.name.chars().count()))?;
        writeln!(f, "Country:   {}", resort.country)?;
        writeln!(f, "Size:      {}", resort.size_label())?;
        writeln!(f, "Price:     {}", resort.price_label())?;
        writeln!(f, "Elevation: {}m", resort.elevation)?;
        writeln!(f, "Runs:      {}", resort.runs)?;
        writeln!(f)?;
        writeln!(f, "{}", resort.description)?;

        let facilities = resort.facility_types();
        if !facilities.is_empty() {
            writeln!(f)?;
            writeln!(f, "Facilities:")?;
            for facility in facilities {
                writeln!(f, "  - {}: {}", facility.name, facility.description())?;
            }
        }

        writeln!(f)?;
        writeln!(f, "Image: {}", resort.image_credit)?;
        if self.is_favorite {
            writeln!(f, "♥ In your favorites")
        } else {
            writeln!(f, "Not in your favorites")
        }
    }
}

pub fn render_rows(rows: &[ResortRow<'_>]) -> String {
    if rows.is_empty() {
        return "No resorts match your search.".to_string();
    }

    rows.iter().map(|row| format!("{}\n", row)).collect()
}

pub fn render_detail(resort: &Resort, is_favorite: bool) -> String {
    ResortDetail {
        resort,
        is_favorite,
    }
    .to_string()
}

pub fn render_welcome() -> String {
    "Welcome to SnowSeeker\n\nPlease select a resort: run `snowseeker list` and then `snowseeker show <ID>`.\n"
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::Catalog;
    use crate::core::SortOrder;

    fn resort(name: &str, country: &str, runs: u32) -> Resort {
        Resort {
            id: name.to_string(),
            name: name.to_string(),
            country: country.to_string(),
            description: format!("{} is a resort.", name),
            image_credit: "Photo: test".to_string(),
            price: 2,
            size: 1,
            elevation: 2000,
            runs,
            facilities: vec!["Family".to_string()],
        }
    }

    #[test]
    fn test_rows_mark_favorites() {
        let catalog = Catalog::new(vec![
            resort("Val Thorens", "France", 78),
            resort("Chamonix", "France", 90),
        ])
        .unwrap();
        let mut vm = ResortListViewModel::new(catalog);
        vm.set_sort_order(SortOrder::ByName);
        let favorites = FavoritesRegistry::with_favorites(["Chamonix"]);

        let rows = list_rows(&vm, &favorites);
        assert_eq!(rows.len(), 2);
        assert!(rows[0].is_favorite);
        assert!(!rows[1].is_favorite);

        let text = render_rows(&rows);
        assert_eq!(
            text,
            "♥ Chamonix (France) - 90 runs\n  Val Thorens (France) - 78 runs\n"
        );
    }

    #[test]
    fn test_empty_rows_render_message() {
        assert_eq!(render_rows(&[]), "No resorts match your search.");
    }

    #[test]
    fn test_detail_contains_derived_labels() {
        let text = render_detail(&resort("Sölden", "Austria", 144), true);

        assert!(text.starts_with("Sölden\n======\n"));
        assert!(text.contains("Size:      Small"));
        assert!(text.contains("Price:     $$"));
        assert!(text.contains("  - Family: This resort is popular with families."));
        assert!(text.contains("♥ In your favorites"));
    }

    #[test]
    fn test_single_row_display() {
        let vail = resort("Vail", "USA", 195);
        let row = ResortRow {
            resort: &vail,
            is_favorite: false,
        };

        assert_eq!(row.to_string(), "  Vail (USA) - 195 runs");
    }

    #[test]
    fn test_detail_layout_without_facilities() {
        let mut aspen = resort("Aspen", "USA", 76);
        aspen.facilities.clear();

        let detail = ResortDetail {
            resort: &aspen,
            is_favorite: false,
        };
        assert_eq!(
            format!("{}", detail),
            "Aspen\n=====\nCountry:   USA\nSize:      Small\nPrice:     $$\n\
             Elevation: 2000m\nRuns:      76\n\nAspen is a resort.\n\n\
             Image: Photo: test\nNot in your favorites\n"
        );
        assert_eq!(render_detail(&aspen, false), detail.to_string());
    }

    #[test]
    fn test_welcome_screen() {
        assert!(render_welcome().starts_with("Welcome to SnowSeeker"));
    }
}
