//! Shared rendering for listings, favorites and comparisons.

use serde::Serialize;

use crate::error::Result;
use crate::favorites::FavoritesStore;
use crate::property::{format_price, Property, PropertyRef};
use crate::ui::{RooflineTheme, Table, UserInterface};

const MISSING: &str = "-";

/// Print a value as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(ui: &mut dyn UserInterface, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(anyhow::Error::from)?;
    ui.message(&json);
    Ok(())
}

pub fn price_cell(price: Option<f64>) -> String {
    price.map(format_price).unwrap_or_else(|| MISSING.to_string())
}

fn text_cell(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => MISSING.to_string(),
    }
}

fn number_cell<T: ToString>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| MISSING.to_string())
}

/// One row per listing, with a heart for saved ones.
pub fn listing_table(
    properties: &[Property],
    favorites: &FavoritesStore,
    theme: &RooflineTheme,
) -> Table {
    let mut table = Table::new(["", "ID", "Title", "Price", "City", "BHK", "Type"]);
    for p in properties {
        table.add_row([
            theme.format_favorite(favorites.is_favorited(p.id.as_str())),
            p.id.to_string(),
            p.label().to_string(),
            price_cell(p.price),
            text_cell(p.city.as_deref()),
            text_cell(p.bhk_type.as_deref()),
            text_cell(p.property_type.as_deref()),
        ]);
    }
    table
}

/// One row per saved favorite, from cached display fields.
pub fn favorites_table(favorites: &[PropertyRef]) -> Table {
    let mut table = Table::new(["ID", "Title", "Price", "City", "BHK", "Saved"]);
    for f in favorites {
        table.add_row([
            f.id.to_string(),
            f.label().to_string(),
            price_cell(f.price),
            text_cell(f.city.as_deref()),
            text_cell(f.bhk_type.as_deref()),
            f.saved_at
                .map(|t| t.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| MISSING.to_string()),
        ]);
    }
    table
}

/// Attributes down the side, one column per listing.
pub fn comparison_table(properties: &[Property]) -> Table {
    let mut headers = vec![String::new()];
    headers.extend(properties.iter().map(|p| p.label().to_string()));
    let mut table = Table::new(headers);

    let rows: [(&str, fn(&Property) -> String); 10] = [
        ("Price", |p| price_cell(p.price)),
        ("City", |p| text_cell(p.city.as_deref())),
        ("Type", |p| text_cell(p.property_type.as_deref())),
        ("BHK", |p| text_cell(p.bhk_type.as_deref())),
        ("Bedrooms", |p| number_cell(p.bedrooms)),
        ("Bathrooms", |p| number_cell(p.bathrooms)),
        ("Area (sq ft)", |p| number_cell(p.super_builtup_area)),
        ("Furnishing", |p| text_cell(p.furnishing.as_deref())),
        ("Status", |p| text_cell(p.status.as_deref())),
        ("Transaction", |p| text_cell(p.transaction_type.as_deref())),
    ];

    for (label, cell) in rows {
        let mut row = vec![label.to_string()];
        row.extend(properties.iter().map(cell));
        table.add_row(row);
    }
    table
}

/// Full detail view of a single listing.
pub fn show_property(
    ui: &mut dyn UserInterface,
    property: &Property,
    favorited: bool,
    api_base: &str,
    theme: &RooflineTheme,
) {
    ui.show_header(property.label());

    let mut field = |key: &str, value: String| {
        ui.message(&format!("  {:<14} {}", theme.key.apply_to(key), value));
    };

    field("ID", property.id.to_string());
    field("Price", format!("{}", theme.price.apply_to(price_cell(property.price))));
    field(
        "Address",
        property
            .display_address()
            .unwrap_or_else(|| MISSING.to_string()),
    );
    field("Type", text_cell(property.property_type.as_deref()));
    field("BHK", text_cell(property.bhk_type.as_deref()));
    field("Bedrooms", number_cell(property.bedrooms));
    field("Bathrooms", number_cell(property.bathrooms));
    field("Area (sq ft)", number_cell(property.super_builtup_area));
    field("Furnishing", text_cell(property.furnishing.as_deref()));
    field("Status", text_cell(property.status.as_deref()));
    field("Transaction", text_cell(property.transaction_type.as_deref()));
    if let Some(project) = &property.project {
        field("Project", project.clone());
    }
    if let Some(developer) = &property.developer {
        field("Developer", developer.clone());
    }
    field("Favorite", theme.format_favorite(favorited));

    if ui.output_mode().shows_detail() {
        if let Some(url) = property.image_url(api_base) {
            ui.message(&format!("  {:<14} {}", theme.key.apply_to("Image"), url));
        }
        if let Some(url) = property.maps_url() {
            ui.message(&format!("  {:<14} {}", theme.key.apply_to("Map"), url));
        }
    }

    if let Some(description) = property.description.as_deref().filter(|d| !d.is_empty()) {
        ui.message("");
        ui.message(&format!("  {}", theme.dim.apply_to(description)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::{MockUI, OutputMode};

    fn sample(id: &str, title: &str, price: f64) -> Property {
        let mut p = Property::new(id);
        p.title = Some(title.to_string());
        p.price = Some(price);
        p.city = Some("Pune".to_string());
        p
    }

    #[test]
    fn listing_table_marks_favorites() {
        let mut favorites = FavoritesStore::in_memory();
        favorites.toggle(PropertyRef::new("a"));
        let properties = vec![sample("a", "Villa", 9e6), sample("b", "Flat", 4.5e6)];

        let output = listing_table(&properties, &favorites, &RooflineTheme::plain()).render();
        let villa = output.lines().find(|l| l.contains("Villa")).unwrap();
        let flat = output.lines().find(|l| l.contains("Flat")).unwrap();

        assert!(villa.contains('♥'));
        assert!(flat.contains('♡'));
        assert!(flat.contains("₹ 4,500,000"));
    }

    #[test]
    fn comparison_table_has_a_column_per_listing() {
        let properties = vec![sample("a", "Villa", 9e6), sample("b", "Flat", 4.5e6)];
        let output = comparison_table(&properties).render();

        let header = output.lines().nth(1).unwrap();
        assert!(header.contains("Villa") && header.contains("Flat"));
        let bedrooms = output.lines().find(|l| l.contains("Bedrooms")).unwrap();
        assert!(bedrooms.contains(MISSING));
    }

    #[test]
    fn favorites_table_falls_back_to_id() {
        let output = favorites_table(&[PropertyRef::new("p9")]).render();
        assert!(output.matches("p9").count() >= 2);
    }

    #[test]
    fn show_property_links_only_in_verbose() {
        let mut p = sample("a", "Villa", 9e6);
        p.images = vec!["villa.jpg".to_string()];

        let mut ui = MockUI::new();
        show_property(&mut ui, &p, false, "http://api", &RooflineTheme::plain());
        assert!(!ui.has_message("uploads"));

        let mut ui = MockUI::with_mode(OutputMode::Verbose);
        show_property(&mut ui, &p, true, "http://api", &RooflineTheme::plain());
        assert!(ui.has_message("http://api/uploads/villa.jpg"));
        assert_eq!(ui.headers(), ["Villa"]);
    }

    #[test]
    fn print_json_writes_message() {
        let mut ui = MockUI::new();
        print_json(&mut ui, &vec![PropertyRef::new("p1")]).unwrap();
        assert!(ui.output().contains("\"id\": \"p1\""));
    }
}
