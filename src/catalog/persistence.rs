use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::models::CatalogItem;

/// Load a catalog from a JSON or CSV file, chosen by extension.
///
/// CSV files need a `name,price,calories,score,category` header. Entries are
/// kept in file order and never deduplicated: two stalls may sell the same dish.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<CatalogItem>> {
    let path = path.as_ref();
    let is_csv = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);

    let items = if is_csv {
        load_csv(path)?
    } else {
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content)?
    };

    debug!(path = %path.display(), count = items.len(), "loaded catalog");
    Ok(items)
}

fn load_csv(path: &Path) -> Result<Vec<CatalogItem>> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_path(path)?;

    let mut items = Vec::new();
    for record in reader.deserialize() {
        let item: CatalogItem = record?;
        items.push(item);
    }
    Ok(items)
}

/// Save a catalog as pretty JSON.
pub fn save_catalog<P: AsRef<Path>>(path: P, items: &[CatalogItem]) -> Result<()> {
    let json = serde_json::to_string_pretty(items)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use std::io::Write;
    use tempfile::{Builder, NamedTempFile};

    #[test]
    fn test_load_and_save_roundtrip() {
        let json = r#"[
            {"name": "Nasi Pecel", "price": 10000, "calories": 500, "score": 75, "category": "food"},
            {"name": "Es Coklat", "price": 10000, "calories": 200, "category": "minuman"}
        ]"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let items = load_catalog(file.path()).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].category, Category::Drink);

        let out_file = NamedTempFile::new().unwrap();
        save_catalog(out_file.path(), &items).unwrap();

        let reloaded = load_catalog(out_file.path()).unwrap();
        assert_eq!(reloaded, items);
    }

    #[test]
    fn test_duplicate_names_are_kept() {
        let json = r#"[
            {"name": "Jus Mangga", "price": 5000, "calories": 150, "category": "drink"},
            {"name": "Jus Mangga", "price": 7000, "calories": 150, "category": "drink"}
        ]"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let items = load_catalog(file.path()).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].price, 5000);
        assert_eq!(items[1].price, 7000);
    }

    #[test]
    fn test_load_csv() {
        let csv = "name,price,calories,score,category\n\
                   Tempura, 1000, 90, 35, food\n\
                   Teh Tawar, 2000, 2, 8, minuman\n";

        let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(csv.as_bytes()).unwrap();

        let items = load_catalog(file.path()).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "Tempura");
        assert_eq!(items[1].category, Category::Drink);
    }

    #[test]
    fn test_negative_price_loads_but_fails_validation() {
        let json = r#"[{"name": "Refund", "price": -100, "calories": 0, "category": "snack"}]"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let items = load_catalog(file.path()).unwrap();
        assert!(items[0].validate().is_err());
    }
}
