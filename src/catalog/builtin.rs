use crate::models::{CatalogItem, Category};

/// The campus canteen menu: prices in Rupiah, calories in kcal, and a
/// nutrition score. Jus Mangga is sold at two stalls for different prices.
pub fn builtin_menu() -> Vec<CatalogItem> {
    vec![
        CatalogItem::new("Nasi Goreng", 15_000, 330, 70, Category::Food),
        CatalogItem::new("Mie Goreng", 12_000, 350, 65, Category::Food),
        CatalogItem::new("Ayam Goreng + Nasi", 15_000, 450, 80, Category::Food),
        CatalogItem::new("Nasi Katsu", 12_000, 480, 75, Category::Food),
        CatalogItem::new("Soto Ayam + Nasi", 10_000, 350, 65, Category::Food),
        CatalogItem::new("Soto Ayam", 8_000, 150, 55, Category::Food),
        CatalogItem::new("Gado-Gado", 10_000, 490, 72, Category::Food),
        CatalogItem::new("Nasi Katsu Asam Manis", 15_000, 520, 82, Category::Food),
        CatalogItem::new("Nasi Katsu Black Pepper", 15_000, 510, 81, Category::Food),
        CatalogItem::new("Mie Ayam", 12_000, 400, 68, Category::Food),
        CatalogItem::new("Bakso", 10_000, 325, 62, Category::Food),
        CatalogItem::new("Nasi Pecel", 10_000, 500, 75, Category::Food),
        CatalogItem::new("Nasi Sayur", 15_000, 380, 70, Category::Food),
        CatalogItem::new("Nasi Goreng Spesial", 20_000, 450, 78, Category::Food),
        CatalogItem::new("Nasi Pecel Telor", 13_000, 580, 82, Category::Food),
        CatalogItem::new("Batagor (isi 10)", 10_000, 580, 78, Category::Food),
        CatalogItem::new("Nasi Campur", 10_000, 680, 88, Category::Food),
        CatalogItem::new("Sup Ayam + Nasi", 8_000, 280, 58, Category::Food),
        CatalogItem::new("Tempe Goreng", 1_000, 80, 32, Category::Food),
        CatalogItem::new("Tempura", 1_000, 90, 35, Category::Food),
        CatalogItem::new("Teh Manis (hangat/dingin)", 3_000, 90, 20, Category::Drink),
        CatalogItem::new("Kopi Tubruk (gula)", 5_000, 85, 22, Category::Drink),
        CatalogItem::new("Jus Mangga", 5_000, 150, 32, Category::Drink),
        CatalogItem::new("Jus Jeruk", 5_000, 110, 28, Category::Drink),
        CatalogItem::new("Coca Cola/Fanta/Sprite", 7_000, 140, 30, Category::Drink),
        CatalogItem::new("Air Mineral (600 ml)", 3_000, 0, 10, Category::Drink),
        CatalogItem::new("Susu", 5_000, 150, 32, Category::Drink),
        CatalogItem::new("Teh Tawar", 2_000, 2, 8, Category::Drink),
        CatalogItem::new("Jus Mangga", 7_000, 150, 32, Category::Drink),
        CatalogItem::new("Jus Jambu", 7_000, 130, 30, Category::Drink),
        CatalogItem::new("Jus Wortel", 6_000, 80, 25, Category::Drink),
        CatalogItem::new("Cimory", 8_000, 130, 32, Category::Drink),
        CatalogItem::new("Teh Tarik", 8_000, 170, 35, Category::Drink),
        CatalogItem::new("Es Coklat", 10_000, 200, 40, Category::Drink),
        CatalogItem::new("Kopi Susu", 5_000, 130, 30, Category::Drink),
        CatalogItem::new("Minuman Vitamin", 6_000, 50, 22, Category::Drink),
        CatalogItem::new("Lemon Tea", 5_000, 90, 22, Category::Drink),
        CatalogItem::new("Nescafe Sachet", 7_000, 80, 28, Category::Drink),
        CatalogItem::new("Pop Ice", 5_000, 150, 32, Category::Drink),
        CatalogItem::new("Ultra Milk", 8_000, 125, 32, Category::Drink),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_menu_is_valid() {
        let menu = builtin_menu();
        assert_eq!(menu.len(), 40);
        assert!(menu.iter().all(|i| i.validate().is_ok()));
    }

    #[test]
    fn test_builtin_menu_categories() {
        let menu = builtin_menu();
        let drinks = menu.iter().filter(|i| i.category == Category::Drink).count();
        assert_eq!(drinks, 20);
        assert_eq!(menu.len() - drinks, 20);
    }
}
