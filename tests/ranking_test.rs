use canteen_greedy_rs::catalog::builtin_menu;
use canteen_greedy_rs::models::{CatalogItem, Category, ValueField};
use canteen_greedy_rs::planner::{rank, rerank};
use canteen_greedy_rs::CanteenError;

#[test]
fn test_builtin_menu_ranks_by_calories() {
    let menu = builtin_menu();
    let ranked = rank(&menu, |i| ValueField::Calories.ratio_of(i)).unwrap();

    assert_eq!(ranked.len(), menu.len());
    for pair in ranked.windows(2) {
        assert!(pair[0].ratio >= pair[1].ratio);
    }
    // Tempura: 90 kcal for 1000
    assert_eq!(ranked[0].item.name, "Tempura");
}

#[test]
fn test_value_fields_disagree() {
    let menu = vec![
        CatalogItem::new("Nasi Campur", 10000, 680, 88, Category::Food),
        CatalogItem::new("Es Teh", 3000, 10, 25, Category::Drink),
    ];

    let by_calories = rank(&menu, |i| ValueField::Calories.ratio_of(i)).unwrap();
    let by_score = rank(&menu, |i| ValueField::Score.ratio_of(i)).unwrap();

    assert_eq!(by_calories[0].item.name, "Nasi Campur");
    assert_eq!(by_score[0].item.name, "Nasi Campur");
    assert!(by_score[1].ratio > by_calories[1].ratio);
}

#[test]
fn test_equal_ratios_keep_catalog_order() {
    let menu = vec![
        CatalogItem::new("Jus Mangga", 5000, 150, 32, Category::Drink),
        CatalogItem::new("Susu", 5000, 150, 32, Category::Drink),
        CatalogItem::new("Jus Mangga", 10000, 300, 64, Category::Drink),
    ];
    let ranked = rank(&menu, |i| ValueField::Calories.ratio_of(i)).unwrap();

    let positions: Vec<usize> = ranked.iter().map(|r| r.position).collect();
    assert_eq!(positions, [0, 1, 2]);
}

#[test]
fn test_rerank_switches_field() {
    let menu = vec![
        CatalogItem::new("Nasi Campur", 10000, 680, 88, Category::Food),
        CatalogItem::new("Tempura", 1000, 90, 35, Category::Food),
        CatalogItem::new("Kopi Tubruk", 5000, 85, 22, Category::Drink),
    ];
    let by_calories = rank(&menu, |i| ValueField::Calories.ratio_of(i)).unwrap();
    let by_score = rerank(&by_calories, |i| ValueField::Score.ratio_of(i));

    let names: Vec<&str> = by_score.iter().map(|r| r.item.name.as_str()).collect();
    assert_eq!(names, ["Tempura", "Nasi Campur", "Kopi Tubruk"]);
    assert_eq!(by_score[0].position, 1);
}

#[test]
fn test_negative_price_rejected_before_ranking() {
    let menu = vec![
        CatalogItem::new("Tempura", 1000, 90, 35, Category::Food),
        CatalogItem::new("Refund", -500, 0, 0, Category::Snack),
    ];
    let err = rank(&menu, |i| ValueField::Calories.ratio_of(i)).unwrap_err();
    assert!(matches!(err, CanteenError::InvalidItem { price: -500, .. }));
}
