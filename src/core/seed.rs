use super::catalog::EntryType::{self, Multiple, Single};

/// country, visa type, price, length of stay (days), entries, filing fee
pub(crate) const SEED_PRODUCTS: &[(&str, &str, f64, u32, EntryType, f64)] = &[
    ("USA", "Tourist", 160.0, 90, Single, 20.0),
    ("USA", "Business", 185.0, 180, Multiple, 25.0),
    ("USA", "Student", 350.0, 730, Multiple, 50.0),
    ("Canada", "Tourist", 100.0, 180, Single, 15.0),
    ("Canada", "Business", 150.0, 365, Multiple, 30.0),
    ("Canada", "Student", 200.0, 1095, Multiple, 40.0),
    ("UK", "Tourist", 130.0, 180, Single, 25.0),
    ("UK", "Business", 200.0, 365, Multiple, 35.0),
    ("UK", "Student", 450.0, 1095, Multiple, 55.0),
    ("France", "Schengen", 80.0, 90, Single, 10.0),
    ("Germany", "Schengen", 90.0, 90, Multiple, 12.0),
    ("Italy", "Schengen", 85.0, 90, Single, 11.0),
    ("Spain", "Schengen", 88.0, 90, Multiple, 13.0),
    ("Australia", "Tourist", 145.0, 90, Single, 18.0),
    ("Australia", "Business", 250.0, 365, Multiple, 40.0),
    ("Australia", "Student", 620.0, 1095, Multiple, 60.0),
    ("Japan", "Tourist", 30.0, 90, Single, 8.0),
    ("Japan", "Business", 55.0, 180, Multiple, 12.0),
    ("Japan", "Student", 100.0, 730, Multiple, 25.0),
    ("China", "Tourist", 140.0, 90, Single, 20.0),
    ("China", "Business", 185.0, 180, Multiple, 30.0),
    ("China", "Student", 250.0, 1095, Multiple, 45.0),
    ("India", "Tourist", 25.0, 30, Single, 5.0),
    ("India", "Business", 75.0, 180, Multiple, 10.0),
    ("India", "Student", 100.0, 365, Multiple, 20.0),
    ("Brazil", "Tourist", 40.0, 90, Single, 10.0),
    ("Brazil", "Business", 160.0, 180, Multiple, 25.0),
    ("Brazil", "Student", 200.0, 730, Multiple, 35.0),
    ("Russia", "Tourist", 50.0, 30, Single, 15.0),
    ("Russia", "Business", 150.0, 180, Multiple, 25.0),
    ("Russia", "Student", 250.0, 1095, Multiple, 40.0),
    ("UAE", "Tourist", 90.0, 30, Single, 10.0),
    ("UAE", "Business", 120.0, 180, Multiple, 15.0),
    ("UAE", "Student", 250.0, 1095, Multiple, 35.0),
    ("Mexico", "Tourist", 36.0, 180, Single, 8.0),
    ("Mexico", "Business", 100.0, 365, Multiple, 20.0),
    ("Mexico", "Student", 200.0, 1095, Multiple, 30.0),
    ("South Africa", "Tourist", 50.0, 90, Single, 12.0),
    ("South Africa", "Business", 125.0, 180, Multiple, 18.0),
    ("South Africa", "Student", 200.0, 1095, Multiple, 30.0),
    ("Argentina", "Tourist", 150.0, 90, Single, 15.0),
    ("Argentina", "Business", 180.0, 180, Multiple, 25.0),
    ("Argentina", "Student", 250.0, 1095, Multiple, 35.0),
    ("Thailand", "Tourist", 35.0, 60, Single, 5.0),
    ("Thailand", "Business", 75.0, 180, Multiple, 10.0),
    ("Thailand", "Student", 175.0, 730, Multiple, 25.0),
    ("Vietnam", "Tourist", 25.0, 30, Single, 5.0),
    ("Vietnam", "Business", 50.0, 180, Multiple, 12.0),
    ("Vietnam", "Student", 150.0, 730, Multiple, 20.0),
];
