use crate::{category, product};

#[test]
fn category_name_must_not_be_blank() {
    assert!(category::validate_name("Beverages").is_ok());
    assert!(category::validate_name("").is_err());
    assert!(category::validate_name("   ").is_err());
}

#[test]
fn product_name_must_not_be_blank() {
    assert!(product::validate_name("Widget").is_ok());
    assert!(product::validate_name("\t\n").is_err());
}

#[test]
fn product_price_must_be_non_negative_and_finite() {
    assert!(product::validate_price(0.0).is_ok());
    assert!(product::validate_price(9.99).is_ok());
    assert!(product::validate_price(-0.01).is_err());
    assert!(product::validate_price(f64::NAN).is_err());
    assert!(product::validate_price(f64::INFINITY).is_err());
}

#[test]
fn product_stock_must_be_non_negative() {
    assert!(product::validate_stock(0).is_ok());
    assert!(product::validate_stock(5).is_ok());
    assert!(product::validate_stock(-1).is_err());
}
