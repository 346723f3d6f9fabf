use aims_catalog::{AvailabilityError, Cart, InStoreCart, Media, MediaType, StockManager};
use aims_config::Config;
use aims_order::delivery::{ADDRESS, NAME, PHONE_NUMBER};
use aims_order::{
    PercentageFeeCalculator, PlaceOrderError, PlaceOrderFlow, RushEligibility, RushOrderRequest,
};
use std::collections::HashMap;
use std::sync::Arc;

fn store_cart() -> InStoreCart {
    let mut cart = Cart::new();
    cart.add_media(Media::new(38, "Abbey Road", MediaType::Lp, 450_000), 1);
    cart.add_media(Media::new(12, "Dune", MediaType::Book, 120_000), 2);
    cart.add_media(Media::new(7, "Alien", MediaType::Dvd, 90_000), 1);

    let mut stock = StockManager::new();
    stock.set_stock(38, 3);
    stock.set_stock(12, 2);
    stock.set_stock(7, 1);

    InStoreCart::new(cart, stock)
}

fn delivery_form() -> HashMap<String, String> {
    HashMap::from([
        (ADDRESS.to_string(), "Dai Co Viet Hai Ba Trung".to_string()),
        (NAME.to_string(), "Hoang".to_string()),
        (PHONE_NUMBER.to_string(), "0912345678".to_string()),
    ])
}

#[test]
fn test_checkout_with_configured_fee() {
    let config = Config::default();
    let fees = PercentageFeeCalculator::from_rules(&config.shipping);
    let flow = PlaceOrderFlow::new(store_cart(), Arc::new(fees));

    let checkout = flow.checkout(&delivery_form()).unwrap();
    let amount = 450_000 + 2 * 120_000 + 90_000;

    assert_eq!(checkout.invoice.amount(), amount);
    assert_eq!(checkout.invoice.order.items.len(), 3);
    assert!(checkout.shipping_fee >= 0);
    assert!((checkout.shipping_fee as f64) < 0.10 * amount as f64);
}

#[test]
fn test_step_by_step_matches_checkout_order() {
    let flow = PlaceOrderFlow::new(store_cart(), Arc::new(PercentageFeeCalculator::default()));

    flow.place_order().unwrap();
    let order = flow.create_order();
    let cart_items = flow.cart().cart.items();

    for (ordered, carted) in order.items.iter().zip(cart_items) {
        assert_eq!(ordered.media.id, carted.media.id);
        assert_eq!(ordered.quantity, carted.quantity);
        assert_eq!(ordered.price, carted.price);
    }

    let invoice = flow.create_invoice(order);
    assert!(flow.process_delivery_info(&delivery_form()));
    let fee = flow.calculate_shipping_fee(&invoice.order);
    assert!((fee as f64) < 0.10 * invoice.amount() as f64);
}

#[test]
fn test_checkout_rejects_sold_out_cart() {
    let mut provider = store_cart();
    provider.stock.set_stock(12, 1);
    let flow = PlaceOrderFlow::new(provider, Arc::new(PercentageFeeCalculator::default()));

    match flow.checkout(&delivery_form()) {
        Err(PlaceOrderError::Availability(AvailabilityError::MediaNotAvailable {
            media_id,
            requested,
            available,
            ..
        })) => {
            assert_eq!(media_id, 12);
            assert_eq!(requested, 2);
            assert_eq!(available, 1);
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_checkout_summary_serializes_real_values() {
    let flow = PlaceOrderFlow::new(store_cart(), Arc::new(PercentageFeeCalculator::default()));
    let checkout = flow.checkout(&delivery_form()).unwrap();

    let json = serde_json::to_value(&checkout).unwrap();
    assert_eq!(json["delivery_info"]["address"], "Dai Co Viet Hai Ba Trung");
    assert_eq!(json["delivery_info"]["name"], "Hoang");
    assert_eq!(json["delivery_info"]["phone_number"], "0912345678");
    assert_eq!(json["invoice"]["order"]["items"][0]["media"]["id"], 38);

    // Logs see the mask
    let debug = format!("{:?}", checkout.delivery_info);
    assert!(!debug.contains("0912345678"));
    assert!(!debug.contains("Dai Co Viet"));
}

#[test]
fn test_rush_order_with_cart_item() {
    let rush = RushEligibility::new(Config::default().rush_order);
    let flow = PlaceOrderFlow::new(store_cart(), Arc::new(PercentageFeeCalculator::default()));

    let rushable: Vec<i32> = flow
        .cart()
        .cart
        .items()
        .iter()
        .map(|i| i.media.id)
        .filter(|id| rush.is_support_rush_order(Some("Hà Nội"), *id))
        .collect();
    assert_eq!(rushable, vec![38]);

    let request = RushOrderRequest {
        location: Some("Hà Nội".to_string()),
        item_id: 38,
        receive_time: Some("24-12-2023 18:30".to_string()),
        info: Some("Gift wrapped".to_string()),
        instruction: Some("Ring twice".to_string()),
    };
    assert!(rush.check_rush_order(&request).is_ok());
}
