use crate::args::CartEntry;
use aims_catalog::{Cart, InStoreCart, Media, MediaType, StockManager};
use anyhow::bail;

/// Media on sale in the demo store, with units on the shelf
pub fn catalog() -> Vec<(Media, u32)> {
    vec![
        (Media::new(38, "Abbey Road", MediaType::Lp, 450_000), 3),
        (Media::new(12, "Dune", MediaType::Book, 120_000), 10),
        (Media::new(7, "Alien", MediaType::Dvd, 90_000), 1),
        (Media::new(21, "Kind of Blue", MediaType::Cd, 200_000), 5),
    ]
}

/// Fill a cart from the requested entries, or one of everything if none were given
pub fn build_cart(entries: &[CartEntry]) -> anyhow::Result<InStoreCart> {
    let catalog = catalog();
    let mut stock = StockManager::new();
    for (media, units) in &catalog {
        stock.set_stock(media.id, *units);
    }

    let mut cart = Cart::new();
    if entries.is_empty() {
        for (media, _) in &catalog {
            cart.add_media(media.clone(), 1);
        }
    } else {
        for entry in entries {
            let Some((media, _)) = catalog.iter().find(|(m, _)| m.id == entry.media_id) else {
                bail!("media {} is not in the catalog", entry.media_id);
            };
            cart.add_media(media.clone(), entry.quantity);
        }
    }

    Ok(InStoreCart::new(cart, stock))
}
