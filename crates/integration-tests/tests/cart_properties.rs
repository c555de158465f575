//! Cart invariants checked over long, seeded random operation sequences.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use std::collections::HashSet;

use girlsshop_core::{Category, Price, Product, VariantLabel};
use girlsshop_storefront::{Cart, CartChange, CartError, LineKey};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use girlsshop_integration_tests::{label, product};

fn products() -> Vec<Product> {
    vec![
        product(1, "Lip Matte Miss Bettylip", 4500, Category::Maquillaje, &[]),
        product(17, "Set Brochas x5", 5000, Category::Accesorios, &[]),
        product(
            37,
            "Bálsamo Hidratante",
            4000,
            Category::Maquillaje,
            &["Uva", "Arándanos", "Limón", "Cereza"],
        ),
        product(
            42,
            "Perfume de Cartera",
            3500,
            Category::CuidadoPersonal,
            &["Yara", "Candy"],
        ),
    ]
}

/// Pick a variant for `product`: usually a valid one, sometimes none or a
/// bogus one.
fn pick_variant(rng: &mut StdRng, product: &Product) -> Option<VariantLabel> {
    match rng.random_range(0..10) {
        0 => None,
        1 => Some(label("Menta")),
        _ => {
            let options = product.options();
            if options.is_empty() {
                None
            } else {
                options.get(rng.random_range(0..options.len())).cloned()
            }
        }
    }
}

/// Σ price × quantity, recomputed independently from the line list.
fn recomputed_total(cart: &Cart) -> u64 {
    cart.lines()
        .iter()
        .map(|line| line.unit_price().amount() * u64::from(line.quantity()))
        .sum()
}

fn assert_invariants(cart: &Cart, catalog: &[Product]) {
    let mut keys = HashSet::new();
    for line in cart.lines() {
        assert!(line.quantity() >= 1, "line {} has zero quantity", line.key());
        assert!(keys.insert(line.key()), "duplicate line {}", line.key());

        let product = catalog
            .iter()
            .find(|p| p.id == line.product_id())
            .expect("line for a catalog product");
        if product.requires_variant() {
            let variant = line.variant().expect("variant-bearing line");
            assert!(product.offers(variant));
        } else {
            assert!(line.variant().is_none());
        }
    }
    assert_eq!(cart.total(), Price::new(recomputed_total(cart)));
    assert_eq!(
        cart.item_count(),
        cart.lines().iter().map(|l| u64::from(l.quantity())).sum::<u64>()
    );
}

#[test]
fn test_random_interleavings_hold_invariants() {
    let catalog = products();

    for seed in 0..32 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut cart = Cart::new();

        for _ in 0..500 {
            let product = &catalog[rng.random_range(0..catalog.len())];
            match rng.random_range(0..4) {
                0 | 1 => {
                    let variant = pick_variant(&mut rng, product);
                    let before = cart.clone();
                    match cart.add(product, variant.as_ref()) {
                        Ok(change) => assert!(change.is_changed()),
                        Err(CartError::VariantRequired { .. }) => assert_eq!(cart, before),
                    }
                }
                2 => {
                    let key = LineKey {
                        product_id: product.id,
                        variant: pick_variant(&mut rng, product),
                    };
                    let delta = rng.random_range(-3_i64..=3);
                    let before = cart.get(&key).map(|line| i64::from(line.quantity()));
                    let change = cart.update_quantity(&key, delta);
                    match before {
                        None => assert_eq!(change, CartChange::Unchanged),
                        Some(q) if q + delta <= 0 => {
                            assert_eq!(change, CartChange::Removed);
                            assert!(cart.get(&key).is_none());
                        }
                        Some(q) => {
                            let expected = u32::try_from(q + delta).unwrap();
                            assert_eq!(cart.get(&key).unwrap().quantity(), expected);
                        }
                    }
                }
                _ => {
                    if let Some(line) = cart.lines().first() {
                        let key = line.key();
                        assert_eq!(cart.remove(&key), CartChange::Removed);
                        assert!(cart.get(&key).is_none());
                    }
                }
            }
            assert_invariants(&cart, &catalog);
        }
    }
}

#[test]
fn test_repeated_adds_merge_into_one_line() {
    let catalog = products();
    let balsamo = &catalog[2];
    let uva = label("Uva");

    let mut cart = Cart::new();
    for n in 1..=25_u32 {
        cart.add(balsamo, Some(&uva)).unwrap();
        assert_eq!(cart.len(), 1);
        assert_eq!(
            cart.get(&LineKey::with_variant(balsamo.id, uva.clone()))
                .unwrap()
                .quantity(),
            n
        );
    }
    assert_eq!(cart.total(), Price::new(4000 * 25));
}

#[test]
fn test_add_without_variant_never_mutates() {
    let catalog = products();
    let mut rng = StdRng::seed_from_u64(99);
    let mut cart = Cart::new();

    // Fill with something first so "unchanged" is meaningful.
    cart.add(&catalog[0], None).unwrap();
    cart.add(&catalog[3], Some(&label("Yara"))).unwrap();

    for _ in 0..50 {
        let product = if rng.random_bool(0.5) {
            &catalog[2]
        } else {
            &catalog[3]
        };
        let before = cart.clone();
        let err = cart.add(product, None).unwrap_err();
        let CartError::VariantRequired { product_id, .. } = err;
        assert_eq!(product_id, product.id);
        assert_eq!(cart, before);
    }
}

#[test]
fn test_decrement_by_full_quantity_removes_line() {
    let catalog = products();
    let brochas = &catalog[1];
    let key = LineKey::product(brochas.id);

    for quantity in 1..=10_i64 {
        let mut cart = Cart::new();
        for _ in 0..quantity {
            cart.add(brochas, None).unwrap();
        }
        assert_eq!(cart.update_quantity(&key, -quantity), CartChange::Removed);
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Price::ZERO);
    }
}
