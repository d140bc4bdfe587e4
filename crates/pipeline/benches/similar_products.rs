//! Benchmarks for similar-product selection and image fallback
//!
//! Run with: cargo bench --package pipeline

use catalog::{LowResImage, ProductImage, ProductRecord, ShippingProgram};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use pipeline::{MediaHostRenderer, PriceBand, PrimeEligibility, ProductPage, SortBy};
use std::sync::Arc;

fn build_page(similar: u64, images: usize) -> ProductPage {
    let programs = [
        ShippingProgram::Standard,
        ShippingProgram::Prime,
        ShippingProgram::FreeShipping,
        ShippingProgram::SameDay,
    ];
    let source = (0..similar)
        .map(|i| {
            if i % 17 == 0 {
                return None;
            }
            Some(
                ProductRecord::new(format!("B{i:09}"), (i * 7919) % 10_000)
                    .with_validity(i % 11 != 0)
                    .with_total_benefit_amount((i * 31) % 500)
                    .with_shipping_programs([programs[(i % 4) as usize]]),
            )
        })
        .collect();

    // Only the last image is a renderable LOOK image
    let mut descriptors: Vec<ProductImage> = (0..images)
        .map(|_| ProductImage::new(Some("PT01"), LowResImage::missing()))
        .collect();
    descriptors.push(ProductImage::new(Some("LOOK"), LowResImage::new("41look")));

    let product = ProductRecord::new("ROOT", 2500)
        .with_similar_products(source)
        .with_images(descriptors);
    ProductPage::new(product, Arc::new(MediaHostRenderer::default()))
}

fn bench_similar_products(c: &mut Criterion) {
    let page = build_page(1_000, 0);
    let band = PriceBand::new(Some(1_000), Some(8_000));

    c.bench_function("similar_products_price_low_to_high", |b| {
        b.iter(|| {
            let similar = page
                .similar_products(
                    black_box(Some(SortBy::PriceLowToHigh)),
                    &band,
                    &PrimeEligibility::FreeShipping,
                )
                .unwrap();
            black_box(similar.len())
        })
    });

    c.bench_function("similar_products_passthrough", |b| {
        b.iter(|| {
            let similar = page
                .similar_products(black_box(None), &band, &PrimeEligibility::All)
                .unwrap();
            black_box(similar.len())
        })
    });
}

fn bench_look_image(c: &mut Criterion) {
    let page = build_page(0, 50);

    c.bench_function("look_image_url", |b| {
        b.iter(|| {
            let url = page.look_image_url(black_box(500)).unwrap();
            black_box(url)
        })
    });
}

criterion_group!(benches, bench_similar_products, bench_look_image);
criterion_main!(benches);
