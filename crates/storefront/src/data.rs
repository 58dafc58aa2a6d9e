//! Built-in reference data.
//!
//! The storefront ships with a small sample catalog and the wilaya/commune
//! table used for delivery. Both can be replaced at startup with files named
//! by `CROCCO_CATALOG_PATH` and `CROCCO_REGIONS_PATH`.

use crocco_core::{Price, ProductId, RegionId, SubRegionId};

use crate::address::{Region, RegionTable, SubRegion};
use crate::catalog::{Catalog, Product};

struct SampleProduct {
    id: i32,
    name: &'static str,
    cents: u32,
    image: &'static str,
    category: &'static str,
    subcategory: &'static str,
    colors: &'static [&'static str],
    sizes: &'static [&'static str],
    is_new: bool,
    is_sale: bool,
}

const SAMPLE_PRODUCTS: &[SampleProduct] = &[
    SampleProduct {
        id: 1,
        name: "Classic Green T-Shirt",
        cents: 2999,
        image: "https://images.unsplash.com/photo-1576566588028-4147f3842f27",
        category: "tshirts",
        subcategory: "classic",
        colors: &["green"],
        sizes: &["S", "M", "L", "XL"],
        is_new: true,
        is_sale: false,
    },
    SampleProduct {
        id: 2,
        name: "Crocco Cap",
        cents: 1999,
        image: "https://images.unsplash.com/photo-1556306535-0f09a537f0a3",
        category: "accessories",
        subcategory: "caps",
        colors: &["black"],
        sizes: &["one-size"],
        is_new: false,
        is_sale: false,
    },
    SampleProduct {
        id: 3,
        name: "Urban Hoodie",
        cents: 4999,
        image: "https://images.unsplash.com/photo-1620799140408-edc6dcb6d633",
        category: "hoodies",
        subcategory: "urban",
        colors: &["gray"],
        sizes: &["M", "L", "XL"],
        is_new: false,
        is_sale: true,
    },
    SampleProduct {
        id: 4,
        name: "Premium Logo T-Shirt",
        cents: 3499,
        image: "https://images.unsplash.com/photo-1521572163474-6864f9cf17ab",
        category: "tshirts",
        subcategory: "premium",
        colors: &["white"],
        sizes: &["S", "M", "L"],
        is_new: false,
        is_sale: false,
    },
    SampleProduct {
        id: 5,
        name: "Sport T-Shirt",
        cents: 2499,
        image: "https://images.unsplash.com/photo-1622470953794-aa9c70b0fb9d",
        category: "tshirts",
        subcategory: "sport",
        colors: &["blue"],
        sizes: &["M", "L", "XL"],
        is_new: false,
        is_sale: false,
    },
    SampleProduct {
        id: 6,
        name: "Leather Belt",
        cents: 3999,
        image: "https://images.unsplash.com/photo-1611911813383-67769b37a149",
        category: "accessories",
        subcategory: "belts",
        colors: &["brown"],
        sizes: &["S", "M", "L"],
        is_new: false,
        is_sale: false,
    },
    SampleProduct {
        id: 7,
        name: "Casual Backpack",
        cents: 5999,
        image: "https://images.unsplash.com/photo-1553062407-98eeb64c6a62",
        category: "accessories",
        subcategory: "bags",
        colors: &["green"],
        sizes: &["one-size"],
        is_new: true,
        is_sale: false,
    },
    SampleProduct {
        id: 8,
        name: "Zip-Up Hoodie",
        cents: 5499,
        image: "https://images.unsplash.com/photo-1591047139829-d91aecb6caea",
        category: "hoodies",
        subcategory: "zipup",
        colors: &["black"],
        sizes: &["S", "M", "L", "XL"],
        is_new: false,
        is_sale: false,
    },
];

const SAMPLE_REGIONS: &[(i32, &str)] = &[
    (1, "Adrar"),
    (2, "Chlef"),
    (3, "Laghouat"),
    (4, "Oum El Bouaghi"),
    (5, "Batna"),
    (6, "Béjaïa"),
    (7, "Biskra"),
    (8, "Béchar"),
    (9, "Blida"),
    (10, "Bouira"),
    (16, "Alger"),
    (31, "Oran"),
];

// (id, name, parent region)
const SAMPLE_SUBREGIONS: &[(i32, &str, i32)] = &[
    (1601, "Alger Centre", 16),
    (1602, "Bab El Oued", 16),
    (1603, "Bologhine", 16),
    (1604, "Casbah", 16),
    (1605, "Hussein Dey", 16),
    (3101, "Oran", 31),
    (3102, "Bir El Djir", 31),
    (3103, "Es Senia", 31),
    (3104, "Arzew", 31),
    (3105, "Bethioua", 31),
];

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_owned()).collect()
}

/// The eight-product sample catalog.
#[must_use]
pub fn sample_catalog() -> Catalog {
    Catalog::from_trusted(
        SAMPLE_PRODUCTS
            .iter()
            .map(|p| Product {
                id: ProductId::new(p.id),
                name: p.name.to_owned(),
                price: Price::from_cents(p.cents),
                image: Some(p.image.to_owned()),
                category: p.category.to_owned(),
                subcategory: p.subcategory.to_owned(),
                colors: owned(p.colors),
                sizes: owned(p.sizes),
                is_new: p.is_new,
                is_sale: p.is_sale,
            })
            .collect(),
    )
}

/// The built-in wilaya/commune table.
///
/// Only Alger (16) and Oran (31) have communes configured; every other
/// wilaya resolves to an empty commune list.
#[must_use]
pub fn sample_regions() -> RegionTable {
    RegionTable::from_trusted(
        SAMPLE_REGIONS
            .iter()
            .map(|&(id, name)| Region {
                id: RegionId::new(id),
                name: name.to_owned(),
            })
            .collect(),
        SAMPLE_SUBREGIONS
            .iter()
            .map(|&(id, name, parent)| SubRegion {
                id: SubRegionId::new(id),
                name: name.to_owned(),
                parent_region_id: RegionId::new(parent),
            })
            .collect(),
    )
}
