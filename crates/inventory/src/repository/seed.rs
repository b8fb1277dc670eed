/// A row of the initial catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedProduct {
    pub sku: &'static str,
    pub name: &'static str,
    pub stock: i64,
}

pub const SEED_PRODUCTS: [SeedProduct; 6] = [
    SeedProduct {
        sku: "CASE-IPHN",
        name: "Capinha para iPhone",
        stock: 15,
    },
    SeedProduct {
        sku: "IPHN-15-BLK",
        name: "iPhone 15 Preto 128GB",
        stock: 12,
    },
    SeedProduct {
        sku: "IPHN-15-PNK",
        name: "iPhone 15 Rosa 128GB",
        stock: 7,
    },
    SeedProduct {
        sku: "AIRP-3RD",
        name: "AirPods (3ª geração)",
        stock: 20,
    },
    SeedProduct {
        sku: "APWT-S9",
        name: "Apple Watch Series 9",
        stock: 9,
    },
    SeedProduct {
        sku: "MGSF-15W",
        name: "Carregador MagSafe 15W",
        stock: 30,
    },
];
