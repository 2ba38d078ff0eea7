//! 商品目录
//!
//! 构建期已知的静态价格表，以及购物车展示用的分类标签与价格格式。

/// 目录中的一件商品
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Product {
    pub name: &'static str,
    pub category: &'static str,
    pub price: f64,
}

const fn product(name: &'static str, category: &'static str, price: f64) -> Product {
    Product {
        name,
        category,
        price,
    }
}

/// 全部在售商品，按店面展示顺序排列
pub const PRODUCTS: &[Product] = &[
    product("AeroFlex Jacket", "mens", 129.99),
    product("Arc Parka", "mens", 179.99),
    product("Strata Blazer", "mens", 149.99),
    product("Solace Trench", "mens", 189.99),
    product("Lumen Slip Dress", "womens", 89.99),
    product("Halo Knit Set", "womens", 119.99),
    product("Lithe Wrap Set", "womens", 99.99),
    product("Aster Knit Dress", "womens", 79.99),
    product("Nova Playset", "kids", 59.99),
    product("Nova Explorer Set", "kids", 69.99),
    product("Prism Rain Kit", "kids", 49.99),
    product("Mini Explorer Trio", "kids", 89.99),
    product("Bundle Boost Pack", "discount", 199.99),
    product("Orbit Sneaker Pack", "discount", 54.99),
    product("Weekender Bundle", "discount", 249.99),
    product("Studio Pack", "discount", 129.99),
];

/// 按商品名查找目录价格
pub fn price_of(name: &str) -> Option<f64> {
    PRODUCTS.iter().find(|p| p.name == name).map(|p| p.price)
}

/// 按分类筛选商品
pub fn in_category(category: &str) -> impl Iterator<Item = &'static Product> + '_ {
    PRODUCTS.iter().filter(move |p| p.category == category)
}

/// 购物车行上显示的分类标签
pub fn category_label(category: &str) -> &'static str {
    match category {
        "mens" => "Menswear pick",
        "womens" => "Womenswear pick",
        "kids" => "Kidswear pick",
        "discount" => "Discount deal",
        _ => "Fresh drop",
    }
}

/// `129.99` -> `$129.99`
pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}
