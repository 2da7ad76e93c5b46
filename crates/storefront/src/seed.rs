//! Static catalog the store starts with.

use gymstore_core::{
    ArticleId, BrandId, Email, OrderNumber, OrderStatus, PaymentMethod, ProductId, ReviewId,
};
use rust_decimal::Decimal;

use crate::cart::Cart;
use crate::models::article::{NUTRITION_KNOWLEDGE, SUPPLEMENT_KNOWLEDGE};
use crate::models::{Article, Brand, CustomerDetails, Order, Product, Review};

struct SeedProduct {
    id: i32,
    sku: &'static str,
    name: &'static str,
    images: &'static [&'static str],
    price: i64,
    old_price: Option<i64>,
    rating: f64,
    reviews: u32,
    sold: u32,
    category: &'static str,
    sub_category: Option<&'static str>,
    brand: &'static str,
    in_stock: bool,
    description: &'static str,
    sizes: &'static [&'static str],
    flavors: &'static [&'static str],
    featured: bool,
}

const WHEY: &str = "Whey Protein";
const MASS_GAINER: &str = "Tăng cân";
const STRENGTH: &str = "Tăng sức mạnh";
const HEALTH: &str = "Hỗ trợ sức khỏe";
const ACCESSORIES: &str = "Phụ kiện";

const PRODUCTS: &[SeedProduct] = &[
    SeedProduct {
        id: 1,
        sku: "ON-GSW-5LB",
        name: "Optimum Nutrition Gold Standard 100% Whey Protein 5Lbs",
        images: &[
            "https://picsum.photos/seed/product1/1200/600",
            "https://picsum.photos/seed/product1-2/400/400",
        ],
        price: 1_850_000,
        old_price: Some(2_200_000),
        rating: 4.8,
        reviews: 1250,
        sold: 88,
        category: WHEY,
        sub_category: Some("Whey Protein Blend"),
        brand: "Optimum Nutrition",
        in_stock: true,
        description: "24g protein pha trộn từ Whey Isolate, Concentrate và Peptides hỗ trợ khối lượng cơ nạc.",
        sizes: &["5Lbs", "10Lbs"],
        flavors: &["Double Rich Chocolate", "Vanilla Ice Cream", "Mocha Cappuccino"],
        featured: true,
    },
    SeedProduct {
        id: 2,
        sku: "R1-PRO-5LB",
        name: "Rule 1 R1 Protein 5Lbs",
        images: &["https://picsum.photos/seed/product2/1200/600"],
        price: 1_950_000,
        old_price: None,
        rating: 4.9,
        reviews: 980,
        sold: 65,
        category: WHEY,
        sub_category: Some("Whey Protein Isolate"),
        brand: "Rule 1",
        in_stock: true,
        description: "100% whey isolate siêu tinh khiết kết hợp whey hydrolysate tác dụng nhanh.",
        sizes: &["5Lbs"],
        flavors: &["Chocolate Fudge", "Vanilla Creme", "Strawberries & Creme"],
        featured: true,
    },
    SeedProduct {
        id: 3,
        sku: "MP-IMPISO-5.5LB",
        name: "Myprotein Impact Whey Isolate 5.5Lbs",
        images: &["https://picsum.photos/seed/product3/400/400"],
        price: 1_790_000,
        old_price: Some(2_000_000),
        rating: 4.7,
        reviews: 850,
        sold: 112,
        category: WHEY,
        sub_category: Some("Whey Protein Isolate"),
        brand: "Myprotein",
        in_stock: true,
        description: "23g protein mỗi lần dùng, ít chất béo và carb.",
        sizes: &["5.5Lbs"],
        flavors: &["Chocolate Brownie", "Salted Caramel", "Unflavored"],
        featured: false,
    },
    SeedProduct {
        id: 4,
        sku: "AN-ISOXP-2KG",
        name: "Applied Nutrition ISO-XP 100% Whey Isolate 2kg",
        images: &["https://picsum.photos/seed/product4/400/400"],
        price: 2_100_000,
        old_price: None,
        rating: 4.9,
        reviews: 720,
        sold: 0,
        category: WHEY,
        sub_category: Some("Whey Protein Isolate"),
        brand: "Applied Nutrition",
        in_stock: true,
        description: "Whey isolate tinh khiết, không đường, không lactose.",
        sizes: &[],
        flavors: &["Choco Coco", "Cafe Latte", "Mango & Passion Fruit"],
        featured: false,
    },
    SeedProduct {
        id: 5,
        sku: "ON-SM-12LB",
        name: "Optimum Nutrition Serious Mass 12Lbs",
        images: &["https://picsum.photos/seed/product5/1200/600"],
        price: 1_650_000,
        old_price: None,
        rating: 4.6,
        reviews: 2100,
        sold: 0,
        category: MASS_GAINER,
        sub_category: None,
        brand: "Optimum Nutrition",
        in_stock: true,
        description: "1250 calories và 50g protein mỗi liều dùng để hỗ trợ tăng cân.",
        sizes: &[],
        flavors: &["Chocolate", "Vanilla", "Banana"],
        featured: true,
    },
    SeedProduct {
        id: 6,
        sku: "R1-LBS-12LB",
        name: "Rule 1 LBS High-Calorie Mass Gainer 12Lbs",
        images: &["https://picsum.photos/seed/product6/400/400"],
        price: 1_550_000,
        old_price: Some(1_700_000),
        rating: 4.7,
        reviews: 1500,
        sold: 95,
        category: MASS_GAINER,
        sub_category: None,
        brand: "Rule 1",
        in_stock: false,
        description: "Hơn 1000 calories và 40g protein giúp tăng cân nhanh chóng.",
        sizes: &[],
        flavors: &["Chocolate Fudge", "Vanilla Creme"],
        featured: false,
    },
    SeedProduct {
        id: 7,
        sku: "C4-ORIG-60SRV",
        name: "C4 Original Pre Workout 60 Servings",
        images: &["https://picsum.photos/seed/product7/1200/600"],
        price: 950_000,
        old_price: None,
        rating: 4.8,
        reviews: 3200,
        sold: 0,
        category: STRENGTH,
        sub_category: Some("Pre-Workout"),
        brand: "Nutrabolt (C4)",
        in_stock: true,
        description: "Tăng năng lượng, sự tập trung và sức bền cho buổi tập.",
        sizes: &[],
        flavors: &["Icy Blue Razz", "Fruit Punch", "Watermelon"],
        featured: true,
    },
    SeedProduct {
        id: 8,
        sku: "AN-ABE-30SRV",
        name: "Applied Nutrition ABE Pre-Workout 30 Servings",
        images: &["https://picsum.photos/seed/product8/400/400"],
        price: 850_000,
        old_price: None,
        rating: 4.9,
        reviews: 1800,
        sold: 0,
        category: STRENGTH,
        sub_category: Some("Pre-Workout"),
        brand: "Applied Nutrition",
        in_stock: true,
        description: "Công thức pre-workout tăng hiệu suất và giảm mệt mỏi.",
        sizes: &[],
        flavors: &["Energy Flavour", "Cherry Cola", "Bubblegum Crush"],
        featured: false,
    },
    SeedProduct {
        id: 9,
        sku: "ON-FISH-200CAP",
        name: "Optimum Nutrition Fish Oil Omega-3 200 viên",
        images: &["https://picsum.photos/seed/product9/400/400"],
        price: 450_000,
        old_price: None,
        rating: 4.9,
        reviews: 5000,
        sold: 0,
        category: HEALTH,
        sub_category: None,
        brand: "Optimum Nutrition",
        in_stock: true,
        description: "Omega-3 hỗ trợ tim mạch, não bộ và khớp.",
        sizes: &[],
        flavors: &[],
        featured: false,
    },
    SeedProduct {
        id: 10,
        sku: "MP-VITD3-180CAP",
        name: "Myprotein Vitamin D3 Elite 180 viên",
        images: &["https://picsum.photos/seed/product10/400/400"],
        price: 350_000,
        old_price: None,
        rating: 4.8,
        reviews: 1200,
        sold: 0,
        category: HEALTH,
        sub_category: None,
        brand: "Myprotein",
        in_stock: true,
        description: "Vitamin D3 cho xương chắc khỏe và hệ miễn dịch.",
        sizes: &[],
        flavors: &[],
        featured: false,
    },
    SeedProduct {
        id: 11,
        sku: "GS-SHAKER-700ML",
        name: "GymSup Premium Shaker 700ml",
        images: &["https://picsum.photos/seed/product11/400/400"],
        price: 150_000,
        old_price: None,
        rating: 4.5,
        reviews: 350,
        sold: 0,
        category: ACCESSORIES,
        sub_category: None,
        brand: "GymSup",
        in_stock: true,
        description: "Bình lắc chống rò rỉ, nhựa không chứa BPA.",
        sizes: &[],
        flavors: &[],
        featured: false,
    },
    SeedProduct {
        id: 12,
        sku: "R1-TRAIN-BCAA",
        name: "Rule 1 R1 Train BCAAs + Electrolytes",
        images: &["https://picsum.photos/seed/product12/400/400"],
        price: 750_000,
        old_price: None,
        rating: 4.7,
        reviews: 640,
        sold: 0,
        category: STRENGTH,
        sub_category: Some("BCAAs"),
        brand: "Rule 1",
        in_stock: true,
        description: "BCAA phục hồi cơ bắp kết hợp chất điện giải.",
        sizes: &[],
        flavors: &["Blue Raspberry", "Orange Burst", "Watermelon Splash"],
        featured: false,
    },
    SeedProduct {
        id: 13,
        sku: "TR-CRE-450G",
        name: "Thorne Creatine 450g",
        images: &["https://picsum.photos/seed/product13/400/400"],
        price: 950_000,
        old_price: None,
        rating: 5.0,
        reviews: 890,
        sold: 0,
        category: STRENGTH,
        sub_category: Some("Creatine"),
        brand: "Thorne Research",
        in_stock: true,
        description: "Creatine tinh khiết đạt chứng nhận NSF for Sport.",
        sizes: &[],
        flavors: &[],
        featured: false,
    },
    SeedProduct {
        id: 14,
        sku: "NTRX-OUTLIFT-20SRV",
        name: "Nutrex Outlift Pre-Workout 20 Servings",
        images: &["https://picsum.photos/seed/product14/400/400"],
        price: 890_000,
        old_price: None,
        rating: 4.7,
        reviews: 1100,
        sold: 0,
        category: STRENGTH,
        sub_category: Some("Pre-Workout"),
        brand: "Nutrex",
        in_stock: true,
        description: "Pre-workout với liều lượng lâm sàng.",
        sizes: &[],
        flavors: &["Miami Vice", "Italian Ice"],
        featured: false,
    },
    SeedProduct {
        id: 15,
        sku: "RC1-TOTALWAR-30SRV",
        name: "Redcon1 Total War Pre-Workout 30 Servings",
        images: &["https://picsum.photos/seed/product15/400/400"],
        price: 920_000,
        old_price: None,
        rating: 4.8,
        reviews: 2500,
        sold: 0,
        category: STRENGTH,
        sub_category: Some("Pre-Workout"),
        brand: "Redcon1",
        in_stock: true,
        description: "Pre-workout chuyên nghiệp cho sức mạnh và sự tập trung.",
        sizes: &[],
        flavors: &["Tiger's Blood", "Blue Lemonade"],
        featured: false,
    },
];

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_owned()).collect()
}

fn launch_reviews() -> Vec<Review> {
    [
        (1, "Trần Văn Mạnh", 5, "Vị chocolate rất ngon, tan nhanh. Giao hàng nhanh chóng.", "20/07/2023"),
        (2, "Nguyễn Thị Hằng", 4, "Vị Vani hơi ngọt nhưng chất lượng không có gì để chê.", "18/07/2023"),
        (3, "Lê Minh Khôi", 5, "Best whey protein in the market! Been using it for years.", "15/07/2023"),
    ]
    .into_iter()
    .map(|(id, author, rating, comment, date)| Review {
        id: ReviewId::new(id),
        author: author.to_owned(),
        rating,
        comment: comment.to_owned(),
        date: date.to_owned(),
    })
    .collect()
}

/// The starting product catalog.
#[must_use]
pub fn products() -> Vec<Product> {
    PRODUCTS
        .iter()
        .map(|seed| Product {
            id: ProductId::new(seed.id),
            sku: seed.sku.to_owned(),
            name: seed.name.to_owned(),
            images: owned(seed.images),
            price: Decimal::from(seed.price),
            old_price: seed.old_price.map(Decimal::from),
            rating: seed.rating,
            reviews: seed.reviews,
            sold: seed.sold,
            stock_quantity: if seed.in_stock { 100 } else { 0 },
            category: seed.category.to_owned(),
            sub_category: seed.sub_category.map(str::to_owned),
            brand: seed.brand.to_owned(),
            in_stock: seed.in_stock,
            description: seed.description.to_owned(),
            sizes: owned(seed.sizes),
            flavors: owned(seed.flavors),
            product_reviews: if seed.id == 1 { launch_reviews() } else { Vec::new() },
            is_featured: seed.featured,
        })
        .collect()
}

/// The starting brand list.
#[must_use]
pub fn brands() -> Vec<Brand> {
    [
        (1, "Optimum Nutrition", "onlogo", true),
        (2, "Myprotein", "mylogo", true),
        (3, "Rule 1", "r1logo", true),
        (4, "Applied Nutrition", "anlogo", true),
        (5, "Nutrabolt (C4)", "c4logo", true),
        (6, "BPI Sports", "bpilogo", true),
        (7, "Thorne Research", "thornelogo", false),
        (8, "Nutrex", "nutrexlogo", false),
        (9, "Redcon1", "redconlogo", false),
    ]
    .into_iter()
    .map(|(id, name, logo, is_featured)| Brand {
        id: BrandId::new(id),
        name: name.to_owned(),
        logo: format!("https://picsum.photos/seed/{logo}/200/100"),
        is_featured,
    })
    .collect()
}

/// The starting knowledge articles.
#[must_use]
pub fn articles() -> Vec<Article> {
    [
        (
            5,
            "Uống Magie B6 nhiều có tốt không? Liều dùng và cảnh báo tác dụng phụ",
            "03/11/2025",
            "Magie B6 là những chất dinh dưỡng cần thiết cho sức khỏe.",
            "magnesium",
            SUPPLEMENT_KNOWLEDGE,
            "https://hellobacsi.com/thuoc/magnesium-vitamin-b6/",
        ),
        (
            1,
            "Whey Protein là gì? Tác dụng và cách dùng hiệu quả",
            "15/07/2023",
            "Lợi ích của Whey Protein đối với người tập gym.",
            "article1",
            SUPPLEMENT_KNOWLEDGE,
            "https://www.thegioiwhey.com/blogs/kien-thuc-the-hinh/whey-protein-la-gi-tac-dung-huu-ich-cua-whey-protein",
        ),
        (
            2,
            "Creatine: \"Vua\" của các loại thực phẩm bổ sung tăng sức mạnh",
            "12/07/2023",
            "Creatine là một trong những chất bổ sung hiệu quả nhất để tăng sức mạnh.",
            "article2",
            SUPPLEMENT_KNOWLEDGE,
            "https://gymstore.vn/creatine-la-gi",
        ),
        (
            3,
            "BMR là gì? Hướng dẫn tính BMR để tăng/giảm cân khoa học",
            "10/07/2023",
            "Chỉ số BMR giúp xác định lượng calo cần thiết mỗi ngày.",
            "article3",
            NUTRITION_KNOWLEDGE,
            "https://tamanhhospital.vn/bmr",
        ),
        (
            4,
            "Top 10 thực phẩm giàu protein cho người tập gym",
            "08/07/2023",
            "Chế độ ăn giàu protein để xây dựng cơ bắp.",
            "article4",
            NUTRITION_KNOWLEDGE,
            "https://www.wheystore.vn/news/thuc-pham-giau-protein-1154",
        ),
    ]
    .into_iter()
    .map(|(id, title, date, snippet, image, category, url)| Article {
        id: ArticleId::new(id),
        title: title.to_owned(),
        date: date.to_owned(),
        snippet: snippet.to_owned(),
        image: format!("https://picsum.photos/seed/{image}/400/200"),
        category: category.to_owned(),
        url: url.to_owned(),
    })
    .collect()
}

/// The starting order book, built against the seeded `products`.
#[must_use]
pub fn orders(products: &[Product]) -> Vec<Order> {
    let find = |id: i32| products.iter().find(|p| p.id == ProductId::new(id));

    let mut delivered = Cart::new();
    if let Some(whey) = find(1) {
        delivered.add_line(
            whey,
            1,
            Some("5Lbs".to_owned()),
            Some("Double Rich Chocolate".to_owned()),
        );
    }

    let mut pending = Cart::new();
    if let Some(c4) = find(7) {
        pending.add_line(c4, 1, None, Some("Icy Blue Razz".to_owned()));
    }
    if let Some(mass) = find(5) {
        pending.add_line(mass, 1, None, Some("Chocolate".to_owned()));
    }

    [
        seed_order(
            12345,
            "15/07/2023",
            OrderStatus::Completed,
            &delivered,
            ("Nguyễn Văn An", "an.nguyen@example.com", "0901234567", "123 Đường A, Quận B, TP. HCM"),
            PaymentMethod::Card,
        ),
        seed_order(
            12340,
            "10/07/2023",
            OrderStatus::Processing,
            &pending,
            ("Trần Thị Bích", "bich.tran@example.com", "0912345678", "456 Đường C, Quận D, Hà Nội"),
            PaymentMethod::Cod,
        ),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn seed_order(
    number: u32,
    date: &str,
    status: OrderStatus,
    cart: &Cart,
    (name, email, phone, address): (&str, &str, &str, &str),
    payment_method: PaymentMethod,
) -> Option<Order> {
    Some(Order {
        id: OrderNumber::from_digits(number),
        date: date.to_owned(),
        status,
        total: cart.subtotal(),
        items: cart.lines().to_vec(),
        customer: CustomerDetails {
            name: name.to_owned(),
            email: Email::parse(email).ok()?,
            phone: phone.to_owned(),
            address: address.to_owned(),
        },
        payment_status: payment_method.initial_status(),
        payment_method,
    })
}
