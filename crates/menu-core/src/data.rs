//! Built-in Restaurant Data
//!
//! The fixed menu shipped with the page, in declaration order.

use crate::domain::{Category, MenuItem};

pub(crate) fn categories() -> Vec<Category> {
    vec![
        Category::new("all", "همه", "🍽️", "bg-gray-100"),
        Category::new("pizza", "پیتزا", "🍕", "bg-red-50"),
        Category::new("burger", "برگر", "🍔", "bg-amber-50"),
        Category::new("pasta", "پاستا", "🍝", "bg-blue-50"),
        Category::new("salad", "سالاد", "🥗", "bg-green-50"),
        Category::new("drink", "نوشیدنی", "🥤", "bg-sky-50"),
        Category::new("dessert", "دسر", "🍰", "bg-pink-50"),
    ]
}

pub(crate) fn menu_items() -> Vec<MenuItem> {
    vec![
        MenuItem::new(1, "پیتزا مخصوص", "pizza", 150000, 25)
            .with_description("پپرونی، قارچ، پنیر موزارلا، سس مخصوص رستوران")
            .with_image("https://images.unsplash.com/photo-1513104890138-7c749659a591")
            .with_rating(4.8)
            .with_calories(850)
            .with_ingredients(&["پنیر موزارلا", "پپرونی", "قارچ", "سس گوجه"]),
        MenuItem::new(2, "برگر کل", "burger", 120000, 15)
            .with_description("گوشت گوساله 200گرمی با پنیر چدار و سس مخصوص")
            .with_image("https://images.unsplash.com/photo-1568901346375-23c9450c58cd")
            .with_rating(4.6)
            .with_calories(720)
            .with_ingredients(&["نان برگر", "گوشت گوساله", "پنیر چدار", "کاهو"]),
        MenuItem::new(3, "پاستا آلفردو", "pasta", 135000, 20)
            .with_description("پاستا با سس آلفردو خامه‌ای و قارچ تازه")
            .with_image("https://images.unsplash.com/photo-1555949258-eb67b1ef0ceb")
            .with_rating(4.5)
            .with_calories(650)
            .with_ingredients(&["پاستا پنه", "سس آلفردو", "قارچ", "پنیر پارمزان"]),
        MenuItem::new(4, "سالاد سزار", "salad", 95000, 10)
            .with_description("سالاد سزار کلاسیک با سس مخصوص و نان کروتون")
            .with_image("https://images.unsplash.com/photo-1546793665-c74683f339c1")
            .with_rating(4.3)
            .with_calories(320)
            .with_ingredients(&["کاهو رومی", "سس سزار", "پنیر پارمزان", "کروتون"]),
        MenuItem::new(5, "نوشابه", "drink", 35000, 2)
            .with_description("نوشابه گازدار خنک 330ml")
            .with_image("https://images.unsplash.com/photo-1554866585-cd94860890b7")
            .with_rating(3.9)
            .with_calories(150),
        MenuItem::new(6, "چیزکیک", "dessert", 85000, 5)
            .with_description("چیزکیک کلاسیک با توت فرنگی تازه")
            .with_image("https://images.unsplash.com/photo-1571115177098-24ec42ed204d")
            .with_rating(4.7)
            .with_calories(480)
            .with_ingredients(&["بیسکویت", "خامه پنیر", "توت فرنگی", "شکر"]),
    ]
}
