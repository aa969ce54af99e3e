//! Static content of the ROY_L landing page as data: navigation, menu
//! highlights, testimonials, gallery, contact details. Templates render
//! these; nothing here carries state.

pub const BRAND_NAME: &str = "ROY_L";
pub const TAGLINE: &str = "Royal Taste. Family Warmth.";

// Brand palette, also baked into the gallery placeholder URLs.
pub const BG_DARK: &str = "0B0B0B";
pub const GOLD: &str = "D4AF37";

/// Width every gallery placeholder is requested at; height follows the ratio.
const PLACEHOLDER_WIDTH: u32 = 600;

#[derive(Debug, Clone)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub fn nav_links() -> Vec<NavLink> {
    vec![
        NavLink { label: "Home", href: "/#home" },
        NavLink { label: "About", href: "/#about" },
        NavLink { label: "Menu", href: "/#menu" },
        NavLink { label: "Gallery", href: "/#gallery" },
        NavLink { label: "Contact", href: "/#contact" },
    ]
}

#[derive(Debug, Clone)]
pub struct MenuHighlight {
    pub name: &'static str,
    pub desc: &'static str,
    pub price: &'static str,
    pub icon: &'static str,
}

pub fn menu_highlights() -> Vec<MenuHighlight> {
    vec![
        MenuHighlight {
            name: "Royal Beef Wellington",
            desc: "Tender fillet mignon, mushroom duxelles, prosciutto, flaky pastry.",
            price: "$45",
            icon: "🍴",
        },
        MenuHighlight {
            name: "Golden Truffle Pasta",
            desc: "Handmade fettuccine, shaved black truffles, Parmesan-reggiano cream.",
            price: "$28",
            icon: "🍝",
        },
        MenuHighlight {
            name: "Signature ROY_L Coffee Blend",
            desc: "Single-origin beans, house-roasted, perfectly balanced and rich.",
            price: "$6",
            icon: "☕",
        },
        MenuHighlight {
            name: "Heirloom Tomato Salad",
            desc: "Fresh basil, buffalo mozzarella, aged balsamic glaze.",
            price: "$15",
            icon: "🥗",
        },
        MenuHighlight {
            name: "Family Brunch Platter",
            desc: "Assortment of artisanal pastries, fresh fruit, and smoked salmon.",
            price: "$32",
            icon: "🥐",
        },
        MenuHighlight {
            name: "Decadent Chocolate Lava Cake",
            desc: "Served with vanilla bean ice cream and raspberry coulis.",
            price: "$12",
            icon: "🍰",
        },
    ]
}

#[derive(Debug, Clone)]
pub struct Testimonial {
    pub quote: &'static str,
    pub name: &'static str,
    /// Star rating out of five.
    pub rating: usize,
}

pub fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            quote: "Absolutely stellar food and the most elegant atmosphere. Perfect for our anniversary!",
            name: "Sarah K.",
            rating: 5,
        },
        Testimonial {
            quote: "The Royal Beef Wellington is a must-try. The service was impeccable, and the kids loved it too.",
            name: "David M.",
            rating: 5,
        },
        Testimonial {
            quote: "A beautiful blend of fine dining and comfort. We now consider ROY_L our favorite family spot.",
            name: "Jia L.",
            rating: 4,
        },
    ]
}

#[derive(Debug, Clone)]
pub struct GalleryImage {
    pub ratio_w: u32,
    pub ratio_h: u32,
    pub alt: &'static str,
    /// Hint for the real asset that should eventually replace the placeholder.
    pub keywords: &'static str,
}

impl GalleryImage {
    /// CSS aspect-ratio value, e.g. "3/2".
    pub fn css_ratio(&self) -> String {
        format!("{}/{}", self.ratio_w, self.ratio_h)
    }

    pub fn url(&self) -> String {
        placeholder_url(self.ratio_w, self.ratio_h)
    }
}

pub fn gallery_images() -> Vec<GalleryImage> {
    vec![
        GalleryImage {
            ratio_w: 3,
            ratio_h: 2,
            alt: "Warm cafe interior with soft lighting",
            keywords: "warm cafe interior",
        },
        GalleryImage {
            ratio_w: 4,
            ratio_h: 3,
            alt: "Plated gourmet dish, Royal Beef Wellington",
            keywords: "plated gourmet dishes",
        },
        GalleryImage {
            ratio_w: 3,
            ratio_h: 4,
            alt: "Family dining moment, laughing children",
            keywords: "family dining moment",
        },
        GalleryImage {
            ratio_w: 16,
            ratio_h: 9,
            alt: "Barista preparing ROY_L blend coffee",
            keywords: "barista coffee station",
        },
        GalleryImage {
            ratio_w: 1,
            ratio_h: 1,
            alt: "Table setting with gold cutlery and linen",
            keywords: "luxury table setting",
        },
        GalleryImage {
            ratio_w: 5,
            ratio_h: 4,
            alt: "Exterior view of ROY_L restaurant at sunset",
            keywords: "elegant restaurant facade",
        },
    ]
}

/// Placeholder-image URL for a given aspect ratio, in the brand colors.
/// Stands in for a real asset pipeline.
pub fn placeholder_url(ratio_w: u32, ratio_h: u32) -> String {
    let width = PLACEHOLDER_WIDTH;
    let height = ((width as f64) * (ratio_h as f64) / (ratio_w as f64)).round() as u32;
    format!("https://placehold.co/{width}x{height}/{BG_DARK}/{GOLD}?text={BRAND_NAME}+({ratio_w}x{ratio_h})")
}

#[derive(Debug, Clone)]
pub struct HoursEntry {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone)]
pub struct ContactInfo {
    pub address: &'static str,
    pub phone_display: &'static str,
    pub phone_href: &'static str,
    pub email: &'static str,
    pub events_email: &'static str,
    pub hours: Vec<HoursEntry>,
}

pub fn contact_info() -> ContactInfo {
    ContactInfo {
        address: "123 Royal Avenue, Luxury District, New City, 90210",
        phone_display: "(123) 456-7890",
        phone_href: "tel:+1234567890",
        email: "info@roylcafe.com",
        events_email: "events@roylcafe.com",
        hours: vec![
            HoursEntry { label: "Mon - Fri", value: "11:00 AM - 10:00 PM" },
            HoursEntry { label: "Sat - Sun", value: "9:00 AM - 11:00 PM (Brunch served 9am - 2pm)" },
        ],
    }
}

#[derive(Debug, Clone)]
pub struct FooterLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub fn footer_links() -> Vec<FooterLink> {
    vec![
        FooterLink { label: "Privacy Policy", href: "#" },
        FooterLink { label: "Terms of Service", href: "#" },
        FooterLink { label: "Careers", href: "#" },
    ]
}

pub fn social_links() -> Vec<FooterLink> {
    vec![
        FooterLink { label: "Instagram", href: "#" },
        FooterLink { label: "Facebook", href: "#" },
        FooterLink { label: "Twitter/X", href: "#" },
    ]
}
