use askama::Template;
use chrono::{Datelike, Local};

use crate::content::{
    self, ContactInfo, FooterLink, GalleryImage, MenuHighlight, NavLink, Testimonial,
};
use crate::reservations::ReservationForm;

/// The whole landing page. A pure function of the interactive state (menu
/// open/closed, form record, notices); everything else is brand content.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub brand: &'static str,
    pub tagline: &'static str,
    pub menu_open: bool,
    pub scroll_locked: bool,
    pub nav_links: Vec<NavLink>,
    pub highlights: Vec<MenuHighlight>,
    pub testimonials: Vec<Testimonial>,
    pub gallery: Vec<GalleryImage>,
    pub contact: ContactInfo,
    pub footer_links: Vec<FooterLink>,
    pub social_links: Vec<FooterLink>,
    pub form: ReservationForm,
    pub form_errors: Vec<String>,
    /// Blocking notice above the form: validation summary or backend failure.
    pub notice: Option<String>,
    /// One-shot confirmation carried across the post-submit redirect.
    pub flash: Option<String>,
    /// Today, as the date input's `min` hint. Not enforced server-side.
    pub min_date: String,
    pub year: i32,
}

impl IndexTemplate {
    pub fn build(
        menu_open: bool,
        scroll_locked: bool,
        form: ReservationForm,
        form_errors: Vec<String>,
        notice: Option<String>,
        flash: Option<String>,
    ) -> Self {
        let today = Local::now().date_naive();
        Self {
            brand: content::BRAND_NAME,
            tagline: content::TAGLINE,
            menu_open,
            scroll_locked,
            nav_links: content::nav_links(),
            highlights: content::menu_highlights(),
            testimonials: content::testimonials(),
            gallery: content::gallery_images(),
            contact: content::contact_info(),
            footer_links: content::footer_links(),
            social_links: content::social_links(),
            form,
            form_errors,
            notice,
            flash,
            min_date: today.format("%Y-%m-%d").to_string(),
            year: today.year(),
        }
    }
}
