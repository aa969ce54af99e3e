use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::errors::{AppError, render};
use crate::handlers::take_flash;
use crate::reservations::ReservationForm;
use crate::templates_structs::IndexTemplate;
use crate::ui::{Document, MenuOverlay};

#[derive(Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub menu: Option<String>,
}

impl PageQuery {
    fn menu_open(&self) -> bool {
        self.menu.as_deref() == Some("open")
    }
}

/// The landing page. The mobile overlay's state machine is driven from the
/// query string and the template is rendered from it: `?menu=open` opens the
/// panel (which locks page scroll for as long as it is open), every close
/// action is a link back to a URL without the parameter.
pub async fn index(
    session: Session,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, AppError> {
    let document = Document::new();
    let mut menu = MenuOverlay::new(document.clone());
    if query.menu_open() {
        menu.open();
    }

    let flash = take_flash(&session);
    let tmpl = IndexTemplate::build(
        menu.is_open(),
        document.scroll_locked(),
        ReservationForm::default(),
        Vec::new(),
        None,
        flash,
    );
    render(tmpl)
}
