//! Cookie Persistence
//!
//! Stores each section order in its own cookie. Values are the JSON id
//! array, percent-encoded so commas and brackets survive the cookie jar.

use percent_encoding::{percent_decode_str, utf8_percent_encode, NON_ALPHANUMERIC};
use wasm_bindgen::JsCast;

use list_order::{decode_order, encode_order, ItemId, OrderPersistence, PersistError};

const SECONDS_PER_DAY: u32 = 24 * 60 * 60;

/// Cookie-backed order storage for the current document
#[derive(Clone, Copy, Debug)]
pub struct CookiePersistence {
    max_age_days: u32,
}

impl CookiePersistence {
    pub fn new(max_age_days: u32) -> Self {
        Self { max_age_days }
    }

    fn document() -> Result<web_sys::HtmlDocument, PersistError> {
        web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| doc.dyn_into::<web_sys::HtmlDocument>().ok())
            .ok_or_else(|| PersistError::Unavailable("no html document".to_string()))
    }
}

/// Find the raw (still encoded) value of `name` in a `document.cookie` string
pub fn find_cookie<'a>(cookies: &'a str, name: &str) -> Option<&'a str> {
    cookies.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then_some(value)
    })
}

/// `name=value; ...` assignment for `document.cookie`
pub fn cookie_assignment(name: &str, ids: &[ItemId], max_age_days: u32) -> String {
    let value = utf8_percent_encode(&encode_order(ids), NON_ALPHANUMERIC).to_string();
    format!(
        "{}={}; path=/; max-age={}; SameSite=Lax",
        name,
        value,
        max_age_days.saturating_mul(SECONDS_PER_DAY)
    )
}

impl OrderPersistence for CookiePersistence {
    fn load(&self, key: &str) -> Result<Option<Vec<ItemId>>, PersistError> {
        let cookies = Self::document()?
            .cookie()
            .map_err(|e| PersistError::Unavailable(format!("{:?}", e)))?;
        match find_cookie(&cookies, key) {
            Some(raw) => {
                let decoded = percent_decode_str(raw).decode_utf8_lossy();
                decode_order(key, &decoded).map(Some)
            }
            None => Ok(None),
        }
    }

    fn save(&self, key: &str, ids: &[ItemId]) -> Result<(), PersistError> {
        Self::document()?
            .set_cookie(&cookie_assignment(key, ids, self.max_age_days))
            .map_err(|e| PersistError::Unavailable(format!("{:?}", e)))
    }
}
