//! System font lookup for raster glyph drawing.
//!
//! Faces are resolved through fontdb and parsed with rusttype. Parsed faces are
//! cached for the life of the process; a family that cannot be found falls
//! back to the generic serif and sans-serif families, then to any installed
//! face.

use fontdb::{Database, Family, Query, Stretch, Style, Weight};
use rusttype::Font;
use sealkit_core::FontFamily;
use std::{
    collections::{HashMap, HashSet},
    fs,
    sync::{Mutex, OnceLock},
};
use tracing::{debug, warn};

#[derive(Clone, Eq, PartialEq, Hash)]
struct FontKey {
    family: FontFamily,
    bold: bool,
}

fn db() -> &'static Database {
    static DB: OnceLock<Database> = OnceLock::new();
    DB.get_or_init(|| {
        let mut db = Database::new();
        db.load_system_fonts();
        debug!("Loaded {} system font faces", db.len());
        db
    })
}

/// Family names of every installed face, sorted
pub fn list_font_families() -> Vec<String> {
    let mut set = HashSet::new();
    for face in db().faces() {
        for (name, _) in &face.families {
            set.insert(name.clone());
        }
    }
    let mut out: Vec<_> = set.into_iter().collect();
    out.sort();
    out
}

/// Resolve a face for `family`, or `None` when no usable face is installed.
pub fn get_font_for(family: FontFamily, bold: bool) -> Option<&'static Font<'static>> {
    static CACHE: OnceLock<Mutex<HashMap<FontKey, &'static Font<'static>>>> = OnceLock::new();
    let cache = CACHE.get_or_init(|| Mutex::new(HashMap::new()));

    let key = FontKey { family, bold };

    if let Some(font) = cache.lock().unwrap_or_else(|p| p.into_inner()).get(&key) {
        return Some(*font);
    }

    let loaded = load_font_from_system(family.family_name(), bold)?;
    let font_ref: &'static Font<'static> = Box::leak(Box::new(loaded));

    cache
        .lock()
        .unwrap_or_else(|p| p.into_inner())
        .insert(key, font_ref);
    Some(font_ref)
}

fn query<'a>(families: &'a [Family<'a>], weight: Weight) -> Query<'a> {
    Query {
        families,
        weight,
        stretch: Stretch::Normal,
        style: Style::Normal,
    }
}

fn load_font_from_system(family: &str, bold: bool) -> Option<Font<'static>> {
    let weight = if bold { Weight::BOLD } else { Weight::NORMAL };

    let id = match db().query(&query(&[Family::Name(family)], weight)) {
        Some(id) => id,
        None => {
            let fallback = db()
                .query(&query(&[Family::Serif, Family::SansSerif], weight))
                .or_else(|| db().faces().next().map(|face| face.id))?;
            warn!("Font family '{}' not installed, using fallback face", family);
            fallback
        }
    };
    let face = db().face(id)?;
    let index = face.index;

    match &face.source {
        fontdb::Source::File(path) => {
            let bytes = fs::read(path).ok()?;
            Font::try_from_vec_and_index(bytes, index)
        }
        fontdb::Source::SharedFile(path, _) => {
            let bytes = fs::read(path).ok()?;
            Font::try_from_vec_and_index(bytes, index)
        }
        fontdb::Source::Binary(bytes) => {
            Font::try_from_vec_and_index(bytes.as_ref().as_ref().to_vec(), index)
        }
    }
}
