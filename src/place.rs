use crate::image::normalize_image_path;
use crate::resolver::{resolve_text, Record};
use serde_json::Value;

/// Ordered candidate keys for each place attribute.
///
/// The endpoint has served the same concept under several names over time,
/// and the list and detail pages never agreed on which ones to look at.
pub struct PlaceSchema {
    pub id: &'static [&'static str],
    pub name: &'static [&'static str],
    pub description: &'static [&'static str],
    pub image: &'static [&'static str],
    pub country: &'static [&'static str],
    pub date: &'static [&'static str],
    pub attractions: &'static [&'static str],
}

pub const SUMMARY_SCHEMA: PlaceSchema = PlaceSchema {
    id: &["id", "ID"],
    name: &["nome", "titulo", "name"],
    description: &["descricao", "descricao_curta", "description"],
    image: &["imagem_principal", "imagem", "image", "imagem_path"],
    country: &[],
    date: &[],
    attractions: &[],
};

pub const DETAIL_SCHEMA: PlaceSchema = PlaceSchema {
    id: &["id", "ID"],
    name: &["nome", "titulo", "name"],
    description: &["conteudo", "content", "description", "descricao"],
    image: &["imagem_principal", "imagem", "image"],
    country: &["pais", "country"],
    date: &["data", "date"],
    attractions: &["atracoes", "attractions", "photos"],
};

pub struct AttractionSchema {
    pub name: &'static [&'static str],
    pub description: &'static [&'static str],
    pub image: &'static [&'static str],
}

pub const ATTRACTION_SCHEMA: AttractionSchema = AttractionSchema {
    name: &["nome", "title", "name"],
    description: &["descricao", "description"],
    image: &["imagem", "image"],
};

#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Already normalized, see [`normalize_image_path`].
    pub image: String,
    pub country: Option<String>,
    pub date: Option<String>,
    pub attractions: Vec<Attraction>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Attraction {
    pub name: String,
    pub description: String,
    pub image: String,
}

impl Place {
    pub fn from_record(record: &Record, schema: &PlaceSchema) -> Self {
        Self {
            id: resolve_text(record, schema.id),
            name: resolve_text(record, schema.name),
            description: resolve_text(record, schema.description),
            image: normalize_image_path(&resolve_text(record, schema.image)),
            country: non_empty(resolve_text(record, schema.country)),
            date: non_empty(resolve_text(record, schema.date)),
            attractions: attraction_records(record, schema.attractions)
                .map(|items| {
                    items
                        .iter()
                        .map(|item| match item.as_object() {
                            Some(item) => Attraction::from_record(item, &ATTRACTION_SCHEMA),
                            None => Attraction::from_record(&Record::new(), &ATTRACTION_SCHEMA),
                        })
                        .collect()
                })
                .unwrap_or_default(),
        }
    }
}

impl Attraction {
    pub fn from_record(record: &Record, schema: &AttractionSchema) -> Self {
        Self {
            name: resolve_text(record, schema.name),
            description: resolve_text(record, schema.description),
            image: normalize_image_path(&resolve_text(record, schema.image)),
        }
    }
}

/// First candidate holding a non-empty array.
fn attraction_records<'a>(record: &'a Record, keys: &[&str]) -> Option<&'a Vec<Value>> {
    keys.iter()
        .filter_map(|key| record.get(*key))
        .filter_map(Value::as_array)
        .find(|items| !items.is_empty())
}

fn non_empty(text: String) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}
