use std::str::FromStr;

use serde::Deserialize;

use crate::{
    entities::movie,
    models::{NewMovie, ReviewUpdate},
};

pub const REQUIRED: &str = "This field is required.";
pub const NOT_AN_INTEGER: &str = "Not a valid integer value.";
pub const NOT_A_FLOAT: &str = "Not a valid float value.";
pub const DUPLICATE_TITLE: &str = "A movie with this title already exists.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormErrors(Vec<FieldError>);

impl FormErrors {
    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push(FieldError { field, message: message.into() });
    }

    pub fn for_field(&self, field: &str) -> impl Iterator<Item = &str> {
        self.0.iter().filter(move |e| e.field == field).map(|e| e.message.as_str())
    }

    pub fn has(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field == field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct AddForm {
    pub title: String,
    pub year: String,
    pub description: String,
    pub rating: String,
    pub ranking: String,
    /// `None` only when the field was not submitted at all.
    pub review: Option<String>,
    pub img_url: String,
}

impl AddForm {
    pub fn validate(&self) -> Result<NewMovie, FormErrors> {
        let mut errors = FormErrors::default();

        let title = required_text(&mut errors, "title", &self.title);
        let year = required_number::<i32>(&mut errors, "year", &self.year, NOT_AN_INTEGER);
        let description = required_text(&mut errors, "description", &self.description);
        let rating = optional_number::<f64>(&mut errors, "rating", &self.rating, NOT_A_FLOAT);
        let ranking = optional_number::<i32>(&mut errors, "ranking", &self.ranking, NOT_AN_INTEGER);
        let img_url = required_text(&mut errors, "img_url", &self.img_url);

        match (title, year, description, rating, ranking, img_url) {
            (Some(title), Some(year), Some(description), Some(rating), Some(ranking), Some(img_url)) => {
                Ok(NewMovie {
                    title,
                    year,
                    description,
                    rating,
                    ranking,
                    review: self.review.clone(),
                    img_url,
                })
            },
            _ => Err(errors),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct EditForm {
    pub rating: String,
    pub review: String,
}

impl EditForm {
    pub fn from_movie(movie: &movie::Model) -> Self {
        Self {
            rating: movie.rating.map(|r| r.to_string()).unwrap_or_default(),
            review: movie.review.clone().unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Result<ReviewUpdate, FormErrors> {
        let mut errors = FormErrors::default();

        let rating = required_number::<f64>(&mut errors, "rating", &self.rating, NOT_A_FLOAT);
        let review = required_text(&mut errors, "review", &self.review);

        match (rating, review) {
            (Some(rating), Some(review)) => Ok(ReviewUpdate { rating, review }),
            _ => Err(errors),
        }
    }
}

fn is_blank(raw: &str) -> bool {
    raw.trim().is_empty()
}

fn required_text(errors: &mut FormErrors, field: &'static str, raw: &str) -> Option<String> {
    if is_blank(raw) {
        errors.push(field, REQUIRED);
        return None;
    }
    Some(raw.to_string())
}

fn required_number<T: FromStr>(
    errors: &mut FormErrors,
    field: &'static str,
    raw: &str,
    invalid: &str,
) -> Option<T> {
    if is_blank(raw) {
        errors.push(field, REQUIRED);
        return None;
    }
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            errors.push(field, invalid);
            None
        },
    }
}

/// `Some(None)` for an empty field, `None` when the input did not parse.
fn optional_number<T: FromStr>(
    errors: &mut FormErrors,
    field: &'static str,
    raw: &str,
    invalid: &str,
) -> Option<Option<T>> {
    if is_blank(raw) {
        return Some(None);
    }
    match raw.trim().parse() {
        Ok(value) => Some(Some(value)),
        Err(_) => {
            errors.push(field, invalid);
            None
        },
    }
}
