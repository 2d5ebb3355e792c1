use std::sync::Arc;

use axum::{
    extract::{Form, Path, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use tracing::{info, warn};

use crate::{
    AppState,
    error::{AppError, AppResult},
    forms::{AddForm, DUPLICATE_TITLE, EditForm, FormErrors},
    models::resolve_image_url,
    templates,
};

/// Path ids match only plain digits that fit an `i32`; anything else is a missing movie.
fn parse_id(raw: &str) -> AppResult<i32> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::NotFound(raw.to_string()));
    }
    raw.parse().map_err(|_| AppError::NotFound(raw.to_string()))
}

fn redirect_home() -> Response {
    (StatusCode::FOUND, [(header::LOCATION, "/")]).into_response()
}

pub async fn index(State(state): State<Arc<AppState>>) -> AppResult<Html<String>> {
    let movies = state.store.list_ranked().await?;
    Ok(Html(templates::index_page(&movies)))
}

pub async fn add_form() -> Html<String> {
    Html(templates::add_page(&AddForm::default(), &FormErrors::default()))
}

pub async fn add(
    State(state): State<Arc<AppState>>,
    Form(form): Form<AddForm>,
) -> AppResult<Response> {
    let new_movie = match form.validate() {
        Ok(movie) => movie,
        Err(errors) => {
            warn!(errors = errors.len(), "rejected add submission");
            return Ok(Html(templates::add_page(&form, &errors)).into_response());
        },
    };

    match state.store.insert(new_movie).await {
        Ok(movie) => {
            info!(id = movie.id, title = %movie.title, "movie added");
            Ok(redirect_home())
        },
        Err(AppError::DuplicateTitle(title)) => {
            warn!(%title, "duplicate title");
            let mut errors = FormErrors::default();
            errors.push("title", DUPLICATE_TITLE);
            Ok((StatusCode::CONFLICT, Html(templates::add_page(&form, &errors))).into_response())
        },
        Err(err) => Err(err),
    }
}

pub async fn edit_form(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> AppResult<Html<String>> {
    let movie = state.store.get(parse_id(&id)?).await?;
    let form = EditForm::from_movie(&movie);
    Ok(Html(templates::edit_page(&movie, &form, &FormErrors::default())))
}

pub async fn edit(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Form(form): Form<EditForm>,
) -> AppResult<Response> {
    let movie = state.store.get(parse_id(&id)?).await?;

    let update = match form.validate() {
        Ok(update) => update,
        Err(errors) => {
            warn!(id = movie.id, errors = errors.len(), "rejected edit submission");
            return Ok(Html(templates::edit_page(&movie, &form, &errors)).into_response());
        },
    };

    let movie = state.store.update_review(movie, update).await?;
    info!(id = movie.id, rating = ?movie.rating, "movie updated");
    Ok(redirect_home())
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let id = parse_id(&id)?;
    state.store.delete(id).await?;
    info!(id, "movie deleted");
    Ok(redirect_home())
}

/// Plain-text view of the static images directory and every poster URL.
pub async fn debug(State(state): State<Arc<AppState>>) -> AppResult<Response> {
    let images_dir = state.config.images_dir();
    let exists = tokio::fs::try_exists(&images_dir).await.unwrap_or(false);

    let mut lines = vec![
        format!("Static images path: {}", images_dir.display()),
        format!("Static images path exists: {exists}"),
    ];

    if exists {
        let mut files = Vec::new();
        let mut entries = tokio::fs::read_dir(&images_dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            files.push(entry.file_name().to_string_lossy().into_owned());
        }
        files.sort();
        lines.push(format!("Files in static/images: {}", files.join(", ")));
    }

    for movie in state.store.list_ranked().await? {
        lines.push(format!(
            "Movie: {}, img_url: {}, resolved_url: {}",
            movie.title,
            movie.img_url,
            resolve_image_url(&movie.img_url)
        ));
    }

    Ok(([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], lines.join("\n")).into_response())
}
