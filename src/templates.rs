use axum::http::StatusCode;
use maud::{DOCTYPE, Markup, html};

use crate::{
    entities::movie,
    forms::{AddForm, EditForm, FormErrors},
    models::resolve_image_url,
};

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

const INPUT_CLASS: &str = "mt-2 w-full rounded-md border border-gray-300 px-3 py-2 focus:border-blue-500 focus:outline-none focus:ring-1 focus:ring-blue-500";
const INPUT_ERROR_CLASS: &str = "mt-2 w-full rounded-md border border-red-500 px-3 py-2 focus:border-red-500 focus:outline-none focus:ring-1 focus:ring-red-500";

pub fn index_page(movies: &[movie::Model]) -> String {
    page(
        "My Top Movies",
        html! {
            div class="min-h-screen bg-gray-50" {
                div class="max-w-4xl mx-auto px-6 py-12" {
                    div class="flex items-start justify-between gap-6" {
                        div {
                            h1 class="text-3xl font-bold text-gray-900" { "My Top Movies" }
                            p class="mt-2 text-gray-600" { "These are my all-time favourite movies." }
                        }
                        a class="rounded-md bg-blue-600 px-4 py-2 font-semibold text-white hover:bg-blue-700" href="/add" { "Add Movie" }
                    }

                    @if movies.is_empty() {
                        div class="mt-10 bg-white shadow rounded-lg p-8" {
                            p class="text-gray-600" { "No movies yet." }
                        }
                    } @else {
                        div class="mt-10 space-y-4" {
                            @for movie in movies {
                                (movie_card(movie))
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn add_page(form: &AddForm, errors: &FormErrors) -> String {
    page(
        "Add Movie",
        form_shell(
            "Add a Movie",
            html! {
                form class="mt-8 space-y-6" method="post" action="/add" {
                    (text_input("title", "Movie Title", &form.title, 250, errors))
                    (number_input("year", "Release Year", &form.year, errors))
                    (text_area("description", "Description", &form.description, 500, errors))
                    (number_input("rating", "Rating", &form.rating, errors))
                    (number_input("ranking", "Ranking", &form.ranking, errors))
                    (text_area("review", "Review", form.review.as_deref().unwrap_or_default(), 250, errors))
                    (text_input("img_url", "Poster URL", &form.img_url, 250, errors))
                    p class="text-xs text-gray-500" { "Use a full http(s) link or the name of a file in static/images." }
                    (submit_button("Add Movie"))
                }
            },
        ),
    )
}

pub fn edit_page(movie: &movie::Model, form: &EditForm, errors: &FormErrors) -> String {
    page(
        "Edit Movie",
        form_shell(
            &movie.title,
            html! {
                p class="mt-2 text-gray-600" { "Edit Movie Rating" }
                form class="mt-8 space-y-6" method="post" action=(format!("/edit/{}", movie.id)) {
                    (number_input("rating", "Your Rating Out of 10 e.g. 7.5", &form.rating, errors))
                    (text_area("review", "Your Review", &form.review, 250, errors))
                    (submit_button("Update Movie"))
                }
            },
        ),
    )
}

pub fn error_page(status: StatusCode, message: &str) -> String {
    let heading = status.canonical_reason().unwrap_or("Error");
    page(
        heading,
        html! {
            div class="min-h-screen bg-gray-50 flex items-center justify-center" {
                div class="max-w-xl w-full px-6" {
                    div class="bg-white shadow rounded-lg p-8" {
                        h1 class="text-2xl font-bold text-gray-900" { (status.as_u16()) " " (heading) }
                        p class="mt-4 text-gray-700" { (message) }
                        a class="mt-6 inline-block text-blue-600 hover:text-blue-800" href="/" { "Back" }
                    }
                }
            }
        },
    )
}

fn page(title: &str, body: Markup) -> String {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                script src=(TAILWIND_CDN) {}
            }
            body { (body) }
        }
    }
    .into_string()
}

fn form_shell(heading: &str, inner: Markup) -> Markup {
    html! {
        div class="min-h-screen bg-gray-50" {
            div class="max-w-2xl mx-auto px-6 py-12" {
                div class="bg-white shadow rounded-lg p-8" {
                    h1 class="text-3xl font-bold text-gray-900" { (heading) }
                    (inner)
                }
                a class="mt-6 inline-block text-blue-600 hover:text-blue-800" href="/" { "Back to list" }
            }
        }
    }
}

fn movie_card(movie: &movie::Model) -> Markup {
    html! {
        div class="bg-white shadow rounded-lg p-6 flex gap-6" {
            img class="w-32 h-48 rounded object-cover bg-gray-200" src=(resolve_image_url(&movie.img_url)) alt=(movie.title);
            div class="flex-1" {
                div class="flex items-start justify-between gap-4" {
                    h2 class="text-xl font-semibold text-gray-900" {
                        @if let Some(ranking) = movie.ranking {
                            span class="mr-2 text-gray-400" { "#" (ranking) }
                        }
                        (movie.title)
                        span class="ml-2 font-normal text-gray-500" { "(" (movie.year) ")" }
                    }
                    @if let Some(rating) = movie.rating {
                        span class="text-lg font-bold text-amber-600" { (format!("{rating:.1}")) }
                    }
                }
                p class="mt-3 text-sm text-gray-700" { (movie.description) }
                @if let Some(review) = &movie.review {
                    p class="mt-3 text-sm italic text-gray-500" { "\u{201c}" (review) "\u{201d}" }
                }
                div class="mt-4 flex gap-4 text-sm" {
                    a class="text-blue-600 hover:text-blue-800" href=(format!("/edit/{}", movie.id)) { "Update" }
                    a class="text-red-600 hover:text-red-800" href=(format!("/delete/{}", movie.id)) { "Delete" }
                }
            }
        }
    }
}

fn field_errors(name: &str, errors: &FormErrors) -> Markup {
    html! {
        @for message in errors.for_field(name) {
            p class="mt-1 text-sm text-red-600" { (message) }
        }
    }
}

fn input_class(name: &str, errors: &FormErrors) -> &'static str {
    if errors.has(name) { INPUT_ERROR_CLASS } else { INPUT_CLASS }
}

fn text_input(name: &str, label: &str, value: &str, max_len: usize, errors: &FormErrors) -> Markup {
    html! {
        div {
            label class="block text-sm font-medium text-gray-700" for=(name) { (label) }
            input class=(input_class(name, errors)) type="text" name=(name) id=(name) value=(value) maxlength=(max_len);
            (field_errors(name, errors))
        }
    }
}

fn number_input(name: &str, label: &str, value: &str, errors: &FormErrors) -> Markup {
    html! {
        div {
            label class="block text-sm font-medium text-gray-700" for=(name) { (label) }
            input class=(input_class(name, errors)) type="text" inputmode="decimal" name=(name) id=(name) value=(value);
            (field_errors(name, errors))
        }
    }
}

fn text_area(name: &str, label: &str, value: &str, max_len: usize, errors: &FormErrors) -> Markup {
    html! {
        div {
            label class="block text-sm font-medium text-gray-700" for=(name) { (label) }
            textarea class=(input_class(name, errors)) name=(name) id=(name) rows="3" maxlength=(max_len) { (value) }
            (field_errors(name, errors))
        }
    }
}

fn submit_button(label: &str) -> Markup {
    html! {
        button class="w-full rounded-md bg-blue-600 px-4 py-2 font-semibold text-white hover:bg-blue-700" type="submit" { (label) }
    }
}
