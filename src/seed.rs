use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait, Set, TransactionTrait};
use tracing::info;

use crate::{entities::movie, error::AppResult, models::NewMovie};

struct SeedMovie {
    title: &'static str,
    year: i32,
    description: &'static str,
    rating: f64,
    ranking: i32,
    review: &'static str,
    img_url: &'static str,
}

const SEED_MOVIES: [SeedMovie; 10] = [
    SeedMovie {
        title: "Phone Booth",
        year: 2002,
        description: "Publicist Stuart Shepard finds himself trapped in a phone booth, pinned down by an extortionist's sniper rifle. Unable to leave or receive outside help, Stuart's negotiation with the caller leads to a jaw-dropping climax.",
        rating: 7.3,
        ranking: 10,
        review: "My favourite character was the caller.",
        img_url: "https://www.themoviedb.org/t/p/w500/tjrX2oWRCM3Tvarz38zlZM7Uc10.jpg",
    },
    SeedMovie {
        title: "Puss in Boots: The Last Wish",
        year: 2022,
        description: "Puss in Boots discovers that his passion for adventure has taken its toll: he has burned through eight of his nine lives. Puss sets out on an epic journey to find the mythical Last Wish and restore his nine lives.",
        rating: 8.3,
        ranking: 9,
        review: "A surprisingly deep and visually stunning animation that appeals to all ages.",
        img_url: "https://www.themoviedb.org/t/p/w500/kuf6dutpsT0vSVehic3EZIqkOBt.jpg",
    },
    SeedMovie {
        title: "Spirited Away",
        year: 2001,
        description: "During her family's move to the suburbs, a sullen 10-year-old girl wanders into a world ruled by gods, witches, and spirits, and where humans are changed into beasts.",
        rating: 8.4,
        ranking: 8,
        review: "Hayao Miyazaki's masterpiece of animation and storytelling.",
        img_url: "https://www.themoviedb.org/t/p/w500/39wmItIWsg5sZMyRUHLkWBcuVCM.jpg",
    },
    SeedMovie {
        title: "End of Watch",
        year: 2012,
        description: "Shot documentary-style, this film follows the daily lives of two young police officers in LA who are partners and friends, and what happens when they meet criminal forces greater than themselves.",
        rating: 8.5,
        ranking: 7,
        review: "Gritty, authentic portrayal of police work with incredible chemistry between the leads.",
        img_url: "endofwatch.jpg",
    },
    SeedMovie {
        title: "Drive",
        year: 2011,
        description: "A mysterious Hollywood stuntman and mechanic moonlights as a getaway driver and finds himself in trouble when he helps out his neighbor in this action drama.",
        rating: 8.6,
        ranking: 6,
        review: "Style and substance perfectly blended with an incredible soundtrack.",
        img_url: "https://www.themoviedb.org/t/p/w500/602vevIURmpDfzbnv5Ubi6wIkQm.jpg",
    },
    SeedMovie {
        title: "Harry Potter and the Deathly Hallows: Part 2",
        year: 2011,
        description: "Harry, Ron, and Hermione continue their quest to vanquish the evil Voldemort once and for all. Just as things begin to look hopeless, Harry discovers a trio of magical objects that endow him with powers to rival Voldemort's.",
        rating: 8.7,
        ranking: 5,
        review: "A satisfying conclusion to an epic series that stayed true to the spirit of the books.",
        img_url: "harrypotter.jpg",
    },
    SeedMovie {
        title: "Princess Mononoke",
        year: 1997,
        description: "On a journey to find the cure for a Tatarigami's cruise, Ashitaka finds himself in the middle of a war between the forest gods and Tatara, a mining colony. In this quest he also meets San, the Mononoke Hime.",
        rating: 8.8,
        ranking: 4,
        review: "A beautiful ecological fable with complex characters and stunning animation.",
        img_url: "mononoke.jpg",
    },
    SeedMovie {
        title: "Prisoners",
        year: 2013,
        description: "When Keller Dover's daughter and her friend go missing, he takes matters into his own hands as the police pursue multiple leads and the pressure mounts.",
        rating: 9.0,
        ranking: 3,
        review: "A tense, morally complex thriller with powerhouse performances.",
        img_url: "prisoners.jpg",
    },
    SeedMovie {
        title: "Blade Runner 2049",
        year: 2017,
        description: "Young Blade Runner K's discovery of a long-buried secret leads him to track down former Blade Runner Rick Deckard, who's been missing for thirty years.",
        rating: 9.1,
        ranking: 2,
        review: "A visually stunning and philosophically rich sequel that honors the original.",
        img_url: "https://www.themoviedb.org/t/p/w500/gajva2L0rPYkEWjzgFlBXCAVBE5.jpg",
    },
    SeedMovie {
        title: "Brothers",
        year: 2009,
        description: "A young man comforts his older brother's wife and children after he goes missing in Afghanistan.",
        rating: 9.2,
        ranking: 1,
        review: "A powerful examination of PTSD and family dynamics with incredible performances.",
        img_url: "brothers.jpg",
    },
];

/// The sample movies in insertion order.
pub fn seed_movies() -> Vec<NewMovie> {
    SEED_MOVIES
        .iter()
        .map(|m| NewMovie {
            title: m.title.to_string(),
            year: m.year,
            description: m.description.to_string(),
            rating: Some(m.rating),
            ranking: Some(m.ranking),
            review: Some(m.review.to_string()),
            img_url: m.img_url.to_string(),
        })
        .collect()
}

/// Seeds the movie table once at startup and returns how many rows were inserted.
///
/// With `reset` every existing row is deleted first and the samples are always
/// reinserted. Without it the samples only go into an empty table, so repeated
/// calls leave user data alone.
pub async fn bootstrap(db: &DatabaseConnection, reset: bool) -> AppResult<usize> {
    let txn = db.begin().await?;

    if reset {
        let deleted = movie::Entity::delete_many().exec(&txn).await?;
        info!(deleted = deleted.rows_affected, "cleared movie table");
    } else {
        let existing = movie::Entity::find().count(&txn).await?;
        if existing > 0 {
            info!(existing, "movie table already populated, skipping seed");
            txn.commit().await?;
            return Ok(0);
        }
    }

    let movies = seed_movies();
    let inserted = movies.len();
    let models = movies.into_iter().map(|m| movie::ActiveModel {
        id: Default::default(),
        title: Set(m.title),
        year: Set(m.year),
        description: Set(m.description),
        rating: Set(m.rating),
        ranking: Set(m.ranking),
        review: Set(m.review),
        img_url: Set(m.img_url),
    });
    movie::Entity::insert_many(models).exec(&txn).await?;

    txn.commit().await?;
    info!(inserted, reset, "seeded movie table");
    Ok(inserted)
}
