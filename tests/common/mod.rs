//! Shared test infrastructure: a small in-memory catalog.
//!
//! - `alpha`: 3 slides, slide 2 carries a Rust code sample
//! - `beta`: 5 slides, narrative only
//! - `gamma`: listed as a course, no deck

#![allow(dead_code)]

use training_deck::catalog::Catalog;
use training_deck::config::AppConfig;
use training_deck::models::course::Course;
use training_deck::models::slide::{CourseSlides, Slide};

pub const APP_NAME: &str = "Test Training";

pub fn slide(id: i64, topic: &str) -> Slide {
    Slide {
        id,
        topic: topic.to_string(),
        description: format!("About {topic}"),
        content: Some(vec![format!("# {topic}\n\n* first point\n* second point")]),
        code: None,
        language: "text".to_string(),
    }
}

pub fn deck(category: &str, n: i64) -> CourseSlides {
    CourseSlides {
        category: category.to_string(),
        slides: (1..=n).map(|id| slide(id, &format!("{category} topic {id}"))).collect(),
    }
}

fn course(id: &str, name: &str) -> Course {
    Course {
        id: id.to_string(),
        name: name.to_string(),
        icon: "code".to_string(),
        description: format!("Learn {name}"),
    }
}

pub fn fake_catalog() -> Catalog {
    let mut alpha = deck("alpha", 3);
    alpha.slides[1].code = Some("fn main() {\n    if 1 < 2 { println!(\"ok\"); }\n}".to_string());
    alpha.slides[1].language = "rust".to_string();
    alpha.slides[2].content = None;

    Catalog::from_parts(
        vec![
            course("alpha", "Alpha Course"),
            course("beta", "Beta Course"),
            course("gamma", "Gamma Course"),
        ],
        vec![alpha, deck("beta", 5)],
    )
    .expect("fake catalog is valid")
}

pub fn test_config() -> AppConfig {
    AppConfig {
        app_name: APP_NAME.to_string(),
        ..AppConfig::default()
    }
}
