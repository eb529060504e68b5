//! The course catalog: every deck plus the course cards shown on the home page.
//!
//! Built once at startup and shared read-only with every worker. Nothing
//! mutates it after construction.

use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::models::course::{self, Course, CourseList};
use crate::models::slide::{CourseSlides, Slide};

const COURSES_SEED: &str = include_str!("../data/courses.json");

const DECK_SEEDS: &[(&str, &str)] = &[
    ("springboot", include_str!("../data/slides/springboot.json")),
    ("react", include_str!("../data/slides/react.json")),
    ("typescript", include_str!("../data/slides/typescript.json")),
    ("java", include_str!("../data/slides/java.json")),
    ("nodejs", include_str!("../data/slides/nodejs.json")),
    ("accessibility", include_str!("../data/slides/accessibility.json")),
];

#[derive(Debug)]
pub enum CatalogError {
    Parse { source: String, error: serde_json::Error },
    EmptyDeck(String),
    DuplicateDeck(String),
    DuplicateSlideId { category: String, id: i64 },
    DuplicateCourse(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Parse { source, error } => write!(f, "Bad {source} seed JSON: {error}"),
            CatalogError::EmptyDeck(category) => write!(f, "Deck '{category}' has no slides"),
            CatalogError::DuplicateDeck(category) => write!(f, "Deck '{category}' is defined twice"),
            CatalogError::DuplicateSlideId { category, id } => {
                write!(f, "Deck '{category}' repeats slide id {id}")
            }
            CatalogError::DuplicateCourse(id) => write!(f, "Course '{id}' is listed twice"),
        }
    }
}

impl std::error::Error for CatalogError {}

impl From<CatalogError> for std::io::Error {
    fn from(e: CatalogError) -> Self {
        std::io::Error::other(e.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct Catalog {
    courses: Vec<Course>,
    decks: HashMap<String, CourseSlides>,
}

impl Catalog {
    /// Load the decks and course list compiled into the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        let courses: CourseList = parse(COURSES_SEED, "courses")?;
        let decks = DECK_SEEDS
            .iter()
            .map(|(label, json)| parse::<CourseSlides>(json, label))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_parts(courses.courses, decks)
    }

    /// Build a catalog from in-memory values, enforcing the deck invariants.
    pub fn from_parts(courses: Vec<Course>, decks: Vec<CourseSlides>) -> Result<Self, CatalogError> {
        let mut seen_courses = HashSet::new();
        for c in &courses {
            if !seen_courses.insert(c.id.as_str()) {
                return Err(CatalogError::DuplicateCourse(c.id.clone()));
            }
        }

        let mut by_category = HashMap::with_capacity(decks.len());
        for deck in decks {
            validate_deck(&deck)?;
            if by_category.contains_key(&deck.category) {
                return Err(CatalogError::DuplicateDeck(deck.category));
            }
            by_category.insert(deck.category.clone(), deck);
        }

        log::debug!(
            "Catalog built: {} courses, {} decks",
            courses.len(),
            by_category.len()
        );
        Ok(Self { courses, decks: by_category })
    }

    /// Slides for `category` in authored order. Unknown categories yield an empty deck.
    pub fn resolve(&self, category: &str) -> &[Slide] {
        match self.decks.get(category) {
            Some(deck) => &deck.slides,
            None => {
                log::debug!("No deck for category '{category}'");
                &[]
            }
        }
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn course(&self, id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }

    /// Display name for a category: the course card name, else the title-cased id.
    pub fn display_name(&self, category: &str) -> String {
        self.course(category)
            .map(|c| c.name.clone())
            .unwrap_or_else(|| course::title_case(category))
    }

    pub fn deck_count(&self) -> usize {
        self.decks.len()
    }

    pub fn slide_count(&self) -> usize {
        self.decks.values().map(|d| d.slides.len()).sum()
    }
}

fn parse<T: serde::de::DeserializeOwned>(json: &str, label: &str) -> Result<T, CatalogError> {
    serde_json::from_str(json).map_err(|error| CatalogError::Parse {
        source: label.to_string(),
        error,
    })
}

fn validate_deck(deck: &CourseSlides) -> Result<(), CatalogError> {
    if deck.slides.is_empty() {
        return Err(CatalogError::EmptyDeck(deck.category.clone()));
    }
    let mut ids = HashSet::with_capacity(deck.slides.len());
    for slide in &deck.slides {
        if !ids.insert(slide.id) {
            return Err(CatalogError::DuplicateSlideId {
                category: deck.category.clone(),
                id: slide.id,
            });
        }
    }
    Ok(())
}
