use askama::Template;

use super::PageContext;
use crate::catalog::Catalog;

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub ctx: PageContext,
    pub courses: Vec<CourseCard>,
}

pub struct CourseCard {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub description: String,
    pub slide_count: usize,
}

impl CourseCard {
    pub fn all(catalog: &Catalog) -> Vec<Self> {
        catalog
            .courses()
            .iter()
            .map(|c| CourseCard {
                id: c.id.clone(),
                name: c.name.clone(),
                icon: c.icon.clone(),
                description: c.description.clone(),
                slide_count: catalog.resolve(&c.id).len(),
            })
            .collect()
    }
}
