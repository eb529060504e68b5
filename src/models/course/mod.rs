mod types;

pub use types::{Course, CourseList};

/// Title-case a category id the way the viewer subtitle falls back to it.
/// `springboot` becomes `Springboot`, `web-perf` becomes `Web-perf`.
pub fn title_case(id: &str) -> String {
    id.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_case_capitalizes_each_word() {
        assert_eq!(title_case("springboot"), "Springboot");
        assert_eq!(title_case("web accessibility"), "Web Accessibility");
        assert_eq!(title_case("JAVA"), "Java");
        assert_eq!(title_case(""), "");
    }
}
