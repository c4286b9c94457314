//! Site footer component

use maud::{Markup, html};

/// Renders the site footer
pub fn footer() -> Markup {
    html! {
        footer.site-footer {
            p { "The Philosopher's Window" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footer_names_site() {
        // Act
        let html = footer().into_string();

        // Assert
        assert!(html.contains("class=\"site-footer\""));
        assert!(html.contains("Philosopher"), "Footer should name the site");
    }
}
