// src/display.rs

//! Plain-text rendering of result cards and status lines.

use unicode_segmentation::UnicodeSegmentation;

use crate::models::BookSummary;

/// Longest description shown on a card, in graphemes.
const DESCRIPTION_LIMIT: usize = 160;

/// `"book"` or `"books"` depending on `count`.
fn books_word(count: usize) -> &'static str {
    if count == 1 { "book" } else { "books" }
}

/// Heading printed above a result list.
pub fn results_heading(count: usize, query: &str) -> String {
    format!("Found {count} {} for \"{query}\"", books_word(count))
}

/// Reading list summary line.
pub fn favorites_summary(count: usize) -> String {
    format!("{count} {} in your reading list", books_word(count))
}

/// Title and description of the notice shown after a toggle.
pub fn toggle_notice(added: bool) -> (&'static str, &'static str) {
    if added {
        ("Added to favorites", "Book added to your reading list")
    } else {
        ("Removed from favorites", "Book removed from your reading list")
    }
}

/// Cut `text` to at most `limit` graphemes, marking the cut with an ellipsis.
pub fn clamp(text: &str, limit: usize) -> String {
    let mut graphemes = text.graphemes(true);
    let head: String = graphemes.by_ref().take(limit).collect();
    if graphemes.next().is_some() {
        format!("{}…", head.trim_end())
    } else {
        head
    }
}

/// Render one result card as indented lines.
pub fn render_card(book: &BookSummary, is_favorite: bool) -> String {
    let marker = if is_favorite { "♥" } else { " " };
    let mut lines = vec![
        format!("{marker} {}", book.display_title()),
        format!("    by {}", book.authors_line()),
    ];

    let mut facts = Vec::new();
    if let Some(rating) = book.rating_label() {
        facts.push(format!("★ {rating}"));
    }
    if let Some(year) = book.published_year() {
        facts.push(year.to_string());
    }
    if let Some(category) = book.primary_category() {
        facts.push(category.to_string());
    }
    if let Some(pages) = book.page_count {
        facts.push(format!("{pages} pages"));
    }
    if !facts.is_empty() {
        lines.push(format!("    {}", facts.join(" • ")));
    }

    match book.cover_url() {
        Some(url) => lines.push(format!("    cover: {url}")),
        None => lines.push(format!("    cover: [{}]", book.cover_placeholder())),
    }
    if let Some(description) = book.plain_description() {
        lines.push(format!("    {}", clamp(&description, DESCRIPTION_LIMIT)));
    }
    lines.push(format!("    id: {}", book.id));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ImageLinks;

    #[test]
    fn test_headings_pluralize() {
        assert_eq!(results_heading(1, "dune"), "Found 1 book for \"dune\"");
        assert_eq!(results_heading(25, "dune"), "Found 25 books for \"dune\"");
        assert_eq!(favorites_summary(0), "0 books in your reading list");
        assert_eq!(favorites_summary(1), "1 book in your reading list");
    }

    #[test]
    fn test_toggle_notice() {
        assert_eq!(toggle_notice(true).0, "Added to favorites");
        assert_eq!(toggle_notice(false).1, "Book removed from your reading list");
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp("short", 10), "short");
        assert_eq!(clamp("exactly10!", 10), "exactly10!");
        assert_eq!(clamp("a long description", 6), "a long…");
        assert_eq!(clamp("café au lait", 4), "café…");
    }

    #[test]
    fn test_render_full_card() {
        let book = BookSummary {
            authors: vec!["Frank Herbert".into()],
            published_date: Some("1965-08-01".into()),
            description: Some("<p>Desert <i>planet</i>.</p>".into()),
            image_links: Some(ImageLinks {
                thumbnail: Some("http://covers.example/dune".into()),
                small_thumbnail: None,
            }),
            average_rating: Some(4.3),
            ratings_count: Some(100),
            categories: vec!["Fiction".into(), "Classics".into()],
            page_count: Some(896),
            ..BookSummary::new("A", "Dune")
        };

        let card = render_card(&book, true);
        let lines: Vec<&str> = card.lines().collect();
        assert_eq!(lines[0], "♥ Dune");
        assert_eq!(lines[1], "    by Frank Herbert");
        assert_eq!(lines[2], "    ★ 4.3 (100) • 1965 • Fiction • 896 pages");
        assert_eq!(lines[3], "    cover: http://covers.example/dune");
        assert_eq!(lines[4], "    Desert planet.");
        assert_eq!(lines[5], "    id: A");
    }

    #[test]
    fn test_render_sparse_card() {
        let book = BookSummary {
            title: None,
            ..BookSummary::new("B", "")
        };

        let card = render_card(&book, false);
        let lines: Vec<&str> = card.lines().collect();
        assert_eq!(lines[0], "  Untitled");
        assert_eq!(lines[1], "    by Unknown Author");
        assert_eq!(lines[2], "    cover: [Untitled]");
        assert_eq!(lines[3], "    id: B");
        assert_eq!(lines.len(), 4);
    }
}
