//! In-memory catalog for `hylla-tui dev`: seeded data, no server required.

use async_trait::async_trait;
use bokindex::{Book, CatalogError, FacetOptions, PublishedFilter, SearchFilters};

use super::CatalogBackend;

#[derive(Debug, Clone)]
pub struct DevCatalog {
    books: Vec<Book>,
}

impl DevCatalog {
    pub fn new() -> Self {
        Self {
            books: seed_library(),
        }
    }
}

impl Default for DevCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogBackend for DevCatalog {
    async fn facets(&self) -> Result<FacetOptions, CatalogError> {
        let mut categories: Vec<String> =
            self.books.iter().map(|book| book.category.clone()).collect();
        categories.sort();
        categories.dedup();

        let mut authors: Vec<String> = self.books.iter().map(|book| book.author.clone()).collect();
        authors.sort();
        authors.dedup();

        Ok(FacetOptions {
            categories,
            authors,
        })
    }

    async fn suggest(&self, query: &str) -> Result<Vec<String>, CatalogError> {
        let needle = query.trim().to_lowercase();
        let mut titles: Vec<String> = self
            .books
            .iter()
            .filter(|book| book.title.to_lowercase().contains(&needle))
            .map(|book| book.title.clone())
            .collect();
        titles.sort();
        titles.dedup();
        titles.truncate(8);
        Ok(titles)
    }

    async fn search(
        &self,
        query: &str,
        filters: &SearchFilters,
    ) -> Result<Vec<Book>, CatalogError> {
        let needle = query.trim().to_lowercase();
        let hits = self
            .books
            .iter()
            .filter(|book| {
                needle.is_empty()
                    || book.title.to_lowercase().contains(&needle)
                    || book.author.to_lowercase().contains(&needle)
            })
            .filter(|book| {
                filters
                    .category
                    .as_ref()
                    .map_or(true, |category| &book.category == category)
            })
            .filter(|book| {
                filters
                    .author
                    .as_ref()
                    .map_or(true, |author| &book.author == author)
            })
            .filter(|book| match filters.published {
                PublishedFilter::Unset => true,
                PublishedFilter::Published => book.published,
                PublishedFilter::Unpublished => !book.published,
            })
            .cloned()
            .collect();
        Ok(hits)
    }
}

fn seed_library() -> Vec<Book> {
    let book = |id: &str, title: &str, author: &str, category: &str, published: bool| Book {
        id: id.to_string(),
        title: title.to_string(),
        author: author.to_string(),
        category: category.to_string(),
        published,
    };

    vec![
        book("dev-1", "Dune", "Frank Herbert", "Science Fiction", true),
        book("dev-2", "Dune Messiah", "Frank Herbert", "Science Fiction", true),
        book(
            "dev-3",
            "Children of Dune",
            "Frank Herbert",
            "Science Fiction",
            false,
        ),
        book(
            "dev-4",
            "The Left Hand of Darkness",
            "Ursula K. Le Guin",
            "Science Fiction",
            true,
        ),
        book(
            "dev-5",
            "A Wizard of Earthsea",
            "Ursula K. Le Guin",
            "Fantasy",
            true,
        ),
        book(
            "dev-6",
            "The Guns of August",
            "Barbara W. Tuchman",
            "History",
            true,
        ),
        book(
            "dev-7",
            "A Distant Mirror",
            "Barbara W. Tuchman",
            "History",
            false,
        ),
        book("dev-8", "The Hobbit", "J.R.R. Tolkien", "Fantasy", true),
        book(
            "dev-9",
            "The Silmarillion",
            "J.R.R. Tolkien",
            "Fantasy",
            false,
        ),
        book(
            "dev-10",
            "The Rust Programming Language",
            "Steve Klabnik",
            "Programming",
            true,
        ),
    ]
}
