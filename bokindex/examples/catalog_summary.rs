use bokindex::{CatalogClient, SearchFilters};
use std::collections::HashMap;
use std::env;
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();
    let api_url =
        env::var("HYLLA_API_URL").unwrap_or_else(|_| "http://localhost:8000".to_string());
    let client = CatalogClient::new(api_url);

    let facets = client.fetch_facets().await?;
    println!(
        "Catalog vocabulary: {} categories, {} authors",
        facets.categories.len(),
        facets.authors.len()
    );

    // Unfiltered search returns the whole catalog
    let books = client.search("", &SearchFilters::default()).await?;

    // Count books per category
    let mut per_category: HashMap<String, usize> = HashMap::new();
    for book in &books {
        *per_category.entry(book.category.clone()).or_insert(0) += 1;
    }

    // Sort categories by book count (descending)
    let mut categories: Vec<_> = per_category.into_iter().collect();
    categories.sort_by(|a, b| b.1.cmp(&a.1));

    println!("{} books in the catalog:", books.len());
    for (category, count) in categories {
        println!("{:>4}  {}", count, category);
    }

    Ok(())
}
