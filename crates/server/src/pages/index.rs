//! Landing page: a random article from a single page of results.

use axum::extract::State;
use axum::response::Html;
use newsdesk_client::{SearchQuery, to_articles};
use newsdesk_core::{Article, Error};
use rand::Rng;
use rand::seq::SliceRandom;

use super::RANDOM_SAMPLE_SIZE;
use crate::error::PageError;
use crate::render::IndexView;
use crate::state::AppState;

/// `GET /`
///
/// The article is drawn uniformly from the first page of an empty-text
/// search, not from the whole corpus.
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    let query = SearchQuery::build("", Some(RANDOM_SAMPLE_SIZE), None);
    let page = state.search.search(&query).await?;

    let articles = to_articles(&page.results);
    let article = pick_article(&articles, &mut rand::thread_rng()).ok_or(Error::NoArticlesFound)?;

    tracing::debug!(sample = articles.len(), title = %article.title, "picked landing article");

    Ok(Html(state.renderer.render_index(&IndexView { title: &article.title, article })))
}

/// Pick one article uniformly at random from the sample.
fn pick_article<'a, R: Rng + ?Sized>(articles: &'a [Article], rng: &mut R) -> Option<&'a Article> {
    articles.choose(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn article(title: &str) -> Article {
        Article {
            title: title.into(),
            summary: String::new(),
            permalink: String::new(),
            published_timestamp: String::new(),
            published: String::new(),
        }
    }

    #[test]
    fn test_pick_article_empty() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(pick_article(&[], &mut rng).is_none());
    }

    #[test]
    fn test_pick_article_covers_sample() {
        let articles: Vec<Article> = (0..4).map(|i| article(&format!("a{i}"))).collect();
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = std::collections::HashSet::new();

        for _ in 0..200 {
            let picked = pick_article(&articles, &mut rng).unwrap();
            seen.insert(picked.title.clone());
        }

        assert_eq!(seen.len(), 4);
    }
}
