use crate::crawler::{element_text, fetch_page, Fetcher};
use crate::output::Table;
use crate::CensusError;
use url::Url;

/// Lists every "What's New" article with its title and editors
///
/// Articles whose page fails to load are left out. Returns `Ok(None)` when
/// the article index itself cannot be loaded.
pub async fn whats_new<F: Fetcher>(
    fetcher: &mut F,
    main_doc_url: &Url,
) -> Result<Option<Table>, CensusError> {
    let whats_new_url = main_doc_url.join("whatsnew/")?;
    let Some(page) = fetch_page(fetcher, &whats_new_url).await else {
        return Ok(None);
    };

    let main_section = page.locate("section#what-s-new-in-python")?;
    let toctree = page.locate_in(main_section, "div.toctree-wrapper")?;

    let mut article_links = Vec::new();
    for item in page.select_in(toctree, "li.toctree-l1")? {
        let link = page.locate_in(item, "a")?;
        let href = page.attribute(link, "href")?;
        article_links.push(page.join(href)?);
    }
    tracing::info!("Found {} articles", article_links.len());

    let mut table = Table::new(["Article link", "Title", "Editor, Author"]);
    for article_url in article_links {
        let Some(article) = fetch_page(fetcher, &article_url).await else {
            continue;
        };

        let title = element_text(article.locate("h1")?);
        let editors = element_text(article.locate("dl")?).replace('\n', " ");
        table.push_row([article_url.to_string(), title, editors]);
    }

    Ok(Some(table))
}
