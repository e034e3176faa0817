use directory_common::model::{Category, Councillor, SearchResult};

use super::{escape, is_external_link, page};

pub const NOT_FOUND: &str = "Councillor not found";
pub const EMPTY_CATEGORY: &str = "No results found in this category";

pub fn render_not_found() -> String {
    page(NOT_FOUND, &format!("<p class=\"not-found\">{NOT_FOUND}</p>"))
}

pub fn render_detail_page(councillor: &Councillor) -> String {
    let sections: String = councillor
        .data
        .categories
        .iter()
        .filter(|(category, _)| !category.is_identity())
        .map(|(category, results)| render_section(category, results))
        .collect();

    let body = format!(
        "<a class=\"back\" href=\"/\">&larr; Back to list</a>\n{}\n<section class=\"categories\">\n{sections}</section>",
        render_header(councillor)
    );
    page(&councillor.name, &body)
}

fn render_header(councillor: &Councillor) -> String {
    let summary = &councillor.data.summary;
    let social = if summary.has_social_media {
        "Found"
    } else {
        "None found"
    };

    let interests = if summary.potential_interests.is_empty() {
        String::new()
    } else {
        let items: String = summary
            .potential_interests
            .iter()
            .map(|i| format!("<li>{}</li>", escape(i)))
            .collect();
        format!("\n<h2>Potential interests</h2>\n<ul class=\"interests\">{items}</ul>")
    };

    format!(
        "<header class=\"detail-header\">\n<h1>{}</h1>\n<ul class=\"summary\">\n\
         <li>Total results: {}</li>\n\
         <li class=\"controversy-count\">Controversies: {}</li>\n\
         <li>Social media: {social}</li>\n</ul>{interests}\n</header>",
        escape(&councillor.name),
        summary.total_results,
        summary.controversy_count,
    )
}

fn render_section(category: Category, results: &[SearchResult]) -> String {
    let inner = if results.is_empty() {
        format!("<p class=\"empty-category\">{EMPTY_CATEGORY}</p>")
    } else {
        results.iter().map(render_result).collect::<Vec<_>>().join("\n")
    };
    format!(
        "<details class=\"category category-{}\">\n<summary>{} {} ({})</summary>\n{inner}\n</details>\n",
        category.key(),
        category.icon(),
        category.label(),
        results.len()
    )
}

fn render_result(result: &SearchResult) -> String {
    let title = if is_external_link(&result.link) {
        format!(
            "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
            escape(&result.link),
            escape(&result.title)
        )
    } else {
        escape(&result.title)
    };

    let search_time = result
        .search_time
        .as_deref()
        .map(|t| format!("<span>Search time: {}</span>", escape(t)))
        .unwrap_or_default();

    format!(
        "<article class=\"result-card\">\n<h3>{title}</h3>\n<p class=\"snippet\">{}</p>\n\
         <p class=\"meta\"><span>Relevance: {:.1}</span>{search_time}</p>\n</article>",
        escape(&result.snippet),
        result.relevance_score
    )
}
