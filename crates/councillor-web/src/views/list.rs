use directory_common::model::Councillor;

use super::{councillor_href, escape, page};

pub const EMPTY_STATE: &str = "No councillors found";

/// Re-fetches the card list on every input event. `seq` drops responses that arrive
/// after a newer request was sent; it is checked again once the body is read.
const LIVE_SEARCH_SCRIPT: &str = r#"
(() => {
  const input = document.getElementById('search');
  const list = document.getElementById('councillor-list');
  if (!input || !list) return;
  let seq = 0;
  input.addEventListener('input', async () => {
    const mine = ++seq;
    const q = input.value;
    const res = await fetch('/cards?q=' + encodeURIComponent(q));
    if (!res.ok || mine !== seq) return;
    const html = await res.text();
    if (mine !== seq) return;
    list.innerHTML = html;
    history.replaceState(null, '', q ? '/?q=' + encodeURIComponent(q) : '/');
  });
})();
"#;

/// Full list page for the given search text and its matches.
pub fn render_list_page<'a>(query: &str, matches: impl IntoIterator<Item = &'a Councillor>) -> String {
    let body = format!(
        "<h1>Councillor Research Directory</h1>\n\
         <form method=\"get\" action=\"/\" role=\"search\">\n\
         <input id=\"search\" class=\"search\" type=\"search\" name=\"q\" value=\"{}\" \
         placeholder=\"Search councillors...\" autocomplete=\"off\" autofocus>\n\
         </form>\n\
         <div id=\"councillor-list\">{}</div>\n\
         <script>{LIVE_SEARCH_SCRIPT}</script>",
        escape(query),
        render_card_list(matches)
    );
    page("Councillor Research Directory", &body)
}

/// The swappable part of the list page: a grid of cards or the empty state.
pub fn render_card_list<'a>(matches: impl IntoIterator<Item = &'a Councillor>) -> String {
    let cards: Vec<String> = matches.into_iter().map(render_card).collect();
    if cards.is_empty() {
        return format!("<p class=\"empty-state\">{EMPTY_STATE}</p>");
    }
    format!("<div class=\"card-grid\">\n{}\n</div>", cards.join("\n"))
}

pub fn render_card(councillor: &Councillor) -> String {
    let data = &councillor.data;

    let badges: String = data
        .categories
        .iter()
        .filter(|(_, results)| !results.is_empty())
        .map(|(category, results)| {
            format!(
                "<span class=\"badge badge-{}\" title=\"{}\">{} ({})</span>",
                category.key(),
                category.label(),
                category.icon(),
                results.len()
            )
        })
        .collect();

    let controversy = if data.summary.controversy_count > 0 {
        format!(
            "\n<p class=\"controversy-alert\">Controversies: {}</p>",
            data.summary.controversy_count
        )
    } else {
        String::new()
    };

    format!(
        "<a class=\"councillor-card\" href=\"{}\">\n<h2>{}</h2>\n<div class=\"badges\">{badges}</div>\n\
         <p class=\"total\">Total results: {}</p>{controversy}\n</a>",
        escape(&councillor_href(&councillor.name)),
        escape(&councillor.name),
        data.summary.total_results,
    )
}
