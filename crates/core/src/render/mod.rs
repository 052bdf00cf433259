//! Server-side rendering of search responses.
//!
//! Everything here is a pure function of its arguments; the same response
//! always yields the same markup.

mod html;

pub use html::{encode_segment, escape, search_query};

use codata_api::models::{ConstantInstance, SearchResponse, Version};
use std::fmt::Write;

/// Shown in place of a missing uncertainty.
pub const NO_UNCERTAINTY: &str = "-";

/// What the search page shows below its form.
#[derive(Debug, Clone, Copy)]
pub enum PageBody<'a> {
    /// No search issued yet.
    Empty,
    Results(&'a SearchResponse),
    /// The query was rejected; the message is shown instead of results.
    Error(&'a str),
}

/// Results table with page selector and prev/next controls, or a
/// "No matches" notice when the response has no matches.
pub fn render_search(response: &SearchResponse) -> String {
    let mut out = String::from("<div>");
    if response.is_empty() {
        out.push_str("No matches");
        out.push_str("</div>");
        return out;
    }

    render_header(&mut out, response);

    out.push_str("<div class='container'>");
    out.push_str("<table class='table table-striped'>");
    out.push_str("<thead><tr>");
    for column in ["Name", "Units", "Value", "Uncertainty", "Version"] {
        let _ = write!(out, "<th>{column}</th>");
    }
    out.push_str("</tr></thead><tbody>");
    for instance in &response.matches {
        render_row(&mut out, instance);
    }
    out.push_str("</tbody></table></div>");

    render_footer(&mut out, response);
    out.push_str("</div>");
    out
}

/// One line per version: `label: value ± uncertainty`.
pub fn version_tooltip(versions: &[Version]) -> String {
    versions
        .iter()
        .map(|v| {
            format!(
                "{}: {} ± {}",
                v.version,
                v.value,
                v.uncertainty.as_deref().unwrap_or(NO_UNCERTAINTY)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_header(out: &mut String, response: &SearchResponse) {
    out.push_str("<div class='row'>");
    let _ = write!(
        out,
        "<div class='col'>Found {} matches</div>",
        response.found
    );

    // Page selector; changing it resubmits the search with the new page.
    out.push_str("<div class='col'>");
    out.push_str("<form method='get' class='row g-3 float-end'>");
    let _ = write!(
        out,
        "<input type='hidden' name='name' value='{}'>",
        escape(&response.filter.name)
    );
    let _ = write!(
        out,
        "<input type='hidden' name='perPage' value='{}'>",
        response.per_page
    );
    out.push_str("<label for='search-page-select' class='col-auto'>Page </label>");
    out.push_str("<div class='col-auto'>");
    out.push_str(
        "<select id='search-page-select' name='page' class='form-select form-select-sm' \
         style='width:auto;' onchange='this.form.submit()'>",
    );
    for i in 1..=response.n_pages {
        let selected = if i as i64 == response.page {
            " selected='selected'"
        } else {
            ""
        };
        let _ = write!(out, "<option value='{i}'{selected}>{i}</option>");
    }
    out.push_str("</select></div>");
    let _ = write!(out, "<div class='col-auto'> of {}</div>", response.n_pages);
    out.push_str("</form></div>");
    out.push_str("</div>");
}

fn render_row(out: &mut String, instance: &ConstantInstance) {
    let Some(latest) = instance.latest() else {
        return;
    };
    let units = instance.si_unit().unwrap_or_default();
    let uncertainty = latest.uncertainty.as_deref().unwrap_or(NO_UNCERTAINTY);

    out.push_str("<tr class='text-start'>");

    let _ = write!(
        out,
        "<td>{}&nbsp;<a href='api/ConstantInstance/{}' target='_blank'>\
         <i class='bi bi-filetype-json'></i></a></td>",
        escape(instance.display_name()),
        encode_segment(&instance.id)
    );

    match instance.uom_reference() {
        Some(uom) => {
            let _ = write!(
                out,
                "<td><a href='{}' target='_blank'>{}</a></td>",
                escape(uom),
                escape(units)
            );
        }
        None => {
            let _ = write!(out, "<td>{}</td>", escape(units));
        }
    }

    let _ = write!(out, "<td>{}</td>", escape(&latest.value));
    let _ = write!(out, "<td>{}</td>", escape(uncertainty));
    let _ = write!(
        out,
        "<td data-bs-toggle='tooltip' title='{}'>{}</td>",
        escape(&version_tooltip(&instance.versions)),
        escape(&latest.version)
    );

    out.push_str("</tr>");
}

fn render_footer(out: &mut String, response: &SearchResponse) {
    let name = &response.filter.name;
    let per_page = response.per_page;
    let link = |out: &mut String, page: i64, label: &str, class: &str, enabled: bool| {
        if enabled {
            let _ = write!(
                out,
                "<a class='btn btn-sm {class}' href='?{}'>{label}</a>",
                escape(&search_query(name, page, per_page))
            );
        } else {
            let _ = write!(
                out,
                "<a class='btn btn-sm {class} disabled' aria-disabled='true'>{label}</a>"
            );
        }
    };

    out.push_str("<div class='row mb-3'>");

    out.push_str("<div class='col-1 text-start'>");
    link(
        out,
        response.page - 1,
        "&lt;&lt; Prev",
        "btn-primary",
        response.has_previous(),
    );
    out.push_str("</div>");

    out.push_str("<div class='col text-center'>");
    for i in 1..=response.n_pages as i64 {
        link(out, i, &i.to_string(), "btn-light", i != response.page);
    }
    out.push_str("</div>");

    out.push_str("<div class='col-1 text-end'>");
    link(
        out,
        response.page + 1,
        "Next &gt;&gt;",
        "btn-primary",
        response.has_next(),
    );
    out.push_str("</div>");

    out.push_str("</div>");
}

/// Full search page: form, link to the JSON endpoint, and the body.
pub fn render_page(name: &str, body: PageBody<'_>) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html><html lang='en'><head><meta charset='utf-8'>");
    out.push_str("<meta name='viewport' content='width=device-width, initial-scale=1'>");
    out.push_str("<title>CODATA Fundamental Physical Constants</title>");
    out.push_str(
        "<link rel='stylesheet' \
         href='https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css'>",
    );
    out.push_str(
        "<link rel='stylesheet' \
         href='https://cdn.jsdelivr.net/npm/bootstrap-icons@1.11.3/font/bootstrap-icons.min.css'>",
    );
    out.push_str("</head><body><div class='container mt-3'>");
    out.push_str("<h1>CODATA Fundamental Physical Constants</h1>");

    out.push_str("<form method='get' class='input-group mb-3'>");
    let _ = write!(
        out,
        "<input id='search-input' type='text' name='name' class='form-control' \
         placeholder='Search by name' value='{}'>",
        escape(name)
    );
    out.push_str("<button id='search-button' class='btn btn-primary' type='submit'>Search</button>");
    out.push_str("</form>");

    out.push_str("<div id='search-results'>");
    match body {
        PageBody::Empty => {}
        PageBody::Results(response) => {
            let _ = write!(
                out,
                "<p><a id='search-api-url' href='api/search?{}'>JSON</a></p>",
                escape(&search_query(name, response.page, response.per_page))
            );
            out.push_str(&render_search(response));
        }
        PageBody::Error(message) => {
            let _ = write!(
                out,
                "<div class='alert alert-warning'>{}</div>",
                escape(message)
            );
        }
    }
    out.push_str("</div></div></body></html>");
    out
}
