use std::fmt::Write;

use crate::interaction::{record_line, Listing, Notice, PageView};

const TITLE: &str = "Food Classification Program";

const STYLE: &str = "body{font-family:sans-serif;max-width:48rem;margin:2rem auto;}\
label{display:block;margin-top:.75rem;}\
input,select{width:100%;padding:.3rem;}\
button{margin:.75rem .5rem 0 0;}\
.notice{padding:.5rem .75rem;margin:.5rem 0;border-radius:.25rem;}\
.success{background:#e6f4ea;}.info{background:#e8f0fe;}\
.warning{background:#fef7e0;}.error{background:#fce8e6;}";

pub(crate) fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Renders the full page. All three actions submit the same form, so the
/// entered values come back filled in whichever button was pressed.
pub(crate) fn render_page(view: &PageView) -> String {
    let mut html = String::with_capacity(4096);
    let form = &view.form;

    // writing into a String cannot fail
    let _ = write!(
        html,
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n<style>{style}</style>\n</head>\n<body>\n\
         <h1>{title}</h1>\n",
        title = TITLE,
        style = STYLE
    );

    html.push_str("<form method=\"post\" action=\"/classify\">\n");
    let _ = write!(
        html,
        "<label>Enter the name of the food item:\
         <input type=\"text\" name=\"name\" value=\"{}\"></label>\n\
         <label>Enter the calories in the food item:\
         <input type=\"number\" name=\"calories\" min=\"0\" step=\"any\" value=\"{}\"></label>\n\
         <label>Enter the proteins (in grams) in the food item:\
         <input type=\"number\" name=\"proteins\" min=\"0\" step=\"any\" value=\"{}\"></label>\n",
        field(&form.name, ""),
        field(&form.calories, "0"),
        field(&form.proteins, "0"),
    );
    html.push_str(
        "<button type=\"submit\" formaction=\"/classify\">Classify Food</button>\
         <button type=\"submit\" formaction=\"/list\" formnovalidate>View Database</button>\n",
    );

    for notice in &view.notices {
        render_notice(&mut html, notice);
    }

    match &view.listing {
        None => {}
        Some(Listing::Empty) => html.push_str("<p>The database is empty.</p>\n"),
        Some(Listing::Records(records)) => {
            html.push_str("<p>Food Classification Database:</p>\n<ul>\n");
            for record in records {
                let _ = writeln!(html, "<li>{}</li>", escape_html(&record_line(record)));
            }
            html.push_str("</ul>\n");
        }
    }

    html.push_str(
        "<h2>Delete Food Item</h2>\n<label>Select a food item to delete:\
         <select name=\"food_to_delete\">\n",
    );
    for choice in &view.delete_choices {
        let selected = if form.food_to_delete.as_deref() == Some(choice.as_str()) {
            " selected"
        } else {
            ""
        };
        let escaped = escape_html(choice);
        let _ = writeln!(
            html,
            "<option value=\"{}\"{}>{}</option>",
            escaped, selected, escaped
        );
    }
    html.push_str(
        "</select></label>\n\
         <button type=\"submit\" formaction=\"/delete\" formnovalidate>Delete Food Item</button>\n\
         </form>\n</body>\n</html>\n",
    );

    html
}

fn field(value: &Option<String>, default: &str) -> String {
    escape_html(value.as_deref().unwrap_or(default))
}

fn render_notice(html: &mut String, notice: &Notice) {
    let (class, text) = match notice {
        Notice::Success(text) => ("success", text),
        Notice::Info(text) => ("info", text),
        Notice::Warning(text) => ("warning", text),
        Notice::Error(text) => ("error", text),
    };
    let _ = writeln!(
        html,
        "<div class=\"notice {}\">{}</div>",
        class,
        escape_html(text)
    );
}
