//! Web interface that mirrors the command line application.
//!
//! Run the `equivalence-web` binary and open http://127.0.0.1:8080/ in a local
//! browser. The form takes the same six fields as the CLI, runs the identical
//! pipeline, and renders the resulting formula lists into the page.

use ltl_equivalence_generator::analysis::{TransformOutcome, analyse_formula, parse_operator_list};
use ltl_equivalence_generator::result_print::PrintOptions;

use axum::Router;
use axum::extract::Form;
use axum::response::Html;
use axum::routing::get;
use serde::Deserialize;

/// The six form fields, all received as raw strings and validated like the CLI
/// arguments.
#[derive(Deserialize)]
struct TransformForm {
    formula: String,
    operators: String,
    complexity: String,
    depth: String,
    show_unfiltered: String,
    timeout: String,
}

#[tokio::main]
async fn main() {
    let app = Router::new().route("/", get(render_form).post(handle_transform));

    let listener = match tokio::net::TcpListener::bind("127.0.0.1:8080").await {
        Ok(listener) => listener,
        Err(error) => {
            println!("Could not bind 127.0.0.1:8080: {error}");
            return;
        }
    };
    println!("Serving the equivalence generator on http://127.0.0.1:8080/");
    if let Err(error) = axum::serve(listener, app).await {
        println!("Server error: {error}");
    }
}

/// GET handler: just the input form.
async fn render_form() -> Html<String> {
    Html(render_page(PageContent::default()))
}

/// POST handler: validate the form fields, run the transformation pipeline on a
/// blocking worker, and render the outcome.
async fn handle_transform(Form(form): Form<TransformForm>) -> Html<String> {
    let operators = match parse_operator_list(form.operators.as_str()) {
        Ok(operators) => operators,
        Err(error) => return Html(render_error(error)),
    };
    let complexity: f64 = match form.complexity.trim().parse() {
        Ok(complexity) => complexity,
        Err(_) => return Html(render_error("Complexity must be a number.".to_string())),
    };
    let depth: u32 = match form.depth.trim().parse() {
        Ok(depth) => depth,
        Err(_) => {
            return Html(render_error(
                "Depth must be a non-negative integer.".to_string(),
            ));
        }
    };
    let show_unfiltered = match form.show_unfiltered.trim() {
        "y" => true,
        "n" => false,
        _ => return Html(render_error("Show unfiltered must be 'y' or 'n'.".to_string())),
    };
    let timeout: f64 = match form.timeout.trim().parse() {
        Ok(timeout) => timeout,
        Err(_) => return Html(render_error("Timeout must be a number.".to_string())),
    };

    let formula = form.formula.clone();
    let generation = tokio::task::spawn_blocking(move || {
        analyse_formula(
            formula.as_str(),
            &operators,
            complexity,
            depth,
            show_unfiltered,
            timeout,
            PrintOptions::NoPrint,
        )
    })
    .await;

    let content = match generation {
        Ok(Ok(outcome)) => PageContent::from_outcome(outcome, show_unfiltered),
        Ok(Err(error)) => PageContent {
            error: Some(error),
            ..PageContent::default()
        },
        Err(_) => PageContent {
            error: Some("An internal error occurred during equivalence generation.".to_string()),
            ..PageContent::default()
        },
    };
    Html(render_page(content))
}

/// Result sections rendered below the form.
#[derive(Default)]
struct PageContent {
    error: Option<String>,
    warning: Option<String>,
    unfiltered: Option<Vec<String>>,
    filtered: Option<Vec<String>>,
}

impl PageContent {
    fn from_outcome(outcome: TransformOutcome, show_unfiltered: bool) -> PageContent {
        let TransformOutcome {
            equivalents,
            filtered,
            unreachable,
        } = outcome;
        let warning = if unreachable.is_empty() {
            None
        } else {
            Some(format!(
                "Warning: The following operators might not always be reachable: {}.",
                unreachable.join(", ")
            ))
        };
        let error = if filtered.is_empty() {
            Some("No equivalent statements generated after filtering.".to_string())
        } else {
            None
        };
        PageContent {
            error,
            warning,
            unfiltered: if show_unfiltered { Some(equivalents) } else { None },
            filtered: Some(filtered),
        }
    }
}

fn render_error(error: String) -> String {
    render_page(PageContent {
        error: Some(format!("Error: {error}")),
        ..PageContent::default()
    })
}

fn render_page(content: PageContent) -> String {
    let mut sections = String::new();
    if let Some(error) = &content.error {
        sections.push_str(&format!("<p class=\"error\">{}</p>\n", escape_html(error)));
    }
    if let Some(warning) = &content.warning {
        sections.push_str(&format!(
            "<p class=\"warning\">{}</p>\n",
            escape_html(warning)
        ));
    }
    if let Some(unfiltered) = &content.unfiltered {
        sections.push_str(&render_formula_list(
            &format!("Before filtering: {}", unfiltered.len()),
            unfiltered,
        ));
    }
    if let Some(filtered) = &content.filtered {
        if !filtered.is_empty() {
            sections.push_str(&render_formula_list(
                &format!("After filtering: {}", filtered.len()),
                filtered,
            ));
        }
    }

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<title>LTL equivalence generator</title>
<style>
body {{ font-family: sans-serif; margin: 2em auto; max-width: 50em; }}
label {{ display: block; margin-top: 0.6em; }}
input {{ width: 20em; }}
.error {{ color: #b00020; }}
.warning {{ color: #9a6700; }}
ul {{ font-family: monospace; }}
</style>
</head>
<body>
<h1>LTL equivalence generator</h1>
<form method="post" action="/">
<label>Formula <input name="formula" placeholder="A &lt;-&gt; B" required></label>
<label>Operators (comma-separated) <input name="operators" placeholder="!,&amp;,|,-&gt;" required></label>
<label>Complexity factor <input name="complexity" value="2.5"></label>
<label>Depth <input name="depth" value="2"></label>
<label>Show unfiltered (y/n) <input name="show_unfiltered" value="n"></label>
<label>Timeout (seconds) <input name="timeout" value="5.0"></label>
<p><button type="submit">Transform</button></p>
</form>
{sections}</body>
</html>
"#
    )
}

fn render_formula_list(heading: &str, formulae: &[String]) -> String {
    let mut section = format!("<h2>{}</h2>\n<ul>\n", escape_html(heading));
    for formula in formulae {
        section.push_str(&format!("<li>{}</li>\n", escape_html(formula)));
    }
    section.push_str("</ul>\n");
    section
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
