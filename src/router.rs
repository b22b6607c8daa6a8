use crate::config::DEFAULT_STATIC_DIR;
use crate::errors::ServerError;
use crate::filter_form::FilterForm;
use crate::responses::{css_response, html_response, js_response, text_response, ResultResp};
use crate::search::SearchBackend;
use crate::shell::{Shell, ShellState};
use crate::templates::{components::results_section, pages};
use astra::Request;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::{debug, warn};

const MAIN_CSS: &str = include_str!("../static/main.css");
const HTMX_FILE: &str = "htmx.js";

const ROUTES: [&str; 7] = [
    "/",
    "/search",
    "/reset",
    "/results",
    "/static/main.css",
    "/static/htmx.js",
    "/health",
];

static STATIC_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Where vendored assets are read from; set once at startup.
pub fn set_static_dir(dir: PathBuf) {
    if STATIC_DIR.set(dir).is_err() {
        warn!("static directory already set, keeping the first one");
    }
}

fn static_dir() -> &'static Path {
    STATIC_DIR
        .get()
        .map(PathBuf::as_path)
        .unwrap_or(Path::new(DEFAULT_STATIC_DIR))
}

pub fn handle<B: SearchBackend>(req: Request, shell: &Shell<B>) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();
    let partial = is_htmx(&req);
    debug!(method, path, partial, "request");

    match (method, path) {
        // Every full page load starts over; htmx swaps never reach this arm.
        ("GET", "/") => {
            let state = shell.mount();
            html_response(pages::home_page(&FilterForm::new(), &state))
        }
        ("GET", "/search") => {
            let form = FilterForm::from_query(req.uri().query());
            let state = form.submit(|filters| shell.search(filters));

            if partial {
                html_response(results_section(&state))
            } else {
                html_response(pages::home_page(&form, &state))
            }
        }
        ("GET", "/reset") => {
            let mut form = FilterForm::from_query(req.uri().query());
            let state = form.reset(|filters| shell.search(filters));
            app_response(partial, &form, &state)
        }
        ("GET", "/results") => html_response(results_section(&shell.snapshot())),
        ("GET", "/static/main.css") => css_response(MAIN_CSS),
        ("GET", "/static/htmx.js") => htmx_script(static_dir()),
        ("GET", "/health") => text_response("OK"),

        (_, path) if ROUTES.contains(&path) => Err(ServerError::BadRequest(format!(
            "{method} is not supported on {path}"
        ))),
        _ => Err(ServerError::NotFound),
    }
}

/// Serves the vendored htmx build from `dir`.
pub fn htmx_script(dir: &Path) -> ResultResp {
    let path = dir.join(HTMX_FILE);

    match fs::read(&path) {
        Ok(bytes) => js_response(bytes),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!(path = %path.display(), "htmx build missing, pages fall back to plain forms");
            Err(ServerError::NotFound)
        }
        Err(e) => Err(ServerError::InternalError(format!(
            "reading {}: {e}",
            path.display()
        ))),
    }
}

fn app_response(partial: bool, form: &FilterForm, state: &ShellState) -> ResultResp {
    if partial {
        html_response(pages::search_app(form, state))
    } else {
        html_response(pages::home_page(form, state))
    }
}

fn is_htmx(req: &Request) -> bool {
    req.headers()
        .get("HX-Request")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == "true")
}
