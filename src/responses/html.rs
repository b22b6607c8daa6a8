use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};
use maud::Markup;

pub fn html_response(markup: Markup) -> ResultResp {
    respond(mime::TEXT_HTML_UTF_8.as_ref(), markup.into_string())
}

pub fn css_response(css: &'static str) -> ResultResp {
    respond(mime::TEXT_CSS_UTF_8.as_ref(), css)
}

pub fn js_response(script: Vec<u8>) -> ResultResp {
    respond(mime::APPLICATION_JAVASCRIPT_UTF_8.as_ref(), script)
}

pub fn text_response(text: &'static str) -> ResultResp {
    respond(mime::TEXT_PLAIN_UTF_8.as_ref(), text)
}

fn respond(content_type: &str, body: impl Into<Body>) -> ResultResp {
    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", content_type)
        .body(body.into())
        .map_err(|e| ServerError::InternalError(e.to_string()))
}
