//! Per-request state handed to an action.

use serde::Serialize;

use crate::controller::ActionError;
use crate::http::response::{APPLICATION_JSON, TEXT_PLAIN};
use crate::http::{Request, Response};
use crate::routing::Params;

/// What an action sees: the request, its params, and the response to fill.
#[derive(Debug)]
pub struct ActionContext<'a> {
    request: &'a Request,
    response: &'a mut Response,
    params: Params,
    built: bool,
}

impl<'a> ActionContext<'a> {
    pub fn new(request: &'a Request, response: &'a mut Response, params: Params) -> Self {
        Self {
            request,
            response,
            params,
            built: false,
        }
    }

    pub fn request(&self) -> &Request {
        self.request
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name)
    }

    /// Whether a render, redirect or head already happened.
    pub fn is_built(&self) -> bool {
        self.built
    }

    pub fn render_content(
        &mut self,
        body: impl Into<Vec<u8>>,
        content_type: &str,
    ) -> Result<(), ActionError> {
        self.mark_built()?;
        self.response.set_header("content-type", content_type);
        self.response.set_body(body);
        Ok(())
    }

    pub fn render_text(&mut self, body: impl Into<String>) -> Result<(), ActionError> {
        self.render_content(body.into(), TEXT_PLAIN)
    }

    pub fn render_json<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), ActionError> {
        let body = serde_json::to_vec(value)?;
        self.render_content(body, APPLICATION_JSON)
    }

    /// 302 to `url`.
    pub fn redirect_to(&mut self, url: &str) -> Result<(), ActionError> {
        self.mark_built()?;
        self.response.status = 302;
        self.response.set_header("location", url);
        Ok(())
    }

    /// Status only, empty body.
    pub fn head(&mut self, status: u16) -> Result<(), ActionError> {
        self.mark_built()?;
        self.response.status = status;
        self.response.set_body(Vec::new());
        Ok(())
    }

    fn mark_built(&mut self) -> Result<(), ActionError> {
        if self.built {
            return Err(ActionError::DoubleRender);
        }
        self.built = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_text() {
        let req = Request::new("GET", "/");
        let mut res = Response::new();
        let mut ctx = ActionContext::new(&req, &mut res, Params::new());

        ctx.render_text("hello").unwrap();
        assert!(ctx.is_built());
        assert_eq!(res.body_text(), "hello");
        assert_eq!(res.header("content-type"), Some(TEXT_PLAIN));
    }

    #[test]
    fn test_render_json() {
        let req = Request::new("GET", "/");
        let mut res = Response::new();
        let mut ctx = ActionContext::new(&req, &mut res, Params::new());

        ctx.render_json(&json!({"id": 1})).unwrap();
        assert_eq!(res.body_text(), r#"{"id":1}"#);
        assert_eq!(res.header("content-type"), Some(APPLICATION_JSON));
    }

    #[test]
    fn test_redirect() {
        let req = Request::new("POST", "/users");
        let mut res = Response::new();
        let mut ctx = ActionContext::new(&req, &mut res, Params::new());

        ctx.redirect_to("/users/1").unwrap();
        assert_eq!(res.status, 302);
        assert_eq!(res.header("location"), Some("/users/1"));
    }

    #[test]
    fn test_double_render_is_rejected() {
        let req = Request::new("GET", "/");
        let mut res = Response::new();
        let mut ctx = ActionContext::new(&req, &mut res, Params::new());

        ctx.render_text("first").unwrap();
        assert!(matches!(ctx.redirect_to("/"), Err(ActionError::DoubleRender)));
        assert!(matches!(ctx.head(204), Err(ActionError::DoubleRender)));
        assert_eq!(res.body_text(), "first");
        assert_eq!(res.status, 200);
    }

    #[test]
    fn test_head() {
        let req = Request::new("DELETE", "/users/1");
        let mut res = Response::new();
        res.set_body("stale");
        let mut ctx = ActionContext::new(&req, &mut res, Params::new());

        ctx.head(204).unwrap();
        assert_eq!(res.status, 204);
        assert!(res.body().is_empty());
    }
}
