#[cfg(test)]
pub mod mock {
    use crate::api::client::{register_mock, MockResponse, TestResponder};
    use crate::api::ApiError;
    use reqwest::{header::AUTHORIZATION, Method};
    use serde_json::Value;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    pub const GET: Method = Method::GET;
    pub const POST: Method = Method::POST;
    pub const PUT: Method = Method::PUT;
    pub const PATCH: Method = Method::PATCH;
    pub const DELETE: Method = Method::DELETE;

    /// A request as the mock saw it.
    #[derive(Clone, Debug)]
    pub struct Recorded {
        pub method: Method,
        pub path: String,
        pub query: Option<String>,
        pub authorization: Option<String>,
        pub content_type: Option<String>,
        pub body: Option<Value>,
    }

    #[derive(Clone)]
    pub struct MockServer {
        inner: Rc<RefCell<Inner>>,
        base: String,
    }

    struct Inner {
        routes: Vec<Route>,
        received: Vec<Recorded>,
    }

    #[derive(Clone)]
    struct Route {
        method: Method,
        path: String,
        response: MockResponse,
    }

    impl MockServer {
        pub async fn start_async() -> Self {
            Self::start()
        }

        pub fn start() -> Self {
            static NEXT_ID: AtomicUsize = AtomicUsize::new(1);
            let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
            Self {
                inner: Rc::new(RefCell::new(Inner {
                    routes: Vec::new(),
                    received: Vec::new(),
                })),
                base: format!("http://mock-{}", id),
            }
        }

        pub fn url(&self, path: &str) -> String {
            let base_url = format!("{}{}", self.base, path);
            register_mock(base_url.clone(), Rc::new(self.clone()));
            base_url
        }

        pub fn mock<F>(&self, f: F)
        where
            F: FnOnce(&mut When, &mut Then),
        {
            let mut when = When::default();
            let mut then = Then::default();
            f(&mut when, &mut then);

            let method = when.method.clone().expect("mock requires method");
            let path = when.path.clone().expect("mock requires path");
            let status = then.status.unwrap_or(200);
            let response = match then.body {
                Some(body) => MockResponse::json(status, body),
                None if then.empty => MockResponse::empty(status),
                None => MockResponse::json(status, serde_json::json!({})),
            };

            self.inner.borrow_mut().routes.push(Route {
                method,
                path,
                response,
            });
        }

        pub fn received(&self) -> Vec<Recorded> {
            self.inner.borrow().received.clone()
        }

        pub fn hits(&self, method: Method, path: &str) -> usize {
            self.inner
                .borrow()
                .received
                .iter()
                .filter(|r| r.method == method && r.path == path)
                .count()
        }

        pub fn last_request(&self) -> Option<Recorded> {
            self.inner.borrow().received.last().cloned()
        }
    }

    impl TestResponder for MockServer {
        fn respond(&self, request: &reqwest::Request) -> Result<MockResponse, ApiError> {
            let method = request.method().clone();
            let path = request.url().path().to_string();
            let header = |name: reqwest::header::HeaderName| {
                request
                    .headers()
                    .get(name)
                    .and_then(|v| v.to_str().ok())
                    .map(str::to_string)
            };
            let body = request
                .body()
                .and_then(|b| b.as_bytes())
                .and_then(|bytes| serde_json::from_slice(bytes).ok());

            let mut inner = self.inner.borrow_mut();
            inner.received.push(Recorded {
                method: method.clone(),
                path: path.clone(),
                query: request.url().query().map(str::to_string),
                authorization: header(AUTHORIZATION),
                content_type: header(reqwest::header::CONTENT_TYPE),
                body,
            });

            inner
                .routes
                .iter()
                .rev()
                .find(|route| route.method == method && route.path == path)
                .map(|route| route.response.clone())
                .ok_or_else(|| ApiError::Network(format!("No mock for {} {}", method, path)))
        }
    }

    #[derive(Default)]
    pub struct When {
        method: Option<Method>,
        path: Option<String>,
    }

    impl When {
        pub fn method(&mut self, method: Method) -> &mut Self {
            self.method = Some(method);
            self
        }

        pub fn path(&mut self, path: &str) -> &mut Self {
            self.path = Some(path.to_string());
            self
        }
    }

    #[derive(Default)]
    pub struct Then {
        status: Option<u16>,
        body: Option<Value>,
        empty: bool,
    }

    impl Then {
        pub fn status(&mut self, status: u16) -> &mut Self {
            self.status = Some(status);
            self
        }

        pub fn json_body(&mut self, body: Value) -> &mut Self {
            self.body = Some(body);
            self
        }

        pub fn empty_body(&mut self) -> &mut Self {
            self.empty = true;
            self
        }
    }
}
