use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::{Header, Method, Status};
use rocket::{Request, Response};
use std::io::Cursor;

/// Allows any origin, method and header. Preflight requests are answered with
/// an empty 200 even though no route handles `OPTIONS`.
pub struct CORS;

#[rocket::async_trait]
impl Fairing for CORS {
    fn info(&self) -> Info {
        Info {
            name: "Add CORS headers to responses",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, req: &'r Request<'_>, res: &mut Response<'r>) {
        // Credentials can't be combined with a wildcard origin, so echo it back.
        match req.headers().get_one("Origin") {
            Some(origin) => {
                res.set_header(Header::new("Access-Control-Allow-Origin", origin.to_string()));
                res.set_header(Header::new("Access-Control-Allow-Credentials", "true"));
                res.set_header(Header::new("Vary", "Origin"));
            }
            None => {
                res.set_header(Header::new("Access-Control-Allow-Origin", "*"));
            }
        }
        res.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "GET, POST, PUT, PATCH, DELETE, OPTIONS",
        ));
        let requested_headers = req
            .headers()
            .get_one("Access-Control-Request-Headers")
            .unwrap_or("*")
            .to_string();
        res.set_header(Header::new("Access-Control-Allow-Headers", requested_headers));

        if req.method() == Method::Options {
            res.set_status(Status::Ok);
            res.set_sized_body(0, Cursor::new(""));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rocket::local::blocking::Client;

    #[get("/ping")]
    fn ping() -> &'static str {
        "pong"
    }

    fn client() -> Client {
        Client::tracked(rocket::build().attach(CORS).mount("/", routes![ping])).unwrap()
    }

    #[test]
    fn wildcard_origin_without_origin_header() {
        let client = client();
        let response = client.get("/ping").dispatch();
        assert_eq!(response.status(), Status::Ok);
        assert_eq!(
            response.headers().get_one("Access-Control-Allow-Origin"),
            Some("*")
        );
    }

    #[test]
    fn echoes_origin_and_answers_preflight() {
        let client = client();
        let response = client
            .req(Method::Options, "/items")
            .header(Header::new("Origin", "http://localhost:3000"))
            .dispatch();
        assert_eq!(response.status(), Status::Ok);
        assert_eq!(
            response.headers().get_one("Access-Control-Allow-Origin"),
            Some("http://localhost:3000")
        );
        assert_eq!(
            response.headers().get_one("Access-Control-Allow-Credentials"),
            Some("true")
        );
    }
}
