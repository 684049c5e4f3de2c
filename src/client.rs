//! HTTP client to interact with mdpr.jp.

use crate::{error::TransportError, site::HeaderProfile, Error, Result};
use std::{io::Read, time::Duration};

/// Max duration of a request, from connection to the end of the body.
const TIMEOUT: Duration = Duration::from_secs(30);

/// Something able to retrieve the body at an URL.
pub trait Fetch {
    /// Sends a GET request to `url` with the headers of `profile`, returns
    /// the whole response body.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::Transport`] on network/timeout failure or non-2xx
    /// status.
    fn fetch(&self, url: &str, profile: &HeaderProfile) -> Result<Vec<u8>>;
}

/// A simple blocking HTTP client: one attempt per request, no retry.
#[derive(Clone)]
pub struct Client {
    /// HTTP client.
    agent: ureq::Agent,
}

impl Client {
    /// Initialize a new client.
    pub fn new() -> Self {
        Self {
            agent: ureq::builder().timeout(TIMEOUT).build(),
        }
    }

    /// Downloads the image at `url` in the given buffer.
    ///
    /// # Errors
    ///
    /// Same as [`Fetch::fetch`].
    pub fn get_image(
        &self,
        url: &str,
        profile: &HeaderProfile,
        buf: &mut Vec<u8>,
    ) -> Result<()> {
        let request = self.request(url, profile).set("accept", "image/*");

        read_into(request, url, buf)
    }

    /// Prepares a GET request to `url` carrying the headers of `profile`.
    fn request(&self, url: &str, profile: &HeaderProfile) -> ureq::Request {
        profile
            .headers()
            .fold(self.agent.get(url), |request, (name, value)| {
                request.set(name, value)
            })
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetch for Client {
    fn fetch(&self, url: &str, profile: &HeaderProfile) -> Result<Vec<u8>> {
        log::debug!("GET {url} ({} profile)", profile.name());

        let mut body = Vec::new();
        read_into(self.request(url, profile), url, &mut body)?;
        log::debug!("got {} bytes from {url}", body.len());

        Ok(body)
    }
}

/// Executes `request` and reads the whole body into `buf`.
fn read_into(request: ureq::Request, url: &str, buf: &mut Vec<u8>) -> Result<()> {
    let response = request.call().map_err(|err| Error::transport(url, err))?;

    // ureq already rejects 4xx/5xx, but 1xx/3xx can still end up here.
    let status = response.status();
    if !is_success(status) {
        return Err(Error::transport(url, TransportError::Status(status)));
    }

    // The reader is dropped on every path, releasing the connection.
    response
        .into_reader()
        .read_to_end(buf)
        .map_err(|err| Error::transport(url, err))?;

    Ok(())
}

/// Tests if the HTTP status is a success.
fn is_success(http_status: u16) -> bool {
    (200..=299).contains(&http_status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::{API_PROFILE, WEB_PROFILE};
    use std::{
        io::{BufRead, BufReader, Write},
        net::TcpListener,
        thread::{self, JoinHandle},
    };

    /// Serves a single HTTP response on a local port.
    ///
    /// Returns the URL to call and a handle yielding the raw request head.
    fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let url = format!("http://{}/x", listener.local_addr().expect("local addr"));

        let handle = thread::spawn(move || {
            let (stream, _) = listener.accept().expect("accept");
            let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));

            let mut head = String::new();
            loop {
                let mut line = String::new();
                reader.read_line(&mut line).expect("read request");
                if line == "\r\n" || line.is_empty() {
                    break;
                }
                head.push_str(&line);
            }

            let mut stream = stream;
            write!(
                stream,
                "HTTP/1.1 {status}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            )
            .expect("write response");

            head
        });

        (url, handle)
    }

    #[test]
    fn fetch_ok() {
        let (url, server) = serve_once("200 OK", "hello");

        let res = Client::new().fetch(&url, &WEB_PROFILE).expect("body");
        let head = server.join().expect("server thread");

        assert_eq!(res, b"hello");
        assert!(head.starts_with("GET /x HTTP/1.1"), "{head}");
        for (name, value) in WEB_PROFILE.headers() {
            let expected = format!("{}: {value}", name.to_lowercase());
            assert!(head.to_lowercase().contains(&expected.to_lowercase()), "{head}");
        }
    }

    #[test]
    fn fetch_not_found() {
        let (url, server) = serve_once("404 Not Found", "nope");

        let res = Client::new().fetch(&url, &API_PROFILE);
        let head = server.join().expect("server thread");

        assert!(matches!(
            res,
            Err(Error::Transport {
                url: ref failed,
                source: TransportError::Status(404),
            }) if *failed == url
        ));
        assert!(head.contains("okhttp/4.9.1"), "{head}");
    }

    #[test]
    fn fetch_unreachable() {
        // Grab a free port, then close it: nobody listens there anymore.
        let url = {
            let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
            format!("http://{}/x", listener.local_addr().expect("local addr"))
        };

        let res = Client::new().fetch(&url, &WEB_PROFILE);

        assert!(matches!(
            res,
            Err(Error::Transport {
                source: TransportError::Request(_),
                ..
            })
        ));
    }

    #[test]
    fn only_2xx_is_success() {
        assert!(is_success(200));
        assert!(is_success(204));
        assert!(!is_success(101));
        assert!(!is_success(304));
        assert!(!is_success(404));
        assert!(!is_success(503));
    }
}
