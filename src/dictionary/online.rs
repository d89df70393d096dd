//! Online word lookup against a Dicionário Aberto style HTTP endpoint
//!
//! `GET {base}/{word}` answers a JSON array of entries; an empty array or a 404 means
//! the word is unknown. Anything else that goes wrong is absorbed as `AssumedValid`.

use super::{DictionaryLookup, Validity};
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Public Portuguese dictionary API
pub const DEFAULT_URL: &str = "https://api.dicionario-aberto.net/word";

/// Upper bound for one lookup
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3);

/// Dictionary consulted over HTTP with a bounded timeout
#[derive(Debug, Clone)]
pub struct OnlineDictionary {
    agent: ureq::Agent,
    base_url: String,
}

impl OnlineDictionary {
    #[must_use]
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Lookup URL for a word, with the word percent-encoded as one path segment
    fn word_url(&self, word: &str) -> Option<Url> {
        let mut url = Url::parse(&self.base_url).ok()?;
        url.path_segments_mut().ok()?.pop_if_empty().push(word);
        Some(url)
    }
}

impl DictionaryLookup for OnlineDictionary {
    fn check(&self, word: &str) -> Validity {
        let word = word.trim().to_lowercase();
        let Some(url) = self.word_url(&word) else {
            warn!(base = %self.base_url, "invalid dictionary url");
            return Validity::AssumedValid;
        };

        match self.agent.get(url.as_str()).call() {
            Ok(response) => match response.into_string() {
                Ok(body) => validity_from_body(&word, &body),
                Err(e) => {
                    warn!(word = %word, error = %e, "could not read dictionary response");
                    Validity::AssumedValid
                }
            },
            Err(ureq::Error::Status(404, _)) => Validity::NotFound,
            Err(ureq::Error::Status(code, _)) => {
                warn!(word = %word, status = code, "dictionary lookup failed");
                Validity::AssumedValid
            }
            Err(ureq::Error::Transport(e)) => {
                warn!(word = %word, error = %e, "dictionary unreachable");
                Validity::AssumedValid
            }
        }
    }
}

fn validity_from_body(word: &str, body: &str) -> Validity {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(serde_json::Value::Array(entries)) if entries.is_empty() => Validity::NotFound,
        Ok(serde_json::Value::Array(_)) => {
            debug!(word = %word, "dictionary confirmed word");
            Validity::Confirmed
        }
        _ => {
            warn!(word = %word, "unexpected dictionary response");
            Validity::AssumedValid
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufRead, BufReader, Write};
    use std::net::TcpListener;
    use std::sync::mpsc;
    use std::thread;

    /// Serve one canned HTTP response and report the request line
    fn serve_once(status: &str, body: &str) -> (String, mpsc::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base = format!("http://{}/word", listener.local_addr().unwrap());
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());
            let mut request_line = String::new();
            reader.read_line(&mut request_line).unwrap();
            loop {
                let mut header = String::new();
                if reader.read_line(&mut header).unwrap() == 0 || header == "\r\n" {
                    break;
                }
            }
            stream.write_all(response.as_bytes()).unwrap();
            tx.send(request_line).unwrap();
        });

        (base, rx)
    }

    fn dictionary(base: &str) -> OnlineDictionary {
        OnlineDictionary::new(base, Duration::from_secs(5))
    }

    #[test]
    fn entries_confirm_word() {
        let (base, rx) = serve_once("200 OK", r#"[{"word":"maçã","sense":1}]"#);
        assert_eq!(dictionary(&base).check("Maçã"), Validity::Confirmed);

        let request = rx.recv().unwrap();
        assert!(request.starts_with("GET /word/ma%C3%A7%C3%A3 "), "{request}");
    }

    #[test]
    fn empty_array_is_not_found() {
        let (base, _rx) = serve_once("200 OK", "[]");
        assert_eq!(dictionary(&base).check("xyzzy"), Validity::NotFound);
    }

    #[test]
    fn missing_page_is_not_found() {
        let (base, _rx) = serve_once("404 Not Found", "");
        assert_eq!(dictionary(&base).check("xyzzy"), Validity::NotFound);
    }

    #[test]
    fn server_error_assumes_valid() {
        let (base, _rx) = serve_once("500 Internal Server Error", "");
        assert_eq!(dictionary(&base).check("casa"), Validity::AssumedValid);
    }

    #[test]
    fn malformed_body_assumes_valid() {
        let (base, _rx) = serve_once("200 OK", "<html>manutenção</html>");
        assert_eq!(dictionary(&base).check("casa"), Validity::AssumedValid);
    }

    #[test]
    fn unreachable_host_assumes_valid() {
        // Bind then drop to get a local port nobody listens on
        let port = TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let dict = OnlineDictionary::new(
            &format!("http://127.0.0.1:{port}/word"),
            Duration::from_millis(500),
        );
        assert_eq!(dict.check("casa"), Validity::AssumedValid);
    }

    #[test]
    fn invalid_base_url_assumes_valid() {
        let dict = dictionary("not a url");
        assert_eq!(dict.check("casa"), Validity::AssumedValid);
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let dict = dictionary("https://example.org/word/");
        assert_eq!(dict.base_url(), "https://example.org/word");
        assert_eq!(
            dict.word_url("pão").unwrap().as_str(),
            "https://example.org/word/p%C3%A3o"
        );
    }
}
