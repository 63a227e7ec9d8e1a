// src/scrape/snscrape.rs
//
// Real scraping capability backed by the `snscrape` command-line tool.
// Posts are read lazily as JSON lines from the child's stdout, so stopping
// early (fetch cap) just drops the stream, which kills the child.

use std::{
    cell::OnceCell,
    error::Error,
    io::{BufRead, BufReader, Lines},
    process::{Child, ChildStdout, Command, Stdio},
};

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::config::consts::SNSCRAPE_BIN;
use super::{fetch::search_query, Post, PostScraper, PostStream, SearchQuery};

#[derive(Deserialize)]
struct SnsTweet {
    date: String,
    #[serde(rename = "rawContent", alias = "content")]
    raw_content: String,
    user: Option<SnsUser>,
}

#[derive(Deserialize)]
struct SnsUser {
    #[serde(rename = "followersCount", default)]
    followers_count: u64,
}

/// Decode one `--jsonl` line into a post.
pub fn decode_line(line: &str) -> Result<Post, Box<dyn Error>> {
    let tweet: SnsTweet = serde_json::from_str(line)?;
    let timestamp = DateTime::parse_from_rfc3339(&tweet.date)
        .map_err(|e| format!("bad post date '{}': {}", tweet.date, e))?
        .with_timezone(&Utc);

    Ok(Post {
        timestamp,
        raw_text: tweet.raw_content,
        follower_count: tweet.user.map(|u| u.followers_count).unwrap_or(0),
    })
}

pub struct SnscrapeCli {
    program: String,
    available: OnceCell<bool>,
}

impl Default for SnscrapeCli {
    fn default() -> Self {
        Self::new(SNSCRAPE_BIN)
    }
}

impl SnscrapeCli {
    pub fn new(program: impl Into<String>) -> Self {
        Self { program: program.into(), available: OnceCell::new() }
    }

    fn probe(&self) -> bool {
        let ok = Command::new(&self.program)
            .arg("--version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false);
        logd!("Scrape: probe '{}' → available={}", self.program, ok);
        ok
    }
}

impl PostScraper for SnscrapeCli {
    fn name(&self) -> &str { &self.program }

    fn is_available(&self) -> bool {
        *self.available.get_or_init(|| self.probe())
    }

    fn search(&self, query: &SearchQuery) -> Result<PostStream<'_>, Box<dyn Error>> {
        let q = search_query(query);
        logd!("Scrape: {} twitter-search {}", self.program, q);

        let mut child = Command::new(&self.program)
            .arg("--jsonl")
            .arg("--max-results")
            .arg(query.limit.to_string())
            .arg("twitter-search")
            .arg(&q)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()?;

        let Some(stdout) = child.stdout.take() else {
            let _ = child.kill();
            let _ = child.wait();
            return Err("snscrape: stdout not captured".into());
        };

        Ok(Box::new(SnscrapeStream {
            child,
            lines: BufReader::new(stdout).lines(),
            done: false,
        }))
    }
}

struct SnscrapeStream {
    child: Child,
    lines: Lines<BufReader<ChildStdout>>,
    done: bool,
}

impl Iterator for SnscrapeStream {
    type Item = Result<Post, Box<dyn Error>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            match self.lines.next() {
                Some(Ok(line)) if line.trim().is_empty() => continue,
                Some(Ok(line)) => return Some(decode_line(&line)),
                Some(Err(e)) => {
                    self.done = true;
                    return Some(Err(e.into()));
                }
                None => {
                    // EOF: a failed run only shows up in the exit status.
                    self.done = true;
                    return match self.child.wait() {
                        Ok(status) if status.success() => None,
                        Ok(status) => Some(Err(format!("snscrape exited with {}", status).into())),
                        Err(e) => Some(Err(e.into())),
                    };
                }
            }
        }
    }
}

impl Drop for SnscrapeStream {
    fn drop(&mut self) {
        if let Ok(None) = self.child.try_wait() {
            let _ = self.child.kill();
        }
        let _ = self.child.wait();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_jsonl_post() {
        let line = r#"{"url":"https://x.com/a/status/1","date":"2025-11-20T18:30:00+00:00",
            "rawContent":"Vamos Fajardo","user":{"username":"a","followersCount":1234}}"#
            .replace('\n', "");
        let post = decode_line(&line).unwrap();
        assert_eq!(post.raw_text, "Vamos Fajardo");
        assert_eq!(post.follower_count, 1234);
        assert_eq!(post.timestamp.to_rfc3339(), "2025-11-20T18:30:00+00:00");
    }

    #[test]
    fn accepts_legacy_content_field_and_missing_user() {
        let line = r#"{"date":"2025-11-21T01:00:00-05:00","content":"hola"}"#;
        let post = decode_line(line).unwrap();
        assert_eq!(post.raw_text, "hola");
        assert_eq!(post.follower_count, 0);
        assert_eq!(post.timestamp.date_naive().to_string(), "2025-11-21");
    }

    #[test]
    fn rejects_garbage() {
        assert!(decode_line("not json").is_err());
        assert!(decode_line(r#"{"date":"yesterday","rawContent":"x"}"#).is_err());
    }

    #[test]
    fn missing_binary_is_unavailable() {
        let s = SnscrapeCli::new("definitely-not-a-real-snscrape-binary");
        assert!(!s.is_available());
        assert!(!s.is_available()); // cached
    }
}
