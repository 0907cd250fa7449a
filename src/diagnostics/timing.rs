//! Timing client for a running todo service.
//!
//! Waits for the liveness probe, then issues one request per endpoint concurrently and
//! records how long each took. It only talks to the public HTTP API.

use crate::domain::todo::NewTodo;
use anyhow::anyhow;
use reqwest::{Client, Method};
use std::fmt;
use std::time::{Duration, Instant};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Outcome of one timed request.
#[derive(Debug)]
pub struct Measurement {
    pub name: String,
    pub outcome: Result<(Duration, u16), String>,
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            Ok((elapsed, status)) => {
                write!(f, "{} took {:?} (status {})", self.name, elapsed, status)
            }
            Err(e) => write!(f, "{} failed: {}", self.name, e),
        }
    }
}

pub struct TimingClient {
    client: Client,
    base_url: String,
}

impl TimingClient {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Polls `/healthz` until it answers 200 or `deadline` elapses.
    pub async fn wait_until_ready(&self, deadline: Duration) -> anyhow::Result<()> {
        let started = Instant::now();
        loop {
            if let Ok(resp) = self.client.get(self.url("/healthz")).send().await {
                if resp.status().is_success() {
                    return Ok(());
                }
            }
            if started.elapsed() >= deadline {
                return Err(anyhow!(
                    "{} did not become ready within {:?}",
                    self.base_url,
                    deadline
                ));
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }

    /// Times every endpoint once, all requests in flight at the same time.
    ///
    /// `target_id` is used for the get/update/delete requests; it does not have to exist.
    pub async fn measure_all(&self, target_id: i64) -> Vec<Measurement> {
        let sample = NewTodo::new("New Todo", "This is a new todo item", false);
        let item_path = format!("/todos/{}", target_id);
        let get_name = format!("GET {}", item_path);
        let put_name = format!("PUT {}", item_path);
        let delete_name = format!("DELETE {}", item_path);

        let (list, create, get, update, delete) = tokio::join!(
            self.measure("GET /todos", Method::GET, "/todos", None),
            self.measure("POST /todos", Method::POST, "/todos", Some(&sample)),
            self.measure(&get_name, Method::GET, &item_path, None),
            self.measure(&put_name, Method::PUT, &item_path, Some(&sample)),
            self.measure(&delete_name, Method::DELETE, &item_path, None),
        );
        vec![list, create, get, update, delete]
    }

    async fn measure(
        &self,
        name: &str,
        method: Method,
        path: &str,
        body: Option<&NewTodo>,
    ) -> Measurement {
        let mut request = self.client.request(method, self.url(path));
        if let Some(body) = body {
            request = request.json(body);
        }

        let started = Instant::now();
        let outcome = match request.send().await {
            Ok(resp) => {
                let status = resp.status().as_u16();
                // Drain the body so the timing covers the whole response.
                match resp.bytes().await {
                    Ok(_) => Ok((started.elapsed(), status)),
                    Err(e) => Err(e.to_string()),
                }
            }
            Err(e) => Err(e.to_string()),
        };

        Measurement {
            name: name.to_string(),
            outcome,
        }
    }
}
