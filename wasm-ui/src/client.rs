//! Backend client over the browser's fetch API.

use activity_board::{
    Activities, ActivityApi, ApiConfig, BoardError, Result, parse_activities_response,
    parse_mutation_response,
};
use gloo::net::http::{Request, Response};

/// [`ActivityApi`] backed by `gloo::net`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GlooApi {
    config: ApiConfig,
}

impl GlooApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

impl ActivityApi for GlooApi {
    async fn fetch_activities(&self) -> Result<Activities> {
        let url = self.config.activities_url();
        log::debug!("GET {url}");
        let resp = Request::get(&url).send().await.map_err(network)?;
        let (status, body) = read_body(resp).await?;
        parse_activities_response(status, &body)
    }

    async fn signup(&self, activity: &str, email: &str) -> Result<String> {
        let url = self.config.signup_url(activity, email);
        log::debug!("POST {url}");
        let resp = Request::post(&url).send().await.map_err(network)?;
        let (status, body) = read_body(resp).await?;
        parse_mutation_response(status, &body)
    }

    async fn unregister(&self, activity: &str, email: &str) -> Result<String> {
        let url = self.config.unregister_url(activity, email);
        log::debug!("DELETE {url}");
        let resp = Request::delete(&url).send().await.map_err(network)?;
        let (status, body) = read_body(resp).await?;
        parse_mutation_response(status, &body)
    }
}

async fn read_body(resp: Response) -> Result<(u16, String)> {
    let status = resp.status();
    let body = resp.text().await.map_err(network)?;
    Ok((status, body))
}

fn network(e: gloo::net::Error) -> BoardError {
    BoardError::Network(e.to_string())
}
