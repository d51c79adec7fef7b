/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod auth;
pub mod jobs;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub struct RequestConfig {
    pub server_url: String,
    pub token: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct BaseResponse<T> {
    pub error: bool,
    pub message: T,
}

pub type RequestType = reqwest::Method;

async fn parse_response<T: DeserializeOwned>(
    res: reqwest::Response,
) -> Result<BaseResponse<T>, String> {
    let bytes = res
        .bytes()
        .await
        .map_err(|e| format!("Failed to read response body: {}", e))?;

    decode_body(&bytes)
}

fn decode_body<T: DeserializeOwned>(bytes: &[u8]) -> Result<BaseResponse<T>, String> {
    match serde_json::from_slice::<BaseResponse<T>>(bytes) {
        Ok(parsed_res) => Ok(parsed_res),
        Err(_) => match serde_json::from_slice::<BaseResponse<String>>(bytes) {
            Ok(error_res) => Err(error_res.message),
            Err(_) => Err(String::from_utf8_lossy(bytes).to_string()),
        },
    }
}

fn get_client(
    config: RequestConfig,
    endpoint: String,
    request_type: RequestType,
    login: bool,
) -> Result<reqwest::RequestBuilder, String> {
    let client = reqwest::Client::new();
    let mut client = client.request(
        request_type,
        format!(
            "{}/api/{}",
            config.server_url.trim_end_matches('/'),
            endpoint
        ),
    );

    client = client.header("Content-Type", "application/json");

    let token = match config.token.filter(|token| !token.is_empty()) {
        Some(token) => token,
        None if login => {
            return Err("Token not set. Use `jobboard login` to set it.".to_string());
        }
        None => return Ok(client),
    };

    client = client.header("Authorization", format!("Bearer {}", token));

    Ok(client)
}

async fn send<T: DeserializeOwned>(
    client: reqwest::RequestBuilder,
) -> Result<BaseResponse<T>, String> {
    let res = client.send().await.map_err(|e| {
        if e.is_connect() {
            "Could not connect to server. Check `jobboard config server`.".to_string()
        } else {
            e.to_string()
        }
    })?;

    parse_response(res).await
}

pub async fn health(config: RequestConfig) -> Result<BaseResponse<String>, String> {
    send(get_client(config, "health".to_string(), RequestType::GET, false)?).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(token: Option<&str>) -> RequestConfig {
        RequestConfig {
            server_url: "http://localhost:5000/".to_string(),
            token: token.map(str::to_string),
        }
    }

    #[test]
    fn test_decode_success() {
        let res = decode_body::<Vec<u32>>(br#"{"error":false,"message":[1,2]}"#).unwrap();
        assert!(!res.error);
        assert_eq!(res.message, vec![1, 2]);
    }

    #[test]
    fn test_decode_error_envelope() {
        let err = decode_body::<Vec<u32>>(br#"{"error":true,"message":"Job not found"}"#)
            .unwrap_err();
        assert_eq!(err, "Job not found");
    }

    #[test]
    fn test_decode_raw_body() {
        let err = decode_body::<Vec<u32>>(b"Bad Gateway").unwrap_err();
        assert_eq!(err, "Bad Gateway");
    }

    #[test]
    fn test_client_requires_token_for_protected_routes() {
        assert!(get_client(config(None), "jobs".to_string(), RequestType::POST, true).is_err());
        assert!(get_client(config(Some("")), "jobs".to_string(), RequestType::POST, true).is_err());
        assert!(get_client(config(None), "jobs".to_string(), RequestType::GET, false).is_ok());
    }

    #[test]
    fn test_client_url_and_header() {
        let request = get_client(
            config(Some("abc")),
            "jobs/stats/overview".to_string(),
            RequestType::GET,
            true,
        )
        .unwrap()
        .build()
        .unwrap();

        assert_eq!(
            request.url().as_str(),
            "http://localhost:5000/api/jobs/stats/overview"
        );
        assert_eq!(
            request.headers().get("Authorization").unwrap(),
            "Bearer abc"
        );
    }
}
